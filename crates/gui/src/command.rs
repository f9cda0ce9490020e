//! JSON command protocol for scripted editing.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use shared::{Dimensions, TransformMode};

use crate::harness::TestHarness;

/// One step of a drag
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragStep {
    Translate { delta: [f32; 3] },
    /// Rotation about the vertical axis in degrees
    Rotate { degrees: f32 },
    Scale { factors: [f32; 3] },
}

impl DragStep {
    pub fn mode(&self) -> TransformMode {
        match self {
            DragStep::Translate { .. } => TransformMode::Translate,
            DragStep::Rotate { .. } => TransformMode::Rotate,
            DragStep::Scale { .. } => TransformMode::Scale,
        }
    }
}

/// A command the editor can execute.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum AgentCommand {
    /// Import a unit box at the requested size
    AddBox {
        dimensions: Dimensions,
        /// Box centre on X/Z after import
        #[serde(default)]
        at: Option<[f32; 2]>,
    },
    /// Import OBJ text at the requested size
    ImportObj { obj: String, dimensions: Dimensions },
    /// Select an object by ID.
    Select { id: String },
    /// Clear selection.
    Deselect,
    /// Switch gizmo mode.
    SetMode { mode: TransformMode },
    /// Run a whole drag on the selected object
    Drag { steps: Vec<DragStep> },
    /// Resize an object
    SetDimensions { id: String, dimensions: Dimensions },
    /// Inspect the scene: list all objects.
    Inspect,
    /// Export the scene as JSON.
    ExportScene,
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

fn run_drag(harness: &mut TestHarness, steps: &[DragStep]) -> Result<(), String> {
    // Checked up front so a bad step never leaves a half-applied drag
    let mode = steps.first().map(DragStep::mode);
    if steps.iter().any(|s| Some(s.mode()) != mode) {
        return Err("Drag steps must all use the same mode".to_string());
    }
    if let Some(mode) = mode {
        if harness.state.session.mode() != mode && !harness.set_mode(mode) {
            return Err("Cannot switch gizmo mode".to_string());
        }
    }
    if !harness.begin_drag() {
        return Err("Nothing selected".to_string());
    }
    for step in steps {
        let applied = match step {
            DragStep::Translate { delta } => harness.drag_translate(Vec3::from_array(*delta)),
            DragStep::Rotate { degrees } => harness.drag_rotate(*degrees),
            DragStep::Scale { factors } => harness.drag_scale(Vec3::from_array(*factors)),
        };
        if !applied {
            harness.end_drag();
            return Err("Drag step rejected".to_string());
        }
    }
    harness.end_drag();
    Ok(())
}

/// Execute a single command on the harness.
pub fn execute_command(harness: &mut TestHarness, cmd: AgentCommand) -> CommandResponse {
    match cmd {
        AgentCommand::AddBox { dimensions, at } => {
            let result = harness.add_box(dimensions.width, dimensions.height, dimensions.depth);
            match result {
                Ok(id) => {
                    if let Some([x, z]) = at {
                        harness.place(&id, x, z);
                    }
                    CommandResponse::ok_with_data(serde_json::json!({ "id": id }))
                }
                Err(e) => CommandResponse::err(e.to_string()),
            }
        }

        AgentCommand::ImportObj { obj, dimensions } => match harness.import_obj(&obj, dimensions) {
            Ok(id) => CommandResponse::ok_with_data(serde_json::json!({ "id": id })),
            Err(e) => CommandResponse::err(e.to_string()),
        },

        AgentCommand::Select { id } => {
            if harness.select(&id) {
                CommandResponse::ok_with_data(serde_json::json!({ "selected": id }))
            } else {
                CommandResponse::err(format!("Unknown object: {id}"))
            }
        }

        AgentCommand::Deselect => {
            harness.deselect();
            CommandResponse::ok()
        }

        AgentCommand::SetMode { mode } => {
            if harness.set_mode(mode) {
                CommandResponse::ok_with_data(serde_json::json!({ "mode": mode }))
            } else {
                CommandResponse::err("Select an object first")
            }
        }

        AgentCommand::Drag { steps } => match run_drag(harness, &steps) {
            Ok(()) => {
                let id = harness.selected().cloned().unwrap_or_default();
                let summary = harness.state.scene.summary(&id);
                CommandResponse::ok_with_data(serde_json::json!({ "object": summary }))
            }
            Err(e) => CommandResponse::err(e),
        },

        AgentCommand::SetDimensions { id, dimensions } => {
            match harness.set_dimensions(&id, dimensions) {
                Ok(true) => {
                    let dims = harness.dimensions(&id);
                    CommandResponse::ok_with_data(serde_json::json!({ "dimensions": dims }))
                }
                Ok(false) => CommandResponse::err(format!("Unknown object: {id}")),
                Err(e) => CommandResponse::err(e.to_string()),
            }
        }

        AgentCommand::Inspect => {
            let summary = harness.summary();
            CommandResponse::ok_with_data(serde_json::json!({
                "object_count": summary.objects.len(),
                "selected": summary.selected,
                "mode": summary.mode,
                "objects": summary.objects,
            }))
        }

        AgentCommand::ExportScene => {
            let json = harness.export_scene_json();
            CommandResponse::ok_with_data(serde_json::json!({ "scene_json": json }))
        }
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(harness: &mut TestHarness, json: &str) -> Result<CommandResponse, String> {
    let cmd: AgentCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(harness, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    harness: &mut TestHarness,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<AgentCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(harness, cmd))
        .collect())
}
