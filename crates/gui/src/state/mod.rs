pub mod actions;
pub mod dimension_dialog;
pub mod manipulation;
pub mod scene;
pub mod selection;
pub mod settings;

pub use dimension_dialog::{DialogOutcome, DimensionDialog, DimensionPurpose, DimensionRequest};
pub use manipulation::ManipulationSession;
pub use scene::{format_dimensions, row_label, short_id, ListRow, SceneObject, SceneState};
pub use selection::{HighlightBox, HighlightStyle, SelectionState};
pub use settings::AppSettings;

/// Panel visibility flags
pub struct PanelVisibility {
    pub object_list: bool,
    pub status_bar: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            object_list: true,
            status_bar: true,
        }
    }
}

/// Blocking message shown to the user until dismissed
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

/// Combined application state
pub struct AppState {
    pub scene: SceneState,
    pub selection: SelectionState,
    pub session: ManipulationSession,
    pub settings: AppSettings,
    pub panels: PanelVisibility,
    /// Width/height/depth prompt for import and edit
    pub dimension_dialog: DimensionDialog,
    /// Pending error message
    pub notice: Option<Notice>,
    /// Show settings window
    pub show_settings_window: bool,
}

impl AppState {
    pub fn with_settings(settings: AppSettings) -> Self {
        Self {
            scene: SceneState::default(),
            selection: SelectionState::default(),
            session: ManipulationSession::default(),
            settings,
            panels: PanelVisibility::default(),
            dimension_dialog: DimensionDialog::default(),
            notice: None,
            show_settings_window: false,
        }
    }

    /// A modal (dimension dialog or notice) is waiting for the user
    pub fn modal_open(&self) -> bool {
        self.dimension_dialog.is_open() || self.notice.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(AppSettings::load())
    }
}
