// Library crate: exposes testable modules for integration tests and the JSON command interface.
// GUI-specific modules (app, ui, viewport rendering) remain in the binary crate.

pub mod command;
pub mod fixtures;
pub mod geometry;
pub mod harness;
pub mod import;
pub mod scene_graph;
pub mod snap;
pub mod state;

/// Subset of viewport types needed by the scene model (MeshData, Ray, picking).
/// Camera, gizmo and drawing stay in the binary crate.
pub mod viewport {
    pub mod mesh;
    pub mod picking;
}
