//! Gizmo session: active mode, drag flag, camera-orbit gating.

use glam::Vec3;
use shared::{ObjectId, TransformMode};

#[derive(Debug, Default)]
pub struct ManipulationSession {
    mode: TransformMode,
    dragging: bool,
    /// Object the gizmo is attached to
    attached: Option<ObjectId>,
    /// Root position when the drag began
    origin: Vec3,
    /// Sum of the gizmo's translate deltas since the drag began
    offset: Vec3,
}

impl ManipulationSession {
    pub fn mode(&self) -> TransformMode {
        self.mode
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Camera orbit is disabled for the whole duration of a drag
    pub fn orbit_enabled(&self) -> bool {
        !self.dragging
    }

    /// True while a translate drag is running
    pub fn translate_drag(&self) -> bool {
        self.dragging && self.mode == TransformMode::Translate
    }

    pub fn attached(&self) -> Option<&ObjectId> {
        self.attached.as_ref()
    }

    pub fn attach(&mut self, id: ObjectId) {
        self.attached = Some(id);
        self.mode = TransformMode::Translate;
    }

    pub fn detach(&mut self) {
        self.attached = None;
    }

    /// Switch mode. Refused during a drag or with nothing attached.
    pub fn set_mode(&mut self, mode: TransformMode) -> bool {
        if self.dragging || self.attached.is_none() {
            return false;
        }
        self.mode = mode;
        true
    }

    /// Start a drag from the attached object's position `origin`.
    /// Refused with nothing attached or a drag already running.
    pub fn begin(&mut self, origin: Vec3) -> bool {
        if self.dragging || self.attached.is_none() {
            return false;
        }
        self.dragging = true;
        self.origin = origin;
        self.offset = Vec3::ZERO;
        true
    }

    /// Add a translate delta and return the unsnapped target position
    pub fn drag_by(&mut self, delta: Vec3) -> Vec3 {
        self.offset += delta;
        self.origin + self.offset
    }

    /// Finish a drag, returning whether one was running
    pub fn end(&mut self) -> bool {
        std::mem::replace(&mut self.dragging, false)
    }
}
