//! Object registry
//!
//! Insertion-ordered objects on top of the scene graph. Every registered
//! object owns exactly one highlight box and one list row.

mod dimension_ops;
mod display;
mod import_ops;
mod transform_ops;

pub use display::{format_dimensions, row_label, short_id, ListRow};

use glam::{EulerRot, Vec3};
use shared::{Dimensions, ObjectId, ObjectSummary, Transform};

use crate::geometry::{self, Aabb};
use crate::scene_graph::{NodeId, SceneGraph};
use crate::state::selection::HighlightBox;

/// Smallest natural size used as a scale reference on a degenerate axis
pub const MIN_NATURAL_SIZE: f32 = 1e-6;

/// A placed mesh instance
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    /// Registered root node in the scene graph
    pub root: NodeId,
    /// Unscaled size captured at import; scale factors are relative to it
    pub initial_size: Vec3,
    pub highlight: HighlightBox,
    pub row: ListRow,
}

/// Scene graph plus the registry of objects placed in it
#[derive(Default)]
pub struct SceneState {
    pub graph: SceneGraph,
    objects: Vec<SceneObject>,
    /// Sequence number for the next `Object N` name
    next_index: usize,
    /// Monotonically increasing version counter for UI change detection
    pub(crate) version: u64,
}

impl SceneState {
    /// Current scene version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.objects.iter().any(|o| o.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn ids(&self) -> Vec<ObjectId> {
        self.objects.iter().map(|o| o.id.clone()).collect()
    }

    /// Find the registered object a node belongs to by walking its parent chain
    pub fn registered_root_of(&self, node: NodeId) -> Option<&ObjectId> {
        self.graph
            .ancestors(node)
            .find_map(|n| self.objects.iter().find(|o| o.root == n))
            .map(|o| &o.id)
    }

    /// World-space box of an object (forces a world-matrix update)
    pub fn bounding_box(&mut self, id: &str) -> Option<Aabb> {
        let root = self.get(id)?.root;
        Some(geometry::bounding_box(&mut self.graph, root))
    }

    /// Current width, height, depth of an object
    pub fn dimensions(&mut self, id: &str) -> Option<Dimensions> {
        let size = self.bounding_box(id)?.size();
        Some(Dimensions::new(size.x as f64, size.y as f64, size.z as f64))
    }

    /// Boxes of every object except `exclude`, in registry order
    pub fn boxes_except(&mut self, exclude: &str) -> Vec<(ObjectId, Aabb)> {
        let others: Vec<(ObjectId, NodeId)> = self
            .objects
            .iter()
            .filter(|o| o.id != exclude)
            .map(|o| (o.id.clone(), o.root))
            .collect();
        others
            .into_iter()
            .map(|(id, root)| (id, geometry::bounding_box(&mut self.graph, root)))
            .collect()
    }

    /// Recompute the cached extents of an object's highlight box
    pub fn refresh_highlight(&mut self, id: &str) {
        let Some(aabb) = self.bounding_box(id) else {
            return;
        };
        if let Some(obj) = self.get_mut(id) {
            obj.highlight.extents = aabb;
        }
    }

    /// Recompute an object's list label from its current dimensions
    pub fn refresh_row(&mut self, id: &str, precision: usize) {
        let Some(dims) = self.dimensions(id) else {
            return;
        };
        if let Some(obj) = self.get_mut(id) {
            obj.row.label = row_label(&obj.name, dims, precision);
            self.version += 1;
        }
    }

    /// Snapshot of one object for inspection and export
    pub fn summary(&mut self, id: &str) -> Option<ObjectSummary> {
        let aabb = self.bounding_box(id)?;
        let obj = self.get(id)?;
        let t = self.graph.transform(obj.root)?;
        let (rx, ry, rz) = t.rotation.to_euler(EulerRot::XYZ);
        let size = aabb.size();
        Some(ObjectSummary {
            id: obj.id.clone(),
            name: obj.name.clone(),
            transform: Transform {
                position: t.position.to_array().map(|v| v as f64),
                rotation: [rx, ry, rz].map(|r| (r as f64).to_degrees()),
                scale: t.scale.to_array().map(|v| v as f64),
            },
            dimensions: Dimensions::new(size.x as f64, size.y as f64, size.z as f64),
            initial_size: Dimensions::new(
                obj.initial_size.x as f64,
                obj.initial_size.y as f64,
                obj.initial_size.z as f64,
            ),
            min_y: aabb.min.y as f64,
        })
    }

    fn next_name(&mut self) -> String {
        self.next_index += 1;
        format!("Object {}", self.next_index)
    }
}
