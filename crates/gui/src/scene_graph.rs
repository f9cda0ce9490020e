//! Node hierarchy with explicit parent references and cached world matrices.
//!
//! Nodes live in an arena and are addressed by index. World matrices are only
//! recomputed on request (`update_world_matrices`), so callers that mutate a
//! transform must force an update before reading world-space geometry.

use glam::{Mat4, Quat, Vec3};

use crate::viewport::mesh::MeshData;

/// Index of a node in the scene graph arena
pub type NodeId = usize;

/// Local transform of a node (scale, then rotation, then translation)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeTransform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl NodeTransform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

impl Default for NodeTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

pub struct SceneNode {
    pub name: String,
    pub transform: NodeTransform,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub mesh: Option<MeshData>,
    world_matrix: Mat4,
}

impl SceneNode {
    fn new(name: String, parent: Option<NodeId>) -> Self {
        Self {
            name,
            transform: NodeTransform::IDENTITY,
            parent,
            children: Vec::new(),
            mesh: None,
            world_matrix: Mat4::IDENTITY,
        }
    }

    /// World matrix as of the last `update_world_matrices` call
    pub fn world_matrix(&self) -> Mat4 {
        self.world_matrix
    }
}

#[derive(Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a node under `parent` (or as a root). An unknown parent makes it a root.
    pub fn add_node(&mut self, name: impl Into<String>, parent: Option<NodeId>) -> NodeId {
        let id = self.nodes.len();
        let parent = parent.filter(|p| *p < self.nodes.len());
        self.nodes.push(SceneNode::new(name.into(), parent));
        if let Some(p) = parent {
            self.nodes[p].children.push(id);
        }
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id)
    }

    pub fn set_mesh(&mut self, id: NodeId, mesh: MeshData) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.mesh = Some(mesh);
        }
    }

    pub fn transform(&self, id: NodeId) -> Option<NodeTransform> {
        self.nodes.get(id).map(|n| n.transform)
    }

    pub fn set_transform(&mut self, id: NodeId, transform: NodeTransform) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.transform = transform;
        }
    }

    pub fn translate(&mut self, id: NodeId, delta: Vec3) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.transform.position += delta;
        }
    }

    /// Re-attach a node. Refuses to create a cycle.
    pub fn set_parent(&mut self, id: NodeId, parent: Option<NodeId>) -> bool {
        if id >= self.nodes.len() {
            return false;
        }
        if let Some(p) = parent {
            if p >= self.nodes.len() || self.ancestors(p).any(|a| a == id) {
                return false;
            }
        }

        if let Some(old) = self.nodes[id].parent {
            self.nodes[old].children.retain(|c| *c != id);
        }
        self.nodes[id].parent = parent;
        if let Some(p) = parent {
            self.nodes[p].children.push(id);
        }
        true
    }

    /// The node itself followed by its parent chain up to the root
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(
            self.nodes.get(id).map(|_| id),
            move |current| self.nodes[*current].parent,
        )
    }

    /// The node itself and every node below it (depth-first, pre-order)
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        if id >= self.nodes.len() {
            return out;
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.nodes[current].children.iter().rev());
        }
        out
    }

    /// Recompute world matrices of `id` and its subtree from the current local transforms
    pub fn update_world_matrices(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        let parent_world = match node.parent {
            Some(p) => self.compose_world(p),
            None => Mat4::IDENTITY,
        };
        self.update_recursive(id, parent_world);
    }

    /// Recompute world matrices of every root subtree
    pub fn update_all(&mut self) {
        let roots: Vec<NodeId> = (0..self.nodes.len())
            .filter(|id| self.nodes[*id].parent.is_none())
            .collect();
        for root in roots {
            self.update_recursive(root, Mat4::IDENTITY);
        }
    }

    fn compose_world(&self, id: NodeId) -> Mat4 {
        let chain: Vec<NodeId> = self.ancestors(id).collect();
        chain
            .iter()
            .rev()
            .fold(Mat4::IDENTITY, |acc, n| acc * self.nodes[*n].transform.local_matrix())
    }

    fn update_recursive(&mut self, id: NodeId, parent_world: Mat4) {
        let world = parent_world * self.nodes[id].transform.local_matrix();
        self.nodes[id].world_matrix = world;
        let children = self.nodes[id].children.clone();
        for child in children {
            self.update_recursive(child, world);
        }
    }
}
