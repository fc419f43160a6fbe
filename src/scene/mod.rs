//! Retained scene graph: flat node storage with parent links and typed
//! arch tags.
//!
//! The scene is cheap to rebuild and the session does so every frame;
//! it is a pure function of the current variant, transform sample,
//! treatment selection, and device pose. Nodes carry bounding spheres
//! for CPU ray tests (see [`crate::picking`]) and an [`ArchSide`] tag
//! that drop classification resolves through the ancestor chain.

pub mod arch;
mod node;

use glam::Vec3;
pub use node::{ArchSide, NodeBounds, NodeId, SceneNode};
use rustc_hash::FxHashMap;

pub use self::arch::{ArchIds, ArchOffset, MisalignmentVariant};

/// The retained scene. Owns all nodes in a flat list with parent links.
#[derive(Debug, Default)]
pub struct Scene {
    /// Nodes in insertion order; a parent always precedes its children.
    nodes: Vec<SceneNode>,
    /// Name lookup for debugging and tests.
    by_name: FxHashMap<String, NodeId>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every node. Ids issued before the clear are invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.by_name.clear();
    }

    /// Number of nodes in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a root-level node and return its id.
    pub fn add(&mut self, node: SceneNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let _ = self.by_name.insert(node.name.clone(), id);
        self.nodes.push(node);
        id
    }

    /// Add a node parented under `parent` and return its id.
    pub fn add_child(&mut self, parent: NodeId, node: SceneNode) -> NodeId {
        self.add(SceneNode {
            parent: Some(parent),
            ..node
        })
    }

    /// Look up a node by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.index())
    }

    /// Find a node by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Iterate over all nodes with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    /// World-space position of a node (translations composed up the
    /// parent chain).
    #[must_use]
    pub fn world_position(&self, id: NodeId) -> Vec3 {
        let mut pos = Vec3::ZERO;
        let mut cur = Some(id);
        while let Some(nid) = cur {
            let Some(node) = self.node(nid) else { break };
            pos += node.local_position;
            cur = node.parent;
        }
        pos
    }

    /// Arch classification of a node: the first non-[`ArchSide::None`]
    /// tag found walking from the node up its ancestor chain.
    #[must_use]
    pub fn arch_side(&self, id: NodeId) -> ArchSide {
        let mut cur = Some(id);
        while let Some(nid) = cur {
            let Some(node) = self.node(nid) else { break };
            if node.side != ArchSide::None {
                return node.side;
            }
            cur = node.parent;
        }
        ArchSide::None
    }

    /// Whether `id` is `ancestor` itself or lies in its subtree.
    #[must_use]
    pub fn is_descendant_of(&self, id: NodeId, ancestor: NodeId) -> bool {
        let mut cur = Some(id);
        while let Some(nid) = cur {
            if nid == ancestor {
                return true;
            }
            cur = self.node(nid).and_then(|n| n.parent);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_position_composes_translations() {
        let mut scene = Scene::new();
        let root = scene
            .add(SceneNode::group("root").at(Vec3::new(1.0, 0.0, 0.0)));
        let child = scene.add_child(
            root,
            SceneNode::group("child").at(Vec3::new(0.0, 2.0, 0.0)),
        );
        let leaf = scene.add_child(
            child,
            SceneNode::group("leaf").at(Vec3::new(0.0, 0.0, 3.0)),
        );

        assert_eq!(scene.world_position(leaf), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn arch_side_inherits_from_ancestors() {
        let mut scene = Scene::new();
        let group =
            scene.add(SceneNode::group("lowerTeeth").tagged(ArchSide::Lower));
        let tooth = scene
            .add_child(group, SceneNode::group("lowerTeeth-front-0"));

        assert_eq!(scene.arch_side(tooth), ArchSide::Lower);
        assert_eq!(scene.arch_side(group), ArchSide::Lower);
    }

    #[test]
    fn untagged_chain_is_no_side() {
        let mut scene = Scene::new();
        let group = scene.add(SceneNode::group("environment"));
        let leaf = scene.add_child(group, SceneNode::group("backdrop"));
        assert_eq!(scene.arch_side(leaf), ArchSide::None);
    }

    #[test]
    fn descendant_walk() {
        let mut scene = Scene::new();
        let a = scene.add(SceneNode::group("a"));
        let b = scene.add_child(a, SceneNode::group("b"));
        let c = scene.add_child(b, SceneNode::group("c"));
        let other = scene.add(SceneNode::group("other"));

        assert!(scene.is_descendant_of(c, a));
        assert!(scene.is_descendant_of(b, a));
        assert!(scene.is_descendant_of(a, a));
        assert!(!scene.is_descendant_of(other, a));
        assert!(!scene.is_descendant_of(a, c));
    }

    #[test]
    fn clear_invalidates_lookup() {
        let mut scene = Scene::new();
        let _ = scene.add(SceneNode::group("root"));
        assert!(scene.find("root").is_some());
        scene.clear();
        assert!(scene.is_empty());
        assert!(scene.find("root").is_none());
    }
}
