use glam::Vec3;

/// Which dental arch a scene node belongs to.
///
/// Assigned to group nodes at construction time; children inherit the
/// tag through [`Scene::arch_side`](super::Scene::arch_side). Drop
/// classification is a tag lookup, never a name-string match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArchSide {
    /// The static upper arch.
    Upper,
    /// The repositionable lower arch.
    Lower,
    /// Not part of an arch (aligner device, veneer overlay, environment).
    #[default]
    None,
}

/// Identifier of a node within a [`Scene`](super::Scene).
///
/// Valid only for the scene generation it was issued by; the session
/// rebuilds the scene every frame and re-resolves the ids it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(super) u32);

impl NodeId {
    pub(super) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Bounding primitive used for CPU ray tests.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NodeBounds {
    /// No pickable geometry (pure grouping node).
    #[default]
    Empty,
    /// Sphere centered on the node's world position.
    Sphere {
        /// Bounding radius in scene units.
        radius: f32,
    },
}

/// A node in the scene graph.
///
/// The hierarchy composes translations only; `yaw` is the cosmetic
/// outward-facing orientation of tooth primitives along the arc
/// tangent and does not rotate children.
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Display name ("lowerTeeth-front-3", "aligner", ...), kept for
    /// logging and debugging.
    pub name: String,
    /// Parent node, `None` for roots.
    pub parent: Option<NodeId>,
    /// Translation relative to the parent.
    pub local_position: Vec3,
    /// Orientation about the Y axis, radians.
    pub yaw: f32,
    /// Uniform scale factor (hover affordance on the device).
    pub scale: f32,
    /// Arch membership tag assigned at construction.
    pub side: ArchSide,
    /// Pickable bounds.
    pub bounds: NodeBounds,
}

impl SceneNode {
    /// A grouping node with no pickable geometry.
    #[must_use]
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            local_position: Vec3::ZERO,
            yaw: 0.0,
            scale: 1.0,
            side: ArchSide::None,
            bounds: NodeBounds::Empty,
        }
    }

    /// Place the node at `position` relative to its parent.
    #[must_use]
    pub fn at(mut self, position: Vec3) -> Self {
        self.local_position = position;
        self
    }

    /// Face the node along `yaw` radians about the Y axis.
    #[must_use]
    pub fn facing(mut self, yaw: f32) -> Self {
        self.yaw = yaw;
        self
    }

    /// Tag the node with an arch side.
    #[must_use]
    pub fn tagged(mut self, side: ArchSide) -> Self {
        self.side = side;
        self
    }

    /// Give the node a pickable bounding sphere.
    #[must_use]
    pub fn bounded(mut self, radius: f32) -> Self {
        self.bounds = NodeBounds::Sphere { radius };
        self
    }

    /// Apply a uniform scale factor.
    #[must_use]
    pub fn scaled(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}
