//! CPU ray casting against scene node bounds.
//!
//! Pointer rays arrive in scene space (see
//! [`crate::camera::TurntableCamera::screen_ray`]) and are tested
//! against every node's bounding sphere. Hits are ordered by distance
//! along the ray, and drop classification always takes the *nearest*
//! hit whose ancestor chain carries an arch tag. Casting against an
//! empty scene simply yields no hits.

use glam::Vec3;

use crate::scene::{ArchSide, NodeBounds, NodeId, Scene};

/// A ray in scene space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin (typically the camera eye).
    pub origin: Vec3,
    /// Normalized direction. A zero direction never intersects
    /// anything.
    pub dir: Vec3,
}

impl Ray {
    /// Create a ray from an origin and a (not necessarily normalized)
    /// direction.
    #[must_use]
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    /// Create a ray from `origin` aimed at `target`.
    #[must_use]
    pub fn toward(origin: Vec3, target: Vec3) -> Self {
        Self::new(origin, target - origin)
    }

    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }

    /// Intersection with the plane `z = plane_z`, or `None` when the
    /// ray is parallel to the plane or the plane lies behind the
    /// origin.
    #[must_use]
    pub fn plane_z_intersection(&self, plane_z: f32) -> Option<Vec3> {
        if self.dir.z.abs() < 1e-6 {
            return None;
        }
        let t = (plane_z - self.origin.z) / self.dir.z;
        if t < 0.0 {
            return None;
        }
        Some(self.point_at(t))
    }

    /// Nearest non-negative intersection parameter with a sphere, or
    /// `None` on a miss.
    #[must_use]
    pub fn sphere_intersection(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.dir);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let sqrt_disc = disc.sqrt();
        let near = -b - sqrt_disc;
        if near >= 0.0 {
            return Some(near);
        }
        let far = -b + sqrt_disc;
        (far >= 0.0).then_some(far)
    }
}

/// A single ray/node intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Node that was hit.
    pub node: NodeId,
    /// Ray parameter at the entry point (distance along the ray).
    pub t: f32,
    /// Arch classification inherited through the node's ancestor chain.
    pub side: ArchSide,
}

/// Cast `ray` against every pickable node, nearest hit first.
#[must_use]
pub fn cast(scene: &Scene, ray: Ray) -> Vec<RayHit> {
    let mut hits: Vec<RayHit> = scene
        .iter()
        .filter_map(|(id, node)| {
            let NodeBounds::Sphere { radius } = node.bounds else {
                return None;
            };
            let center = scene.world_position(id);
            ray.sphere_intersection(center, radius * node.scale)
                .map(|t| RayHit {
                    node: id,
                    t,
                    side: scene.arch_side(id),
                })
        })
        .collect();
    hits.sort_by(|a, b| a.t.total_cmp(&b.t));
    hits
}

/// Nearest hit whose ancestor chain carries an arch tag, if any.
#[must_use]
pub fn nearest_arch_hit(scene: &Scene, ray: Ray) -> Option<RayHit> {
    cast(scene, ray)
        .into_iter()
        .find(|h| h.side != ArchSide::None)
}

/// Nearest hit inside the subtree rooted at `root` (device press
/// tests).
#[must_use]
pub fn hit_in_subtree(
    scene: &Scene,
    ray: Ray,
    root: NodeId,
) -> Option<RayHit> {
    cast(scene, ray)
        .into_iter()
        .find(|h| scene.is_descendant_of(h.node, root))
}
