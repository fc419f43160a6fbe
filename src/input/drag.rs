//! Drag state machine for the aligner device.
//!
//! Tracks the device through idle → dragging → settled. While
//! dragging, every pointer move re-projects the ray onto a fixed
//! virtual plane and the device follows it directly: no smoothing,
//! no physical simulation. Release classifies the drop against the
//! arch tags in the scene: a tagged hit snaps the device onto the
//! arches, a miss returns it to its parking spot.

use glam::Vec3;

use crate::picking::{self, Ray};
use crate::scene::{ArchSide, NodeId, Scene};

/// Canonical resting position beside the arches.
pub const PARKING_SPOT: Vec3 = Vec3::new(2.5, 0.0, 0.0);
/// Canonical position once accepted onto the arches.
pub const ON_ARCH: Vec3 = Vec3::ZERO;
/// Scale-up factor while hovered (pure visual affordance).
pub const HOVER_SCALE: f32 = 1.05;
/// Z of the virtual plane the pointer is projected onto while
/// dragging.
const DRAG_PLANE_Z: f32 = 0.0;

/// Where a released device comes to rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleSpot {
    /// Snapped onto the arches after an accepted drop.
    OnArch,
    /// Returned to the parking spot after a rejected drop.
    Parking,
}

/// Drag lifecycle of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// At rest, not being manipulated.
    #[default]
    Idle,
    /// Following the pointer.
    Dragging,
    /// Released and pinned to a fixed location.
    Settled(SettleSpot),
}

/// Outcome of releasing the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropOutcome {
    /// Whether the release ray hit arch geometry.
    pub hit: bool,
    /// Arch side of the nearest tagged hit; [`ArchSide::None`] on a
    /// miss.
    pub side: ArchSide,
}

impl DropOutcome {
    /// The rejected outcome.
    const MISS: Self = Self {
        hit: false,
        side: ArchSide::None,
    };
}

/// Pointer-driven movement of the draggable aligner device.
///
/// Only one device instance is meaningful at a time; visibility is
/// owned by the session, which hides the device once a drop is
/// accepted and re-arms it when the aligner treatment is re-selected.
#[derive(Debug, Clone)]
pub struct DragController {
    phase: DragPhase,
    position: Vec3,
    hovering: bool,
}

impl DragController {
    /// Create a controller with the device idle at the parking spot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
            position: PARKING_SPOT,
            hovering: false,
        }
    }

    /// Current drag phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Current device position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current device scale (hover affordance).
    #[must_use]
    pub fn scale(&self) -> f32 {
        if self.hovering {
            HOVER_SCALE
        } else {
            1.0
        }
    }

    /// Update the hover affordance. Purely visual, no semantic effect.
    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Arm the drag if the press ray lands on the device subtree.
    /// Returns whether a drag actually started.
    pub fn press_start(
        &mut self,
        ray: Ray,
        scene: &Scene,
        device: Option<NodeId>,
    ) -> bool {
        let grabbable = matches!(
            self.phase,
            DragPhase::Idle | DragPhase::Settled(SettleSpot::Parking)
        );
        if !grabbable {
            return false;
        }
        let Some(device) = device else {
            return false;
        };
        if picking::hit_in_subtree(scene, ray, device).is_none() {
            return false;
        }
        self.phase = DragPhase::Dragging;
        true
    }

    /// Track the pointer: project the ray onto the drag plane and
    /// follow it directly. A ray parallel to the plane leaves the
    /// position unchanged.
    pub fn pointer_move(&mut self, ray: Ray) {
        if self.phase != DragPhase::Dragging {
            return;
        }
        if let Some(p) = ray.plane_z_intersection(DRAG_PLANE_Z) {
            self.position = p;
        }
    }

    /// Release the device and classify the drop.
    ///
    /// The drop is accepted iff the release ray intersects any node
    /// whose ancestor chain carries an arch tag; among tagged hits the
    /// nearest wins. An empty scene is an ordinary miss.
    pub fn release(&mut self, ray: Ray, scene: &Scene) -> DropOutcome {
        if self.phase != DragPhase::Dragging {
            return DropOutcome::MISS;
        }
        match picking::nearest_arch_hit(scene, ray) {
            Some(hit) => {
                self.phase = DragPhase::Settled(SettleSpot::OnArch);
                self.position = ON_ARCH;
                DropOutcome {
                    hit: true,
                    side: hit.side,
                }
            }
            None => {
                self.phase = DragPhase::Settled(SettleSpot::Parking);
                self.position = PARKING_SPOT;
                DropOutcome::MISS
            }
        }
    }

    /// Return the device to idle at the parking spot (re-arm on
    /// selection change).
    pub fn reset(&mut self) {
        self.phase = DragPhase::Idle;
        self.position = PARKING_SPOT;
        self.hovering = false;
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::arch;

    /// Arches at the aligned pose plus the device parked beside them.
    fn test_scene() -> (Scene, NodeId) {
        let mut scene = Scene::new();
        let _ = arch::build_arches(&mut scene, crate::scene::ArchOffset::ZERO);
        let device = arch::build_aligner(&mut scene, PARKING_SPOT, 1.0);
        (scene, device)
    }

    /// Ray from the camera position through the front of the upper
    /// arch.
    fn ray_at_arch() -> Ray {
        Ray::toward(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.5, 1.5))
    }

    /// Ray through the device's upper shell at the parking spot.
    fn ray_at_device() -> Ray {
        Ray::toward(Vec3::new(2.5, 0.5, 5.0), Vec3::new(2.5, 0.5, 1.52))
    }

    /// Ray pointing away from everything.
    fn ray_into_space() -> Ray {
        Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 1.0))
    }

    #[test]
    fn press_on_device_arms_drag() {
        let (scene, device) = test_scene();
        let mut drag = DragController::new();
        assert!(drag.press_start(ray_at_device(), &scene, Some(device)));
        assert_eq!(drag.phase(), DragPhase::Dragging);
    }

    #[test]
    fn press_elsewhere_does_not_arm() {
        let (scene, device) = test_scene();
        let mut drag = DragController::new();
        assert!(!drag.press_start(ray_at_arch(), &scene, Some(device)));
        assert!(!drag.press_start(ray_into_space(), &scene, Some(device)));
        assert!(!drag.press_start(ray_at_device(), &scene, None));
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn move_projects_onto_drag_plane() {
        let (scene, device) = test_scene();
        let mut drag = DragController::new();
        assert!(drag.press_start(ray_at_device(), &scene, Some(device)));

        let target = Vec3::new(0.7, -0.2, 0.0);
        drag.pointer_move(Ray::toward(Vec3::new(0.0, 0.0, 5.0), target));
        assert!((drag.position() - target).length() < 1e-5);

        // Parallel ray: position unchanged
        let before = drag.position();
        drag.pointer_move(Ray::new(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(1.0, 0.0, 0.0),
        ));
        assert_eq!(drag.position(), before);
    }

    #[test]
    fn move_while_not_dragging_is_ignored() {
        let mut drag = DragController::new();
        drag.pointer_move(Ray::toward(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
        ));
        assert_eq!(drag.position(), PARKING_SPOT);
    }

    #[test]
    fn release_on_arch_is_accepted() {
        let (scene, device) = test_scene();
        let mut drag = DragController::new();
        assert!(drag.press_start(ray_at_device(), &scene, Some(device)));
        drag.pointer_move(Ray::toward(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO));

        let outcome = drag.release(ray_at_arch(), &scene);
        assert!(outcome.hit);
        assert_eq!(outcome.side, ArchSide::Upper);
        assert_eq!(drag.phase(), DragPhase::Settled(SettleSpot::OnArch));
        assert_eq!(drag.position(), ON_ARCH);
    }

    #[test]
    fn release_on_background_returns_to_parking() {
        let (scene, device) = test_scene();
        let mut drag = DragController::new();
        assert!(drag.press_start(ray_at_device(), &scene, Some(device)));
        drag.pointer_move(Ray::toward(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO));

        let outcome = drag.release(ray_into_space(), &scene);
        assert!(!outcome.hit);
        assert_eq!(outcome.side, ArchSide::None);
        assert_eq!(drag.phase(), DragPhase::Settled(SettleSpot::Parking));
        assert_eq!(drag.position(), Vec3::new(2.5, 0.0, 0.0));
    }

    #[test]
    fn release_against_empty_scene_is_a_miss() {
        let (scene, device) = test_scene();
        let mut drag = DragController::new();
        assert!(drag.press_start(ray_at_device(), &scene, Some(device)));

        let empty = Scene::new();
        let outcome = drag.release(ray_at_arch(), &empty);
        assert!(!outcome.hit);
        assert_eq!(drag.phase(), DragPhase::Settled(SettleSpot::Parking));
    }

    #[test]
    fn parked_device_can_be_grabbed_again() {
        let (scene, device) = test_scene();
        let mut drag = DragController::new();
        assert!(drag.press_start(ray_at_device(), &scene, Some(device)));
        let _ = drag.release(ray_into_space(), &scene);
        assert_eq!(drag.phase(), DragPhase::Settled(SettleSpot::Parking));

        assert!(drag.press_start(ray_at_device(), &scene, Some(device)));
        assert_eq!(drag.phase(), DragPhase::Dragging);
    }

    #[test]
    fn settled_on_arch_cannot_be_grabbed() {
        let (scene, device) = test_scene();
        let mut drag = DragController::new();
        assert!(drag.press_start(ray_at_device(), &scene, Some(device)));
        let _ = drag.release(ray_at_arch(), &scene);
        assert_eq!(drag.phase(), DragPhase::Settled(SettleSpot::OnArch));

        assert!(!drag.press_start(ray_at_device(), &scene, Some(device)));
    }

    #[test]
    fn hover_scales_up_only_while_hovering() {
        let mut drag = DragController::new();
        assert_eq!(drag.scale(), 1.0);
        drag.set_hovering(true);
        assert_eq!(drag.scale(), HOVER_SCALE);
        drag.set_hovering(false);
        assert_eq!(drag.scale(), 1.0);
    }
}
