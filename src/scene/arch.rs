//! Procedural arch geometry and jaw-misalignment variants.
//!
//! Both arches share one angular tooth layout on a fixed-radius arc;
//! only the lower arch's rigid offset differs between variants. The
//! horseshoe base surface is approximated by a run of bounding-sphere
//! segments along the arc so ray tests land where the rendered torus
//! would be.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;

use super::{ArchSide, NodeId, Scene, SceneNode};

// ---------------------------------------------------------------------------
// Variants and offsets
// ---------------------------------------------------------------------------

/// Jaw-misalignment variant driving the lower arch's initial offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MisalignmentVariant {
    /// Lower arch recessed along the depth axis.
    Overbite,
    /// Lower arch protruding along the depth axis.
    Underbite,
    /// Lower arch shifted along the lateral axis.
    Crossbite,
}

impl MisalignmentVariant {
    /// Every selectable variant, in sidebar order.
    pub const ALL: [Self; 3] =
        [Self::Overbite, Self::Underbite, Self::Crossbite];

    /// Initial lower-arch displacement for this variant. The ideal
    /// (corrected) offset is [`ArchOffset::ZERO`] for every variant.
    #[must_use]
    pub fn initial_offset(self) -> ArchOffset {
        match self {
            Self::Overbite => ArchOffset {
                depth: -0.3,
                lateral: 0.0,
            },
            Self::Underbite => ArchOffset {
                depth: 0.3,
                lateral: 0.0,
            },
            Self::Crossbite => ArchOffset {
                depth: 0.0,
                lateral: 0.2,
            },
        }
    }

    /// Lowercase display name ("overbite", ...).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overbite => "overbite",
            Self::Underbite => "underbite",
            Self::Crossbite => "crossbite",
        }
    }

    /// Parse a variant from its display name, case-insensitively.
    /// Unrecognized names yield `None`, which callers treat as the
    /// aligned pose rather than an error.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "overbite" => Some(Self::Overbite),
            "underbite" => Some(Self::Underbite),
            "crossbite" => Some(Self::Crossbite),
            _ => None,
        }
    }
}

/// Displacement of the lower arch from the aligned pose.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ArchOffset {
    /// Forward/backward displacement along the depth (Z) axis.
    pub depth: f32,
    /// Side-to-side displacement along the lateral (X) axis.
    pub lateral: f32,
}

impl ArchOffset {
    /// The aligned pose; identical for every variant.
    pub const ZERO: Self = Self {
        depth: 0.0,
        lateral: 0.0,
    };

    /// Linear interpolation toward `target`; both components use the
    /// same fraction and land exactly on `target` at `t = 1`.
    #[must_use]
    pub fn lerp(self, target: Self, t: f32) -> Self {
        Self {
            depth: self.depth + (target.depth - self.depth) * t,
            lateral: self.lateral + (target.lateral - self.lateral) * t,
        }
    }

    /// World-space translation of the offset (lateral on X, depth on Z).
    #[must_use]
    pub fn to_translation(self) -> Vec3 {
        Vec3::new(self.lateral, 0.0, self.depth)
    }
}

/// Initial offset for an optional variant; an absent (or unrecognized)
/// variant degrades to the aligned pose.
#[must_use]
pub fn initial_offset_for(variant: Option<MisalignmentVariant>) -> ArchOffset {
    variant.map_or(ArchOffset::ZERO, MisalignmentVariant::initial_offset)
}

// ---------------------------------------------------------------------------
// Layout constants
// ---------------------------------------------------------------------------

/// Arc radius of the upper arch.
const UPPER_ARC_RADIUS: f32 = 1.5;
/// Arc radius of the lower arch.
const LOWER_ARC_RADIUS: f32 = 1.3;
/// Height of the upper arch group.
const UPPER_ARCH_Y: f32 = 0.5;
/// Height of the lower arch group.
const LOWER_ARCH_Y: f32 = -0.5;

/// Number of front teeth per arch.
const FRONT_TOOTH_COUNT: usize = 6;
/// Center slot of the front-teeth fan.
const FRONT_CENTER_INDEX: f32 = 2.5;
/// Angular spacing between adjacent front teeth, radians.
const FRONT_ANGULAR_STEP: f32 = 0.15;
/// Number of molars per side.
const MOLAR_COUNT: usize = 3;
/// Angular spacing between adjacent molars, radians.
const MOLAR_ANGULAR_STEP: f32 = 0.2;

/// Bounding radius of a single tooth primitive.
const TOOTH_BOUND_RADIUS: f32 = 0.3;
/// Segments approximating each horseshoe base surface.
const ARC_SEGMENT_COUNT: usize = 8;

/// Device shell radii mirror the arches they clip onto, slightly
/// oversized.
const ALIGNER_UPPER_RADIUS: f32 = 1.52;
const ALIGNER_LOWER_RADIUS: f32 = 1.32;
/// Veneer overlay sits just proud of the upper arch surface.
const VENEER_ARC_RADIUS: f32 = 1.51;

/// Ids of the two arch groups produced by [`build_arches`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchIds {
    /// The static upper arch group.
    pub upper: NodeId,
    /// The repositionable lower arch group.
    pub lower: NodeId,
}

// ---------------------------------------------------------------------------
// Angular layout
// ---------------------------------------------------------------------------

/// Arc angle of front tooth `i`.
fn front_angle(i: usize) -> f32 {
    FRAC_PI_2 - (i as f32 - FRONT_CENTER_INDEX) * FRONT_ANGULAR_STEP
}

/// Arc angle of left molar `i`.
fn left_molar_angle(i: usize) -> f32 {
    FRAC_PI_2 + (i as f32 + 1.0) * MOLAR_ANGULAR_STEP
}

/// Arc angle of right molar `i`.
fn right_molar_angle(i: usize) -> f32 {
    FRAC_PI_2 - (i as f32 + 3.5) * MOLAR_ANGULAR_STEP
}

/// Position on the arc at `angle` for a given radius.
fn arc_position(radius: f32, angle: f32) -> Vec3 {
    Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
}

/// Outward-facing yaw along the arc tangent at `angle`.
fn outward_yaw(angle: f32) -> f32 {
    FRAC_PI_2 - angle
}

/// Spawn the bounding-sphere run approximating a half-torus base
/// surface under `parent`.
fn add_arc_segments(
    scene: &mut Scene,
    parent: NodeId,
    name_prefix: &str,
    ring_radius: f32,
    segment_radius: f32,
) {
    for k in 0..ARC_SEGMENT_COUNT {
        let angle = PI * (k as f32 + 0.5) / ARC_SEGMENT_COUNT as f32;
        let _ = scene.add_child(
            parent,
            SceneNode::group(format!("{name_prefix}-{k}"))
                .at(arc_position(ring_radius, angle))
                .bounded(segment_radius),
        );
    }
}

/// Spawn one arch's teeth (6 front + 3+3 molars) under `parent`.
fn add_teeth(scene: &mut Scene, parent: NodeId, prefix: &str, radius: f32) {
    for i in 0..FRONT_TOOTH_COUNT {
        let angle = front_angle(i);
        let _ = scene.add_child(
            parent,
            SceneNode::group(format!("{prefix}-front-{i}"))
                .at(arc_position(radius, angle))
                .facing(outward_yaw(angle))
                .bounded(TOOTH_BOUND_RADIUS),
        );
    }
    for i in 0..MOLAR_COUNT {
        let angle = left_molar_angle(i);
        let _ = scene.add_child(
            parent,
            SceneNode::group(format!("{prefix}-molar-left-{i}"))
                .at(arc_position(radius, angle))
                .facing(outward_yaw(angle))
                .bounded(TOOTH_BOUND_RADIUS),
        );
    }
    for i in 0..MOLAR_COUNT {
        let angle = right_molar_angle(i);
        let _ = scene.add_child(
            parent,
            SceneNode::group(format!("{prefix}-molar-right-{i}"))
                .at(arc_position(radius, angle))
                .facing(outward_yaw(angle))
                .bounded(TOOTH_BOUND_RADIUS),
        );
    }
}

/// Build both arch groups. The tooth layout is identical across
/// variants; `lower_offset` is the lower arch's current rigid
/// displacement (the variant's initial offset, or the transform
/// clock's sample while a correction is in flight).
pub fn build_arches(scene: &mut Scene, lower_offset: ArchOffset) -> ArchIds {
    let upper = scene.add(
        SceneNode::group("upperTeeth")
            .at(Vec3::new(0.0, UPPER_ARCH_Y, 0.0))
            .tagged(ArchSide::Upper),
    );
    add_arc_segments(scene, upper, "upperTeeth-arch", UPPER_ARC_RADIUS, 0.55);
    add_teeth(scene, upper, "upperTeeth", UPPER_ARC_RADIUS);

    let lower = scene.add(
        SceneNode::group("lowerTeeth")
            .at(Vec3::new(0.0, LOWER_ARCH_Y, 0.0) + lower_offset.to_translation())
            .tagged(ArchSide::Lower),
    );
    add_arc_segments(scene, lower, "lowerTeeth-arch", LOWER_ARC_RADIUS, 0.5);
    add_teeth(scene, lower, "lowerTeeth", LOWER_ARC_RADIUS);

    ArchIds { upper, lower }
}

/// Build the draggable aligner device at `position`: an upper and lower
/// translucent shell pair. `scale` is the hover affordance factor.
pub fn build_aligner(scene: &mut Scene, position: Vec3, scale: f32) -> NodeId {
    let device =
        scene.add(SceneNode::group("aligner").at(position).scaled(scale));

    let upper_shell = scene.add_child(
        device,
        SceneNode::group("aligner-upper").at(Vec3::new(0.0, UPPER_ARCH_Y, 0.0)),
    );
    add_arc_segments(
        scene,
        upper_shell,
        "aligner-upper-shell",
        ALIGNER_UPPER_RADIUS,
        0.55,
    );

    let lower_shell = scene.add_child(
        device,
        SceneNode::group("aligner-lower").at(Vec3::new(0.0, LOWER_ARCH_Y, 0.0)),
    );
    add_arc_segments(
        scene,
        lower_shell,
        "aligner-lower-shell",
        ALIGNER_LOWER_RADIUS,
        0.5,
    );

    device
}

/// Build the veneer overlay: an arch surface plus one facet per front
/// tooth, floating just proud of the upper arch. Untagged, so it never
/// participates in drop classification.
pub fn build_veneer(scene: &mut Scene) -> NodeId {
    let overlay = scene.add(
        SceneNode::group("veneer").at(Vec3::new(0.0, UPPER_ARCH_Y, 0.0)),
    );
    add_arc_segments(
        scene,
        overlay,
        "veneer-arch",
        VENEER_ARC_RADIUS,
        0.55,
    );
    for i in 0..FRONT_TOOTH_COUNT {
        let angle = front_angle(i);
        let _ = scene.add_child(
            overlay,
            SceneNode::group(format!("veneer-facet-{i}"))
                .at(arc_position(VENEER_ARC_RADIUS, angle))
                .facing(outward_yaw(angle))
                .bounded(TOOTH_BOUND_RADIUS),
        );
    }
    overlay
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn initial_offsets_per_variant() {
        assert_eq!(
            MisalignmentVariant::Overbite.initial_offset(),
            ArchOffset {
                depth: -0.3,
                lateral: 0.0
            }
        );
        assert_eq!(
            MisalignmentVariant::Underbite.initial_offset(),
            ArchOffset {
                depth: 0.3,
                lateral: 0.0
            }
        );
        assert_eq!(
            MisalignmentVariant::Crossbite.initial_offset(),
            ArchOffset {
                depth: 0.0,
                lateral: 0.2
            }
        );
    }

    #[test]
    fn unknown_variant_degrades_to_aligned() {
        assert_eq!(MisalignmentVariant::parse("openbite"), None);
        assert_eq!(initial_offset_for(None), ArchOffset::ZERO);
        assert_eq!(
            initial_offset_for(MisalignmentVariant::parse("not-a-bite")),
            ArchOffset::ZERO
        );
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            MisalignmentVariant::parse("Overbite"),
            Some(MisalignmentVariant::Overbite)
        );
        assert_eq!(
            MisalignmentVariant::parse("CROSSBITE"),
            Some(MisalignmentVariant::Crossbite)
        );
    }

    #[test]
    fn lower_group_carries_variant_offset() {
        for variant in MisalignmentVariant::ALL {
            let mut scene = Scene::new();
            let ids = build_arches(&mut scene, variant.initial_offset());
            let offset = variant.initial_offset();

            let pos = scene.world_position(ids.lower);
            assert!((pos.x - offset.lateral).abs() < EPSILON);
            assert!((pos.y - LOWER_ARCH_Y).abs() < EPSILON);
            assert!((pos.z - offset.depth).abs() < EPSILON);

            // Upper arch never moves
            let upper_pos = scene.world_position(ids.upper);
            assert_eq!(upper_pos, Vec3::new(0.0, UPPER_ARCH_Y, 0.0));
        }
    }

    #[test]
    fn full_correction_reaches_aligned_pose() {
        let initial = MisalignmentVariant::Overbite.initial_offset();
        let corrected = initial.lerp(ArchOffset::ZERO, 1.0);
        assert_eq!(corrected, ArchOffset::ZERO);

        let mut scene = Scene::new();
        let ids = build_arches(&mut scene, corrected);
        assert_eq!(
            scene.world_position(ids.lower),
            Vec3::new(0.0, LOWER_ARCH_Y, 0.0)
        );
    }

    #[test]
    fn tooth_layout_is_symmetric() {
        let mut scene = Scene::new();
        let _ = build_arches(&mut scene, ArchOffset::ZERO);

        let left = scene.find("upperTeeth-front-0").map(|id| {
            scene.world_position(id)
        });
        let right = scene.find("upperTeeth-front-5").map(|id| {
            scene.world_position(id)
        });
        let (left, right) = (left.unwrap(), right.unwrap());

        // Mirrored about the depth axis, same height and depth
        assert!((left.x + right.x).abs() < 1e-5);
        assert!((left.y - right.y).abs() < EPSILON);
        assert!((left.z - right.z).abs() < 1e-5);
    }

    #[test]
    fn arch_node_census() {
        let mut scene = Scene::new();
        let _ = build_arches(&mut scene, ArchOffset::ZERO);
        // Per arch: 1 group + 8 base segments + 6 front + 3 + 3 molars
        assert_eq!(scene.len(), 2 * (1 + ARC_SEGMENT_COUNT + 12));
    }

    #[test]
    fn teeth_inherit_arch_tag() {
        let mut scene = Scene::new();
        let _ = build_arches(&mut scene, ArchOffset::ZERO);
        let tooth = scene.find("lowerTeeth-molar-left-2").unwrap();
        assert_eq!(scene.arch_side(tooth), ArchSide::Lower);
        let segment = scene.find("upperTeeth-arch-3").unwrap();
        assert_eq!(scene.arch_side(segment), ArchSide::Upper);
    }

    #[test]
    fn aligner_and_veneer_are_untagged() {
        let mut scene = Scene::new();
        let device = build_aligner(&mut scene, Vec3::new(2.5, 0.0, 0.0), 1.0);
        assert_eq!(scene.arch_side(device), ArchSide::None);

        let overlay = build_veneer(&mut scene);
        assert_eq!(scene.arch_side(overlay), ArchSide::None);
        let facet = scene.find("veneer-facet-0").unwrap();
        assert_eq!(scene.arch_side(facet), ArchSide::None);
    }

    #[test]
    fn aligner_shells_track_device_position() {
        let mut scene = Scene::new();
        let device = build_aligner(&mut scene, Vec3::new(2.5, 0.0, 0.0), 1.0);
        assert_eq!(
            scene.world_position(device),
            Vec3::new(2.5, 0.0, 0.0)
        );
        let upper_shell = scene.find("aligner-upper").unwrap();
        assert_eq!(
            scene.world_position(upper_shell),
            Vec3::new(2.5, UPPER_ARCH_Y, 0.0)
        );
    }
}
