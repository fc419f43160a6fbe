//! Turntable camera and pointer-ray generation.
//!
//! The camera orbits the arch models on a turntable. Hosts use it two
//! ways: sampling [`TurntableCamera::eye`]/[`TurntableCamera::view_proj`]
//! to render, and [`TurntableCamera::screen_ray`] to convert pointer
//! pixels into the scene-space rays the drag controller consumes.
//! Auto-rotation is driven by the settings flag the session reads each
//! tick.

use glam::{Mat4, Vec3};
use web_time::Duration;

use crate::picking::Ray;

/// Default eye distance from the scene origin.
const DEFAULT_DISTANCE: f32 = 5.0;
/// Orbit distance clamp range.
const MIN_DISTANCE: f32 = 3.0;
const MAX_DISTANCE: f32 = 8.0;
/// Vertical field of view in degrees.
const FOVY_DEG: f32 = 50.0;
/// Near/far clipping planes.
const ZNEAR: f32 = 0.1;
const ZFAR: f32 = 100.0;
/// Turntable rate in radians per second when auto-rotate is on.
const AUTO_ROTATE_RATE: f32 = 0.25;

/// Turntable camera orbiting the scene origin.
#[derive(Debug, Clone)]
pub struct TurntableCamera {
    yaw: f32,
    distance: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
}

impl TurntableCamera {
    /// Create a camera at the default pose: straight-on at distance 5.
    #[must_use]
    pub fn new() -> Self {
        Self {
            yaw: 0.0,
            distance: DEFAULT_DISTANCE,
            aspect: 1.6,
        }
    }

    /// Current turntable angle, radians.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Eye position in world space.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        Vec3::new(
            self.distance * self.yaw.sin(),
            0.0,
            self.distance * self.yaw.cos(),
        )
    }

    /// Advance the turntable when auto-rotation is enabled.
    pub fn tick(&mut self, auto_rotate: bool, dt: Duration) {
        if auto_rotate {
            self.yaw =
                (self.yaw + AUTO_ROTATE_RATE * dt.as_secs_f32())
                    % std::f32::consts::TAU;
        }
    }

    /// Zoom toward (positive delta) or away from the arches, clamped
    /// to the orbit range.
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance - delta).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Combined view-projection matrix ([0, 1] depth range).
    #[must_use]
    pub fn view_proj(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective_rh(
            FOVY_DEG.to_radians(),
            self.aspect,
            ZNEAR,
            ZFAR,
        );
        proj * view
    }

    /// Build the scene-space ray under a pointer position.
    ///
    /// `px`/`py` are pixel coordinates with the origin at the top-left
    /// of a `viewport` of (width, height) pixels.
    #[must_use]
    pub fn screen_ray(&self, px: f32, py: f32, viewport: (f32, f32)) -> Ray {
        let (w, h) = viewport;
        if w <= 0.0 || h <= 0.0 {
            return Ray::new(self.eye(), Vec3::ZERO);
        }
        let ndc_x = 2.0 * px / w - 1.0;
        let ndc_y = 1.0 - 2.0 * py / h;

        let inv = self.view_proj().inverse();
        let near = inv.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        let far = inv.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
        Ray::new(near, far - near)
    }

    /// Physical surface size for a logical viewport at the pixel
    /// density of the active render-quality tier.
    #[must_use]
    pub fn physical_size(
        logical: (f32, f32),
        pixel_density: f32,
    ) -> (u32, u32) {
        let (w, h) = logical;
        (
            (w * pixel_density).round().max(1.0) as u32,
            (h * pixel_density).round().max(1.0) as u32,
        )
    }
}

impl Default for TurntableCamera {
    fn default() -> Self {
        Self::new()
    }
}
