//! The simulation session: owner of all interactive state.
//!
//! `SimSession` is the crate's orchestrator. It owns the active
//! variant and treatment selection, the drag controller, both progress
//! clocks, the turntable camera, and the retained scene, and it is the
//! only writer of the [`PanelOutputs`] display panels read.
//!
//! Everything is single-threaded and event-driven: selection changes
//! arrive as [`SimCommand`]s, pointer input as
//! [`PointerEvent`](crate::input::PointerEvent)s, and the host's frame
//! loop calls [`SimSession::tick`] once per frame to advance the
//! clocks and rebuild the scene. A drop acceptance runs its full
//! sequence synchronously within the release event: hide the device,
//! cancel any stale counter, start the fresh counter at zero, start
//! the transform.

mod command;

pub use command::SimCommand;
use web_time::{Duration, Instant, SystemTime};

use crate::animation::{TransformAnimator, TransformPhase};
use crate::camera::TurntableCamera;
use crate::input::{DragController, DragPhase, PointerEvent, SettleSpot};
use crate::options::Options;
use crate::picking::{self, Ray};
use crate::progress::ProgressTimer;
use crate::scene::arch;
use crate::scene::{ArchOffset, MisalignmentVariant, NodeId, Scene};
use crate::treatment::{self, TreatmentRecord, TreatmentSelection};

/// Values the display panels render. Panels are pure readers of this
/// struct; they never write back into the session.
#[derive(Debug, Clone, Default)]
pub struct PanelOutputs {
    /// Info-panel sentence; empty when no treatment is selected.
    pub info_text: String,
    /// Treatment progress percentage, 0-100.
    pub progress_percent: u8,
    /// Structured record behind the measurements/timeline panels.
    pub record: Option<TreatmentRecord>,
}

/// The interaction-and-animation state machine behind the simulator.
#[derive(Debug)]
pub struct SimSession {
    options: Options,
    camera: TurntableCamera,
    variant: Option<MisalignmentVariant>,
    treatment: TreatmentSelection,
    drag: DragController,
    transform: TransformAnimator,
    progress: ProgressTimer,
    outputs: PanelOutputs,
    scene: Scene,
    /// Device group id in the current scene generation, when visible.
    device: Option<NodeId>,
    device_visible: bool,
}

impl SimSession {
    /// Create a session showing the overbite model with no treatment
    /// selected.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let mut session = Self {
            options,
            camera: TurntableCamera::new(),
            variant: Some(MisalignmentVariant::Overbite),
            treatment: TreatmentSelection::None,
            drag: DragController::new(),
            transform: TransformAnimator::new(),
            progress: ProgressTimer::new(),
            outputs: PanelOutputs::default(),
            scene: Scene::new(),
            device: None,
            device_visible: false,
        };
        session.rebuild_scene(Instant::now());
        session
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// Current settings snapshot.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Display-panel outputs.
    #[must_use]
    pub fn outputs(&self) -> &PanelOutputs {
        &self.outputs
    }

    /// The retained scene, rebuilt every frame.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The turntable camera.
    #[must_use]
    pub fn camera(&self) -> &TurntableCamera {
        &self.camera
    }

    /// Mutable camera access (viewport resize).
    pub fn camera_mut(&mut self) -> &mut TurntableCamera {
        &mut self.camera
    }

    /// Active jaw-misalignment variant, if any.
    #[must_use]
    pub fn variant(&self) -> Option<MisalignmentVariant> {
        self.variant
    }

    /// Active treatment selection.
    #[must_use]
    pub fn treatment(&self) -> TreatmentSelection {
        self.treatment
    }

    /// The drag controller (device pose and phase).
    #[must_use]
    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Phase of the alignment transform.
    #[must_use]
    pub fn transform_phase(&self) -> TransformPhase {
        self.transform.phase()
    }

    /// Whether the draggable device is currently shown.
    #[must_use]
    pub fn device_visible(&self) -> bool {
        self.device_visible
    }

    // ── Commands ────────────────────────────────────────────────────

    /// Execute a discrete command.
    pub fn execute(&mut self, cmd: SimCommand, now: Instant) {
        match cmd {
            SimCommand::SelectVariant(variant) => {
                self.select_variant(variant, now);
            }
            SimCommand::SelectTreatment(pick) => {
                self.select_treatment(pick, now);
            }
            SimCommand::UpdateSettings(patch) => {
                self.options.merge_update(&patch);
            }
            SimCommand::Zoom { delta } => self.camera.zoom(delta),
        }
    }

    /// Swap the active variant. Resets all three clocks before the new
    /// model's initial display applies.
    fn select_variant(
        &mut self,
        variant: Option<MisalignmentVariant>,
        now: Instant,
    ) {
        if variant == self.variant {
            return;
        }
        log::debug!("variant {:?} -> {:?}", self.variant, variant);
        self.reset_clocks();
        self.variant = variant;
        self.device_visible = self.treatment.is_invisalign();
        self.refresh_outputs();
        self.rebuild_scene(now);
    }

    /// Apply a treatment pick with toggle semantics, resetting the
    /// clocks first.
    fn select_treatment(&mut self, pick: TreatmentSelection, now: Instant) {
        let next = self.treatment.toggle(pick);
        log::debug!("treatment {:?} -> {:?}", self.treatment, next);
        self.reset_clocks();
        self.treatment = next;
        self.device_visible = next.is_invisalign();
        self.refresh_outputs();
        self.rebuild_scene(now);
    }

    /// Drag state → idle, transform → not started, counter → canceled.
    fn reset_clocks(&mut self) {
        self.drag.reset();
        self.transform.reset();
        self.progress.cancel();
        self.outputs.progress_percent = 0;
    }

    /// Re-derive info text and record from the current selection.
    fn refresh_outputs(&mut self) {
        let info = treatment::describe(
            self.treatment,
            self.variant,
            SystemTime::now(),
        );
        self.outputs.info_text = info.info_text;
        self.outputs.record = info.record;
        self.outputs.progress_percent = 0;
    }

    // ── Pointer input ───────────────────────────────────────────────

    /// Feed a pointer event into the drag state machine.
    pub fn handle_pointer(&mut self, event: PointerEvent, now: Instant) {
        match event {
            PointerEvent::Pressed { ray } => self.pointer_down(ray, now),
            PointerEvent::Moved { ray } => self.pointer_moved(ray, now),
            PointerEvent::Released { ray } => self.pointer_up(ray, now),
        }
    }

    fn pointer_down(&mut self, ray: Ray, now: Instant) {
        if self.device_visible
            && self.drag.press_start(ray, &self.scene, self.device)
        {
            log::debug!("aligner drag started");
        }
        self.rebuild_scene(now);
    }

    fn pointer_moved(&mut self, ray: Ray, now: Instant) {
        if self.drag.phase() == DragPhase::Dragging {
            self.drag.pointer_move(ray);
        } else if let Some(device) = self.device {
            let hovering =
                picking::hit_in_subtree(&self.scene, ray, device).is_some();
            self.drag.set_hovering(hovering);
        }
        self.rebuild_scene(now);
    }

    fn pointer_up(&mut self, ray: Ray, now: Instant) {
        let outcome = self.drag.release(ray, &self.scene);
        if outcome.hit {
            // Acceptance sequence, in order: hide device, cancel stale
            // counter, start fresh counter at zero, start transform.
            self.device_visible = false;
            self.progress.cancel();
            self.progress.start(now);
            self.outputs.progress_percent = 0;

            let mut info = treatment::describe(
                self.treatment,
                self.variant,
                SystemTime::now(),
            );
            info.info_text.push_str(" Transforming to ideal position...");
            self.outputs.info_text = info.info_text;
            self.outputs.record = info.record;

            self.transform.start(
                arch::initial_offset_for(self.variant),
                self.options.simulation.animation_speed,
                now,
            );
            log::info!("aligner drop accepted on the {:?} arch", outcome.side);
        } else if self.drag.phase()
            == DragPhase::Settled(SettleSpot::Parking)
        {
            log::debug!("aligner drop rejected, returned to parking spot");
        }
        self.rebuild_scene(now);
    }

    // ── Frame loop ──────────────────────────────────────────────────

    /// Advance all clocks and rebuild the scene. Call once per
    /// rendered frame; `dt` is the time since the previous tick.
    pub fn tick(&mut self, now: Instant, dt: Duration) {
        self.camera.tick(self.options.simulation.auto_rotate, dt);
        let _ = self.transform.update(now);

        if let Some(percent) = self.progress.poll(now) {
            self.outputs.progress_percent = percent;
            // Checkpoint completion is recomputed fresh on every
            // progress update, never mutated incrementally.
            if let Some(TreatmentRecord::Aligner { checkpoints, .. }) =
                &mut self.outputs.record
            {
                let refreshed =
                    treatment::completion_applied(checkpoints, percent);
                *checkpoints = refreshed;
            }
        }

        self.rebuild_scene(now);
    }

    /// Lower-arch offset for the current frame: the variant's initial
    /// offset until a correction starts, then the transform sample.
    fn current_offset(&self, now: Instant) -> ArchOffset {
        if self.transform.phase() == TransformPhase::NotStarted {
            arch::initial_offset_for(self.variant)
        } else {
            self.transform.sample(now)
        }
    }

    /// Rebuild the retained scene from current state. Pure function of
    /// the session's fields; cheap enough to run every frame.
    fn rebuild_scene(&mut self, now: Instant) {
        let offset = self.current_offset(now);
        self.scene.clear();
        let _arches = arch::build_arches(&mut self.scene, offset);

        self.device = None;
        match self.treatment {
            TreatmentSelection::Invisalign if self.device_visible => {
                self.device = Some(arch::build_aligner(
                    &mut self.scene,
                    self.drag.position(),
                    self.drag.scale(),
                ));
            }
            TreatmentSelection::Veneer(_) => {
                let _ = arch::build_veneer(&mut self.scene);
            }
            _ => {}
        }
    }
}
