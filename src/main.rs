//! Headless scripted run of the simulator for manual inspection.
//!
//! Picks a jaw model (first CLI argument, defaulting to overbite),
//! selects the aligner treatment, drags the device onto the arches,
//! and ticks the session until both the correction and the progress
//! counter finish. Run with `RUST_LOG=debug` for the full transition
//! trace.

use std::thread;

use glam::Vec3;
use orthoviz::animation::TransformPhase;
use orthoviz::input::PointerEvent;
use orthoviz::options::Options;
use orthoviz::picking::Ray;
use orthoviz::progress::TICK_PERIOD;
use orthoviz::scene::MisalignmentVariant;
use orthoviz::session::{SimCommand, SimSession};
use orthoviz::treatment::{self, TreatmentSelection};
use web_time::Instant;

fn main() {
    env_logger::init();

    let variant = match std::env::args().nth(1) {
        // Unrecognized names fall through to the aligned pose
        Some(name) => MisalignmentVariant::parse(&name),
        None => Some(MisalignmentVariant::Overbite),
    };
    log::info!(
        "model: {}",
        variant.map_or("aligned", MisalignmentVariant::label)
    );

    let mut session = SimSession::new(Options::default());
    let start = Instant::now();
    session.execute(SimCommand::SelectVariant(variant), start);
    session.execute(
        SimCommand::SelectTreatment(TreatmentSelection::Invisalign),
        start,
    );
    log::info!("{}", session.outputs().info_text);

    // Scripted drag: grab the device at its parking spot, carry it to
    // the scene center, release over the upper arch.
    session.handle_pointer(
        PointerEvent::Pressed {
            ray: Ray::toward(
                Vec3::new(2.5, 0.5, 5.0),
                Vec3::new(2.5, 0.5, 1.52),
            ),
        },
        start,
    );
    session.handle_pointer(
        PointerEvent::Moved {
            ray: Ray::toward(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO),
        },
        start,
    );
    session.handle_pointer(
        PointerEvent::Released {
            ray: Ray::toward(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.5, 1.5)),
        },
        start,
    );

    let mut last_logged = 0;
    loop {
        thread::sleep(TICK_PERIOD);
        let now = Instant::now();
        session.tick(now, TICK_PERIOD);

        let percent = session.outputs().progress_percent;
        if percent >= last_logged + 10 {
            last_logged = percent - percent % 10;
            log::info!("treatment progress: {percent}%");
        }

        if percent == 100
            && session.transform_phase() == TransformPhase::Complete
        {
            break;
        }
    }

    log::info!("{}", session.outputs().info_text);
    if let Some(record) = &session.outputs().record {
        for row in treatment::measurements(record) {
            log::info!("{}: {}", row.label, row.value);
        }
    }
}
