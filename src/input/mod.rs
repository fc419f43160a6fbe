//! Platform-agnostic pointer input and the drag state machine.

mod drag;
mod event;

pub use drag::{
    DragController, DragPhase, DropOutcome, SettleSpot, HOVER_SCALE, ON_ARCH,
    PARKING_SPOT,
};
pub use event::PointerEvent;
