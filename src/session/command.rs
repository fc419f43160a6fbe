//! The session's interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a sidebar
//! button, a settings form, or a programmatic call, is represented as
//! a `SimCommand`. Consumers construct commands and pass them to
//! [`SimSession::execute`](super::SimSession::execute); the session
//! never cares *how* a command was triggered.

use crate::options::OptionsPatch;
use crate::scene::MisalignmentVariant;
use crate::treatment::TreatmentSelection;

/// A discrete operation the session can perform.
///
/// ```ignore
/// session.execute(SimCommand::SelectTreatment(TreatmentSelection::Invisalign), now);
/// session.execute(SimCommand::Zoom { delta: 1.0 }, now);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum SimCommand {
    /// Swap the active jaw model wholesale. `None` shows the aligned
    /// pose; in-flight clocks are reset before the swap applies.
    SelectVariant(Option<MisalignmentVariant>),

    /// Pick a treatment. Toggle semantics: picking the active
    /// selection clears it back to
    /// [`TreatmentSelection::None`](crate::treatment::TreatmentSelection::None).
    SelectTreatment(TreatmentSelection),

    /// Merge a partial settings patch into the live options.
    /// Unspecified fields retain their prior values.
    UpdateSettings(OptionsPatch),

    /// Zoom the turntable camera (positive = toward the arches).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },
}
