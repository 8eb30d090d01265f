//! Types shared by both form intakes

pub mod form_kind;
pub mod form_phase;
pub mod intake;

// Re-exports
pub use form_kind::FormKind;
pub use form_phase::{FormEvent, FormPhase};
pub use intake::{submit, IntakeForm, Submission, SubmitOutcome};
