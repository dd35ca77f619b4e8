//! Application form state: fields, draft, and the step state machine

pub mod draft;
pub mod field;
pub mod wizard;

pub use draft::Draft;
pub use field::{Field, FieldErrors, FieldKind};
pub use wizard::{FormState, FormStep, Verdict};
