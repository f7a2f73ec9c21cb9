//! Dialoguer terminal backend for the EcoLearn quiz flow.
//!
//! Walks the question sequence step by step in the terminal: picking an
//! option moves forward, a "go back" entry appears after the first
//! question, and the last question asks for confirmation before the
//! answers go out. A failed submission offers a manual retry, the same
//! recovery the web client gets from its re-enabled submit button.

mod backend;
pub use backend::{DialoguerWizard, WizardError};
