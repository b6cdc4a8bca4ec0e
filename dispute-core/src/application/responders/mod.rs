//! Typed wrappers, one per responder.
//!
//! Each wrapper renders a fixed instruction from its input, picks the
//! configured identifier, and hands the input over as context data. The
//! facade's result is returned untouched.

mod case_manager;
mod evidence;
mod merchant;
mod resolution;
mod risk;

pub use case_manager::case_manager_instruction;
pub use evidence::evidence_instruction;
pub use merchant::merchant_instruction;
pub use resolution::resolution_instruction;
pub use risk::risk_instruction;
