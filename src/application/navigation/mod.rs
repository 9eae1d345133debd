//! Navigation state machine.
//!
//! [`reduce`] is the pure transition function. [`Navigator`] owns the current
//! [`Session`](crate::domain::Session) and logs transitions.

mod action;
mod navigator;
mod reducer;

pub use action::NavAction;
pub use navigator::Navigator;
pub use reducer::reduce;
