//! Persisted console state.
//!
//! The analogue of a long-lived dashboard's in-page state: the operator's
//! current selection and the rolling action log survive between console
//! invocations via the state repository.

mod model;
mod repository;

pub use model::ConsoleState;
pub use repository::StateRepository;
