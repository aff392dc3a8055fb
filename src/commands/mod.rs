//! Presentation adapter: the calls a UI host makes.
//!
//! Takes raw form values, runs the domain flows against `CoreState` and
//! returns view models ready to render. Errors come back as user-facing
//! strings.

pub mod appointment;
pub mod assessment;
pub mod chat;
