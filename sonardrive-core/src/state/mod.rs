//! Session state machine
//!
//! Defines the authoritative lifecycle of one run.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
