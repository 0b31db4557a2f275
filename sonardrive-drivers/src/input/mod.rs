//! Operator input

pub mod button;

pub use button::StartButton;
