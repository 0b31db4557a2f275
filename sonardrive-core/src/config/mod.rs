//! Configuration types
//!
//! Compile-time robot constants, validated once at startup.

pub mod robot;

pub use robot::*;
