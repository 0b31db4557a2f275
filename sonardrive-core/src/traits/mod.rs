//! Hardware capability traits
//!
//! These traits are the only view the motion controller has of the
//! hardware. Implementations live in `sonardrive-drivers` (real devices)
//! and in the test modules (recording mocks).

pub mod actuator;
pub mod input;
pub mod sensor;

pub use actuator::{ActuatorGateway, TILTED_BEEPS};
pub use input::{InputGateway, NeverShutdown, ShutdownSignal};
pub use sensor::SensorGateway;
