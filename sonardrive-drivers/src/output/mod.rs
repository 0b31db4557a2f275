//! Simple GPIO outputs

pub mod buzzer;
pub mod indicator;

pub use buzzer::Buzzer;
pub use indicator::IndicatorLed;
