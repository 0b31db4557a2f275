//! SonarDrive - Range-and-Go Rover Firmware
//!
//! Main firmware binary for an RP2040-based two-wheeled rover. Each
//! session measures the distance to an obstacle, drives that far on two
//! steppers and stops early if the chassis tilts.
//!
//! Everything runs on the main task: the session loop owns all hardware
//! and nothing else is spawned.

#![no_std]
#![no_main]

use defmt::*;
use embassy_embedded_hal::shared_bus::asynch::i2c::I2cDevice;
use embassy_executor::Spawner;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use sonardrive_core::config::{RobotConfig, ValidatedConfig};
use sonardrive_core::motion::calibration_table;
use sonardrive_core::session::{MotionController, MotionOutcome, SessionLoop, SessionReport};
use sonardrive_core::traits::NeverShutdown;
use sonardrive_drivers::display::Ssd1306;
use sonardrive_drivers::input::StartButton;
use sonardrive_drivers::output::{Buzzer, IndicatorLed};
use sonardrive_drivers::sensor::{HcSr04, Mpu6050};
use sonardrive_drivers::stepper::StepperPair;
use sonardrive_drivers::{ActuatorRig, SensorRig};

use crate::board::{Board, UptimeClock};

mod board;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("SonarDrive firmware starting...");

    // Nothing is driven until the constants check out
    let config = match RobotConfig::DEFAULT.validate() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid robot configuration: {}", e);
            defmt::panic!("invalid robot configuration");
        }
    };
    log_calibration(&config);

    let p = embassy_rp::init(Default::default());
    let board = Board::new(p);
    info!("Peripherals initialized");

    let i2c_bus = Mutex::<CriticalSectionRawMutex, _>::new(board.i2c);

    let mut imu = Mpu6050::new(I2cDevice::new(&i2c_bus));
    if let Err(e) = imu.init().await {
        warn!("MPU-6050 init failed: {}", Debug2Format(&e));
    }

    let mut display = Ssd1306::new(I2cDevice::new(&i2c_bus));
    if let Err(e) = display.init().await {
        warn!("SSD1306 init failed: {}", Debug2Format(&e));
    }

    let sensors = SensorRig::new(
        HcSr04::new(board.trigger, board.echo, UptimeClock, Delay),
        imu,
    );
    let actuators = ActuatorRig::new(
        StepperPair::new(
            board.left_step,
            board.right_step,
            Delay,
            config.steps_per_unit,
            config.step_interval_ms,
        ),
        Buzzer::new(board.buzzer, Delay, config.beep_duration_ms),
        IndicatorLed::new_active_high(board.led),
        display,
    );
    let button = StartButton::new(board.button, Delay, config.button_poll_ms);

    let mut sessions = SessionLoop::new(
        MotionController::new(config),
        button,
        sensors,
        actuators,
        Delay,
    );

    info!("Ready, waiting for start button");
    let mut completed: u32 = 0;
    let result = sessions
        .run(&mut NeverShutdown, |report| {
            completed += 1;
            log_report(completed, report);
        })
        .await;

    match result {
        Ok(()) => info!("Session loop stopped after {} sessions", completed),
        Err(e) => error!("Session loop failed after {} sessions: {}", completed, e),
    }
}

/// Print the distance to step table so it can be checked with a tape measure
fn log_calibration(config: &ValidatedConfig) {
    info!(
        "Wheel radius {} cm, {} steps/rev, {} steps/unit",
        config.tire_radius_cm, config.steps_per_revolution, config.steps_per_unit
    );
    info!("distance,steps");
    for (cm, steps) in calibration_table(config) {
        info!("{},{}", cm, steps.get());
    }
}

fn log_report(n: u32, report: &SessionReport) {
    match report.outcome {
        MotionOutcome::Reached => info!(
            "Session {}: REACHED, {} cm -> {} steps, {} units",
            n,
            report.distance.cm(),
            report.steps.get(),
            report.units_issued
        ),
        MotionOutcome::Aborted => warn!(
            "Session {}: TILTED after {}/{} units (sample {})",
            n,
            report.units_issued,
            report.units_planned,
            report.abort_sample.map(|s| s.0).unwrap_or(0)
        ),
    }
    debug!("{}", report);
}
