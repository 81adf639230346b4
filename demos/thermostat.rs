//! Thermostat Demo
//!
//! Replays the stock device's readings through a monitor wired to a
//! cooling switch and an emergency shutdown.
//!
//! Key concepts:
//! - Building a monitor from configuration
//! - Attaching a thermostat to drive actuators from events
//! - Pacing a source without touching the monitor
//!
//! Run with: RUST_LOG=debug cargo run --example thermostat

use std::sync::Arc;
use std::time::Duration;
use thermowatch::config::MonitorConfig;
use thermowatch::sinks::{AlertLog, CoolingMechanism, CoolingSwitch, DeviceShutdown, Thermostat};
use thermowatch::source::{Paced, Readings};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Thermostat Demo ===\n");

    let config = MonitorConfig::default();
    println!("Configuration:\n{}\n", config.to_json()?);

    let mut monitor = config.build_monitor()?;
    let cooling = Arc::new(CoolingSwitch::new());
    let shutdown = Arc::new(DeviceShutdown::with_shutdown_hook(|| {
        println!("  >> device powered off");
    }));
    let alerts = AlertLog::new();
    Thermostat::new(cooling.clone(), shutdown.clone())
        .with_alerts(alerts.clone())
        .attach(&mut monitor);

    let mut source = Paced::new(Readings::reference(), Duration::from_millis(250));
    let summary = monitor.run(&mut source)?;

    println!("\nRun summary:");
    println!("  samples:      {}", summary.samples);
    println!("  warnings:     {}", summary.warnings);
    println!("  emergencies:  {}", summary.emergencies);
    println!("  fell below:   {}", summary.fell_below);
    println!("  alerts:       {}", alerts.logged());
    println!("  final level:  {}", summary.final_level.name());
    println!("  cooling on:   {}", cooling.is_active());
    println!("  shut down:    {}", shutdown.is_shut_down());

    println!("\n=== Demo Complete ===");
    Ok(())
}
