// SPDX-License-Identifier: GPL-3.0-only

use camcheck::backends::camera;
use camcheck::report;
use clap::Parser;
use std::io;
use std::process::ExitCode;

/// Exit code when at least one device is in use by another process
const EXIT_BUSY_ELSEWHERE: u8 = 2;
/// Exit code when the device list could not be obtained
const EXIT_ENUMERATION_FAILED: u8 = 1;

#[derive(Parser)]
#[command(name = "camcheck")]
#[command(about = "Reports whether each video-capture device is in use")]
#[command(version = env!("GIT_VERSION"))]
struct Cli {}

fn main() -> ExitCode {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=camcheck=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let _cli = Cli::parse();

    let devices = match camera::probe_cameras() {
        Ok(devices) => devices,
        Err(err) => {
            eprintln!("Failed to enumerate capture devices: {}", err);
            return ExitCode::from(EXIT_ENUMERATION_FAILED);
        }
    };

    let mut stdout = io::stdout().lock();
    match report::print_report(&devices, &mut stdout) {
        Ok(true) => ExitCode::from(EXIT_BUSY_ELSEWHERE),
        Ok(false) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Failed to write report: {}", err);
            ExitCode::from(EXIT_ENUMERATION_FAILED)
        }
    }
}
