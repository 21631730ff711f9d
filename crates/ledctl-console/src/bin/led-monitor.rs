//! `led-monitor` - stand-in for the LED device.
//!
//! Listens for toggle datagrams and prints the LED states after each one.

use std::io;
use std::net::IpAddr;
use std::process::ExitCode;

use clap::Parser;
use ledctl_console::monitor::Monitor;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "led-monitor", version, about = "Receive LED toggle datagrams and show the LED states")]
struct Args {
    /// UDP port to listen on
    port: u16,

    /// Local address to bind
    #[arg(long, default_value = "0.0.0.0")]
    bind: IpAddr,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let monitor = match Monitor::bind((args.bind, args.port)) {
        Ok(monitor) => monitor,
        Err(e) => {
            eprintln!("led-monitor: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Ok(addr) = monitor.local_addr() {
        info!(%addr, "listening");
    }

    let stdout = io::stdout();
    match monitor.run(&mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("led-monitor: {}", e);
            ExitCode::FAILURE
        }
    }
}
