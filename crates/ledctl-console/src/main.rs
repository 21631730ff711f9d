//! `ledctl` - toggle the LEDs of a remote device from a prompt.
//!
//! ```text
//! ledctl <host> <port>
//! ```
//!
//! Log verbosity is controlled with `RUST_LOG` (default `warn`). Logs go to
//! standard error so they never mix with the prompt.

use std::io;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use ledctl_console::{Console, ConsoleResult, Destination, SessionSummary, UdpTransport};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: ledctl <host> <port>";

#[derive(Parser, Debug)]
#[command(name = "ledctl", version, about = "Toggle the LEDs of a remote device over UDP")]
struct Args {
    /// Device host name or IP address
    host: String,

    /// Device UDP port
    port: u16,
}

/// Errors caused by the wrong number of arguments, as opposed to a bad value.
fn is_arity_error(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::MissingRequiredArgument
            | ErrorKind::UnknownArgument
            | ErrorKind::TooManyValues
            | ErrorKind::WrongNumberOfValues
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> ConsoleResult<SessionSummary> {
    let destination = Destination::resolve(&args.host, args.port)?;
    let transport = UdpTransport::open(&destination)?;
    if let Ok(local) = transport.local_addr() {
        info!(%destination, %local, "sending to device");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(stdin.lock(), stdout.lock(), transport).run()
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if is_arity_error(&err) => {
            eprintln!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Err(err) => err.exit(),
    };

    init_tracing();

    match run(&args) {
        Ok(summary) => {
            info!(
                sent = summary.datagrams_sent,
                ignored = summary.lines_ignored,
                reason = ?summary.reason,
                "session finished"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ledctl: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledctl_console::ConsoleError;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("ledctl").chain(argv.iter().copied()))
    }

    #[test]
    fn test_two_arguments() {
        let args = parse(&["192.168.1.1", "1234"]).unwrap();
        assert_eq!(args.host, "192.168.1.1");
        assert_eq!(args.port, 1234);
    }

    #[test]
    fn test_wrong_argument_count_is_usage() {
        let cases: [&[&str]; 3] = [&[], &["192.168.1.1"], &["192.168.1.1", "1234", "extra"]];
        for argv in cases {
            let err = parse(argv).unwrap_err();
            assert!(is_arity_error(&err), "{:?} gave {:?}", argv, err.kind());
        }
    }

    #[test]
    fn test_bad_port_is_not_usage() {
        let err = parse(&["192.168.1.1", "not-a-port"]).unwrap_err();
        assert!(!is_arity_error(&err));

        let err = parse(&["192.168.1.1", "70000"]).unwrap_err();
        assert!(!is_arity_error(&err));
    }

    #[test]
    fn test_unresolvable_host_fails_before_prompt() {
        let args = Args {
            host: "no-such-device.invalid".to_string(),
            port: 1234,
        };
        assert!(matches!(
            run(&args),
            Err(ConsoleError::Resolve { .. } | ConsoleError::NoAddress { .. })
        ));
    }
}
