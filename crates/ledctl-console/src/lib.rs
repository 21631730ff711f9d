//! # ledctl-console
//!
//! Interactive console that toggles the three LEDs of a remote device by
//! sending UDP datagrams.
//!
//! The operator types `blue`, `green` or `red` at the `text>` prompt and the
//! console sends `LED-1`, `LED-2` or `LED-3` to the device. `exit` or end of
//! input stops the loop; anything else is ignored. Sends are fire-and-forget:
//! nothing is read back from the network.
//!
//! ```no_run
//! use ledctl_console::{Console, Destination, UdpTransport};
//!
//! let destination = Destination::resolve("192.168.1.1", 1234)?;
//! let transport = UdpTransport::open(&destination)?;
//! let stdin = std::io::stdin();
//! let summary = Console::new(stdin.lock(), std::io::stdout(), transport).run()?;
//! println!("sent {} datagrams", summary.datagrams_sent);
//! # Ok::<(), ledctl_console::ConsoleError>(())
//! ```
//!
//! The [`monitor`] module provides the device side, for use without
//! hardware.

mod console;
mod endpoint;
mod error;
pub mod monitor;
mod transport;

pub use console::{Console, ExitReason, SessionSummary, PROMPT};
pub use endpoint::Destination;
pub use error::{ConsoleError, ConsoleResult};
pub use transport::{DatagramSink, UdpTransport};
