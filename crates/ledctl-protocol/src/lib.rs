//! LED toggle UDP protocol
//!
//! This crate provides the types shared by the operator console and the
//! device side of the LED toggle protocol. The protocol is deliberately tiny:
//! the device owns three indicator lights and flips one of them for every
//! datagram it receives.
//!
//! # Protocol Overview
//!
//! - **Operator commands**: exact-match words typed at a prompt (`blue`,
//!   `green`, `red`, `exit`)
//! - **Datagrams** (console → device): the ASCII label `LED-<n>` with no
//!   header, length prefix or checksum beyond what UDP provides
//! - **Acknowledgements**: none; delivery is best-effort
//!
//! # Example
//!
//! ```rust
//! use ledctl_protocol::{Command, Led, PayloadCodec};
//!
//! let cmd = Command::lookup("green");
//! assert_eq!(cmd, Some(Command::Toggle(Led::Green)));
//!
//! let datagram = PayloadCodec::encode(Led::Green);
//! assert_eq!(&datagram[..], b"LED-2");
//! assert_eq!(PayloadCodec::decode(&datagram)?, Led::Green);
//! # Ok::<(), ledctl_protocol::ProtocolError>(())
//! ```

mod codec;
mod commands;
mod error;

pub use codec::*;
pub use commands::*;
pub use error::*;
