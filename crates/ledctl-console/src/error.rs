//! Error types for the console and monitor.

use std::io;

use ledctl_protocol::ProtocolError;
use thiserror::Error;

/// Errors that end a console or monitor session.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Host name lookup failed.
    #[error("cannot resolve host {host:?}: {source}")]
    Resolve {
        /// Host as given on the command line.
        host: String,
        /// Underlying resolver error.
        #[source]
        source: io::Error,
    },

    /// Host name lookup succeeded but returned no addresses.
    #[error("host {host:?} resolved to no addresses")]
    NoAddress {
        /// Host as given on the command line.
        host: String,
    },

    /// Could not bind a local UDP socket.
    #[error("cannot bind UDP socket: {0}")]
    Bind(#[source] io::Error),

    /// Sending a datagram failed.
    #[error("failed to send {payload}: {source}")]
    Send {
        /// Payload that was being sent.
        payload: &'static str,
        /// Underlying socket error.
        #[source]
        source: io::Error,
    },

    /// Receiving a datagram failed.
    #[error("failed to receive datagram: {0}")]
    Receive(#[source] io::Error),

    /// Reading operator input failed.
    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),

    /// Writing to the terminal failed.
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),

    /// A datagram could not be decoded.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

/// Result type alias for console operations.
pub type ConsoleResult<T> = Result<T, ConsoleError>;
