//! Device-side listener for testing the console without hardware.
//!
//! The monitor binds a UDP port, decodes every datagram it receives and
//! flips the addressed LED in an in-memory bank, the way the firmware does
//! with the real lights.

use std::fmt;
use std::io::Write;
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

use ledctl_protocol::{Led, PayloadCodec};
use tracing::{debug, warn};

use crate::error::{ConsoleError, ConsoleResult};

/// Receive buffer size; anything longer than a label is rejected anyway.
const RECV_BUFFER_SIZE: usize = 512;

/// On/off state of the three device LEDs. All start off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedBank {
    lit: [bool; 3],
}

impl LedBank {
    /// Flip `led` and return its new state.
    pub fn toggle(&mut self, led: Led) -> bool {
        let slot = &mut self.lit[usize::from(led.index() - 1)];
        *slot = !*slot;
        *slot
    }

    /// Whether `led` is currently on.
    pub fn is_on(&self, led: Led) -> bool {
        self.lit[usize::from(led.index() - 1)]
    }
}

impl fmt::Display for LedBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, led) in Led::ALL.into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            let state = if self.is_on(led) { "on" } else { "off" };
            write!(f, "{}={}", led, state)?;
        }
        Ok(())
    }
}

/// A UDP listener that plays the device role.
pub struct Monitor {
    socket: UdpSocket,
    bank: LedBank,
    buf: Vec<u8>,
}

impl Monitor {
    /// Bind the listening socket.
    pub fn bind(addr: impl ToSocketAddrs) -> ConsoleResult<Self> {
        let socket = UdpSocket::bind(addr).map_err(ConsoleError::Bind)?;
        Ok(Monitor {
            socket,
            bank: LedBank::default(),
            buf: vec![0u8; RECV_BUFFER_SIZE],
        })
    }

    /// Address the monitor is listening on.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Current LED states.
    pub fn bank(&self) -> &LedBank {
        &self.bank
    }

    /// Block for one datagram and apply it.
    ///
    /// Returns the toggled LED, or `None` if the payload was not a valid
    /// label. A line describing the new state is written to `out` for every
    /// accepted datagram.
    pub fn recv_one(&mut self, out: &mut impl Write) -> ConsoleResult<Option<Led>> {
        let (len, from) = self
            .socket
            .recv_from(&mut self.buf)
            .map_err(ConsoleError::Receive)?;
        debug!(%from, bytes = len, "datagram received");

        let led = match PayloadCodec::decode(&self.buf[..len]) {
            Ok(led) => led,
            Err(e) => {
                warn!(%from, error = %e, "ignoring datagram");
                return Ok(None);
            }
        };

        self.bank.toggle(led);
        writeln!(out, "{} toggled by {}: {}", led.label(), from, self.bank)
            .map_err(ConsoleError::Output)?;
        Ok(Some(led))
    }

    /// Receive and apply datagrams until an I/O error occurs.
    pub fn run(mut self, out: &mut impl Write) -> ConsoleResult<()> {
        loop {
            self.recv_one(out)?;
        }
    }
}
