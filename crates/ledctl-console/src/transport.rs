//! Outbound datagram transport.

use std::io;
use std::net::{SocketAddr, UdpSocket};

use crate::endpoint::Destination;
use crate::error::{ConsoleError, ConsoleResult};

/// Something that accepts one datagram at a time.
///
/// The console loop only needs fire-and-forget sends, so this is the whole
/// surface it depends on.
pub trait DatagramSink {
    /// Send `payload` as a single datagram. Returns the number of bytes sent.
    fn send_datagram(&mut self, payload: &[u8]) -> io::Result<usize>;
}

impl<S: DatagramSink + ?Sized> DatagramSink for &mut S {
    fn send_datagram(&mut self, payload: &[u8]) -> io::Result<usize> {
        (**self).send_datagram(payload)
    }
}

/// A UDP socket bound to an ephemeral local port, sending to one fixed
/// destination.
///
/// The socket is closed when the transport is dropped.
#[derive(Debug)]
pub struct UdpTransport {
    socket: UdpSocket,
    destination: SocketAddr,
}

impl UdpTransport {
    /// Bind a local socket suitable for reaching `destination`.
    pub fn open(destination: &Destination) -> ConsoleResult<Self> {
        let socket = UdpSocket::bind(destination.local_bind_addr()).map_err(ConsoleError::Bind)?;
        Ok(UdpTransport {
            socket,
            destination: destination.addr(),
        })
    }

    /// Local address the socket is bound to.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Address datagrams are sent to.
    pub fn destination(&self) -> SocketAddr {
        self.destination
    }
}

impl DatagramSink for UdpTransport {
    fn send_datagram(&mut self, payload: &[u8]) -> io::Result<usize> {
        self.socket.send_to(payload, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_send_reaches_destination() {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        receiver
            .set_read_timeout(Some(Duration::from_secs(2)))
            .unwrap();
        let dest = Destination::from_addr(receiver.local_addr().unwrap());

        let mut transport = UdpTransport::open(&dest).unwrap();
        assert_eq!(transport.destination(), dest.addr());
        assert_eq!(transport.send_datagram(b"LED-1").unwrap(), 5);

        let mut buf = [0u8; 64];
        let (len, from) = receiver.recv_from(&mut buf).unwrap();
        assert_eq!(&buf[..len], b"LED-1");
        assert_eq!(from.port(), transport.local_addr().unwrap().port());
    }
}
