//! Receiver for OpenTrack's "UDP over network" output.
//!
//! Every datagram carries six little-endian `f64`s: x, y, z in centimeters, then yaw, pitch and
//! roll in degrees. Only the angles are kept.

use crate::mapper::{Orientation, TrackingSource};
use std::{
    io,
    net::{Ipv4Addr, SocketAddr, UdpSocket},
    time::Duration,
};

/// OpenTrack's default output port.
pub const DEFAULT_PORT: u16 = 4242;
pub const PACKET_LEN: usize = 6 * size_of::<f64>();
/// How long `recv` blocks before handing control back to the caller.
pub const RECV_TIMEOUT: Duration = Duration::from_millis(100);

pub fn parse_packet(packet: &[u8]) -> Option<Orientation> {
    if packet.len() != PACKET_LEN {
        return None;
    }

    let mut fields = [0.0f64; 6];
    for (field, bytes) in fields.iter_mut().zip(packet.chunks_exact(size_of::<f64>())) {
        *field = f64::from_le_bytes(bytes.try_into().ok()?);
    }

    Some(Orientation { yaw: fields[3], pitch: fields[4], roll: fields[5] })
}

pub struct OpenTrackReceiver {
    socket: UdpSocket,
    latest: Orientation,
}

impl OpenTrackReceiver {
    pub fn bind(port: u16) -> io::Result<Self> {
        let socket = UdpSocket::bind(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)))?;
        socket.set_read_timeout(Some(RECV_TIMEOUT))?;
        let receiver = Self { socket, latest: Orientation::default() };
        log::info!("Listening for OpenTrack on {}", receiver.local_addr()?);
        Ok(receiver)
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> { self.socket.local_addr() }

    /// Waits up to [`RECV_TIMEOUT`] for the next sample.
    ///
    /// `Ok(None)` means nothing usable arrived: the wait timed out or the datagram was malformed.
    pub fn recv(&mut self) -> io::Result<Option<Orientation>> {
        // one spare byte so oversized datagrams don't pass as valid after truncation
        let mut buffer = [0u8; PACKET_LEN + 1];
        let (len, from) = match self.socket.recv_from(&mut buffer) {
            Ok(received) => received,
            Err(err) if matches!(err.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut) => {
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        match parse_packet(&buffer[..len]) {
            Some(sample) => {
                self.latest = sample;
                Ok(Some(sample))
            }
            None => {
                log::debug!("Dropping {len} byte datagram from {from}");
                Ok(None)
            }
        }
    }
}

impl TrackingSource for OpenTrackReceiver {
    fn yaw(&self) -> f64 { self.latest.yaw }
    fn pitch(&self) -> f64 { self.latest.pitch }
    fn roll(&self) -> f64 { self.latest.roll }
}
