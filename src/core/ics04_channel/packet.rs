use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::ics04_channel::error::Error;
use crate::core::ics24_host::identifier::{ChannelId, PortId};
use crate::proto::channel::Packet as RawPacket;
use crate::Height;

/// The sequence number of a packet enforces ordering among packets from the
/// same source.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize,
)]
pub struct Sequence(u64);

impl FromStr for Sequence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.parse::<u64>().map_err(|e| {
            Error::invalid_string_as_sequence(s.to_string(), e)
        })?))
    }
}

impl Sequence {
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn increment(&self) -> Sequence {
        Sequence(self.0 + 1)
    }
}

impl From<u64> for Sequence {
    fn from(seq: u64) -> Self {
        Sequence(seq)
    }
}

impl From<Sequence> for u64 {
    fn from(s: Sequence) -> u64 {
        s.0
    }
}

impl core::fmt::Display for Sequence {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(f, "{}", self.0)
    }
}

/// A single application-level message in transit between two chains.
///
/// A packet is created by the sending application, committed (its digest
/// persisted) until acknowledged or timed out, and then the digest is
/// deleted; it is never mutated in place.
#[derive(Clone, Default, Hash, PartialEq, Eq, Deserialize, Serialize)]
pub struct Packet {
    pub sequence: Sequence,
    pub source_port: PortId,
    pub source_channel: ChannelId,
    pub destination_port: PortId,
    pub destination_channel: ChannelId,
    #[serde(serialize_with = "crate::serializers::ser_hex_upper")]
    pub data: Vec<u8>,
    pub timeout_height: Height,
}

struct PacketData<'a>(&'a [u8]);

impl<'a> core::fmt::Debug for PacketData<'a> {
    fn fmt(&self, formatter: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(formatter, "{:?}", self.0)
    }
}

impl core::fmt::Debug for Packet {
    fn fmt(&self, formatter: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
        let data_wrapper = PacketData(&self.data);

        formatter
            .debug_struct("Packet")
            .field("sequence", &self.sequence)
            .field("source_port", &self.source_port)
            .field("source_channel", &self.source_channel)
            .field("destination_port", &self.destination_port)
            .field("destination_channel", &self.destination_channel)
            .field("data", &data_wrapper)
            .field("timeout_height", &self.timeout_height)
            .finish()
    }
}

impl Packet {
    /// Checks whether the packet is timed out relative to the current height
    /// of the destination chain.
    pub fn timed_out(&self, dst_chain_height: Height) -> bool {
        !self.timeout_height.is_zero() && self.timeout_height < dst_chain_height
    }
}

/// Custom display output, eliding the packet data.
impl core::fmt::Display for Packet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(
            f,
            "seq:{}, path:{}/{}->{}/{}, toh:{}",
            self.sequence,
            self.source_channel,
            self.source_port,
            self.destination_channel,
            self.destination_port,
            self.timeout_height,
        )
    }
}

impl TryFrom<RawPacket> for Packet {
    type Error = Error;

    /// Structural validation of a raw packet, with deterministic
    /// first-failure semantics: checks run in a fixed order and the first
    /// violated one is returned, so independent implementations report
    /// identical errors for identical inputs.
    fn try_from(raw_pkt: RawPacket) -> Result<Self, Self::Error> {
        let source_port = raw_pkt
            .source_port
            .parse()
            .map_err(Error::invalid_source_port)?;

        let destination_port = raw_pkt
            .destination_port
            .parse()
            .map_err(Error::invalid_destination_port)?;

        let source_channel = raw_pkt
            .source_channel
            .parse()
            .map_err(Error::invalid_source_channel)?;

        let destination_channel = raw_pkt
            .destination_channel
            .parse()
            .map_err(Error::invalid_destination_channel)?;

        if Sequence::from(raw_pkt.sequence).is_zero() {
            return Err(Error::zero_packet_sequence());
        }

        if Height::from(raw_pkt.timeout_height).is_zero() {
            return Err(Error::zero_packet_timeout());
        }

        if raw_pkt.data.is_empty() {
            return Err(Error::zero_packet_data());
        }

        Ok(Packet {
            sequence: Sequence::from(raw_pkt.sequence),
            source_port,
            source_channel,
            destination_port,
            destination_channel,
            data: raw_pkt.data,
            timeout_height: Height::from(raw_pkt.timeout_height),
        })
    }
}

impl From<Packet> for RawPacket {
    fn from(packet: Packet) -> Self {
        RawPacket {
            sequence: packet.sequence.into(),
            source_port: packet.source_port.to_string(),
            source_channel: packet.source_channel.to_string(),
            destination_port: packet.destination_port.to_string(),
            destination_channel: packet.destination_channel.to_string(),
            data: packet.data,
            timeout_height: packet.timeout_height.into(),
        }
    }
}

#[cfg(test)]
pub mod test_utils {
    use crate::core::ics24_host::identifier::{ChannelId, PortId};
    use crate::proto::channel::Packet as RawPacket;

    /// Returns a dummy `RawPacket`, for testing only!
    pub fn get_dummy_raw_packet(timeout_height: u64) -> RawPacket {
        RawPacket {
            sequence: 1,
            source_port: PortId::default().to_string(),
            source_channel: ChannelId::default().to_string(),
            destination_port: PortId::default().to_string(),
            destination_channel: ChannelId::new(1).to_string(),
            data: vec![0],
            timeout_height,
        }
    }
}
