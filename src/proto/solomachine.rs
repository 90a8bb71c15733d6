/// ClientState defines a solo machine client that tracks the current
/// consensus state and whether the client has been frozen by misbehaviour.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct ClientState {
    #[prost(string, tag = "1")]
    pub client_id: ::prost::alloc::string::String,
    /// frozen indicates that the client is frozen due to misbehaviour
    #[prost(bool, tag = "2")]
    pub frozen: bool,
    #[prost(message, optional, tag = "3")]
    pub consensus_state: ::core::option::Option<ConsensusState>,
}

/// ConsensusState defines a solo machine consensus state. The sequence of a
/// consensus state is contained in the "height" key used in storing the
/// consensus state.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct ConsensusState {
    #[prost(uint64, tag = "1")]
    pub sequence: u64,
    /// public key of the solo machine
    #[prost(bytes = "vec", tag = "2")]
    pub public_key: ::prost::alloc::vec::Vec<u8>,
    /// diversifier allows the same public key to be re-used across different
    /// solo machine clients (potentially on different chains) without being
    /// considered misbehaviour.
    #[prost(string, tag = "3")]
    pub diversifier: ::prost::alloc::string::String,
    #[prost(uint64, tag = "4")]
    pub timestamp: u64,
}

/// Header defines a solo machine consensus header, signed by the current
/// public key and carrying the next public key and diversifier.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct Header {
    #[prost(uint64, tag = "1")]
    pub sequence: u64,
    #[prost(uint64, tag = "2")]
    pub timestamp: u64,
    #[prost(bytes = "vec", tag = "3")]
    pub signature: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "4")]
    pub new_public_key: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag = "5")]
    pub new_diversifier: ::prost::alloc::string::String,
}

/// SignatureAndData contains a signature, the data signed, and the sequence
/// the signature was produced at.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct SignatureAndData {
    #[prost(bytes = "vec", tag = "1")]
    pub signature: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub data: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag = "3")]
    pub sequence: u64,
}

/// Misbehaviour defines misbehaviour for a solo machine which consists of a
/// sequence and two signatures over different messages at that sequence.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct Misbehaviour {
    #[prost(string, tag = "1")]
    pub client_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub signature_one: ::core::option::Option<SignatureAndData>,
    #[prost(message, optional, tag = "3")]
    pub signature_two: ::core::option::Option<SignatureAndData>,
}
