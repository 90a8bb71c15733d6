/// MsgCreateClient defines a message to create an IBC client.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgCreateClient {
    /// client unique identifier
    #[prost(string, tag = "1")]
    pub client_id: ::prost::alloc::string::String,
    /// consensus state associated with the client that corresponds to a given
    /// height, packed as a type-url tagged `Any`.
    #[prost(message, optional, tag = "2")]
    pub consensus_state: ::core::option::Option<::prost_types::Any>,
}

/// MsgUpdateClient defines a message to update an IBC client with a header.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgUpdateClient {
    /// client unique identifier
    #[prost(string, tag = "1")]
    pub client_id: ::prost::alloc::string::String,
    /// header to update the light client
    #[prost(message, optional, tag = "2")]
    pub header: ::core::option::Option<::prost_types::Any>,
}

/// MsgSubmitMisbehaviour defines a message to submit evidence that a client
/// authority signed two conflicting statements at one sequence.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgSubmitMisbehaviour {
    /// misbehaviour evidence, packed as a type-url tagged `Any`.
    #[prost(message, optional, tag = "1")]
    pub misbehaviour: ::core::option::Option<::prost_types::Any>,
    /// address submitting the evidence. Any address may report misbehaviour;
    /// it bears no relation to the misbehaving authority's key.
    #[prost(string, tag = "2")]
    pub submitter: ::prost::alloc::string::String,
}
