//! Protocol logic specific to processing ICS2 messages of type `MsgCreateClient`.

use crate::core::ics02_client::client_consensus::ConsensusState;
use crate::core::ics02_client::client_def::{AnyClient, ClientDef};
use crate::core::ics02_client::client_state::AnyClientState;
use crate::core::ics02_client::client_type::ClientType;
use crate::core::ics02_client::context::{ClientKeeper, ClientReader};
use crate::core::ics02_client::error::Error;
use crate::core::ics02_client::events::Attributes;
use crate::core::ics02_client::msgs::create_client::MsgCreateClient;
use crate::core::ics24_host::identifier::ClientId;
use crate::events::IbcEvent;
use crate::handler::{HandlerOutput, HandlerResult};

use super::ClientResult;

/// The result following the successful processing of a `MsgCreateClient`
/// message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateClientResult {
    pub client_id: ClientId,
    pub client_type: ClientType,
    pub client_state: AnyClientState,
}

pub fn process(
    ctx: &dyn ClientReader,
    msg: MsgCreateClient,
) -> HandlerResult<ClientResult, Error> {
    let mut output = HandlerOutput::builder();

    let MsgCreateClient {
        client_id,
        consensus_state,
    } = msg;

    if ctx.client_state(&client_id).is_ok() {
        return Err(Error::client_already_exists(client_id));
    }

    output.log("success: no client state found");

    let client_type = consensus_state.client_type();
    let client_def = AnyClient::from_client_type(client_type);

    let client_state = client_def.initialize(client_id.clone(), consensus_state)?;

    output.log(format!("success: generated new client state for {}", client_id));

    let event_attributes = Attributes {
        client_id: client_id.clone(),
        client_type,
    };
    output.emit(IbcEvent::CreateClient(event_attributes.into()));

    Ok(output.with_result(ClientResult::Create(CreateClientResult {
        client_id,
        client_type,
        client_state,
    })))
}

pub fn keep(keeper: &mut dyn ClientKeeper, result: CreateClientResult) -> Result<(), Error> {
    keeper.store_client_type(result.client_id.clone(), result.client_type)?;
    keeper.store_client_state(result.client_id, result.client_state)?;
    keeper.increase_client_counter();

    Ok(())
}
