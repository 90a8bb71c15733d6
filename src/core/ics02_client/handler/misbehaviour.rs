//! Protocol logic specific to processing ICS2 messages of type
//! `MsgSubmitMisbehaviour`.

use crate::core::ics02_client::client_def::{AnyClient, ClientDef};
use crate::core::ics02_client::client_state::AnyClientState;
use crate::core::ics02_client::context::{ClientKeeper, ClientReader};
use crate::core::ics02_client::error::Error;
use crate::core::ics02_client::events::Attributes;
use crate::core::ics02_client::misbehaviour::Misbehaviour;
use crate::core::ics02_client::msgs::misbehaviour::MsgSubmitMisbehaviour;
use crate::core::ics24_host::identifier::ClientId;
use crate::events::IbcEvent;
use crate::handler::{HandlerOutput, HandlerResult};

use super::ClientResult;

/// The result following the successful processing of a
/// `MsgSubmitMisbehaviour` message: the offending client, permanently
/// frozen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MisbehaviourResult {
    pub client_id: ClientId,
    pub client_state: AnyClientState,
}

pub fn process(
    ctx: &dyn ClientReader,
    msg: MsgSubmitMisbehaviour,
) -> HandlerResult<ClientResult, Error> {
    let mut output = HandlerOutput::builder();

    let MsgSubmitMisbehaviour {
        misbehaviour,
        submitter: _,
    } = msg;

    let client_id = misbehaviour.client_id().clone();

    let client_type = ctx.client_type(&client_id)?;

    let client_def = AnyClient::from_client_type(client_type);

    let client_state = ctx.client_state(&client_id)?;

    // Freezing is terminal: on success the returned state has frozen set,
    // and no later message can thaw it.
    let frozen_state = client_def.check_misbehaviour_and_update_state(client_state, misbehaviour)?;

    output.log(format!("success: freeze client {}", client_id));

    let event_attributes = Attributes {
        client_id: client_id.clone(),
        client_type,
    };
    output.emit(IbcEvent::ClientMisbehaviour(event_attributes.into()));

    Ok(output.with_result(ClientResult::Misbehaviour(MisbehaviourResult {
        client_id,
        client_state: frozen_state,
    })))
}

pub fn keep(keeper: &mut dyn ClientKeeper, result: MisbehaviourResult) -> Result<(), Error> {
    keeper.store_client_state(result.client_id, result.client_state)
}
