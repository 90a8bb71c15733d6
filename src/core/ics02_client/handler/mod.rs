//! This module implements the processing logic for ICS2 (client abstractions
//! and functions) msgs.

use crate::core::ics02_client::context::{ClientKeeper, ClientReader};
use crate::core::ics02_client::error::Error;
use crate::core::ics02_client::msgs::ClientMsg;
use crate::handler::HandlerOutput;
use crate::tx_msg::Msg;

pub mod create_client;
pub mod misbehaviour;
pub mod update_client;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientResult {
    Create(create_client::CreateClientResult),
    Update(update_client::UpdateClientResult),
    Misbehaviour(misbehaviour::MisbehaviourResult),
}

/// General entry point for processing any message related to ICS2 (client
/// functions) protocols.
///
/// Stateless shape validation runs first: a malformed message never reaches
/// the client registry nor touches persisted state.
pub fn dispatch<Ctx>(ctx: &Ctx, msg: ClientMsg) -> Result<HandlerOutput<ClientResult>, Error>
where
    Ctx: ClientReader,
{
    match msg {
        ClientMsg::CreateClient(msg) => {
            msg.validate_basic()?;
            create_client::process(ctx, msg)
        }
        ClientMsg::UpdateClient(msg) => {
            msg.validate_basic()?;
            update_client::process(ctx, msg)
        }
        ClientMsg::Misbehaviour(msg) => {
            msg.validate_basic()?;
            misbehaviour::process(ctx, msg)
        }
    }
}

/// Persists a processed result. Called only after `dispatch` succeeds, so a
/// failed message leaves the store completely untouched.
pub fn keep<Ctx>(ctx: &mut Ctx, result: ClientResult) -> Result<(), Error>
where
    Ctx: ClientKeeper,
{
    match result {
        ClientResult::Create(result) => create_client::keep(ctx, result),
        ClientResult::Update(result) => update_client::keep(ctx, result),
        ClientResult::Misbehaviour(result) => misbehaviour::keep(ctx, result),
    }
}
