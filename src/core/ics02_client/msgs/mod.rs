//! The external request surface of the client module: create, update, and
//! submit-misbehaviour messages.
//!
//! Each message performs stateless shape validation (`validate_basic`) and
//! derives its required signer from the message content alone; only then is
//! it routed to the client registry, which reads and mutates persisted
//! state.

pub mod create_client;
pub mod misbehaviour;
pub mod update_client;

use crate::core::ics02_client::msgs::create_client::MsgCreateClient;
use crate::core::ics02_client::msgs::misbehaviour::MsgSubmitMisbehaviour;
use crate::core::ics02_client::msgs::update_client::MsgUpdateClient;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientMsg {
    CreateClient(MsgCreateClient),
    UpdateClient(MsgUpdateClient),
    Misbehaviour(MsgSubmitMisbehaviour),
}
