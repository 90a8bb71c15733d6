use core::fmt;

use serde::{Deserialize, Serialize};

use crate::core::ics02_client::events as client_events;

/// Events emitted by the message handlers, collected into the
/// [`HandlerOutput`](crate::handler::HandlerOutput) alongside the result to
/// be persisted.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum IbcEvent {
    CreateClient(client_events::CreateClient),
    UpdateClient(client_events::UpdateClient),
    ClientMisbehaviour(client_events::ClientMisbehaviour),
}

impl fmt::Display for IbcEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IbcEvent::CreateClient(ev) => write!(f, "{}", ev),
            IbcEvent::UpdateClient(ev) => write!(f, "{}", ev),
            IbcEvent::ClientMisbehaviour(ev) => write!(f, "{}", ev),
        }
    }
}
