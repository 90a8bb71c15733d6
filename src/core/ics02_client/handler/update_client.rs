//! Protocol logic specific to processing ICS2 messages of type `MsgUpdateClient`.

use crate::core::ics02_client::client_def::{AnyClient, ClientDef};
use crate::core::ics02_client::client_state::AnyClientState;
use crate::core::ics02_client::context::{ClientKeeper, ClientReader};
use crate::core::ics02_client::error::Error;
use crate::core::ics02_client::events::Attributes;
use crate::core::ics02_client::msgs::update_client::MsgUpdateClient;
use crate::core::ics24_host::identifier::ClientId;
use crate::events::IbcEvent;
use crate::handler::{HandlerOutput, HandlerResult};

use super::ClientResult;

/// The result following the successful processing of a `MsgUpdateClient`
/// message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateClientResult {
    pub client_id: ClientId,
    pub client_state: AnyClientState,
}

pub fn process(
    ctx: &dyn ClientReader,
    msg: MsgUpdateClient,
) -> HandlerResult<ClientResult, Error> {
    let mut output = HandlerOutput::builder();

    let MsgUpdateClient { client_id, header } = msg;

    // Read client type from the host chain store. The client should already
    // exist.
    let client_type = ctx.client_type(&client_id)?;

    let client_def = AnyClient::from_client_type(client_type);

    // Read client state from the host chain store.
    let client_state = ctx.client_state(&client_id)?;

    // Use client_state to validate the new header against the stored
    // consensus state. This function will return the new client state
    // (its sequence advanced) to be persisted by the keeper; on any error
    // the stored state is left untouched.
    let (new_client_state, _new_consensus_state) = client_def
        .check_header_and_update_state(client_state, header)?;

    output.log(format!("success: update client {}", client_id));

    let event_attributes = Attributes {
        client_id: client_id.clone(),
        client_type,
    };
    output.emit(IbcEvent::UpdateClient(event_attributes.into()));

    Ok(output.with_result(ClientResult::Update(UpdateClientResult {
        client_id,
        client_state: new_client_state,
    })))
}

pub fn keep(keeper: &mut dyn ClientKeeper, result: UpdateClientResult) -> Result<(), Error> {
    keeper.store_client_state(result.client_id, result.client_state)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::clients::ics06_solomachine::test_utils::{
        dummy_client_state, public_key, sign, signed_header,
    };
    use crate::core::ics02_client::client_state::AnyClientState;
    use crate::core::ics02_client::context::ClientReader;
    use crate::core::ics02_client::error::ErrorDetail;
    use crate::core::ics02_client::handler::{dispatch, keep};
    use crate::core::ics02_client::msgs::update_client::MsgUpdateClient;
    use crate::core::ics02_client::msgs::ClientMsg;
    use crate::events::IbcEvent;
    use crate::mock::context::MockContext;

    #[test]
    fn update_client_ok() {
        let client_state = dummy_client_state(1, 1, "oracle");
        let client_id = client_state.client_id.clone();

        let mut ctx =
            MockContext::new().with_client(&client_id, client_state.into());

        let msg = MsgUpdateClient {
            client_id: client_id.clone(),
            header: signed_header(1, "oracle", 2, "next").into(),
        };

        let output = dispatch(&ctx, ClientMsg::UpdateClient(msg)).unwrap();
        assert!(matches!(output.events.as_slice(), [IbcEvent::UpdateClient(_)]));

        keep(&mut ctx, output.result).unwrap();

        let AnyClientState::Solomachine(stored) = ctx.client_state(&client_id).unwrap();
        assert_eq!(stored.sequence(), 2);
        assert_eq!(stored.consensus_state.public_key, public_key(2));
        assert_eq!(stored.consensus_state.diversifier, "next");
    }

    #[test]
    fn update_client_fails_for_unknown_client() {
        let ctx = MockContext::new();
        let client_state = dummy_client_state(1, 1, "oracle");

        let msg = MsgUpdateClient {
            client_id: client_state.client_id,
            header: signed_header(1, "oracle", 2, "next").into(),
        };

        let err = dispatch(&ctx, ClientMsg::UpdateClient(msg)).unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::ClientNotFound(_)));
    }

    #[test]
    fn failed_update_leaves_stored_state_unchanged() {
        let client_state = dummy_client_state(5, 1, "oracle");
        let client_id = client_state.client_id.clone();

        let ctx = MockContext::new().with_client(&client_id, client_state.into());
        let stored_before = ctx.client_state(&client_id).unwrap();

        // Right sequence, wrong signing key.
        let mut header = signed_header(1, "oracle", 2, "next");
        header.sequence = 5;
        header.signature = sign(9, &header.sign_bytes("oracle").unwrap());

        let msg = MsgUpdateClient {
            client_id: client_id.clone(),
            header: header.into(),
        };

        assert!(dispatch(&ctx, ClientMsg::UpdateClient(msg)).is_err());

        let stored_after = ctx.client_state(&client_id).unwrap();
        assert_eq!(stored_before, stored_after);
    }

    #[test]
    fn update_client_rejects_bad_signature() {
        let client_state = dummy_client_state(1, 1, "oracle");
        let client_id = client_state.client_id.clone();

        let ctx = MockContext::new().with_client(&client_id, client_state.into());

        let mut header = signed_header(1, "oracle", 2, "next");
        header.signature = sign(9, b"not the sign bytes");

        let msg = MsgUpdateClient {
            client_id,
            header: header.into(),
        };

        let err = dispatch(&ctx, ClientMsg::UpdateClient(msg)).unwrap_err();
        assert!(matches!(
            err.detail(),
            ErrorDetail::HeaderVerificationFailure(_)
        ));
    }
}
