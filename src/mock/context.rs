use std::collections::BTreeMap;

use crate::core::ics02_client::client_state::{AnyClientState, ClientState};
use crate::core::ics02_client::client_type::ClientType;
use crate::core::ics02_client::context::{ClientKeeper, ClientReader};
use crate::core::ics02_client::error::Error;
use crate::core::ics24_host::identifier::ClientId;

/// An in-memory host implementing the client store traits, for use in
/// handler tests.
#[derive(Clone, Debug, Default)]
pub struct MockContext {
    client_types: BTreeMap<ClientId, ClientType>,
    client_states: BTreeMap<ClientId, AnyClientState>,
    client_counter: u64,
}

impl MockContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the context with an existing client record, as if it had been
    /// created through the handler pipeline.
    pub fn with_client(mut self, client_id: &ClientId, client_state: AnyClientState) -> Self {
        self.client_types
            .insert(client_id.clone(), client_state.client_type());
        self.client_states.insert(client_id.clone(), client_state);
        self.client_counter += 1;
        self
    }
}

impl ClientReader for MockContext {
    fn client_type(&self, client_id: &ClientId) -> Result<ClientType, Error> {
        self.client_types
            .get(client_id)
            .copied()
            .ok_or_else(|| Error::client_not_found(client_id.clone()))
    }

    fn client_state(&self, client_id: &ClientId) -> Result<AnyClientState, Error> {
        self.client_states
            .get(client_id)
            .cloned()
            .ok_or_else(|| Error::client_not_found(client_id.clone()))
    }

    fn client_counter(&self) -> Result<u64, Error> {
        Ok(self.client_counter)
    }
}

impl ClientKeeper for MockContext {
    fn store_client_type(
        &mut self,
        client_id: ClientId,
        client_type: ClientType,
    ) -> Result<(), Error> {
        self.client_types.insert(client_id, client_type);
        Ok(())
    }

    fn store_client_state(
        &mut self,
        client_id: ClientId,
        client_state: AnyClientState,
    ) -> Result<(), Error> {
        self.client_states.insert(client_id, client_state);
        Ok(())
    }

    fn increase_client_counter(&mut self) {
        self.client_counter += 1;
    }
}
