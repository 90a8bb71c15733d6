use crate::core::ics02_client::client_state::AnyClientState;
use crate::core::ics02_client::client_type::ClientType;
use crate::core::ics02_client::error::Error;
use crate::core::ics24_host::identifier::ClientId;

/// Read-side of the versioned key-value store holding client records.
///
/// Readers only ever observe fully committed state: all mutation happens
/// through [`ClientKeeper`] inside the host's single-writer pipeline.
pub trait ClientReader {
    fn client_type(&self, client_id: &ClientId) -> Result<ClientType, Error>;

    fn client_state(&self, client_id: &ClientId) -> Result<AnyClientState, Error>;

    /// Returns the number of clients created so far, held under an explicit
    /// store key. Hosts that assign identifiers derive them from this
    /// counter via `ClientId::new`.
    fn client_counter(&self) -> Result<u64, Error>;
}

/// Write-side of the versioned key-value store holding client records.
pub trait ClientKeeper {
    fn store_client_type(
        &mut self,
        client_id: ClientId,
        client_type: ClientType,
    ) -> Result<(), Error>;

    fn store_client_state(
        &mut self,
        client_id: ClientId,
        client_state: AnyClientState,
    ) -> Result<(), Error>;

    /// Called upon successful client creation; advances the store-backed
    /// counter transactionally with the creation itself.
    fn increase_client_counter(&mut self);
}
