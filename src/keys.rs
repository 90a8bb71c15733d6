/// The key identifying the module that routes inbound messages.
pub const ROUTER_KEY: &str = "ibc";
