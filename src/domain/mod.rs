// Domain layer: the vault/thief ports and the serializable result models the CLI prints.

pub mod model;
pub mod ports;
