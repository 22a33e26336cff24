// Bridge module - the host/native boundary layer
// Everything the Lyra loader touches when it loads this module lives here

pub mod capability;
pub mod convert;
pub mod manifest;
pub mod method_table;
pub mod native;
pub mod outcome;
pub mod shim;
pub mod signature;
pub mod trace;
pub mod value;

#[cfg(test)]
mod boundary_tests;

// Re-export the boundary surface for convenient use
pub use capability::{lookup_callable, register_capabilities, validate_signature, Callable};
pub use convert::{FromValue, IntoValue};
pub use method_table::{register_entry_points, MethodTable};
pub use outcome::{settle, HostSignal, NativeError};
pub use value::Value;

/// Name this module is registered under in the host's tables.
pub const MODULE_NAME: &str = "lyra_bridge";
