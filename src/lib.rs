// Library interface for lyra-native-bridge
// Exposes the boundary layer for embedding hosts and for the CLI

pub mod bridge;

pub use bridge::method_table::{register_entry_points, MethodEntry, MethodTable};
pub use bridge::outcome::{HostSignal, NativeError};
pub use bridge::value::Value;
