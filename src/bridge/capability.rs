// Capability registry and signature validation
//
// Other native modules call into this one without linking against it: they
// look a callable up by (module, name) in the process-global registry, and
// first confirm the signature they expect against the validator. The
// accepted-signature set is built lazily on first validation and never
// mutated afterwards.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, OnceLock};

use crate::bridge::shim::{self, TryFn};
use crate::bridge::signature::{encode_signature, TypeToken};
use crate::bridge::trace::trace;
use crate::bridge::MODULE_NAME;

/// What a cross-module lookup can yield. The validator rides in the same
/// registry as the try-shims, like any other exported pointer.
#[derive(Clone, Copy)]
pub enum Callable {
    Entry(TryFn),
    Validator(fn(&str) -> bool),
}

static CALLABLES: OnceLock<Mutex<HashMap<(String, String), Callable>>> = OnceLock::new();
static SIGNATURES: OnceLock<HashSet<String>> = OnceLock::new();

fn callables() -> &'static Mutex<HashMap<(String, String), Callable>> {
    CALLABLES.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Accepted signatures for this module's exported native functions.
fn accepted_signatures() -> &'static HashSet<String> {
    SIGNATURES.get_or_init(|| {
        let mut set = HashSet::new();
        set.insert(encode_signature(
            TypeToken::Value,
            "reflect",
            &[TypeToken::Value, TypeToken::Bool],
        ));
        set.insert(encode_signature(TypeToken::Str, "describe", &[TypeToken::Value]));
        set
    })
}

/// Membership check against the accepted-signature set. True for exactly the
/// registered signature strings.
pub fn validate_signature(sig: &str) -> bool {
    accepted_signatures().contains(sig)
}

/// Expose a callable under a string key for cross-module native calls.
/// Re-registration of an existing key is a no-op.
pub fn register_callable(module: &str, name: &str, callable: Callable) {
    let mut map = callables().lock().unwrap();
    let key = (module.to_string(), name.to_string());
    if !map.contains_key(&key) {
        trace(&format!("capability registered: {}::{}", module, name));
        map.insert(key, callable);
    }
}

pub fn lookup_callable(module: &str, name: &str) -> Option<Callable> {
    let map = callables().lock().unwrap();
    map.get(&(module.to_string(), name.to_string())).copied()
}

/// Register this module's try-shims and its validator. Invoked by the
/// `_lyra_bridge_register_capabilities` entry point after load; idempotent.
pub fn register_capabilities() {
    register_callable(MODULE_NAME, "_lyra_bridge_reflect", Callable::Entry(shim::reflect_try));
    register_callable(MODULE_NAME, "_lyra_bridge_describe", Callable::Entry(shim::describe_try));
    register_callable(MODULE_NAME, "_lyra_bridge_validate", Callable::Validator(validate_signature));
}
