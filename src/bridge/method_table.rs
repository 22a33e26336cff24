// Method table registration
// The host loader owns a MethodTable; this module's load callback fills in
// the documented entry points exactly once.

use std::collections::HashMap;

use crate::bridge::outcome::HostSignal;
use crate::bridge::shim::{self, EntryFn};
use crate::bridge::trace::trace;
use crate::bridge::value::Value;
use crate::bridge::MODULE_NAME;

#[derive(Clone)]
pub struct MethodEntry {
    pub name: &'static str,
    pub func: EntryFn,
    pub argc: usize,
}

/// The documented set of entry points, in registration order.
pub const ENTRY_POINTS: &[(&str, EntryFn, usize)] = &[
    ("_lyra_bridge_reflect", shim::reflect_entry, 2),
    ("_lyra_bridge_describe", shim::describe_entry, 1),
    ("_lyra_bridge_register_capabilities", shim::register_capabilities_entry, 0),
];

pub struct MethodTable {
    entries: HashMap<String, MethodEntry>,
}

impl MethodTable {
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&MethodEntry> {
        self.entries.get(name)
    }

    /// Insert an entry unless the name is already present. Returns whether
    /// the entry was added; re-registration is not an error.
    pub fn insert(&mut self, entry: MethodEntry) -> bool {
        if self.entries.contains_key(entry.name) {
            return false;
        }
        self.entries.insert(entry.name.to_string(), entry);
        true
    }

    /// Dynamic dispatch by registered name. Existence and declared argument
    /// count are checked before the entry point runs.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, HostSignal> {
        let entry = self.entries.get(name).ok_or_else(|| {
            HostSignal::Error(format!("no entry point named '{}'", name))
        })?;
        if args.len() != entry.argc {
            return Err(HostSignal::Error(format!(
                "'{}' expects {} arguments, got {}",
                name, entry.argc, args.len()
            )));
        }
        (entry.func)(args)
    }
}

impl Default for MethodTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Module-load callback. Registers the documented entry points into the
/// host's table. Idempotent: calling twice leaves exactly one copy of each.
pub fn register_entry_points(table: &mut MethodTable) -> Result<(), String> {
    for (name, func, argc) in ENTRY_POINTS {
        let added = table.insert(MethodEntry { name: *name, func: *func, argc: *argc });
        if added {
            trace(&format!("{}: registered {} (argc {})", MODULE_NAME, name, argc));
        }
    }
    Ok(())
}
