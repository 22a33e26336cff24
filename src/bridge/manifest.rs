// Module manifest loading
// A JSON manifest ships next to the native module and lists its exported
// entry points, so host tooling can see what a module provides without
// loading it. The loader cross-checks the manifest against the compiled-in
// method table.

use std::collections::HashSet;
use std::fs;

use crate::bridge::capability::validate_signature;
use crate::bridge::method_table::MethodTable;
use crate::bridge::signature::is_well_formed;

#[derive(Debug, Clone)]
pub struct ManifestFn {
    pub name: String,
    pub argc: usize,
    /// Canonical signature; absent for entries not exposed to dynamic
    /// cross-module calls (e.g. the capability-registration hook).
    pub signature: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Manifest {
    pub module: String,
    pub functions: Vec<ManifestFn>,
}

pub fn load_manifest(path: &str) -> Result<Manifest, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read manifest {}: {}", path, e))?;
    let root: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| format!("Invalid JSON in {}: {}", path, e))?;
    parse_manifest(&root, path)
}

fn parse_manifest(root: &serde_json::Value, path: &str) -> Result<Manifest, String> {
    let obj = root.as_object().ok_or("Manifest must be an object")?;

    let module = obj.get("module")
        .and_then(|v| v.as_str())
        .ok_or("Manifest missing 'module' field")?
        .to_string();

    let functions_val = obj.get("functions")
        .and_then(|v| v.as_array())
        .ok_or("Manifest missing 'functions' array")?;

    let mut seen = HashSet::new();
    let mut functions = Vec::new();
    for (i, fn_val) in functions_val.iter().enumerate() {
        let fn_obj = fn_val.as_object()
            .ok_or_else(|| format!("Function {} must be an object", i))?;

        let name = fn_obj.get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| format!("Function {} missing 'name' field", i))?
            .to_string();

        let argc = fn_obj.get("argc")
            .and_then(|v| v.as_u64())
            .ok_or_else(|| format!("Function '{}' missing 'argc' field", name))?
            as usize;

        let signature = match fn_obj.get("signature") {
            None | Some(serde_json::Value::Null) => None,
            Some(v) => {
                let sig = v.as_str()
                    .ok_or_else(|| format!("Function '{}': 'signature' must be a string", name))?;
                Some(sig.to_string())
            }
        };

        // Duplicate names would make dynamic lookup ambiguous
        if !seen.insert(name.clone()) {
            return Err(format!("Duplicate function name '{}' in {}", name, path));
        }

        functions.push(ManifestFn { name, argc, signature });
    }

    Ok(Manifest { module, functions })
}

/// Verify every manifest entry against the compiled-in method table: the
/// entry point must exist, the declared argc must match, and any listed
/// signature must be canonical and accepted by the validator.
pub fn check_against_table(manifest: &Manifest, table: &MethodTable) -> Result<(), String> {
    for func in &manifest.functions {
        let entry = table.get(&func.name)
            .ok_or_else(|| format!("Manifest lists unknown entry point '{}'", func.name))?;

        if entry.argc != func.argc {
            return Err(format!(
                "Argc mismatch for '{}': manifest says {}, table says {}",
                func.name, func.argc, entry.argc
            ));
        }

        if let Some(sig) = &func.signature {
            if !is_well_formed(sig) {
                return Err(format!("Malformed signature for '{}': {}", func.name, sig));
            }
            if !validate_signature(sig) {
                return Err(format!("Signature for '{}' not accepted: {}", func.name, sig));
            }
        }
    }
    Ok(())
}
