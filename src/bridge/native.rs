// Native functions exported by this module
// Small on purpose: the interesting part of this crate is the boundary, and
// these give registration, validation, and forwarding real subjects.

use crate::bridge::outcome::NativeError;
use crate::bridge::value::Value;

/// Return the argument unchanged. `fast` selects a direct return; the slow
/// path rebuilds the value structurally. Both paths produce an identical
/// result, so callers can rely on pass-through semantics either way.
pub fn reflect(value: Value, fast: bool) -> Result<Value, NativeError> {
    if fast {
        return Ok(value);
    }
    Ok(rebuild(&value))
}

/// Host-facing type name of the argument.
pub fn describe(value: Value) -> Result<String, NativeError> {
    Ok(value.type_name().to_string())
}

fn rebuild(value: &Value) -> Value {
    match value {
        Value::Int(n) => Value::Int(*n),
        Value::Bool(b) => Value::Bool(*b),
        Value::Str(s) => Value::Str(s.clone()),
        Value::Unit => Value::Unit,
        Value::List(elems) => Value::List(elems.iter().map(rebuild).collect()),
        Value::Ctor { tag, fields } => Value::Ctor {
            tag: tag.clone(),
            fields: fields.iter().map(rebuild).collect(),
        },
    }
}
