// Forwarding entry points
//
// Each exported native function gets a pair:
//   - a try-shim: marshal arguments, invoke, wrap the result; native errors
//     and panics are encoded as in-band marker values and never unwind into
//     the host
//   - an outer entry: run the try-shim, then settle the result into the
//     host's interrupt / jump / error channels
//
// The host knows these under their registered names, `_lyra_bridge_reflect`
// and friends; the Rust identifiers below are ordinary.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::bridge::convert::{FromValue, IntoValue};
use crate::bridge::native;
use crate::bridge::outcome::{encode_error, error_marker, settle, HostSignal};
use crate::bridge::trace::trace;
use crate::bridge::value::Value;

/// A try-shim: failure travels in-band as a marker value.
pub type TryFn = fn(&[Value]) -> Value;

/// An outer entry point: marker values already decoded.
pub type EntryFn = fn(&[Value]) -> Result<Value, HostSignal>;

fn arg<T: FromValue>(args: &[Value], i: usize, entry: &str) -> Result<T, String> {
    let v = args
        .get(i)
        .ok_or_else(|| format!("{}: missing argument {}", entry, i))?;
    T::from_value(v).map_err(|e| format!("{}: argument {}: {}", entry, i, e))
}

fn guard<F>(entry: &str, body: F) -> Value
where
    F: FnOnce() -> Value,
{
    match catch_unwind(AssertUnwindSafe(body)) {
        Ok(v) => v,
        Err(_) => {
            trace(&format!("panic caught in {}", entry));
            error_marker(&format!("{}: native call panicked", entry))
        }
    }
}

pub fn reflect_try(args: &[Value]) -> Value {
    guard("reflect", || {
        let value: Value = match arg(args, 0, "reflect") {
            Ok(v) => v,
            Err(e) => return error_marker(&e),
        };
        let fast: bool = match arg(args, 1, "reflect") {
            Ok(v) => v,
            Err(e) => return error_marker(&e),
        };
        match native::reflect(value, fast) {
            Ok(result) => result.into_value(),
            Err(e) => encode_error(e),
        }
    })
}

pub fn reflect_entry(args: &[Value]) -> Result<Value, HostSignal> {
    settle(reflect_try(args))
}

pub fn describe_try(args: &[Value]) -> Value {
    guard("describe", || {
        let value: Value = match arg(args, 0, "describe") {
            Ok(v) => v,
            Err(e) => return error_marker(&e),
        };
        match native::describe(value) {
            Ok(result) => result.into_value(),
            Err(e) => encode_error(e),
        }
    })
}

pub fn describe_entry(args: &[Value]) -> Result<Value, HostSignal> {
    settle(describe_try(args))
}

/// Zero-argument entry the host invokes after load to expose this module's
/// callables to other native modules.
pub fn register_capabilities_entry(args: &[Value]) -> Result<Value, HostSignal> {
    if !args.is_empty() {
        return Err(HostSignal::Error(
            "register_capabilities: expected no arguments".to_string(),
        ));
    }
    crate::bridge::capability::register_capabilities();
    Ok(Value::Unit)
}
