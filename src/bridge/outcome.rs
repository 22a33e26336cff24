// Three-way result classification at the boundary
//
// A try-shim never unwinds into the host. Native failure travels in-band as
// one of three reserved marker values, and the outer entry point decodes
// them after every native call, in this fixed order:
//
//   1. interrupt marker  -> HostSignal::Interrupt
//   2. jump sentinel     -> HostSignal::Resume (carries the captured token)
//   3. error marker      -> HostSignal::Error (carries the message)
//   4. anything else is returned unchanged

use crate::bridge::value::Value;

// Marker tags carry a '#' prefix; host constructor tags are identifier-shaped,
// so user values can never alias a marker.
const INTERRUPT_TAG: &str = "#interrupt";
const JUMP_TAG: &str = "#jump";
const ERROR_TAG: &str = "#error";

/// What a native function can raise instead of returning.
#[derive(Clone, Debug, PartialEq)]
pub enum NativeError {
    /// The host's interrupt flag was observed mid-call.
    Interrupted,
    /// A previously captured non-local transfer must be resumed.
    Jump(i64),
    /// An ordinary failure with a message.
    Failure(String),
}

/// What the embedding host receives when a call does not return normally.
/// The host maps these onto its own interrupt / longjump / error machinery.
#[derive(Clone, Debug, PartialEq)]
pub enum HostSignal {
    Interrupt,
    Resume(i64),
    Error(String),
}

pub fn interrupt_marker() -> Value {
    Value::Ctor { tag: INTERRUPT_TAG.to_string(), fields: vec![] }
}

pub fn jump_marker(token: i64) -> Value {
    Value::Ctor { tag: JUMP_TAG.to_string(), fields: vec![Value::Int(token)] }
}

pub fn error_marker(msg: &str) -> Value {
    Value::Ctor { tag: ERROR_TAG.to_string(), fields: vec![Value::Str(msg.to_string())] }
}

/// Encode a typed native error as its in-band marker value.
pub fn encode_error(err: NativeError) -> Value {
    match err {
        NativeError::Interrupted => interrupt_marker(),
        NativeError::Jump(token) => jump_marker(token),
        NativeError::Failure(msg) => error_marker(&msg),
    }
}

/// Decode a try-shim result. Marker checks happen in the documented order;
/// every non-marker value passes through unchanged.
pub fn settle(result: Value) -> Result<Value, HostSignal> {
    if let Value::Ctor { tag, fields } = &result {
        if tag == INTERRUPT_TAG {
            return Err(HostSignal::Interrupt);
        }
        if tag == JUMP_TAG {
            let token = match fields.first() {
                Some(Value::Int(n)) => *n,
                // Malformed sentinel: a jump with no token cannot be resumed
                _ => return Err(HostSignal::Error("jump sentinel missing token".to_string())),
            };
            return Err(HostSignal::Resume(token));
        }
        if tag == ERROR_TAG {
            let msg = match fields.first() {
                Some(Value::Str(s)) => s.clone(),
                _ => "unknown native error".to_string(),
            };
            return Err(HostSignal::Error(msg));
        }
    }
    Ok(result)
}
