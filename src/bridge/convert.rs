// Argument/result marshaling
// Host arguments arrive as Value; native code wants real types. These traits
// are the single place that conversion lives so every entry point marshals
// the same way.

use crate::bridge::value::Value;

/// Convert a host value into a native type. Fails with a message naming the
/// expected and actual types; the shim turns that into an error marker.
pub trait FromValue: Sized {
    fn from_value(v: &Value) -> Result<Self, String>;
}

/// Convert a native result back into the host representation.
pub trait IntoValue {
    fn into_value(self) -> Value;
}

impl FromValue for Value {
    fn from_value(v: &Value) -> Result<Self, String> {
        Ok(v.clone())
    }
}

impl FromValue for i64 {
    fn from_value(v: &Value) -> Result<Self, String> {
        match v {
            Value::Int(n) => Ok(*n),
            other => Err(format!("expected Int, got {}", other.type_name())),
        }
    }
}

impl FromValue for bool {
    fn from_value(v: &Value) -> Result<Self, String> {
        match v {
            Value::Bool(b) => Ok(*b),
            other => Err(format!("expected Bool, got {}", other.type_name())),
        }
    }
}

impl FromValue for String {
    fn from_value(v: &Value) -> Result<Self, String> {
        match v {
            Value::Str(s) => Ok(s.clone()),
            other => Err(format!("expected Str, got {}", other.type_name())),
        }
    }
}

impl FromValue for () {
    fn from_value(v: &Value) -> Result<Self, String> {
        match v {
            Value::Unit => Ok(()),
            other => Err(format!("expected Unit, got {}", other.type_name())),
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(v: &Value) -> Result<Self, String> {
        match v {
            Value::List(elems) => {
                let mut out = Vec::with_capacity(elems.len());
                for (i, elem) in elems.iter().enumerate() {
                    out.push(T::from_value(elem)
                        .map_err(|e| format!("list element {}: {}", i, e))?);
                }
                Ok(out)
            },
            other => Err(format!("expected List, got {}", other.type_name())),
        }
    }
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl IntoValue for i64 {
    fn into_value(self) -> Value {
        Value::Int(self)
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::Str(self)
    }
}

impl IntoValue for () {
    fn into_value(self) -> Value {
        Value::Unit
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(IntoValue::into_value).collect())
    }
}

// Options map onto the host's Some/None constructors
impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        match self {
            Some(inner) => Value::Ctor {
                tag: "Some".to_string(),
                fields: vec![inner.into_value()],
            },
            None => Value::Ctor {
                tag: "None".to_string(),
                fields: vec![],
            },
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(v: &Value) -> Result<Self, String> {
        match v {
            Value::Ctor { tag, fields } if tag == "Some" && fields.len() == 1 => {
                Ok(Some(T::from_value(&fields[0])?))
            },
            Value::Ctor { tag, fields } if tag == "None" && fields.is_empty() => Ok(None),
            other => Err(format!("expected Some/None, got {}", other.type_name())),
        }
    }
}
