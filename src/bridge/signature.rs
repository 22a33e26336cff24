// Canonical signature strings
// A signature encodes return and parameter types alongside the function
// name, e.g. Value(*reflect)(Value,Bool). Other modules compare these
// strings against the validator before calling an entry point dynamically.

use regex::Regex;

/// Type tokens admitted in a canonical signature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TypeToken {
    Value,
    Int,
    Bool,
    Str,
    Unit,
}

impl TypeToken {
    pub fn spelling(&self) -> &'static str {
        match self {
            TypeToken::Value => "Value",
            TypeToken::Int => "Int",
            TypeToken::Bool => "Bool",
            TypeToken::Str => "Str",
            TypeToken::Unit => "Unit",
        }
    }
}

/// Build the canonical signature string for a native function.
pub fn encode_signature(ret: TypeToken, name: &str, params: &[TypeToken]) -> String {
    let param_list: Vec<&str> = params.iter().map(|t| t.spelling()).collect();
    format!("{}(*{})({})", ret.spelling(), name, param_list.join(","))
}

/// Grammar check only; membership is the validator's job.
pub fn is_well_formed(sig: &str) -> bool {
    let re = Regex::new(
        r"^(Value|Int|Bool|Str|Unit)\(\*[a-z_][a-z0-9_]*\)\((?:(?:Value|Int|Bool|Str|Unit)(?:,(?:Value|Int|Bool|Str|Unit))*)?\)$",
    )
    .unwrap();
    re.is_match(sig)
}
