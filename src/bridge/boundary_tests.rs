//! Unit tests for the native boundary
//!
//! These cover the three load-bearing guarantees: the validator accepts
//! exactly the registered signatures, forwarding returns native results
//! unchanged, and registration is idempotent.

use crate::bridge::capability::{lookup_callable, register_capabilities, validate_signature, Callable};
use crate::bridge::method_table::{register_entry_points, MethodTable, ENTRY_POINTS};
use crate::bridge::outcome::{
    encode_error, error_marker, interrupt_marker, jump_marker, settle, HostSignal, NativeError,
};
use crate::bridge::shim;
use crate::bridge::value::Value;
use crate::bridge::MODULE_NAME;

fn registered_table() -> MethodTable {
    let mut table = MethodTable::new();
    register_entry_points(&mut table).unwrap();
    table
}

// ============================================================================
// Signature Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn accepts_exactly_the_registered_signatures() {
        assert!(validate_signature("Value(*reflect)(Value,Bool)"));
        assert!(validate_signature("Str(*describe)(Value)"));
    }

    #[test]
    fn rejects_near_misses_and_garbage() {
        // One token off in each position
        assert!(!validate_signature("Value(*reflect)(Value,Int)"));
        assert!(!validate_signature("Int(*reflect)(Value,Bool)"));
        assert!(!validate_signature("Value(*reflec)(Value,Bool)"));
        assert!(!validate_signature("Value(*reflect)(Value)"));

        // Whitespace and case are significant in the canonical form
        assert!(!validate_signature("Value(*reflect)(Value, Bool)"));
        assert!(!validate_signature("value(*reflect)(Value,Bool)"));

        assert!(!validate_signature(""));
        assert!(!validate_signature("not a signature"));
    }

    #[test]
    fn validation_is_stable_across_calls() {
        // The set is initialized once; repeated queries must agree
        for _ in 0..3 {
            assert!(validate_signature("Str(*describe)(Value)"));
            assert!(!validate_signature("Str(*describe)(Int)"));
        }
    }
}

// ============================================================================
// Forwarding Tests
// ============================================================================

mod forwarding_tests {
    use super::*;

    #[test]
    fn reflect_returns_its_argument_unchanged() {
        let table = registered_table();
        let payload = Value::List(vec![
            Value::Int(42),
            Value::Str("hello".to_string()),
            Value::Ctor { tag: "Pair".to_string(), fields: vec![Value::Unit, Value::Bool(true)] },
        ]);

        for fast in [true, false] {
            let result = table
                .call("_lyra_bridge_reflect", &[payload.clone(), Value::Bool(fast)])
                .unwrap();
            assert_eq!(result, payload);
        }
    }

    #[test]
    fn describe_reports_the_host_type_name() {
        let table = registered_table();
        let result = table
            .call("_lyra_bridge_describe", &[Value::Int(7)])
            .unwrap();
        assert_eq!(result, Value::Str("Int".to_string()));
    }

    #[test]
    fn type_mismatch_surfaces_as_host_error() {
        let table = registered_table();
        let err = table
            .call("_lyra_bridge_reflect", &[Value::Unit, Value::Int(1)])
            .unwrap_err();
        match err {
            HostSignal::Error(msg) => {
                assert!(msg.contains("reflect"));
                assert!(msg.contains("expected Bool"));
            }
            other => panic!("expected Error, got {:?}", other),
        }
    }

    #[test]
    fn wrong_argc_is_rejected_before_dispatch() {
        let table = registered_table();
        let err = table
            .call("_lyra_bridge_reflect", &[Value::Unit])
            .unwrap_err();
        match err {
            HostSignal::Error(msg) => assert!(msg.contains("expects 2 arguments")),
            other => panic!("expected Error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_entry_point_is_an_error_not_a_panic() {
        let table = registered_table();
        let err = table.call("_lyra_bridge_nope", &[]).unwrap_err();
        match err {
            HostSignal::Error(msg) => assert!(msg.contains("no entry point")),
            other => panic!("expected Error, got {:?}", other),
        }
    }

    #[test]
    fn try_shim_encodes_failure_in_band() {
        // The try variant never signals; failure rides as a marker value
        let result = shim::reflect_try(&[Value::Unit]);
        match &result {
            Value::Ctor { tag, .. } => assert_eq!(tag, "#error"),
            other => panic!("expected error marker, got {:?}", other),
        }
        // And the outer settle turns that marker into the host error
        assert!(matches!(settle(result), Err(HostSignal::Error(_))));
    }
}

// ============================================================================
// Outcome Classification Tests
// ============================================================================

mod outcome_tests {
    use super::*;

    #[test]
    fn markers_decode_to_the_matching_signal() {
        assert_eq!(settle(interrupt_marker()), Err(HostSignal::Interrupt));
        assert_eq!(settle(jump_marker(17)), Err(HostSignal::Resume(17)));
        assert_eq!(
            settle(error_marker("boom")),
            Err(HostSignal::Error("boom".to_string()))
        );
    }

    #[test]
    fn native_errors_encode_to_their_markers() {
        assert_eq!(
            settle(encode_error(NativeError::Interrupted)),
            Err(HostSignal::Interrupt)
        );
        assert_eq!(
            settle(encode_error(NativeError::Jump(3))),
            Err(HostSignal::Resume(3))
        );
        assert_eq!(
            settle(encode_error(NativeError::Failure("bad input".to_string()))),
            Err(HostSignal::Error("bad input".to_string()))
        );
    }

    #[test]
    fn plain_values_pass_through_unchanged() {
        let values = [
            Value::Int(5),
            Value::Bool(false),
            Value::Str("ok".to_string()),
            Value::Unit,
            Value::List(vec![Value::Int(1)]),
        ];
        for v in values {
            assert_eq!(settle(v.clone()), Ok(v));
        }
    }

    #[test]
    fn user_constructors_are_never_mistaken_for_markers() {
        // Host constructor tags are identifier-shaped; the '#' namespace is
        // reserved for the boundary
        let ctor = Value::Ctor {
            tag: "Interrupted".to_string(),
            fields: vec![Value::Str("looks like an error".to_string())],
        };
        assert_eq!(settle(ctor.clone()), Ok(ctor));
    }

    #[test]
    fn malformed_jump_sentinel_degrades_to_error() {
        let bad = Value::Ctor { tag: "#jump".to_string(), fields: vec![] };
        match settle(bad) {
            Err(HostSignal::Error(msg)) => assert!(msg.contains("missing token")),
            other => panic!("expected Error, got {:?}", other),
        }
    }
}

// ============================================================================
// Registration Tests
// ============================================================================

mod registration_tests {
    use super::*;

    #[test]
    fn registers_exactly_the_documented_entry_points() {
        let table = registered_table();
        assert_eq!(table.len(), ENTRY_POINTS.len());
        for (name, _, argc) in ENTRY_POINTS {
            let entry = table.get(name).expect("documented entry missing");
            assert_eq!(entry.argc, *argc);
        }
    }

    #[test]
    fn registration_is_idempotent() {
        let mut table = MethodTable::new();
        register_entry_points(&mut table).unwrap();
        register_entry_points(&mut table).unwrap();
        assert_eq!(table.len(), ENTRY_POINTS.len());

        // Entries still dispatch after the second registration
        let result = table
            .call("_lyra_bridge_describe", &[Value::Bool(true)])
            .unwrap();
        assert_eq!(result, Value::Str("Bool".to_string()));
    }

    #[test]
    fn capability_registration_exposes_shims_and_validator() {
        register_capabilities();
        // Twice: re-registration must be a no-op
        register_capabilities();

        match lookup_callable(MODULE_NAME, "_lyra_bridge_reflect") {
            Some(Callable::Entry(f)) => {
                let out = f(&[Value::Int(9), Value::Bool(true)]);
                assert_eq!(out, Value::Int(9));
            }
            _ => panic!("reflect try-shim not registered"),
        }

        match lookup_callable(MODULE_NAME, "_lyra_bridge_validate") {
            Some(Callable::Validator(v)) => {
                assert!(v("Value(*reflect)(Value,Bool)"));
                assert!(!v("Value(*reflect)(Bool,Value)"));
            }
            _ => panic!("validator not registered"),
        }

        assert!(lookup_callable(MODULE_NAME, "_lyra_bridge_missing").is_none());
        assert!(lookup_callable("other_module", "_lyra_bridge_reflect").is_none());
    }

    #[test]
    fn register_capabilities_entry_runs_through_the_table() {
        let table = registered_table();
        let result = table
            .call("_lyra_bridge_register_capabilities", &[])
            .unwrap();
        assert_eq!(result, Value::Unit);

        assert!(lookup_callable(MODULE_NAME, "_lyra_bridge_describe").is_some());
    }
}

// ============================================================================
// Marshaling Tests
// ============================================================================

mod marshaling_tests {
    use super::*;
    use crate::bridge::convert::{FromValue, IntoValue};

    #[test]
    fn scalars_round_trip() {
        assert_eq!(i64::from_value(&7i64.into_value()).unwrap(), 7);
        assert_eq!(bool::from_value(&true.into_value()).unwrap(), true);
        assert_eq!(
            String::from_value(&"abc".to_string().into_value()).unwrap(),
            "abc"
        );
        <()>::from_value(&().into_value()).unwrap();
    }

    #[test]
    fn lists_convert_elementwise() {
        let v = vec![1i64, 2, 3].into_value();
        assert_eq!(v, Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]));
        assert_eq!(Vec::<i64>::from_value(&v).unwrap(), vec![1, 2, 3]);

        let mixed = Value::List(vec![Value::Int(1), Value::Bool(false)]);
        let err = Vec::<i64>::from_value(&mixed).unwrap_err();
        assert!(err.contains("list element 1"));
    }

    #[test]
    fn options_map_to_host_constructors() {
        let some = Some(5i64).into_value();
        assert_eq!(
            some,
            Value::Ctor { tag: "Some".to_string(), fields: vec![Value::Int(5)] }
        );
        assert_eq!(Option::<i64>::from_value(&some).unwrap(), Some(5));

        let none = Option::<i64>::None.into_value();
        assert_eq!(Option::<i64>::from_value(&none).unwrap(), None);
    }

    #[test]
    fn mismatches_name_both_types() {
        let err = i64::from_value(&Value::Bool(true)).unwrap_err();
        assert!(err.contains("expected Int"));
        assert!(err.contains("Bool"));
    }
}
