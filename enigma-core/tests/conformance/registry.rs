//! Conformance: Wheel Registry
//!
//! Invariants under test:
//! - Custom wirings must be bijections over A-Z
//! - Notches must be letters
//! - Built-in names are reserved; custom names are unique
//! - A custom reflector with a built-in's wiring behaves identically

use enigma_core::{Contact, EnigmaError, WheelRegistry, WiringStage};

#[test]
fn non_bijective_rotor_rejected() {
    let mut registry = WheelRegistry::new();
    for wiring in [
        "EKMFLGDQVZNTOWYHXUSPAIBRCE",
        "EKMFLGDQVZNTOWYHXUSPAIBRC",
        "ekmflgdqvzntowyhxuspaibrcj",
        "EKMFLGDQVZNTOWYHXUSPAIBRC-",
    ] {
        let err = registry.register_rotor("X", wiring, &[]).unwrap_err();
        assert!(matches!(err, EnigmaError::InvalidInput(_)), "{wiring}");
    }
    assert!(registry.rotor_type("X").is_err());
}

#[test]
fn non_bijective_reflector_rejected() {
    let mut registry = WheelRegistry::new();
    let err = registry
        .custom_reflector("X", "YRUHQSLDPXNGOKMIEBFZCWVJAY")
        .unwrap_err();
    assert!(matches!(err, EnigmaError::InvalidInput(_)));
}

#[test]
fn malformed_notch_rejected() {
    let mut registry = WheelRegistry::new();
    assert!(registry
        .register_rotor("X", "FKQHTLXOCBJSPDZRAMEWNIUYGV", &['H', '3'])
        .is_err());
}

#[test]
fn reserved_and_duplicate_names() {
    let mut registry = WheelRegistry::new();
    for name in ["I", "II", "III", "IV", "V", "Beta", "Gamma"] {
        assert!(registry
            .register_rotor(name, "FKQHTLXOCBJSPDZRAMEWNIUYGV", &[])
            .is_err());
    }
    for name in ["A", "B", "C"] {
        assert!(registry
            .register_reflector(name, "ENKQAUYWJICOPBLMDXZVFTHRGS")
            .is_err());
    }
    registry
        .register_reflector("THIN", "ENKQAUYWJICOPBLMDXZVFTHRGS")
        .unwrap();
    assert!(registry
        .register_reflector("THIN", "ENKQAUYWJICOPBLMDXZVFTHRGS")
        .is_err());
}

#[test]
fn custom_reflector_equals_builtin_wiring() {
    let mut registry = WheelRegistry::new();
    let custom = registry
        .custom_reflector("MY-B", "YRUHQSLDPXNGOKMIEBFZCWVJAT")
        .unwrap();
    let builtin = registry.reflector("B").unwrap();
    for n in 1..=26 {
        let c = Contact::new(n).unwrap();
        assert_eq!(custom.encode(c), builtin.encode(c));
        assert_eq!(custom.encode_left_to_right(c), builtin.encode_right_to_left(c));
    }
}

#[test]
fn permissive_reflector_accepted() {
    // Not an involution; accepted, with no physical counterpart.
    let mut registry = WheelRegistry::new();
    let r = registry
        .custom_reflector("SHIFT", "BCDEFGHIJKLMNOPQRSTUVWXYZA")
        .unwrap();
    assert!(!r.wiring().is_reciprocal());
}
