//! Conformance: Error Taxonomy
//!
//! Invariants under test:
//! - Every error maps to a canonical code
//! - Failing operations do not mutate state
//! - Message validation is fail-fast and whole-call

use enigma_core::errors::{is_valid_error_code, ERROR_CODES};
use enigma_core::{EnigmaError, MachineConfig, PlugLead, Plugboard, Rotor, WheelRegistry};

fn machine() -> enigma_core::Machine {
    MachineConfig::from_key_sheet("I II III", "AAZ", None, "B")
        .unwrap()
        .build(&WheelRegistry::new())
        .unwrap()
}

#[test]
fn every_variant_has_canonical_code() {
    let errors = [
        EnigmaError::InvalidInput("x".into()),
        EnigmaError::Capacity("x".into()),
    ];
    for err in &errors {
        assert!(is_valid_error_code(err.code()));
    }
    assert_eq!(errors.len(), ERROR_CODES.len());
}

#[test]
fn empty_message_is_invalid_input() {
    let err = machine().encode("").unwrap_err();
    assert_eq!(err.code(), "INVALID_INPUT");
}

#[test]
fn invalid_character_leaves_rotors_unmoved() {
    let mut m = machine();
    for text in ["AB C", "ABC!", "9", "ÄBC"] {
        assert!(m.encode(text).is_err(), "{text}");
        assert!(m.encode_traced(text).is_err(), "{text}");
    }
    assert_eq!(m.positions(), vec!['A', 'A', 'Z']);
    // The machine is still usable from its start position.
    assert_eq!(m.encode("A").unwrap(), "U");
}

#[test]
fn rotor_settings_validated() {
    let registry = WheelRegistry::new();
    let ty = registry.rotor_type("I").unwrap();
    for ring in [0u8, 27, 255] {
        let err = Rotor::new(ty, 'A', ring, true).unwrap_err();
        assert_eq!(err.code(), "INVALID_INPUT");
    }
    assert!(Rotor::new(ty, '#', 1, true).is_err());
}

#[test]
fn plug_lead_validated() {
    for lead in ["", "A", "AA", "ABC", "a1", "ab"] {
        let err = PlugLead::new(lead).unwrap_err();
        assert_eq!(err.code(), "INVALID_INPUT", "{lead:?}");
    }
}

#[test]
fn failed_add_leaves_board_unchanged() {
    let mut pb = Plugboard::new();
    pb.add_many(&["AB", "CD", "EF", "GH", "IJ", "KL", "MN", "OP", "QR", "ST"])
        .unwrap();
    let before = pb.clone();
    assert!(pb.add(PlugLead::new("UV").unwrap()).is_err());
    assert!(pb.add_many(&["WX"]).is_err());
    assert_eq!(pb, before);
}
