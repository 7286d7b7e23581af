//! Conformance: Plugboard
//!
//! Invariants under test:
//! - Every lead is symmetric; unplugged letters pass through
//! - At most 10 leads (20 letters) engaged
//! - Reusing an engaged letter unplugs the old lead first
//! - The batch pre-check counts current letters plus two per lead

use enigma_core::{EnigmaError, PlugLead, PlugMapping, Plugboard};

const TEN: [&str; 10] = ["AB", "CD", "EF", "GH", "IJ", "KL", "MN", "OP", "QR", "ST"];

#[test]
fn symmetric_mapping() {
    let mut pb = Plugboard::new();
    pb.add_many(&TEN).unwrap();
    for lead in TEN {
        let mut chars = lead.chars();
        let (a, b) = (chars.next().unwrap(), chars.next().unwrap());
        assert_eq!(pb.encode(a).unwrap(), b);
        assert_eq!(pb.encode(b).unwrap(), a);
    }
    for c in 'U'..='Z' {
        assert_eq!(pb.encode(c).unwrap(), c);
        assert!(!pb.contains(c).unwrap());
    }
}

#[test]
fn eleventh_disjoint_lead_rejected() {
    let mut pb = Plugboard::new();
    pb.add_many(&TEN).unwrap();
    let err = pb.add(PlugLead::new("UV").unwrap()).unwrap_err();
    assert!(matches!(err, EnigmaError::Capacity(_)));
    assert!(!pb.contains('U').unwrap());
}

#[test]
fn eleven_lead_batch_rejected_before_install() {
    let mut pb = Plugboard::new();
    let mut eleven = TEN.to_vec();
    eleven.push("UV");
    let err = pb.add_many(&eleven).unwrap_err();
    assert!(matches!(err, EnigmaError::Capacity(_)));
    assert_eq!(pb.engaged_letters(), 0);
}

#[test]
fn reused_letter_evicts_and_succeeds() {
    let mut pb = Plugboard::new();
    pb.add_many(&TEN).unwrap();
    pb.add(PlugLead::new("BY").unwrap()).unwrap();
    assert_eq!(pb.encode('B').unwrap(), 'Y');
    assert_eq!(pb.encode('A').unwrap(), 'A');
    assert_eq!(pb.engaged_letters(), 20);
}

#[test]
fn batch_precheck_is_not_lenient() {
    let mut pb = Plugboard::new();
    pb.add_many(&TEN[..9]).unwrap();
    // Replacing one existing lead would fit after eviction, but the
    // pre-check counts 18 + 4.
    assert!(pb.add_many(&["AB", "UV"]).is_err());
    // Exactly at the limit is fine.
    assert!(pb.add_many(&["UV"]).is_ok());
    assert_eq!(pb.engaged_letters(), 20);
}

#[test]
fn lead_and_board_share_contract() {
    fn swap<M: PlugMapping>(m: &M, c: char) -> char {
        m.encode(c).unwrap()
    }
    let lead = PlugLead::new("QZ").unwrap();
    let mut board = Plugboard::new();
    board.add(lead).unwrap();
    for c in 'A'..='Z' {
        assert_eq!(swap(&lead, c), swap(&board, c));
    }
}
