//! Conformance: Stepping
//!
//! Invariants under test:
//! - The rightmost rotor steps on every key press
//! - A rotor steps when its right neighbor is on its notch with a pawl
//! - A rotor on its own notch with a pawl steps again (double step)
//! - One full revolution of the fast rotor carries the middle exactly once

use enigma_core::{Spindle, WheelRegistry};

fn spindle(names: &[&str], starts: &str) -> Spindle {
    let registry = WheelRegistry::new();
    let rotors = names
        .iter()
        .zip(starts.chars())
        .enumerate()
        .map(|(i, (name, start))| registry.rotor(name, start, 1, i > 0).unwrap())
        .collect();
    Spindle::new(rotors).unwrap()
}

fn window(s: &Spindle) -> String {
    s.positions().into_iter().collect()
}

#[test]
fn full_revolution_steps_middle_once() {
    let mut s = spindle(&["I", "II", "III"], "AAA");
    let mut middle_steps = 0;
    let mut last_middle = 'A';
    for _ in 0..26 {
        s.advance();
        let middle = s.positions()[1];
        if middle != last_middle {
            middle_steps += 1;
            last_middle = middle;
        }
    }
    assert_eq!(window(&s), "ABA");
    assert_eq!(middle_steps, 1);
}

#[test]
fn carry_happens_after_notch_letter() {
    let mut s = spindle(&["I", "II", "III"], "AAA");
    let mut seen = Vec::new();
    for _ in 0..23 {
        s.advance();
        seen.push(window(&s));
    }
    assert_eq!(seen[20], "AAV");
    assert_eq!(seen[21], "ABW");
}

#[test]
fn double_step_moves_middle_and_left_together() {
    let mut s = spindle(&["I", "II", "III"], "ADU");
    s.advance();
    assert_eq!(window(&s), "ADV");
    s.advance();
    // Middle reaches its notch E driven by III.
    assert_eq!(window(&s), "AEW");
    s.advance();
    // Right rotor is not on its notch; middle steps itself and drives left.
    assert_eq!(window(&s), "BFX");
    s.advance();
    assert_eq!(window(&s), "BFY");
}

#[test]
fn decisions_use_pre_step_snapshot() {
    // Middle at its notch E and right at V: both engaged before the step.
    let mut s = spindle(&["I", "II", "III"], "AEV");
    s.advance();
    // Middle steps once (not twice), left steps once.
    assert_eq!(window(&s), "BFW");
}

#[test]
fn rotor_without_pawl_never_drives() {
    let registry = WheelRegistry::new();
    let rotors = vec![
        registry.rotor("I", 'A', 1, false).unwrap(),
        registry.rotor("II", 'A', 1, true).unwrap(),
        registry.rotor("III", 'V', 1, false).unwrap(),
    ];
    let mut s = Spindle::new(rotors).unwrap();
    s.advance();
    assert_eq!(window(&s), "AAW");
}

#[test]
fn multiple_notches_carry_twice_per_revolution() {
    let mut registry = WheelRegistry::new();
    registry
        .register_rotor("VIII", "FKQHTLXOCBJSPDZRAMEWNIUYGV", &['H', 'U'])
        .unwrap();
    let rotors = vec![
        registry.rotor("I", 'A', 1, false).unwrap(),
        registry.rotor("II", 'A', 1, true).unwrap(),
        registry.rotor("VIII", 'A', 1, true).unwrap(),
    ];
    let mut s = Spindle::new(rotors).unwrap();
    for _ in 0..26 {
        s.advance();
    }
    assert_eq!(window(&s), "ACA");
}

#[test]
fn notchless_rotor_never_carries() {
    let mut s = spindle(&["I", "II", "Beta"], "AAA");
    for _ in 0..52 {
        s.advance();
    }
    assert_eq!(window(&s), "AAA");
}
