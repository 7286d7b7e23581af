//! Spindle — the ordered rotor stack and its stepping mechanism.
//!
//! ## Stepping
//!
//! On every key press, before the signal flows:
//!
//! 1. Each rotor is sampled as *engaged* if it sits on one of its notches
//!    and has a pawl to its left.
//! 2. The rightmost rotor always rotates.
//! 3. Any other rotor rotates if its right neighbor is engaged, or if it
//!    is engaged itself. The second case is the double step: a middle
//!    rotor that reached its notch is pushed again on the next key press
//!    together with its left neighbor.
//!
//! All decisions come from the snapshot taken in step 1.

use std::fmt;

use crate::codec::Contact;
use crate::errors::EnigmaError;
use crate::rotor::{Rotor, WiringStage};

/// An ordered stack of rotors driven by the keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spindle {
    // Index 0 is the rightmost (fast) rotor.
    rotors: Vec<Rotor>,
}

impl Spindle {
    /// Build a spindle from rotors listed as read in the windows, leftmost
    /// first. The last rotor given is the fast wheel next to the entry.
    ///
    /// # Errors
    /// Returns `EnigmaError::InvalidInput` if `rotors` is empty.
    pub fn new(mut rotors: Vec<Rotor>) -> Result<Self, EnigmaError> {
        if rotors.is_empty() {
            return Err(EnigmaError::invalid("spindle needs at least one rotor"));
        }
        rotors.reverse();
        Ok(Spindle { rotors })
    }

    /// Step the rotors for one key press.
    pub fn advance(&mut self) {
        let engaged: Vec<bool> = self
            .rotors
            .iter()
            .map(|r| r.on_notch() && r.has_pawl())
            .collect();

        for (i, rotor) in self.rotors.iter_mut().enumerate() {
            if i == 0 || engaged[i - 1] || engaged[i] {
                tracing::trace!(rotor = rotor.name(), from = %rotor.front_letter(), "stepping");
                rotor.rotate();
            }
        }
    }

    /// Signal path from the entry towards the reflector.
    pub fn encode_right_to_left(&self, contact: Contact) -> Contact {
        self.rotors
            .iter()
            .fold(contact, |c, rotor| rotor.encode_right_to_left(c))
    }

    /// Signal path from the reflector back to the entry.
    pub fn encode_left_to_right(&self, contact: Contact) -> Contact {
        self.rotors
            .iter()
            .rev()
            .fold(contact, |c, rotor| rotor.encode_left_to_right(c))
    }

    /// Front letters, leftmost rotor first.
    pub fn positions(&self) -> Vec<char> {
        self.rotors.iter().rev().map(Rotor::front_letter).collect()
    }

    /// Rotors, leftmost first.
    pub fn rotors(&self) -> impl Iterator<Item = &Rotor> {
        self.rotors.iter().rev()
    }

    /// Return every rotor to its start position.
    pub fn reset(&mut self) {
        self.rotors.iter_mut().for_each(Rotor::reset);
    }
}

impl fmt::Display for Spindle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let positions: String = self.positions().into_iter().collect();
        write!(f, "Rotor positions: {positions}")
    }
}
