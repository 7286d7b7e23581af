//! Rotors — wired wheels with rotational state, ring setting and notches.
//!
//! A rotor's state is a single offset: the alphabet position of the letter
//! currently at contact 1 (its "front letter"). `rotate` advances it by
//! one. The letter at contact `c` is `ALPHABET[(c - 1 + offset) mod 26]`.
//!
//! Notches are stored pre-adjusted for the ring setting, so "is this rotor
//! on its notch" is a direct comparison with the current offset.

use std::fmt;

use crate::codec::{index_letter, letter_index, normalize_letter, Contact, Wiring};
use crate::constants::ALPHABET_LEN;
use crate::errors::EnigmaError;

/// A stage the signal passes through in each direction.
///
/// Rotors rotate between letters; a reflector is the degenerate stage
/// with no rotation and the same wiring both ways.
pub trait WiringStage {
    /// Signal entering from the right (towards the reflector).
    fn encode_right_to_left(&self, contact: Contact) -> Contact;

    /// Signal returning from the left (away from the reflector).
    fn encode_left_to_right(&self, contact: Contact) -> Contact;
}

/// A rotor model: its name, wiring and raw notch letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorType {
    name: String,
    wiring: Wiring,
    notches: Vec<char>,
}

impl RotorType {
    /// Validate and build a rotor type.
    ///
    /// `notches` may be empty (no notch) or hold several letters; they are
    /// folded to uppercase.
    ///
    /// # Errors
    /// Returns `EnigmaError::InvalidInput` if `wiring` is not a bijection
    /// over the alphabet or any notch is not a letter.
    pub fn new(name: &str, wiring: &str, notches: &[char]) -> Result<Self, EnigmaError> {
        let wiring = Wiring::parse(wiring)?;
        let mut folded = Vec::with_capacity(notches.len());
        for &notch in notches {
            let notch = normalize_letter(notch)
                .map_err(|_| EnigmaError::invalid(format!("notch {notch:?} must be a letter A-Z")))?;
            if !folded.contains(&notch) {
                folded.push(notch);
            }
        }
        Ok(RotorType {
            name: name.to_string(),
            wiring,
            notches: folded,
        })
    }

    /// Type name, e.g. `"III"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw notch letters as engraved on the wheel.
    pub fn notches(&self) -> &[char] {
        &self.notches
    }

    /// The wheel's wiring.
    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }
}

/// A rotor mounted in a machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    name: String,
    wiring: Wiring,
    notches: Vec<char>,
    // Alphabet positions the front letter shows when the notch is engaged.
    adjusted_notches: Vec<usize>,
    ring_setting: u8,
    start_position: char,
    initial_offset: usize,
    offset: usize,
    pawl: bool,
}

impl Rotor {
    /// Mount a rotor of `rotor_type` at `start_position` with `ring_setting`.
    ///
    /// `pawl` says whether a driving pawl sits to this rotor's left, i.e.
    /// whether its notch can step the left neighbor. The leftmost wheel
    /// has nothing to drive and normally carries `false`.
    ///
    /// # Errors
    /// Returns `EnigmaError::InvalidInput` if `start_position` is not a
    /// letter or `ring_setting` is outside `1..=26`.
    pub fn new(
        rotor_type: &RotorType,
        start_position: char,
        ring_setting: u8,
        pawl: bool,
    ) -> Result<Self, EnigmaError> {
        let start_position = normalize_letter(start_position).map_err(|_| {
            EnigmaError::invalid(format!("start position {start_position:?} must be a letter A-Z"))
        })?;
        if ring_setting == 0 || usize::from(ring_setting) > ALPHABET_LEN {
            return Err(EnigmaError::invalid(format!(
                "ring setting {ring_setting} must be an integer 1-26"
            )));
        }

        let ring = usize::from(ring_setting);
        let initial_offset = shift(letter_index(start_position)?, ring);
        let adjusted_notches = rotor_type
            .notches
            .iter()
            .map(|&n| letter_index(n).map(|i| shift(i, ring)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Rotor {
            name: rotor_type.name.clone(),
            wiring: rotor_type.wiring.clone(),
            notches: rotor_type.notches.clone(),
            adjusted_notches,
            ring_setting,
            start_position,
            initial_offset,
            offset: initial_offset,
            pawl,
        })
    }

    /// Advance one position (front letter moves to the back).
    pub fn rotate(&mut self) {
        self.offset = (self.offset + 1) % ALPHABET_LEN;
    }

    /// Return to the configured start position.
    pub fn reset(&mut self) {
        self.offset = self.initial_offset;
    }

    /// Letter currently at contact 1.
    pub fn front_letter(&self) -> char {
        index_letter(self.offset)
    }

    /// `true` if the front letter is one of the ring-adjusted notches.
    pub fn on_notch(&self) -> bool {
        self.adjusted_notches.contains(&self.offset)
    }

    /// `true` if this rotor's notch can drive its left neighbor.
    pub fn has_pawl(&self) -> bool {
        self.pawl
    }

    /// Rotor type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configured start position.
    pub fn start_position(&self) -> char {
        self.start_position
    }

    /// Configured ring setting (`1..=26`).
    pub fn ring_setting(&self) -> u8 {
        self.ring_setting
    }

    /// Ring-adjusted notch letters as compared against the front letter.
    pub fn adjusted_notches(&self) -> Vec<char> {
        self.adjusted_notches.iter().map(|&i| index_letter(i)).collect()
    }

    fn through(&self, contact: Contact, image: impl Fn(usize) -> usize) -> Contact {
        let connector = (contact.offset() + self.offset) % ALPHABET_LEN;
        let pin = image(connector);
        Contact::from_offset(pin + ALPHABET_LEN - self.offset)
    }
}

// Ring-setting correction: `(index + 1 - ring) mod 26`, with ring in 1..=26.
fn shift(index: usize, ring: usize) -> usize {
    (index + 1 + ALPHABET_LEN - ring) % ALPHABET_LEN
}

impl WiringStage for Rotor {
    fn encode_right_to_left(&self, contact: Contact) -> Contact {
        self.through(contact, |i| self.wiring.forward(i))
    }

    fn encode_left_to_right(&self, contact: Contact) -> Contact {
        self.through(contact, |i| self.wiring.inverse(i))
    }
}

impl fmt::Display for Rotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let notches: String = self.notches.iter().collect();
        let adjusted: String = self.adjusted_notches().into_iter().collect();
        write!(
            f,
            "Rotor: {}, Start Position: {}, Ring Setting: {}, Notch: [{}] (Adj. Notch: [{}]), Current Position: {}",
            self.name,
            self.start_position,
            self.ring_setting,
            notches,
            adjusted,
            self.front_letter()
        )
    }
}
