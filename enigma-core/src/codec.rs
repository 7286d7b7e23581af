//! Letter/contact codec and wiring validation.
//!
//! Wheels are addressed by 1-based contact index (`1..=26`), letters by
//! their position in [`crate::constants::ALPHABET`]. [`Contact`] is the
//! only way to name a contact, so every value that reaches a wheel is
//! already in range.

use std::fmt;

use crate::constants::ALPHABET_LEN;
use crate::errors::EnigmaError;

/// A 1-based contact position on a wheel, always within `1..=26`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Contact(u8);

impl Contact {
    /// Contact from a 1-based index.
    ///
    /// # Errors
    /// Returns `EnigmaError::InvalidInput` if `index` is outside `1..=26`.
    pub fn new(index: u8) -> Result<Self, EnigmaError> {
        if index == 0 || usize::from(index) > ALPHABET_LEN {
            return Err(EnigmaError::invalid(format!(
                "contact {index} outside 1-{ALPHABET_LEN}"
            )));
        }
        Ok(Contact(index))
    }

    /// Contact carrying an uppercase letter (`A` is contact 1).
    ///
    /// # Errors
    /// Returns `EnigmaError::InvalidInput` if `letter` is not `A..=Z`.
    pub fn from_letter(letter: char) -> Result<Self, EnigmaError> {
        letter_index(letter).map(Contact::from_offset)
    }

    /// Contact at a 0-based offset, reduced modulo 26.
    pub(crate) fn from_offset(offset: usize) -> Self {
        Contact((offset % ALPHABET_LEN) as u8 + 1)
    }

    /// The 1-based index.
    pub fn get(self) -> u8 {
        self.0
    }

    /// The 0-based offset (`index - 1`).
    pub fn offset(self) -> usize {
        usize::from(self.0) - 1
    }

    /// The alphabet letter at this contact.
    pub fn letter(self) -> char {
        index_letter(self.offset())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 0-based alphabet position of an uppercase letter.
///
/// # Errors
/// Returns `EnigmaError::InvalidInput` for anything but `A..=Z`.
pub fn letter_index(letter: char) -> Result<usize, EnigmaError> {
    if letter.is_ascii_uppercase() {
        Ok(usize::from(letter as u8 - b'A'))
    } else {
        Err(EnigmaError::invalid(format!(
            "expected an uppercase letter A-Z, got {letter:?}"
        )))
    }
}

/// Letter at a 0-based alphabet position, reduced modulo 26.
pub fn index_letter(index: usize) -> char {
    char::from(b'A' + (index % ALPHABET_LEN) as u8)
}

/// Fold an alphabetic character to uppercase.
///
/// # Errors
/// Returns `EnigmaError::InvalidInput` for non-alphabetic input.
pub fn normalize_letter(letter: char) -> Result<char, EnigmaError> {
    if letter.is_ascii_alphabetic() {
        Ok(letter.to_ascii_uppercase())
    } else {
        Err(EnigmaError::invalid(format!("expected a letter A-Z, got {letter:?}")))
    }
}

/// A validated permutation of the alphabet, with its inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wiring {
    forward: [u8; ALPHABET_LEN],
    inverse: [u8; ALPHABET_LEN],
}

impl Wiring {
    /// Parse a 26-letter wiring string: letter `i` is the image of
    /// `ALPHABET[i]`.
    ///
    /// # Errors
    /// Returns `EnigmaError::InvalidInput` unless `mapping` contains every
    /// uppercase letter exactly once.
    pub fn parse(mapping: &str) -> Result<Self, EnigmaError> {
        let not_bijective =
            || EnigmaError::invalid(format!("wiring {mapping:?} must use every letter A-Z once"));

        if mapping.chars().count() != ALPHABET_LEN {
            return Err(not_bijective());
        }

        let mut forward = [0u8; ALPHABET_LEN];
        let mut inverse = [u8::MAX; ALPHABET_LEN];
        for (i, c) in mapping.chars().enumerate() {
            let image = letter_index(c).map_err(|_| not_bijective())?;
            if inverse[image] != u8::MAX {
                return Err(not_bijective());
            }
            forward[i] = image as u8;
            inverse[image] = i as u8;
        }

        Ok(Wiring { forward, inverse })
    }

    /// The identity wiring.
    pub fn identity() -> Self {
        let mut forward = [0u8; ALPHABET_LEN];
        for (i, slot) in forward.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Wiring {
            forward,
            inverse: forward,
        }
    }

    /// Image of a 0-based position.
    pub fn forward(&self, index: usize) -> usize {
        usize::from(self.forward[index % ALPHABET_LEN])
    }

    /// Pre-image of a 0-based position.
    pub fn inverse(&self, index: usize) -> usize {
        usize::from(self.inverse[index % ALPHABET_LEN])
    }

    /// `true` if the wiring is its own inverse with no letter mapped to
    /// itself, as every physical reflector is.
    pub fn is_reciprocal(&self) -> bool {
        self.forward == self.inverse
            && self
                .forward
                .iter()
                .enumerate()
                .all(|(i, &o)| usize::from(o) != i)
    }

    /// `true` if every letter maps to itself.
    pub fn is_identity(&self) -> bool {
        self.forward.iter().enumerate().all(|(i, &o)| usize::from(o) == i)
    }
}

impl fmt::Display for Wiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: String = self
            .forward
            .iter()
            .map(|&i| index_letter(usize::from(i)))
            .collect();
        f.write_str(&letters)
    }
}
