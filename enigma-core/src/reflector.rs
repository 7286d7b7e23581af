//! Reflector — the fixed wheel that turns the signal back through the
//! spindle.

use std::fmt;

use crate::codec::{Contact, Wiring};
use crate::errors::EnigmaError;
use crate::rotor::WiringStage;

/// A non-rotating wheel with no ring setting, notch or pawl.
///
/// Custom wirings only need to be bijections. A wiring that is not its
/// own inverse, or that maps a letter to itself, is accepted but does not
/// describe a buildable reflector; the machine stays deterministic but
/// loses the encode == decode property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    name: String,
    wiring: Wiring,
}

impl Reflector {
    /// Build a reflector from a 26-letter wiring.
    ///
    /// # Errors
    /// Returns `EnigmaError::InvalidInput` if `wiring` is not a bijection
    /// over the alphabet.
    pub fn new(name: &str, wiring: &str) -> Result<Self, EnigmaError> {
        let wiring = Wiring::parse(wiring)?;
        if !wiring.is_reciprocal() {
            tracing::warn!(reflector = name, "reflector wiring is not a fixed-point-free involution");
        }
        Ok(Reflector {
            name: name.to_string(),
            wiring,
        })
    }

    /// Reflector name, e.g. `"B"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The reflector's wiring.
    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    /// Reflect a contact.
    pub fn encode(&self, contact: Contact) -> Contact {
        Contact::from_offset(self.wiring.forward(contact.offset()))
    }
}

impl WiringStage for Reflector {
    fn encode_right_to_left(&self, contact: Contact) -> Contact {
        self.encode(contact)
    }

    fn encode_left_to_right(&self, contact: Contact) -> Contact {
        self.encode(contact)
    }
}

impl fmt::Display for Reflector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reflector: {}", self.name)
    }
}
