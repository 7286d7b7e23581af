//! Declarative machine settings.
//!
//! A [`MachineConfig`] is the daily key sheet: wheel order, ring settings,
//! start positions, reflector, plug connections and an optional entry
//! wheel. [`MachineConfig::build`] resolves names against a
//! [`WheelRegistry`] and validates everything before a machine exists.
//!
//! With the `serde` feature the settings can be read from JSON:
//!
//! ```json
//! {
//!   "rotors": [
//!     { "name": "I", "start": "A" },
//!     { "name": "II", "start": "A" },
//!     { "name": "III", "start": "Z" }
//!   ],
//!   "reflector": "B",
//!   "plugboard": ["HL", "MO"]
//! }
//! ```

use crate::errors::EnigmaError;
use crate::machine::{EntryWheel, Machine};
use crate::plug::Plugboard;
use crate::registry::WheelRegistry;
use crate::spindle::Spindle;

/// Settings for one rotor slot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotorConfig {
    /// Registered rotor type name.
    pub name: String,
    /// Start position letter.
    #[cfg_attr(feature = "serde", serde(default = "default_start"))]
    pub start: char,
    /// Ring setting, `1..=26`.
    #[cfg_attr(feature = "serde", serde(default = "default_ring"))]
    pub ring: u8,
    /// Pawl to the left of this rotor. `None` means `false` for the
    /// leftmost slot and `true` elsewhere.
    #[cfg_attr(feature = "serde", serde(default))]
    pub pawl: Option<bool>,
}

#[cfg_attr(not(feature = "serde"), allow(dead_code))]
fn default_start() -> char {
    'A'
}

fn default_ring() -> u8 {
    1
}

impl RotorConfig {
    /// Rotor slot with ring setting 1 and the default pawl.
    pub fn new(name: &str, start: char) -> Self {
        RotorConfig {
            name: name.to_string(),
            start,
            ring: default_ring(),
            pawl: None,
        }
    }
}

/// Complete machine settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MachineConfig {
    /// Rotor slots as read in the windows, leftmost first.
    pub rotors: Vec<RotorConfig>,
    /// Registered reflector name.
    pub reflector: String,
    /// Plug leads as two-letter strings.
    #[cfg_attr(feature = "serde", serde(default))]
    pub plugboard: Vec<String>,
    /// Entry wheel wiring; absent means identity.
    #[cfg_attr(feature = "serde", serde(default))]
    pub entry_wheel: Option<String>,
}

impl MachineConfig {
    /// Settings from compact key-sheet notation: whitespace-separated
    /// rotor names, one start letter per rotor, and optionally one ring
    /// setting per rotor (defaults to all 1).
    ///
    /// # Errors
    /// Returns `EnigmaError::InvalidInput` if the counts disagree.
    pub fn from_key_sheet(
        rotors: &str,
        positions: &str,
        rings: Option<&[u8]>,
        reflector: &str,
    ) -> Result<Self, EnigmaError> {
        let names: Vec<&str> = rotors.split_whitespace().collect();
        let starts: Vec<char> = positions.chars().collect();
        if names.len() != starts.len() {
            return Err(EnigmaError::invalid(format!(
                "{} rotors but {} start positions",
                names.len(),
                starts.len()
            )));
        }
        if let Some(rings) = rings {
            if rings.len() != names.len() {
                return Err(EnigmaError::invalid(format!(
                    "{} rotors but {} ring settings",
                    names.len(),
                    rings.len()
                )));
            }
        }

        let rotors = names
            .iter()
            .zip(starts)
            .enumerate()
            .map(|(i, (name, start))| RotorConfig {
                ring: rings.map_or(default_ring(), |r| r[i]),
                ..RotorConfig::new(name, start)
            })
            .collect();

        Ok(MachineConfig {
            rotors,
            reflector: reflector.to_string(),
            plugboard: Vec::new(),
            entry_wheel: None,
        })
    }

    /// Resolve and validate the settings into a machine at its start
    /// position.
    ///
    /// # Errors
    /// Returns the first `EnigmaError` raised by any component.
    pub fn build(&self, registry: &WheelRegistry) -> Result<Machine, EnigmaError> {
        let rotors = self
            .rotors
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                let pawl = slot.pawl.unwrap_or(i > 0);
                registry.rotor(&slot.name, slot.start, slot.ring, pawl)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let spindle = Spindle::new(rotors)?;
        let reflector = registry.reflector(&self.reflector)?;

        let mut plugboard = Plugboard::new();
        plugboard.add_many(&self.plugboard)?;

        let entry_wheel = self
            .entry_wheel
            .as_deref()
            .map(EntryWheel::new)
            .transpose()?;

        Ok(Machine::new(spindle, reflector, Some(plugboard), entry_wheel))
    }
}
