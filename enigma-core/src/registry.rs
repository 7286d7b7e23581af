//! Wheel registry — the caller-owned catalogue of rotor and reflector
//! types.
//!
//! A fresh registry knows the built-in types from
//! [`crate::constants`]. Custom types are added explicitly; names are
//! unique across the registry's rotors and, separately, its reflectors.
//! Built-in names are reserved.

use std::collections::BTreeMap;

use crate::constants::{BUILTIN_REFLECTORS, BUILTIN_ROTORS};
use crate::errors::EnigmaError;
use crate::reflector::Reflector;
use crate::rotor::{Rotor, RotorType};

/// Rotor and reflector types available to build machines from.
#[derive(Debug, Clone)]
pub struct WheelRegistry {
    rotors: BTreeMap<String, RotorType>,
    reflectors: BTreeMap<String, Reflector>,
}

impl Default for WheelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl WheelRegistry {
    /// A registry holding only the built-in types.
    pub fn new() -> Self {
        let mut rotors = BTreeMap::new();
        for (name, wiring, notches) in BUILTIN_ROTORS {
            let notches: Vec<char> = notches.chars().collect();
            match RotorType::new(name, wiring, &notches) {
                Ok(t) => {
                    rotors.insert(name.to_string(), t);
                }
                Err(e) => tracing::error!("built-in rotor {name} skipped: {e}"),
            }
        }

        let mut reflectors = BTreeMap::new();
        for (name, wiring) in BUILTIN_REFLECTORS {
            match Reflector::new(name, wiring) {
                Ok(r) => {
                    reflectors.insert(name.to_string(), r);
                }
                Err(e) => tracing::error!("built-in reflector {name} skipped: {e}"),
            }
        }

        WheelRegistry { rotors, reflectors }
    }

    /// Register a custom rotor type.
    ///
    /// # Errors
    /// Returns `EnigmaError::InvalidInput` if the name is empty, already
    /// registered (built-in names are always taken), the wiring is not a
    /// bijection or a notch is not a letter.
    pub fn register_rotor(
        &mut self,
        name: &str,
        wiring: &str,
        notches: &[char],
    ) -> Result<&RotorType, EnigmaError> {
        check_name(name)?;
        if self.rotors.contains_key(name) {
            return Err(EnigmaError::invalid(format!(
                "rotor type {name:?} is already registered"
            )));
        }
        let rotor_type = RotorType::new(name, wiring, notches)?;
        tracing::debug!(rotor = name, wiring, "registered custom rotor");
        Ok(self.rotors.entry(name.to_string()).or_insert(rotor_type))
    }

    /// Register a custom reflector.
    ///
    /// # Errors
    /// Returns `EnigmaError::InvalidInput` if the name is empty or taken,
    /// or the wiring is not a bijection.
    pub fn register_reflector(&mut self, name: &str, wiring: &str) -> Result<&Reflector, EnigmaError> {
        check_name(name)?;
        if self.reflectors.contains_key(name) {
            return Err(EnigmaError::invalid(format!(
                "reflector {name:?} is already registered"
            )));
        }
        let reflector = Reflector::new(name, wiring)?;
        tracing::debug!(reflector = name, wiring, "registered custom reflector");
        Ok(self.reflectors.entry(name.to_string()).or_insert(reflector))
    }

    /// Look up a rotor type.
    ///
    /// # Errors
    /// Returns `EnigmaError::InvalidInput` for an unknown name.
    pub fn rotor_type(&self, name: &str) -> Result<&RotorType, EnigmaError> {
        self.rotors
            .get(name)
            .ok_or_else(|| EnigmaError::invalid(format!("unknown rotor type {name:?}")))
    }

    /// Mount a rotor of a registered type.
    ///
    /// # Errors
    /// Returns `EnigmaError::InvalidInput` for an unknown name or invalid
    /// start position / ring setting.
    pub fn rotor(
        &self,
        name: &str,
        start_position: char,
        ring_setting: u8,
        pawl: bool,
    ) -> Result<Rotor, EnigmaError> {
        Rotor::new(self.rotor_type(name)?, start_position, ring_setting, pawl)
    }

    /// Register a custom rotor type and mount it in one step.
    ///
    /// # Errors
    /// As [`WheelRegistry::register_rotor`] and [`Rotor::new`]. Nothing is
    /// registered if the mount settings are invalid.
    pub fn custom_rotor(
        &mut self,
        name: &str,
        wiring: &str,
        notches: &[char],
        start_position: char,
        ring_setting: u8,
        pawl: bool,
    ) -> Result<Rotor, EnigmaError> {
        check_name(name)?;
        let rotor_type = RotorType::new(name, wiring, notches)?;
        let rotor = Rotor::new(&rotor_type, start_position, ring_setting, pawl)?;
        self.register_rotor(name, wiring, notches)?;
        Ok(rotor)
    }

    /// Look up a reflector.
    ///
    /// # Errors
    /// Returns `EnigmaError::InvalidInput` for an unknown name.
    pub fn reflector(&self, name: &str) -> Result<Reflector, EnigmaError> {
        self.reflectors
            .get(name)
            .cloned()
            .ok_or_else(|| EnigmaError::invalid(format!("unknown reflector {name:?}")))
    }

    /// Register a custom reflector and return a copy of it.
    ///
    /// # Errors
    /// As [`WheelRegistry::register_reflector`].
    pub fn custom_reflector(&mut self, name: &str, wiring: &str) -> Result<Reflector, EnigmaError> {
        self.register_reflector(name, wiring).cloned()
    }

    /// Registered rotor type names, sorted.
    pub fn rotor_names(&self) -> Vec<&str> {
        self.rotors.keys().map(String::as_str).collect()
    }

    /// Registered reflector names, sorted.
    pub fn reflector_names(&self) -> Vec<&str> {
        self.reflectors.keys().map(String::as_str).collect()
    }
}

fn check_name(name: &str) -> Result<(), EnigmaError> {
    if name.trim().is_empty() {
        return Err(EnigmaError::invalid("wheel name must not be empty"));
    }
    Ok(())
}
