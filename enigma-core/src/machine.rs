//! Machine — plugboard, entry wheel, spindle and reflector composed into
//! one key press.
//!
//! Per letter: plugboard, entry wheel, step the spindle, spindle
//! right-to-left, reflector, spindle left-to-right, entry wheel back,
//! plugboard again. Stepping happens before the signal flows, so the
//! first letter of a message already sees the rotors one step past their
//! start positions.

use std::fmt;

use crate::codec::{index_letter, letter_index, normalize_letter, Contact, Wiring};
use crate::errors::EnigmaError;
use crate::plug::{PlugMapping, Plugboard};
use crate::reflector::Reflector;
use crate::spindle::Spindle;

/// Fixed substitution between the plugboard and the spindle.
///
/// Given wiring string `E`, an inbound letter `L` enters the spindle at
/// the position of `L` within `E`; an outbound position `i` leaves as
/// `E[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryWheel {
    wiring: Wiring,
}

impl EntryWheel {
    /// Parse an entry wheel wiring.
    ///
    /// # Errors
    /// Returns `EnigmaError::InvalidInput` unless `wiring` is a bijection
    /// over the alphabet.
    pub fn new(wiring: &str) -> Result<Self, EnigmaError> {
        Ok(EntryWheel {
            wiring: Wiring::parse(wiring)?,
        })
    }

    fn inbound(&self, letter: char) -> Result<char, EnigmaError> {
        Ok(index_letter(self.wiring.inverse(letter_index(letter)?)))
    }

    fn outbound(&self, letter: char) -> Result<char, EnigmaError> {
        Ok(index_letter(self.wiring.forward(letter_index(letter)?)))
    }

    /// `true` if the wheel passes every letter through unchanged.
    pub fn is_identity(&self) -> bool {
        self.wiring.is_identity()
    }
}

/// One key press as seen through the verbose trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTrace {
    /// Letter typed (uppercased).
    pub input: char,
    /// Front letters before stepping, leftmost rotor first.
    pub positions_before: Vec<char>,
    /// Front letters after stepping, leftmost rotor first.
    pub positions_after: Vec<char>,
    /// Letter lit on the lamp board.
    pub output: char,
}

impl fmt::Display for StepTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let before: String = self.positions_before.iter().collect();
        let after: String = self.positions_after.iter().collect();
        write!(
            f,
            "Start Position: {before}, Letter In: {}, End Position: {after}, Letter Out: {}",
            self.input, self.output
        )
    }
}

/// Result of [`Machine::encode_traced`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    /// The encoded message, identical to what [`Machine::encode`] returns.
    pub output: String,
    /// One entry per letter, in order.
    pub steps: Vec<StepTrace>,
}

/// A complete rotor machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    plugboard: Plugboard,
    spindle: Spindle,
    reflector: Reflector,
    entry_wheel: Option<EntryWheel>,
}

impl Machine {
    /// Assemble a machine. A missing plugboard is an empty board; a
    /// missing entry wheel is the identity.
    pub fn new(
        spindle: Spindle,
        reflector: Reflector,
        plugboard: Option<Plugboard>,
        entry_wheel: Option<EntryWheel>,
    ) -> Self {
        let plugboard = plugboard.unwrap_or_default();
        tracing::debug!(
            rotors = %spindle,
            reflector = reflector.name(),
            plugs = plugboard.engaged_letters() / 2,
            entry_wheel = entry_wheel.is_some(),
            "machine assembled"
        );
        Machine {
            plugboard,
            spindle,
            reflector,
            entry_wheel,
        }
    }

    /// Encode (or, equivalently, decode) a message.
    ///
    /// Letters are case-insensitive; the output is uppercase.
    ///
    /// # Errors
    /// Returns `EnigmaError::InvalidInput` if `text` is empty or contains a
    /// non-letter. Validation happens before any rotor moves, so a failed
    /// call leaves the machine untouched.
    pub fn encode(&mut self, text: &str) -> Result<String, EnigmaError> {
        let letters = validate_message(text)?;
        letters
            .into_iter()
            .map(|letter| self.press(letter))
            .collect()
    }

    /// Encode a message and record the rotor positions around every key
    /// press.
    ///
    /// # Errors
    /// As [`Machine::encode`].
    pub fn encode_traced(&mut self, text: &str) -> Result<Transcript, EnigmaError> {
        let letters = validate_message(text)?;
        let mut output = String::with_capacity(letters.len());
        let mut steps = Vec::with_capacity(letters.len());

        for letter in letters {
            let positions_before = self.spindle.positions();
            let out = self.press(letter)?;
            let step = StepTrace {
                input: letter,
                positions_before,
                positions_after: self.spindle.positions(),
                output: out,
            };
            tracing::debug!("{step}");
            output.push(out);
            steps.push(step);
        }

        Ok(Transcript { output, steps })
    }

    fn press(&mut self, letter: char) -> Result<char, EnigmaError> {
        let plugged = self.plugboard.encode(letter)?;
        let entered = match &self.entry_wheel {
            Some(etw) => etw.inbound(plugged)?,
            None => plugged,
        };
        let contact = Contact::from_letter(entered)?;

        self.spindle.advance();

        let there = self.spindle.encode_right_to_left(contact);
        let reflected = self.reflector.encode(there);
        let back = self.spindle.encode_left_to_right(reflected);

        let exited = match &self.entry_wheel {
            Some(etw) => etw.outbound(back.letter())?,
            None => back.letter(),
        };
        let out = self.plugboard.encode(exited)?;
        tracing::trace!(%letter, %contact, %there, %reflected, %back, %out, "signal path");
        Ok(out)
    }

    /// Current front letters, leftmost rotor first.
    pub fn positions(&self) -> Vec<char> {
        self.spindle.positions()
    }

    /// Return the rotors to their start positions.
    pub fn reset(&mut self) {
        self.spindle.reset();
    }

    /// The installed plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// The rotor stack.
    pub fn spindle(&self) -> &Spindle {
        &self.spindle
    }

    /// The reflector.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.spindle.rotors().map(|r| r.name()).collect();
        let starts: String = self.spindle.rotors().map(|r| r.start_position()).collect();
        let rings: Vec<String> = self
            .spindle
            .rotors()
            .map(|r| r.ring_setting().to_string())
            .collect();
        let pawls: Vec<String> = self
            .spindle
            .rotors()
            .map(|r| r.has_pawl().to_string())
            .collect();
        write!(
            f,
            "Rotors: [{}], Start Positions: {starts}, Ring Settings: [{}], Pawls: [{}], {}, {}",
            names.join(" "),
            rings.join(","),
            pawls.join(" "),
            self.reflector,
            self.plugboard
        )
    }
}

fn validate_message(text: &str) -> Result<Vec<char>, EnigmaError> {
    if text.is_empty() {
        return Err(EnigmaError::invalid("message must contain at least one letter"));
    }
    text.chars().map(normalize_letter).collect()
}
