//! Plug leads and the plugboard.
//!
//! Both are symmetric partial permutations of the alphabet: every letter
//! maps to itself unless paired, and a paired letter maps to its partner.
//! They share the [`PlugMapping`] capability rather than a common base.
//!
//! Arguments to `encode` / `contains` must already be single uppercase
//! letters; case folding happens in [`crate::machine::Machine`].

use std::fmt;
use std::str::FromStr;

use crate::codec::{index_letter, letter_index};
use crate::constants::{ALPHABET_LEN, MAX_PLUGBOARD_LETTERS};
use crate::errors::EnigmaError;

/// Shared contract of a single lead and a full board.
pub trait PlugMapping {
    /// Partner of `letter` if it is engaged, otherwise `letter` itself.
    ///
    /// # Errors
    /// Returns `EnigmaError::InvalidInput` unless `letter` is `A..=Z`.
    fn encode(&self, letter: char) -> Result<char, EnigmaError>;

    /// `true` if `letter` is engaged by any lead.
    ///
    /// # Errors
    /// Returns `EnigmaError::InvalidInput` unless `letter` is `A..=Z`.
    fn contains(&self, letter: char) -> Result<bool, EnigmaError>;
}

/// A single cable joining two distinct letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlugLead {
    a: char,
    b: char,
}

impl PlugLead {
    /// Lead from a two-letter string such as `"AB"`.
    ///
    /// # Errors
    /// Returns `EnigmaError::InvalidInput` unless `lead` is exactly two
    /// distinct uppercase letters.
    pub fn new(lead: &str) -> Result<Self, EnigmaError> {
        let mut chars = lead.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => PlugLead::pair(a, b),
            _ => Err(EnigmaError::invalid(format!(
                "plug lead {lead:?} must be exactly two letters"
            ))),
        }
    }

    /// Lead joining `a` and `b`.
    ///
    /// # Errors
    /// Returns `EnigmaError::InvalidInput` unless both are uppercase
    /// letters and `a != b`.
    pub fn pair(a: char, b: char) -> Result<Self, EnigmaError> {
        letter_index(a)?;
        letter_index(b)?;
        if a == b {
            return Err(EnigmaError::invalid(format!(
                "plug lead letters must differ, got {a}{b}"
            )));
        }
        Ok(PlugLead { a, b })
    }

    /// The two letters, in the order given.
    pub fn letters(&self) -> (char, char) {
        (self.a, self.b)
    }
}

impl PlugMapping for PlugLead {
    fn encode(&self, letter: char) -> Result<char, EnigmaError> {
        letter_index(letter)?;
        Ok(if letter == self.a {
            self.b
        } else if letter == self.b {
            self.a
        } else {
            letter
        })
    }

    fn contains(&self, letter: char) -> Result<bool, EnigmaError> {
        letter_index(letter)?;
        Ok(letter == self.a || letter == self.b)
    }
}

impl FromStr for PlugLead {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlugLead::new(s)
    }
}

impl fmt::Display for PlugLead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.a, self.b)
    }
}

/// A board of up to ten leads.
///
/// Installing a lead that reuses an engaged letter first unplugs the lead
/// holding that letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    // Image of each 0-based letter; unpaired letters map to themselves.
    map: [u8; ALPHABET_LEN],
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugboard {
    /// An empty board: every letter maps to itself.
    pub fn new() -> Self {
        let mut map = [0u8; ALPHABET_LEN];
        for (i, slot) in map.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Plugboard { map }
    }

    /// Install one lead, unplugging any lead that holds either letter.
    ///
    /// # Errors
    /// Returns `EnigmaError::Capacity` if more than
    /// [`MAX_PLUGBOARD_LETTERS`] letters would be engaged afterwards. The
    /// board is unchanged on error.
    pub fn add(&mut self, lead: PlugLead) -> Result<(), EnigmaError> {
        let (a, b) = lead.letters();
        let (ia, ib) = (letter_index(a)?, letter_index(b)?);

        let mut next = self.map;
        for i in [ia, ib] {
            let partner = usize::from(next[i]);
            if partner != i {
                tracing::trace!(
                    evicted = %format!("{}{}", index_letter(i), index_letter(partner)),
                    "unplugging lead"
                );
                next[i] = i as u8;
                next[partner] = partner as u8;
            }
        }
        next[ia] = ib as u8;
        next[ib] = ia as u8;

        let engaged = engaged_in(&next);
        if engaged > MAX_PLUGBOARD_LETTERS {
            return Err(EnigmaError::Capacity(format!(
                "plugboard full: {engaged} letters engaged, limit {MAX_PLUGBOARD_LETTERS}"
            )));
        }

        self.map = next;
        Ok(())
    }

    /// Install a batch of leads given as two-letter strings.
    ///
    /// The capacity pre-check counts the letters engaged now plus two per
    /// requested lead, without crediting evictions the batch would cause.
    /// Every lead is validated before any is installed.
    ///
    /// # Errors
    /// Returns `EnigmaError::Capacity` if the pre-check fails and
    /// `EnigmaError::InvalidInput` for any malformed lead. The board is
    /// unchanged on error.
    pub fn add_many<S: AsRef<str>>(&mut self, pairs: &[S]) -> Result<(), EnigmaError> {
        let requested = pairs.len() * 2 + self.engaged_letters();
        if requested > MAX_PLUGBOARD_LETTERS {
            return Err(EnigmaError::Capacity(format!(
                "plugboard full: batch needs {requested} letters, limit {MAX_PLUGBOARD_LETTERS}"
            )));
        }

        let leads = pairs
            .iter()
            .map(|p| PlugLead::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let mut staged = self.clone();
        for lead in leads {
            staged.add(lead)?;
        }
        *self = staged;
        Ok(())
    }

    /// Number of letters currently engaged (twice the lead count).
    pub fn engaged_letters(&self) -> usize {
        engaged_in(&self.map)
    }

    /// Installed leads, ordered by their lower letter.
    pub fn pairs(&self) -> Vec<PlugLead> {
        self.map
            .iter()
            .enumerate()
            .filter(|&(i, &partner)| i < usize::from(partner))
            .map(|(i, &partner)| PlugLead {
                a: index_letter(i),
                b: index_letter(usize::from(partner)),
            })
            .collect()
    }
}

fn engaged_in(map: &[u8; ALPHABET_LEN]) -> usize {
    map.iter()
        .enumerate()
        .filter(|&(i, &partner)| usize::from(partner) != i)
        .count()
}

impl PlugMapping for Plugboard {
    fn encode(&self, letter: char) -> Result<char, EnigmaError> {
        let i = letter_index(letter)?;
        Ok(index_letter(usize::from(self.map[i])))
    }

    fn contains(&self, letter: char) -> Result<bool, EnigmaError> {
        let i = letter_index(letter)?;
        Ok(usize::from(self.map[i]) != i)
    }
}

impl fmt::Display for Plugboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self.pairs().iter().map(PlugLead::to_string).collect();
        write!(f, "Plugboard: [{}]", pairs.join(" "))
    }
}
