//! Machine constants — alphabet, capacity limits and historical wirings.
//!
//! Wirings are listed as the image of `A..Z` read right-to-left through
//! the wheel. Every table here is exercised by the known-answer vectors in
//! `tests/known_answer.rs`; a transcription error in any of them shows up
//! there first.

/// The 26-letter alphabet every wheel is wired over.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of contacts on every wheel.
pub const ALPHABET_LEN: usize = 26;

/// Maximum number of plug leads installed on a plugboard.
pub const MAX_PLUGBOARD_PAIRS: usize = 10;

/// Maximum number of letters engaged on a plugboard (two per lead).
pub const MAX_PLUGBOARD_LETTERS: usize = MAX_PLUGBOARD_PAIRS * 2;

/// Built-in rotor types: `(name, wiring, notches)`.
///
/// `Beta` and `Gamma` are the thin naval wheels and carry no notch.
pub const BUILTIN_ROTORS: [(&str, &str, &str); 7] = [
    ("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q"),
    ("II", "AJDKSIRUXBLHWTMCQGZNPYFVOE", "E"),
    ("III", "BDFHJLCPRTXVZNYEIWGAKMUSQO", "V"),
    ("IV", "ESOVPZJAYQUIRHXLNFTGKDCMWB", "J"),
    ("V", "VZBRGITYUPSDNHLXAWMJQOFECK", "Z"),
    ("Beta", "LEYJVCNIXWPBQMDRTAKZGFUHOS", ""),
    ("Gamma", "FSOKANUERHMBTIYCWLQPZXVGJD", ""),
];

/// Built-in reflectors: `(name, wiring)`.
pub const BUILTIN_REFLECTORS: [(&str, &str); 3] = [
    ("A", "EJMZALYXVBWFCRQUONTSPIKHGD"),
    ("B", "YRUHQSLDPXNGOKMIEBFZCWVJAT"),
    ("C", "FVPJIAOYEDRZXWGCTKUQSBNMHL"),
];
