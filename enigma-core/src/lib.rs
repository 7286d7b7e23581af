//! Enigma Core — rotor cipher machine engine.
//!
//! Emulates the electromechanical rotor machines: a plugboard, an optional
//! entry wheel, a spindle of rotating wired wheels and a reflector. Each
//! key press steps the rotors (including the double-step anomaly) and then
//! sends the letter through the plugboard, spindle, reflector and back.
//! Encoding and decoding are the same operation from the same start
//! settings.
//!
//! # Module Map
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`constants`] | Alphabet, plugboard limits, historical wirings |
//! | [`errors`] | `EnigmaError` and stable error codes |
//! | [`codec`] | `Contact`, letter/contact conversion, `Wiring` |
//! | [`plug`] | `PlugMapping`, `PlugLead`, `Plugboard` |
//! | [`rotor`] | `WiringStage`, `RotorType`, `Rotor` |
//! | [`reflector`] | `Reflector` |
//! | [`registry`] | `WheelRegistry` of built-in and custom wheels |
//! | [`spindle`] | Stepping mechanism and rotor traversal |
//! | [`machine`] | `Machine`, `EntryWheel`, verbose trace |
//! | [`config`] | `MachineConfig` key-sheet settings |
//! | [`vectors`] | Known-answer vector generator (feature `vectors`) |
//!
//! # Example
//!
//! ```
//! use enigma_core::{Machine, Spindle, WheelRegistry};
//!
//! let registry = WheelRegistry::new();
//! let rotors = vec![
//!     registry.rotor("I", 'A', 1, false).unwrap(),
//!     registry.rotor("II", 'A', 1, true).unwrap(),
//!     registry.rotor("III", 'Z', 1, true).unwrap(),
//! ];
//! let spindle = Spindle::new(rotors).unwrap();
//! let reflector = registry.reflector("B").unwrap();
//!
//! let mut machine = Machine::new(spindle, reflector, None, None);
//! assert_eq!(machine.encode("A").unwrap(), "U");
//! ```
//!
//! The library logs through `tracing` and never installs a subscriber.

/// Alphabet, limits and built-in wheel tables.
pub mod constants;

/// Error types for enigma-core operations.
pub mod errors;

/// Letter/contact conversion and wiring validation.
pub mod codec;

/// Plug leads and the plugboard.
pub mod plug;

/// Rotors and the shared wiring-stage contract.
pub mod rotor;

/// The reflector.
pub mod reflector;

/// Caller-owned catalogue of wheel types.
pub mod registry;

/// Rotor stack and stepping.
pub mod spindle;

/// The assembled machine.
pub mod machine;

/// Declarative machine settings.
pub mod config;

/// Deterministic known-answer vector generator (test use only).
/// Requires the `vectors` feature: `cargo test --features vectors`.
#[cfg(feature = "vectors")]
pub mod vectors;

pub use codec::{Contact, Wiring};
pub use config::{MachineConfig, RotorConfig};
pub use errors::EnigmaError;
pub use machine::{EntryWheel, Machine, StepTrace, Transcript};
pub use plug::{PlugLead, PlugMapping, Plugboard};
pub use reflector::Reflector;
pub use registry::WheelRegistry;
pub use rotor::{Rotor, RotorType, WiringStage};
pub use spindle::Spindle;
