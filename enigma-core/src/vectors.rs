//! Deterministic known-answer vector generator (test use only).
//!
//! Produces the same JSON as the committed
//! `tests/vectors/known_answer.vectors.json`. The committed file is the
//! reference: `tests/vector_equivalence.rs` regenerates it here and fails
//! on any drift in wirings, notch handling or stepping.

use serde::{Deserialize, Serialize};

use crate::config::{MachineConfig, RotorConfig};
use crate::errors::EnigmaError;
use crate::registry::WheelRegistry;

const DESCRIPTION: &str = "Known-answer vectors for the rotor machine. Each case builds a machine from `config` (after registering any custom wheels), encodes `input` once and records the output and the front letters left in the windows.";

/// A custom rotor type registered before the case runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRotor {
    pub name: String,
    pub wiring: String,
    pub notches: Vec<char>,
}

/// A custom reflector registered before the case runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomReflector {
    pub name: String,
    pub wiring: String,
}

/// One known-answer case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorCase {
    pub id: String,
    pub config: MachineConfig,
    #[serde(default)]
    pub custom_rotors: Vec<CustomRotor>,
    #[serde(default)]
    pub custom_reflectors: Vec<CustomReflector>,
    pub input: String,
    pub expected: String,
    pub final_positions: String,
}

/// The whole vector file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorFile {
    pub description: String,
    pub cases: Vec<VectorCase>,
}

impl VectorCase {
    /// A fresh registry with this case's custom wheels registered.
    ///
    /// # Errors
    /// Propagates registration failures.
    pub fn registry(&self) -> Result<WheelRegistry, EnigmaError> {
        let mut registry = WheelRegistry::new();
        for r in &self.custom_rotors {
            registry.register_rotor(&r.name, &r.wiring, &r.notches)?;
        }
        for r in &self.custom_reflectors {
            registry.register_reflector(&r.name, &r.wiring)?;
        }
        Ok(registry)
    }

    /// Run the case on a freshly built machine, returning the output and
    /// the final window letters.
    ///
    /// # Errors
    /// Propagates any build or encode failure.
    pub fn run(&self) -> Result<(String, String), EnigmaError> {
        let mut machine = self.config.build(&self.registry()?)?;
        let output = machine.encode(&self.input)?;
        Ok((output, machine.positions().into_iter().collect()))
    }
}

fn slots(rotors: &[(&str, char, u8)]) -> Vec<RotorConfig> {
    rotors
        .iter()
        .map(|&(name, start, ring)| RotorConfig {
            ring,
            ..RotorConfig::new(name, start)
        })
        .collect()
}

fn case(
    id: &str,
    rotors: &[(&str, char, u8)],
    reflector: &str,
    plugboard: &[&str],
    entry_wheel: Option<&str>,
    input: &str,
) -> VectorCase {
    VectorCase {
        id: id.to_string(),
        config: MachineConfig {
            rotors: slots(rotors),
            reflector: reflector.to_string(),
            plugboard: plugboard.iter().map(|p| p.to_string()).collect(),
            entry_wheel: entry_wheel.map(str::to_string),
        },
        custom_rotors: Vec::new(),
        custom_reflectors: Vec::new(),
        input: input.to_string(),
        expected: String::new(),
        final_positions: String::new(),
    }
}

const I_II_III_AAZ: [(&str, char, u8); 3] = [("I", 'A', 1), ("II", 'A', 1), ("III", 'Z', 1)];

fn cases() -> Vec<VectorCase> {
    let mut thin = case(
        "custom-double-notch-rotor",
        &[("I", 'A', 1), ("II", 'A', 1), ("VIII", 'A', 1)],
        "THIN",
        &[],
        None,
        "HELLOWORLD",
    );
    thin.custom_rotors.push(CustomRotor {
        name: "VIII".into(),
        wiring: "FKQHTLXOCBJSPDZRAMEWNIUYGV".into(),
        notches: vec!['H', 'U'],
    });
    thin.custom_reflectors.push(CustomReflector {
        name: "THIN".into(),
        wiring: "ENKQAUYWJICOPBLMDXZVFTHRGS".into(),
    });

    vec![
        case("single-letter-aaz", &I_II_III_AAZ, "B", &[], None, "A"),
        case("three-letter-aaz", &I_II_III_AAZ, "B", &[], None, "ABC"),
        case(
            "repeated-letter-aaa",
            &[("I", 'A', 1), ("II", 'A', 1), ("III", 'A', 1)],
            "B",
            &[],
            None,
            "AAAAA",
        ),
        case(
            "double-step-adu",
            &[("I", 'A', 1), ("II", 'D', 1), ("III", 'U', 1)],
            "B",
            &[],
            None,
            "AAAA",
        ),
        case(
            "ring-settings",
            &[("I", 'A', 2), ("II", 'A', 2), ("III", 'A', 2)],
            "B",
            &[],
            None,
            "AAAAA",
        ),
        case(
            "full-plugboard",
            &I_II_III_AAZ,
            "B",
            &["HL", "MO", "AJ", "CX", "BZ", "SR", "NI", "YW", "DG", "PK"],
            None,
            "HELLOWORLD",
        ),
        case(
            "four-rotor-reflector-a",
            &[("IV", 'E', 18), ("V", 'Z', 24), ("Beta", 'G', 3), ("I", 'P', 5)],
            "A",
            &["PC", "XZ", "FM", "QA", "ST", "NB", "HY", "OR", "EV", "IU"],
            None,
            "CONGRATULATIONSONPRODUCINGYOURWORKINGENIGMAMACHINESIMULATOR",
        ),
        case(
            "barbarossa",
            &[("II", 'B', 2), ("IV", 'L', 21), ("V", 'A', 12)],
            "B",
            &["AV", "BS", "CG", "DL", "FU", "HZ", "IN", "KM", "OW", "RX"],
            None,
            concat!(
                "EDPUDNRGYSZRCXNUYTPOMRMBOFKTBZREZKMLXLVEFGUEYSIOZVEQMIKUBPMM",
                "YLKLTTDEISMDICAGYKUACTCDOMOHWXMUUIAUBSTSLRNBZSZWNRFXWFYSSXJZ",
                "VIJHIDISHPRKLKAYUPADTXQSPINQMATLPIFSVKDASCTACDPBOPVHJK"
            ),
        ),
        case(
            "keyboard-entry-wheel",
            &I_II_III_AAZ,
            "B",
            &[],
            Some("QWERTZUIOASDFGHJKPYXCVBNML"),
            "HELLOWORLD",
        ),
        thin,
    ]
}

/// Run every case and return the filled-in vector file.
///
/// # Errors
/// Propagates the first failing case.
pub fn generate_known_answer_vectors() -> Result<VectorFile, EnigmaError> {
    let mut cases = cases();
    for c in &mut cases {
        let (expected, final_positions) = c.run()?;
        c.expected = expected;
        c.final_positions = final_positions;
    }
    Ok(VectorFile {
        description: DESCRIPTION.to_string(),
        cases,
    })
}

/// Known-answer vectors as pretty-printed JSON.
///
/// # Errors
/// Propagates engine failures; serialization of these types cannot fail.
pub fn generate_known_answer_json() -> Result<String, EnigmaError> {
    let file = generate_known_answer_vectors()?;
    serde_json::to_string_pretty(&file)
        .map_err(|e| EnigmaError::invalid(format!("vector serialization failed: {e}")))
}
