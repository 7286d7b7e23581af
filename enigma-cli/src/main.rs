//! Enigma machine command-line shell.
//!
//! # Usage
//!
//! ```bash
//! # Key-sheet flags
//! enigma --rotors "I II III" --positions AAZ --reflector B A
//!
//! # Rings, plugs and the per-letter trace
//! enigma --rotors "II IV V" --positions BLA --rings 2,21,12 \
//!     --plugs "AV BS CG DL FU HZ IN KM OW RX" --trace EDPUDNRGYS
//!
//! # Settings from a JSON file (see `enigma_core::config`)
//! enigma --config daily.json HELLOWORLD
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use enigma_core::{EnigmaError, Machine, MachineConfig, WheelRegistry};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Rotor cipher machine
#[derive(Parser, Debug)]
#[command(name = "enigma")]
#[command(about = "Encode or decode a message on a simulated rotor cipher machine")]
#[command(version)]
struct Args {
    /// Message to encode (letters only, case-insensitive)
    message: String,

    /// JSON machine configuration; overrides the key-sheet flags
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Rotor names, leftmost first
    #[arg(short, long, default_value = "I II III")]
    rotors: String,

    /// Start positions, one letter per rotor
    #[arg(short, long, default_value = "AAA")]
    positions: String,

    /// Ring settings, comma-separated, one per rotor
    #[arg(long, value_delimiter = ',')]
    rings: Vec<u8>,

    /// Reflector name
    #[arg(long, default_value = "B")]
    reflector: String,

    /// Plug leads, whitespace-separated pairs
    #[arg(long, default_value = "")]
    plugs: String,

    /// Entry wheel wiring (26 letters)
    #[arg(long)]
    entry_wheel: Option<String>,

    /// Print rotor positions before and after every key press
    #[arg(long)]
    trace: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn load_config(args: &Args) -> Result<MachineConfig, Box<dyn std::error::Error>> {
    if let Some(path) = &args.config {
        tracing::info!("Loading machine configuration from {}", path.display());
        let data = std::fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&data)?);
    }

    let rings = (!args.rings.is_empty()).then_some(args.rings.as_slice());
    let mut config =
        MachineConfig::from_key_sheet(&args.rotors, &args.positions, rings, &args.reflector)?;
    config.plugboard = args.plugs.split_whitespace().map(str::to_string).collect();
    config.entry_wheel = args.entry_wheel.clone();
    Ok(config)
}

/// Settings header, one row per key press, then the ciphertext.
fn trace_lines(machine: &mut Machine, message: &str) -> Result<Vec<String>, EnigmaError> {
    let header = machine.to_string();
    let transcript = machine.encode_traced(message)?;
    let mut lines = Vec::with_capacity(transcript.steps.len() + 2);
    lines.push(header);
    lines.extend(transcript.steps.iter().map(|step| step.to_string()));
    lines.push(format!("Encoding: {}", transcript.output));
    Ok(lines)
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args)?;
    let mut machine = config.build(&WheelRegistry::new())?;
    tracing::info!("{machine}");

    if args.trace {
        for line in trace_lines(&mut machine, &args.message)? {
            println!("{line}");
        }
    } else {
        println!("{}", machine.encode(&args.message)?);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<EnigmaError>() {
                Some(e) => eprintln!("error [{}]: {e}", e.code()),
                None => eprintln!("error: {err}"),
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("enigma").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn key_sheet_flags() {
        let a = args(&[
            "--rotors", "II IV V", "--positions", "BLA", "--rings", "2,21,12", "--plugs",
            "AV BS", "EDPUD",
        ]);
        let cfg = load_config(&a).unwrap();
        assert_eq!(cfg.rotors[1].name, "IV");
        assert_eq!(cfg.rotors[1].ring, 21);
        assert_eq!(cfg.plugboard, vec!["AV", "BS"]);
        assert_eq!(cfg.entry_wheel, None);
    }

    #[test]
    fn defaults_build_a_machine() {
        let a = args(&["HELLOWORLD"]);
        let mut m = load_config(&a).unwrap().build(&WheelRegistry::new()).unwrap();
        assert_eq!(m.encode(&a.message).unwrap(), "ILBDAAMTAZ");
    }

    #[test]
    fn trace_starts_with_settings_header() {
        let a = args(&["--positions", "AAZ", "--trace", "ABC"]);
        let mut m = load_config(&a).unwrap().build(&WheelRegistry::new()).unwrap();
        let lines = trace_lines(&mut m, &a.message).unwrap();
        assert_eq!(
            lines,
            vec![
                "Rotors: [I II III], Start Positions: AAZ, Ring Settings: [1,1,1], \
                 Pawls: [false true true], Reflector: B, Plugboard: []",
                "Start Position: AAZ, Letter In: A, End Position: AAA, Letter Out: U",
                "Start Position: AAA, Letter In: B, End Position: AAB, Letter Out: A",
                "Start Position: AAB, Letter In: C, End Position: AAC, Letter Out: R",
                "Encoding: UAR",
            ]
        );
    }

    #[test]
    fn mismatched_ring_count_rejected() {
        let a = args(&["--rings", "1,2", "A"]);
        assert!(load_config(&a).is_err());
    }

    #[test]
    fn json_config_parses() {
        let json = r#"{
            "rotors": [
                { "name": "I", "start": "A" },
                { "name": "II", "start": "A" },
                { "name": "III", "start": "Z" }
            ],
            "reflector": "B"
        }"#;
        let cfg: MachineConfig = serde_json::from_str(json).unwrap();
        let mut m = cfg.build(&WheelRegistry::new()).unwrap();
        assert_eq!(m.encode("A").unwrap(), "U");
    }
}
