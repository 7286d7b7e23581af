//! Conformance Harness — Machine Invariant Tests
//!
//! Invariant coverage:
//! - Stepping: fast rotor always steps, notch carry, double step,
//!   decisions taken from the pre-step snapshot
//! - Plugboard: involution, capacity limit, eviction, batch pre-check
//! - Registry: bijection validation, reserved names, custom wheels
//! - Errors: taxonomy and stable codes, fail-fast without mutation

mod error_codes;
mod plugboard;
mod registry;
mod stepping;
