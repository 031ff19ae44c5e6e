//! Unrecoverable faults raised while producing canonical output.
//!
//! Canonical output has to be readable by any conforming parser. A value that
//! has no valid syntax (an infinite real, a hex string holding `G`) means the
//! object graph was built wrong, and there is no correct string to hand back.
//! The renderer reports such a value to a [`FaultReporter`] whose
//! [`fatal`](FaultReporter::fatal) method never returns.
//!
//! [`FaultPolicy`] is the stock reporter: `Abort` logs and terminates the
//! process, `Panic` logs and unwinds.

use crate::FaultPolicy;
use thiserror::Error;

/// A value that cannot be written in canonical form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Fault {
    #[error("Real {0} has no canonical form")]
    NonFiniteReal(f64),

    #[error("HexString <{0}> contains characters that are not hex digits")]
    MalformedHexString(String),
}

impl Fault {
    /// Variant name of the offending object.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Fault::NonFiniteReal(_) => "Real",
            Fault::MalformedHexString(_) => "HexString",
        }
    }
}

/// Receives faults from the canonical renderer.
pub trait FaultReporter {
    /// Reports `fault` and diverges.
    fn fatal(&self, fault: Fault) -> !;
}

impl FaultReporter for FaultPolicy {
    fn fatal(&self, fault: Fault) -> ! {
        tracing::error!(
            kind = fault.kind(),
            fault = %fault,
            "object has no canonical form"
        );
        match self {
            FaultPolicy::Abort => std::process::abort(),
            FaultPolicy::Panic => panic!("canonical rendering failed: {fault}"),
        }
    }
}
