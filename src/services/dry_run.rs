//! Print-only execution step.

use crate::domain::{AppError, Invocation};
use crate::ports::{PhaseLauncher, check_pairing};

/// Prints each planned call without spawning anything.
pub struct DryRunLauncher;

impl PhaseLauncher for DryRunLauncher {
    fn launch(&self, calls: &[Invocation], logs: &[String]) -> Result<(), AppError> {
        check_pairing(calls, logs)?;

        if logs.is_empty() {
            for call in calls {
                println!("Calling:\t{}", call.rendered());
            }
        } else {
            for (call, log) in calls.iter().zip(logs) {
                println!("Calling:\t{}", call.rendered());
                println!("Writing output to log file: {log}");
            }
        }
        Ok(())
    }
}
