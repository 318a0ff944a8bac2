//! Execution step that spawns the external processes.

use std::fs::File;
use std::process::{Child, Command, Stdio};

use crate::domain::{AppError, Invocation};
use crate::ports::{PhaseLauncher, check_pairing};

/// Spawns every invocation of a phase as an independent process and waits
/// for all of them before returning.
pub struct ProcessLauncher;

impl ProcessLauncher {
    fn spawn(&self, call: &Invocation, log: Option<&str>) -> Result<Child, AppError> {
        let mut command = Command::new(call.program());
        command.args(call.args());

        if let Some(log) = log {
            let out = File::create(log)?;
            let err = out.try_clone()?;
            command.stdout(Stdio::from(out)).stderr(Stdio::from(err));
        }

        command.spawn().map_err(|source| AppError::Launch { command: call.rendered(), source })
    }
}

impl PhaseLauncher for ProcessLauncher {
    fn launch(&self, calls: &[Invocation], logs: &[String]) -> Result<(), AppError> {
        check_pairing(calls, logs)?;

        let mut children = Vec::with_capacity(calls.len());
        if logs.is_empty() {
            for call in calls {
                println!("Calling:\t{}", call.rendered());
                children.push(self.spawn(call, None)?);
            }
        } else {
            for (call, log) in calls.iter().zip(logs) {
                println!("Calling:\t{}", call.rendered());
                println!("Writing output to log file: {log}");
                children.push(self.spawn(call, Some(log))?);
            }
        }

        // Barrier between phases: the next phase must not start before every
        // launch of this one has completed.
        for mut child in children {
            child.wait()?;
        }
        Ok(())
    }
}
