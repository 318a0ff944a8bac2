//! Fan-out command execution logic.

use crate::domain::{AppError, Phase, ResolvedPlan};
use crate::ports::{PhaseLauncher, SlotCount};

const CLUTTER_WARNING: &str = "--- Output may be cluttered. (Try the option -l/--log) ---";

/// Outcome of a fan-out execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanoutOutcome {
    /// All requested phases ran to completion.
    Completed,
    /// Stopped after the build phase because no integration was requested.
    NoIntegration,
    /// Discovered slots exceeded the requested maximum; integration and
    /// everything after it were skipped.
    SlotOverflow { found: usize, max: u32 },
}

/// Drive all phases of the resolved plan, in order, each gated on full
/// completion of the previous one.
pub fn execute(
    plan: &ResolvedPlan,
    slots: &dyn SlotCount,
    launcher: &dyn PhaseLauncher,
) -> Result<FanoutOutcome, AppError> {
    let mut phase = Some(Phase::Build);
    while let Some(current) = phase {
        match current {
            Phase::Build => {
                if plan.build {
                    build_phase(plan, launcher)?;
                }
                if plan.no_integration {
                    return Ok(FanoutOutcome::NoIntegration);
                }
            }
            Phase::Integrate => {
                if plan.integrate_max > 0
                    && let Some(outcome) = integrate_phase(plan, slots, launcher)?
                {
                    return Ok(outcome);
                }
            }
            Phase::Run => {
                if !plan.seeds.is_empty() {
                    run_phase(plan, launcher)?;
                }
            }
        }
        phase = current.next();
    }
    Ok(FanoutOutcome::Completed)
}

fn banner(text: &str) {
    println!("{}", "-".repeat(text.len()));
    println!("{text}");
    println!("{}", "-".repeat(text.len()));
}

fn build_phase(plan: &ResolvedPlan, launcher: &dyn PhaseLauncher) -> Result<(), AppError> {
    banner(Phase::Build.started_banner());
    println!("Setting up a maximum of {} integration job(s).", plan.integrate_max);

    launcher.launch(&plan.build_invocations(), &plan.build_logs())?;

    banner(Phase::Build.finished_banner());
    Ok(())
}

/// Returns `Some` when the phase decided to stop the whole plan early.
fn integrate_phase(
    plan: &ResolvedPlan,
    slots: &dyn SlotCount,
    launcher: &dyn PhaseLauncher,
) -> Result<Option<FanoutOutcome>, AppError> {
    let found = slots.count()?;

    if found > plan.integrate_max as usize {
        println!(
            "Actual number of integration jobs {} exceeds maximum number of specified jobs {}.",
            found, plan.integrate_max
        );
        println!("Integration will not be performed.");
        return Ok(Some(FanoutOutcome::SlotOverflow { found, max: plan.integrate_max }));
    }

    banner(Phase::Integrate.started_banner());
    println!("Found {} integration jobs, a maximum of {} was given.", found, plan.integrate_max);
    if !plan.log {
        println!("{CLUTTER_WARNING}");
    }

    launcher.launch(&plan.integrate_invocations(found), &plan.integrate_logs(found))?;

    banner(Phase::Integrate.finished_banner());
    Ok(None)
}

fn run_phase(plan: &ResolvedPlan, launcher: &dyn PhaseLauncher) -> Result<(), AppError> {
    banner(Phase::Run.started_banner());
    println!("Seeds: {:?}", plan.seeds);
    if !plan.log {
        println!("{CLUTTER_WARNING}");
    }

    launcher.launch(&plan.run_invocations(), &plan.run_logs())?;

    banner(Phase::Run.finished_banner());
    Ok(())
}
