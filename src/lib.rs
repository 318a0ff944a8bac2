//! cmsfan: fan out cmsRun invocations for parallel Herwig build, integrate,
//! and run phases.
//!
//! A parallelized run step is achieved by calling cmsRun an according number
//! of times with different seeds for Herwig; the cmsRun configuration has to
//! accept the `runMode`, `maxJobs`, `integrationList` and `seed` options.
//! The integrate phase fans out over the integration jobs the build step
//! reported under `Herwig-scratch/Build`.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

pub use app::fanout::FanoutOutcome;
pub use domain::{AppError, Invocation, PlanOptions, ResolvedPlan};

use services::{DryRunLauncher, ProcessLauncher, ScratchScanner};

/// Resolve the plan and drive all phases with the production adapters.
///
/// `launch` selects the real process launcher; otherwise the planned calls
/// are only printed.
pub fn fanout(options: PlanOptions, launch: bool) -> Result<FanoutOutcome, AppError> {
    let plan = options.resolve();
    let scanner = ScratchScanner::new();

    if launch {
        app::fanout::execute(&plan, &scanner, &ProcessLauncher)
    } else {
        app::fanout::execute(&plan, &scanner, &DryRunLauncher)
    }
}
