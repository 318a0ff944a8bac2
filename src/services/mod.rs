mod dry_run;
mod process_launcher;
mod scratch_scanner;

pub use dry_run::DryRunLauncher;
pub use process_launcher::ProcessLauncher;
pub use scratch_scanner::{SCRATCH_BUILD_DIR, ScratchScanner};
