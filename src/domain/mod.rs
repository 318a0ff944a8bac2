pub mod error;
pub mod phase;
pub mod plan;

pub use error::AppError;
pub use phase::Phase;
pub use plan::{Invocation, PlanOptions, RUN_COMMAND, ResolvedPlan};
