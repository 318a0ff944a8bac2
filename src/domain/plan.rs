//! Fan-out plan resolution and invocation construction.

use rand::Rng;

/// External executable every invocation is addressed to.
pub const RUN_COMMAND: &str = "cmsRun";

/// Placeholder in the integrate-mode extra arguments, replaced by the slot index.
pub const INT_ID_PLACEHOLDER: &str = "$(INT_ID)";

/// Placeholder in the run-mode extra arguments, replaced by the run seed.
pub const RUN_ID_PLACEHOLDER: &str = "$(RUN_ID)";

/// Raw options as parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    /// Path-like reference to the base cmsRun configuration.
    pub config_ref: String,
    /// Whether the build phase was requested.
    pub build: bool,
    /// Maximal number of integration jobs; `None` when `-i` was absent.
    /// Present values are validated positive at parse time.
    pub integrate: Option<u32>,
    /// Number of run jobs; `None` when `-r` was absent. Present values are
    /// validated to lie in `[1, 10]` at parse time.
    pub run: Option<u32>,
    /// Seeds for the run phase, in the given order.
    pub seeds: Vec<i64>,
    /// Suppress the integrate phase even if requested.
    pub no_integration: bool,
    /// Name a log file per invocation.
    pub log: bool,
    /// Extra arguments for the build mode.
    pub build_args: String,
    /// Extra arguments for the integrate mode.
    pub integrate_args: String,
    /// Extra arguments for the run mode.
    pub run_args: String,
    /// Extra arguments for all modes.
    pub common_args: String,
}

impl PlanOptions {
    /// Resolve the parsed options into a fully determined plan.
    ///
    /// All implicit defaults are decided here, before any phase logic runs:
    /// the seed list is filled and truncated to the run-job count, and a
    /// build without an explicit integration plan still declares exactly one
    /// integration slot to cmsRun while keeping the integrate phase off.
    pub fn resolve(self) -> ResolvedPlan {
        let run = self.run.unwrap_or(0) as usize;
        let seeds = fill_seeds(self.seeds, run);

        let (integrate_max, no_integration) = match (self.build, self.integrate) {
            (true, None) => (1, true),
            (_, integrate) => (integrate.unwrap_or(0), self.no_integration),
        };

        ResolvedPlan {
            template: template_name(&self.config_ref),
            config_ref: self.config_ref,
            build: self.build,
            integrate_max,
            seeds,
            no_integration,
            log: self.log,
            build_args: self.build_args,
            integrate_args: self.integrate_args,
            run_args: self.run_args,
            common_args: self.common_args,
        }
    }
}

/// Fully resolved fan-out plan. Produced once by [`PlanOptions::resolve`];
/// phase logic only reads from it.
#[derive(Debug, Clone)]
pub struct ResolvedPlan {
    pub config_ref: String,
    /// Base name for all per-phase log files.
    pub template: String,
    pub build: bool,
    pub integrate_max: u32,
    /// One seed per run invocation; empty when no run phase was requested.
    pub seeds: Vec<i64>,
    pub no_integration: bool,
    pub log: bool,
    build_args: String,
    integrate_args: String,
    run_args: String,
    common_args: String,
}

impl ResolvedPlan {
    /// The single build invocation, declaring the integration-slot maximum.
    pub fn build_invocations(&self) -> Vec<Invocation> {
        vec![Invocation::new(
            &self.config_ref,
            &self.build_args,
            &self.common_args,
            ["runMode=build".to_string(), format!("maxJobs={}", self.integrate_max)],
        )]
    }

    /// Log destinations paired with [`Self::build_invocations`].
    pub fn build_logs(&self) -> Vec<String> {
        if self.log { vec![format!("{}_build.log", self.template)] } else { vec![] }
    }

    /// One invocation per discovered integration slot, indexed from 0.
    pub fn integrate_invocations(&self, slots: usize) -> Vec<Invocation> {
        (0..slots)
            .map(|index| {
                let extra = self.integrate_args.replace(INT_ID_PLACEHOLDER, &index.to_string());
                Invocation::new(
                    &self.config_ref,
                    &extra,
                    &self.common_args,
                    ["runMode=integrate".to_string(), format!("integrationList={index}")],
                )
            })
            .collect()
    }

    /// Log destinations paired with [`Self::integrate_invocations`].
    pub fn integrate_logs(&self, slots: usize) -> Vec<String> {
        if self.log {
            (0..slots).map(|index| format!("{}_integrate_{}.log", self.template, index)).collect()
        } else {
            vec![]
        }
    }

    /// One invocation per resolved seed.
    pub fn run_invocations(&self) -> Vec<Invocation> {
        self.seeds
            .iter()
            .map(|seed| {
                let extra = self.run_args.replace(RUN_ID_PLACEHOLDER, &seed.to_string());
                Invocation::new(
                    &self.config_ref,
                    &extra,
                    &self.common_args,
                    ["runMode=run".to_string(), format!("seed={seed}")],
                )
            })
            .collect()
    }

    /// Log destinations paired with [`Self::run_invocations`].
    pub fn run_logs(&self) -> Vec<String> {
        if self.log {
            self.seeds.iter().map(|seed| format!("{}_run_{}.log", self.template, seed)).collect()
        } else {
            vec![]
        }
    }
}

/// Full argument vector for one external process launch.
///
/// Immutable once built; the execution step consumes it exactly once. The
/// reserved `runMode=`/`maxJobs=`/`integrationList=`/`seed=` tokens always
/// come last, after all user-supplied extra arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    tokens: Vec<String>,
}

impl Invocation {
    fn new(config_ref: &str, extra: &str, common: &str, reserved: [String; 2]) -> Self {
        let mut tokens = vec![RUN_COMMAND.to_string(), config_ref.to_string()];
        tokens.extend(extra.split_whitespace().map(str::to_string));
        tokens.extend(common.split_whitespace().map(str::to_string));
        tokens.extend(reserved);
        Invocation { tokens }
    }

    /// The executable name.
    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    /// Everything after the executable name.
    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    /// Shell-style rendering for display.
    pub fn rendered(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Base name for created files: every `.` in the configuration reference
/// becomes `_`; nothing else is altered.
fn template_name(config_ref: &str) -> String {
    config_ref.replace('.', "_")
}

/// Match the seed list to the run-job count: seed a random start when empty,
/// fill any shortfall by incrementing the last seed, truncate any surplus.
fn fill_seeds(mut seeds: Vec<i64>, run: usize) -> Vec<i64> {
    if run > 0 {
        if seeds.is_empty() {
            seeds.push(rand::rng().random_range(1000..32000));
        }
        while seeds.len() < run {
            let last = seeds[seeds.len() - 1];
            seeds.push(last + 1);
        }
    }
    seeds.truncate(run);
    seeds
}
