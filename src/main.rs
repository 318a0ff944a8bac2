use clap::Parser;
use cmsfan::{AppError, PlanOptions};

#[derive(Parser)]
#[command(name = "cmsfan")]
#[command(version)]
#[command(
    about = "Fan out cmsRun invocations for parallel Herwig build/integrate/run phases",
    long_about = "Fan out cmsRun invocations for parallel Herwig build/integrate/run phases.\n\n\
        The cmsRun configuration has to provide the options runMode, maxJobs,\n\
        integrationList and seed via VarParsing. By default the planned calls are\n\
        only printed; pass --launch to actually spawn them."
)]
struct Cli {
    /// Filename of the cmsRun configuration
    cmsrun_file: String,

    /// Choose build mode
    #[arg(short, long)]
    build: bool,

    /// Set the maximal number of integration jobs
    #[arg(
        short,
        long,
        value_name = "N",
        num_args = 0..=1,
        default_missing_value = "1",
        value_parser = positive_int
    )]
    integrate: Option<u32>,

    /// Set the number of run jobs
    #[arg(
        short,
        long,
        value_name = "N",
        num_args = 0..=1,
        default_missing_value = "1",
        value_parser = clap::value_parser!(u32).range(1..=10)
    )]
    run: Option<u32>,

    /// Set seed(s), used in the given order
    #[arg(short, long, value_name = "SEED", num_args = 1.., allow_negative_numbers = true)]
    seed: Vec<i64>,

    /// Build -i integration jobs without actually integrating
    #[arg(long)]
    nointegration: bool,

    /// Write the output of each process in a separate log file
    #[arg(short, long)]
    log: bool,

    /// Additional arguments for the build mode
    #[arg(long = "build_args", alias = "build-args", value_name = "ARGS", default_value = "")]
    build_args: String,

    /// Additional arguments for the integration mode; $(INT_ID) is replaced
    /// by the job id of the integration
    #[arg(
        long = "integrate_args",
        alias = "integrate-args",
        value_name = "ARGS",
        default_value = ""
    )]
    integrate_args: String,

    /// Additional arguments for the run mode; $(RUN_ID) is replaced by the
    /// seed of the run
    #[arg(long = "run_args", alias = "run-args", value_name = "ARGS", default_value = "")]
    run_args: String,

    /// Additional arguments for all modes
    #[arg(long, value_name = "ARGS", default_value = "")]
    args: String,

    /// Spawn the cmsRun processes instead of only printing the planned calls
    #[arg(long)]
    launch: bool,
}

/// Unsigned int type: rejects zero and negative values.
fn positive_int(value: &str) -> Result<u32, String> {
    let parsed: i64 = value.parse().map_err(|_| format!("'{value}' is not an integer"))?;
    if parsed <= 0 {
        return Err(format!("{parsed} is negative or zero"));
    }
    u32::try_from(parsed).map_err(|_| format!("{parsed} is out of range"))
}

fn main() {
    let cli = Cli::parse();

    let options = PlanOptions {
        config_ref: cli.cmsrun_file,
        build: cli.build,
        integrate: cli.integrate,
        run: cli.run,
        seeds: cli.seed,
        no_integration: cli.nointegration,
        log: cli.log,
        build_args: cli.build_args,
        integrate_args: cli.integrate_args,
        run_args: cli.run_args,
        common_args: cli.args,
    };

    let result: Result<_, AppError> = cmsfan::fanout(options, cli.launch);
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
