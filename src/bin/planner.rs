use clap::Parser;
use eagerground::search::{
    heuristics::HeuristicName, validate, Planner, PlannerConfig, PlannerError, Task, Verbosity,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Run the eagerground planner.
struct Cli {
    #[arg(help = "The domain file")]
    domain: PathBuf,
    #[arg(
        help = "The output plan file",
        short = 'o',
        long = "output",
        id = "OUTPUT",
        default_value = "<domain>.plan"
    )]
    plan: PathBuf,
    #[arg(
        help = "A TOML planner configuration, command line options take precedence",
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The heuristic evaluator to use [default: delete-relaxation]",
        long = "heuristic",
        id = "HEURISTIC"
    )]
    heuristic_name: Option<HeuristicName>,
    #[arg(help = "Search time limit in seconds", long = "time-limit", id = "SECONDS")]
    time_limit: Option<u64>,
    #[arg(help = "Search memory limit in MiB", long = "memory-limit", id = "MIB")]
    memory_limit_mb: Option<usize>,
    #[arg(
        help = "Maximum number of node expansions",
        long = "expansion-limit",
        id = "EXPANSIONS"
    )]
    expansion_limit: Option<usize>,
    #[arg(
        help = "Maximum number of grounded actions",
        long = "grounding-limit",
        id = "ACTIONS"
    )]
    grounding_limit: Option<usize>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

impl Cli {
    fn config(&self) -> Result<PlannerConfig, PlannerError> {
        let mut config = match &self.config {
            Some(path) => PlannerConfig::from_path(path)?,
            None => PlannerConfig::default(),
        };
        if let Some(heuristic) = self.heuristic_name {
            config.heuristic = heuristic;
        }
        config.time_limit = self.time_limit.or(config.time_limit);
        config.memory_limit_mb = self.memory_limit_mb.or(config.memory_limit_mb);
        config.expansion_limit = self.expansion_limit.or(config.expansion_limit);
        config.grounding_limit = self.grounding_limit.or(config.grounding_limit);
        Ok(config)
    }

    fn plan_path(&self) -> PathBuf {
        if self.plan == PathBuf::from("<domain>.plan") {
            self.domain.with_extension("plan")
        } else {
            self.plan.clone()
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match plan(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            println!("No plan found: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn plan(cli: &Cli) -> Result<(), PlannerError> {
    let config = cli.config()?;
    let task = Task::from_path(&cli.domain)?;
    let planner = Planner::new(&task, config)?;
    let plan = planner.solve(&task)?;

    info!("validating plan");
    validate(&plan, &task)?;
    info!("plan is valid");

    println!("Plan found:");
    println!("{}", plan);
    println!("Plan length: {}", plan.len());

    let plan_path = cli.plan_path();
    std::fs::write(&plan_path, format!("{}\n", plan)).map_err(|source| PlannerError::Io {
        path: plan_path.clone(),
        source,
    })?;
    info!(plan_file = %plan_path.display(), "plan written");
    Ok(())
}
