use clap::Parser;
use eagerground::search::{validate, Plan, PlannerError, Task};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(version)]
/// Check that a plan solves a domain file.
struct Cli {
    #[arg(help = "The domain file")]
    domain: PathBuf,
    #[arg(help = "The plan file to validate")]
    plan: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match check(&cli) {
        Ok(length) => {
            println!("Plan valid, length {}", length);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn check(cli: &Cli) -> Result<usize, PlannerError> {
    let task = Task::from_path(&cli.domain)?;
    let plan = Plan::from_path(&cli.plan, &task)?;
    validate(&plan, &task)?;
    Ok(plan.len())
}
