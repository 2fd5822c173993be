use clap::Parser;
use eagerground::search::{Environment, Grounder, Task};
use std::path::PathBuf;
use std::process::ExitCode;

/// Load a domain file, print the task and the size of its grounded action
/// catalogue.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(value_name = "DOMAIN")]
    domain: PathBuf,
    #[arg(help = "Also list every grounded action", short, long)]
    list_actions: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let task = match Task::from_path(&args.domain) {
        Ok(task) => task,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    println!("{}", task);

    let catalogue = match Grounder::new().ground(&task) {
        Ok(catalogue) => catalogue,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    println!(
        "{} grounded actions from {} schemas over {} symbols",
        catalogue.len(),
        task.action_schemas().len(),
        task.symbols().len()
    );
    if args.list_actions {
        print!("{}", catalogue);
    }
    ExitCode::SUCCESS
}
