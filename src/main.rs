//! Command line runner for propkb scripts.
//!
//! Every script given on the command line runs against the same knowledge
//! base, in order. Without arguments the script is read from standard input.
//!
//! ```text
//! propkb wumpus.kb
//! echo "tell A ==> B; tell A; ask B;" | propkb --json
//! ```

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use propkb::config::{Output, Settings};
use propkb::interface::SharedKnowledgeBase;
use propkb::script::{Engine, Outcome, ScriptResult};
use propkb::Result;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Script files to run, in order. Reads standard input when empty.
    scripts: Vec<PathBuf>,
    /// Settings file (defaults to propkb.toml when present).
    #[arg(long, short)]
    config: Option<String>,
    /// Print results as JSON lines.
    #[arg(long)]
    json: bool,
    /// Print the clauses held after each script.
    #[arg(long)]
    clauses: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    match run(&cli, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "script failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, settings: &Settings) -> Result<()> {
    let output = if cli.json { Output::Json } else { settings.output };
    let show_clauses = cli.clauses || settings.show_clauses;
    let kb = SharedKnowledgeBase::default();
    let engine = Engine::new(&kb);

    let mut scripts = Vec::new();
    if cli.scripts.is_empty() {
        let mut script = String::new();
        std::io::stdin().read_to_string(&mut script)?;
        scripts.push(("<stdin>".to_string(), script));
    }
    for path in &cli.scripts {
        scripts.push((path.display().to_string(), std::fs::read_to_string(path)?));
    }

    for (name, script) in scripts {
        info!(script = %name, "running");
        let mut result = engine.execute_collect(&script)?;
        if show_clauses {
            let clauses = kb.clauses()?.iter().map(ToString::to_string).collect();
            result.outcomes.push(Outcome::Clauses { clauses });
        }
        print(&result, output)?;
    }
    Ok(())
}

fn print(result: &ScriptResult, output: Output) -> Result<()> {
    for outcome in &result.outcomes {
        match output {
            Output::Json => {
                let line = serde_json::to_string(outcome)
                    .map_err(|e| propkb::ReasonerError::Io(e.to_string()))?;
                println!("{line}");
            }
            Output::Text => match outcome {
                Outcome::Tell { sentence, clauses } => println!("told {sentence} ({clauses} clauses)"),
                Outcome::Ask { sentence, entailed } => println!("{sentence}: {entailed}"),
                Outcome::Retract { sentence, clauses } => {
                    println!("retracted {sentence} ({clauses} clauses)")
                }
                Outcome::Clauses { clauses } => {
                    for clause in clauses {
                        println!("  {clause}");
                    }
                }
                Outcome::Clear => println!("cleared"),
            },
        }
    }
    Ok(())
}
