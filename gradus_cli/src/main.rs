use anyhow::{Context, Result};
/// Gradus CLI - NCEA standards tracker and career companion
///
/// Runs the interactive menu by default; `demo` and `ask` are one-shot helpers.
use clap::{Parser, Subcommand};
use gradus_cli::{demo, menu, report};
use gradus_core::{GradusConfig, Session};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gradus")]
#[command(about = "Gradus - NCEA standards tracker and career companion", long_about = None)]
struct Cli {
    /// Path to an optional YAML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    Run,
    /// Walk through a sample student and print the summary
    Demo {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Ask Frost a single question
    Ask {
        #[arg(required = true)]
        question: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::init_from_env(env_logger::Env::default().default_filter_or(default_filter));

    let config = match &cli.config {
        Some(path) => GradusConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GradusConfig::default(),
    };
    let mut session = Session::from_config(&config);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let stdin = io::stdin();
            menu::run_menu(&mut session, stdin.lock(), io::stdout(), config.welcome_banner)?;
        }
        Commands::Demo { json } => {
            run_demo_cli(&mut session, json)?;
        }
        Commands::Ask { question } => {
            println!("{}", session.frost().answer(&question.join(" ")));
        }
    }

    Ok(())
}

fn run_demo_cli(session: &mut Session, json: bool) -> Result<()> {
    let demo_report = demo::run_demo(session)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&demo_report)?);
        return Ok(());
    }

    println!("{}", menu::BANNER);
    println!();
    println!("{}", report::render_summary(&demo_report.summary));
    println!();
    println!("Q: {}", demo_report.question);
    println!("Frost says: {}", demo_report.answer);
    Ok(())
}
