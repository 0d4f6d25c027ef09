//! thinknum — calculator and think-of-a-number CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use thinknum::calc::Operation;
use thinknum::config::Config;
use thinknum::constants;
use thinknum::env::Env;
use thinknum::game;
use thinknum::models::Evaluation;

use cli::Settings;
use cli::args::{Cli, Command, ThinkArgs};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let env = Env::process();

    thinknum::logging::init(cli.verbose, env.var(constants::ENV_LOG).as_deref());

    if let Command::Version = cli.command {
        return run_version();
    }

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let config = Config::load(Some(&cwd), &env).context("failed to load configuration")?;
    debug!(?config, "configuration loaded");

    let (evaluation, steps_flag) = match &cli.command {
        Command::Eval(args) => (evaluate(args.op, args.a, args.b)?, false),
        Command::Think(args) => (run_think(args)?, args.steps),
        other => {
            let (op, args) = other.binary().context("command takes no operands")?;
            (evaluate(op, args.a, args.b)?, false)
        }
    };

    let settings = Settings::resolve(&cli, &config, steps_flag);
    let evaluation = if settings.show_steps {
        evaluation
    } else {
        Evaluation {
            steps: Vec::new(),
            ..evaluation
        }
    };

    let rendered = settings.format.render(&evaluation, settings.precision);
    println!("{}", rendered.trim_end());
    Ok(())
}

/// Apply a single operation.
fn evaluate(op: Operation, a: f64, b: f64) -> Result<Evaluation> {
    let result = op
        .apply(a, b)
        .with_context(|| format!("cannot evaluate {a} {} {b}", op.symbol()))?;
    Ok(Evaluation::binary(op, a, b, result))
}

/// Run the think-of-a-number trick, keeping the steps so the caller can
/// decide whether to show them.
fn run_think(args: &ThinkArgs) -> Result<Evaluation> {
    if args.unguarded {
        let result = game::compute_invariant_unguarded(args.number);
        let steps = game::trace_unguarded(args.number)?;
        return Ok(Evaluation::invariant(args.number, result, steps));
    }

    let result = game::compute_invariant(args.number).context("cannot think of that number")?;
    let steps = game::trace(args.number)?;
    Ok(Evaluation::invariant(args.number, result, steps))
}

/// Print version information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!("{} {}", constants::APP_NAME.bold(), constants::VERSION.green().bold());
    Ok(())
}
