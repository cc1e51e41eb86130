//! Project board command line.
//!
//! # Responsibility
//! - Parse flags, start logging, and build the board.
//! - Feed line commands from stdin or a script file into the board.

mod board;
mod command;

use board::{Board, Flow};
use clap::Parser;
use command::parse_line;
use log::{info, warn};
use projboard_core::{
    core_version, default_log_level, init_logging, FormRules, IdGenerator, RandomIdGenerator,
    SequentialIdGenerator,
};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "projboard", version, about = "Two-column project board")]
struct Cli {
    /// trace|debug|info|warn|error
    #[arg(long, default_value_t = default_log_level().to_string())]
    log_level: String,

    /// Absolute directory for rolling log files. Logging is off without it.
    #[arg(long)]
    log_dir: Option<String>,

    /// Read commands from this file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Use sequential project ids for reproducible output.
    #[arg(long)]
    seq_ids: bool,

    /// Upper bound for the people field.
    #[arg(long)]
    max_people: Option<i64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("projboard: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        init_logging(&cli.log_level, log_dir)?;
    }

    let mut rules = FormRules::default();
    if let Some(max) = cli.max_people {
        rules = rules.with_max_people(max);
    }
    let ids: Box<dyn IdGenerator> = if cli.seq_ids {
        Box::new(SequentialIdGenerator::new())
    } else {
        Box::new(RandomIdGenerator)
    };
    let mut board = Board::new(ids, rules);

    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .map_err(|err| format!("cannot open script `{}`: {err}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    info!(
        "event=cli_start module=cli status=ok version={} scripted={}",
        core_version(),
        cli.script.is_some()
    );
    command_loop(&mut board, input, &mut io::stdout().lock())
        .map_err(|err| format!("i/o error: {err}"))
}

fn command_loop(board: &mut Board, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "projboard {} (type `help`)", core_version())?;
    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(Some(command)) => {
                if board.execute(command, out)? == Flow::Quit {
                    break;
                }
            }
            Ok(None) => {}
            Err(err) => {
                warn!("event=command_parse module=cli status=error");
                writeln!(out, "error: {err}")?;
            }
        }
        out.flush()?;
    }
    Ok(())
}
