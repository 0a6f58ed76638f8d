//! Scripted replay command
//!
//! Usage: rivercross replay [--start left|right] [--file PATH] [--json] [SELECTIONS...]
//!
//! Selections from `--file` come first, then those given on the command
//! line. Recorded events are printed even when the script fails part way.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use rivercross_core::{log_op_end, log_op_error, log_op_start};
use rivercross_core::{CrossingController, Passenger, ScriptedIo, Side};

use super::render;

#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// Shore the passengers start on
    #[arg(long, default_value_t = Side::Left)]
    pub start: Side,

    /// File of whitespace- or comma-separated selections
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Print events and the final state as JSON lines
    #[arg(long)]
    pub json: bool,

    /// 1-based selections, applied in order
    pub selections: Vec<String>,
}

/// Execute replay command
pub fn execute(args: ReplayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let started = Instant::now();
    log_op_start!("replay", side = %args.start, json = args.json);

    let mut script = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => String::new(),
    };
    script.push(' ');
    script.push_str(&args.selections.join(" "));

    let mut io = ScriptedIo::parse(&script)?;
    let mut controller = CrossingController::new(args.start);
    let outcome = controller.run(&mut io);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        for event in io.events() {
            writeln!(out, "{}", event.to_json()?)?;
        }
        writeln!(out, "{}", controller.snapshot().to_json()?)?;
    } else {
        let ferryman = Passenger::man();
        for event in io.events() {
            writeln!(out, "{}", render::event_line(event, &ferryman))?;
        }
    }
    out.flush()?;

    let duration_ms = started.elapsed().as_millis() as u64;
    match outcome {
        Ok(moves) => {
            let moves = moves as u64;
            log_op_end!("replay", duration_ms = duration_ms, moves = moves);
            Ok(())
        }
        Err(err) => {
            log_op_error!("replay", err.clone(), duration_ms = duration_ms);
            Err(err.into())
        }
    }
}
