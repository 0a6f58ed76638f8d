//! Interactive play command
//!
//! Usage: rivercross play [--start left|right]

use std::io::{self, BufRead, Write};

use clap::Args;
use rivercross_core::{
    CrossingController, CrossingEvent, CrossingIo, Passenger, RiverCrossError, Shore, Side,
    WorldSnapshot,
};

use super::render;

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Shore the passengers start on
    #[arg(long, default_value_t = Side::Left)]
    pub start: Side,
}

/// Execute play command
pub fn execute(args: PlayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut controller = CrossingController::new(args.start);
    let mut console = ConsoleIo::new(stdin.lock(), stdout.lock(), args.start);

    play(&mut controller, &mut console)?;
    Ok(())
}

/// Draw the river before every turn and keep going until everyone crossed
pub fn play<R: BufRead, W: Write>(
    controller: &mut CrossingController,
    console: &mut ConsoleIo<R, W>,
) -> rivercross_core::Result<usize> {
    while !controller.is_complete() {
        console.show_board(&controller.snapshot())?;
        controller.play_turn(console)?;
    }
    console.show_board(&controller.snapshot())?;
    Ok(controller.move_count())
}

/// Console collaborator: prompts on `W`, reads answers line by line from `R`
///
/// Non-numeric and out-of-range answers are re-prompted here; the
/// controller only ever sees valid choices.
pub struct ConsoleIo<R, W> {
    input: R,
    output: W,
    ferryman: Passenger,
    boat_side: Side,
}

impl<R: BufRead, W: Write> ConsoleIo<R, W> {
    pub fn new(input: R, output: W, boat_side: Side) -> Self {
        Self {
            input,
            output,
            ferryman: Passenger::man(),
            boat_side,
        }
    }

    pub fn show_board(&mut self, snapshot: &WorldSnapshot) -> io::Result<()> {
        writeln!(self.output, "{}", render::board(snapshot, &self.ferryman))
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, from: &Shore, max: usize) -> io::Result<()> {
        writeln!(
            self.output,
            "\nWho crosses to the {} shore?",
            self.boat_side.opposite()
        )?;
        write!(self.output, "{}", from)?;
        writeln!(self.output, "{} Cross alone", max)?;
        self.output.flush()
    }

    fn write_event(&mut self, event: &CrossingEvent) -> io::Result<()> {
        match event {
            CrossingEvent::MoveCommitted {
                direction,
                passenger,
            } => {
                self.boat_side = direction.destination();
                let line = render::crossing(*direction, &self.ferryman, passenger.as_ref());
                writeln!(self.output, "{}", line)
            }
            CrossingEvent::MoveRejected { .. } => {
                writeln!(self.output, "{}", render::event_line(event, &self.ferryman))
            }
            CrossingEvent::PuzzleSolved { .. } => {
                writeln!(self.output, "\n{}", render::event_line(event, &self.ferryman))
            }
        }
    }
}

impl<R: BufRead, W: Write> CrossingIo for ConsoleIo<R, W> {
    fn request_selection(&mut self, from: &Shore, max: usize) -> rivercross_core::Result<usize> {
        loop {
            self.prompt(from, max)?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(RiverCrossError::Io {
                    message: "input closed before the puzzle was solved".to_string(),
                });
            }

            match line.trim().parse::<usize>() {
                Ok(value) if (1..=max).contains(&value) => return Ok(value),
                _ => tracing::debug!(input = line.trim(), max = max as u64, "re-prompting"),
            }
        }
    }

    fn notify(&mut self, event: &CrossingEvent) {
        if let Err(err) = self.write_event(event) {
            tracing::warn!(error = %err, "failed to write crossing event");
        }
    }
}
