//! Turn-by-turn crossing state machine
//!
//! The controller owns both shores and the boat. Each attempt is
//! all-or-nothing:
//!
//! - **Rejected** attempts leave shores, boat side and history untouched
//! - **Committed** attempts move at most one passenger, flip the boat, and
//!   re-validate the whole world before returning
//!
//! Only the shore being departed from is checked. The arrival shore always
//! has the man on it the instant the boat lands.
//!
//! ## Example
//!
//! ```
//! use rivercross_core::{CrossingController, CrossingEvent, Selection, Side};
//!
//! let mut controller = CrossingController::new(Side::Left);
//! let event = controller.attempt(Selection::Passenger(1)).unwrap();
//! assert!(event.is_committed());
//! assert_eq!(controller.boat_side(), Side::Right);
//! ```

use std::time::Instant;

use rivercross_core_types::schema::{EVENT_MOVE_COMMITTED, EVENT_MOVE_REJECTED};
use rivercross_core_types::SessionId;

use crate::errors::{Result, RiverCrossError};
use crate::events::{CommittedMove, CrossingEvent, Direction, PuzzleState, WorldSnapshot};
use crate::io::CrossingIo;
use crate::model::{Passenger, PassengerKind, Shore, Side};
use crate::rules::safety::Safety;
use crate::rules::validation;
use crate::selection::Selection;
use crate::{log_op_end, log_op_error, log_op_start};

/// Owner of the two shores, the boat and the move history
#[derive(Debug, Clone)]
pub struct CrossingController {
    left: Shore,
    right: Shore,
    ferryman: Passenger,
    boat_side: Side,
    start_side: Side,
    state: PuzzleState,
    history: Vec<CommittedMove>,
    session_id: SessionId,
}

impl CrossingController {
    /// Canonical start: goat, wolf and cabbage on `start_side` with the boat
    pub fn new(start_side: Side) -> Self {
        let loaded = Shore::with_passengers(PassengerKind::TRANSPORTABLE.map(Passenger::new));
        let (left, right) = match start_side {
            Side::Left => (loaded, Shore::new()),
            Side::Right => (Shore::new(), loaded),
        };

        Self::assemble(left, right, start_side, start_side)
    }

    /// Start from an arbitrary distribution
    ///
    /// Useful for resuming a session or for exercising mid-game positions.
    /// The state is `Complete` straight away if everything already sits
    /// opposite `start_side`.
    ///
    /// # Errors
    /// * `InvalidDistribution` - If the man is placed on a shore, a kind is
    ///   duplicated or missing, or the shore without the boat is unsafe
    pub fn with_distribution(
        left: Shore,
        right: Shore,
        boat_side: Side,
        start_side: Side,
    ) -> Result<Self> {
        validation::validate_world(&left, &right, boat_side).map_err(|err| match err {
            RiverCrossError::InvariantViolation { side, reason } => {
                RiverCrossError::InvalidDistribution {
                    reason: format!("{} shore: {}", side, reason),
                }
            }
            other => other,
        })?;

        let mut controller = Self::assemble(left, right, boat_side, start_side);
        if controller.terminal_reached() {
            controller.state = PuzzleState::Complete;
        }
        Ok(controller)
    }

    fn assemble(left: Shore, right: Shore, boat_side: Side, start_side: Side) -> Self {
        Self {
            left,
            right,
            ferryman: Passenger::man(),
            boat_side,
            start_side,
            state: PuzzleState::InProgress,
            history: Vec::new(),
            session_id: SessionId::new(),
        }
    }

    pub fn boat_side(&self) -> Side {
        self.boat_side
    }

    pub fn start_side(&self) -> Side {
        self.start_side
    }

    pub fn state(&self) -> PuzzleState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == PuzzleState::Complete
    }

    pub fn ferryman(&self) -> &Passenger {
        &self.ferryman
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn shore(&self, side: Side) -> &Shore {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn shore_mut(&mut self, side: Side) -> &mut Shore {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// The shore the boat is docked at
    pub fn from_shore(&self) -> &Shore {
        self.shore(self.boat_side)
    }

    /// The shore across the river from the boat
    pub fn to_shore(&self) -> &Shore {
        self.shore(self.boat_side.opposite())
    }

    /// Committed moves so far, oldest first
    pub fn history(&self) -> &[CommittedMove] {
        &self.history
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Inclusive bounds of the choice the IO layer must supply this turn
    pub fn selection_range(&self) -> (usize, usize) {
        (1, self.from_shore().count() + 1)
    }

    /// Decode a raw 1-based choice for the current turn
    ///
    /// # Errors
    /// * `SelectionOutOfRange` - If the IO layer broke its range contract
    pub fn select(&self, value: usize) -> Result<Selection> {
        Selection::decode(value, self.from_shore().count())
    }

    /// Selection that would carry `kind` (or nobody, for `None`) this turn
    ///
    /// Returns `None` if `kind` is not on the shore the boat is docked at.
    pub fn selection_for(&self, kind: Option<PassengerKind>) -> Option<Selection> {
        match kind {
            None => Some(Selection::Alone),
            Some(kind) => self
                .from_shore()
                .position_of(&Passenger::new(kind))
                .map(|index| Selection::Passenger(index + 1)),
        }
    }

    /// Value copy of the observable state
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            left: self.left.clone(),
            right: self.right.clone(),
            boat_side: self.boat_side,
            start_side: self.start_side,
            state: self.state,
            moves: self.history.len(),
        }
    }

    fn terminal_reached(&self) -> bool {
        let far = self.shore(self.start_side.opposite());
        PassengerKind::TRANSPORTABLE
            .iter()
            .all(|kind| far.contains_kind(*kind))
    }

    /// Make one crossing attempt
    ///
    /// A rule violation is not an error: it comes back as
    /// `CrossingEvent::MoveRejected` and nothing changes.
    ///
    /// # Errors
    /// * `PuzzleAlreadyComplete` - If every passenger has already crossed
    /// * `SelectionOutOfRange` - If a passenger position is 0
    /// * `IndexOutOfRange` - If a passenger position is past the shore's end
    /// * `InvariantViolation` - If a committed move corrupted the world
    pub fn attempt(&mut self, selection: Selection) -> Result<CrossingEvent> {
        if self.is_complete() {
            return Err(RiverCrossError::PuzzleAlreadyComplete {
                moves: self.history.len(),
            });
        }

        let from = self.from_shore();
        let (safety, passenger) = match selection {
            Selection::Alone => (from.is_safe_without_supervisor(), None),
            Selection::Passenger(position) => {
                let index =
                    position
                        .checked_sub(1)
                        .ok_or(RiverCrossError::SelectionOutOfRange {
                            value: position,
                            max: from.count() + 1,
                        })?;
                let passenger = from.get(index)?.clone();
                (from.is_safe_if_removed(&passenger)?, Some(passenger))
            }
        };

        match safety {
            Safety::Unsafe(reason) => {
                tracing::debug!(
                    component = module_path!(),
                    op = "attempt",
                    event = EVENT_MOVE_REJECTED,
                    session_id = %self.session_id,
                    side = %self.boat_side,
                    passenger = passenger.as_ref().map_or("none", Passenger::label),
                    reason = reason.key(),
                );
                Ok(CrossingEvent::MoveRejected { reason })
            }
            Safety::Safe => self.commit(passenger),
        }
    }

    fn commit(&mut self, passenger: Option<Passenger>) -> Result<CrossingEvent> {
        let direction = Direction::departing(self.boat_side);

        if let Some(p) = &passenger {
            if !self.shore_mut(direction.origin()).remove(p) {
                return Err(RiverCrossError::PassengerNotOnShore {
                    passenger: p.kind(),
                });
            }
            self.shore_mut(direction.destination()).add(p.clone());
        }
        self.boat_side = direction.destination();

        validation::validate_world(&self.left, &self.right, self.boat_side)?;

        self.history.push(CommittedMove {
            number: self.history.len() + 1,
            direction,
            passenger: passenger.clone(),
        });
        if self.terminal_reached() {
            self.state = PuzzleState::Complete;
        }

        let move_no = self.history.len() as u64;
        tracing::debug!(
            component = module_path!(),
            op = "attempt",
            event = EVENT_MOVE_COMMITTED,
            session_id = %self.session_id,
            move_no = move_no,
            side = %direction.destination(),
            passenger = passenger.as_ref().map_or("none", Passenger::label),
        );

        Ok(CrossingEvent::MoveCommitted {
            direction,
            passenger,
        })
    }

    /// Play one turn: ask, validate, and retry on rejection until a move commits
    ///
    /// Every attempt's outcome is sent to `io`. When the committed move
    /// completes the puzzle, `PuzzleSolved` follows it.
    ///
    /// # Errors
    /// Propagates IO failures and contract violations; see [`Self::attempt`].
    pub fn play_turn<I: CrossingIo>(&mut self, io: &mut I) -> Result<CrossingEvent> {
        loop {
            let (_, max) = self.selection_range();
            let value = io.request_selection(self.from_shore(), max)?;
            let selection = self.select(value)?;
            let event = self.attempt(selection)?;
            io.notify(&event);

            if event.is_committed() {
                if self.is_complete() {
                    io.notify(&CrossingEvent::PuzzleSolved {
                        moves: self.history.len(),
                    });
                }
                return Ok(event);
            }
        }
    }

    /// Play turns until every passenger has crossed
    ///
    /// Returns the number of committed moves.
    ///
    /// # Errors
    /// Propagates the first error from [`Self::play_turn`].
    pub fn run<I: CrossingIo>(&mut self, io: &mut I) -> Result<usize> {
        let started = Instant::now();
        log_op_start!(
            "run",
            session_id = %self.session_id,
            side = %self.start_side
        );

        let result = self.play_until_complete(io);
        let duration_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(moves) => {
                let moves = *moves as u64;
                log_op_end!(
                    "run",
                    duration_ms = duration_ms,
                    session_id = %self.session_id,
                    moves = moves
                );
            }
            Err(err) => {
                log_op_error!(
                    "run",
                    err.clone(),
                    duration_ms = duration_ms,
                    session_id = %self.session_id
                );
            }
        }

        result
    }

    fn play_until_complete<I: CrossingIo>(&mut self, io: &mut I) -> Result<usize> {
        while !self.is_complete() {
            self.play_turn(io)?;
        }
        Ok(self.history.len())
    }
}
