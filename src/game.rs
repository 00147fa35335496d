//! Turn sequencing, victory detection, and the computer's firing loop.

use log::{debug, info};
use rand::Rng;

use crate::board::Board;
use crate::common::{PlacementError, ShotTally, Side};
use crate::coord::Coord;
use crate::targeting::Targeting;

/// State changes emitted for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A shot landed on `target`'s board.
    ShotResolved { target: Side, coord: Coord, hit: bool },
    /// The turn passed to `turn`.
    TurnChanged { turn: Side },
    /// The game is over; no further shots are accepted.
    GameEnded { winner: Side },
}

/// A full game: both boards, whose turn it is, and the computer's
/// targeting state.
///
/// Commands that are illegal in the current state — firing out of turn,
/// after the game ended, or at an already-shot cell — are silent no-ops
/// returning no events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession<const N: usize> {
    pub(crate) human_board: Board<N>,
    pub(crate) computer_board: Board<N>,
    pub(crate) turn: Side,
    pub(crate) game_over: bool,
    pub(crate) winner: Option<Side>,
    pub(crate) human_tally: ShotTally,
    pub(crate) computer_tally: ShotTally,
    pub(crate) targeting: Targeting<N>,
    pub(crate) status_text: String,
}

impl<const N: usize> GameSession<N> {
    /// Start a fresh game with `lengths` randomly placed on both boards.
    /// The human fires first.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, lengths: &[usize]) -> Result<Self, PlacementError> {
        let human_board = Board::with_fleet(rng, lengths)?;
        let computer_board = Board::with_fleet(rng, lengths)?;
        Ok(Self::with_boards(human_board, computer_board))
    }

    /// Start a fresh game over prepared boards.
    pub fn with_boards(human_board: Board<N>, computer_board: Board<N>) -> Self {
        GameSession {
            human_board,
            computer_board,
            turn: Side::Human,
            game_over: false,
            winner: None,
            human_tally: ShotTally::default(),
            computer_tally: ShotTally::default(),
            targeting: Targeting::new(),
            status_text: String::from("your turn"),
        }
    }

    pub fn board(&self, side: Side) -> &Board<N> {
        match side {
            Side::Human => &self.human_board,
            Side::Computer => &self.computer_board,
        }
    }

    fn board_mut(&mut self, side: Side) -> &mut Board<N> {
        match side {
            Side::Human => &mut self.human_board,
            Side::Computer => &mut self.computer_board,
        }
    }

    pub fn tally(&self, side: Side) -> ShotTally {
        match side {
            Side::Human => self.human_tally,
            Side::Computer => self.computer_tally,
        }
    }

    fn tally_mut(&mut self, side: Side) -> &mut ShotTally {
        match side {
            Side::Human => &mut self.human_tally,
            Side::Computer => &mut self.computer_tally,
        }
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn targeting(&self) -> &Targeting<N> {
        &self.targeting
    }

    /// One-line status for the presentation layer; persisted verbatim.
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Fire at `shooter`'s opponent. Returns the resulting events, or
    /// nothing if the command is rejected.
    ///
    /// A hit keeps the turn with the shooter; a miss passes it. The game
    /// ends the instant the defending board's last ship cell is hit.
    pub fn fire(&mut self, shooter: Side, coord: Coord) -> Vec<GameEvent> {
        if self.game_over || shooter != self.turn {
            return Vec::new();
        }
        let target = shooter.opponent();
        let outcome = self.board_mut(target).apply_shot(coord);
        if !outcome.is_valid() {
            debug!("{shooter} re-fired at {coord}, ignoring");
            return Vec::new();
        }
        let hit = outcome.is_hit();
        self.tally_mut(shooter).record(hit);
        let mut events = vec![GameEvent::ShotResolved { target, coord, hit }];

        if hit && self.board(target).has_won() {
            self.game_over = true;
            self.winner = Some(shooter);
            self.status_text = format!("{shooter} wins");
            info!("game over, {shooter} wins");
            events.push(GameEvent::GameEnded { winner: shooter });
        } else if hit {
            self.status_text = format!("{shooter} hit at {coord} and fires again");
        } else {
            self.turn = target;
            self.status_text = format!("{shooter} missed at {coord}; {target} to fire");
            events.push(GameEvent::TurnChanged { turn: self.turn });
        }
        events
    }

    /// One step of the computer's turn: decide, fire, feed the outcome
    /// back into the targeting engine. No-op unless the game is live and
    /// it is the computer's turn.
    pub fn computer_step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<GameEvent> {
        if self.game_over || self.turn != Side::Computer {
            return Vec::new();
        }
        let shots = self.human_board.shots();
        let Some(coord) = self.targeting.choose(rng, &shots) else {
            return Vec::new();
        };
        let events = self.fire(Side::Computer, coord);
        if events.is_empty() {
            return events;
        }
        if self.human_board.hits().contains(coord) {
            let hits = self.human_board.hits();
            let shots = self.human_board.shots();
            self.targeting.record_hit(coord, &hits, &shots);
        } else {
            self.targeting.record_miss();
        }
        events
    }

    /// Run the computer's whole turn: it keeps firing while it hits, and
    /// yields on a miss or when the game ends.
    pub fn run_computer_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<GameEvent> {
        let mut events = Vec::new();
        while !self.game_over && self.turn == Side::Computer {
            let step = self.computer_step(rng);
            if step.is_empty() {
                break;
            }
            events.extend(step);
        }
        events
    }
}
