//! Game engine - the turn/tick state machine
//!
//! Ties board, piece catalog, shape source, and scoring together behind the
//! only API hosts use. The engine owns no clock: an external driver calls
//! `tick()` at its own cadence and `shift`/`rotate` between ticks; all calls
//! are serialized and none block. Illegal attempts are boolean no-ops, never
//! errors; the only state-machine-visible failure is the GameOver transition.

use std::fmt;

use tracing::{debug, trace};

use crate::config::{BoardConfig, ConfigError};
use crate::core::board::Board;
use crate::core::piece::ActivePiece;
use crate::core::scoring;
use crate::core::snapshot::{ActiveSnapshot, BoardSnapshot, EngineSnapshot};
use crate::core::spawner::{RandomSource, ShapeSource};
use crate::types::{GameEvent, GamePhase, Shift};

pub struct GameEngine {
    config: BoardConfig,
    board: Board,
    active: Option<ActivePiece>,
    source: Box<dyn ShapeSource + Send>,
    score: u32,
    phase: GamePhase,
    /// Pending events; hosts drain with `take_events` after each call
    events: Vec<GameEvent>,
}

// The boxed shape source has no Debug bound, so the derive is unavailable
impl fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("config", &self.config)
            .field("phase", &self.phase)
            .field("score", &self.score)
            .field("active", &self.active)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl GameEngine {
    /// Engine with an entropy-seeded shape source
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        Self::with_source(config, Box::new(RandomSource::new()))
    }

    /// Engine with a seeded shape source; same seed, same piece sequence
    pub fn with_seed(config: BoardConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_source(config, Box::new(RandomSource::with_seed(seed)))
    }

    /// Engine with an injected shape source
    pub fn with_source(
        config: BoardConfig,
        source: Box<dyn ShapeSource + Send>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            board: Board::new(config),
            active: None,
            source,
            score: 0,
            phase: GamePhase::Idle,
            events: Vec::new(),
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Absolute cells of the falling piece, for overlay rendering.
    /// `None` while no piece is falling (Idle or GameOver).
    pub fn active_cells(&self) -> Option<[(i16, i16); 4]> {
        self.active.map(|piece| piece.cells())
    }

    pub fn board_snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(&self.board)
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            board: self.board_snapshot(),
            active: self.active.map(ActiveSnapshot::from),
            phase: self.phase,
            score: self.score,
        }
    }

    /// Drain pending events in emission order
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Begin play from Idle, or resume from Paused.
    /// No-op from Running and GameOver (GameOver requires `reset`).
    pub fn start(&mut self) -> bool {
        match self.phase {
            GamePhase::Idle => {
                self.begin_round();
                true
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Running;
                true
            }
            GamePhase::Running | GamePhase::GameOver => false,
        }
    }

    /// Freeze play; board, piece, and score stay untouched
    pub fn pause(&mut self) -> bool {
        if !self.phase.is_running() {
            return false;
        }
        self.phase = GamePhase::Paused;
        true
    }

    /// Clear everything and immediately begin a fresh round.
    /// Valid from any phase; the player resumes play rather than landing at
    /// a menu.
    pub fn reset(&mut self) -> bool {
        self.phase = GamePhase::Idle;
        self.begin_round();
        true
    }

    /// One gravity step: move the piece down if it fits, otherwise settle
    /// it - lock, clear rows, score, spawn the next piece. The collision
    /// check always runs before any anchor movement.
    pub fn tick(&mut self) -> bool {
        if !self.phase.is_running() {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };

        if piece.fits(&self.board, 0, 1, piece.rotation) {
            self.active = Some(piece.shifted(0, 1));
            trace!(x = piece.x, y = piece.y + 1, "gravity step");
        } else {
            self.settle(piece);
        }
        true
    }

    /// Move the falling piece one column left or right; ignored when the
    /// target position collides
    pub fn shift(&mut self, dir: Shift) -> bool {
        if !self.phase.is_running() {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };
        if !piece.fits(&self.board, dir.dx(), 0, piece.rotation) {
            return false;
        }
        self.active = Some(piece.shifted(dir.dx(), 0));
        true
    }

    /// Advance the rotation state by a quarter turn at the same anchor.
    /// No wall kicks: if the target state collides, the piece stays put.
    pub fn rotate(&mut self) -> bool {
        if !self.phase.is_running() {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };
        let next = piece.rotation.next();
        if !piece.fits(&self.board, 0, 0, next) {
            return false;
        }
        self.active = Some(piece.rotated(next));
        true
    }

    /// Fresh board, score zero, first piece, Running
    fn begin_round(&mut self) {
        self.board.reset();
        if self.score != 0 {
            self.score = 0;
            self.events.push(GameEvent::ScoreChanged(0));
        }
        self.active = None;
        self.phase = GamePhase::Running;
        self.spawn();
    }

    /// Lock the piece where it rests, clear any completed rows, award score,
    /// and spawn the successor
    fn settle(&mut self, piece: ActivePiece) {
        self.board.lock(&piece.cells(), piece.kind);
        self.active = None;

        let cleared = self.board.clear_full_rows();
        if !cleared.is_empty() {
            let lines = cleared.len();
            self.score += scoring::line_clear_score(lines);
            debug!(lines, score = self.score, "rows cleared");
            self.events.push(GameEvent::LinesCleared(lines as u32));
            self.events.push(GameEvent::ScoreChanged(self.score));
        }

        self.spawn();
    }

    /// Spawn the next piece at the canonical anchor. A blocked spawn ends
    /// the game without placing the piece.
    fn spawn(&mut self) -> bool {
        let kind = self.source.next_shape();
        let piece = ActivePiece::spawn(kind, self.config.spawn_x());

        if !piece.fits(&self.board, 0, 0, piece.rotation) {
            debug!(?kind, score = self.score, "spawn blocked, game over");
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver);
            return false;
        }

        trace!(?kind, x = piece.x, "spawned piece");
        self.active = Some(piece);
        true
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn active(&self) -> Option<ActivePiece> {
        self.active
    }
}
