//! Game state module - one play session
//!
//! Ties the board, the falling piece, the piece queue and the scoring tables
//! together under a [`Ruleset`]. Gravity is a discrete [`GameState::tick`];
//! [`GameState::advance`] turns wall-clock milliseconds into ticks.

use tracing::{debug, info};

use crate::board::Board;
use crate::piece::FallingPiece;
use crate::rng::PieceQueue;
use crate::rules::Ruleset;
use crate::scoring::{drop_interval_ms, drop_score, level_for_lines, line_score};
use crate::snapshot::GameSnapshot;
use crate::tetrimino::Tetrimino;
use crate::types::{GameAction, PieceKind, BASE_DROP_MS};

/// Result of one gravity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing happened (not playable, or not enough time elapsed).
    Idle,
    /// The active piece moved down one row.
    Fell,
    /// The active piece was merged and the next one spawned.
    Locked { lines: u32 },
    /// The next piece could not be placed; the session has stopped.
    GameOver,
}

/// What the last lock did, for observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    /// Line-clear points awarded by this lock (drop points excluded).
    pub points: u32,
}

#[derive(Debug, Clone)]
pub struct GameState {
    rules: Ruleset,
    board: Board,
    active: Option<FallingPiece>,
    queue: PieceQueue,
    score: u32,
    lines: u32,
    level: u32,
    pieces_locked: u32,
    drop_timer_ms: u32,
    running: bool,
    paused: bool,
    game_over: bool,
    started: bool,
    last_event: Option<LockEvent>,
}

impl GameState {
    pub fn new(rules: Ruleset, seed: u32) -> Self {
        Self::with_board(rules, seed, Board::new())
    }

    /// Start from a prepared board instead of an empty one.
    pub fn with_board(rules: Ruleset, seed: u32, board: Board) -> Self {
        let queue = PieceQueue::new(&rules.pieces, rules.randomizer, seed, rules.preview);
        let level = rules.start_level;
        Self {
            rules,
            board,
            active: None,
            queue,
            score: 0,
            lines: 0,
            level,
            pieces_locked: 0,
            drop_timer_ms: 0,
            running: false,
            paused: false,
            game_over: false,
            started: false,
            last_event: None,
        }
    }

    /// Start the game and spawn the first piece.
    ///
    /// After [`GameState::stop`] this resumes the session where it was left;
    /// a finished game stays over until restarted.
    pub fn start(&mut self) {
        if self.started {
            if !self.running && !self.game_over {
                self.running = true;
                debug!("game resumed");
            }
            return;
        }
        self.started = true;
        self.running = true;
        info!(
            edition = self.rules.edition.as_str(),
            seed = self.queue.seed(),
            "game started"
        );
        self.spawn_piece();
    }

    /// Stop the session without ending it as a loss.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Spawn the next piece from the queue.
    ///
    /// Returns `false` and ends the game when it does not fit.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.queue.draw();
        let tiles = Tetrimino::for_edition(kind, self.rules.edition);
        let piece = FallingPiece::spawn_shaped(kind, tiles, self.rules.spawn_centered);

        if !piece.fits(&self.board) {
            self.active = None;
            self.game_over = true;
            self.running = false;
            info!(
                score = self.score,
                lines = self.lines,
                pieces = self.pieces_locked,
                "game over"
            );
            return false;
        }

        self.active = Some(piece);
        self.drop_timer_ms = 0;
        true
    }

    /// True while input and time should affect the game.
    pub fn playable(&self) -> bool {
        self.running && !self.paused && !self.game_over
    }

    /// One discrete gravity step.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.playable() {
            return TickOutcome::Idle;
        }
        let Some(active) = self.active else {
            return TickOutcome::Idle;
        };

        if active.can_move(&self.board, 0, 1) {
            self.active = Some(active.moved(0, 1));
            return TickOutcome::Fell;
        }

        self.lock_piece()
    }

    /// Merge the active piece into the board, clear rows, score, then spawn.
    fn lock_piece(&mut self) -> TickOutcome {
        let Some(active) = self.active.take() else {
            return TickOutcome::Idle;
        };

        self.board.merge(&active);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        let cleared = if self.rules.line_clears {
            self.board.clear_full_rows().len() as u32
        } else {
            0
        };

        let points = if self.rules.scoring {
            line_score(cleared as usize, self.level)
        } else {
            0
        };
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(cleared);
        if self.rules.leveled {
            self.level = level_for_lines(self.rules.start_level, self.lines);
        }

        debug!(
            kind = active.kind.as_str(),
            x = active.pos.x,
            y = active.pos.y,
            lines = cleared,
            points,
            "piece locked"
        );
        self.last_event = Some(LockEvent {
            kind: active.kind,
            lines_cleared: cleared,
            points,
        });

        if self.spawn_piece() {
            TickOutcome::Locked { lines: cleared }
        } else {
            TickOutcome::GameOver
        }
    }

    /// Shift the active piece if the target is free.
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        if !active.can_move(&self.board, dx, dy) {
            return false;
        }
        self.active = Some(active.moved(dx, dy));
        true
    }

    /// Rotate the active piece, trying each kick offset of the ruleset in
    /// order. The piece is left alone when no offset fits.
    pub(crate) fn try_rotate(&mut self, clockwise: bool) -> bool {
        if !self.rules.rotation {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.rotated(clockwise);
        // Symmetric matrices (O) rotate onto themselves.
        if rotated.tiles == active.tiles {
            return false;
        }

        for &dx in self.rules.kicks() {
            if rotated.can_move(&self.board, dx, 0) {
                self.active = Some(rotated.moved(dx, 0));
                return true;
            }
        }
        false
    }

    /// Move down one row as a player action. Scores when the piece moved.
    pub(crate) fn soft_drop(&mut self) -> TickOutcome {
        let outcome = self.tick();
        if outcome == TickOutcome::Fell {
            if self.rules.scoring {
                self.score = self.score.saturating_add(drop_score(1, false));
            }
            self.drop_timer_ms = 0;
        }
        outcome
    }

    /// Drop the active piece to its landing row and lock it.
    pub(crate) fn hard_drop(&mut self) -> TickOutcome {
        if !self.rules.hard_drop {
            return TickOutcome::Idle;
        }
        let Some(active) = self.active else {
            return TickOutcome::Idle;
        };

        let distance = active.drop_distance(&self.board);
        self.active = Some(active.moved(0, distance));
        if self.rules.scoring {
            self.score = self
                .score
                .saturating_add(drop_score(distance as u32, true));
        }
        self.lock_piece()
    }

    /// Row offset the active piece would land on.
    pub fn shadow_y(&self) -> Option<i8> {
        let active = self.active?;
        Some(active.pos.y + active.drop_distance(&self.board))
    }

    /// Current gravity interval.
    pub fn drop_interval_ms(&self) -> u32 {
        if self.rules.leveled {
            drop_interval_ms(self.level)
        } else {
            BASE_DROP_MS
        }
    }

    /// Feed elapsed wall-clock time; ticks once the drop interval is reached.
    pub fn advance(&mut self, elapsed_ms: u32) -> TickOutcome {
        if !self.playable() {
            return TickOutcome::Idle;
        }
        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < self.drop_interval_ms() {
            return TickOutcome::Idle;
        }
        self.drop_timer_ms = 0;
        self.tick()
    }

    /// Apply a game action. Returns whether it changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => {
                if !self.started || self.game_over {
                    return false;
                }
                self.paused = !self.paused;
                debug!(paused = self.paused, "pause toggled");
                true
            }
            GameAction::Restart => {
                let seed = self.queue.seed();
                info!(seed, score = self.score, "restarting");
                *self = Self::new(self.rules.clone(), seed);
                self.start();
                true
            }
            _ if !self.playable() => false,
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.soft_drop() != TickOutcome::Idle,
            GameAction::HardDrop => self.hard_drop() != TickOutcome::Idle,
            GameAction::RotateCw => self.try_rotate(true),
            GameAction::RotateCcw => self.try_rotate(false),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.edition = self.rules.edition;
        out.active = self.active;
        out.shadow_y = if self.rules.shadow {
            self.shadow_y()
        } else {
            None
        };
        out.next.clear();
        out.next
            .extend(self.queue.upcoming().take(self.rules.preview.min(out.next.capacity())));
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.running = self.running;
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn rules(&self) -> &Ruleset {
        &self.rules
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<FallingPiece> {
        self.active
    }

    pub fn seed(&self) -> u32 {
        self.queue.seed()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn started(&self) -> bool {
        self.started
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Ruleset::default(), 1)
    }
}
