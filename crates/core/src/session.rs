//! Game session - owns the simulation and runs its lifecycle
//!
//! This module ties together the board, the falling piece, the RNG, the drop
//! scheduler and scoring. It is an explicitly owned value: there is no global
//! state, and several sessions can run side by side.
//!
//! Lifecycle:
//!
//! ```text
//!   Running --pause--> Paused --resume--> Running
//!   Running --spawn collides--> Over --restart--> Running
//! ```
//!
//! Input while `Paused` or `Over` is ignored (the call returns `false`).

use std::fmt;

use log::debug;

use crate::board::Board;
use crate::collab::{AudioCueSink, HighScoreStore, MemoryHighScore, NoAudio, Renderer};
use crate::collision::collides;
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::scheduler::DropScheduler;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{AudioCue, Difficulty, Intent, Lifecycle, POINTS_PER_LINE};

/// Builder wiring optional collaborators into a [`GameSession`].
pub struct SessionBuilder {
    difficulty: Difficulty,
    seed: u32,
    board: Board,
    audio: Box<dyn AudioCueSink>,
    high_scores: Box<dyn HighScoreStore>,
}

impl SessionBuilder {
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Start from a prepared board instead of an empty one.
    ///
    /// Only the first game uses it; restart always begins with an empty board.
    pub fn board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    pub fn audio(mut self, sink: impl AudioCueSink + 'static) -> Self {
        self.audio = Box::new(sink);
        self
    }

    pub fn high_scores(mut self, store: impl HighScoreStore + 'static) -> Self {
        self.high_scores = Box::new(store);
        self
    }

    pub fn build(self) -> GameSession {
        let high_score = self.high_scores.load_high_score();
        let mut session = GameSession {
            board: self.board,
            active: None,
            rng: SimpleRng::new(self.seed),
            seed: self.seed,
            difficulty: self.difficulty,
            scheduler: DropScheduler::new(self.difficulty),
            lifecycle: Lifecycle::Running,
            episode_id: 0,
            score: 0,
            high_score,
            lines: 0,
            pieces_locked: 0,
            last_lines_cleared: 0,
            audio: self.audio,
            high_scores: self.high_scores,
        };
        debug!(
            "session started: difficulty={} seed={} high_score={}",
            session.difficulty.as_str(),
            session.seed,
            session.high_score
        );
        session.spawn_piece();
        session
    }
}

/// Complete game session
pub struct GameSession {
    board: Board,
    active: Option<Piece>,
    rng: SimpleRng,
    seed: u32,
    difficulty: Difficulty,
    scheduler: DropScheduler,
    lifecycle: Lifecycle,
    /// Monotonic game counter (increments on restart).
    episode_id: u32,
    score: u32,
    high_score: u32,
    lines: u32,
    pieces_locked: u32,
    /// Rows removed by the most recent lock.
    last_lines_cleared: u32,
    audio: Box<dyn AudioCueSink>,
    high_scores: Box<dyn HighScoreStore>,
}

impl GameSession {
    /// Start configuring a session for `difficulty`.
    pub fn builder(difficulty: Difficulty) -> SessionBuilder {
        SessionBuilder {
            difficulty,
            seed: 1,
            board: Board::new(),
            audio: Box::new(NoAudio),
            high_scores: Box::new(MemoryHighScore::default()),
        }
    }

    /// Session with no collaborators: silent, in-memory high score.
    pub fn new(difficulty: Difficulty, seed: u32) -> Self {
        Self::builder(difficulty).seed(seed).build()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_paused(&self) -> bool {
        self.lifecycle == Lifecycle::Paused
    }

    pub fn is_over(&self) -> bool {
        self.lifecycle == Lifecycle::Over
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn last_lines_cleared(&self) -> u32 {
        self.last_lines_cleared
    }

    pub fn drop_accumulator_ms(&self) -> u32 {
        self.scheduler.accumulator_ms()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: *self.board.rows(),
            active: self.active.map(PieceSnapshot::from),
            lifecycle: self.lifecycle,
            difficulty: self.difficulty,
            score: self.score,
            high_score: self.high_score,
            lines: self.lines,
            pieces_locked: self.pieces_locked,
            drop_accumulator_ms: self.scheduler.accumulator_ms(),
        }
    }

    /// Hand the board and the falling piece to a renderer.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.draw_board(&self.board);
        if let Some(piece) = self.active.as_ref() {
            renderer.draw_piece(piece);
        }
    }

    /// Apply one player intent. Returns whether it changed anything.
    pub fn handle_intent(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::MoveLeft => self.shift(-1, 0),
            Intent::MoveRight => self.shift(1, 0),
            Intent::SoftDrop => self.shift(0, 1),
            Intent::Rotate => self.rotate(),
            Intent::TogglePause => self.toggle_pause(),
            Intent::HardDrop => self.hard_drop(),
        }
    }

    /// Try to move the active piece by (dx, dy)
    ///
    /// No-op while paused or over. The piece only changes when the collision
    /// oracle accepts the new position.
    pub fn move_piece(&mut self, dx: i8, dy: i8) -> bool {
        if !self.lifecycle.is_running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        match active.try_move(&self.board, dx, dy) {
            Some(moved) => {
                self.active = Some(moved);
                true
            }
            None => false,
        }
    }

    /// Player-initiated move (announces a cue on success).
    fn shift(&mut self, dx: i8, dy: i8) -> bool {
        let moved = self.move_piece(dx, dy);
        if moved {
            self.audio.cue(AudioCue::Move);
        }
        moved
    }

    /// Rotate the active piece, trying one column left then one column right.
    ///
    /// If every position collides the piece keeps its rotation and position.
    pub fn rotate(&mut self) -> bool {
        if !self.lifecycle.is_running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        match active.try_rotate(&self.board) {
            Some(rotated) => {
                self.active = Some(rotated);
                self.audio.cue(AudioCue::Rotate);
                true
            }
            None => false,
        }
    }

    /// One gravity step: move down, or lock when blocked.
    ///
    /// Returns whether the piece moved (false also when it locked).
    pub fn drop_piece(&mut self) -> bool {
        if !self.lifecycle.is_running() || self.active.is_none() {
            return false;
        }

        if self.move_piece(0, 1) {
            true
        } else {
            self.lock_piece();
            false
        }
    }

    /// Drop the active piece to its landing row and lock it immediately
    pub fn hard_drop(&mut self) -> bool {
        if !self.lifecycle.is_running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        self.active = Some(active.landing(&self.board));
        self.lock_piece();
        true
    }

    /// Advance the drop scheduler by `delta_ms`.
    ///
    /// Returns whether a gravity drop fired. Nothing accumulates unless the
    /// session is running.
    pub fn tick(&mut self, delta_ms: u32) -> bool {
        if !self.lifecycle.is_running() {
            return false;
        }

        if self.scheduler.advance(delta_ms) {
            self.drop_piece();
            true
        } else {
            false
        }
    }

    /// Advance using a wall-clock instant (milliseconds, any fixed origin).
    pub fn frame(&mut self, now_ms: u64) -> bool {
        if !self.lifecycle.is_running() {
            return false;
        }

        let delta = self.scheduler.elapsed_since_last(now_ms);
        self.tick(delta)
    }

    pub fn pause(&mut self) -> bool {
        if self.lifecycle != Lifecycle::Running {
            return false;
        }
        self.lifecycle = Lifecycle::Paused;
        self.audio.cue(AudioCue::Pause);
        true
    }

    /// Resume a paused session. The next frame re-establishes the clock.
    pub fn resume(&mut self) -> bool {
        if self.lifecycle != Lifecycle::Paused {
            return false;
        }
        self.lifecycle = Lifecycle::Running;
        self.scheduler.forget_clock();
        self.audio.cue(AudioCue::Pause);
        true
    }

    /// Resume and take `now_ms` as the clock reference.
    pub fn resume_at(&mut self, now_ms: u64) -> bool {
        let resumed = self.resume();
        if resumed {
            self.scheduler.resync(now_ms);
        }
        resumed
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.lifecycle {
            Lifecycle::Running => self.pause(),
            Lifecycle::Paused => self.resume(),
            Lifecycle::Over => false,
        }
    }

    /// Throw the current game away and start a fresh one.
    ///
    /// Difficulty, collaborators and high score are kept.
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.active = None;
        self.scheduler.reset();
        self.lifecycle = Lifecycle::Running;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.score = 0;
        self.lines = 0;
        self.pieces_locked = 0;
        self.last_lines_cleared = 0;
        self.high_score = self.high_score.max(self.high_scores.load_high_score());
        debug!("session restarted: episode={}", self.episode_id);
        self.spawn_piece();
    }

    /// Replace the active piece with a fresh random one.
    ///
    /// Returns false (and ends the game) if it collides at spawn.
    fn spawn_piece(&mut self) -> bool {
        let piece = Piece::spawn(self.rng.next_kind());
        self.active = Some(piece);

        if collides(&piece, &self.board, 0, 0) {
            self.enter_game_over();
            return false;
        }
        true
    }

    /// Merge the active piece into the board, clear lines, score, spawn next.
    fn lock_piece(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        let value = piece.cell_value();
        for (x, y) in piece.cells() {
            if x >= 0 && y >= 0 {
                self.board.set(x as usize, y as usize, value);
            }
        }

        let cleared = self.board.clear_lines();
        self.last_lines_cleared = cleared;
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        if cleared > 0 {
            self.lines = self.lines.saturating_add(cleared);
            self.score = self.score.saturating_add(cleared * POINTS_PER_LINE);
            self.audio.cue(AudioCue::LineClear);
        }

        self.spawn_piece();
    }

    fn enter_game_over(&mut self) {
        self.lifecycle = Lifecycle::Over;
        if self.score > self.high_score {
            self.high_score = self.score;
            self.high_scores.save_high_score(self.score);
        }
        self.audio.cue(AudioCue::GameOver);
        debug!(
            "game over: score={} lines={} pieces={}",
            self.score, self.lines, self.pieces_locked
        );
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: Piece) {
        self.active = Some(piece);
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("board", &self.board)
            .field("active", &self.active)
            .field("difficulty", &self.difficulty)
            .field("lifecycle", &self.lifecycle)
            .field("episode_id", &self.episode_id)
            .field("score", &self.score)
            .field("high_score", &self.high_score)
            .field("lines", &self.lines)
            .finish_non_exhaustive()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Difficulty::default(), 1)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::types::{PieceKind, COLS, ROWS};

    fn fill_row_except(board: &mut Board, y: usize, gaps: &[usize]) {
        for x in 0..COLS {
            if !gaps.contains(&x) {
                board.set(x, y, 1);
            }
        }
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new(Difficulty::Medium, 12345);

        assert_eq!(session.lifecycle(), Lifecycle::Running);
        assert_eq!(session.score(), 0);
        assert_eq!(session.lines(), 0);
        let active = session.active().unwrap();
        assert_eq!((active.x, active.y, active.rotation), (3, 0, 0));
    }

    #[test]
    fn test_o_piece_falls_to_floor() {
        let mut session = GameSession::new(Difficulty::Medium, 1);
        session.set_active(Piece::new(PieceKind::O, 0, 4, 0));

        // The O grid fills rows 0..=1, so it rests with its origin on row 18.
        for i in 0..(ROWS - 2) {
            assert!(session.move_piece(0, 1), "move {} should succeed", i);
        }
        assert_eq!(session.active().unwrap().y, (ROWS - 2) as i8);
        assert!(!session.move_piece(0, 1));
        assert_eq!(session.active().unwrap().y, (ROWS - 2) as i8);
    }

    #[test]
    fn test_horizontal_i_fills_gap_and_scores() {
        let mut session = GameSession::new(Difficulty::Medium, 1);
        fill_row_except(session.board_mut(), 19, &[3, 4, 5, 6]);
        session.set_active(Piece::new(PieceKind::I, 0, 3, 0));

        assert!(session.hard_drop());

        assert_eq!(session.last_lines_cleared(), 1);
        assert_eq!(session.lines(), 1);
        assert_eq!(session.score(), 100);
        assert_eq!(session.board().filled_count(), 0);
    }

    #[test]
    fn test_vertical_i_fills_single_column_gap() {
        let mut session = GameSession::new(Difficulty::Medium, 1);
        fill_row_except(session.board_mut(), 19, &[5]);
        // Rotation 1 occupies grid column 2 => board column 5 at x = 3.
        session.set_active(Piece::new(PieceKind::I, 1, 3, 0));

        assert!(session.hard_drop());

        assert_eq!(session.last_lines_cleared(), 1);
        assert_eq!(session.score(), 100);
        // The three upper I cells shifted down one row.
        assert_eq!(session.board().filled_count(), 3);
        for y in 17..ROWS {
            assert_eq!(session.board().get(5, y), Some(PieceKind::I.id()));
        }
    }

    #[test]
    fn test_two_lines_score_once_without_bonus() {
        let mut session = GameSession::new(Difficulty::Medium, 1);
        fill_row_except(session.board_mut(), 18, &[0, 1]);
        fill_row_except(session.board_mut(), 19, &[0, 1]);
        // O at x = -1 covers columns 0..=1.
        session.set_active(Piece::new(PieceKind::O, 0, -1, 0));

        assert!(session.hard_drop());
        assert_eq!(session.last_lines_cleared(), 2);
        assert_eq!(session.score(), 200);
        assert_eq!(session.pieces_locked(), 1);
    }

    #[test]
    fn test_gravity_locks_and_spawns() {
        let mut session = GameSession::new(Difficulty::Medium, 1);
        session.set_active(Piece::new(PieceKind::O, 0, 4, 18));

        assert!(!session.drop_piece());
        assert_eq!(session.pieces_locked(), 1);
        assert_eq!(session.board().get(5, 19), Some(PieceKind::O.id()));
        let next = session.active().unwrap();
        assert_eq!((next.x, next.y, next.rotation), (3, 0, 0));
        assert_eq!(session.lifecycle(), Lifecycle::Running);
    }

    #[test]
    fn test_soft_drop_never_locks() {
        let mut session = GameSession::new(Difficulty::Medium, 1);
        session.set_active(Piece::new(PieceKind::O, 0, 4, 18));

        assert!(!session.handle_intent(Intent::SoftDrop));
        assert_eq!(session.pieces_locked(), 0);
        assert_eq!(session.active().unwrap().y, 18);
    }

    #[test]
    fn test_spawn_collision_ends_game() {
        let mut session = GameSession::new(Difficulty::Medium, 1);
        // Occupy every spawn cell without completing a row.
        for y in 0..2 {
            for x in 3..7 {
                session.board_mut().set(x, y, 6);
            }
        }
        session.set_active(Piece::new(PieceKind::O, 0, -1, 10));

        assert!(session.hard_drop());
        assert_eq!(session.lifecycle(), Lifecycle::Over);
        assert!(session.active().is_some());
    }

    #[test]
    fn test_prepared_board_blocking_spawn_starts_over() {
        let mut board = Board::new();
        for x in 3..7 {
            board.set(x, 0, 2);
            board.set(x, 1, 2);
        }
        let session = GameSession::builder(Difficulty::Easy).board(board).build();
        assert!(session.is_over());
    }

    #[test]
    fn test_input_ignored_when_over() {
        let mut session = GameSession::new(Difficulty::Medium, 1);
        for y in 0..2 {
            for x in 3..7 {
                session.board_mut().set(x, y, 6);
            }
        }
        session.set_active(Piece::new(PieceKind::O, 0, -1, 10));
        session.hard_drop();
        assert!(session.is_over());

        let before = session.snapshot();
        for intent in [
            Intent::MoveLeft,
            Intent::MoveRight,
            Intent::SoftDrop,
            Intent::Rotate,
            Intent::TogglePause,
            Intent::HardDrop,
        ] {
            assert!(!session.handle_intent(intent));
        }
        assert!(!session.tick(10_000));
        assert!(!session.frame(10_000));
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_rotation_against_left_wall_never_collides() {
        let mut session = GameSession::new(Difficulty::Medium, 1);

        // Kick succeeds: T rotation 1 flush left rotates by kicking right.
        session.set_active(Piece::new(PieceKind::T, 1, -1, 5));
        assert!(session.rotate());
        let piece = session.active().unwrap();
        assert_eq!((piece.rotation, piece.x), (2, 0));
        assert!(piece.fits(session.board()));

        // Kick fails: vertical I in column 0 boxed in by a settled column.
        for y in 0..ROWS {
            session.board_mut().set(1, y, 3);
        }
        let boxed = Piece::new(PieceKind::I, 1, -2, 5);
        session.set_active(boxed);
        assert!(!session.rotate());
        assert_eq!(session.active(), Some(boxed));
        assert!(boxed.fits(session.board()));
    }

    #[test]
    fn test_o_piece_rotation_is_identity() {
        let mut session = GameSession::new(Difficulty::Medium, 1);
        let o = Piece::new(PieceKind::O, 0, 4, 4);
        session.set_active(o);
        assert!(session.rotate());
        assert_eq!(session.active(), Some(o));
    }

    #[test]
    fn test_tick_drops_after_interval() {
        let mut session = GameSession::new(Difficulty::Expert, 1);
        let y0 = session.active().unwrap().y;

        assert!(!session.tick(300));
        assert_eq!(session.active().unwrap().y, y0);
        assert!(session.tick(1));
        assert_eq!(session.active().unwrap().y, y0 + 1);
        assert_eq!(session.drop_accumulator_ms(), 0);
    }

    #[test]
    fn test_pause_freezes_accumulator_and_piece() {
        let mut session = GameSession::new(Difficulty::Medium, 1);
        session.tick(400);
        assert!(session.handle_intent(Intent::TogglePause));
        assert!(session.is_paused());

        let before = session.snapshot();
        for _ in 0..100 {
            assert!(!session.tick(1_000));
            assert!(!session.handle_intent(Intent::MoveLeft));
            assert!(!session.handle_intent(Intent::Rotate));
        }
        assert_eq!(session.snapshot(), before);
        assert_eq!(session.drop_accumulator_ms(), 400);
    }

    #[test]
    fn test_resume_does_not_burst() {
        let mut session = GameSession::new(Difficulty::Medium, 1);
        session.frame(0);
        session.frame(500);
        assert_eq!(session.drop_accumulator_ms(), 500);

        session.pause();
        session.frame(60_000);
        assert!(session.resume());

        // First frame after resume only re-establishes the clock.
        let y = session.active().unwrap().y;
        assert!(!session.frame(60_016));
        assert!(!session.frame(60_032));
        assert_eq!(session.drop_accumulator_ms(), 516);
        assert_eq!(session.active().unwrap().y, y);
    }

    #[test]
    fn test_resume_at_uses_given_instant() {
        let mut session = GameSession::new(Difficulty::Medium, 1);
        session.frame(0);
        session.pause();
        assert!(session.resume_at(90_000));
        session.frame(90_100);
        assert_eq!(session.drop_accumulator_ms(), 100);
    }

    #[test]
    fn test_high_score_saved_on_game_over() {
        let store = Rc::new(RefCell::new(MemoryHighScore::new(50)));
        let mut session = GameSession::builder(Difficulty::Medium)
            .high_scores(Rc::clone(&store))
            .build();
        assert_eq!(session.high_score(), 50);

        fill_row_except(session.board_mut(), 19, &[0, 1]);
        for y in 0..2 {
            for x in 3..7 {
                session.board_mut().set(x, y, 6);
            }
        }
        session.set_active(Piece::new(PieceKind::O, 0, -1, 10));
        session.hard_drop();

        assert!(session.is_over());
        assert_eq!(session.score(), 100);
        assert_eq!(session.high_score(), 100);
        assert_eq!(store.borrow().load_high_score(), 100);
    }

    #[test]
    fn test_high_score_not_lowered() {
        let store = Rc::new(RefCell::new(MemoryHighScore::new(5_000)));
        let mut session = GameSession::builder(Difficulty::Medium)
            .high_scores(Rc::clone(&store))
            .build();
        while !session.is_over() {
            session.hard_drop();
        }
        assert_eq!(session.high_score(), 5_000);
        assert_eq!(store.borrow().load_high_score(), 5_000);
    }

    #[test]
    fn test_audio_cues() {
        let cues: Rc<RefCell<Vec<AudioCue>>> = Rc::new(RefCell::new(Vec::new()));
        let mut session = GameSession::builder(Difficulty::Medium)
            .audio(Rc::clone(&cues))
            .build();

        session.set_active(Piece::new(PieceKind::T, 0, 3, 5));
        session.handle_intent(Intent::MoveLeft);
        session.handle_intent(Intent::Rotate);
        session.handle_intent(Intent::TogglePause);
        session.handle_intent(Intent::MoveLeft); // ignored while paused
        session.handle_intent(Intent::TogglePause);

        assert_eq!(
            *cues.borrow(),
            vec![AudioCue::Move, AudioCue::Rotate, AudioCue::Pause, AudioCue::Pause]
        );

        // Gravity moves are silent.
        cues.borrow_mut().clear();
        session.drop_piece();
        assert!(cues.borrow().is_empty());

        fill_row_except(session.board_mut(), 19, &[3, 4, 5, 6]);
        session.set_active(Piece::new(PieceKind::I, 0, 3, 0));
        session.hard_drop();
        assert_eq!(*cues.borrow(), vec![AudioCue::LineClear]);
    }

    #[test]
    fn test_restart_resets_game_but_keeps_high_score() {
        let mut session = GameSession::new(Difficulty::Hard, 9);
        fill_row_except(session.board_mut(), 19, &[3, 4, 5, 6]);
        session.set_active(Piece::new(PieceKind::I, 0, 3, 0));
        session.hard_drop();
        while !session.is_over() {
            session.hard_drop();
        }
        let high = session.high_score();
        assert!(high >= 100);

        session.restart();

        assert_eq!(session.lifecycle(), Lifecycle::Running);
        assert_eq!(session.score(), 0);
        assert_eq!(session.lines(), 0);
        assert_eq!(session.pieces_locked(), 0);
        assert_eq!(session.board().filled_count(), 0);
        assert_eq!(session.high_score(), high);
        assert_eq!(session.difficulty(), Difficulty::Hard);
        assert_eq!(session.episode_id(), 1);
        assert_eq!(session.drop_accumulator_ms(), 0);
    }

    #[test]
    fn test_score_is_monotonic_over_random_play() {
        let mut session = GameSession::new(Difficulty::Expert, 4242);
        let mut last_score = 0;
        let mut step = 0u32;
        while !session.is_over() && step < 5_000 {
            let intent = match step % 5 {
                0 => Intent::MoveLeft,
                1 => Intent::Rotate,
                2 => Intent::MoveRight,
                3 => Intent::SoftDrop,
                _ => Intent::MoveRight,
            };
            session.handle_intent(intent);
            session.tick(17);

            let score = session.score();
            assert!(score >= last_score);
            assert_eq!(score, session.lines() * POINTS_PER_LINE);
            last_score = score;
            step += 1;
        }
    }
}
