//! Integration tests for the game session through the public API

use std::cell::RefCell;
use std::rc::Rc;

use tetris_lite::audio::{RecordingOutput, SoundManager};
use tetris_lite::core::{Board, GameSession, HighScoreStore, MemoryHighScore, Piece, Renderer};
use tetris_lite::types::{AudioCue, Difficulty, Intent, Lifecycle, COLS, POINTS_PER_LINE};

/// Renderer that remembers what it was asked to draw.
#[derive(Default)]
struct RecordingRenderer {
    boards: usize,
    pieces: Vec<Piece>,
}

impl Renderer for RecordingRenderer {
    fn draw_board(&mut self, _board: &Board) {
        self.boards += 1;
    }

    fn draw_piece(&mut self, piece: &Piece) {
        self.pieces.push(*piece);
    }
}

fn blocked_spawn_board() -> Board {
    let mut board = Board::new();
    for x in 3..7 {
        board.set(x, 0, 1);
        board.set(x, 1, 1);
    }
    board
}

#[test]
fn test_game_lifecycle() {
    let mut session = GameSession::new(Difficulty::Medium, 12345);
    assert_eq!(session.lifecycle(), Lifecycle::Running);
    assert!(session.active().is_some());

    assert!(session.handle_intent(Intent::TogglePause));
    assert_eq!(session.lifecycle(), Lifecycle::Paused);
    assert!(session.handle_intent(Intent::TogglePause));
    assert_eq!(session.lifecycle(), Lifecycle::Running);

    while !session.is_over() {
        session.handle_intent(Intent::HardDrop);
    }
    assert_eq!(session.lifecycle(), Lifecycle::Over);

    session.restart();
    assert_eq!(session.lifecycle(), Lifecycle::Running);
    assert_eq!(session.pieces_locked(), 0);
}

#[test]
fn test_blocked_spawn_starts_over() {
    let session = GameSession::builder(Difficulty::Medium)
        .board(blocked_spawn_board())
        .build();
    assert!(session.is_over());
    assert!(session.snapshot().game_over());
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameSession::new(Difficulty::Hard, 777);
    let mut b = GameSession::new(Difficulty::Hard, 777);

    for step in 0..400u32 {
        let intent = match step % 4 {
            0 => Intent::MoveLeft,
            1 => Intent::Rotate,
            2 => Intent::MoveRight,
            _ => Intent::HardDrop,
        };
        a.handle_intent(intent);
        b.handle_intent(intent);
        a.tick(50);
        b.tick(50);
        assert_eq!(a.snapshot(), b.snapshot());
    }
}

#[test]
fn test_sessions_are_independent() {
    let mut a = GameSession::new(Difficulty::Easy, 1);
    let b = GameSession::new(Difficulty::Easy, 1);
    let before = b.snapshot();

    a.handle_intent(Intent::HardDrop);
    a.handle_intent(Intent::TogglePause);

    assert_eq!(b.snapshot(), before);
    assert_ne!(a.snapshot(), before);
}

#[test]
fn test_gravity_follows_difficulty_interval() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard, Difficulty::Expert] {
        let mut session = GameSession::new(difficulty, 5);
        let y0 = session.active().unwrap().y;
        let interval = difficulty.drop_interval_ms();

        assert!(!session.tick(interval));
        assert_eq!(session.active().unwrap().y, y0);
        assert!(session.tick(1));
        assert_eq!(session.active().unwrap().y, y0 + 1);
    }
}

#[test]
fn test_frame_clock_drives_gravity() {
    let mut session = GameSession::new(Difficulty::Expert, 5);
    let y0 = session.active().unwrap().y;

    let mut now = 1_000_000u64;
    let mut drops = 0;
    for _ in 0..63 {
        if session.frame(now) {
            drops += 1;
        }
        now += 16;
    }
    // 62 deltas of 16ms = 992ms; a drop fires after each 304ms of accumulation.
    assert_eq!(drops, 3);
    assert_eq!(session.active().unwrap().y, y0 + 3);
}

#[test]
fn test_soft_drop_and_hard_drop() {
    let mut session = GameSession::new(Difficulty::Medium, 99);
    let y0 = session.active().unwrap().y;

    assert!(session.handle_intent(Intent::SoftDrop));
    assert_eq!(session.active().unwrap().y, y0 + 1);
    assert_eq!(session.score(), 0);

    assert!(session.handle_intent(Intent::HardDrop));
    assert_eq!(session.pieces_locked(), 1);
    // Hard drop awards nothing by itself.
    assert_eq!(session.score(), 0);
}

#[test]
fn test_left_wall_stops_movement() {
    let mut session = GameSession::new(Difficulty::Medium, 31);
    let mut moves = 0;
    while session.handle_intent(Intent::MoveLeft) {
        moves += 1;
        assert!(moves <= COLS);
    }
    let piece = session.active().unwrap();
    assert!(piece.fits(session.board()));
    assert!(piece.cells().iter().any(|&(x, _)| x == 0));
}

#[test]
fn test_score_tracks_lines() {
    let mut session = GameSession::new(Difficulty::Expert, 2024);
    let mut last = 0;
    for step in 0..3000u32 {
        if session.is_over() {
            break;
        }
        let intent = match step % 6 {
            0 | 1 => Intent::MoveLeft,
            2 => Intent::Rotate,
            3 | 4 => Intent::MoveRight,
            _ => Intent::HardDrop,
        };
        session.handle_intent(intent);
        assert!(session.score() >= last);
        assert_eq!(session.score(), session.lines() * POINTS_PER_LINE);
        last = session.score();
    }
}

#[test]
fn test_render_hands_board_and_piece_to_renderer() {
    let session = GameSession::new(Difficulty::Medium, 4);
    let mut renderer = RecordingRenderer::default();
    session.render(&mut renderer);

    assert_eq!(renderer.boards, 1);
    assert_eq!(renderer.pieces, vec![session.active().unwrap()]);
}

#[test]
fn test_sound_manager_as_audio_sink() {
    let sound = Rc::new(RefCell::new(SoundManager::new(RecordingOutput::default())));
    let mut session = GameSession::builder(Difficulty::Medium)
        .seed(11)
        .audio(Rc::clone(&sound))
        .build();

    session.handle_intent(Intent::TogglePause);
    assert_eq!(sound.borrow().output().tones.len(), 1);
    assert_eq!(sound.borrow().output().tones[0].frequency_hz, 200.0);

    sound.borrow_mut().toggle_mute();
    session.handle_intent(Intent::TogglePause);
    assert_eq!(sound.borrow().output().tones.len(), 1);
}

#[test]
fn test_cue_order_for_a_short_game() {
    let cues: Rc<RefCell<Vec<AudioCue>>> = Rc::new(RefCell::new(Vec::new()));
    let mut session = GameSession::builder(Difficulty::Medium)
        .seed(3)
        .audio(Rc::clone(&cues))
        .build();

    while !session.is_over() {
        session.handle_intent(Intent::HardDrop);
    }
    assert_eq!(cues.borrow().last(), Some(&AudioCue::GameOver));
    assert_eq!(
        cues.borrow().iter().filter(|&&c| c == AudioCue::GameOver).count(),
        1
    );
}

#[test]
fn test_high_score_survives_restart() {
    let store = Rc::new(RefCell::new(MemoryHighScore::new(500)));
    let mut session = GameSession::builder(Difficulty::Medium)
        .seed(8)
        .high_scores(Rc::clone(&store))
        .build();
    assert_eq!(session.high_score(), 500);

    while !session.is_over() {
        session.handle_intent(Intent::HardDrop);
    }
    // A lower final score leaves the stored best alone.
    assert!(session.score() < 500);
    assert_eq!(store.borrow().load_high_score(), 500);

    store.borrow_mut().save_high_score(900);
    session.restart();
    assert_eq!(session.score(), 0);
    assert_eq!(session.high_score(), 900);
    assert_eq!(session.episode_id(), 1);
}
