//! Terminal runner (default binary).
//!
//! Drives one `GameSession` from a ~60 FPS frame loop: crossterm input in,
//! framebuffer out, bell for audio, and the configured score store for the
//! high score and leaderboard.

use std::cell::RefCell;
use std::env;
use std::rc::Rc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tetris_lite::audio::{AudioSettings, SoundManager};
use tetris_lite::core::GameSession;
use tetris_lite::input::{handle_key_event, is_mute_toggle, is_restart, should_quit, GestureTracker};
use tetris_lite::store::{ScoreBackend, ScoreRecord, ScoreStore, StoreConfig, DEFAULT_PLAYER_NAME};
use tetris_lite::term::{
    BellOutput, FrameBuffer, GameView, Hud, LeaderRow, RenderThrottle, TerminalRenderer, Viewport,
};
use tetris_lite::types::Difficulty;

const FRAME_MS: u64 = 16;
const IDLE_REDRAW_MS: u64 = 250;

/// Game settings read from the environment.
#[derive(Debug, Clone)]
struct GameConfig {
    difficulty: Difficulty,
    seed: u32,
    player_name: String,
}

impl GameConfig {
    fn from_env() -> Self {
        let difficulty = match (env::var("TETRIS_DIFFICULTY"), env::var("TETRIS_QUERY")) {
            (Ok(name), _) => Difficulty::from_str(&name),
            (Err(_), Ok(query)) => Difficulty::from_query(&query),
            _ => Difficulty::default(),
        };

        let seed = env::var("TETRIS_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let player_name = env::var("TETRIS_PLAYER_NAME").unwrap_or_else(|_| DEFAULT_PLAYER_NAME.to_string());

        Self {
            difficulty,
            seed,
            player_name,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

type SharedStore = Rc<RefCell<ScoreBackend>>;
type SharedSound = Rc<RefCell<SoundManager<BellOutput>>>;

fn main() -> Result<()> {
    env_logger::init();

    let config = GameConfig::from_env();
    let store_config = StoreConfig::from_env();
    info!(
        "starting: difficulty={} seed={} remote_scores={}",
        config.difficulty.as_str(),
        config.seed,
        store_config.uses_remote()
    );

    let store: SharedStore = Rc::new(RefCell::new(store_config.open()?));
    let sound: SharedSound = Rc::new(RefCell::new(SoundManager::with_settings(
        BellOutput::stdout(),
        AudioSettings::from_env(),
    )));

    let mut session = GameSession::builder(config.difficulty)
        .seed(config.seed)
        .audio(Rc::clone(&sound))
        .high_scores(Rc::clone(&store))
        .build();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &config, &store, &sound);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn leader_rows(scores: &[ScoreRecord]) -> Vec<LeaderRow> {
    scores
        .iter()
        .map(|r| LeaderRow {
            name: r.name.clone(),
            score: r.score,
        })
        .collect()
}

fn run(
    term: &mut TerminalRenderer,
    session: &mut GameSession,
    config: &GameConfig,
    store: &SharedStore,
    sound: &SharedSound,
) -> Result<()> {
    let clock = Instant::now();
    let frame = Duration::from_millis(FRAME_MS);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(IDLE_REDRAW_MS);
    let mut gestures = GestureTracker::default();

    let mut leaderboard = leader_rows(&store.borrow().top_scores());
    let mut score_recorded = false;

    loop {
        let frame_start = Instant::now();
        let now_ms = clock.elapsed().as_millis() as u64;
        session.frame(now_ms);

        let snap = session.snapshot();
        if throttle.should_render(now_ms, &snap) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let hud = Hud {
                muted: sound.borrow().is_muted(),
                leaderboard: &leaderboard,
            };
            view.render_into(session, &hud, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Submit after the game-over screen is up; a slow server only delays
        // the leaderboard refresh.
        if session.is_over() && !score_recorded {
            score_recorded = true;
            if session.score() > 0 {
                let saved = store
                    .borrow_mut()
                    .save_score(&config.player_name, session.score(), session.difficulty());
                info!("final score {} saved={}", session.score(), saved);
            }
            leaderboard = leader_rows(&store.borrow().top_scores());
            throttle.invalidate();
        }

        // Input until the next frame.
        let mut timeout = frame.saturating_sub(frame_start.elapsed());
        while event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_restart(key) {
                        session.restart();
                        score_recorded = false;
                    } else if is_mute_toggle(key) {
                        sound.borrow_mut().toggle_mute();
                        throttle.invalidate();
                    } else if let Some(intent) = handle_key_event(key) {
                        session.handle_intent(intent);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(intent) = gestures.handle_mouse_event(mouse) {
                        session.handle_intent(intent);
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
            timeout = Duration::ZERO;
        }
    }
}
