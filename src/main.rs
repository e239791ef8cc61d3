//! Gapwing entry point
//!
//! Runs a headless demo session: a small autopilot feeds the simulation,
//! draw commands are composed every frame, and the run's score goes through
//! the same high-score persistence the real frontend uses. Plugging in a
//! windowed frontend means replacing the loop body's input and output ends.

use log::info;

use gapwing::assets::AssetCatalog;
use gapwing::consts::*;
use gapwing::input::{self, InputEvent};
use gapwing::render::{ConstTextures, SpriteId, Textures, compose};
use gapwing::sim::GamePhase;
use gapwing::{GameSession, Tuning};

const DEMO_DT: f32 = 1.0 / 60.0;
const DEMO_FRAMES: u32 = 60 * 30;

fn main() {
    env_logger::init();

    let seed = std::env::var("GAPWING_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xF1A9);
    let tuning = Tuning::load("tuning.json");
    let mut session = GameSession::new("highscore.txt", tuning, seed);

    let textures = load_sprite_sizes();
    info!("demo run, seed {seed}, {} sprites", textures.len());

    let mut audio = gapwing::audio::NullSink;
    let mut runs = 0u32;
    for frame in 0..DEMO_FRAMES {
        let mut events = Vec::new();
        if session.state.phase == GamePhase::GameOver {
            runs += 1;
            events.push(InputEvent::Action);
        } else if autopilot_wants_flap(&session) {
            events.push(InputEvent::Action);
        }

        let input = input::collect(events);
        session.frame(&input, DEMO_DT, &mut audio);

        let commands = compose(&session.state, &ConstTextures);
        if let Some(label) = session.hud_label_if_changed() {
            info!("frame {frame}: HUD label now \"{label}\"");
        }
        debug_assert!(!commands.is_empty());
    }

    info!(
        "demo done: {runs} runs, best {}",
        session.state.high_score
    );
}

/// Flap whenever the player sinks below the target line: the center of the
/// nearest gap ahead, or the screen center when no pipes are up yet
fn autopilot_wants_flap(session: &GameSession) -> bool {
    let player = &session.state.player;
    let target = session
        .state
        .pipes
        .iter()
        .filter(|p| !p.destroyed && p.right() > player.pos.x)
        .min_by(|a, b| a.x.total_cmp(&b.x))
        .map(|p| (p.upper_y + PIPE_H + p.lower_y) / 2.0)
        .unwrap_or(SCREEN_H / 2.0);
    player.pos.y + PLAYER_H > target
}

/// Register every sprite the composer can emit, with its native size
fn load_sprite_sizes() -> AssetCatalog<(f32, f32)> {
    let mut catalog = AssetCatalog::new();
    let mut sprites = vec![
        SpriteId::Background,
        SpriteId::Ground,
        SpriteId::PipeTop,
        SpriteId::PipeBottom,
        SpriteId::HudLabel,
    ];
    for frame in 0..PLAYER_FRAMES {
        sprites.push(SpriteId::Player(frame));
    }
    for digit in 0..10 {
        sprites.push(SpriteId::Digit(digit));
    }

    for sprite in sprites {
        let size = ConstTextures.size(sprite);
        catalog
            .insert(&sprite.asset_name(), size)
            .unwrap_or_else(|err| {
                log::error!("{err}");
                std::process::exit(1);
            });
    }
    catalog
}
