//! Render composer
//!
//! Consumes `GameState`, produces an ordered list of draw commands: a sprite
//! handle, a destination rectangle, and an optional rotation. Pixel-level
//! drawing, texture upload, and the present/flip belong to the frontend
//! behind the `Textures` capability.

use crate::Rect;
use crate::consts::*;
use crate::sim::{GamePhase, GameState};

/// Opaque handle to a loaded sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Background,
    Ground,
    /// Upper pipe, mouth pointing down
    PipeTop,
    /// Lower pipe, mouth pointing up
    PipeBottom,
    /// Player with wing frame index
    Player(u8),
    /// HUD digit 0-9
    Digit(u8),
    /// The "High Score: N" text, re-rendered by the frontend when it changes
    HudLabel,
}

impl SpriteId {
    /// Logical asset name, the key into the frontend's texture table
    pub fn asset_name(&self) -> String {
        match self {
            SpriteId::Background => "background".into(),
            SpriteId::Ground => "ground".into(),
            SpriteId::PipeTop => "pipe_top".into(),
            SpriteId::PipeBottom => "pipe_bottom".into(),
            SpriteId::Player(frame) => format!("bird_{frame}"),
            SpriteId::Digit(d) => format!("digit_{d}"),
            SpriteId::HudLabel => "hud_label".into(),
        }
    }
}

/// One blit: draw `sprite` into `dest`, rotated by `angle_deg`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub sprite: SpriteId,
    pub dest: Rect,
    pub angle_deg: f32,
}

impl DrawCommand {
    fn flat(sprite: SpriteId, dest: Rect) -> Self {
        Self {
            sprite,
            dest,
            angle_deg: 0.0,
        }
    }
}

/// Native-size queries for loaded sprites
pub trait Textures {
    fn size(&self, sprite: SpriteId) -> (f32, f32);
}

/// Sizes straight from the layout constants (tests, headless runs)
#[derive(Debug, Default)]
pub struct ConstTextures;

impl Textures for ConstTextures {
    fn size(&self, sprite: SpriteId) -> (f32, f32) {
        match sprite {
            SpriteId::Background => (SCREEN_W, SCREEN_H),
            SpriteId::Ground => (GROUND_TILE_W, GROUND_H),
            SpriteId::PipeTop | SpriteId::PipeBottom => (PIPE_W, PIPE_H),
            SpriteId::Player(_) => (PLAYER_W, PLAYER_H),
            SpriteId::Digit(_) => (DIGIT_W, DIGIT_H),
            SpriteId::HudLabel => (200.0, 32.0),
        }
    }
}

/// Compose one frame back-to-front: background, pipes, ground, HUD, player
pub fn compose(state: &GameState, textures: &impl Textures) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(8 + state.pipes.len() * 2 + GROUND_TILE_COUNT);

    commands.push(DrawCommand::flat(
        SpriteId::Background,
        Rect::new(0.0, 0.0, SCREEN_W, SCREEN_H),
    ));

    for pair in state.pipes.iter().filter(|p| !p.destroyed) {
        commands.push(DrawCommand::flat(SpriteId::PipeTop, pair.upper_bounds()));
        commands.push(DrawCommand::flat(SpriteId::PipeBottom, pair.lower_bounds()));
    }

    for tile in &state.ground {
        commands.push(DrawCommand::flat(SpriteId::Ground, tile.bounds()));
    }

    push_score_digits(&mut commands, state.score);

    if state.phase == GamePhase::GameOver {
        let (w, h) = textures.size(SpriteId::HudLabel);
        commands.push(DrawCommand::flat(
            SpriteId::HudLabel,
            Rect::new(SCREEN_W / 2.0 - w / 2.0, SCREEN_H / 2.0 + 24.0, w, h),
        ));
    }

    commands.push(DrawCommand {
        sprite: SpriteId::Player(state.player.frame()),
        dest: state.player.bounds(),
        angle_deg: state.player.rotation,
    });

    commands
}

/// Current score as digit sprites, centered at the top of the screen
fn push_score_digits(commands: &mut Vec<DrawCommand>, score: u32) {
    let text = score.to_string();
    let total_w = text.len() as f32 * DIGIT_W;
    let mut x = SCREEN_W / 2.0 - total_w / 2.0;
    for ch in text.chars() {
        let digit = ch.to_digit(10).unwrap_or(0) as u8;
        commands.push(DrawCommand::flat(
            SpriteId::Digit(digit),
            Rect::new(x, 16.0, DIGIT_W, DIGIT_H),
        ));
        x += DIGIT_W;
    }
}
