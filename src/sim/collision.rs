//! AABB collision checks
//!
//! Rectangle-only: player vs the fixed ground strip, player vs any active
//! pipe member. No rotation-aware collision anywhere.

use crate::Rect;
use crate::consts::*;

use super::state::{PipePair, Player};

/// Fixed ground collision rectangle spanning the screen width
pub const GROUND_RECT: Rect = Rect::new(0.0, GROUND_Y, SCREEN_W, GROUND_H);

/// True if the player overlaps the ground or any non-destroyed pipe member
pub fn player_collides(player: &Player, pipes: &[PipePair]) -> bool {
    let bounds = player.bounds();

    if bounds.overlaps(&GROUND_RECT) {
        return true;
    }

    pipes.iter().filter(|p| !p.destroyed).any(|pair| {
        bounds.overlaps(&pair.upper_bounds()) || bounds.overlaps(&pair.lower_bounds())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair_at(x: f32, upper_y: f32) -> PipePair {
        PipePair {
            x,
            upper_y,
            lower_y: upper_y + PIPE_H + PIPE_GAP,
            passed: false,
            destroyed: false,
        }
    }

    #[test]
    fn ground_overlap_hits() {
        let mut player = Player::new();
        player.pos.y = GROUND_Y - PLAYER_H / 2.0;
        assert!(player_collides(&player, &[]));
    }

    #[test]
    fn center_player_clear_of_ground() {
        let player = Player::new();
        assert!(!player_collides(&player, &[]));
    }

    #[test]
    fn pipe_overlap_hits_either_member() {
        let player = Player::new();
        // Pair straddling the player's x; upper pipe reaches down into them
        let mut pair = pair_at(player.pos.x, -20.0);
        pair.upper_y = player.pos.y - PIPE_H + 5.0;
        pair.lower_y = pair.upper_y + PIPE_H + PIPE_GAP;
        assert!(player_collides(&player, &[pair]));

        // Lower member raised into the player
        let mut pair = pair_at(player.pos.x, -130.0);
        pair.lower_y = player.pos.y + 5.0;
        assert!(player_collides(&player, &[pair]));
    }

    #[test]
    fn destroyed_pipes_are_ignored() {
        let player = Player::new();
        let mut pair = pair_at(player.pos.x, player.pos.y - PIPE_H + 5.0);
        pair.destroyed = true;
        assert!(!player_collides(&player, &[pair]));
    }

    #[test]
    fn player_in_gap_is_clear() {
        let mut player = Player::new();
        let pair = pair_at(player.pos.x, -100.0);
        // Put the player inside the vertical gap
        player.pos.y = pair.upper_y + PIPE_H + (PIPE_GAP - PLAYER_H) / 2.0;
        assert!(!player_collides(&player, &[pair]));
    }
}
