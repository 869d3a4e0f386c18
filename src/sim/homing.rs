//! Proportional-pursuit targeting
//!
//! Two independent behaviors, both velocity-from-displacement with no
//! acceleration or inertia:
//! - the hazard re-targets the player every homing tick, which produces an
//!   exponential approach toward the player's current position;
//! - projectiles sample the player exactly once at spawn and fly straight
//!   with that fixed velocity, with a deliberately asymmetric gain per axis.

use glam::Vec2;

use crate::consts::{HAZARD_PULL, PROJECTILE_PULL_X, PROJECTILE_PULL_Y};

/// Hazard displacement for one homing tick.
///
/// The horizontal gap to the player, scaled by the pursuit gain, is applied
/// to both axes - inherited behavior, kept as-is.
#[inline]
pub fn hazard_pursuit(player_pos: Vec2, hazard_pos: Vec2) -> Vec2 {
    Vec2::splat((player_pos.x - hazard_pos.x) * HAZARD_PULL)
}

/// Launch velocity for a projectile spawned at the hazard's position.
///
/// Fixed at spawn time; never re-evaluated afterwards.
#[inline]
pub fn projectile_launch(player_pos: Vec2, hazard_pos: Vec2) -> Vec2 {
    Vec2::new(
        (player_pos.x - hazard_pos.x) * PROJECTILE_PULL_X,
        (player_pos.y - hazard_pos.y) * PROJECTILE_PULL_Y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hazard_closes_in_on_the_player() {
        // player at (100,80), hazard at (300,300): one tick lands the hazard
        // at (300 + (100-300)*0.04, 300 + (100-300)*0.04) = (292, 292)
        let step = hazard_pursuit(Vec2::new(100.0, 80.0), Vec2::new(300.0, 300.0));
        let landed = Vec2::new(300.0, 300.0) + step;
        assert!((landed.x - 292.0).abs() < 1e-4);
        assert!((landed.y - 292.0).abs() < 1e-4);
    }

    #[test]
    fn pursuit_is_zero_when_horizontally_aligned() {
        let step = hazard_pursuit(Vec2::new(50.0, 200.0), Vec2::new(50.0, 10.0));
        assert_eq!(step, Vec2::ZERO);
    }

    #[test]
    fn projectile_launch_uses_asymmetric_gains() {
        // spawn at hazard (292,292) targeting player (100,80)
        let vel = projectile_launch(Vec2::new(100.0, 80.0), Vec2::new(292.0, 292.0));
        assert!((vel.x - -9.6).abs() < 1e-4);
        assert!((vel.y - -14.84).abs() < 1e-4);
    }
}
