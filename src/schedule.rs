//! Fixed-cadence cooperative timers
//!
//! All activities run on the one browser thread; the scheduler is a set of
//! per-activity accumulators advanced from the animation-frame clock. Fires
//! of different activities that land on the same instant have no defined
//! relative order - callers must not rely on the drain order used here.

use crate::consts::*;

/// Cap on a single frame's wall-clock advance. A long tab-hidden gap is
/// dropped rather than replayed.
const MAX_FRAME_MS: f64 = 250.0;

/// Cap on catch-up fires per activity per advance
const MAX_FIRES: u32 = 16;

/// The five periodic activities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    /// 1000 ms elapsed-time clock
    Clock,
    /// 20 ms hazard re-targeting
    HazardHoming,
    /// 500 ms projectile spawn
    ProjectileVolley,
    /// 10 000 ms pickup spawn
    PickupDrop,
    /// 20 ms master tick: movement, collisions, culling
    GameTick,
}

#[derive(Debug, Clone)]
struct Timer {
    activity: Activity,
    period_ms: f64,
    acc_ms: f64,
}

impl Timer {
    fn new(activity: Activity, period_ms: f64) -> Self {
        Self {
            activity,
            period_ms,
            acc_ms: 0.0,
        }
    }
}

/// One arming of the five periodic activities.
///
/// Disarmed exactly once at the Running->GameOver transition; a restart
/// replaces the scheduler wholesale instead of re-arming the old one.
#[derive(Debug, Clone)]
pub struct Scheduler {
    timers: [Timer; 5],
    armed: bool,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            timers: [
                Timer::new(Activity::Clock, CLOCK_MS),
                Timer::new(Activity::HazardHoming, HAZARD_TICK_MS),
                Timer::new(Activity::ProjectileVolley, PROJECTILE_SPAWN_MS),
                Timer::new(Activity::PickupDrop, PICKUP_SPAWN_MS),
                Timer::new(Activity::GameTick, GAME_TICK_MS),
            ],
            armed: true,
        }
    }

    /// Advance wall-clock time and collect due fires.
    ///
    /// Backlog beyond the catch-up cap is discarded so a stalled tab cannot
    /// trigger an unbounded replay.
    pub fn advance(&mut self, dt_ms: f64, fired: &mut Vec<Activity>) {
        if !self.armed || dt_ms <= 0.0 {
            return;
        }
        let dt_ms = dt_ms.min(MAX_FRAME_MS);
        for timer in &mut self.timers {
            timer.acc_ms += dt_ms;
            let mut fires = (timer.acc_ms / timer.period_ms) as u32;
            timer.acc_ms -= f64::from(fires) * timer.period_ms;
            if fires > MAX_FIRES {
                fires = MAX_FIRES;
            }
            for _ in 0..fires {
                fired.push(timer.activity);
            }
        }
    }

    /// Disarm all five activities together. Idempotent.
    pub fn cancel(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fires_of(scheduler: &mut Scheduler, dt_ms: f64, activity: Activity) -> usize {
        let mut fired = Vec::new();
        scheduler.advance(dt_ms, &mut fired);
        fired.iter().filter(|a| **a == activity).count()
    }

    #[test]
    fn cadences_fire_at_their_periods() {
        let mut s = Scheduler::new();
        let mut fired = Vec::new();
        s.advance(20.0, &mut fired);
        assert!(fired.contains(&Activity::GameTick));
        assert!(fired.contains(&Activity::HazardHoming));
        assert!(!fired.contains(&Activity::Clock));
        assert!(!fired.contains(&Activity::ProjectileVolley));
    }

    #[test]
    fn partial_frames_accumulate() {
        let mut s = Scheduler::new();
        assert_eq!(fires_of(&mut s, 10.0, Activity::GameTick), 0);
        assert_eq!(fires_of(&mut s, 10.0, Activity::GameTick), 1);
    }

    #[test]
    fn one_frame_can_carry_multiple_fires() {
        let mut s = Scheduler::new();
        assert_eq!(fires_of(&mut s, 60.0, Activity::GameTick), 3);
    }

    #[test]
    fn slow_cadences_wait_their_turn() {
        let mut s = Scheduler::new();
        assert_eq!(fires_of(&mut s, 240.0, Activity::ProjectileVolley), 0);
        // 260 ms + 240 ms crosses 500 ms once
        assert_eq!(fires_of(&mut s, 240.0, Activity::ProjectileVolley), 0);
        assert_eq!(fires_of(&mut s, 20.0, Activity::ProjectileVolley), 1);
    }

    #[test]
    fn long_gaps_are_dropped_not_replayed() {
        let mut s = Scheduler::new();
        // a 10 s tab-hidden gap advances at most one clamped frame
        let ticks = fires_of(&mut s, 10_000.0, Activity::GameTick);
        assert!(ticks <= MAX_FIRES as usize);
        assert_eq!(fires_of(&mut s, 10_000.0, Activity::PickupDrop), 0);
    }

    #[test]
    fn cancel_disarms_everything_together() {
        let mut s = Scheduler::new();
        s.cancel();
        assert!(!s.is_armed());
        let mut fired = Vec::new();
        s.advance(5_000.0, &mut fired);
        assert!(fired.is_empty());
        // idempotent
        s.cancel();
        assert!(!s.is_armed());
    }

    #[test]
    fn replacement_scheduler_starts_clean() {
        let mut s = Scheduler::new();
        let mut fired = Vec::new();
        s.advance(19.0, &mut fired);
        s.cancel();

        let mut s = Scheduler::new();
        assert_eq!(fires_of(&mut s, 19.0, Activity::GameTick), 0);
        assert_eq!(fires_of(&mut s, 1.0, Activity::GameTick), 1);
    }
}
