//! Injectable periodic timers
//!
//! Two interval timers (spawn and update) advanced by caller-supplied frame
//! deltas. A session owns exactly one of each, so re-arming on restart can
//! never leave a stale timer running next to a fresh one.

use crate::consts::{MAX_FIRES_PER_ADVANCE, MAX_FRAME_DT};

/// Which timer fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Spawn,
    Update,
}

/// A cancelable fixed-period timer
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: f32,
    /// Time accumulated since the last fire
    elapsed: f32,
    armed: bool,
}

impl IntervalTimer {
    /// Smallest period accepted; anything below (or non-finite) is raised to it
    pub const MIN_PERIOD: f32 = 1.0e-3;

    /// Create a disarmed timer
    pub fn new(period: f32) -> Self {
        let period = if period.is_finite() && period >= Self::MIN_PERIOD {
            period
        } else {
            Self::MIN_PERIOD
        };
        Self {
            period,
            elapsed: 0.0,
            armed: false,
        }
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Start (or restart) the timer from zero
    pub fn arm(&mut self) {
        self.armed = true;
        self.elapsed = 0.0;
    }

    /// Stop the timer and drop any partial period
    pub fn cancel(&mut self) {
        self.armed = false;
        self.elapsed = 0.0;
    }

    /// Advance by `dt`, pushing `(offset_into_frame, kind)` for every fire
    fn advance(&mut self, dt: f32, kind: TimerKind, fired: &mut Vec<(f32, TimerKind)>) {
        if !self.armed {
            return;
        }

        let mut at = self.period - self.elapsed;
        self.elapsed += dt;

        let mut count = 0;
        while self.elapsed >= self.period && count < MAX_FIRES_PER_ADVANCE {
            fired.push((at, kind));
            at += self.period;
            self.elapsed -= self.period;
            count += 1;
        }

        // Drop backlog beyond the per-advance cap
        if self.elapsed >= self.period {
            log::trace!("{:?} timer dropped backlog of {}s", kind, self.elapsed);
            self.elapsed %= self.period;
        }
    }
}

/// The session's two timers
#[derive(Debug, Clone)]
pub struct Timers {
    pub spawn: IntervalTimer,
    pub update: IntervalTimer,
}

impl Timers {
    /// Create both timers, disarmed
    pub fn new(spawn_period: f32, update_period: f32) -> Self {
        Self {
            spawn: IntervalTimer::new(spawn_period),
            update: IntervalTimer::new(update_period),
        }
    }

    pub fn get(&self, kind: TimerKind) -> &IntervalTimer {
        match kind {
            TimerKind::Spawn => &self.spawn,
            TimerKind::Update => &self.update,
        }
    }

    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.get(kind).is_armed()
    }

    pub fn arm_all(&mut self) {
        self.spawn.arm();
        self.update.arm();
    }

    pub fn cancel_all(&mut self) {
        self.spawn.cancel();
        self.update.cancel();
    }

    /// Advance both timers by one frame
    ///
    /// Returns the fired timers in chronological order. Spawn fires before
    /// update when both land on the same instant. Non-finite or non-positive
    /// deltas fire nothing; large deltas are clamped to `MAX_FRAME_DT`.
    pub fn advance(&mut self, dt: f32) -> Vec<TimerKind> {
        if !dt.is_finite() || dt <= 0.0 {
            return Vec::new();
        }
        let dt = dt.min(MAX_FRAME_DT);

        let mut fired = Vec::new();
        self.spawn.advance(dt, TimerKind::Spawn, &mut fired);
        self.update.advance(dt, TimerKind::Update, &mut fired);

        // Stable sort keeps spawn ahead of update on ties
        fired.sort_by(|a, b| a.0.total_cmp(&b.0));
        fired.into_iter().map(|(_, kind)| kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disarmed_timer_never_fires() {
        let mut timers = Timers::new(2.0, 0.5);
        assert!(timers.advance(0.25).is_empty());
        assert!(timers.advance(0.25).is_empty());
    }

    #[test]
    fn test_update_fires_each_period() {
        let mut timers = Timers::new(2.0, 0.125);
        timers.arm_all();
        assert_eq!(timers.advance(0.125), vec![TimerKind::Update]);
        assert!(timers.advance(0.0625).is_empty());
        assert_eq!(timers.advance(0.0625), vec![TimerKind::Update]);
        assert_eq!(
            timers.advance(0.25),
            vec![TimerKind::Update, TimerKind::Update]
        );
    }

    #[test]
    fn test_chronological_order_with_spawn_first_on_tie() {
        let mut timers = Timers::new(0.25, 0.125);
        timers.arm_all();
        assert_eq!(
            timers.advance(0.25),
            vec![TimerKind::Update, TimerKind::Spawn, TimerKind::Update]
        );
    }

    #[test]
    fn test_cancel_and_rearm_resets_phase() {
        let mut timers = Timers::new(2.0, 0.5);
        timers.arm_all();
        timers.advance(0.25);
        timers.cancel_all();
        assert!(!timers.is_armed(TimerKind::Update));
        assert!(timers.advance(0.25).is_empty());

        timers.arm_all();
        assert!(timers.advance(0.25).is_empty());
        assert_eq!(timers.advance(0.25), vec![TimerKind::Update]);
    }

    #[test]
    fn test_rearm_twice_does_not_double_fire() {
        let mut timers = Timers::new(2.0, 0.125);
        timers.arm_all();
        timers.arm_all();
        assert_eq!(timers.advance(0.125), vec![TimerKind::Update]);
    }

    #[test]
    fn test_bad_deltas_fire_nothing() {
        let mut timers = Timers::new(2.0, 0.125);
        timers.arm_all();
        assert!(timers.advance(f32::NAN).is_empty());
        assert!(timers.advance(f32::INFINITY).is_empty());
        assert!(timers.advance(-1.0).is_empty());
        assert!(timers.advance(0.0).is_empty());
        assert_eq!(timers.advance(0.125), vec![TimerKind::Update]);
    }

    #[test]
    fn test_fire_cap_drops_backlog() {
        let mut timers = Timers::new(2.0, 0.001);
        timers.arm_all();
        let fired = timers.advance(0.25);
        assert_eq!(fired.len(), MAX_FIRES_PER_ADVANCE as usize);
        assert!(timers.update.elapsed < timers.update.period());
    }

    #[test]
    fn test_invalid_period_is_raised() {
        assert_eq!(IntervalTimer::new(0.0).period(), IntervalTimer::MIN_PERIOD);
        assert_eq!(IntervalTimer::new(f32::NAN).period(), IntervalTimer::MIN_PERIOD);
        assert_eq!(IntervalTimer::new(-3.0).period(), IntervalTimer::MIN_PERIOD);
    }
}
