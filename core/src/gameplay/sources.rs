//! Time and randomness used by the cast hooks

use rand::Rng;

/// Wall clock in whole Unix seconds
pub trait Clock: Send + Sync {
    fn now_unix(&self) -> u64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix(&self) -> u64 {
        u64::try_from(chrono::Utc::now().timestamp()).unwrap_or_default()
    }
}

/// Clock stuck at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_unix(&self) -> u64 {
        self.0
    }
}

/// Uniform roll in `[0, 1)` for proc checks
pub trait ProcRoll: Send + Sync {
    fn roll(&self) -> f64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRoll;

impl ProcRoll for ThreadRoll {
    fn roll(&self) -> f64 {
        rand::thread_rng().gen_range(0.0..1.0)
    }
}

/// Always rolls the same value
#[derive(Debug, Clone, Copy)]
pub struct FixedRoll(pub f64);

impl ProcRoll for FixedRoll {
    fn roll(&self) -> f64 {
        self.0
    }
}
