use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};

struct Config {
    step_period_ms: AtomicU64,
    random_fill_percent: AtomicU8,
}

static CONFIG: Config = Config {
    step_period_ms: AtomicU64::new(100),
    random_fill_percent: AtomicU8::new(12),
};

pub struct ConfigSnapshot {
    /// Delay between two steps of a running [`LoopDriver`](crate::LoopDriver).
    pub step_period_ms: u64,
    /// Live probability used by [`Grid::seed_random_default`](crate::Grid::seed_random_default).
    pub random_fill_percent: u8,
}

pub fn get_config() -> ConfigSnapshot {
    ConfigSnapshot {
        step_period_ms: CONFIG.step_period_ms.load(Ordering::Relaxed),
        random_fill_percent: CONFIG.random_fill_percent.load(Ordering::Relaxed),
    }
}

/// Takes effect for drivers created afterwards.
pub fn set_step_period_ms(period_ms: u64) {
    CONFIG.step_period_ms.store(period_ms, Ordering::Relaxed);
}

pub fn set_random_fill_percent(percent: u8) {
    CONFIG
        .random_fill_percent
        .store(percent.min(100), Ordering::Relaxed);
}
