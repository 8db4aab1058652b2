use typer_engine::Rng;

/// Shortest base interval between spawns, in seconds.
const MIN_INTERVAL: f32 = 0.6;
/// Random extra delay added to every interval, in seconds.
const INTERVAL_JITTER: f32 = 0.4;

/// Countdown deciding when the next enemy may spawn.
#[derive(Debug, Clone, Default)]
pub struct SpawnScheduler {
    /// Seconds remaining until the next spawn.
    timer: f32,
}

impl SpawnScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base interval at `level`, before jitter. Faster at higher levels, floored at 0.6s.
    pub fn base_interval(level: u32) -> f32 {
        (1.65 - level.max(1) as f32 * 0.15).max(MIN_INTERVAL)
    }

    /// Count down by `dt`. Returns true when a spawn is due, and re-arms the timer.
    pub fn tick(&mut self, dt: f32, level: u32, rng: &mut Rng) -> bool {
        self.timer -= dt;
        if self.timer > 0.0 {
            return false;
        }
        self.timer = Self::base_interval(level) + rng.range(0.0, INTERVAL_JITTER);
        true
    }

    /// Make the next tick spawn immediately.
    pub fn force_due(&mut self) {
        self.timer = 0.0;
    }

    pub fn remaining(&self) -> f32 {
        self.timer
    }
}
