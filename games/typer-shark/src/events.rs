//! Event and sound codes shared with the browser layer.

// Game event kinds (Rust → JS)
/// a = enemy id, b = lane
pub const EVENT_SPAWN: f32 = 1.0;
/// a = enemy id, b = points gained, c = combo after the defeat
pub const EVENT_DEFEAT: f32 = 2.0;
/// a = enemy id, b = lives left
pub const EVENT_ESCAPE: f32 = 3.0;
/// a = enemy id
pub const EVENT_MISMATCH: f32 = 4.0;
/// a = new level
pub const EVENT_LEVEL_UP: f32 = 5.0;
/// a = phase code (see `GamePhase::code`)
pub const EVENT_PHASE: f32 = 6.0;

// Sound ids
pub const SOUND_KEY_HIT: u32 = 1;
pub const SOUND_DEFEAT: u32 = 2;
pub const SOUND_MISMATCH: u32 = 3;
pub const SOUND_ESCAPE: u32 = 4;
pub const SOUND_LEVEL_UP: u32 = 5;

// Custom event kinds (JS overlay buttons → Rust)
/// Start or restart a run.
pub const CUSTOM_START: u32 = 1;
/// Resume from the pause screen.
pub const CUSTOM_RESUME: u32 = 2;
/// End the run from the pause screen.
pub const CUSTOM_FINISH: u32 = 3;
