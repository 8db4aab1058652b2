pub mod api;
pub mod core;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{EntityId, SoundEvent, GameEvent};
pub use core::rng::Rng;
pub use core::schedule::{FrameScheduler, FrameToken};
pub use core::time::FrameClock;
pub use input::key::{Key, Modifiers};
pub use input::queue::{InputEvent, InputQueue};
