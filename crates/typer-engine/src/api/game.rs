use serde::Serialize;

use crate::api::types::{EntityId, GameEvent, SoundEvent};
use crate::input::queue::InputEvent;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Optional cap in seconds on the step a single frame may produce (default: none).
    /// Without a cap every frame advances by the real time since the previous one.
    pub max_frame_dt: Option<f32>,
    /// Maximum number of sound events per logical step (default: 32).
    pub max_sounds: usize,
    /// Maximum number of game events per logical step (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_frame_dt: None,
            max_sounds: 32,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
///
/// The runner guarantees that `handle_input` and `update` never overlap:
/// each input event is handled to completion before the next event or frame.
pub trait Game {
    /// Read-only view handed to the renderer after every step.
    type Snapshot: Serialize;

    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state.
    fn init(&mut self, ctx: &mut EngineContext);

    /// React to one discrete input event.
    fn handle_input(&mut self, ctx: &mut EngineContext, event: &InputEvent);

    /// The game loop tick. `dt` is elapsed seconds since the previous frame.
    fn update(&mut self, ctx: &mut EngineContext, dt: f32);

    /// Whether the game currently wants frame callbacks.
    fn is_running(&self) -> bool;

    /// Build the read-only snapshot of the current state.
    fn snapshot(&self) -> Self::Snapshot;
}

/// Mutable access to engine state, passed to `Game::init`, `Game::handle_input`
/// and `Game::update`.
pub struct EngineContext {
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
    max_sounds: usize,
    max_events: usize,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    /// Create a context whose event buffers are bounded by `config`.
    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            sounds: Vec::with_capacity(config.max_sounds),
            events: Vec::with_capacity(config.max_events),
            max_sounds: config.max_sounds,
            max_events: config.max_events,
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a sound event to be forwarded to the browser.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        if self.sounds.len() >= self.max_sounds {
            log::debug!("sound buffer full, dropping {:?}", event);
            return;
        }
        self.sounds.push(event);
    }

    /// Emit a game event to be forwarded to the browser.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() >= self.max_events {
            log::debug!("event buffer full, dropping {:?}", event);
            return;
        }
        self.events.push(event);
    }

    /// Clear per-step transient data (sounds, events).
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic() {
        let mut ctx = EngineContext::new();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_eq!(a, EntityId(1));
        assert_eq!(b, EntityId(2));
    }

    #[test]
    fn event_buffers_are_bounded() {
        let config = GameConfig {
            max_events: 2,
            max_sounds: 1,
            ..GameConfig::default()
        };
        let mut ctx = EngineContext::with_config(&config);
        for i in 0..5 {
            ctx.emit_event(GameEvent::new(i as f32, 0.0, 0.0, 0.0));
            ctx.emit_sound(SoundEvent(i));
        }
        assert_eq!(ctx.events.len(), 2);
        assert_eq!(ctx.sounds, vec![SoundEvent(0)]);
    }

    #[test]
    fn clear_frame_data_keeps_id_counter() {
        let mut ctx = EngineContext::new();
        ctx.next_id();
        ctx.emit_sound(SoundEvent(3));
        ctx.clear_frame_data();
        assert!(ctx.sounds.is_empty());
        assert_eq!(ctx.next_id(), EntityId(2));
    }
}
