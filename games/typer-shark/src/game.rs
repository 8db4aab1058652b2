use std::f32::consts::TAU;

use typer_engine::*;

use crate::config::TyperConfig;
use crate::enemy::{Enemy, EnemyRegistry};
use crate::error::ConfigError;
use crate::events::*;
use crate::phase::{GamePhase, PhaseCommand};
use crate::progression::Progression;
use crate::resolver::{InputResolver, Resolution};
use crate::snapshot::{EnemyView, Snapshot, TypedPreview};
use crate::spawn::SpawnScheduler;
use crate::words::WordBank;

pub struct TyperShark {
    phase: GamePhase,
    config: TyperConfig,
    words: WordBank,
    rng: Rng,
    registry: EnemyRegistry,
    spawner: SpawnScheduler,
    resolver: InputResolver,
    progression: Progression,
}

impl TyperShark {
    pub fn new(seed: u64) -> Self {
        Self::with_config(TyperConfig::with_seed(seed))
    }

    pub fn with_config(config: TyperConfig) -> Self {
        Self {
            phase: GamePhase::Start,
            words: WordBank::default(),
            rng: Rng::new(config.seed),
            registry: EnemyRegistry::new(),
            spawner: SpawnScheduler::new(),
            resolver: InputResolver::new(),
            progression: Progression::new(config.max_lives, config.defeats_per_level),
            config,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn registry(&self) -> &EnemyRegistry {
        &self.registry
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn locked(&self) -> Option<EntityId> {
        self.resolver.locked()
    }

    /// Whether configuration may be replaced (no run in progress).
    fn accepts_config(&self) -> bool {
        matches!(self.phase, GamePhase::Start | GamePhase::GameOver)
    }

    /// Replace the session configuration. Applied at the next reset.
    ///
    /// On the title screen the stats are reset right away so the snapshot
    /// shows the new lives. After a game over the final stats stay visible
    /// until the next run starts.
    pub fn configure(&mut self, json: &str) -> Result<(), ConfigError> {
        if !self.accepts_config() {
            return Err(ConfigError::RunInProgress);
        }
        let config = TyperConfig::from_json(json)?;
        self.rng = Rng::new(config.seed);
        self.progression.set_limits(config.max_lives, config.defeats_per_level);
        if self.phase == GamePhase::Start {
            self.progression.reset();
        }
        self.config = config;
        Ok(())
    }

    /// Replace the word bank used by the next run.
    pub fn load_words(&mut self, json: &str) -> Result<(), ConfigError> {
        if !self.accepts_config() {
            return Err(ConfigError::RunInProgress);
        }
        self.words = WordBank::from_json(json)?;
        Ok(())
    }

    /// Apply a phase command and its side effects. No-op when the command
    /// does not apply to the current phase.
    fn transition(&mut self, ctx: &mut EngineContext, command: PhaseCommand) {
        let Some(next) = self.phase.apply(command) else {
            return;
        };

        match command {
            PhaseCommand::Start => {
                self.progression.reset();
                self.registry.clear();
                self.resolver.clear();
                self.spawner.force_due();
                log::info!("new run: {} lives", self.progression.stats().lives);
            }
            PhaseCommand::Resume => {
                if self.registry.is_empty() {
                    self.spawner.force_due();
                }
            }
            PhaseCommand::Finish | PhaseCommand::Exhaust => {
                self.registry.clear();
                self.resolver.clear();
            }
            PhaseCommand::Pause => {}
        }

        log::info!("phase {:?} -> {:?}", self.phase, next);
        self.phase = next;
        ctx.emit_event(GameEvent::new(EVENT_PHASE, next.code() as f32, 0.0, 0.0));
    }

    fn handle_key(&mut self, ctx: &mut EngineContext, key: Key) {
        match (self.phase, key) {
            (GamePhase::Start | GamePhase::GameOver, Key::Enter) => {
                self.transition(ctx, PhaseCommand::Start);
            }
            (GamePhase::Paused, Key::Escape) => self.transition(ctx, PhaseCommand::Resume),
            (GamePhase::Playing, Key::Escape) => self.transition(ctx, PhaseCommand::Pause),
            (GamePhase::Playing, Key::Char(c)) => self.type_char(ctx, c),
            (GamePhase::Playing, Key::Backspace) => {
                self.resolver.backspace(&mut self.registry);
            }
            _ => {}
        }
    }

    fn type_char(&mut self, ctx: &mut EngineContext, c: char) {
        match self.resolver.type_char(c, &mut self.registry) {
            Resolution::Ignored => {}
            Resolution::Hit { .. } => ctx.emit_sound(SoundEvent(SOUND_KEY_HIT)),
            Resolution::Defeated { id, word_len } => {
                let outcome = self.progression.defeat(word_len);
                let stats = *self.progression.stats();
                ctx.emit_event(GameEvent::new(
                    EVENT_DEFEAT,
                    id.0 as f32,
                    outcome.gained as f32,
                    stats.combo as f32,
                ));
                ctx.emit_sound(SoundEvent(SOUND_DEFEAT));
                if outcome.leveled_up {
                    log::info!("level up: {}", stats.level);
                    ctx.emit_event(GameEvent::new(EVENT_LEVEL_UP, stats.level as f32, 0.0, 0.0));
                    ctx.emit_sound(SoundEvent(SOUND_LEVEL_UP));
                }
            }
            Resolution::Mismatch { id } => {
                self.progression.mismatch();
                ctx.emit_event(GameEvent::new(EVENT_MISMATCH, id.0 as f32, 0.0, 0.0));
                ctx.emit_sound(SoundEvent(SOUND_MISMATCH));
            }
        }
    }

    fn handle_custom(&mut self, ctx: &mut EngineContext, kind: u32) {
        match kind {
            CUSTOM_START => self.transition(ctx, PhaseCommand::Start),
            CUSTOM_RESUME => self.transition(ctx, PhaseCommand::Resume),
            CUSTOM_FINISH => self.transition(ctx, PhaseCommand::Finish),
            other => log::debug!("unknown custom event {}", other),
        }
    }

    fn spawn_enemy(&mut self, ctx: &mut EngineContext) {
        let level = self.progression.level();
        let Some(word) = self.words.pick(level, &mut self.rng) else {
            log::warn!("no word available at level {}, spawn skipped", level);
            return;
        };
        let word = word.to_string();
        let lane = self.rng.pick(&self.config.lanes).copied().unwrap_or(0.0);
        let speed = swim_speed(level, &mut self.rng);
        let wobble = self.rng.range(0.0, TAU);

        let id = ctx.next_id();
        log::debug!("spawn {:?} {:?} lane {} speed {:.3}", id, word, lane, speed);
        self.registry.spawn(Enemy::new(id, &word, lane, speed, wobble));
        ctx.emit_event(GameEvent::new(EVENT_SPAWN, id.0 as f32, lane, 0.0));
    }
}

/// Progress per second for an enemy spawned at `level`. Level 0 counts as 1.
fn swim_speed(level: u32, rng: &mut Rng) -> f32 {
    0.18 + level.max(1) as f32 * 0.03 + rng.range(0.0, 0.04)
}

impl Game for TyperShark {
    type Snapshot = Snapshot;

    fn init(&mut self, _ctx: &mut EngineContext) {
        log::info!(
            "typer-shark ready: seed {}, {} lanes",
            self.config.seed,
            self.config.lanes.len()
        );
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { modifiers, .. } if modifiers.any() => {}
            InputEvent::KeyDown { key, .. } => self.handle_key(ctx, key),
            InputEvent::Custom { kind, .. } => self.handle_custom(ctx, kind),
        }
    }

    fn update(&mut self, ctx: &mut EngineContext, dt: f32) {
        if self.phase != GamePhase::Playing {
            return;
        }

        if self.spawner.tick(dt, self.progression.level(), &mut self.rng) {
            self.spawn_enemy(ctx);
        }

        for enemy in self.registry.advance(dt) {
            self.resolver.release(enemy.id());
            self.progression.escape();
            let lives = self.progression.stats().lives;
            log::debug!("escape {:?} {:?}, {} lives left", enemy.id(), enemy.word(), lives);
            ctx.emit_event(GameEvent::new(EVENT_ESCAPE, enemy.id().0 as f32, lives as f32, 0.0));
            ctx.emit_sound(SoundEvent(SOUND_ESCAPE));
        }

        if self.progression.is_exhausted() {
            self.transition(ctx, PhaseCommand::Exhaust);
        }
    }

    fn is_running(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    fn snapshot(&self) -> Snapshot {
        let locked = self.resolver.locked();
        Snapshot {
            enemies: self.registry.iter().map(EnemyView::from).collect(),
            locked_target_id: locked,
            stats: *self.progression.stats(),
            phase: self.phase,
            defeats: self.progression.defeats(),
            typed_preview: TypedPreview::for_target(&self.registry, locked),
        }
    }
}
