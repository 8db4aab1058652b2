use typer_engine::{
    EngineContext, FrameClock, FrameScheduler, FrameToken, Game, GameEvent,
    InputEvent, InputQueue,
};

/// Generic game runner that wires up the engine loop.
///
/// The runner is the single owner of the game state. Each concrete game creates a
/// `thread_local!` GameRunner and exports free functions via `#[wasm_bindgen]`
/// (see `export_game!`), because wasm-bindgen cannot export generic structs directly.
/// Input and frame callbacks both go through `&mut self`, so they are serialized.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    clock: FrameClock,
    frames: FrameScheduler,
    initialized: bool,
    /// Flat buffer of sound event IDs for linear-memory reads.
    sound_buffer: Vec<u8>,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            ctx: EngineContext::with_config(&config),
            input: InputQueue::new(),
            clock: FrameClock::new(config.max_frame_dt),
            frames: FrameScheduler::new(),
            sound_buffer: Vec::with_capacity(config.max_sounds),
            game,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.sync_schedule();
    }

    /// Queue an input event and handle it to completion.
    ///
    /// Returns a token when the event put the game into a running state; the
    /// caller must start a frame loop with it.
    pub fn push_input(&mut self, event: InputEvent) -> Option<FrameToken> {
        self.input.push(event);
        if !self.initialized {
            return None;
        }
        self.ctx.clear_frame_data();
        self.drain_input();
        self.pack_sounds();
        self.sync_schedule()
    }

    /// Run one frame. Returns whether another frame should be requested with
    /// the same token.
    pub fn frame(&mut self, token: FrameToken, now_ms: f64) -> bool {
        if !self.initialized || !self.frames.accepts(token) {
            log::debug!("ignoring stale frame callback {:?}", token);
            return false;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();
        self.drain_input();

        if self.game.is_running() {
            let dt = self.clock.advance(now_ms);
            self.game.update(&mut self.ctx, dt);
        }

        self.pack_sounds();
        self.sync_schedule();
        self.frames.accepts(token)
    }

    /// Token of the active frame loop, if the game is running.
    pub fn frame_token(&self) -> Option<FrameToken> {
        self.frames.current()
    }

    /// Serialize the game's read-only snapshot.
    pub fn snapshot_json(&self) -> String {
        match serde_json::to_string(&self.game.snapshot()) {
            Ok(json) => json,
            Err(err) => {
                log::error!("snapshot serialization failed: {}", err);
                String::from("null")
            }
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    /// Game events emitted by the most recent step.
    pub fn events(&self) -> &[GameEvent] {
        &self.ctx.events
    }

    /// Sound ids emitted by the most recent step.
    pub fn sounds(&self) -> &[u8] {
        &self.sound_buffer
    }

    fn drain_input(&mut self) {
        for event in self.input.drain() {
            self.game.handle_input(&mut self.ctx, &event);
        }
    }

    fn pack_sounds(&mut self) {
        self.sound_buffer.clear();
        for sound in &self.ctx.sounds {
            self.sound_buffer.push(sound.0 as u8);
        }
    }

    /// Start or cancel the frame loop to match the game's running state.
    /// The clock baseline is discarded on both edges.
    fn sync_schedule(&mut self) -> Option<FrameToken> {
        match (self.game.is_running(), self.frames.is_active()) {
            (true, false) => {
                self.clock.reset();
                Some(self.frames.start())
            }
            (false, true) => {
                self.frames.cancel();
                self.clock.reset();
                None
            }
            _ => None,
        }
    }

    // ---- Pointer accessors for linear-memory reads ----

    pub fn sound_events_ptr(&self) -> *const u8 {
        self.sound_buffer.as_ptr()
    }

    pub fn sound_events_len(&self) -> u32 {
        self.sound_buffer.len() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }
}
