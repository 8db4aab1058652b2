pub mod runner;

pub use runner::GameRunner;
pub use typer_engine;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function (usable by the game crate for extra exports)
/// - All wasm-bindgen exports (game_init, game_frame, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyGame;
///
/// typer_web::export_game!(MyGame, "my-game");
/// ```
///
/// The game type must provide `fn new(seed: u64) -> Self`.
///
/// # Frame loop contract
///
/// `game_key_down` and `game_custom_event` return a frame token (0 = none).
/// When non-zero, JS starts a `requestAnimationFrame` loop that calls
/// `game_frame(token, timestamp)` and keeps requesting frames while it
/// returns `true`. A token is invalidated as soon as the game stops running,
/// so a callback left over from before a pause does nothing.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        fn token_or_zero(token: Option<$crate::typer_engine::FrameToken>) -> u32 {
            token.map_or(0, |t| t.0)
        }

        #[wasm_bindgen]
        pub fn game_init(seed: u32) {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new(seed as u64);
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized (seed {})", $game_name, seed);
        }

        #[wasm_bindgen]
        pub fn game_key_down(key: &str, ctrl: bool, alt: bool, meta: bool) -> u32 {
            let modifiers = $crate::typer_engine::Modifiers { ctrl, alt, meta };
            match $crate::typer_engine::InputEvent::from_dom_key(key, modifiers) {
                Some(event) => with_runner(|r| token_or_zero(r.push_input(event))),
                None => 0,
            }
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) -> u32 {
            with_runner(|r| {
                token_or_zero(r.push_input($crate::typer_engine::InputEvent::Custom { kind, a, b, c }))
            })
        }

        #[wasm_bindgen]
        pub fn game_frame(token: u32, timestamp_ms: f64) -> bool {
            with_runner(|r| r.frame($crate::typer_engine::FrameToken(token), timestamp_ms))
        }

        #[wasm_bindgen]
        pub fn game_frame_token() -> u32 {
            with_runner(|r| token_or_zero(r.frame_token()))
        }

        #[wasm_bindgen]
        pub fn game_snapshot() -> String {
            with_runner(|r| r.snapshot_json())
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_sound_events_ptr() -> *const u8 {
            with_runner(|r| r.sound_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_sound_events_len() -> u32 {
            with_runner(|r| r.sound_events_len())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }
    };
}
