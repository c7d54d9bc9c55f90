//! Edge Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use edge_dodge::renderer::{Canvas2d, build_draw_list, present};
    use edge_dodge::sim::Viewport;
    use edge_dodge::{GameLoop, RenderError, Settings, Tuning};

    /// Game instance: simulation plus the browser-side surface
    struct Game {
        game_loop: GameLoop,
        settings: Settings,
        canvas: HtmlCanvasElement,
        surface: Option<Canvas2d>,
        last_time: f64,
    }

    impl Game {
        fn new(seed: u64, tuning: Tuning, settings: Settings, canvas: HtmlCanvasElement) -> Self {
            Self {
                game_loop: GameLoop::new(seed, tuning),
                settings,
                canvas,
                surface: None,
                last_time: 0.0,
            }
        }

        fn canvas_viewport(&self) -> Viewport {
            Viewport::new(self.canvas.width() as f32, self.canvas.height() as f32)
        }

        /// Run simulation ticks
        fn update(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            self.last_time = time;

            let viewport = self.canvas_viewport();
            self.game_loop.set_viewport(viewport);
            self.game_loop.update(dt);
        }

        /// Render the current frame. Errors drop this frame only.
        fn render(&mut self) {
            if self.surface.is_none() {
                match Canvas2d::acquire(&self.canvas) {
                    Ok(surface) => {
                        log::info!("Canvas 2D context ready");
                        self.surface = Some(surface);
                    }
                    Err(e) => {
                        log::warn!("Render skipped: {}", e);
                        return;
                    }
                }
            }

            let game_loop = &self.game_loop;
            let commands = build_draw_list(game_loop.state(), game_loop.tuning(), &self.settings);
            let viewport = game_loop.viewport();
            if let Some(ref mut surface) = self.surface {
                match present(surface, viewport, &commands) {
                    Ok(()) => {}
                    Err(RenderError::SurfaceUnavailable) => {
                        log::warn!("Canvas context lost, reacquiring next frame");
                        self.surface = None;
                    }
                    Err(e) => log::warn!("Render error: {}", e),
                }
            }
        }
    }

    /// Optional JSON config embedded in the page as `<script type="application/json">`
    fn read_json_element(document: &web_sys::Document, id: &str) -> Option<String> {
        document
            .get_element_by_id(id)
            .and_then(|el| el.text_content())
            .filter(|text| !text.trim().is_empty())
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Edge Dodge starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let tuning = match read_json_element(&document, "tuning") {
            Some(json) => Tuning::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Invalid tuning, using defaults: {}", e);
                Tuning::default()
            }),
            None => Tuning::default(),
        };
        let settings = read_json_element(&document, "settings")
            .map(|json| Settings::from_json_or_default(&json))
            .unwrap_or_default();

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, tuning, settings, canvas)));

        setup_input_handlers(game.clone());
        setup_focus_handlers(game.clone());

        request_animation_frame(game);

        log::info!("Edge Dodge running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if game.borrow_mut().game_loop.key_down(&event.key()) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                game.borrow_mut().game_loop.key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Key-ups are never delivered while the page is unfocused, so drop held keys
    fn setup_focus_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    game.borrow_mut().game_loop.release_all_keys();
                    log::info!("Released keys (tab hidden)");
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().game_loop.release_all_keys();
                log::info!("Released keys (window blur)");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("no window, stopping game loop");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Edge Dodge (native) starting...");
    log::info!("Native mode runs a headless demo - serve the wasm build for the playable version");

    run_headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Ten simulated seconds of scripted input at 60 fps
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_demo() {
    use edge_dodge::renderer::{DrawCommand, build_draw_list};
    use edge_dodge::{GameLoop, Settings, Tuning};

    const FRAME_DT: f32 = 1.0 / 60.0;
    const SCRIPT: [(&str, u32); 4] = [("d", 120), ("s", 120), ("a", 120), ("w", 120)];

    let settings = Settings::default();
    let mut game = GameLoop::new(0xED6E, Tuning::default());

    for (key, frames) in SCRIPT {
        game.key_down(key);
        for _ in 0..frames {
            game.update(FRAME_DT);
        }
        game.key_up(key);

        let state = game.state();
        log::info!(
            "after '{}': player ({:.0}, {:.0}), {} enemies live, score {}",
            key,
            state.player.pos.x,
            state.player.pos.y,
            state.enemies.len(),
            state.score
        );
    }

    let frame = build_draw_list(game.state(), game.tuning(), &settings);
    let squares = frame
        .iter()
        .filter(|c| matches!(c, DrawCommand::StrokeSquare { .. }))
        .count();
    println!(
        "Final score {} after {} ticks ({} enemies on screen)",
        game.state().score,
        game.state().time_ticks,
        squares
    );
}
