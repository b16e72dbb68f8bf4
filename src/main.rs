//! Heart Catch entry point
//!
//! Handles platform-specific initialization and drives the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use heart_catch::consts::FRAME_MS;
    use heart_catch::renderer::{RenderState, scene};
    use heart_catch::sim::{Direction, GameEvent, GamePhase, GameWorld, InputState, Playfield, tick};
    use heart_catch::{HudSnapshot, Overlay, Tuning};

    /// Game instance holding all state
    struct Game {
        world: GameWorld,
        input: InputState,
        render_state: Option<RenderState>,
        canvas: HtmlCanvasElement,
        last_time: f64,
        /// A frame callback is scheduled
        running: bool,
    }

    impl Game {
        fn new(canvas: HtmlCanvasElement, seed: u64) -> Self {
            let playfield = Playfield::new(canvas.width() as f32, canvas.height() as f32);
            Self {
                world: GameWorld::new(playfield, Tuning::default(), seed),
                input: InputState::default(),
                render_state: None,
                canvas,
                last_time: 0.0,
                running: false,
            }
        }

        /// Advance one frame
        fn update(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                time - self.last_time
            } else {
                FRAME_MS
            };
            self.last_time = time;

            tick(&mut self.world, &self.input, dt);

            for event in self.world.drain_events() {
                match event {
                    GameEvent::Won { love_meter } => log::info!("You win! ({}%)", love_meter),
                    GameEvent::GameOver { love_meter } => {
                        log::info!("Game over ({}%)", love_meter)
                    }
                    _ => {}
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = scene(&self.world);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Match the canvas to its container and propagate the new size
        fn resize(&mut self) {
            let Some(parent) = self.canvas.parent_element() else {
                return;
            };
            let width = parent.client_width().max(1) as u32;
            let height = parent.client_height().max(1) as u32;
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            self.world.resize(width as f32, height as f32);
            if let Some(ref mut render_state) = self.render_state {
                render_state.resize(width, height);
            }
        }

        /// Update HUD elements and overlays in the DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let hud = HudSnapshot::from_world(&self.world);

            let visible = hud.overlay();
            for overlay in Overlay::ALL {
                if let Some(el) = document.get_element_by_id(overlay.element_id()) {
                    let classes = el.class_list();
                    let _ = if overlay == visible {
                        classes.remove_1("hidden")
                    } else {
                        classes.add_1("hidden")
                    };
                }
            }

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&hud.score_text()));
            }
            if let Some(el) = document.get_element_by_id("health-display") {
                el.set_text_content(Some(&hud.lives_text()));
            }
            if let Some(text) = hud.final_score_text() {
                if let Some(el) = document.get_element_by_id("final-score") {
                    el.set_text_content(Some(&text));
                }
            }
        }

        /// Convert a touch's client x into playfield coordinates
        fn touch_x(&self, event: &TouchEvent) -> Option<f32> {
            let touch = event.touches().get(0)?;
            let rect = self.canvas.get_bounding_client_rect();
            Some(touch.client_x() as f32 - rect.left() as f32)
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Heart Catch starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document available");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("game-canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("Missing #game-canvas");
            return;
        };

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(canvas.clone(), seed)));
        game.borrow_mut().resize();
        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });
        match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => {
                let adapter = instance
                    .request_adapter(&wgpu::RequestAdapterOptions {
                        power_preference: wgpu::PowerPreference::LowPower,
                        compatible_surface: Some(&surface),
                        force_fallback_adapter: false,
                    })
                    .await;
                match adapter {
                    Ok(adapter) => {
                        log::info!("Using adapter: {:?}", adapter.get_info().name);
                        let (w, h) = (canvas.width(), canvas.height());
                        match RenderState::new(surface, &adapter, w, h).await {
                            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
                            Err(e) => log::error!("Failed to create device: {}", e),
                        }
                    }
                    Err(e) => log::error!("No graphics adapter: {}", e),
                }
            }
            Err(e) => log::error!("Failed to create surface: {}", e),
        }

        setup_input_handlers(&canvas, game.clone());
        setup_start_buttons(game.clone());
        setup_resize(game.clone());

        game.borrow().update_hud();
        log::info!("Heart Catch ready");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Direction keys
        for (event_name, held) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(direction) = Direction::from_key_code(&event.code()) {
                    game.borrow_mut().input.set_direction(direction, held);
                }
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start/move set the pointer column
        for event_name in ["touchstart", "touchmove"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                if let Some(x) = g.touch_x(&event) {
                    g.input.pointer_moved(x);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end releases it
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().input.pointer_released();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_start_buttons(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        for id in ["start-btn", "restart-btn", "replay-btn"] {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing #{}", id);
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                start_or_restart(game.clone());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().resize();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Reset the world and arm the frame loop if it is idle
    fn start_or_restart(game: Rc<RefCell<Game>>) {
        let arm = {
            let mut g = game.borrow_mut();
            g.world.start_or_restart();
            g.input.pointer_released();
            g.last_time = 0.0;
            g.update_hud();
            !std::mem::replace(&mut g.running, true)
        };
        if arm {
            request_animation_frame(game);
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_running = {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
            let playing = g.world.phase == GamePhase::Playing;
            g.running = playing;
            playing
        };

        if keep_running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Heart Catch (native) starting...");
    log::info!("Native mode runs a headless session - use `trunk serve` for the web version");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match heart_catch::Tuning::load(std::path::Path::new(&path)) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => heart_catch::Tuning::default(),
    };

    let summary = headless::run(tuning);
    match serde_json::to_string(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode summary: {}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use heart_catch::HudSnapshot;
    use heart_catch::Tuning;
    use heart_catch::consts::FRAME_MS;
    use heart_catch::sim::{GameEvent, GamePhase, GameWorld, InputState, Playfield, tick};

    /// Frame cap (two minutes at 60 Hz)
    const MAX_FRAMES: u32 = 60 * 120;

    /// Play one run with the pointer parked at the playfield center
    pub fn run(tuning: Tuning) -> HudSnapshot {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        let playfield = Playfield::new(800.0, 600.0);
        let mut world = GameWorld::new(playfield, tuning, seed);
        let input = InputState {
            pointer_x: Some(playfield.width / 2.0),
            ..Default::default()
        };

        world.start_or_restart();
        let mut frames = 0;
        while world.phase == GamePhase::Playing && frames < MAX_FRAMES {
            tick(&mut world, &input, FRAME_MS);
            frames += 1;
            for event in world.drain_events() {
                match event {
                    GameEvent::Caught { love_meter, .. } => log::info!("Catch! love {}", love_meter),
                    GameEvent::Missed { lives, .. } => log::info!("Miss! lives {}", lives),
                    _ => log::debug!("{:?}", event),
                }
            }
        }

        log::info!("Session ended after {} frames in {:?}", frames, world.phase);
        HudSnapshot::from_world(&world)
    }
}
