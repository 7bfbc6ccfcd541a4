//! Brushy Hero entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use brushy_hero::audio::{AudioManager, SoundEffect};
    use brushy_hero::consts::*;
    use brushy_hero::input::{handle_move, PointerTracker};
    use brushy_hero::renderer::{build_scene, MouthLayout, RenderState};
    use brushy_hero::settings::{BrushColor, Settings};
    use brushy_hero::sim::{tick, GameEvent, GameSession, GameStatus};

    /// Game instance holding all state
    struct Game {
        session: GameSession,
        settings: Settings,
        audio: AudioManager,
        tracker: PointerTracker,
        layout: MouthLayout,
        render_state: Option<RenderState>,
        last_time: f64,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            let settings = Settings::load();
            let mut audio = AudioManager::new();
            audio.set_master_volume(settings.master_volume);
            audio.set_sfx_volume(settings.sfx_volume);
            audio.set_muted(settings.muted);

            Self {
                session: GameSession::new(seed),
                settings,
                audio,
                tracker: PointerTracker::new(),
                layout: MouthLayout::new(800.0, 600.0, TEETH_PER_ROW),
                render_state: None,
                last_time: 0.0,
            }
        }

        fn set_canvas_size(&mut self, w: f32, h: f32) {
            self.layout = MouthLayout::new(w, h, TEETH_PER_ROW);
        }

        /// Feed one canvas-relative pointer/touch sample through the mapper
        fn pointer_sample(&mut self, x: f32, y: f32) {
            handle_move(&mut self.session, &self.layout, &mut self.tracker, x, y);
        }

        /// Advance the session and turn queued cues into sounds
        fn update(&mut self, dt_ms: f64) {
            // A backgrounded tab stops the frame loop; don't let the first
            // frame back fast-forward the whole round
            tick(&mut self.session, dt_ms.min(250.0));

            for event in self.session.drain_events() {
                match event {
                    GameEvent::BrushSwish => self.audio.play(SoundEffect::Bubble),
                    GameEvent::GermBrushed { .. } => self.audio.play(SoundEffect::Sparkle),
                    GameEvent::RoundFinished { cleanliness, .. } => {
                        if cleanliness > WIN_CLEANLINESS_THRESHOLD {
                            self.audio.play(SoundEffect::Win);
                        } else {
                            self.audio.play(SoundEffect::Lose);
                        }
                    }
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = build_scene(&self.session, &self.layout, &self.tracker, &self.settings);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let (w, h) = render_state.size;
                        let (lw, lh) = render_state.logical_size;
                        render_state.resize(w, h, lw, lh);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            // Live counters
            if let Some(el) = document.query_selector("#hud-germs .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.session.board.occupied_count().to_string()));
            }
            if let Some(el) = document.query_selector("#hud-streak .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.session.streak.to_string()));
            }
            if let Some(el) = document.query_selector("#hud-timer .hud-value").ok().flatten() {
                el.set_text_content(Some(&format_time(self.session.seconds_remaining)));
            }

            // Screens track session status
            if let Some(el) = document.get_element_by_id("hud") {
                let class = if self.session.status == GameStatus::Playing {
                    "overlay"
                } else {
                    "overlay hidden"
                };
                let _ = el.set_attribute("class", class);
            }

            if let Some(el) = document.get_element_by_id("start-screen") {
                let class = if self.session.status == GameStatus::Idle {
                    "screen"
                } else {
                    "screen hidden"
                };
                let _ = el.set_attribute("class", class);
            }

            if let Some(el) = document.get_element_by_id("game-over") {
                if self.session.status == GameStatus::Finished {
                    let _ = el.set_attribute("class", "screen");

                    let cleanliness = self.session.cleanliness_percent();
                    if let Some(score_el) = document.get_element_by_id("final-score") {
                        score_el.set_text_content(Some(&self.session.score.to_string()));
                    }
                    if let Some(clean_el) = document.get_element_by_id("final-clean") {
                        clean_el.set_text_content(Some(&format!("{}%", cleanliness)));
                    }
                    let (title, message) = verdict(cleanliness);
                    if let Some(title_el) = document.get_element_by_id("verdict-title") {
                        title_el.set_text_content(Some(title));
                    }
                    if let Some(msg_el) = document.get_element_by_id("verdict-msg") {
                        msg_el.set_text_content(Some(message));
                    }
                } else {
                    let _ = el.set_attribute("class", "screen hidden");
                }
            }
        }
    }

    fn format_time(seconds: u32) -> String {
        format!("{}:{:02}", seconds / 60, seconds % 60)
    }

    /// Results-screen copy by cleanliness tier
    fn verdict(cleanliness: u32) -> (&'static str, &'static str) {
        if cleanliness == 100 {
            ("Sparkling Clean!", "Wow! Not a single spot missed!")
        } else if cleanliness > WIN_CLEANLINESS_THRESHOLD {
            ("Great Job!", "Your teeth are looking shiny.")
        } else {
            ("Oops!", "The sugar bugs won this time. Try again!")
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Brushy Hero starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        game.borrow_mut()
            .set_canvas_size(client_w as f32, client_h as f32);

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(
            surface,
            &adapter,
            width,
            height,
            client_w as f32,
            client_h as f32,
        )
        .await;
        game.borrow_mut().render_state = Some(render_state);

        // Set up input and UI handlers
        setup_pointer_handlers(&canvas, game.clone());
        setup_start_buttons(game.clone());
        setup_restart_button(game.clone());
        setup_color_swatches(game.clone());
        refresh_swatches(game.borrow().settings.brush_color);

        // Start game loop
        request_animation_frame(game);

        log::info!("Brushy Hero running!");
    }

    fn setup_pointer_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Mouse move - the brush follows everywhere, teeth get brushed when
        // the sample lands on one
        {
            let game = game.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas.get_bounding_client_rect();
                let x = event.client_x() as f32 - rect.left() as f32;
                let y = event.client_y() as f32 - rect.top() as f32;
                game.borrow_mut().pointer_sample(x, y);
            });
            let _ = window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move - swiping a finger is the touch equivalent of hovering
        {
            let game = game.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    let y = touch.client_y() as f32 - rect.top() as f32;
                    game.borrow_mut().pointer_sample(x, y);
                }
            });
            let _ = window
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start counts as a first brush contact
        {
            let game = game.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    let y = touch.client_y() as f32 - rect.top() as f32;
                    game.borrow_mut().pointer_sample(x, y);
                }
            });
            let _ = window
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_start_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        for (id, seconds) in [
            ("start-blitz", ROUND_BLITZ_SECS),
            ("start-routine", ROUND_ROUTINE_SECS),
        ] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    let mut g = game.borrow_mut();
                    // The click is our user gesture; unlock audio with it
                    g.audio.resume();
                    g.audio.play(SoundEffect::Sparkle);
                    g.session.start(seconds);
                    log::info!("Round started: {} seconds", seconds);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().session.restart();
                log::info!("Back to the start screen");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_color_swatches(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        for color in BrushColor::ALL {
            let id = format!("swatch-{}", color.as_str());
            if let Some(btn) = document.get_element_by_id(&id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    let mut g = game.borrow_mut();
                    g.settings.brush_color = color;
                    g.settings.save();
                    refresh_swatches(color);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    /// Mark the chosen swatch selected
    fn refresh_swatches(selected: BrushColor) {
        let document = web_sys::window().unwrap().document().unwrap();
        for color in BrushColor::ALL {
            let id = format!("swatch-{}", color.as_str());
            if let Some(el) = document.get_element_by_id(&id) {
                let class = if color == selected {
                    "swatch selected"
                } else {
                    "swatch"
                };
                let _ = el.set_attribute("class", class);
            }
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt_ms = if g.last_time > 0.0 {
                time - g.last_time
            } else {
                0.0
            };
            g.last_time = time;

            g.update(dt_ms);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Brushy Hero (native) starting...");
    log::info!("The playable build targets wasm32 - run with `trunk serve`");

    // Headless demo: the sim is platform-free, so play a scripted blitz
    println!("\nRunning a headless blitz round...");
    run_demo_round();
}

#[cfg(not(target_arch = "wasm32"))]
fn run_demo_round() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use brushy_hero::consts::ROUND_BLITZ_SECS;
    use brushy_hero::sim::{attempt_clean, tick, GameSession, GameStatus};

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(42);
    let mut session = GameSession::new(seed);
    session.start(ROUND_BLITZ_SECS);

    // Run frames at ~60fps and brush the first dirty tooth each frame
    while session.status == GameStatus::Playing {
        tick(&mut session, 16.7);
        if let Some(&id) = session.board.occupied_slots().first() {
            attempt_clean(&mut session, id, 0.0, 0.0);
        }
    }

    println!(
        "Final: {} germs busted, streak {}, {}% clean",
        session.score,
        session.streak,
        session.cleanliness_percent()
    );
}
