//! Orbit Demo entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_demo {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use orbit_demo::renderer::SdfRenderState;
    use orbit_demo::{FrameLoop, OrbitAnimator, Settings};

    struct Demo {
        frame_loop: FrameLoop<OrbitAnimator>,
        render_state: Option<SdfRenderState>,
        settings: Settings,
    }

    impl Demo {
        fn new(settings: Settings) -> Self {
            Self {
                frame_loop: FrameLoop::new(&settings),
                render_state: None,
                settings,
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let Some(ref mut render_state) = self.render_state else {
                return;
            };
            let frame_loop = &self.frame_loop;
            match render_state.render(self.settings.background, |surface| {
                frame_loop.render(surface)
            }) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    render_state.resize(render_state.size.0, render_state.size.1);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Orbit Demo starting...");

        let settings = Settings::load();
        // Store the effective settings so they can be edited between runs
        settings.save();
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Logical size comes from settings, backing store follows the pixel ratio
        let dpr = window.device_pixel_ratio();
        let _ = canvas.set_attribute(
            "style",
            &format!(
                "width: {}px; height: {}px",
                settings.window_width, settings.window_height
            ),
        );
        let width = (settings.window_width as f64 * dpr) as u32;
        let height = (settings.window_height as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let window_size = (settings.window_width, settings.window_height);
        let demo = Rc::new(RefCell::new(Demo::new(settings)));

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

        let render_state = SdfRenderState::new(surface, &adapter, width, height, window_size)
            .await
            .expect("Failed to create device");
        demo.borrow_mut().render_state = Some(render_state);

        // Start frame loop
        request_animation_frame(demo);

        log::info!("Orbit Demo running!");
    }

    fn request_animation_frame(demo: Rc<RefCell<Demo>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame(demo, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(demo: Rc<RefCell<Demo>>, time: f64) {
        {
            let mut d = demo.borrow_mut();
            d.frame_loop.advance(time);
            d.render();
        }

        request_animation_frame(demo);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_demo::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
mod native_demo {
    use std::time::{Duration, Instant};

    use orbit_demo::renderer::RecordingSurface;
    use orbit_demo::{FrameLoop, OrbitAnimator, Settings};

    /// How long the headless run lasts
    const RUN_SECONDS: u64 = 5;

    /// Drive the frame loop headless against a recording surface
    pub fn run() {
        let settings = Settings::load();
        let mut frame_loop: FrameLoop<OrbitAnimator> = FrameLoop::new(&settings);
        let mut surface = RecordingSurface::new();

        let frame_interval = Duration::try_from_secs_f32(settings.tick_dt()).unwrap_or_else(|e| {
            log::warn!("Bad tick length {}: {}, sleeping 16ms", settings.tick_dt(), e);
            Duration::from_millis(16)
        });
        let start = Instant::now();
        let mut next_report = Duration::from_secs(1);

        while start.elapsed() < Duration::from_secs(RUN_SECONDS) {
            let time_ms = start.elapsed().as_secs_f64() * 1000.0;
            frame_loop.advance(time_ms);

            surface.clear();
            frame_loop.render(&mut surface);

            if start.elapsed() >= next_report {
                if let Some(ellipse) = surface.last() {
                    log::info!(
                        "t={}s ticks={} fps={} angle={:.3} pos=({:.1}, {:.1})",
                        next_report.as_secs(),
                        frame_loop.ticks(),
                        frame_loop.fps(),
                        frame_loop.animation().angle(),
                        ellipse.pos.x,
                        ellipse.pos.y
                    );
                }
                next_report += Duration::from_secs(1);
            }

            std::thread::sleep(frame_interval);
        }

        log::info!("Ran {} ticks in {}s", frame_loop.ticks(), RUN_SECONDS);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Orbit Demo (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");
    native_demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
