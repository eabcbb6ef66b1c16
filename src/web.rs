//! WASM entry point - chain following clicks on the `canvas` element

use crate::app::Scene;
use crate::config::{ChainLayout, RenderStyle, SimConfig};
use crate::math::Viewport;
use crate::render::{GpuContext, LineRenderer};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::web::EventLoopExtWebSys;
use winit::platform::web::WindowAttributesExtWebSys;
use winit::window::{Window, WindowId};

struct GpuState {
    context: Option<GpuContext>,
    renderer: Option<LineRenderer>,
}

struct App {
    window: Option<Arc<Window>>,
    gpu: Rc<RefCell<GpuState>>,
    scene: Option<Scene>,
    last_time: f64,
}

impl App {
    fn new() -> Self {
        Self {
            window: None,
            gpu: Rc::new(RefCell::new(GpuState {
                context: None,
                renderer: None,
            })),
            scene: None,
            last_time: 0.0,
        }
    }

    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    fn update(&mut self) {
        let now = Self::now_ms();
        let elapsed = if self.last_time > 0.0 {
            Duration::from_secs_f64(((now - self.last_time) / 1000.0).max(0.0))
        } else {
            Duration::ZERO
        };
        self.last_time = now;

        if let Some(scene) = &mut self.scene {
            scene.advance(elapsed);
        }
    }

    fn render(&mut self) {
        let mut gpu = self.gpu.borrow_mut();
        let GpuState { context, renderer } = &mut *gpu;
        let (Some(context), Some(renderer), Some(scene)) =
            (context.as_ref(), renderer.as_mut(), self.scene.as_mut())
        else {
            return;
        };

        let output = match context.surface.get_current_texture() {
            Ok(o) => o,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                context.reconfigure();
                return;
            }
            Err(e) => {
                log::warn!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let viewport = *scene.viewport();
        let batch = scene.prepare();
        renderer.render(context, &view, batch, &viewport);
        output.present();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let Some(canvas) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("canvas"))
            .and_then(|e| e.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("Could not find canvas element with id 'canvas'");
            return;
        };

        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let window_attrs = Window::default_attributes()
            .with_canvas(Some(canvas))
            .with_inner_size(PhysicalSize::new(width, height));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {}", e);
                return;
            }
        };

        let scene = Viewport::from_physical(width, height, window.scale_factor()).and_then(|viewport| {
            Scene::new(
                viewport,
                &ChainLayout::default(),
                SimConfig::default(),
                RenderStyle::default(),
            )
        });
        match scene {
            Ok(scene) => self.scene = Some(scene),
            Err(e) => {
                log::error!("failed to build scene: {}", e);
                return;
            }
        }
        self.window = Some(window.clone());

        let gpu = self.gpu.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let context = match GpuContext::new(window.clone()).await {
                Ok(context) => context,
                Err(e) => {
                    log::error!("{}", e);
                    return;
                }
            };
            let renderer = LineRenderer::new(&context);

            let mut gpu = gpu.borrow_mut();
            gpu.context = Some(context);
            gpu.renderer = Some(renderer);

            window.request_redraw();
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(context) = &mut self.gpu.borrow_mut().context {
                    context.resize(size);
                }
                if let (Some(scene), Some(window)) = (&mut self.scene, &self.window) {
                    scene.resize(size.width, size.height, window.scale_factor());
                }
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                if let Some(scene) = &mut self.scene {
                    scene.pointer_button(state == ElementState::Pressed);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(scene) = &mut self.scene {
                    scene.pointer_moved(Vec2::new(position.x as f32, position.y as f32));
                }
            }

            WindowEvent::RedrawRequested => {
                self.update();
                self.render();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Warn) {
        web_sys::console::error_1(&format!("failed to init logger: {e}").into());
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("failed to create event loop: {}", e);
            return;
        }
    };

    event_loop.spawn_app(App::new());
}
