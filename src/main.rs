#[cfg(not(target_arch = "wasm32"))]
mod native {
    use chain_follow::render::{GpuContext, LineRenderer};
    use chain_follow::{ChainLayout, RenderStyle, Scene, SimConfig, Viewport};
    use glam::Vec2;
    use std::sync::Arc;
    use std::time::Instant;
    use winit::application::ApplicationHandler;
    use winit::event::{ElementState, MouseButton, WindowEvent};
    use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
    use winit::keyboard::{KeyCode, PhysicalKey};
    use winit::window::{Window, WindowId};

    #[derive(Default)]
    struct App {
        window: Option<Arc<Window>>,
        context: Option<GpuContext>,
        renderer: Option<LineRenderer>,
        scene: Option<Scene>,
        last_frame: Option<Instant>,
    }

    impl App {
        fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), String> {
            let window_attrs = Window::default_attributes()
                .with_title("Chain Follow")
                .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

            let window = Arc::new(
                event_loop
                    .create_window(window_attrs)
                    .map_err(|e| format!("failed to create window: {e}"))?,
            );

            let size = window.inner_size();
            let viewport = Viewport::from_physical(size.width, size.height, window.scale_factor())
                .map_err(|e| e.to_string())?;
            let scene = Scene::new(
                viewport,
                &ChainLayout::default(),
                SimConfig::default(),
                RenderStyle::default(),
            )
            .map_err(|e| e.to_string())?;

            let context = pollster::block_on(GpuContext::new(window.clone())).map_err(|e| e.to_string())?;
            let renderer = LineRenderer::new(&context);

            self.window = Some(window);
            self.context = Some(context);
            self.renderer = Some(renderer);
            self.scene = Some(scene);
            Ok(())
        }

        fn update(&mut self) {
            let now = Instant::now();
            let elapsed = self.last_frame.map(|t| now - t).unwrap_or_default();
            self.last_frame = Some(now);

            if let Some(scene) = &mut self.scene {
                scene.advance(elapsed);
            }
        }

        fn render(&mut self) {
            let (Some(context), Some(renderer), Some(scene)) =
                (self.context.as_ref(), self.renderer.as_mut(), self.scene.as_mut())
            else {
                return;
            };

            let output = match context.surface.get_current_texture() {
                Ok(output) => output,
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    context.reconfigure();
                    return;
                }
                Err(e) => {
                    log::error!("Surface error: {:?}", e);
                    return;
                }
            };

            let view = output
                .texture
                .create_view(&wgpu::TextureViewDescriptor::default());

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
            if let Err(e) = self.init(event_loop) {
                log::error!("{}", e);
                event_loop.exit();
            }
        }

        fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
            match event {
                WindowEvent::CloseRequested => event_loop.exit(),

                WindowEvent::KeyboardInput { event, .. } => {
                    if event.state == ElementState::Pressed
                        && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                    {
                        event_loop.exit();
                    }
                }

                WindowEvent::Resized(size) => {
                    if let Some(context) = &mut self.context {
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

    pub fn run() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

        let event_loop = match EventLoop::new() {
            Ok(event_loop) => event_loop,
            Err(e) => {
                log::error!("failed to create event loop: {}", e);
                return;
            }
        };
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::default();
        if let Err(e) = event_loop.run_app(&mut app) {
            log::error!("event loop error: {}", e);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {}
