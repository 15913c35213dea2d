use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::camera::Camera;
use crate::config::ControllerConfig;
use crate::core::clock::Clock;
use crate::first_person::FirstPersonController;
use crate::scene::Scene;
use crate::scenes::SpawnPoint;

const TITLE_REFRESH_FRAMES: u64 = 15;

/// Window-driven session: real key events in, camera pose in the title bar
pub struct WalkthroughApp {
    window: Option<Arc<Window>>,
    config: ControllerConfig,
    controller: FirstPersonController,
    camera: Camera,
    scene: Scene,
    spawn: SpawnPoint,
    clock: Clock,
    frame: u64,
}

impl WalkthroughApp {
    pub fn new(config: ControllerConfig, scene: Scene, spawn: SpawnPoint) -> Self {
        Self {
            window: None,
            controller: FirstPersonController::new(config.clone()),
            config,
            camera: Camera::new(spawn.position),
            scene,
            spawn,
            clock: Clock::new(),
            frame: 0,
        }
    }

    fn title(&self) -> String {
        let p = self.camera.position;
        format!(
            "walkthrough | {} | ({:.1}, {:.1}, {:.1}) heading {:.0}{}",
            self.scene.name,
            p.x,
            p.y,
            p.z,
            self.camera.heading_degrees(),
            if self.controller.is_frozen() { " [frozen]" } else { "" }
        )
    }

    fn redraw(&mut self) {
        let dt = self.clock.tick();
        self.controller.update_view(&mut self.camera, &self.scene, dt);
        self.frame += 1;

        if self.frame % TITLE_REFRESH_FRAMES == 0 {
            if let Some(window) = &self.window {
                window.set_title(&self.title());
            }
        }
    }
}

impl ApplicationHandler for WalkthroughApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attributes = Window::default_attributes().with_title("walkthrough");
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                log::error!("failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };

        self.controller = FirstPersonController::bound_to(self.config.clone(), window.id());
        self.controller.look_at(&self.camera, self.spawn.look_at);
        self.clock.reset();
        self.window = Some(window);
        log::info!("Session started in '{}' at {:?}", self.scene.name, self.camera.position);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }
            WindowEvent::KeyboardInput { event: key, .. }
                if key.physical_key == PhysicalKey::Code(KeyCode::Escape) && key.state.is_pressed() =>
            {
                event_loop.exit();
                return;
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
                return;
            }
            _ => {}
        }
        self.controller.process_window_event(window_id, &event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Opens the window and runs until it is closed
pub fn run(config: ControllerConfig, scene: Scene, spawn: SpawnPoint) -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = WalkthroughApp::new(config, scene, spawn);
    event_loop.run_app(&mut app)?;
    log::info!("Session ended at {:?}", app.camera.position);
    Ok(())
}
