//! Explore - Interactive Walkabout
//!
//! Run with: `cargo run --bin explore`
//!
//! Controls:
//! - WASD: Move (camera-relative)
//! - Shift: Run
//! - Space: Jump
//! - Mouse left-drag: Orbit camera
//! - Wheel: Zoom
//! - ESC: Exit
//!
//! The window is the input surface; this demo does not render. Controller
//! state is printed once a second so the motion is observable from the
//! terminal.

use std::sync::Arc;
use std::time::Instant;

use grove_engine::game::SceneLayout;
use grove_engine::player::MAX_FRAME_DT;
use grove_engine::{
    Camera, ControllerConfig, EnvironmentFrame, ThirdPersonController, Transform,
};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

struct ExploreApp {
    window: Option<Arc<Window>>,
    controller: ThirdPersonController,
    target: Transform,
    camera: Camera,
    scene: SceneLayout,
    last_frame: Instant,
    last_log: Instant,
}

impl ExploreApp {
    fn new() -> Self {
        let mut controller = ThirdPersonController::new(ControllerConfig::default())
            .expect("default controller config is valid");
        controller.set_on_jump(|| println!("* jump"));
        controller.set_on_movement_change(|moving| {
            println!("* {}", if moving { "moving" } else { "idle" });
        });

        let target = Transform::default();
        let mut app = Self {
            window: None,
            controller,
            target,
            camera: Camera::default(),
            scene: SceneLayout::default(),
            last_frame: Instant::now(),
            last_log: Instant::now(),
        };
        app.controller.snap_camera(&app.target);
        app
    }

    fn step(&mut self) {
        let now = Instant::now();
        // Caller-side dt clamp; the controller clamps again internally
        let dt = now.duration_since(self.last_frame).as_secs_f32().min(MAX_FRAME_DT);
        self.last_frame = now;

        let colliders = self.scene.tree_colliders();
        let env = EnvironmentFrame {
            ground_y: self.scene.ground_y,
            bounds_half_size: self.scene.bounds_half_size,
            tree_colliders: &colliders,
        };
        self.controller
            .update(dt, &mut self.target, &mut self.camera, &env);

        if now.duration_since(self.last_log).as_secs_f32() >= 1.0 {
            self.last_log = now;
            let p = self.target.position;
            println!(
                "pos ({:6.2}, {:5.2}, {:6.2})  speed {:4.2} m/s  {:?}  cam dist {:.2}",
                p.x,
                p.y,
                p.z,
                self.controller.velocity().length(),
                self.controller.ground_state(),
                self.controller.rig().distance,
            );
        }
    }
}

impl ApplicationHandler for ExploreApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = WindowAttributes::default()
                .with_title("Grove Walk - Explore [ESC: Exit]")
                .with_inner_size(PhysicalSize::new(1280, 720));
            let window = Arc::new(event_loop.create_window(attrs).unwrap());
            self.window = Some(window);
            self.last_frame = Instant::now();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.controller.dispose();
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if key == KeyCode::Escape && event.state == ElementState::Pressed {
                        self.controller.dispose();
                        event_loop.exit();
                        return;
                    }
                    self.controller
                        .handle_key(key, event.state == ElementState::Pressed);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.controller
                    .handle_pointer_button(button, state == ElementState::Pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.controller.handle_pointer_motion(position.x, position.y);
            }
            WindowEvent::CursorLeft { .. } => {
                self.controller.handle_pointer_cancel();
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.controller.handle_wheel(delta);
            }
            WindowEvent::Focused(false) => {
                self.controller.handle_focus_lost();
            }
            WindowEvent::RedrawRequested => {
                self.step();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() {
    println!("=====================================");
    println!("   Grove Walk - Explore");
    println!("=====================================");
    println!();
    println!("Controls: WASD Move, Shift Run, Space Jump");
    println!("Left-drag: Orbit camera, Wheel: Zoom, ESC: Exit");
    println!();

    let event_loop = EventLoop::new().unwrap();
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = ExploreApp::new();
    event_loop.run_app(&mut app).unwrap();
}
