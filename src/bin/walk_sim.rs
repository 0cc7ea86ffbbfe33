//! Walk Sim - Headless Controller Trace
//!
//! Run with: `cargo run --bin walk-sim`
//!
//! Drives the controller through a fixed input script at 60 steps per second
//! and prints the resulting motion: walk, sprint, a camera drag, a jump, a
//! head-on tree collision with a slide around it, and a shove against the
//! world edge. Useful as a smoke test of the whole per-frame pipeline
//! without opening a window.

use glam::Vec2;
use grove_engine::game::{SceneLayout, TreeInstance};
use grove_engine::{
    Camera, ControllerConfig, EnvironmentFrame, ThirdPersonController, Transform,
};
use winit::event::{MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

const DT: f32 = 1.0 / 60.0;
const TOTAL_FRAMES: u32 = 900; // 15 seconds

fn scripted_scene() -> SceneLayout {
    // A small pen: one tree dead ahead of the spawn, a near world edge
    SceneLayout {
        ground_y: 0.0,
        bounds_half_size: 12.0,
        trees: vec![TreeInstance {
            position: Vec2::new(0.0, -6.0),
            trunk_radius: 0.5,
            height: 7.0,
        }],
    }
}

fn apply_script(frame: u32, controller: &mut ThirdPersonController) {
    match frame {
        // Walk forward into the tree
        0 => controller.handle_key(KeyCode::KeyW, true),
        // Sprint briefly
        120 => controller.handle_key(KeyCode::ShiftLeft, true),
        180 => controller.handle_key(KeyCode::ShiftLeft, false),
        // Strafe to slide around the trunk
        200 => controller.handle_key(KeyCode::KeyD, true),
        290 => controller.handle_key(KeyCode::KeyD, false),
        // Jump while still walking
        300 => controller.handle_key(KeyCode::Space, true),
        310 => controller.handle_key(KeyCode::Space, false),
        // Keep pushing until the world edge stops us, then let go
        600 => controller.handle_key(KeyCode::KeyW, false),
        // Drag the camera a quarter turn and zoom out
        660 => controller.handle_pointer_button(MouseButton::Left, true),
        661 => controller.handle_pointer_motion(400.0, 300.0),
        662..=692 => controller.handle_pointer_motion(400.0 + (frame - 661) as f64 * 10.0, 300.0),
        693 => controller.handle_pointer_button(MouseButton::Left, false),
        700 => controller.handle_wheel(MouseScrollDelta::LineDelta(0.0, 2.0)),
        // Walk off along the new camera heading
        720 => controller.handle_key(KeyCode::KeyW, true),
        860 => controller.handle_key(KeyCode::KeyW, false),
        _ => {}
    }
}

fn main() {
    println!("=====================================");
    println!("   Grove Walk - Headless Trace");
    println!("=====================================");
    println!();

    let scene = scripted_scene();
    let mut controller = ThirdPersonController::new(ControllerConfig::default())
        .expect("default controller config is valid");
    controller.set_on_jump(|| println!("          * jump"));
    controller.set_on_movement_change(|moving| {
        println!("          * {}", if moving { "moving" } else { "idle" });
    });

    let mut target = Transform::default();
    let mut camera = Camera::default();
    controller.snap_camera(&target);

    for frame in 0..TOTAL_FRAMES {
        apply_script(frame, &mut controller);

        let colliders = scene.tree_colliders();
        let env = EnvironmentFrame {
            ground_y: scene.ground_y,
            bounds_half_size: scene.bounds_half_size,
            tree_colliders: &colliders,
        };
        controller.update(DT, &mut target, &mut camera, &env);

        if frame % 30 == 0 {
            let p = target.position;
            println!(
                "t {:5.2}s  pos ({:6.2}, {:5.2}, {:6.2})  speed {:4.2}  {:?}",
                frame as f32 * DT,
                p.x,
                p.y,
                p.z,
                controller.velocity().length(),
                controller.ground_state(),
            );
        }
    }

    let p = target.position;
    println!();
    println!("final position ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z);
    println!("camera yaw {:.2} rad, distance {:.2}", controller.rig().yaw, controller.rig().distance);
    controller.dispose();
    println!("controller disposed: {}", controller.is_disposed());
}
