//! Headless drive of the panel controller.
//!
//! Feeds a scripted input stream through the controller the way a hosting
//! event loop would: pointer-move/up events are only routed while a gesture
//! is active, and key presses run through the hidden-sequence detector.
//!
//! Run: `cargo run -p glasspane-window --example headless`

use glasspane_core::event::{KeyEvent, PointerButton, PointerEvent, PointerPhase};
use glasspane_core::geometry::Extent;
use glasspane_core::sequence::SequenceDetector;
use glasspane_window::{ResizeGrip, WindowConfig, WindowController};

fn main() {
    let viewport = Extent::new(1280.0, 720.0);
    let mut panel = WindowController::open(WindowConfig::default(), viewport);
    panel.set_on_close(|| println!("host: close requested"));

    // Drag the titlebar: down starts the gesture, moves are routed only
    // while the controller reports one active, up ends it.
    let drag_script = [
        PointerEvent::new(PointerPhase::Down(PointerButton::Left), 150.0, 110.0),
        PointerEvent::new(PointerPhase::Moved, 300.0, 200.0),
        PointerEvent::new(PointerPhase::Moved, 520.0, 340.0),
        PointerEvent::new(PointerPhase::Up(PointerButton::Left), 520.0, 340.0),
    ];
    for event in drag_script {
        match event.phase {
            PointerPhase::Down(PointerButton::Left) => panel.begin_drag(event.point()),
            PointerPhase::Moved if panel.is_gesture_active() => panel.update_drag(event.point()),
            PointerPhase::Up(_) => panel.end_drag(),
            _ => {}
        }
    }
    println!("after drag:   {:?}", panel.frame());

    // Resize from the bottom-right corner.
    panel.begin_resize(panel.position().translated(320.0, 400.0), ResizeGrip::BottomRight);
    panel.update_resize(panel.position().translated(500.0, 520.0));
    panel.end_resize();
    println!("after resize: {:?}", panel.frame());

    // Mode transitions.
    panel.minimize();
    println!("minimized:    {:?}", panel.frame());
    panel.restore_from_minimize();
    panel.maximize();
    println!("maximized:    {:?}", panel.frame());
    panel.on_viewport_resize(Extent::new(1024.0, 600.0));
    panel.restore_from_maximize();
    println!("restored:     {:?}", panel.frame());

    // The hidden unlock sequence maximizes the panel when completed.
    let mut detector = SequenceDetector::konami();
    let code_keys = detector.target().to_vec();
    let unlocked = code_keys
        .into_iter()
        .any(|code| detector.process(&KeyEvent::new(code)));
    if unlocked {
        panel.maximize();
        println!("unlocked:     {:?}", panel.frame());
    }

    panel.close();
}
