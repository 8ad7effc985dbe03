//! End-to-end drawer test: a host dispatches raw pointer streams the way a
//! parent view does (interception first, then direct delivery once claimed)
//! and drives frames until the fling settles.

use gallery_foundation::{DrawerConfig, DrawerController, Interception, PointerEvent};

/// Parent view hosting a drawer over a horizontally swiping child.
struct Host {
    drawer: DrawerController,
    claimed: bool,
    /// Events the drawer left for the child.
    child_events: Vec<PointerEvent>,
    repaints: usize,
}

impl Host {
    fn new(viewport: f32, content: f32) -> Self {
        let mut drawer = DrawerController::new(DrawerConfig::default());
        drawer.set_viewport_height(viewport);
        drawer.attach_child(content).expect("single child");
        drawer.take_invalidation();
        Self {
            drawer,
            claimed: false,
            child_events: Vec::new(),
            repaints: 0,
        }
    }

    fn dispatch(&mut self, event: PointerEvent) {
        if self.claimed {
            self.claimed = self.drawer.on_touch_event(&event);
        } else {
            match self.drawer.on_intercept_touch_event(&event) {
                Interception::Claimed => self.claimed = true,
                Interception::Observing | Interception::Yielded => self.child_events.push(event),
            }
        }
        if self.drawer.take_invalidation() {
            self.repaints += 1;
        }
    }

    /// Runs frames every 16ms after `from_ms`. Returns the number of frames.
    fn run_frames(&mut self, from_ms: i64) -> usize {
        let mut frames = 0;
        let mut time = from_ms;
        loop {
            time += 16;
            frames += 1;
            let more = self.drawer.compute_scroll(time);
            if self.drawer.take_invalidation() {
                self.repaints += 1;
            }
            if !more || frames > 1_000 {
                return frames;
            }
        }
    }
}

#[test]
fn upward_swipe_opens_drawer_with_fling() {
    let mut host = Host::new(1000.0, 1000.0);
    assert_eq!(host.drawer.scroll_offset(), -800.0);

    host.dispatch(PointerEvent::down(200.0, 900.0, 0));
    let mut y = 900.0;
    for step in 1..=6 {
        y -= 40.0;
        host.dispatch(PointerEvent::moved(200.0, y, step * 10));
    }
    assert!(host.claimed);
    assert!(host.drawer.is_tracking());
    // Only the press reached the child; the first move crossed slop.
    assert_eq!(host.child_events.len(), 1);

    host.dispatch(PointerEvent::up(200.0, y, 70));
    assert!(!host.claimed);
    assert!(host.drawer.is_flinging());

    let frames = host.run_frames(70);
    assert!(frames > 1);
    assert!(!host.drawer.is_flinging());
    assert!(host.drawer.top_position() < 700.0);
    assert!(host.drawer.top_position() >= host.drawer.top_edge());
    assert!(host.repaints >= frames.min(2));
}

#[test]
fn horizontal_swipe_reaches_child() {
    let mut host = Host::new(1000.0, 1000.0);

    host.dispatch(PointerEvent::down(100.0, 900.0, 0));
    host.dispatch(PointerEvent::moved(130.0, 902.0, 10));
    host.dispatch(PointerEvent::moved(200.0, 960.0, 20));
    host.dispatch(PointerEvent::up(260.0, 960.0, 30));

    assert!(!host.claimed);
    assert_eq!(host.child_events.len(), 4);
    assert_eq!(host.drawer.top_position(), 800.0);
    assert_eq!(host.repaints, 0);
    assert!(!host.drawer.is_flinging());
}

#[test]
fn new_press_catches_fling_mid_flight() {
    let mut host = Host::new(2000.0, 2000.0);

    host.dispatch(PointerEvent::down(0.0, 1900.0, 0));
    for step in 1..=5 {
        host.dispatch(PointerEvent::moved(0.0, 1900.0 - 60.0 * step as f32, step * 8));
    }
    host.dispatch(PointerEvent::up(0.0, 1600.0, 48));
    assert!(host.drawer.is_flinging());

    assert!(host.drawer.compute_scroll(64));
    let caught_at = host.drawer.top_position();

    host.dispatch(PointerEvent::down(0.0, 1000.0, 70));
    assert!(!host.drawer.is_flinging());
    assert_eq!(host.drawer.top_position(), caught_at);

    host.dispatch(PointerEvent::up(0.0, 1000.0, 80));
    assert_eq!(host.run_frames(80), 1);
    assert_eq!(host.drawer.top_position(), caught_at);
}
