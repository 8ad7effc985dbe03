//! Headless walkthrough of the gallery widgets.
//!
//! Lays out a photo pavement, hosts it in a drawer, then replays a scripted
//! touch stream and frame clock through the drawer the way a view host would.

use gallery_animation::Easing;
use gallery_foundation::{DrawerConfig, DrawerController, Interception, PointerEvent};
use gallery_ui_graphics::{EdgeInsets, Rect};
use gallery_ui_layout::{CellSpec, Constraints, PavementConfig, PavementHost, PavementLayout};

const DENSITY: f32 = 2.0;
const SCREEN_WIDTH: f32 = 1080.0;
const SCREEN_HEIGHT: f32 = 1920.0;
const FRAME_MS: i64 = 16;

/// Logs every measure and placement the pavement asks for.
struct LoggingHost;

impl PavementHost<&'static str> for LoggingHost {
    fn measure_child(&mut self, child: &&'static str, constraints: Constraints) {
        log::debug!(
            "measure {child}: {}x{}",
            constraints.max_width,
            constraints.max_height
        );
    }

    fn place_child(&mut self, child: &&'static str, bounds: Rect) {
        log::info!(
            "place {child} at ({}, {}) size {}x{}",
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height
        );
    }
}

fn photo_pavement() -> PavementLayout<&'static str> {
    let config = PavementConfig::with_density(DENSITY)
        .row_height(240.0)
        .spacing(8.0, 8.0)
        .padding(EdgeInsets::uniform(16.0));
    let mut pavement = PavementLayout::new(config);
    pavement.insert("sunrise", CellSpec::at(0, 0).with_span(2, 2));
    pavement.insert("harbour", CellSpec::at(2, 0));
    pavement.insert("market", CellSpec::at(2, 1));
    pavement.insert("ferry", CellSpec::at(0, 2));
    pavement.insert("lighthouse", CellSpec::at(1, 2).with_span(2, 1));
    pavement
}

/// Parent view routing: interception until the drawer claims the gesture.
fn dispatch(drawer: &mut DrawerController, claimed: &mut bool, event: PointerEvent) {
    if *claimed {
        *claimed = drawer.on_touch_event(&event);
    } else {
        let decision = drawer.on_intercept_touch_event(&event);
        *claimed = decision == Interception::Claimed;
        if !decision.is_handled() {
            log::debug!("{:?} at {:?} left for the pavement", event.kind, event.position);
        }
    }
    if drawer.take_invalidation() {
        println!(
            "  t={:>4}ms  drawer offset {:>8.1}",
            event.time_ms,
            drawer.scroll_offset()
        );
    }
}

/// Upward swipe from `start_y`, one move per frame, released at the end.
fn swipe_up(start_y: f32, distance: f32, steps: i64, t0: i64) -> Vec<PointerEvent> {
    let mut events = vec![PointerEvent::down(540.0, start_y, t0)];
    let step = distance / steps as f32;
    for i in 1..=steps {
        events.push(PointerEvent::moved(
            540.0,
            start_y - step * i as f32,
            t0 + i * FRAME_MS,
        ));
    }
    events.push(PointerEvent::up(
        540.0,
        start_y - distance,
        t0 + (steps + 1) * FRAME_MS,
    ));
    events
}

/// Sideways swipe the drawer must leave alone.
fn swipe_sideways(y: f32, t0: i64) -> Vec<PointerEvent> {
    vec![
        PointerEvent::down(900.0, y, t0),
        PointerEvent::moved(700.0, y + 4.0, t0 + FRAME_MS),
        PointerEvent::moved(400.0, y + 60.0, t0 + 2 * FRAME_MS),
        PointerEvent::up(300.0, y + 60.0, t0 + 3 * FRAME_MS),
    ]
}

fn main() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Gallery Drawer Demo ===");
    println!("Set RUST_LOG=debug to trace gesture and layout decisions.");
    println!();

    let mut pavement = photo_pavement();
    let size = pavement.layout(Constraints::loose(SCREEN_WIDTH, SCREEN_HEIGHT), &mut LoggingHost);
    println!(
        "pavement: {} columns of {:.1}px, content {}x{}",
        pavement.column_count(),
        pavement.column_width(),
        size.width,
        size.height
    );

    let mut drawer = DrawerController::new(DrawerConfig::with_density(DENSITY));
    drawer.set_viewport_height(SCREEN_HEIGHT);
    if let Err(err) = drawer.attach_child(size.height) {
        log::error!("{err}");
        return;
    }
    if let Err(err) = drawer.attach_child(120.0) {
        println!("second child rejected: {err}");
    }
    drawer.take_invalidation();
    println!(
        "drawer rests at offset {:.1} (edges {:.1}..{:.1})",
        drawer.scroll_offset(),
        drawer.top_edge(),
        drawer.bottom_edge()
    );

    let mut claimed = false;
    println!();
    println!("-- sideways swipe --");
    for event in swipe_sideways(1700.0, 0) {
        dispatch(&mut drawer, &mut claimed, event);
    }

    println!("-- upward swipe --");
    let script = swipe_up(1700.0, 600.0, 8, 200);
    let released_at = script.last().map_or(200, |event| event.time_ms);
    for event in script {
        dispatch(&mut drawer, &mut claimed, event);
    }

    println!(
        "-- fling at {:.1}px/s ({:?}) --",
        drawer.last_fling_velocity().unwrap_or_default(),
        Easing::default()
    );
    let mut time = released_at;
    loop {
        time += FRAME_MS;
        let more = drawer.compute_scroll(time);
        if drawer.take_invalidation() {
            println!("  t={time:>4}ms  drawer offset {:>8.1}", drawer.scroll_offset());
        }
        if !more {
            break;
        }
    }
    println!(
        "settled at offset {:.1} after {}ms",
        drawer.scroll_offset(),
        time - released_at
    );
}
