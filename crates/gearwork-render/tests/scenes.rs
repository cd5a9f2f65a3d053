//! Built-in scenes: gear relationships, layout, and drawing to a buffer.

use gearwork_core::{GearId, ProfileCache, angles, equivalent_degrees};
use gearwork_render::{ClockRenderer, Scene};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};

fn rotation(scene: &Scene, t: f64, id: &str) -> f64 {
    scene
        .train()
        .rotations(t)
        .unwrap()
        .get(&GearId::from(id))
        .unwrap_or_else(|| panic!("no gear {id}"))
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn skeleton_hand_gears_follow_the_hands() {
    let scene = Scene::skeleton_face().unwrap();
    for t in [0.0, 59.0, 3600.0, 45_000.0, -120.0] {
        let hands = angles(t);
        assert_eq!(rotation(&scene, t, "seconds"), hands.seconds);
        assert_eq!(rotation(&scene, t, "minutes"), hands.minutes);
        assert_eq!(rotation(&scene, t, "hours"), hands.hours);
    }
}

#[test]
fn skeleton_idler_counter_rotates_at_twice_minutes() {
    let scene = Scene::skeleton_face().unwrap();
    for t in [1.0, 600.0, 45_000.0] {
        let minutes = rotation(&scene, t, "minutes");
        assert_eq!(rotation(&scene, t, "idler"), -2.0 * minutes);
    }
}

#[test]
fn mechanism_pinions_reverse_their_drivers() {
    let scene = Scene::mechanism().unwrap();
    let t = 20.0;
    let seconds = rotation(&scene, t, "seconds");
    let minutes = rotation(&scene, t, "minutes");
    assert_eq!(rotation(&scene, t, "pinion-seconds"), -seconds * 12.0 / 8.0);
    assert_eq!(rotation(&scene, t, "pinion-minutes"), -minutes * 24.0 / 8.0);
}

#[test]
fn gears_stay_inside_viewport() {
    let cache = ProfileCache::new();
    for scene in [Scene::skeleton_face().unwrap(), Scene::mechanism().unwrap()] {
        for t in [0.0, 7.3, 1234.5, 86_400.0 * 2.5] {
            for gear in scene.frame(t, &cache).unwrap() {
                for p in &gear.points {
                    assert!(p.x >= 0.0 && p.x <= scene.width(), "{} x={}", gear.id, p.x);
                    assert!(p.y >= 0.0 && p.y <= scene.height(), "{} y={}", gear.id, p.y);
                }
            }
        }
    }
}

#[test]
fn frames_are_periodic_in_rotation() {
    let scene = Scene::skeleton_face().unwrap();
    let cache = ProfileCache::new();
    let a = scene.frame(30.0, &cache).unwrap();
    let b = scene.frame(30.0 + 43_200.0, &cache).unwrap();
    for (x, y) in a.iter().zip(&b) {
        assert!(equivalent_degrees(x.rotation, y.rotation, 1e-6), "{}", x.id);
        for (p, q) in x.points.iter().zip(&y.points) {
            assert!((p.x - q.x).abs() < 1e-6 && (p.y - q.y).abs() < 1e-6);
        }
    }
}

#[test]
fn renders_face_with_numerals() {
    let renderer = ClockRenderer::new().unwrap();
    let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
    for skeleton in [false, true] {
        terminal
            .draw(|frame| renderer.render_face(frame, frame.area(), 45_000.0, skeleton, Color::Cyan))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("12"));
        assert!(text.chars().any(|c| ('\u{2801}'..='\u{28FF}').contains(&c)));
    }
    // Gear profiles only generate for the see-through dial
    assert_eq!(renderer.cache().len(), 4);
}

#[test]
fn renders_mechanism_labels() {
    let renderer = ClockRenderer::new().unwrap();
    let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
    terminal
        .draw(|frame| renderer.render_mechanism(frame, frame.area(), 12.0, Color::Cyan))
        .unwrap();
    let text = buffer_text(terminal.backend().buffer());
    for label in ["SECONDS", "MINUTES", "HOURS", "slows down", "slows again", "How it works"] {
        assert!(text.contains(label), "missing {label}");
    }
}

#[test]
fn mechanism_flow_arrows_sit_below_the_gears() {
    let renderer = ClockRenderer::new().unwrap();
    let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
    terminal
        .draw(|frame| renderer.render_mechanism(frame, frame.area(), 0.0, Color::Cyan))
        .unwrap();
    let text = buffer_text(terminal.backend().buffer());
    let rows: Vec<&str> = text.lines().collect();
    let row_of = |needle: &str| rows.iter().position(|row| row.contains(needle)).unwrap();
    // Gear labels sit above their gears, the reduction arrows below them
    assert!(row_of("slows down") > row_of("SECONDS"));
    assert!(row_of("slows down") > rows.len() / 2);
    assert!(row_of("How it works") < row_of("HOURS"));
}

#[test]
fn tiny_area_does_not_panic() {
    let renderer = ClockRenderer::new().unwrap();
    let mut terminal = Terminal::new(TestBackend::new(3, 1)).unwrap();
    terminal
        .draw(|frame| {
            renderer.render_face(frame, frame.area(), 1.0, true, Color::Cyan);
            renderer.render_mechanism(frame, frame.area(), 1.0, Color::Cyan);
        })
        .unwrap();
}
