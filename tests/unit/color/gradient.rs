use super::*;

fn close(a: Color, b: Color) -> bool {
    (a.r - b.r).abs() < 1e-9 && (a.g - b.g).abs() < 1e-9 && (a.b - b.b).abs() < 1e-9
}

#[test]
fn endpoints_return_stop_colors() {
    let c1 = Color::rgb(10.0, 200.0, 33.0);
    let c2 = Color::rgb(250.0, 0.0, 99.0);
    assert_eq!(lerp(c1, c2, 0.0), c1);
    assert!(close(lerp(c1, c2, 1.0), c2));
    assert_eq!(interpolate(c1, c2, 0.0, 640.0), c1);
    assert!(close(interpolate(c1, c2, 640.0, 640.0), c2));
}

#[test]
fn midpoint_is_channel_average() {
    let m = lerp(Color::BLACK, Color::WHITE, 0.5);
    assert!(close(m, Color::rgb(127.5, 127.5, 127.5)));
}

#[test]
fn horizontal_gradient_ignores_y() {
    let g = LinearGradient::new(Color::BLACK, Color::WHITE, GradientAxis::LeftToRight, 100, 50);
    assert_eq!(g.axis(), GradientAxis::LeftToRight);
    assert_eq!(g.color_at(25.0, 0.0), g.color_at(25.0, 49.0));
    assert!(close(g.color_at(25.0, 7.0), Color::rgb(63.75, 63.75, 63.75)));
}

#[test]
fn vertical_gradient_normalizes_by_height() {
    let g = LinearGradient::new(Color::BLACK, Color::WHITE, GradientAxis::TopToBottom, 100, 50);
    assert_eq!(g.color_at(0.0, 25.0), g.color_at(99.0, 25.0));
    // Halfway down a 50px canvas is the midpoint, not a quarter of the way.
    assert!(close(g.color_at(0.0, 25.0), Color::rgb(127.5, 127.5, 127.5)));
}

#[test]
fn equal_stops_are_solid() {
    let g = LinearGradient::horizontal(Color::WHITE, Color::WHITE, 100);
    assert!(g.is_solid());
    for x in [0.0, 33.0, 99.0] {
        assert_eq!(g.color_at(x, 0.0), Color::WHITE);
    }
    assert!(!LinearGradient::horizontal(Color::BLACK, Color::WHITE, 100).is_solid());
}
