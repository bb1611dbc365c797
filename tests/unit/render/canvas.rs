use super::*;

#[test]
fn new_canvas_is_black_and_sized() {
    let c = Canvas::new(4, 3);
    assert_eq!((c.width(), c.height()), (4, 3));
    assert_eq!(c.data().len(), 4 * 3 * 3);
    assert!(c.data().iter().all(|&b| b == 0));
}

#[test]
fn set_and_get_pixel_row_major() {
    let mut c = Canvas::new(4, 3);
    c.set_pixel(2, 1, Rgb8::new(1, 2, 3));
    assert_eq!(c.pixel(2, 1), Some(Rgb8::new(1, 2, 3)));
    let i = (4 + 2) * 3;
    assert_eq!(&c.data()[i..i + 3], &[1, 2, 3]);
}

#[test]
fn out_of_bounds_access_is_ignored() {
    let mut c = Canvas::new(2, 2);
    c.set_pixel(2, 0, Rgb8::WHITE);
    c.set_pixel(0, 9, Rgb8::WHITE);
    assert!(c.data().iter().all(|&b| b == 0));
    assert_eq!(c.pixel(2, 0), None);
}

#[test]
fn fill_span_is_half_open_and_clipped() {
    let mut c = Canvas::new(4, 4);
    c.fill_span(1, 2, 9, 9, Rgb8::WHITE);
    for y in 0..4 {
        for x in 0..4 {
            let expect = if x >= 1 && y >= 2 {
                Rgb8::WHITE
            } else {
                Rgb8::BLACK
            };
            assert_eq!(c.pixel(x, y), Some(expect), "({x},{y})");
        }
    }
}

#[test]
fn empty_span_draws_nothing() {
    let mut c = Canvas::new(4, 4);
    c.fill_span(3, 0, 3, 4, Rgb8::WHITE);
    c.fill_span(0, 5, 4, 9, Rgb8::WHITE);
    assert!(c.data().iter().all(|&b| b == 0));
}

#[test]
fn converts_to_image_buffer() {
    let mut c = Canvas::new(3, 2);
    c.set_pixel(1, 1, Rgb8::new(9, 8, 7));
    let img = c.to_image().unwrap();
    assert_eq!(img.dimensions(), (3, 2));
    assert_eq!(img.get_pixel(1, 1).0, [9, 8, 7]);
}
