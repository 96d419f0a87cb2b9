//! Pattern properties over many display sizes

use mouse_mover::{Canvas, Pattern, Point, ScreenSize};

const WIDTHS: [u32; 8] = [1, 3, 19, 20, 21, 800, 1366, 3840];
const HEIGHTS: [f64; 4] = [1.0, 50.0, 374.0, 1070.0];

#[test]
fn sine_wave_covers_every_column_once() {
    for width in WIDTHS {
        for height in HEIGHTS {
            let points: Vec<Point> = Pattern::SineWave.points(Canvas::new(width, height)).collect();
            assert_eq!(points.len(), width as usize);
            let xs: Vec<i32> = points.iter().map(|p| p.x).collect();
            let expected: Vec<i32> = (0..width as i32).collect();
            assert_eq!(xs, expected);
        }
    }
}

#[test]
fn zigzag_count_and_parity() {
    for width in WIDTHS {
        for height in HEIGHTS {
            let points: Vec<Point> = Pattern::Zigzag.points(Canvas::new(width, height)).collect();
            assert_eq!(points.len(), width.div_ceil(20) as usize);
            for (i, p) in points.iter().enumerate() {
                let expected = if i % 2 == 0 { height - 20.0 } else { height + 20.0 };
                assert_eq!(p.y, expected as i32);
                assert_eq!(p.x, (i * 20) as i32);
            }
        }
    }
}

#[test]
fn circle_always_has_360_points() {
    for width in WIDTHS {
        for height in HEIGHTS {
            assert_eq!(Pattern::Circle.points(Canvas::new(width, height)).count(), 360);
        }
    }
}

#[test]
fn circle_quarter_points_for_full_hd() {
    let canvas = Canvas::from_screen(ScreenSize::new(1920, 1080), 10);
    let points: Vec<Point> = Pattern::Circle.points(canvas).collect();
    // center (960, 530), radius 265
    assert_eq!(points[0], Point::new(1225, 530));
    assert_eq!(points[90], Point::new(960, 795));
}
