//! Vector drawing operator generation

use crate::canvas::Color;
use crate::{fmt_num, fmt_rgb};

/// Bezier circle approximation constant for rounded corners
const KAPPA: f64 = 0.5523;

/// Generate PDF operators for a filled rectangle
///
/// Coordinates are PDF coordinates (origin bottom-left, y up).
pub fn generate_fill_rect(x: f64, y: f64, w: f64, h: f64, color: Color) -> Vec<u8> {
    format!(
        "{} rg\n{} {} {} {} re\nf\n",
        fmt_rgb(color),
        fmt_num(x),
        fmt_num(y),
        fmt_num(w),
        fmt_num(h)
    )
    .into_bytes()
}

/// Generate PDF operators for a stroked rectangle
pub fn generate_stroke_rect(
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    color: Color,
    line_width: f64,
) -> Vec<u8> {
    format!(
        "{} RG\n{} w\n{} {} {} {} re\nS\n",
        fmt_rgb(color),
        fmt_num(line_width),
        fmt_num(x),
        fmt_num(y),
        fmt_num(w),
        fmt_num(h)
    )
    .into_bytes()
}

/// Generate PDF operators for a straight line
pub fn generate_line(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    color: Color,
    line_width: f64,
) -> Vec<u8> {
    format!(
        "{} RG\n{} w\n{} {} m\n{} {} l\nS\n",
        fmt_rgb(color),
        fmt_num(line_width),
        fmt_num(x1),
        fmt_num(y1),
        fmt_num(x2),
        fmt_num(y2)
    )
    .into_bytes()
}

/// Build the path operators for a rounded rectangle
///
/// The corner radius is clamped so two corners never overlap on a short edge.
fn round_rect_path(x: f64, y: f64, w: f64, h: f64, radius: f64) -> String {
    let r = radius.min(w / 2.0).min(h / 2.0);
    let k = KAPPA * r;

    let pt = |px: f64, py: f64| format!("{} {}", fmt_num(px), fmt_num(py));
    let curve = |p1: (f64, f64), p2: (f64, f64), end: (f64, f64)| {
        format!("{} {} {} c\n", pt(p1.0, p1.1), pt(p2.0, p2.1), pt(end.0, end.1))
    };

    let mut path = String::new();
    // Start on the bottom edge, just right of the bottom-left corner
    path.push_str(&format!("{} m\n", pt(x + r, y)));
    path.push_str(&format!("{} l\n", pt(x + w - r, y)));
    path.push_str(&curve((x + w - r + k, y), (x + w, y + r - k), (x + w, y + r)));
    path.push_str(&format!("{} l\n", pt(x + w, y + h - r)));
    path.push_str(&curve(
        (x + w, y + h - r + k),
        (x + w - r + k, y + h),
        (x + w - r, y + h),
    ));
    path.push_str(&format!("{} l\n", pt(x + r, y + h)));
    path.push_str(&curve((x + r - k, y + h), (x, y + h - r + k), (x, y + h - r)));
    path.push_str(&format!("{} l\n", pt(x, y + r)));
    path.push_str(&curve((x, y + r - k), (x + r - k, y), (x + r, y)));
    path
}

/// Generate PDF operators for a filled rounded rectangle
pub fn generate_fill_round_rect(
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    radius: f64,
    color: Color,
) -> Vec<u8> {
    format!(
        "{} rg\n{}f\n",
        fmt_rgb(color),
        round_rect_path(x, y, w, h, radius)
    )
    .into_bytes()
}

/// Generate PDF operators for a stroked rounded rectangle, optionally filled
/// with a background color first
pub fn generate_stroke_round_rect(
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    radius: f64,
    stroke: Color,
    fill: Option<Color>,
    line_width: f64,
) -> Vec<u8> {
    let path = round_rect_path(x, y, w, h, radius);
    let mut ops = String::new();
    if let Some(fill) = fill {
        ops.push_str(&format!("{} rg\n{path}f\n", fmt_rgb(fill)));
    }
    ops.push_str(&format!(
        "{} RG\n{} w\n{path}S\n",
        fmt_rgb(stroke),
        fmt_num(line_width)
    ));
    ops.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_operators() {
        let ops = generate_fill_rect(24.0, 24.0, 547.28, 14.0, Color::rgb(1.0, 0.0, 0.0));
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("1 0 0 rg"));
        assert!(ops_str.contains("24 24 547.28 14 re"));
        assert!(ops_str.ends_with("f\n"));
    }

    #[test]
    fn test_stroke_rect_operators() {
        let ops = generate_stroke_rect(24.0, 24.0, 100.0, 200.0, Color::black(), 1.2);
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("0 0 0 RG"));
        assert!(ops_str.contains("1.2 w"));
        assert!(ops_str.contains("24 24 100 200 re"));
        assert!(ops_str.ends_with("S\n"));
    }

    #[test]
    fn test_line_operators() {
        let ops = generate_line(38.0, 500.0, 557.0, 500.0, Color::black(), 1.1);
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("38 500 m"));
        assert!(ops_str.contains("557 500 l"));
        assert!(ops_str.ends_with("S\n"));
    }

    #[test]
    fn test_round_rect_path_closed() {
        let path = round_rect_path(0.0, 0.0, 100.0, 50.0, 10.0);
        // Four corner curves and four edges
        assert_eq!(path.matches(" c\n").count(), 4);
        assert_eq!(path.matches(" l\n").count(), 4);
        assert_eq!(path.matches(" m\n").count(), 1);
    }

    #[test]
    fn test_round_rect_radius_clamped() {
        // Radius larger than half the height must not produce a negative edge
        let path = round_rect_path(0.0, 0.0, 100.0, 10.0, 30.0);
        assert!(!path.contains("-"));
    }

    #[test]
    fn test_stroke_round_rect_with_fill() {
        let ops = generate_stroke_round_rect(
            10.0,
            10.0,
            300.0,
            56.0,
            10.0,
            Color::black(),
            Some(Color::white()),
            1.0,
        );
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("1 1 1 rg"));
        assert!(ops_str.contains("0 0 0 RG"));
        // Fill pass comes before the stroke pass
        assert!(ops_str.find("f\n").unwrap() < ops_str.find("S\n").unwrap());
    }
}
