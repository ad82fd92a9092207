//! SVG backend.

use crate::plot::Axes;
use crate::plot::Color;
use crate::plot::Viewport;
use std::io;

/// Writes `axes` as a `width`x`height` SVG document.
///
/// Wrapping `w` in a [`std::io::BufWriter`] is recommended.
pub fn write<W>(mut w: W, axes: &Axes, width: f64, height: f64) -> io::Result<()>
where
    W: io::Write,
{
    let transform = axes.transform(Viewport::new(0.0, 0.0, width, height));

    writeln!(
        w,
        r#"<svg viewBox="0 0 {width} {height}" width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">"#,
    )?;
    writeln!(
        w,
        r#"<rect width="{width}" height="{height}" fill="{}"/>"#,
        Color::WHITE,
    )?;

    for line in axes.lines() {
        if line.segments().is_empty() {
            continue;
        }
        write!(
            w,
            r#"<path fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" d=""#,
            line.color(),
            line.width(),
        )?;
        for [p1, p2] in line.segments() {
            let p1 = transform.apply(*p1);
            let p2 = transform.apply(*p2);
            write!(w, "M{},{} L{},{} ", p1.x, p1.y, p2.x, p2.y)?;
        }
        writeln!(w, "\"/>")?;
    }

    writeln!(w, "</svg>")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(axes: &Axes) -> String {
        let mut buf = Vec::new();
        write(&mut buf, axes, 640.0, 480.0).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn one_triangle() {
        let points = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
        let axes = Axes::new().triplot(&points, &[[0, 1, 2]]).unwrap();
        let svg = render(&axes);

        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<path ").count(), 1);
        assert_eq!(svg.matches('M').count(), 3);
        assert!(svg.contains(r##"stroke="#1f77b4""##));
    }

    #[test]
    fn empty_lines_are_skipped() {
        let axes = Axes::new().triplot(&[], &[]).unwrap();
        let svg = render(&axes);
        assert_eq!(svg.matches("<path ").count(), 0);
    }

    #[test]
    fn segments_stay_in_viewport() {
        let points = [[-3.0, 10.0], [7.0, 12.0], [0.0, 40.0]];
        let axes = Axes::new().triplot(&points, &[[0, 1, 2]]).unwrap();
        let svg = render(&axes);
        let d = svg
            .split(" d=\"")
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .unwrap();
        for coords in d.split(|c| c == 'M' || c == 'L' || c == ' ') {
            if coords.is_empty() {
                continue;
            }
            let (x, y) = coords.split_once(',').unwrap();
            let x: f64 = x.parse().unwrap();
            let y: f64 = y.parse().unwrap();
            assert!((0.0..=640.0).contains(&x), "x = {x}");
            assert!((0.0..=480.0).contains(&y), "y = {y}");
        }
    }
}
