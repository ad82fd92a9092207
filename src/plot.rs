//! Axes, artists and the mapping from data to screen coordinates.
//!
//! An [`Axes`] is an explicit plotting context: drawing operations take it
//! by value and hand it back, updated, so that several plots can be built
//! side by side without any shared state.
//!
//! ```
//! # use meshplot::plot::Axes;
//! let points = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
//! let axes = Axes::new().triplot(&points, &[[0, 1, 2]]).unwrap();
//! assert_eq!(axes.lines()[0].segments().len(), 3);
//! ```

use crate::geometry::BoundingBox;
use crate::geometry::Point2D;
use crate::mesh;
use std::fmt;

/// Fraction of the data extent left blank on each side of the view.
pub const MARGIN: f64 = 0.05;

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLUE: Color = Color::rgb(0x1f, 0x77, 0xb4);
    pub const RED: Color = Color::rgb(0xd6, 0x27, 0x28);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// How the axes scale their x and y units against each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Aspect {
    /// Each axis is stretched to fill the viewport.
    Auto,
    /// One unit on x is drawn as long as one unit on y.
    #[default]
    Equal,
}

/// A set of line segments drawn with the same stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    segments: Vec<[Point2D; 2]>,
    color: Color,
    width: f64,
}

impl Line {
    pub fn new(segments: Vec<[Point2D; 2]>, color: Color, width: f64) -> Self {
        Self {
            segments,
            color,
            width,
        }
    }

    pub fn segments(&self) -> &[[Point2D; 2]] {
        &self.segments
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Stroke width, in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A triangle references a point that does not exist.
    IndexOutOfRange {
        triangle: usize,
        index: i64,
        point_count: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfRange {
                triangle,
                index,
                point_count,
            } => write!(
                f,
                "triangle {triangle}: index {index} is out of range for {point_count} points",
            ),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// Converts signed triangle indices into positions in a list of
/// `point_count` points.
///
/// Fails on the first index that is negative or not lower than
/// `point_count`, before anything is drawn.
pub fn checked_triangles(
    triangles: &[[i64; 3]],
    point_count: usize,
) -> Result<Vec<[usize; 3]>> {
    triangles
        .iter()
        .enumerate()
        .map(|(triangle, nodes)| {
            let mut checked = [0; 3];
            for (c, &index) in checked.iter_mut().zip(nodes) {
                *c = usize::try_from(index)
                    .ok()
                    .filter(|i| *i < point_count)
                    .ok_or(Error::IndexOutOfRange {
                        triangle,
                        index,
                        point_count,
                    })?;
            }
            Ok(checked)
        })
        .collect()
}

/// A rectangle on screen, in pixels, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Maps data coordinates (y up) to viewport coordinates (y down).
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    view: BoundingBox,
    viewport: Viewport,
}

impl Transform {
    pub fn new(view: BoundingBox, viewport: Viewport) -> Self {
        Self { view, viewport }
    }

    /// The data-space rectangle covered by the viewport.
    pub fn view(&self) -> &BoundingBox {
        &self.view
    }

    pub fn apply(&self, p: Point2D) -> Point2D {
        let min = self.view.p_min();
        let max = self.view.p_max();
        let x = self.viewport.left + (p.x - min.x) / self.view.width() * self.viewport.width;
        let y = self.viewport.top + (max.y - p.y) / self.view.height() * self.viewport.height;
        Point2D::new(x, y)
    }
}

/// An explicit plotting context: a list of artists and the way they are
/// laid out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Axes {
    aspect: Aspect,
    lines: Vec<Line>,
    data_limits: Option<BoundingBox>,
}

impl Axes {
    /// Empty axes with an equal aspect.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_aspect(mut self, aspect: Aspect) -> Self {
        self.aspect = aspect;
        self
    }

    pub fn aspect(&self) -> Aspect {
        self.aspect
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Adds a line artist and extends the data limits to cover it.
    pub fn add_line(mut self, line: Line) -> Self {
        let line_limits =
            BoundingBox::from_points(line.segments.iter().flatten().copied().collect::<Vec<_>>());
        self.extend_limits(line_limits);
        self.lines.push(line);
        self
    }

    fn extend_limits(&mut self, limits: Option<BoundingBox>) {
        self.data_limits = match (self.data_limits, limits) {
            (Some(current), Some(new)) => Some(current.union(&new)),
            (current, None) => current,
            (None, new) => new,
        };
    }

    /// Draws the edges of a triangulation, each shared edge once.
    ///
    /// `triangles` holds zero-based indices into `points`. The data limits
    /// grow to cover every point, referenced or not.
    #[tracing::instrument(skip_all, fields(points = points.len(), triangles = triangles.len()))]
    pub fn triplot(self, points: &[[f64; 2]], triangles: &[[i64; 3]]) -> Result<Self> {
        let triangles = checked_triangles(triangles, points.len())?;
        let edges = mesh::unique_edges(&triangles);
        Ok(self.edges(points, &edges, Color::BLUE, 1.0))
    }

    /// Draws the edges that belong to a single triangle.
    #[tracing::instrument(skip_all, fields(points = points.len(), triangles = triangles.len()))]
    pub fn boundary(self, points: &[[f64; 2]], triangles: &[[i64; 3]]) -> Result<Self> {
        let triangles = checked_triangles(triangles, points.len())?;
        let edges = mesh::boundary_edges(&triangles);
        Ok(self.edges(points, &edges, Color::RED, 2.0))
    }

    fn edges(mut self, points: &[[f64; 2]], edges: &[mesh::Edge], color: Color, width: f64) -> Self {
        let segments: Vec<[Point2D; 2]> = edges
            .iter()
            .map(|[n1, n2]| [Point2D::from(points[*n1]), Point2D::from(points[*n2])])
            .collect();
        tracing::debug!(segments = segments.len(), "adding line");
        let point_limits = BoundingBox::from_points(
            points
                .iter()
                .map(|p| Point2D::from(*p))
                .collect::<Vec<_>>(),
        );
        self.extend_limits(point_limits);
        self.add_line(Line::new(segments, color, width))
    }

    /// Returns the smallest box containing all the data, if any.
    pub fn data_limits(&self) -> Option<BoundingBox> {
        self.data_limits
    }

    /// Returns the data-space rectangle to show in a viewport of the given
    /// size.
    ///
    /// The data limits are padded by [`MARGIN`] and, with an equal aspect,
    /// widened along one axis to match the viewport ratio. Without data, the
    /// unit square is shown.
    pub fn view_limits(&self, width: f64, height: f64) -> BoundingBox {
        let limits = match self.data_limits {
            Some(limits) => limits.padded(MARGIN),
            None => BoundingBox::from_coords(Point2D::new(0.0, 0.0), Point2D::new(1.0, 1.0)),
        };
        if self.aspect == Aspect::Equal && width > 0.0 && height > 0.0 {
            limits.with_aspect_ratio(height / width)
        } else {
            limits
        }
    }

    pub fn transform(&self, viewport: Viewport) -> Transform {
        let view = self.view_limits(viewport.width, viewport.height);
        tracing::trace!(?view, ?viewport, "computed view limits");
        Transform::new(view, viewport)
    }
}
