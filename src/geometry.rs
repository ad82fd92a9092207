//! A few useful geometric types

use nalgebra::Vector2;
use rayon::prelude::*;

pub type Point2D = Vector2<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    p_min: Point2D,
    p_max: Point2D,
}

impl BoundingBox {
    /// # Panics
    ///
    /// Panics if `p_min` is greater than `p_max` on any axis.
    pub fn from_coords(p_min: Point2D, p_max: Point2D) -> Self {
        assert!(
            p_min.x <= p_max.x && p_min.y <= p_max.y,
            "p_min must be lower than p_max",
        );
        Self { p_min, p_max }
    }

    /// Returns the smallest box containing all the given points, or `None`
    /// if there are no points.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoParallelIterator<Item = Point2D>,
    {
        points
            .into_par_iter()
            .fold_with(None, |bb: Option<Self>, p| {
                Some(match bb {
                    Some(bb) => bb.union_point(p),
                    None => Self { p_min: p, p_max: p },
                })
            })
            .reduce_with(|left, right| match (left, right) {
                (Some(left), Some(right)) => Some(left.union(&right)),
                (left, None) => left,
                (None, right) => right,
            })
            .flatten()
    }

    pub fn p_min(&self) -> &Point2D {
        &self.p_min
    }

    pub fn p_max(&self) -> &Point2D {
        &self.p_max
    }

    pub fn width(&self) -> f64 {
        self.p_max.x - self.p_min.x
    }

    pub fn height(&self) -> f64 {
        self.p_max.y - self.p_min.y
    }

    pub fn center(&self) -> Point2D {
        (self.p_min + self.p_max) / 2.0
    }

    pub fn contains(&self, p: &Point2D) -> bool {
        self.p_min.x <= p.x && p.x <= self.p_max.x && self.p_min.y <= p.y && p.y <= self.p_max.y
    }

    pub fn union(&self, other: &Self) -> Self {
        Self {
            p_min: self.p_min.inf(&other.p_min),
            p_max: self.p_max.sup(&other.p_max),
        }
    }

    fn union_point(self, p: Point2D) -> Self {
        Self {
            p_min: self.p_min.inf(&p),
            p_max: self.p_max.sup(&p),
        }
    }

    /// Grows each side by `margin` times the box extent along that axis.
    ///
    /// Axes along which the box is flat grow by `0.5` on each side instead,
    /// so that the result always has a non-zero area.
    pub fn padded(&self, margin: f64) -> Self {
        let pad = |extent: f64| if extent > 0.0 { margin * extent } else { 0.5 };
        let d = Point2D::new(pad(self.width()), pad(self.height()));
        Self {
            p_min: self.p_min - d,
            p_max: self.p_max + d,
        }
    }

    /// Widens the box along one axis, around its center, so that its
    /// height/width ratio equals `ratio`.
    ///
    /// The box never shrinks.
    pub fn with_aspect_ratio(&self, ratio: f64) -> Self {
        let (width, height) = (self.width(), self.height());
        let (width, height) = if height < ratio * width {
            (width, ratio * width)
        } else {
            (height / ratio, height)
        };
        let half = Point2D::new(width / 2.0, height / 2.0);
        let center = self.center();
        Self {
            p_min: center - half,
            p_max: center + half,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_ulps_eq;

    #[test]
    fn bb_from_points() {
        let points = vec![
            Point2D::new(-1.0, 2.0),
            Point2D::new(0.0, 3.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(3.0, 2.0),
        ];
        let bb = BoundingBox::from_points(points).unwrap();

        assert_eq!(bb.p_min(), &Point2D::new(-1.0, 1.0));
        assert_eq!(bb.p_max(), &Point2D::new(3.0, 3.0));
    }

    #[test]
    fn bb_from_no_points() {
        assert_eq!(BoundingBox::from_points(Vec::<Point2D>::new()), None);
    }

    #[test]
    fn bb_from_one_point() {
        let bb = BoundingBox::from_points(vec![Point2D::new(4.0, -2.0)]).unwrap();
        assert_eq!(bb.width(), 0.0);
        assert_eq!(bb.height(), 0.0);
        let padded = bb.padded(0.05);
        assert_ulps_eq!(padded.width(), 1.0);
        assert_ulps_eq!(padded.height(), 1.0);
        assert_eq!(padded.center(), Point2D::new(4.0, -2.0));
    }

    #[test]
    fn padding() {
        let bb = BoundingBox::from_coords(Point2D::new(0.0, 0.0), Point2D::new(10.0, 2.0));
        let padded = bb.padded(0.1);
        assert_ulps_eq!(padded.p_min().x, -1.0);
        assert_ulps_eq!(padded.p_max().x, 11.0);
        assert_ulps_eq!(padded.p_min().y, -0.2);
        assert_ulps_eq!(padded.p_max().y, 2.2);
    }

    #[test]
    fn aspect_ratio_widens() {
        let bb = BoundingBox::from_coords(Point2D::new(0.0, 0.0), Point2D::new(4.0, 1.0));

        // Square target: the box becomes 4x4.
        let square = bb.with_aspect_ratio(1.0);
        assert_ulps_eq!(square.width(), 4.0);
        assert_ulps_eq!(square.height(), 4.0);
        assert_eq!(square.center(), bb.center());

        // Very wide target: the box becomes 10x1.
        let wide = bb.with_aspect_ratio(0.1);
        assert_ulps_eq!(wide.width(), 10.0);
        assert_ulps_eq!(wide.height(), 1.0);
        assert!(wide.contains(bb.p_min()) && wide.contains(bb.p_max()));
    }
}
