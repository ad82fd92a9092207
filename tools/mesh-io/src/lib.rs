//! Readers and writers for the plain-text point and triangulation arrays
//! produced by 2D mesh generators.

use std::fmt;
use std::path::Path;

pub mod txt;

pub use txt::Table;

#[derive(Debug)]
pub enum Error {
    Points(txt::Error),
    Triangulation(txt::Error),
    PointsShape(txt::ShapeError),
    TriangulationShape(txt::ShapeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Points(err) => write!(f, "bad point file: {}", err),
            Error::Triangulation(err) => write!(f, "bad triangulation file: {}", err),
            Error::PointsShape(err) => write!(f, "bad point file: {}", err),
            Error::TriangulationShape(err) => write!(f, "bad triangulation file: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Points(err) | Error::Triangulation(err) => Some(err),
            Error::PointsShape(err) | Error::TriangulationShape(err) => Some(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// A 2D triangle mesh, as a point list and a list of index triples.
///
/// Triangle indices are kept signed and unchecked: they are read as-is from
/// the triangulation file, and it is up to consumers to reject those that do
/// not point into the point list.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Mesh {
    points: Vec<[f64; 2]>,
    triangles: Vec<[i64; 3]>,
}

impl Mesh {
    pub fn from_raw_parts(points: Vec<[f64; 2]>, triangles: Vec<[i64; 3]>) -> Self {
        Self { points, triangles }
    }

    /// Checks that `points` has two columns and `triangles` three, then
    /// builds a mesh from their rows.
    pub fn from_tables(points: &Table<f64>, triangles: &Table<i64>) -> Result<Self> {
        let points = points.to_fixed_rows::<2>().map_err(Error::PointsShape)?;
        let triangles = triangles
            .to_fixed_rows::<3>()
            .map_err(Error::TriangulationShape)?;
        Ok(Self { points, triangles })
    }

    /// Reads the point file, then the triangulation file.
    ///
    /// The triangulation file is not touched if the point file cannot be
    /// loaded.
    pub fn from_files<P, Q>(points: P, triangulation: Q) -> Result<Self>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let points = txt::read_file::<f64, _>(points).map_err(Error::Points)?;
        let triangles = txt::read_file::<i64, _>(triangulation).map_err(Error::Triangulation)?;
        Self::from_tables(&points, &triangles)
    }

    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    pub fn triangles(&self) -> &[[i64; 3]] {
        &self.triangles
    }

    /// Returns the number of nodes (vertices) of the mesh.
    pub fn node_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of triangles of the mesh.
    pub fn element_count(&self) -> usize {
        self.triangles.len()
    }
}
