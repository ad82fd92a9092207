use anyhow::Context as _;
use anyhow::Result;
use mesh_io::Mesh;
use meshplot::Axes;
use std::fs;
use std::io;
use std::io::Write as _;

pub const DEFAULT_POINTS: &str = "points.txt";
pub const DEFAULT_TRIANGULATION: &str = "triangulation.txt";

/// Size of SVG output, in pixels.
pub const SVG_SIZE: (f64, f64) = (640.0, 480.0);

/// What to plot and where, as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub points: String,
    pub triangulation: String,
    pub boundary: bool,
    /// Write SVG to this file (`-`: stdout) instead of opening a window.
    pub svg: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            points: String::from(DEFAULT_POINTS),
            triangulation: String::from(DEFAULT_TRIANGULATION),
            boundary: false,
            svg: None,
        }
    }
}

impl Config {
    pub fn from_matches(matches: &getopts::Matches) -> Self {
        let default = Self::default();
        Self {
            points: matches.opt_str("p").unwrap_or(default.points),
            triangulation: matches.opt_str("T").unwrap_or(default.triangulation),
            boundary: matches.opt_present("b"),
            svg: matches.opt_str("o"),
        }
    }
}

pub fn options() -> getopts::Options {
    let mut options = getopts::Options::new();
    options.optflag("b", "boundary", "highlight boundary edges");
    options.optflag("h", "help", "print this help menu");
    options.optopt(
        "p",
        "points",
        &format!("point file (default: {DEFAULT_POINTS})"),
        "FILE",
    );
    options.optopt(
        "T",
        "triangulation",
        &format!("triangulation file (default: {DEFAULT_TRIANGULATION})"),
        "FILE",
    );
    options.optopt("o", "svg", "write an SVG file instead of opening a window", "FILE");
    options.optopt("t", "trace", "emit a chrome trace", "FILE");
    options
}

/// Parses `args` (without the program name) against `options`.
///
/// Returns `None` when help was requested, after printing it.
pub fn parse_args<I>(
    options: &getopts::Options,
    usage: &str,
    args: I,
    max_free_args: usize,
) -> Result<Option<getopts::Matches>>
where
    I: IntoIterator,
    I::Item: AsRef<std::ffi::OsStr>,
{
    let matches = options.parse(args)?;

    if matches.opt_present("h") {
        eprintln!("{}", options.usage(usage));
        return Ok(None);
    }
    if matches.free.len() > max_free_args {
        anyhow::bail!("too many arguments\n\n{}", options.usage(usage));
    }

    Ok(Some(matches))
}

/// Returns stdout when `filename` is `None` or `-`, a buffered file writer
/// otherwise.
pub fn writer(filename: Option<&String>) -> Result<Box<dyn io::Write>> {
    Ok(match filename.map(String::as_str) {
        Some("-") | None => Box::new(io::stdout()),
        Some(filename) => {
            let file = fs::File::create(filename)
                .with_context(|| format!("failed to create {filename:?}"))?;
            Box::new(io::BufWriter::new(file))
        }
    })
}

/// Reads the point file, then the triangulation file.
pub fn read_mesh(config: &Config) -> Result<Mesh> {
    Mesh::from_files(&config.points, &config.triangulation).with_context(|| {
        format!(
            "failed to read mesh from {:?} and {:?}",
            config.points, config.triangulation,
        )
    })
}

/// Draws the mesh edges on equal-aspect axes.
pub fn plot(mesh: &Mesh, boundary: bool) -> Result<Axes> {
    let axes = Axes::new()
        .triplot(mesh.points(), mesh.triangles())
        .context("failed to plot triangulation")?;
    if !boundary {
        return Ok(axes);
    }
    let axes = axes
        .boundary(mesh.points(), mesh.triangles())
        .context("failed to plot boundary")?;
    Ok(axes)
}

/// Loads, plots, then shows or writes the mesh described by `config`.
pub fn run(config: &Config) -> Result<()> {
    let mesh = read_mesh(config)?;
    tracing::info!(
        nodes = mesh.node_count(),
        triangles = mesh.element_count(),
        "read mesh"
    );

    let axes = plot(&mesh, config.boundary)?;

    match &config.svg {
        Some(filename) => {
            let mut output = writer(Some(filename))?;
            let (width, height) = SVG_SIZE;
            meshplot::svg::write(&mut output, &axes, width, height)
                .context("failed to write svg")?;
            output.flush().context("failed to write svg")?;
        }
        None => {
            let title = format!("{} - {}", config.points, config.triangulation);
            meshplot::window::show(axes, &title).context("failed to show plot")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_use_default_files() {
        let options = options();
        let matches = parse_args(&options, "", Vec::<String>::new(), 0)
            .unwrap()
            .unwrap();
        assert_eq!(Config::from_matches(&matches), Config::default());
    }

    #[test]
    fn file_options() {
        let options = options();
        let args = ["-p", "a.txt", "--triangulation", "b.txt", "-b", "-o", "-"];
        let matches = parse_args(&options, "", args, 0).unwrap().unwrap();
        let config = Config::from_matches(&matches);
        assert_eq!(config.points, "a.txt");
        assert_eq!(config.triangulation, "b.txt");
        assert!(config.boundary);
        assert_eq!(config.svg.as_deref(), Some("-"));
    }

    #[test]
    fn help_stops_early() {
        let options = options();
        assert!(parse_args(&options, "", ["--help"], 0).unwrap().is_none());
    }

    #[test]
    fn free_arguments_are_rejected() {
        let options = options();
        let err = parse_args(&options, "", ["points.txt"], 0).unwrap_err();
        assert!(err.to_string().starts_with("too many arguments"));
    }

    #[test]
    fn plot_single_triangle() {
        let mesh = Mesh::from_raw_parts(vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]], vec![[0, 1, 2]]);
        let axes = plot(&mesh, true).unwrap();
        assert_eq!(axes.lines().len(), 2);
        assert_eq!(axes.lines()[0].segments().len(), 3);
    }

    #[test]
    fn plot_bad_index() {
        let mesh = Mesh::from_raw_parts(vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]], vec![[0, 1, 3]]);
        let err = plot(&mesh, false).unwrap_err();
        assert!(err.downcast_ref::<meshplot::plot::Error>().is_some());
    }
}
