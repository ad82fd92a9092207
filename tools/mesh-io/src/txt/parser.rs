use super::Table;
use super::Value;
use std::error;
use std::fmt;
use std::fs;
use std::io;
use std::num;
use std::path::Path;

#[derive(Debug)]
pub enum ErrorKind {
    Io(io::Error),
    BadInteger {
        token: String,
        err: num::ParseIntError,
    },
    BadFloat {
        token: String,
        err: num::ParseFloatError,
    },
    ColumnCount {
        expected: usize,
        found: usize,
    },
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    lineno: usize,
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Line at which the error occurred, starting from 1.
    ///
    /// Zero when the error is not tied to a line, e.g. when the file could
    /// not be opened.
    pub fn lineno(&self) -> usize {
        self.lineno
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Io(err) => write!(f, "io error: {}", err),
            ErrorKind::BadInteger { token, err } => {
                write!(f, "when parsing integer {:?}: {}", token, err)
            }
            ErrorKind::BadFloat { token, err } => {
                write!(f, "when parsing float {:?}: {}", token, err)
            }
            ErrorKind::ColumnCount { expected, found } => {
                write!(f, "expected {} columns, found {}", expected, found)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lineno == 0 {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "at line {}: {}", self.lineno, self.kind)
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Io(err) => Some(err),
            ErrorKind::BadInteger { err, .. } => Some(err),
            ErrorKind::BadFloat { err, .. } => Some(err),
            ErrorKind::ColumnCount { .. } => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error {
            kind: ErrorKind::Io(err),
            lineno: 0,
        }
    }
}

/// Strips the comment and surrounding whitespace off a line.
fn data_part(line: &str) -> &str {
    let end = line.find('#').unwrap_or(line.len());
    line[..end].trim()
}

/// Parses a whole table from `input`.
///
/// Every non-blank line must hold the same number of values.
pub fn parse<T, R>(mut input: R) -> Result<Table<T>, Error>
where
    T: Value,
    R: io::BufRead,
{
    let mut line = String::new();
    let mut lineno = 0;
    let mut cols = None;
    let mut data = Vec::new();

    loop {
        line.clear();
        lineno += 1;
        let n = input.read_line(&mut line).map_err(|err| Error {
            kind: ErrorKind::Io(err),
            lineno,
        })?;
        if n == 0 {
            break;
        }

        let values = data_part(&line);
        if values.is_empty() {
            continue;
        }

        let prev_len = data.len();
        for token in values.split_whitespace() {
            let value = token.parse::<T>().map_err(|err| Error {
                kind: T::bad_value(token, err),
                lineno,
            })?;
            data.push(value);
        }

        let found = data.len() - prev_len;
        match cols {
            None => cols = Some(found),
            Some(expected) if expected != found => {
                return Err(Error {
                    kind: ErrorKind::ColumnCount { expected, found },
                    lineno,
                });
            }
            Some(_) => {}
        }
    }

    Ok(Table::from_raw_parts(cols.unwrap_or(0), data))
}

/// Opens the file at `path` and parses it with [`parse`].
pub fn read_file<T, P>(path: P) -> Result<Table<T>, Error>
where
    T: Value,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = fs::File::open(path)?;
    let table: Table<T> = parse(io::BufReader::new(file))?;
    tracing::info!(
        path = %path.display(),
        rows = table.rows(),
        cols = table.cols(),
        "loaded table"
    );
    Ok(table)
}
