use super::Table;
use itertools::Itertools as _;
use std::fmt;
use std::io;

/// Serialize a table into the plain-text format.
#[derive(Debug)]
pub struct DisplayTxt<'a, T> {
    table: &'a Table<T>,
}

impl<T> Table<T> {
    pub fn display_txt(&self) -> DisplayTxt<'_, T> {
        DisplayTxt { table: self }
    }
}

impl<T: fmt::Display> fmt::Display for DisplayTxt<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.table.iter_rows() {
            writeln!(f, "{}", row.iter().format(" "))?;
        }
        Ok(())
    }
}

/// Wrapping `w` in a [`std::io::BufWriter`] is recommended.
pub fn write<T, W>(mut w: W, table: &Table<T>) -> io::Result<()>
where
    T: fmt::Display,
    W: io::Write,
{
    write!(w, "{}", table.display_txt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let table = Table::from_raw_parts(2, vec![0.0, 0.5, -1.0, 2.0]);
        assert_eq!(table.display_txt().to_string(), "0 0.5\n-1 2\n");
    }

    #[test]
    fn test_written_table_reads_back() {
        let table = Table::from_raw_parts(3, vec![0_i64, 1, 2, 1, 3, 2]);
        let mut buf = Vec::new();
        write(&mut buf, &table).unwrap();
        let read: Table<i64> = super::super::parse(&buf[..]).unwrap();
        assert_eq!(read, table);
    }
}
