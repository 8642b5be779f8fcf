use std::fmt;

use super::DataFrame;

/// Rows printed by `Display` before the output is cut off with `...`.
pub const DISPLAY_MAX_ROWS: usize = 10;

impl fmt::Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Empty DataFrame");
        }

        writeln!(f, "DataFrame ({} rows x {} cols)", self.rows(), self.cols())?;
        writeln!(f, "{}", self.get_column_names().join("\t"))?;
        writeln!(f, "{}", "-".repeat(self.cols() * 8))?;

        let shown = self.rows().min(DISPLAY_MAX_ROWS);
        for r in 0..shown {
            for column in self.columns() {
                if let Some(cell) = column.data.get(r) {
                    write!(f, "{cell}\t")?;
                }
            }
            writeln!(f)?;
        }
        if self.rows() > DISPLAY_MAX_ROWS {
            writeln!(f, "...")?;
        }
        Ok(())
    }
}
