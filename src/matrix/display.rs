//! `Display` formatting for [`Matrix`].

use std::fmt;

use super::Matrix;

/// Render a value the way both [`Matrix`] and [`crate::frame::DataFrame`] print numbers.
///
/// Finite values equal to their own floor print as integer literals (`5.0` -> `"5"`);
/// everything else uses the shortest round-tripping decimal form (`1.1` -> `"1.1"`).
pub(crate) fn format_number(v: f64) -> String {
    if v.is_finite() && v == v.floor() {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix({}x{}) [", self.rows, self.cols)?;
        for r in 0..self.rows {
            write!(f, "  [")?;
            for (c, v) in self.row_slice(r).iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", format_number(*v))?;
            }
            write!(f, "]")?;
            if r + 1 < self.rows {
                writeln!(f, ",")?;
            }
        }
        write!(f, "\n]")
    }
}
