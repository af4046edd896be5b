//! Help table: the full outcome grid laid out for a terminal.

use super::WinRules;
use std::fmt;

/// `(n + 1) x (n + 1)` grid. Row and column 0 are move names in set order;
/// cell `(i, j)` is the outcome of row move `i` against column move `j`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HelpTable {
    cells: Vec<Vec<String>>,
}

impl HelpTable {
    pub const CORNER: &'static str = "Moves";

    pub fn new(rules: &WinRules) -> Self {
        let moves = rules.moves();
        let size = moves.len();

        let mut header = Vec::with_capacity(size + 1);
        header.push(Self::CORNER.to_string());
        header.extend(moves.iter().map(str::to_string));

        let mut cells = vec![header];
        for (i, row_move) in moves.iter().enumerate() {
            let mut row = Vec::with_capacity(size + 1);
            row.push(row_move.to_string());
            for j in 0..size {
                let cell = rules
                    .outcome_at(i, j)
                    .map(|o| o.as_str().to_string())
                    .unwrap_or_default();
                row.push(cell);
            }
            cells.push(row);
        }

        Self { cells }
    }

    /// Cell at `(row, column)`
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.cells.get(row)?.get(column).map(String::as_str)
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.cells
    }

    fn column_widths(&self) -> Vec<usize> {
        let columns = self.cells.first().map_or(0, Vec::len);
        (0..columns)
            .map(|c| {
                self.cells
                    .iter()
                    .map(|row| row[c].chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

impl fmt::Display for HelpTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
        let rule = format!("+{}+", rule.join("+"));

        writeln!(f, "{}", rule)?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "|")?;
            for (cell, width) in row.iter().zip(&widths) {
                write!(f, " {:<width$} |", cell, width = width)?;
            }
            writeln!(f)?;
            if r == 0 {
                writeln!(f, "{}", rule)?;
            }
        }
        writeln!(f, "{}", rule)
    }
}
