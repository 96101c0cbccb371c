/// Column alignment for table cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Align {
    Left,
    Right,
}

/// A simple text-based table generator for statements and terminal output
pub struct Table {
    headers: Vec<String>,
    aligns: Vec<Align>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with per-column alignment
    pub fn with_aligns(headers: Vec<&str>, aligns: Vec<Align>) -> Self {
        let col_widths = headers.iter().map(|h| h.len()).collect();
        let headers = headers.iter().map(|h| h.to_string()).collect();
        Table {
            headers,
            aligns,
            rows: Vec::new(),
            col_widths,
        }
    }

    /// Add a row to the table
    pub fn add_row(&mut self, row: Vec<String>) {
        // Update column widths if needed
        for (i, col) in row.iter().enumerate() {
            if i < self.col_widths.len() {
                self.col_widths[i] = self.col_widths[i].max(col.len());
            }
        }

        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Render the header line followed by a separator
    pub fn render_header(&self) -> String {
        let mut output = self.render_row(&self.headers);
        output.push('\n');
        output.push_str(&self.render_separator());
        output
    }

    /// Render a single body row by index
    pub fn render_body_row(&self, index: usize) -> Option<String> {
        self.rows.get(index).map(|row| self.render_row(row))
    }

    /// Render the full table as a formatted string
    pub fn render(&self) -> String {
        let mut output = self.render_header();
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output
    }

    /// Render a single row with proper spacing
    fn render_row(&self, row: &[String]) -> String {
        let mut line = String::new();
        for (i, col) in row.iter().enumerate() {
            if i < self.col_widths.len() {
                let width = self.col_widths[i];
                match self.aligns.get(i).copied().unwrap_or(Align::Left) {
                    Align::Left => line.push_str(&format!("{:<width$}", col, width = width)),
                    Align::Right => line.push_str(&format!("{:>width$}", col, width = width)),
                }
                if i < row.len() - 1 {
                    line.push_str(" | ");
                }
            }
        }
        line
    }

    /// Render a separator line
    fn render_separator(&self) -> String {
        let mut line = String::new();
        for (i, &width) in self.col_widths.iter().enumerate() {
            line.push_str(&"-".repeat(width));
            if i < self.col_widths.len() - 1 {
                line.push_str("-+-");
            }
        }
        line
    }
}
