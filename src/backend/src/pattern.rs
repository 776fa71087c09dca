use std::{
    fmt,
    io::{self, Write},
};

/// The unit printed once per column: an asterisk and a trailing space.
pub const TOKEN: &str = "* ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub width: usize,
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for _ in 0..self.width {
            f.write_str(TOKEN)?;
        }
        Ok(())
    }
}

/// A left-aligned triangle where row `i` (counting from 1) is `i` tokens wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    height: usize,
}

impl Pattern {
    pub fn with_height(height: usize) -> Self {
        Pattern { height }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Drops every row past `max_rows`.
    pub fn truncated(self, max_rows: usize) -> Self {
        Pattern {
            height: self.height.min(max_rows),
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = Row> {
        (1..=self.height).map(|width| Row { width })
    }

    /// Number of bytes `execute` writes, or `None` if that overflows `usize`.
    pub fn output_len(&self) -> Option<usize> {
        let h = self.height;
        // one of h, h + 1 is even
        let tokens = if h % 2 == 0 {
            (h / 2).checked_mul(h.checked_add(1)?)?
        } else {
            h.checked_mul((h + 1) / 2)?
        };
        tokens.checked_mul(TOKEN.len())?.checked_add(h)
    }

    pub fn execute(&self, stdout: &mut impl Write) -> io::Result<()> {
        for row in self.rows() {
            writeln!(stdout, "{row}")?;
        }
        stdout.flush()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
