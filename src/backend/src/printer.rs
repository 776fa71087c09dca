use {
    crate::pattern::Pattern,
    frontend::{InvalidRowCount, RowCount},
    std::io::{self, Read, Write},
};

pub const PROMPT: &str = "Enter the number of rows for the star pattern: ";

#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Upper bound on printed rows; `None` prints every requested row.
    pub max_rows: Option<usize>,
    /// Report an invalid row count or a failed write as an error instead of
    /// carrying on.
    pub strict: bool,
}

/// What a run read and printed, including the failures it carried on past.
#[derive(Debug)]
pub struct Outcome {
    pub row_count: RowCount,
    /// Why the input was replaced with zero rows, if it was.
    pub invalid_row_count: Option<InvalidRowCount>,
    pub pattern: Pattern,
    /// First failed write to stdout. Nothing is written after it.
    pub write_error: Option<io::Error>,
}

/// Prompts for a row count on `stdout`, reads it from `stdin` and prints the
/// matching [`Pattern`].
#[derive(Debug, Clone, Default)]
pub struct PatternPrinter {
    options: Options,
}

impl PatternPrinter {
    pub fn new(options: Options) -> Self {
        PatternPrinter { options }
    }

    pub fn pattern(&self, row_count: RowCount) -> Pattern {
        let pattern = Pattern::from(row_count);
        match self.options.max_rows {
            Some(max_rows) => pattern.truncated(max_rows),
            None => pattern,
        }
    }

    fn write_prompt(stdout: &mut impl Write) -> io::Result<()> {
        stdout.write_all(PROMPT.as_bytes())?;
        stdout.flush()
    }

    /// Keeps a write failure for the outcome, or fails the run when strict.
    fn tolerate(&self, result: io::Result<()>) -> anyhow::Result<Option<io::Error>> {
        match result {
            Ok(()) => Ok(None),
            Err(e) if self.options.strict => Err(e.into()),
            Err(e) => Ok(Some(e)),
        }
    }

    /// Outside strict mode this never fails: an invalid row count prints no
    /// rows and a failed write stops further output.
    pub fn run(&self, stdin: &mut impl Read, stdout: &mut impl Write) -> anyhow::Result<Outcome> {
        let mut write_error = self.tolerate(Self::write_prompt(stdout))?;

        let (row_count, invalid_row_count) = match RowCount::read(stdin) {
            Ok(row_count) => (row_count, None),
            Err(e) if self.options.strict => return Err(e.into()),
            Err(e) => (RowCount::ZERO, Some(e)),
        };

        let pattern = self.pattern(row_count);
        if write_error.is_none() {
            write_error = self.tolerate(pattern.execute(stdout))?;
        }

        Ok(Outcome {
            row_count,
            invalid_row_count,
            pattern,
            write_error,
        })
    }
}
