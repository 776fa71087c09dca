use {
    crate::{input::read_token, lexer},
    chumsky::Parser as _,
    derive_more::{Display, From},
    std::io::{self, Read},
};

/// The number of rows requested by the user.
///
/// Zero and negative counts are valid and produce no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From)]
pub struct RowCount(i32);

#[derive(Debug, Display, From)]
pub enum InvalidRowCount {
    #[display("no row count was given")]
    Missing,
    #[display("`{_0}` is not an integer")]
    NotAnInteger(String),
    #[display("`{_0}` is out of range for a row count")]
    OutOfRange(String),
    #[display("failed to read the row count")]
    #[from]
    Io(io::Error),
}

impl std::error::Error for InvalidRowCount {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvalidRowCount::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl RowCount {
    pub const ZERO: RowCount = RowCount(0);

    pub fn value(self) -> i32 {
        self.0
    }

    /// Number of rows to print: the count itself, or 0 if it is negative.
    pub fn rows(self) -> usize {
        usize::try_from(self.0).unwrap_or(0)
    }

    /// Parses the leading integer of `token`. Trailing characters are ignored.
    pub fn parse(token: &str) -> Result<Self, InvalidRowCount> {
        let Ok(digits) = lexer::int_prefix_lexer().parse(token).into_result() else {
            return Err(InvalidRowCount::NotAnInteger(token.to_owned()));
        };
        str::parse(digits)
            .map(RowCount)
            .map_err(|_| InvalidRowCount::OutOfRange(token.to_owned()))
    }

    /// Reads one token from `stdin` and parses it.
    pub fn read(stdin: &mut impl Read) -> Result<Self, InvalidRowCount> {
        match read_token(stdin)? {
            Some(token) => Self::parse(&token),
            None => Err(InvalidRowCount::Missing),
        }
    }
}
