mod input;
mod lexer;
mod row_count;

pub use {
    input::read_token,
    row_count::{InvalidRowCount, RowCount},
};
