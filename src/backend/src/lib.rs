pub mod pattern;
pub mod printer;

use {frontend::RowCount, pattern::Pattern};

impl From<RowCount> for Pattern {
    fn from(row_count: RowCount) -> Self {
        Pattern::with_height(row_count.rows())
    }
}
