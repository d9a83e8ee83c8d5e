pub mod category_table;
pub mod length_limits;
pub mod red_flags;

pub use category_table::{CategorySpec, CategoryTable};
pub use length_limits::LengthLimits;
pub use red_flags::{MisconceptionTable, RedFlagTable};
