pub mod bmi;
pub mod entry;
pub mod stats;
pub mod table;

pub use bmi::{BmiResult, WeightCategory};
pub use entry::{Gender, UserEntry, ValidationError};
pub use stats::{median, Comparison, Filter, Statistics};
pub use table::{Row, Table};
