pub mod loader;
pub mod normalize;
pub mod record;

pub use loader::{rows_from_csv_path, rows_from_csv_reader};
pub use normalize::normalize;
pub use record::{RawRow, RawValue, Record};
