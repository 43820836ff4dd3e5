pub mod resolver;
pub mod types;

pub use resolver::resolve_columns;
pub use types::{ColumnMap, ResolvedColumn};
