pub mod field;
pub mod record;

pub use field::{Field, FieldKind};
pub use record::{EmployeeRecord, RunHeader};
