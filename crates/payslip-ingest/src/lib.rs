pub mod error;
pub mod register;

pub use error::{IngestError, Result};
pub use register::{HEADER_ROW, Register, RegisterRow, read_register};
