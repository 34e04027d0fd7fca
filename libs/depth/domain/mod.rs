//! Domain layer: pure data types with no I/O

pub mod direction;
pub mod quote;
pub mod schema;

pub use direction::{CellDisplay, ColorTier, DisplayAttributes, Direction};
pub use quote::{QuoteRecord, Row};
pub use schema::{ColumnDescriptor, ServerDataType, TableRef, TableSchema};
