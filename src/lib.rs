// Allow dead code for items that are part of the public API but only used in tests
#![allow(dead_code)]

pub mod db;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod schema;
pub mod writer;

pub use error::GeneratorError;
pub use generator::{
    EmptyRows, GenerateReport, RowSource, SizeTable, SyntheticRows, TableGenerator,
};
pub use schema::{Field, SchemaRegistry, Table};
pub use writer::{Row, RowWriter};
