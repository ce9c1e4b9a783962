//! Retail demo dataset for scalegen.
//!
//! Provides deterministic, FK-consistent [`RowSource`] implementations
//! for a five-table retail schema: customers, stores, items,
//! transactions, and transaction_items. Foreign-key values always fall
//! inside the id ranges generated for the referenced table at the same
//! scale factor.
//!
//! # Example
//!
//! ```rust
//! use retail_fixtures::RetailDataset;
//! use scalegen::{RowSource, SchemaRegistry};
//!
//! let registry = SchemaRegistry::parse(retail_fixtures::SCHEMA_DDL);
//! let dataset = RetailDataset::new(1, 42);
//! let table = registry.resolve("customers").unwrap();
//! let mut source = dataset.source_for("customers").unwrap();
//! assert_eq!(source.rows(&table, 10).count(), 10);
//! ```

pub mod fake;
mod rows;

pub use rows::RetailDataset;

/// The retail schema DDL, embedded so the fixture binary needs no
/// external schema file.
pub const SCHEMA_DDL: &str = "\
CREATE COLUMN TABLE customers (customer_id INT, first_name VARCHAR(50), last_name VARCHAR(50), email VARCHAR(100), city VARCHAR(50));
CREATE COLUMN TABLE stores (store_id INT, store_name VARCHAR(50), city VARCHAR(50));
CREATE COLUMN TABLE items (item_id INT, item_name VARCHAR(50), category VARCHAR(50), price DECIMAL(10,2));
CREATE COLUMN TABLE transactions (transaction_id INT, customer_id INT, store_id INT, transaction_date DATE, total_amount DECIMAL(10,2));
CREATE COLUMN TABLE transaction_items (transaction_item_id INT, transaction_id INT, item_id INT, quantity INT, price DECIMAL(10,2));
";

/// Generation order: referenced tables before referencing ones.
pub const TABLE_ORDER: &[&str] = &[
    "customers",
    "stores",
    "items",
    "transactions",
    "transaction_items",
];
