//! Row sources for the retail tables.
//!
//! Each table gets its own seeded RNG stream, so generating a single
//! table yields the same rows as generating all five. Referencing
//! columns draw from `1..=scaled count` of the referenced table, which
//! keeps foreign keys valid without the tables coordinating at runtime.

use crate::fake::FakeData;
use chrono::{Duration, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use scalegen::{Row, RowSource, SizeTable, Table};

/// The retail dataset at one scale factor.
pub struct RetailDataset {
    seed: u64,
    customers: u64,
    stores: u64,
    items: u64,
    transactions: u64,
}

impl RetailDataset {
    pub fn new(scale_factor: u32, seed: u64) -> Self {
        let sizes = SizeTable::default();
        let scaled = |table: &str| u64::from(scale_factor) * sizes.get(table).unwrap_or(0);
        Self {
            seed,
            customers: scaled("customers"),
            stores: scaled("stores"),
            items: scaled("items"),
            transactions: scaled("transactions"),
        }
    }

    /// Row source for one of the retail tables, or `None` for a table
    /// this dataset does not know.
    pub fn source_for(&self, table: &str) -> Option<Box<dyn RowSource>> {
        // Distinct RNG stream per table, derived from the dataset seed.
        let stream = |offset: u64| {
            FakeData::new(ChaCha8Rng::seed_from_u64(self.seed.wrapping_add(offset)))
        };

        match table.to_lowercase().as_str() {
            "customers" => {
                let mut fake = stream(1);
                Some(fn_rows(move |i| {
                    let first = fake.first_name();
                    let last = fake.last_name();
                    let email = fake.email(first, last);
                    row(&[
                        ("CUSTOMER_ID", (i + 1).to_string()),
                        ("FIRST_NAME", first.to_string()),
                        ("LAST_NAME", last.to_string()),
                        ("EMAIL", email),
                        ("CITY", fake.city().to_string()),
                    ])
                }))
            }
            "stores" => {
                let mut fake = stream(2);
                Some(fn_rows(move |i| {
                    row(&[
                        ("STORE_ID", (i + 1).to_string()),
                        ("STORE_NAME", fake.store_name()),
                        ("CITY", fake.city().to_string()),
                    ])
                }))
            }
            "items" => {
                let mut fake = stream(3);
                Some(fn_rows(move |i| {
                    row(&[
                        ("ITEM_ID", (i + 1).to_string()),
                        ("ITEM_NAME", fake.item_name()),
                        ("CATEGORY", fake.category().to_string()),
                        ("PRICE", fake.price(0.5, 200.0)),
                    ])
                }))
            }
            "transactions" => {
                let mut fake = stream(4);
                let customers = self.customers.max(1);
                let stores = self.stores.max(1);
                Some(fn_rows(move |i| {
                    let date = base_date() + Duration::days(fake.rng().gen_range(0..365));
                    row(&[
                        ("TRANSACTION_ID", (i + 1).to_string()),
                        (
                            "CUSTOMER_ID",
                            fake.rng().gen_range(1..=customers).to_string(),
                        ),
                        ("STORE_ID", fake.rng().gen_range(1..=stores).to_string()),
                        ("TRANSACTION_DATE", date.format("%Y-%m-%d").to_string()),
                        ("TOTAL_AMOUNT", fake.price(1.0, 500.0)),
                    ])
                }))
            }
            "transaction_items" => {
                let mut fake = stream(5);
                let transactions = self.transactions.max(1);
                let items = self.items.max(1);
                Some(fn_rows(move |i| {
                    row(&[
                        ("TRANSACTION_ITEM_ID", (i + 1).to_string()),
                        (
                            "TRANSACTION_ID",
                            fake.rng().gen_range(1..=transactions).to_string(),
                        ),
                        ("ITEM_ID", fake.rng().gen_range(1..=items).to_string()),
                        ("QUANTITY", fake.rng().gen_range(1..=10u32).to_string()),
                        ("PRICE", fake.price(0.5, 200.0)),
                    ])
                }))
            }
            _ => None,
        }
    }
}

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn row(pairs: &[(&str, String)]) -> Row {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

/// Adapt a per-record closure into a [`RowSource`].
struct FnRows<F> {
    produce: F,
}

impl<F: FnMut(u64) -> Row> RowSource for FnRows<F> {
    fn rows(&mut self, _table: &Table, num_records: u64) -> Box<dyn Iterator<Item = Row> + '_> {
        let produce = &mut self.produce;
        Box::new((0..num_records).map(move |i| produce(i)))
    }
}

fn fn_rows<F: FnMut(u64) -> Row + 'static>(produce: F) -> Box<dyn RowSource> {
    Box::new(FnRows { produce })
}
