//! Schema-agnostic synthetic rows.
//!
//! Produces deterministic values for any parsed table by keying off
//! column-name conventions (ids, names, emails, dates, amounts). This is
//! what the CLI feeds the generator when no domain-specific source is
//! wired in; datasets with real semantics implement [`RowSource`]
//! themselves.

use super::RowSource;
use crate::schema::Table;
use crate::writer::Row;
use chrono::{Duration, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Carol", "David", "Emma", "Frank", "Grace", "Henry", "Iris", "Jack", "Kate",
    "Leo", "Maya", "Noah", "Olivia", "Peter", "Quinn", "Rose", "Sam", "Tara",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Martinez",
    "Anderson", "Taylor", "Thomas", "Moore", "Jackson", "Martin", "Lee", "Thompson", "White",
];

const WORDS: &[&str] = &[
    "alpha", "beta", "delta", "omega", "apex", "core", "edge", "wave", "spark", "swift", "bright",
    "clear", "prime", "nova", "summit", "peak",
];

/// Deterministic generic row source seeded for reproducibility.
pub struct SyntheticRows {
    rng: ChaCha8Rng,
}

impl SyntheticRows {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RowSource for SyntheticRows {
    fn rows(&mut self, table: &Table, num_records: u64) -> Box<dyn Iterator<Item = Row> + '_> {
        let fields: Vec<String> = table.field_names();
        let rng = &mut self.rng;

        Box::new((0..num_records).map(move |i| {
            let mut row = Row::with_capacity(fields.len());
            for (ordinal, field) in fields.iter().enumerate() {
                let value = synth_value(rng, field, ordinal, i);
                row.insert(field.clone(), value);
            }
            row
        }))
    }
}

/// Pick a value for one cell from the column name alone.
fn synth_value(rng: &mut ChaCha8Rng, field: &str, ordinal: usize, record: u64) -> String {
    let name = field.to_lowercase();

    if name == "id" || name.ends_with("_id") {
        // The leading id column counts up; referencing columns scatter.
        return if ordinal == 0 {
            (record + 1).to_string()
        } else {
            rng.gen_range(1..=1000u32).to_string()
        };
    }

    if name.contains("email") {
        let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
        let num: u32 = rng.gen_range(1..1000);
        return format!(
            "{}.{}{}@example.com",
            first.to_lowercase(),
            last.to_lowercase(),
            num
        );
    }

    if name.contains("first_name") {
        return FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())].to_string();
    }
    if name.contains("last_name") {
        return LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())].to_string();
    }
    if name.contains("name") {
        let a = WORDS[rng.gen_range(0..WORDS.len())];
        let b = WORDS[rng.gen_range(0..WORDS.len())];
        return format!("{} {}", a, b);
    }

    if name.contains("date") || name.contains("time") || name.ends_with("_at") {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let day = base + Duration::days(rng.gen_range(0..365));
        return day.format("%Y-%m-%d").to_string();
    }

    if name.contains("price") || name.contains("amount") || name.contains("total") {
        return format!("{:.2}", rng.gen_range(1.0..500.0f64));
    }

    if name.contains("quantity") || name.contains("count") || name.ends_with("_qty") {
        return rng.gen_range(1..=20u32).to_string();
    }

    format!("{}_{}", name, record + 1)
}
