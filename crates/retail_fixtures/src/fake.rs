//! Fake data helpers for the retail dataset.

use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Carol", "David", "Emma", "Frank", "Grace", "Henry", "Iris", "Jack", "Kate",
    "Leo", "Maya", "Noah", "Olivia", "Peter", "Quinn", "Rose", "Sam", "Tara", "Uma", "Victor",
    "Wendy", "Xavier", "Yara", "Zack",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Martinez",
    "Anderson", "Taylor", "Thomas", "Moore", "Jackson", "Martin", "Lee", "Thompson", "White",
    "Harris", "Clark", "Lewis", "Robinson", "Walker", "Hall",
];

const CITIES: &[&str] = &[
    "Springfield",
    "Riverton",
    "Lakeview",
    "Fairfield",
    "Georgetown",
    "Clinton",
    "Salem",
    "Madison",
    "Bristol",
    "Ashland",
    "Oakdale",
    "Milton",
];

const STORE_PREFIXES: &[&str] = &[
    "Central", "North", "South", "East", "West", "Harbor", "Market", "Plaza", "Corner", "Main",
];

const ITEM_ADJECTIVES: &[&str] = &[
    "Premium", "Classic", "Deluxe", "Standard", "Compact", "Family", "Organic", "Fresh", "Smart",
    "Everyday",
];

const ITEM_NOUNS: &[&str] = &[
    "Widget", "Gadget", "Kettle", "Lamp", "Blender", "Notebook", "Backpack", "Mug", "Charger",
    "Speaker", "Towel", "Bottle",
];

const CATEGORIES: &[&str] = &[
    "Electronics",
    "Groceries",
    "Home",
    "Sports",
    "Toys",
    "Office",
    "Garden",
    "Apparel",
];

/// Fake data generator over a caller-supplied RNG.
pub struct FakeData<R: Rng> {
    rng: R,
}

impl<R: Rng> FakeData<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn first_name(&mut self) -> &'static str {
        FIRST_NAMES[self.rng.gen_range(0..FIRST_NAMES.len())]
    }

    pub fn last_name(&mut self) -> &'static str {
        LAST_NAMES[self.rng.gen_range(0..LAST_NAMES.len())]
    }

    pub fn email(&mut self, first: &str, last: &str) -> String {
        let num: u32 = self.rng.gen_range(1..1000);
        format!(
            "{}.{}{}@example.com",
            first.to_lowercase(),
            last.to_lowercase(),
            num
        )
    }

    pub fn city(&mut self) -> &'static str {
        CITIES[self.rng.gen_range(0..CITIES.len())]
    }

    pub fn store_name(&mut self) -> String {
        let prefix = STORE_PREFIXES[self.rng.gen_range(0..STORE_PREFIXES.len())];
        let city = self.city();
        format!("{} {} Store", prefix, city)
    }

    pub fn item_name(&mut self) -> String {
        let adjective = ITEM_ADJECTIVES[self.rng.gen_range(0..ITEM_ADJECTIVES.len())];
        let noun = ITEM_NOUNS[self.rng.gen_range(0..ITEM_NOUNS.len())];
        format!("{} {}", adjective, noun)
    }

    pub fn category(&mut self) -> &'static str {
        CATEGORIES[self.rng.gen_range(0..CATEGORIES.len())]
    }

    pub fn price(&mut self, min: f64, max: f64) -> String {
        format!("{:.2}", self.rng.gen_range(min..max))
    }
}
