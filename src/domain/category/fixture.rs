//! Seeded test data for category tests

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::entity::{Category, DESCRIPTION_MAX_LENGTH, NAME_MAX_LENGTH, NAME_MIN_LENGTH};

const CATEGORY_NAMES: &[&str] = &[
    "Action",
    "Animation",
    "Comedy",
    "Documentary",
    "Drama",
    "Family",
    "Fantasy",
    "Horror",
    "Music",
    "Mystery",
    "Romance",
    "Science Fiction",
    "Thriller",
    "War",
    "Western",
];

const WORDS: &[&str] = &[
    "feature", "films", "series", "stories", "classic", "award", "winning", "original",
    "independent", "collection", "catalog", "titles", "for", "the", "whole", "family",
];

pub struct CategoryFixture {
    rng: StdRng,
}

impl CategoryFixture {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn valid_name(&mut self) -> String {
        let mut name = String::new();

        while name.chars().count() < NAME_MIN_LENGTH {
            if !name.is_empty() {
                name.push(' ');
            }
            name.push_str(self.pick(CATEGORY_NAMES));
        }

        name.chars().take(NAME_MAX_LENGTH).collect()
    }

    pub fn valid_description(&mut self) -> String {
        let count = self.rng.gen_range(0..40);
        let description = (0..count)
            .map(|_| self.pick(WORDS))
            .collect::<Vec<_>>()
            .join(" ");

        description.chars().take(DESCRIPTION_MAX_LENGTH).collect()
    }

    pub fn valid_category(&mut self) -> Category {
        let name = self.valid_name();
        let description = self.valid_description();
        Category::new(name, description).expect("fixture produces valid categories")
    }

    /// A prefix of a valid name holding `len` characters
    pub fn short_name(&mut self, len: usize) -> String {
        self.valid_name().chars().take(len).collect()
    }

    pub fn random_string(&mut self, len: usize) -> String {
        (&mut self.rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }

    fn pick(&mut self, values: &[&'static str]) -> &'static str {
        values.choose(&mut self.rng).copied().unwrap_or("Category")
    }
}

#[test]
fn test_fixture_is_deterministic() {
    let mut a = CategoryFixture::new(99);
    let mut b = CategoryFixture::new(99);

    assert_eq!(a.valid_name(), b.valid_name());
    assert_eq!(a.valid_description(), b.valid_description());
}
