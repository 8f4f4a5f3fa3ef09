//! Suggested values offered when composing entries.
//!
//! Categories stay free text; these lists only drive suggestions.

pub const FAVORITE_CATEGORIES: [&str; 8] = [
    "Color", "Food", "Animal", "Movie", "Show", "Song", "Sport", "Game",
];

pub const MEASUREMENT_TYPES: [&str; 5] = [
    "Height",
    "Weight",
    "Head Circumference",
    "Shoe Size",
    "Clothing Size",
];

pub const MILESTONE_CATEGORIES: [&str; 7] = [
    "First Steps",
    "First Words",
    "First Day of School",
    "Lost Tooth",
    "Birthday",
    "Achievement",
    "Other",
];

/// Case-insensitive membership, ignoring surrounding whitespace
pub fn contains(list: &[&str], value: &str) -> bool {
    let value = value.trim();
    list.iter().any(|item| item.eq_ignore_ascii_case(value))
}
