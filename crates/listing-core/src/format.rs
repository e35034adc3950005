//! Display Formatting
//!
//! Text helpers for cards and summary lines.

use crate::domain::CityFilter;

/// Group digits with commas: 1250000 -> "1,250,000"
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Dollar amount: 450000 -> "$450,000"
pub fn format_price(amount: u64) -> String {
    format!("${}", group_thousands(amount))
}

/// Tag for display: "new_construction" -> "new construction"
pub fn humanize_tag(tag: &str) -> String {
    tag.replace('_', " ")
}

/// "Showing 12 properties in Miami"
pub fn results_summary(count: usize, city: &CityFilter) -> String {
    match city.city() {
        Some(city) => format!("Showing {} properties in {}", count, city),
        None => format!("Showing {} properties", count),
    }
}

/// "You have 1 favorite property"
pub fn favorites_summary(count: usize) -> String {
    let noun = if count == 1 { "property" } else { "properties" };
    format!("You have {} favorite {}", count, noun)
}

/// Bathrooms without a trailing ".0": 2.0 -> "2", 2.5 -> "2.5"
pub fn format_bathrooms(bathrooms: f64) -> String {
    if bathrooms.fract() == 0.0 {
        format!("{:.0}", bathrooms)
    } else {
        bathrooms.to_string()
    }
}
