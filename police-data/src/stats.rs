//! Category breakdown of crime results.
//!
//! Turns a list of crimes into per-category counts and percentages for
//! charts and reports.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::{CrimeCategory, CrimeRecord};

/// Count and share of crimes in one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStat {
    pub category: String,
    pub count: usize,
    /// Share of the input, in percent.
    pub percentage: f64,
}

/// Group crimes by category.
///
/// Categories are compared as exact strings, so `Burglary` and `burglary`
/// are counted separately. Output is ordered by descending count; equal
/// counts keep the order in which the category first appeared. Empty input
/// gives empty output.
pub fn category_stats(crimes: &[CrimeRecord]) -> Vec<CategoryStat> {
    if crimes.is_empty() {
        return Vec::new();
    }

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, usize)> = Vec::new();

    for crime in crimes {
        let category = crime.category.as_str();
        match index.get(category) {
            Some(&i) => groups[i].1 += 1,
            None => {
                index.insert(category, groups.len());
                groups.push((category, 1));
            }
        }
    }

    // Stable sort: ties stay in first-seen order
    groups.sort_by(|a, b| b.1.cmp(&a.1));

    let total = crimes.len() as f64;
    groups
        .into_iter()
        .map(|(category, count)| CategoryStat {
            category: category.to_string(),
            count,
            percentage: 100.0 * count as f64 / total,
        })
        .collect()
}

/// Pair each stat with the display name of its category.
///
/// Slugs missing from `categories` are shown as-is.
pub fn label_stats<'a>(
    stats: &'a [CategoryStat],
    categories: &'a [CrimeCategory],
) -> Vec<(&'a str, &'a CategoryStat)> {
    let names: HashMap<&str, &str> = categories
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();

    stats
        .iter()
        .map(|stat| {
            let name = names
                .get(stat.category.as_str())
                .copied()
                .unwrap_or(stat.category.as_str());
            (name, stat)
        })
        .collect()
}
