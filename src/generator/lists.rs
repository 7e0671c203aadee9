/*
lists.rs

Copyright 2026 The Connect Words developers

This file is part of Connect Words.

Connect Words is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Connect Words is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Connect Words. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! The list database: the source of truth for generated puzzle content.
//!
//! The database is a JSON document holding named category lists with their
//! member items.
//! A curated copy is embedded in the binary at build time; the command-line
//! options also accept an external database file (see
//! [`crate::cli_options`]).
//! The database is read-only: it is parsed once and never mutated.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::io::Read;
use std::sync::OnceLock;

/// Puzzle sizes for which the statistics report list availability.
const QUICK_SIZES: [usize; 9] = [5, 6, 7, 8, 10, 12, 15, 20, 25];

/// Smallest supported puzzle size.
pub const MIN_PUZZLE_SIZE: usize = 5;

/// The curated list database, embedded at build time.
static CURATED_JSON: &str = include_str!("../../data/curated-lists.json");

/// One named category list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ListEntry {
    /// Unique list identifier.
    pub id: String,

    /// Display name of the category.
    pub name: String,

    /// Member items, in the order they were curated.
    pub items: Vec<String>,

    /// Item count as recorded by the conversion script. Informational only;
    /// the item vector is the source of truth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

/// The list database document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ListDb {
    /// ISO date when the database was generated.
    pub generated: String,

    /// Human-readable description of the database.
    pub description: String,

    /// The category lists.
    pub lists: Vec<ListEntry>,
}

/// Item-count statistics over the whole database.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStats {
    /// Smallest list size.
    pub min: usize,

    /// Largest list size.
    pub max: usize,

    /// Average list size, rounded to the nearest integer.
    pub avg: usize,
}

/// Aggregate database statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct DbStats {
    /// Number of lists in the database.
    pub total_lists: usize,

    /// Total number of items across all lists.
    pub total_items: usize,

    /// ISO date when the database was generated.
    pub generated: String,

    /// Item-count statistics.
    pub stats: ItemStats,

    /// Number of eligible lists for each quick puzzle size.
    pub available_for: BTreeMap<usize, usize>,
}

impl ListDb {
    /// Parse a list database from a JSON reader.
    ///
    /// # Errors
    ///
    /// The function returns an error when the document is not valid JSON or
    /// does not match the database schema.
    pub fn from_reader(reader: impl Read) -> Result<Self, Box<dyn Error>> {
        let db: ListDb = serde_json::from_reader(reader)?;
        Ok(db)
    }

    /// Return the lists that have at least `min_items` items.
    pub fn eligible_lists(&self, min_items: usize) -> Vec<&ListEntry> {
        self.lists
            .iter()
            .filter(|list| list.items.len() >= min_items)
            .collect()
    }

    /// Return the identifier, name, and item count of every list.
    pub fn available_lists(&self) -> Vec<(&str, &str, usize)> {
        self.lists
            .iter()
            .map(|list| (list.id.as_str(), list.name.as_str(), list.items.len()))
            .collect()
    }

    /// Compute aggregate statistics for the database.
    pub fn stats(&self) -> DbStats {
        let total_lists: usize = self.lists.len();
        let total_items: usize = self.lists.iter().map(|list| list.items.len()).sum();
        let mut counts: Vec<usize> = self.lists.iter().map(|list| list.items.len()).collect();
        counts.sort_unstable();

        let avg: usize = if total_lists == 0 {
            0
        } else {
            (total_items as f64 / total_lists as f64).round() as usize
        };

        DbStats {
            total_lists,
            total_items,
            generated: self.generated.clone(),
            stats: ItemStats {
                min: counts.first().copied().unwrap_or(0),
                max: counts.last().copied().unwrap_or(0),
                avg,
            },
            available_for: QUICK_SIZES
                .iter()
                .map(|&size| (size, self.eligible_lists(size).len()))
                .collect(),
        }
    }

    /// Return the largest puzzle size that the database can produce.
    ///
    /// This is the largest N such that at least N lists have N or more items
    /// each, scanned from the list count downward. The floor is
    /// [`MIN_PUZZLE_SIZE`].
    pub fn max_puzzle_size(&self) -> usize {
        let counts: Vec<usize> = self.lists.iter().map(|list| list.items.len()).collect();

        for n in (MIN_PUZZLE_SIZE..=counts.len()).rev() {
            if counts.iter().filter(|&&count| count >= n).count() >= n {
                return n;
            }
        }
        MIN_PUZZLE_SIZE
    }
}

/// Return the curated list database that ships with the application.
///
/// The database is parsed on first use and cached for the lifetime of the
/// process.
pub fn curated() -> &'static ListDb {
    static DB: OnceLock<ListDb> = OnceLock::new();
    DB.get_or_init(|| {
        serde_json::from_str(CURATED_JSON).expect("Cannot parse the embedded list database")
    })
}
