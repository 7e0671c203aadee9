/*
random_puzzle.rs

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

//! Generate a random N×N puzzle from the list database.

use chrono::Utc;
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use super::colors;
use super::lists::{ListDb, ListEntry, MIN_PUZZLE_SIZE};
use super::puzzles::{Puzzle, PuzzleGroup};

/// Constraints for the puzzle selection.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Lists that must not appear in the puzzle.
    pub exclude_ids: Vec<String>,

    /// Lists that must appear in the puzzle, reserved before the random fill.
    /// Unknown identifiers are skipped.
    pub include_ids: Vec<String>,
}

/// Generate a random N×N puzzle.
///
/// Return None when the database does not hold `n` eligible lists after the
/// exclusions, or when `n` is below [`MIN_PUZZLE_SIZE`]. The caller handles
/// None as "cannot generate at this size".
pub fn generate(db: &ListDb, n: usize, options: &GenerateOptions) -> Option<Puzzle> {
    generate_with_rng(db, n, options, &mut rand::rng())
}

/// Generate a random N×N puzzle with the provided random number generator.
pub fn generate_with_rng(
    db: &ListDb,
    n: usize,
    options: &GenerateOptions,
    rng: &mut impl Rng,
) -> Option<Puzzle> {
    if n < MIN_PUZZLE_SIZE {
        debug!("Requested size {n} is below the minimum {MIN_PUZZLE_SIZE}");
        return None;
    }

    let mut eligible: Vec<&ListEntry> = db
        .eligible_lists(n)
        .into_iter()
        .filter(|list| !options.exclude_ids.contains(&list.id))
        .collect();

    if eligible.len() < n {
        debug!(
            "Only {} eligible lists for a {n}x{n} puzzle",
            eligible.len()
        );
        return None;
    }

    // Reserve the required lists first, in the order of the inclusion list.
    let mut selected: Vec<&ListEntry> = Vec::with_capacity(n);
    for id in &options.include_ids {
        if let Some(position) = eligible.iter().position(|list| &list.id == id) {
            selected.push(eligible.remove(position));
        } else {
            debug!("Required list {id} not found or not eligible; skipping");
        }
    }

    // Fill the remaining slots by sampling without replacement.
    eligible.shuffle(rng);
    let remaining: usize = n.saturating_sub(selected.len());
    selected.extend(eligible.into_iter().take(remaining));

    // Randomize the final group order so that the selection order (required
    // lists first) does not leak into the presentation order.
    selected.shuffle(rng);

    let groups: Vec<PuzzleGroup> = selected
        .iter()
        .enumerate()
        .map(|(index, list)| {
            let mut items: Vec<String> = list.items.clone();
            items.shuffle(rng);
            items.truncate(n);

            PuzzleGroup {
                name: list.name.clone(),
                words: items,
                color: Some(colors::group_color(index, n)),
                source_id: Some(list.id.clone()),
            }
        })
        .collect();

    Some(Puzzle {
        id: Utc::now().timestamp_millis(),
        title: format!("Generated Puzzle ({n}\u{d7}{n})"),
        groups,
        generated: true,
        size: n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::lists;
    use crate::generator::puzzles;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generated_puzzles_have_square_structure() {
        let db = lists::curated();
        let mut rng = StdRng::seed_from_u64(7);

        for n in [5, 6, 8] {
            let puzzle = generate_with_rng(db, n, &GenerateOptions::default(), &mut rng)
                .expect("curated database supports this size");
            assert_eq!(puzzle.groups.len(), n);
            assert!(puzzle.groups.iter().all(|g| g.words.len() == n));
            assert_eq!(puzzles::validate(&puzzle), Ok(()));
            assert!(puzzle.generated);
            assert_eq!(puzzle.size, n);
        }
    }

    #[test]
    fn group_colors_follow_the_index() {
        let db = lists::curated();
        let mut rng = StdRng::seed_from_u64(11);
        let puzzle =
            generate_with_rng(db, 5, &GenerateOptions::default(), &mut rng).expect("generated");

        for (index, group) in puzzle.groups.iter().enumerate() {
            assert_eq!(
                group.color.as_deref(),
                Some(crate::generator::colors::group_color(index, 5).as_str())
            );
        }
    }

    #[test]
    fn included_list_is_reserved() {
        let db = lists::curated();
        let mut rng = StdRng::seed_from_u64(3);
        let options = GenerateOptions {
            exclude_ids: Vec::new(),
            include_ids: vec![String::from("countries")],
        };

        let puzzle = generate_with_rng(db, 5, &options, &mut rng).expect("generated");
        let group = puzzle
            .groups
            .iter()
            .find(|g| g.source_id.as_deref() == Some("countries"))
            .expect("the countries list must be in the puzzle");

        let source = db
            .lists
            .iter()
            .find(|l| l.id == "countries")
            .expect("curated database holds a countries list");
        assert_eq!(group.words.len(), 5);
        assert!(group.words.iter().all(|w| source.items.contains(w)));
    }

    #[test]
    fn excluded_list_never_appears() {
        let db = lists::curated();
        let options = GenerateOptions {
            exclude_ids: vec![String::from("countries")],
            include_ids: Vec::new(),
        };

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle = generate_with_rng(db, 5, &options, &mut rng).expect("generated");
            assert!(
                puzzle
                    .groups
                    .iter()
                    .all(|g| g.source_id.as_deref() != Some("countries")),
                "excluded list leaked into the puzzle (seed {seed})",
            );
        }
    }

    #[test]
    fn unknown_include_ids_are_skipped() {
        let db = lists::curated();
        let mut rng = StdRng::seed_from_u64(5);
        let options = GenerateOptions {
            exclude_ids: Vec::new(),
            include_ids: vec![String::from("no-such-list")],
        };

        let puzzle = generate_with_rng(db, 5, &options, &mut rng).expect("generated");
        assert_eq!(puzzle.groups.len(), 5);
    }

    #[test]
    fn shortfall_returns_none() {
        let db = lists::curated();
        let mut rng = StdRng::seed_from_u64(1);
        let oversized: usize = db.max_puzzle_size() + 1;
        assert!(generate_with_rng(db, oversized, &GenerateOptions::default(), &mut rng).is_none());
    }

    #[test]
    fn sizes_below_the_minimum_return_none() {
        let db = lists::curated();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_with_rng(db, 4, &GenerateOptions::default(), &mut rng).is_none());
    }

    #[test]
    fn repeated_generation_draws_different_subsets() {
        let db = lists::curated();
        let options = GenerateOptions {
            exclude_ids: Vec::new(),
            include_ids: vec![String::from("countries")],
        };

        let mut rng = StdRng::seed_from_u64(2);
        let first = generate_with_rng(db, 5, &options, &mut rng).expect("generated");
        let second = generate_with_rng(db, 5, &options, &mut rng).expect("generated");

        let words = |p: &Puzzle| -> Vec<String> {
            p.groups
                .iter()
                .find(|g| g.source_id.as_deref() == Some("countries"))
                .expect("countries group")
                .words
                .clone()
        };
        // Two draws from a 14-item list; identical 5-word subsets in the
        // same order are vanishingly unlikely with this seed.
        assert_ne!(words(&first), words(&second));
    }
}
