/*
puzzles.rs

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

//! Puzzle representation and structural validation.
//!
//! A [`Puzzle`] holds N [`PuzzleGroup`] objects of N words each.
//! The [`validate`] function is the single structural gate: the game engine
//! refuses to initialize a grid from a puzzle that does not pass it, whether
//! the puzzle was generated or hand-authored.
//!
//! Word uniqueness is deliberately not checked: two groups may legitimately
//! share a word, which makes for ambiguous (harder) puzzles.
//!
//! The module also provides the hand-authored preset puzzles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest allowed number of groups in a puzzle.
pub const MIN_GROUPS: usize = 5;

/// Largest allowed number of groups in a puzzle.
pub const MAX_GROUPS: usize = 100;

/// One category group: the ground-truth name and its member words.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleGroup {
    /// Category name, revealed when the group is solved.
    pub name: String,

    /// Member words. Must have exactly as many entries as the puzzle has
    /// groups.
    pub words: Vec<String>,

    /// Display color hint for the solved group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Identifier of the database list this group was drawn from, for
    /// generated puzzles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
}

/// A complete N×N grouping puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    /// Puzzle identifier. Preset puzzles use small fixed integers; generated
    /// puzzles use their creation timestamp in milliseconds.
    pub id: i64,

    /// Display title.
    pub title: String,

    /// The category groups. The group count defines N.
    pub groups: Vec<PuzzleGroup>,

    /// Whether the puzzle was produced by the generator.
    #[serde(default)]
    pub generated: bool,

    /// Puzzle size N. Kept in the document for display; the group count is
    /// the source of truth.
    #[serde(default)]
    pub size: usize,
}

/// Structural defects reported by [`validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum PuzzleError {
    /// The group count is outside [`MIN_GROUPS`]..=[`MAX_GROUPS`].
    GroupCount(usize),

    /// A group's word count does not match the group count.
    GroupSize {
        /// Name of the offending group.
        group: String,

        /// Expected word count (the group count).
        expected: usize,

        /// Actual word count.
        found: usize,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PuzzleError::GroupCount(count) => write!(
                f,
                "Puzzle must have between {MIN_GROUPS} and {MAX_GROUPS} groups (found {count})"
            ),
            PuzzleError::GroupSize {
                group,
                expected,
                found,
            } => write!(
                f,
                "Each group must have exactly {expected} words (found {found} in \"{group}\")"
            ),
        }
    }
}

impl std::error::Error for PuzzleError {}

/// Check the structural invariants of a puzzle.
///
/// # Errors
///
/// Return a [`PuzzleError`] when the group count is out of bounds or when a
/// group does not have exactly as many words as there are groups.
pub fn validate(puzzle: &Puzzle) -> Result<(), PuzzleError> {
    let n: usize = puzzle.groups.len();
    if !(MIN_GROUPS..=MAX_GROUPS).contains(&n) {
        return Err(PuzzleError::GroupCount(n));
    }

    for group in &puzzle.groups {
        if group.words.len() != n {
            return Err(PuzzleError::GroupSize {
                group: group.name.clone(),
                expected: n,
                found: group.words.len(),
            });
        }
    }
    Ok(())
}

/// Build a group from static data.
fn group(name: &str, color: &str, words: &[&str]) -> PuzzleGroup {
    PuzzleGroup {
        name: String::from(name),
        words: words.iter().map(|w| String::from(*w)).collect(),
        color: Some(String::from(color)),
        source_id: None,
    }
}

/// Return the hand-authored preset puzzles.
pub fn preset_puzzles() -> Vec<Puzzle> {
    vec![
        Puzzle {
            id: 1,
            title: String::from("Sample Puzzle (5x5)"),
            groups: vec![
                group(
                    "Programming Languages",
                    "#f9df6d",
                    &["Python", "Java", "Rust", "Swift", "Kotlin"],
                ),
                group(
                    "Planets",
                    "#a0c35a",
                    &["Mars", "Venus", "Saturn", "Jupiter", "Neptune"],
                ),
                group(
                    "Musical Instruments",
                    "#b0c4ef",
                    &["Guitar", "Piano", "Drums", "Violin", "Flute"],
                ),
                group(
                    "Colors",
                    "#ba81c5",
                    &["Red", "Blue", "Green", "Yellow", "Purple"],
                ),
                group(
                    "Fruits",
                    "#f5a589",
                    &["Apple", "Banana", "Orange", "Mango", "Grape"],
                ),
            ],
            generated: false,
            size: 5,
        },
        Puzzle {
            id: 2,
            title: String::from("Sample Puzzle (6x6)"),
            groups: vec![
                group(
                    "Countries",
                    "#f9df6d",
                    &["France", "Japan", "Brazil", "Egypt", "Canada", "India"],
                ),
                group(
                    "Sports",
                    "#a0c35a",
                    &["Soccer", "Tennis", "Golf", "Hockey", "Rugby", "Cricket"],
                ),
                group(
                    "Animals",
                    "#b0c4ef",
                    &["Lion", "Eagle", "Shark", "Wolf", "Bear", "Tiger"],
                ),
                group(
                    "Elements",
                    "#ba81c5",
                    &["Gold", "Silver", "Iron", "Copper", "Zinc", "Nickel"],
                ),
                group(
                    "Trees",
                    "#f5a589",
                    &["Oak", "Pine", "Maple", "Birch", "Cedar", "Willow"],
                ),
                group(
                    "Gems",
                    "#7dd3fc",
                    &["Ruby", "Diamond", "Emerald", "Sapphire", "Opal", "Topaz"],
                ),
            ],
            generated: false,
            size: 6,
        },
        Puzzle {
            id: 3,
            title: String::from("Sample Puzzle (10x10)"),
            groups: vec![
                group(
                    "Programming Languages",
                    "#f9df6d",
                    &[
                        "Python", "Java", "Rust", "Swift", "Kotlin", "Ruby", "Scala", "Perl",
                        "Lua", "Haskell",
                    ],
                ),
                group(
                    "World Capitals",
                    "#a0c35a",
                    &[
                        "Paris", "Tokyo", "Berlin", "Cairo", "Lima", "Oslo", "Rome", "Seoul",
                        "Dublin", "Vienna",
                    ],
                ),
                group(
                    "Ocean Animals",
                    "#b0c4ef",
                    &[
                        "Whale",
                        "Dolphin",
                        "Octopus",
                        "Jellyfish",
                        "Seahorse",
                        "Starfish",
                        "Lobster",
                        "Crab",
                        "Squid",
                        "Eel",
                    ],
                ),
                group(
                    "Vegetables",
                    "#ba81c5",
                    &[
                        "Carrot", "Broccoli", "Spinach", "Tomato", "Onion", "Pepper", "Celery",
                        "Lettuce", "Cabbage", "Garlic",
                    ],
                ),
                group(
                    "Car Brands",
                    "#f5a589",
                    &[
                        "Toyota", "Honda", "Ford", "BMW", "Mercedes", "Audi", "Tesla", "Volvo",
                        "Porsche", "Ferrari",
                    ],
                ),
                group(
                    "Greek Letters",
                    "#7dd3fc",
                    &[
                        "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Theta", "Lambda",
                        "Sigma", "Omega",
                    ],
                ),
                group(
                    "Board Games",
                    "#fca5a5",
                    &[
                        "Chess",
                        "Monopoly",
                        "Scrabble",
                        "Risk",
                        "Clue",
                        "Battleship",
                        "Checkers",
                        "Backgammon",
                        "Dominoes",
                        "Yahtzee",
                    ],
                ),
                group(
                    "Composers",
                    "#86efac",
                    &[
                        "Mozart", "Beethoven", "Bach", "Chopin", "Vivaldi", "Handel", "Brahms",
                        "Haydn", "Schubert", "Liszt",
                    ],
                ),
                group(
                    "Fabrics",
                    "#fcd34d",
                    &[
                        "Cotton",
                        "Silk",
                        "Wool",
                        "Linen",
                        "Denim",
                        "Velvet",
                        "Satin",
                        "Leather",
                        "Cashmere",
                        "Polyester",
                    ],
                ),
                group(
                    "Spices",
                    "#c4b5fd",
                    &[
                        "Cinnamon", "Paprika", "Turmeric", "Cumin", "Oregano", "Basil", "Thyme",
                        "Nutmeg", "Saffron", "Ginger",
                    ],
                ),
            ],
            generated: false,
            size: 10,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle_from_word_counts(counts: &[usize]) -> Puzzle {
        Puzzle {
            id: 99,
            title: String::from("test"),
            groups: counts
                .iter()
                .enumerate()
                .map(|(g, &count)| PuzzleGroup {
                    name: format!("Group {g}"),
                    words: (0..count).map(|w| format!("g{g}w{w}")).collect(),
                    color: None,
                    source_id: None,
                })
                .collect(),
            generated: false,
            size: counts.len(),
        }
    }

    #[test]
    fn presets_pass_validation() {
        for puzzle in preset_puzzles() {
            assert_eq!(validate(&puzzle), Ok(()), "preset {} is valid", puzzle.id);
            assert_eq!(puzzle.size, puzzle.groups.len());
        }
    }

    #[test]
    fn too_few_groups_fail_validation() {
        let puzzle = puzzle_from_word_counts(&[3, 2]);
        let error = validate(&puzzle).expect_err("two groups must be rejected");
        assert_eq!(error, PuzzleError::GroupCount(2));
        assert!(!error.to_string().is_empty());
    }

    #[test]
    fn mismatched_group_size_fails_validation() {
        let puzzle = puzzle_from_word_counts(&[5, 5, 4, 5, 5]);
        let error = validate(&puzzle).expect_err("short group must be rejected");
        assert_eq!(
            error,
            PuzzleError::GroupSize {
                group: String::from("Group 2"),
                expected: 5,
                found: 4,
            }
        );
    }

    #[test]
    fn duplicate_words_across_groups_are_tolerated() {
        let mut puzzle = puzzle_from_word_counts(&[5, 5, 5, 5, 5]);
        // The same word in two groups: ambiguous, but structurally valid.
        puzzle.groups[1].words[0] = puzzle.groups[0].words[0].clone();
        assert_eq!(validate(&puzzle), Ok(()));
    }

    #[test]
    fn group_count_upper_bound_is_enforced() {
        let counts: Vec<usize> = vec![101; 101];
        let puzzle = puzzle_from_word_counts(&counts);
        assert_eq!(validate(&puzzle), Err(PuzzleError::GroupCount(101)));
    }
}
