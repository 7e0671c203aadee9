/*
snapshot.rs

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

//! Serializable capture of a full game state.
//!
//! A [`GameSnapshot`] is a deep copy of the engine state at the moment of
//! capture; the engine and the persistence adapter never share mutable
//! state. Restoring a snapshot fully replaces the engine state (see
//! [`crate::game::Game::restore`]).
//!
//! The document carries an explicit schema version so that later structural
//! changes can be migrated instead of silently breaking old saves. Documents
//! written before the version field existed deserialize with the current
//! version, and documents without cluster labels get an empty label map.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::game::{CellId, ClusterId, Game, GridCell, SolvedGroup};
use crate::generator::puzzles::Puzzle;

/// Current snapshot schema version.
pub const SNAPSHOT_VERSION: u32 = 1;

fn default_version() -> u32 {
    SNAPSHOT_VERSION
}

/// A saved game.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    /// Schema version of the document.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Save identity (see [`crate::saver::games::generate_game_id`]).
    pub id: String,

    /// The puzzle being played.
    pub puzzle: Puzzle,

    /// The word grid, in display order.
    pub grid: Vec<Option<GridCell>>,

    /// Active clusters: cluster identifier to member cell identifiers.
    pub clusters: HashMap<ClusterId, Vec<CellId>>,

    /// Colors of the merged clusters.
    pub cluster_colors: HashMap<ClusterId, String>,

    /// Player annotations on clusters.
    #[serde(default)]
    pub cluster_labels: HashMap<ClusterId, String>,

    /// Groups solved so far, in completion order.
    pub solved_groups: Vec<SolvedGroup>,

    /// Identifier for the next merged cluster.
    pub next_cluster_id: ClusterId,

    /// Index for the next allocated cluster color.
    pub next_color_index: u32,

    /// Whether the game was won when the snapshot was taken.
    pub is_complete: bool,

    /// Capture timestamp, in milliseconds since the Unix epoch.
    pub saved_at: i64,
}

impl GameSnapshot {
    /// Capture a [`GameSnapshot`] for the provided [`Game`] object.
    pub fn capture(game: &Game) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: String::from(game.save_id()),
            puzzle: game.puzzle().clone(),
            grid: game.grid().to_vec(),
            clusters: game.clusters().clone(),
            cluster_colors: game.cluster_colors().clone(),
            cluster_labels: game.cluster_labels().clone(),
            solved_groups: game.solved_groups().to_vec(),
            next_cluster_id: game.next_cluster_id(),
            next_color_index: game.next_color_index(),
            is_complete: game.is_won(),
            saved_at: Utc::now().timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::puzzles::PuzzleGroup;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn test_puzzle(n: usize) -> Puzzle {
        Puzzle {
            id: 42,
            title: format!("Test ({n}x{n})"),
            groups: (0..n)
                .map(|g| PuzzleGroup {
                    name: format!("Group {g}"),
                    words: (0..n).map(|w| format!("g{g}w{w}")).collect(),
                    color: None,
                    source_id: None,
                })
                .collect(),
            generated: false,
            size: n,
        }
    }

    fn cluster_of(game: &Game, word: &str) -> ClusterId {
        game.grid()
            .iter()
            .flatten()
            .find(|cell| cell.word == word)
            .map(|cell| cell.cluster_id)
            .expect("word is in the grid")
    }

    fn merge_words(game: &mut Game, first: &str, second: &str) {
        let first_cluster = cluster_of(game, first);
        game.select_cluster(first_cluster);
        let second_cluster = cluster_of(game, second);
        game.select_cluster(second_cluster);
    }

    fn in_progress_game() -> Game {
        let mut game = Game::new_with_rng(test_puzzle(5), &mut StdRng::seed_from_u64(20))
            .expect("test puzzle is valid");
        // One solved group, one labeled partial cluster.
        for w in 1..5 {
            merge_words(&mut game, "g0w0", &format!("g0w{w}"));
        }
        merge_words(&mut game, "g1w0", "g1w1");
        game.set_label(cluster_of(&game, "g1w0"), "maybe greek");
        game
    }

    #[test]
    fn json_round_trip_preserves_an_in_progress_game() {
        let game = in_progress_game();
        let snapshot: GameSnapshot = game.snapshot();
        assert!(!snapshot.is_complete);
        assert_eq!(snapshot.version, SNAPSHOT_VERSION);

        let document: String = serde_json::to_string(&snapshot).expect("snapshot serializes");
        let decoded: GameSnapshot = serde_json::from_str(&document).expect("snapshot parses");
        assert_eq!(decoded, snapshot);

        let restored: Game = Game::restore(decoded).expect("snapshot restores");
        assert_eq!(restored.grid(), game.grid());
        assert_eq!(restored.clusters(), game.clusters());
        assert_eq!(restored.cluster_colors(), game.cluster_colors());
        assert_eq!(restored.cluster_labels(), game.cluster_labels());
        assert_eq!(restored.solved_groups(), game.solved_groups());
        assert_eq!(restored.next_cluster_id(), game.next_cluster_id());
        assert_eq!(restored.next_color_index(), game.next_color_index());
        assert_eq!(restored.save_id(), game.save_id());
        assert_eq!(restored.selected_cluster(), None);
        assert_eq!(restored.message(), Some("Game restored!"));
    }

    #[test]
    fn json_round_trip_preserves_a_won_game() {
        let mut game = Game::new_with_rng(test_puzzle(5), &mut StdRng::seed_from_u64(21))
            .expect("test puzzle is valid");
        for g in 0..5 {
            for w in 1..5 {
                merge_words(&mut game, &format!("g{g}w0"), &format!("g{g}w{w}"));
            }
        }
        assert!(game.is_won());

        let snapshot: GameSnapshot = game.snapshot();
        assert!(snapshot.is_complete);

        let document: String = serde_json::to_string(&snapshot).expect("snapshot serializes");
        let decoded: GameSnapshot = serde_json::from_str(&document).expect("snapshot parses");
        assert_eq!(decoded, snapshot);

        let restored: Game = Game::restore(decoded).expect("snapshot restores");
        assert!(restored.is_won());
        assert_eq!(restored.solved_groups().len(), 5);
    }

    #[test]
    fn documents_without_a_version_still_load() {
        let snapshot: GameSnapshot = in_progress_game().snapshot();
        let mut document: serde_json::Value =
            serde_json::to_value(&snapshot).expect("snapshot serializes");

        let object = document.as_object_mut().expect("snapshot is an object");
        object.remove("version");
        object.remove("clusterLabels");

        let decoded: GameSnapshot =
            serde_json::from_value(document).expect("legacy document parses");
        assert_eq!(decoded.version, SNAPSHOT_VERSION);
        assert!(decoded.cluster_labels.is_empty());
    }

    #[test]
    fn wire_format_uses_camel_case() {
        let snapshot: GameSnapshot = in_progress_game().snapshot();
        let document: serde_json::Value =
            serde_json::to_value(&snapshot).expect("snapshot serializes");
        let object = document.as_object().expect("snapshot is an object");

        for key in [
            "clusterColors",
            "clusterLabels",
            "solvedGroups",
            "nextClusterId",
            "nextColorIndex",
            "isComplete",
            "savedAt",
        ] {
            assert!(object.contains_key(key), "missing wire field {key}");
        }
        let solved = object["solvedGroups"][0]
            .as_object()
            .expect("solved group is an object");
        assert!(solved.contains_key("groupIndex"));
        assert!(solved.contains_key("words"), "flattened group fields");
    }
}
