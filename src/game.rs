/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! A game starts from a validated [`Puzzle`]: its N×N words are shuffled into
//! a grid, and every cell begins as its own singleton cluster.
//! The player selects two clusters to merge them.
//! A merge succeeds only when every cell of the combined cluster belongs to
//! the same hidden group; a failed merge changes nothing and surfaces a
//! transient status message.
//! When a cluster grows to exactly N cells, it is promoted: its cells are
//! marked solved and the matching group is appended to the solved list.
//! The game is won once all N groups are solved.
//!
//! Every cell carries a stable identifier assigned once at shuffle time, and
//! clusters reference cells by that identifier. Layout transforms (shuffle,
//! sort, compact) therefore only move cells between grid positions; cluster
//! membership never has to be re-derived from cell content.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::generator::colors;
use crate::generator::puzzles::{self, Puzzle, PuzzleError, PuzzleGroup};
use crate::saver::games;
use crate::snapshot::GameSnapshot;
use rand::Rng;
use rand::seq::SliceRandom;

/// Identifier of a cluster, unique within one game generation.
pub type ClusterId = u32;

/// Stable identifier of a grid cell, assigned once at shuffle time.
pub type CellId = u32;

/// How long a transient status message stays visible.
const MESSAGE_TTL: Duration = Duration::from_millis(1500);

/// How long a solved-group announcement stays visible.
const SOLVED_MESSAGE_TTL: Duration = Duration::from_millis(2000);

/// Maximum length of a cluster label, in characters.
pub const MAX_LABEL_LEN: usize = 40;

/// One placed word token in the grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    /// Stable cell identifier.
    pub cell_id: CellId,

    /// The word on the cell.
    pub word: String,

    /// Index of the hidden group this word belongs to.
    pub group_index: usize,

    /// Cluster the cell currently belongs to.
    pub cluster_id: ClusterId,

    /// Whether the cell's cluster was promoted to a solved group.
    #[serde(default)]
    pub solved: bool,
}

/// A fully assembled group, promoted out of active play.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SolvedGroup {
    /// The ground-truth group.
    #[serde(flatten)]
    pub group: PuzzleGroup,

    /// Index of the group in the puzzle.
    pub group_index: usize,
}

/// A transient status message with its expiry time.
#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    expires: Instant,
}

/// Manage the status of the game in progress.
#[derive(Debug)]
pub struct Game {
    /// The puzzle being played.
    puzzle: Puzzle,

    /// Identity of the game for the persistence adapter.
    save_id: String,

    /// The word grid. A None entry is an inert placeholder slot left by the
    /// compact transform.
    grid: Vec<Option<GridCell>>,

    /// Active clusters: cluster identifier to member cell identifiers.
    clusters: HashMap<ClusterId, Vec<CellId>>,

    /// Colors of the merged clusters. Singleton clusters have no color.
    cluster_colors: HashMap<ClusterId, String>,

    /// Player annotations on clusters.
    cluster_labels: HashMap<ClusterId, String>,

    /// Cluster awaiting a second choice, if any.
    selected_cluster: Option<ClusterId>,

    /// Groups solved so far, in completion order.
    solved_groups: Vec<SolvedGroup>,

    /// Identifier for the next merged cluster.
    next_cluster_id: ClusterId,

    /// Index for the next allocated cluster color.
    next_color_index: u32,

    /// Transient status message.
    status: Option<StatusMessage>,
}

impl Game {
    /// Create a game for the provided puzzle with a fresh random shuffle.
    ///
    /// # Errors
    ///
    /// Return a [`PuzzleError`] when the puzzle fails structural validation.
    /// No grid state is initialized in that case.
    pub fn new(puzzle: Puzzle) -> Result<Self, PuzzleError> {
        Self::new_with_rng(puzzle, &mut rand::rng())
    }

    /// Create a game with the provided random number generator.
    pub fn new_with_rng(puzzle: Puzzle, rng: &mut impl Rng) -> Result<Self, PuzzleError> {
        puzzles::validate(&puzzle)?;

        let save_id: String = games::generate_game_id(&puzzle);
        let mut game = Self {
            puzzle,
            save_id,
            grid: Vec::new(),
            clusters: HashMap::new(),
            cluster_colors: HashMap::new(),
            cluster_labels: HashMap::new(),
            selected_cluster: None,
            solved_groups: Vec::new(),
            next_cluster_id: 0,
            next_color_index: 0,
            status: None,
        };
        game.reset_with_rng(rng);
        Ok(game)
    }

    /// Re-create a game from a saved snapshot.
    ///
    /// The state is restored verbatim; the selection is cleared.
    ///
    /// # Errors
    ///
    /// Return a [`PuzzleError`] when the snapshot's puzzle fails structural
    /// validation.
    pub fn restore(snapshot: GameSnapshot) -> Result<Self, PuzzleError> {
        puzzles::validate(&snapshot.puzzle)?;

        let mut game = Self {
            puzzle: snapshot.puzzle,
            save_id: snapshot.id,
            grid: snapshot.grid,
            clusters: snapshot.clusters,
            cluster_colors: snapshot.cluster_colors,
            cluster_labels: snapshot.cluster_labels,
            selected_cluster: None,
            solved_groups: snapshot.solved_groups,
            next_cluster_id: snapshot.next_cluster_id,
            next_color_index: snapshot.next_color_index,
            status: None,
        };
        game.set_status("Game restored!", MESSAGE_TTL);
        Ok(game)
    }

    /// Discard all progress and start over with a new random shuffle.
    pub fn reset(&mut self) {
        self.reset_with_rng(&mut rand::rng());
    }

    /// Reset the game with the provided random number generator.
    pub fn reset_with_rng(&mut self, rng: &mut impl Rng) {
        self.grid = Self::shuffled_grid(&self.puzzle, rng);
        self.clusters = (0..self.grid.len() as ClusterId)
            .map(|id| (id, vec![id]))
            .collect();
        self.cluster_colors.clear();
        self.cluster_labels.clear();
        self.selected_cluster = None;
        self.solved_groups.clear();
        self.next_cluster_id = self.grid.len() as ClusterId;
        self.next_color_index = 0;
        self.status = None;
    }

    /// Flatten the puzzle groups into labeled cells and shuffle them.
    ///
    /// Cell identifiers match the initial positions, and every cell starts as
    /// its own singleton cluster.
    fn shuffled_grid(puzzle: &Puzzle, rng: &mut impl Rng) -> Vec<Option<GridCell>> {
        let mut words: Vec<(String, usize)> = puzzle
            .groups
            .iter()
            .enumerate()
            .flat_map(|(group_index, group)| {
                group
                    .words
                    .iter()
                    .cloned()
                    .map(move |word| (word, group_index))
            })
            .collect();
        words.shuffle(rng);

        words
            .into_iter()
            .enumerate()
            .map(|(index, (word, group_index))| {
                Some(GridCell {
                    cell_id: index as CellId,
                    word,
                    group_index,
                    cluster_id: index as ClusterId,
                    solved: false,
                })
            })
            .collect()
    }

    /// Handle a click on a cluster.
    ///
    /// The first click selects the cluster, clicking the selected cluster
    /// again deselects it, and clicking a second cluster attempts a merge.
    /// The selection is cleared after a merge attempt, whatever its outcome.
    pub fn select_cluster(&mut self, cluster_id: ClusterId) {
        if !self.clusters.contains_key(&cluster_id) {
            debug!("Ignoring click on unknown cluster {cluster_id}");
            return;
        }

        match self.selected_cluster {
            None => {
                self.selected_cluster = Some(cluster_id);
                self.status = None;
            }
            Some(current) if current == cluster_id => {
                self.selected_cluster = None;
            }
            Some(current) => {
                self.merge_clusters(current, cluster_id);
                self.selected_cluster = None;
            }
        }
    }

    /// Merge two clusters.
    ///
    /// The merge succeeds only when every cell of the combined cluster shares
    /// one group index. A rejected merge mutates nothing and surfaces a
    /// transient message.
    ///
    /// On success, the member cells move to a freshly allocated cluster
    /// identifier. When the merged cluster reaches the puzzle size, it is
    /// promoted: the cells are marked solved, the group is appended to the
    /// solved list, and the cluster entry is deleted.
    fn merge_clusters(&mut self, first: ClusterId, second: ClusterId) -> bool {
        let Some(first_cells) = self.clusters.get(&first).cloned() else {
            return false;
        };
        let Some(second_cells) = self.clusters.get(&second).cloned() else {
            return false;
        };

        let merged: Vec<CellId> = first_cells
            .iter()
            .chain(second_cells.iter())
            .copied()
            .collect();
        let Some(&first_cell) = merged.first() else {
            return false;
        };
        let Some(target_group) = self.cell_group(first_cell) else {
            return false;
        };

        if merged
            .iter()
            .any(|&cell_id| self.cell_group(cell_id) != Some(target_group))
        {
            self.set_status("These don't belong to the same group!", MESSAGE_TTL);
            return false;
        }

        let first_size: usize = first_cells.len();
        let second_size: usize = second_cells.len();
        let new_id: ClusterId = self.next_cluster_id;
        self.next_cluster_id += 1;

        let color: String = self.resolve_color(first, second, first_size, second_size);
        let label: Option<String> = self.resolve_label(first, second, first_size, second_size);

        let n: usize = self.puzzle.groups.len();
        let promoted: bool = merged.len() == n;
        let members: HashSet<CellId> = merged.iter().copied().collect();
        for cell in self.grid.iter_mut().flatten() {
            if members.contains(&cell.cell_id) {
                cell.cluster_id = new_id;
                if promoted {
                    cell.solved = true;
                }
            }
        }

        self.clusters.remove(&first);
        self.clusters.remove(&second);
        self.cluster_colors.remove(&first);
        self.cluster_colors.remove(&second);
        self.cluster_labels.remove(&first);
        self.cluster_labels.remove(&second);

        if promoted {
            let group: PuzzleGroup = self.puzzle.groups[target_group].clone();
            self.set_status(&format!("Found: {}!", group.name), SOLVED_MESSAGE_TTL);
            self.solved_groups.push(SolvedGroup {
                group,
                group_index: target_group,
            });
        } else {
            self.clusters.insert(new_id, merged);
            self.cluster_colors.insert(new_id, color);
            if let Some(label) = label {
                self.cluster_labels.insert(new_id, label);
            }
        }
        true
    }

    /// Resolve the color of a merged cluster.
    ///
    /// Two singletons get a brand-new color. When exactly one operand is a
    /// singleton, the other operand's color is inherited. When both operands
    /// are merged clusters, the larger one wins; on a tie, the second
    /// operand's color wins.
    fn resolve_color(
        &mut self,
        first: ClusterId,
        second: ClusterId,
        first_size: usize,
        second_size: usize,
    ) -> String {
        if first_size == 1 && second_size == 1 {
            return self.allocate_color();
        }

        let inherited: Option<String> = if first_size == 1 {
            self.cluster_colors.get(&second).cloned()
        } else if second_size == 1 {
            self.cluster_colors.get(&first).cloned()
        } else if first_size > second_size {
            self.cluster_colors.get(&first).cloned()
        } else {
            self.cluster_colors.get(&second).cloned()
        };

        // Merged operands always carry a color entry.
        inherited.unwrap_or_else(|| self.allocate_color())
    }

    /// Allocate the next cluster color.
    fn allocate_color(&mut self) -> String {
        let color: String = colors::cluster_color(self.next_color_index);
        self.next_color_index += 1;
        color
    }

    /// Resolve the label of a merged cluster.
    ///
    /// An existing label wins over an absent one. When both operands carry a
    /// label, the larger operand's label wins; on a tie, the second operand's
    /// label wins.
    fn resolve_label(
        &self,
        first: ClusterId,
        second: ClusterId,
        first_size: usize,
        second_size: usize,
    ) -> Option<String> {
        let first_label: Option<String> = self.cluster_labels.get(&first).cloned();
        let second_label: Option<String> = self.cluster_labels.get(&second).cloned();

        match (first_label, second_label) {
            (Some(label), None) => Some(label),
            (None, Some(label)) => Some(label),
            (Some(first_label), Some(second_label)) => {
                if first_size > second_size {
                    Some(first_label)
                } else {
                    Some(second_label)
                }
            }
            (None, None) => None,
        }
    }

    /// Annotate a cluster with a player-provided label.
    ///
    /// The label is trimmed and truncated to [`MAX_LABEL_LEN`] characters; an
    /// empty or whitespace-only label clears the annotation. Labels never
    /// affect merge validity or the win condition.
    pub fn set_label(&mut self, cluster_id: ClusterId, text: &str) {
        if !self.clusters.contains_key(&cluster_id) {
            debug!("Ignoring label on unknown cluster {cluster_id}");
            return;
        }

        let trimmed: &str = text.trim();
        if trimmed.is_empty() {
            self.cluster_labels.remove(&cluster_id);
            return;
        }
        let label: String = trimmed.chars().take(MAX_LABEL_LEN).collect();
        self.cluster_labels.insert(cluster_id, label);
    }

    /// Randomly rearrange the unsolved cells.
    ///
    /// Only display positions change; cluster membership is untouched.
    pub fn shuffle_grid(&mut self) {
        self.shuffle_grid_with_rng(&mut rand::rng());
    }

    /// Rearrange the unsolved cells with the provided random number
    /// generator.
    pub fn shuffle_grid_with_rng(&mut self, rng: &mut impl Rng) {
        let positions: Vec<usize> = self.unsolved_positions();
        let mut cells: Vec<GridCell> = self.take_cells(&positions);
        cells.shuffle(rng);
        self.place_cells(&positions, cells);
    }

    /// Order the unsolved cells lexicographically by word.
    pub fn sort_grid(&mut self) {
        let positions: Vec<usize> = self.unsolved_positions();
        let mut cells: Vec<GridCell> = self.take_cells(&positions);
        cells.sort_by(|a, b| a.word.cmp(&b.word));
        self.place_cells(&positions, cells);
    }

    /// Move all unsolved cells to the front of the grid.
    ///
    /// Gaps left by solved cells are closed, and the remainder of the grid is
    /// filled with inert placeholder slots.
    pub fn compact_grid(&mut self) {
        let len: usize = self.grid.len();
        let mut grid: Vec<Option<GridCell>> = self
            .grid
            .drain(..)
            .flatten()
            .filter(|cell| !cell.solved)
            .map(Some)
            .collect();
        grid.resize(len, None);
        self.grid = grid;
    }

    /// Positions of the unsolved cells, in grid order.
    fn unsolved_positions(&self) -> Vec<usize> {
        self.grid
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.as_ref().is_some_and(|cell| !cell.solved))
            .map(|(position, _)| position)
            .collect()
    }

    /// Remove the cells at the given positions from the grid.
    fn take_cells(&mut self, positions: &[usize]) -> Vec<GridCell> {
        let mut cells: Vec<GridCell> = Vec::with_capacity(positions.len());
        for &position in positions {
            if let Some(cell) = self.grid[position].take() {
                cells.push(cell);
            }
        }
        cells
    }

    /// Place cells back into the grid at the given positions.
    fn place_cells(&mut self, positions: &[usize], cells: Vec<GridCell>) {
        for (&position, cell) in positions.iter().zip(cells) {
            self.grid[position] = Some(cell);
        }
    }

    /// Return the group index of the given cell.
    fn cell_group(&self, cell_id: CellId) -> Option<usize> {
        self.grid
            .iter()
            .flatten()
            .find(|cell| cell.cell_id == cell_id)
            .map(|cell| cell.group_index)
    }

    /// Capture a snapshot of the current state for the persistence adapter.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }

    /// Set a transient status message.
    fn set_status(&mut self, text: &str, ttl: Duration) {
        self.status = Some(StatusMessage {
            text: String::from(text),
            expires: Instant::now() + ttl,
        });
    }

    /// Return the current status message, or None once it expired.
    pub fn message(&self) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|message| Instant::now() < message.expires)
            .map(|message| message.text.as_str())
    }

    /// The puzzle being played.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Identity of the game for the persistence adapter.
    pub fn save_id(&self) -> &str {
        &self.save_id
    }

    /// The word grid, in display order.
    pub fn grid(&self) -> &[Option<GridCell>] {
        &self.grid
    }

    /// The active clusters.
    pub fn clusters(&self) -> &HashMap<ClusterId, Vec<CellId>> {
        &self.clusters
    }

    /// Colors of the merged clusters.
    pub fn cluster_colors(&self) -> &HashMap<ClusterId, String> {
        &self.cluster_colors
    }

    /// Player annotations on clusters.
    pub fn cluster_labels(&self) -> &HashMap<ClusterId, String> {
        &self.cluster_labels
    }

    /// The cluster awaiting a second choice, if any.
    pub fn selected_cluster(&self) -> Option<ClusterId> {
        self.selected_cluster
    }

    /// Groups solved so far, in completion order.
    pub fn solved_groups(&self) -> &[SolvedGroup] {
        &self.solved_groups
    }

    /// Identifier for the next merged cluster.
    pub fn next_cluster_id(&self) -> ClusterId {
        self.next_cluster_id
    }

    /// Index for the next allocated cluster color.
    pub fn next_color_index(&self) -> u32 {
        self.next_color_index
    }

    /// Whether all groups are solved.
    pub fn is_won(&self) -> bool {
        self.solved_groups.len() == self.puzzle.groups.len()
    }
}
