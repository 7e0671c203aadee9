/*
games.rs

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

//! Save and restore games.
//!
//! The save file holds every [`GameSnapshot`] in a single JSON array, most
//! recently created first, serialized with [`serde`]. Saving a snapshot whose
//! identifier is already present replaces that entry in place, so starting a
//! new game for a puzzle abandons the previous run at the same position in
//! the list.
//!
//! A missing save file means no saved games. An unreadable or corrupt save
//! file is treated the same way: the player loses the saved games, but the
//! program keeps running.

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::generator::puzzles::Puzzle;
use crate::snapshot::GameSnapshot;

/// Return the save identifier for a game of the provided puzzle.
///
/// Preset puzzles use `preset-{id}` and generated puzzles use `gen-{id}`.
/// One save slot exists per puzzle identifier.
pub fn generate_game_id(puzzle: &Puzzle) -> String {
    if puzzle.generated {
        format!("gen-{}", puzzle.id)
    } else {
        format!("preset-{}", puzzle.id)
    }
}

/// Object to save and restore games.
pub struct SaverGames {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverGames {
    /// Create a [`SaverGames`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the games
    /// must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("savedgames.json");
        debug!("Saved games file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Retrieve the saved games, most recently created first.
    ///
    /// Return an empty list when the save file does not exist or cannot be
    /// parsed.
    pub fn get_games(&self) -> Vec<GameSnapshot> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => {
                if error.kind() != ErrorKind::NotFound {
                    debug!("Cannot open {:?}: {error}", self.save_file);
                }
                return Vec::new();
            }
        };
        let reader: BufReader<File> = BufReader::new(file);
        match serde_json::from_reader(reader) {
            Ok(games) => games,
            Err(error) => {
                debug!("Cannot parse {:?}: {error}", self.save_file);
                Vec::new()
            }
        }
    }

    /// Retrieve the saved game with the provided identifier.
    pub fn find_game(&self, id: &str) -> Option<GameSnapshot> {
        self.get_games().into_iter().find(|game| game.id == id)
    }

    /// Save the provided [`GameSnapshot`] object.
    ///
    /// An existing save with the same identifier is replaced in place;
    /// otherwise the snapshot is inserted at the front of the list.
    pub fn save_game(&self, snapshot: &GameSnapshot) -> Result<(), Box<dyn Error>> {
        let mut games: Vec<GameSnapshot> = self.get_games();
        match games.iter().position(|game| game.id == snapshot.id) {
            Some(position) => games[position] = snapshot.clone(),
            None => games.insert(0, snapshot.clone()),
        }
        self.write_games(&games)
    }

    /// Delete the saved game with the provided identifier.
    pub fn delete_game(&self, id: &str) -> Result<(), Box<dyn Error>> {
        let mut games: Vec<GameSnapshot> = self.get_games();
        games.retain(|game| game.id != id);
        self.write_games(&games)
    }

    /// Write the full list of saved games to the save file.
    fn write_games(&self, games: &[GameSnapshot]) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, games)?;
        writer.flush()?;
        Ok(())
    }
}
