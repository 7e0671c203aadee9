/*
cli_options.rs

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

//! Process command-line options.
//!
//! These options are intended for developers authoring word lists and
//! puzzles.
//!
//! # Examples
//!
//! List the curated word lists:
//!
//! ```
//! $ connectwords --ls
//! animals              Animals (12 items)
//! board-games          Board Games (10 items)
//! ...
//! ```
//!
//! Generate a 5x5 puzzle that includes the countries list, and print it as
//! JSON:
//!
//! ```
//! $ connectwords --generate 5 --include countries
//! {
//!   "id": 1772409600000,
//!   "title": "Generated Puzzle (5×5)",
//!   ...
//! }
//! ```

use clap::Parser;
use std::collections::BTreeSet;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::config::COPYRIGHT_NOTICE;
use crate::game::{ClusterId, Game};
use crate::generator::lists::{self, ListDb};
use crate::generator::puzzles::{self, Puzzle};
use crate::generator::random_puzzle::{self, GenerateOptions};
use crate::saver::games::SaverGames;
use crate::snapshot::GameSnapshot;

/// Generate and inspect word-grouping puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the word lists in the database
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Print statistics about the word list database
    #[arg(short, long, default_value_t = false)]
    stats: bool,

    /// List the preset puzzles
    #[arg(short, long, default_value_t = false)]
    presets: bool,

    /// Generate a random NxN puzzle and print it as JSON
    #[arg(short, long, value_name = "N")]
    generate: Option<usize>,

    /// Identifier of a list that must be in the generated puzzle
    #[arg(short, long, value_name = "ID", requires = "generate")]
    include: Vec<String>,

    /// Identifier of a list that must not be in the generated puzzle
    #[arg(short = 'x', long, value_name = "ID", requires = "generate")]
    exclude: Vec<String>,

    /// Play an automated game on a generated 5x5 puzzle. With --saves DIR,
    /// the finished game is saved there and restored back as a check
    #[arg(long, default_value_t = false)]
    demo: bool,

    /// Use a word list database file instead of the curated lists
    #[arg(long, value_name = "FILE")]
    lists: Option<PathBuf>,

    /// List the saved games in the provided data directory
    #[arg(long, value_name = "DIR")]
    saves: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Load the database from the `--lists` file, or fall back to the curated
/// lists.
fn load_db(path: Option<&PathBuf>) -> Result<ListDb, Box<dyn Error>> {
    match path {
        Some(path) => {
            let file: File = File::open(path)?;
            Ok(ListDb::from_reader(BufReader::new(file))?)
        }
        None => Ok(lists::curated().clone()),
    }
}

/// Parse and process command-line options.
///
/// Return the program exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let db: ListDb = match load_db(args.lists.as_ref()) {
        Ok(db) => db,
        Err(error) => {
            eprintln!("Cannot load the word list database: {error}");
            return 1;
        }
    };

    //
    // List the word lists
    //
    if args.ls {
        for (id, name, count) in db.available_lists() {
            println!("{id:<24} {name} ({count} items)");
        }
        return 0;
    }

    //
    // Database statistics
    //
    if args.stats {
        let stats = db.stats();
        println!("Generated: {}", stats.generated);
        println!("Lists: {}", stats.total_lists);
        println!("Items: {}", stats.total_items);
        println!(
            "Items per list: min {}, max {}, average {}",
            stats.stats.min, stats.stats.max, stats.stats.avg
        );
        println!("Largest square puzzle: {0}x{0}", db.max_puzzle_size());
        for (size, available) in &stats.available_for {
            println!("  {size:>2}x{size:<2} -> {available} eligible lists");
        }
        return 0;
    }

    //
    // List the preset puzzles
    //
    if args.presets {
        for puzzle in puzzles::preset_puzzles() {
            println!(
                "{:<3} {} ({} groups)",
                puzzle.id,
                puzzle.title,
                puzzle.groups.len()
            );
        }
        return 0;
    }

    //
    // Generate a random puzzle
    //
    if let Some(n) = args.generate {
        let options = GenerateOptions {
            exclude_ids: args.exclude,
            include_ids: args.include,
        };
        let puzzle: Puzzle = match random_puzzle::generate(&db, n, &options) {
            Some(puzzle) => puzzle,
            None => {
                eprintln!(
                    "Cannot generate a {0}x{0} puzzle from this database; try a smaller size \
                     or fewer exclusions.",
                    n
                );
                return 1;
            }
        };
        match serde_json::to_string_pretty(&puzzle) {
            Ok(document) => println!("{document}"),
            Err(error) => {
                eprintln!("Cannot serialize the puzzle: {error}");
                return 1;
            }
        }
        return 0;
    }

    //
    // Play an automated demo game
    //
    if args.demo {
        return demo_game(&db, args.saves);
    }

    //
    // List the saved games
    //
    if let Some(data_dir) = args.saves {
        let saver = SaverGames::new(data_dir);
        for game in saver.get_games() {
            let state: &str = if game.is_complete {
                "complete"
            } else {
                "in progress"
            };
            println!(
                "{:<20} {} ({} of {} groups, {state})",
                game.id,
                game.puzzle.title,
                game.solved_groups.len(),
                game.puzzle.groups.len()
            );
        }
        return 0;
    }

    let mut command = <Args as clap::CommandFactory>::command();
    let _ = command.print_help();
    0
}

/// Generate a 5x5 puzzle and solve it by merging clusters group by group,
/// printing the engine messages along the way.
fn demo_game(db: &ListDb, saves: Option<PathBuf>) -> u8 {
    let puzzle: Puzzle = match random_puzzle::generate(db, 5, &GenerateOptions::default()) {
        Some(puzzle) => puzzle,
        None => {
            eprintln!("Cannot generate the demo puzzle from this database.");
            return 1;
        }
    };
    println!("{}", puzzle.title);

    let mut game: Game = match Game::new(puzzle) {
        Ok(game) => game,
        Err(error) => {
            eprintln!("Invalid puzzle: {error}");
            return 1;
        }
    };
    game.reset();
    game.shuffle_grid();

    let n: usize = game.puzzle().groups.len();
    for g in 0..n {
        // Merge the group's clusters two at a time until promotion.
        loop {
            let clusters: BTreeSet<ClusterId> = game
                .grid()
                .iter()
                .flatten()
                .filter(|cell| cell.group_index == g && !cell.solved)
                .map(|cell| cell.cluster_id)
                .collect();
            let mut clusters = clusters.into_iter();
            let (Some(first), Some(second)) = (clusters.next(), clusters.next()) else {
                break;
            };
            if game.clusters()[&first].len() == 2 {
                game.set_label(first, &format!("guess {g}"));
            }
            game.select_cluster(first);
            game.select_cluster(second);
        }
        if let Some(message) = game.message() {
            println!("{message}");
        }
        game.compact_grid();
        game.sort_grid();
    }

    for solved in game.solved_groups() {
        println!("  {}: {}", solved.group.name, solved.group.words.join(", "));
    }
    let snapshot: GameSnapshot = game.snapshot();
    println!(
        "Solved {} of {n} groups (complete: {}), snapshot id {}",
        game.solved_groups().len(),
        snapshot.is_complete,
        snapshot.id
    );

    if let Some(data_dir) = saves {
        let saver = SaverGames::new(data_dir);
        if let Err(error) = saver.save_game(&snapshot) {
            eprintln!("Cannot save the demo game: {error}");
            return 1;
        }
        let Some(found) = saver.find_game(&snapshot.id) else {
            eprintln!("The saved demo game cannot be found back");
            return 1;
        };
        match Game::restore(found) {
            Ok(restored) => println!(
                "Saved and restored game {} ({} groups solved)",
                restored.save_id(),
                restored.solved_groups().len()
            ),
            Err(error) => {
                eprintln!("Cannot restore the saved demo game: {error}");
                return 1;
            }
        }
    }
    u8::from(!game.is_won())
}
