/*
generator.rs

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

//! Manage puzzles and generate random grouping puzzles.
//!
//! A puzzle is a square arrangement of N category groups with N words each,
//! represented by [`puzzles::Puzzle`] objects.
//! A few hand-authored puzzles ship with the application; see
//! [`puzzles::preset_puzzles`].
//!
//! Random puzzles are built from the list database, a read-only collection of
//! named category lists represented by the [`lists::ListDb`] object.
//! For an N×N puzzle, the [`random_puzzle::generate`] function selects N lists
//! that each have at least N items, and draws N items from each.
//! When the database does not contain enough lists for the requested size, the
//! function returns None, and the caller offers a smaller size instead.
//!
//! Before a [`puzzles::Puzzle`] object is played, it must pass the
//! [`puzzles::validate`] structural check, whether it was generated or
//! hand-authored.
//!
//! The [`colors`] module provides the deterministic hue-rotation functions
//! used for group and cluster colors.

pub mod colors;
pub mod lists;
pub mod puzzles;
pub mod random_puzzle;
