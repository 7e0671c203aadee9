/*
colors.rs

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

//! Deterministic color assignment.
//!
//! Both functions map an index to a CSS `hsl()` string so that the same index
//! always produces the same color.
//! Group colors divide the hue circle evenly among the N groups of a puzzle.
//! Cluster colors step around the hue circle by the golden angle, which keeps
//! consecutive colors far apart without knowing the total in advance.

/// Golden-angle hue step for cluster colors, in degrees.
const GOLDEN_ANGLE: f64 = 137.5;

/// Return the color for the group at `index` in a puzzle with `total` groups.
pub fn group_color(index: usize, total: usize) -> String {
    let hue: f64 = (index as f64 * (360.0 / total as f64)) % 360.0;
    format!("hsl({hue}, 70%, 80%)")
}

/// Return the color for the `index`-th merged cluster of a game.
pub fn cluster_color(index: u32) -> String {
    let hue: f64 = (f64::from(index) * GOLDEN_ANGLE) % 360.0;
    format!("hsl({hue}, 70%, 85%)")
}
