//! Core model for unique-distance board search.
//!
//! A board of size `n` places `n` markers on an `n`×`n` grid and is
//! identified by a `u64` id in radix-`n` positional encoding. This crate
//! provides the id ↔ marker codec ([`Board`]), squared pair distances and
//! the reusable uniqueness test ([`DistanceSet`]), and the dihedral
//! transforms ([`Board::mirror`], [`Board::rotate`], [`Board::normalize`])
//! that collapse each symmetry class to one canonical representative.
//!
//! The search drivers live in `gridlace-search`; this crate performs no I/O.
//!
//! # Examples
//!
//! ```
//! use gridlace_core::{Board, DistanceSet, board};
//!
//! let mut set = DistanceSet::new(board::max_distance(3));
//! let mut board = Board::generate(3, 441);
//! assert!(set.all_unique(&board.square_distances()));
//!
//! board.normalize();
//! let canonical = board.id();
//!
//! // The canonical id identifies the whole symmetry class.
//! board.rotate();
//! board.normalize();
//! assert_eq!(board.id(), canonical);
//! ```

pub use self::{
    board::{Board, ParseBoardError, amount, max_distance},
    coord::Coord,
    distance::DistanceSet,
    transform::Axis,
};

pub mod board;
mod coord;
mod distance;
mod transform;
