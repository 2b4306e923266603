//! A small bitboard chess searcher.
//!
//! The crate is split in the same way a move searcher thinks: the primitive types and the
//! attack generator (`core`), the position itself along with pseudo-legal move generation
//! (`board`), the fixed-depth searchers (`bots`), evaluation and searcher traits (`tools`),
//! and finally the line-oriented command loop (`engine`).
//!
//! # Square indexing
//!
//! Unlike most bitboard libraries, square `0` is the top-left square of a printed board
//! (a8), and indexes increase to the right and then down a rank:
//!
//! ```md,ignore
//! 8 | 0  1  2  3  4  5  6  7
//! 7 | 8  9  10 11 12 13 14 15
//! 6 | 16 17 18 19 20 21 22 23
//! 5 | 24 25 26 27 28 29 30 31
//! 4 | 32 33 34 35 36 37 38 39
//! 3 | 40 41 42 43 44 45 46 47
//! 2 | 48 49 50 51 52 53 54 55
//! 1 | 56 57 58 59 60 61 62 63
//!   -------------------------
//!      a  b  c  d  e  f  g  h
//! ```
//!
//! Every shift amount in the attack generator (±1, ±7, ±8, ±9) is derived from this layout.
//!
//! # Examples
//!
//! Loading a position and searching it:
//!
//! ```
//! use bitsearch::Board;
//! use bitsearch::bots::find_best_move;
//! use bitsearch::tools::eval::MaterialEval;
//!
//! let mut board = Board::from_fen("4k3/8/8/3q4/8/8/3Q4/4K3 w - - 0 1").unwrap();
//! board.refresh_attacks();
//!
//! let mov = find_best_move(&board, 1, &MaterialEval);
//! assert_eq!(mov.to_string(), "d2d5");
//! ```
#![allow(clippy::unreadable_literal)]
#![allow(clippy::new_without_default)]

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

pub mod board;
pub mod bots;
pub mod core;
pub mod engine;
pub mod tools;

#[doc(no_inline)]
pub use crate::board::Board;
#[doc(no_inline)]
pub use crate::core::bitboard::BitBoard;
#[doc(no_inline)]
pub use crate::core::piece_move::BitMove;
#[doc(no_inline)]
pub use crate::core::sq::SQ;
#[doc(no_inline)]
pub use crate::core::{PieceType, Player};
