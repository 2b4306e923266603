//! Module for simply evaluating the strength of a current position.
//!
//! Both evaluators here are static: they look at the pieces on the board and nothing else.
//! Scores are from White's point of view.

use crate::board::Board;
use crate::core::masks::*;
use crate::core::score::*;
use crate::core::*;

use super::Evaluator;

use std::fmt;
use std::str::FromStr;

lazy_static! {
    pub static ref PAWN_POS: [[Value; SQ_CNT]; PLAYER_CNT] =
        [flatten(PAWN_POS_ARRAY), flatten(flip(PAWN_POS_ARRAY))];
    pub static ref KNIGHT_POS: [[Value; SQ_CNT]; PLAYER_CNT] =
        [flatten(KNIGHT_POS_ARRAY), flatten(flip(KNIGHT_POS_ARRAY))];
    pub static ref BISHOP_POS: [[Value; SQ_CNT]; PLAYER_CNT] =
        [flatten(BISHOP_POS_ARRAY), flatten(flip(BISHOP_POS_ARRAY))];
    pub static ref KING_POS: [[Value; SQ_CNT]; PLAYER_CNT] =
        [flatten(KING_POS_ARRAY), flatten(flip(KING_POS_ARRAY))];
}

// Tables are written from White's side, rank 8 on top, which is the order of the square
// indexes. Black reads them flipped.
const PAWN_POS_ARRAY: [[Value; FILE_CNT]; RANK_CNT] = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], // RANK_8
    [50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0],
    [10.0, 10.0, 20.0, 30.0, 30.0, 20.0, 10.0, 10.0],
    [5.0, 5.0, 10.0, 25.0, 25.0, 10.0, 5.0, 5.0],
    [0.0, 0.0, 0.0, 20.0, 20.0, 0.0, 0.0, 0.0],
    [5.0, -5.0, -10.0, 0.0, 0.0, -10.0, -5.0, 5.0],
    [5.0, 10.0, 10.0, -20.0, -20.0, 10.0, 10.0, 5.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], // RANK_1
];

const KNIGHT_POS_ARRAY: [[Value; FILE_CNT]; RANK_CNT] = [
    [-50.0, -40.0, -30.0, -30.0, -30.0, -30.0, -40.0, -50.0], // RANK_8
    [-40.0, -20.0, 0.0, 0.0, 0.0, 0.0, -20.0, -40.0],
    [-30.0, 0.0, 10.0, 15.0, 15.0, 10.0, 0.0, -30.0],
    [-30.0, 5.0, 15.0, 20.0, 20.0, 15.0, 5.0, -30.0],
    [-30.0, 0.0, 15.0, 20.0, 20.0, 15.0, 0.0, -30.0],
    [-30.0, 5.0, 10.0, 15.0, 15.0, 10.0, 5.0, -30.0],
    [-40.0, -20.0, 0.0, 5.0, 5.0, 0.0, -20.0, -40.0],
    [-50.0, -40.0, -30.0, -30.0, -30.0, -30.0, -40.0, -50.0], // RANK_1
];

const BISHOP_POS_ARRAY: [[Value; FILE_CNT]; RANK_CNT] = [
    [-20.0, -10.0, -10.0, -10.0, -10.0, -10.0, -10.0, -20.0], // RANK_8
    [-10.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -10.0],
    [-10.0, 0.0, 5.0, 10.0, 10.0, 5.0, 0.0, -10.0],
    [-10.0, 5.0, 5.0, 10.0, 10.0, 5.0, 5.0, -10.0],
    [-10.0, 0.0, 10.0, 10.0, 10.0, 10.0, 0.0, -10.0],
    [-10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, -10.0],
    [-10.0, 5.0, 0.0, 0.0, 0.0, 0.0, 5.0, -10.0],
    [-20.0, -10.0, -10.0, -10.0, -10.0, -10.0, -10.0, -20.0], // RANK_1
];

const KING_POS_ARRAY: [[Value; FILE_CNT]; RANK_CNT] = [
    [-30.0, -40.0, -40.0, -50.0, -50.0, -40.0, -40.0, -30.0], // RANK_8
    [-30.0, -40.0, -40.0, -50.0, -50.0, -40.0, -40.0, -30.0],
    [-30.0, -40.0, -40.0, -50.0, -50.0, -40.0, -40.0, -30.0],
    [-30.0, -40.0, -40.0, -50.0, -50.0, -40.0, -40.0, -30.0],
    [-20.0, -30.0, -30.0, -40.0, -40.0, -30.0, -30.0, -20.0],
    [-10.0, -20.0, -20.0, -20.0, -20.0, -20.0, -20.0, -10.0],
    [20.0, 20.0, 0.0, 0.0, 0.0, 0.0, 20.0, 20.0],
    [20.0, 30.0, 10.0, 0.0, 0.0, 10.0, 30.0, 20.0], // RANK_1
];

//  Flips the board, so rank_1 becomes rank_8, rank_8 becomes rank_1, rank_2 becomes rank_7, etc
fn flip(arr: [[Value; FILE_CNT]; RANK_CNT]) -> [[Value; FILE_CNT]; RANK_CNT] {
    let mut new_arr = [[0.0; FILE_CNT]; RANK_CNT];
    for i in 0..RANK_CNT {
        new_arr[i] = arr[RANK_CNT - 1 - i];
    }
    new_arr
}

// Flattens 2D array to a singular 1D array
fn flatten(arr: [[Value; FILE_CNT]; RANK_CNT]) -> [Value; SQ_CNT] {
    let mut new_arr = [0.0; SQ_CNT];
    for i in 0..SQ_CNT {
        new_arr[i] = arr[i / 8][i % 8];
    }
    new_arr
}

/// Value of each piece type, indexed by `PieceType`.
pub const PIECE_VALS: [Value; PIECE_TYPE_CNT] = [PAWN, KNIGHT, BISHOP, ROOK, QUEEN, KING];

/// Evaluator that only counts material.
///
/// ```
/// use bitsearch::Board;
/// use bitsearch::tools::Evaluator;
/// use bitsearch::tools::eval::MaterialEval;
///
/// let board = Board::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").unwrap();
/// assert_eq!(MaterialEval.evaluate(&board), 900.0);
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct MaterialEval;

impl MaterialEval {
    fn material(board: &Board, player: Player) -> Value {
        ALL_PIECE_TYPES
            .iter()
            .map(|piece| board.count_piece(player, *piece) as Value * PIECE_VALS[piece.idx()])
            .sum()
    }
}

impl Evaluator for MaterialEval {
    fn evaluate(&self, board: &Board) -> Value {
        MaterialEval::material(board, Player::White) - MaterialEval::material(board, Player::Black)
    }
}

/// Evaluator that counts material and rewards pawns, knights, bishops and kings for
/// standing on good squares.
///
/// ```
/// use bitsearch::Board;
/// use bitsearch::tools::Evaluator;
/// use bitsearch::tools::eval::Eval;
///
/// let board = Board::start_pos();
/// assert_eq!(Eval.evaluate(&board), 0.0);
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct Eval;

impl Eval {
    fn positional(board: &Board, player: Player) -> Value {
        let p = player as usize;
        let tables: [(PieceType, &[Value; SQ_CNT]); 4] = [
            (PieceType::P, &PAWN_POS[p]),
            (PieceType::N, &KNIGHT_POS[p]),
            (PieceType::B, &BISHOP_POS[p]),
            (PieceType::K, &KING_POS[p]),
        ];
        tables
            .iter()
            .map(|(piece, table)| {
                board
                    .piece_bb(player, *piece)
                    .map(|sq| table[sq.0 as usize])
                    .sum::<Value>()
            })
            .sum()
    }
}

impl Evaluator for Eval {
    fn evaluate(&self, board: &Board) -> Value {
        MaterialEval.evaluate(board) + Eval::positional(board, Player::White)
            - Eval::positional(board, Player::Black)
    }
}

/// The evaluators selectable at run time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EvalKind {
    Material,
    Psqt,
}

impl Evaluator for EvalKind {
    fn evaluate(&self, board: &Board) -> Value {
        match *self {
            EvalKind::Material => MaterialEval.evaluate(board),
            EvalKind::Psqt => Eval.evaluate(board),
        }
    }
}

impl Default for EvalKind {
    fn default() -> Self {
        EvalKind::Psqt
    }
}

impl fmt::Display for EvalKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match *self {
            EvalKind::Material => "material",
            EvalKind::Psqt => "psqt",
        })
    }
}

impl FromStr for EvalKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "material" => Ok(EvalKind::Material),
            "psqt" => Ok(EvalKind::Psqt),
            other => Err(format!("unknown evaluator: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sq::SQ;

    #[test]
    fn tables_mirror() {
        for i in 0..64u8 {
            let sq = SQ(i);
            let mirrored = SQ::make(sq.file(), 7 - sq.rank());
            assert_eq!(PAWN_POS[0][sq.0 as usize], PAWN_POS[1][mirrored.0 as usize]);
            assert_eq!(KING_POS[0][sq.0 as usize], KING_POS[1][mirrored.0 as usize]);
        }
        assert_eq!(PAWN_POS[0][SQ::D4.0 as usize], 20.0);
        assert_eq!(PAWN_POS[1][SQ::D5.0 as usize], 20.0);
        assert_eq!(KING_POS[0][SQ::G1.0 as usize], 30.0);
    }

    #[test]
    fn material_counts() {
        let board = Board::from_fen("4k3/pppp4/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        assert_eq!(MaterialEval.evaluate(&board), 100.0);
        assert_eq!(EvalKind::Material.evaluate(&board), 100.0);
    }

    #[test]
    fn psqt_prefers_center() {
        let center = Board::from_fen("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1").unwrap();
        let corner = Board::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1").unwrap();
        assert!(Eval.evaluate(&center) > Eval.evaluate(&corner));
        assert!(EvalKind::Psqt.evaluate(&center) > EvalKind::Psqt.evaluate(&corner));
    }

    #[test]
    fn parse_kind() {
        assert_eq!("material".parse::<EvalKind>(), Ok(EvalKind::Material));
        assert_eq!("PSQT".parse::<EvalKind>(), Ok(EvalKind::Psqt));
        assert!("nope".parse::<EvalKind>().is_err());
        assert_eq!(EvalKind::default().to_string(), "psqt");
    }
}
