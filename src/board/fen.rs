//! Reading and writing FEN strings.
//!
//! FEN ("Forsyth-Edwards Notation") describes a position as whitespace separated fields:
//!
//! ```md,ignore
//! rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1
//! [ piece placement ] [turn] [castling] [en passant] [half moves] [full moves]
//! ```
//!
//! Piece placement lists the ranks from 8 down to 1, and each rank from file a to file h,
//! which is exactly the order of the board's square indexes.

use super::castle_rights::Castling;
use super::{Board, FenBuildError};

use crate::core::sq::SQ;
use crate::core::*;

/// FEN of the standard starting position.
pub const OPENING_POS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub static STANDARD_FENS_MIDDLE_POS: [&str; 16] = [
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 10",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 11",
    "4rrk1/pp1n3p/3q2pQ/2p1pb2/2PP4/2P3N1/P2B2PP/4RRK1 b - - 7 19",
    "r3r1k1/2p2ppp/p1p1bn2/8/1q2P3/2NPQN2/PPP3PP/R4RK1 b - - 2 15",
    "r1bbk1nr/pp3p1p/2n5/1N4p1/2Np1B2/8/PPP2PPP/2KR1B1R w kq - 0 13",
    "r1bq1rk1/ppp1nppp/4n3/3p3Q/3P4/1BP1B3/PP1N2PP/R4RK1 w - - 1 16",
    "4r1k1/r1q2ppp/ppp2n2/4P3/5Rb1/1N1BQ3/PPP3PP/R5K1 w - - 1 17",
    "2rqkb1r/ppp2p2/2npb1p1/1N1Nn2p/2P1PP2/8/PP2B1PP/R1BQK2R b KQ - 0 11",
    "r1bq1r1k/b1p1npp1/p2p3p/1p6/3PP3/1B2NN2/PP3PPP/R2Q1RK1 w - - 1 16",
    "3r1rk1/p5pp/bpp1pp2/8/q1PP1P2/b3P3/P2NQRPP/1R2B1K1 b - - 6 22",
    "r1q2rk1/2p1bppp/2Pp4/p6b/Q1PNp3/4B3/PP1R1PPP/2K4R w - - 2 18",
    "4k2r/1pb2ppp/1p2p3/1R1p4/3P4/2r1PN2/P4PPP/1R4K1 b - - 3 22",
    "3q2k1/pb3p1p/4pbp1/2r5/PpN2N2/1P2P2P/5PP1/Q2R2K1 b - - 4 26",
    "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
    "rnbqkbnr/pppp1ppp/8/8/3Pp3/8/PPP1PPPP/RNBQKBNR b KQkq d3 0 2",
    "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
];

pub static STANDARD_FENS_ENDGAME_POS: [&str; 10] = [
    "6k1/6p1/6Pp/ppp5/3pn2P/1P3K2/1PP2P2/3N4 b - - 0 1",
    "3b4/5kp1/1p1p1p1p/pP1PpP1P/P1P1P3/3KN3/8/8 w - - 0 1",
    "8/6pk/1p6/8/PP3p1p/5P2/4KP1q/3Q4 w - - 0 1",
    "7k/3p2pp/4q3/8/4Q3/5Kp1/P6b/8 w - - 0 1",
    "8/2p5/8/2kPKp1p/2p4P/2P5/3P4/8 w - - 0 1",
    "8/8/8/8/5kp1/P7/8/1K1N4 w - - 0 1",
    "8/8/8/5N2/8/p7/8/2NK3k w - - 0 1",
    "8/8/1P6/5pr1/8/4R3/7k/2K5 w - - 0 1",
    "8/2p4P/8/kr6/6R1/8/8/1K6 w - - 0 1",
    "8/R7/2q5/8/6k1/8/1P5p/K6R w - - 0 124",
];

lazy_static! {
    /// Every FEN in this module, start position first. Used by tests and benchmarks.
    pub static ref ALL_FENS: Vec<&'static str> = {
        let mut vec = vec![OPENING_POS_FEN];
        vec.extend(STANDARD_FENS_MIDDLE_POS.iter());
        vec.extend(STANDARD_FENS_ENDGAME_POS.iter());
        vec
    };
}

pub(super) fn parse_fen(fen: &str) -> Result<Board, FenBuildError> {
    let det_split: Vec<&str> = fen.split_whitespace().collect();

    // [ Piece Placement, Side to Move, Castling Ability, En Passant square, (Half moves, full moves) ]
    if det_split.len() < 4 || det_split.len() > 6 {
        return Err(FenBuildError::NotEnoughSections {
            sections: det_split.len(),
        });
    }

    let ranks: Vec<&str> = det_split[0].split('/').collect();
    if ranks.len() != 8 {
        return Err(FenBuildError::IncorrectRankAmounts { ranks: ranks.len() });
    }

    let mut board = Board::empty();
    for (i, rank) in ranks.iter().enumerate() {
        let mut file: usize = 0;
        for ch in rank.chars() {
            if let '1'..='8' = ch {
                file += (ch as u8 - b'0') as usize;
            } else {
                let (player, piece) =
                    PieceType::from_fen_char(ch).ok_or(FenBuildError::UnrecognizedPiece { piece: ch })?;
                if file >= 8 {
                    return Err(FenBuildError::SquareLargerRank {
                        rank: 8 - i,
                        squares: rank.to_string(),
                    });
                }
                board.place_piece(player, piece, SQ((i * 8 + file) as u8));
                file += 1;
            }
            if file > 8 {
                return Err(FenBuildError::SquareLargerRank {
                    rank: 8 - i,
                    squares: rank.to_string(),
                });
            }
        }
        if file < 8 {
            return Err(FenBuildError::SquareSmallerRank {
                rank: 8 - i,
                squares: rank.to_string(),
            });
        }
    }

    let turn = match det_split[1] {
        "w" => Player::White,
        "b" => Player::Black,
        other => {
            return Err(FenBuildError::UnrecognizedTurn {
                turn: other.to_string(),
            })
        }
    };
    board.set_turn(turn);

    let mut castling = Castling::empty();
    if det_split[2] != "-" {
        for c in det_split[2].chars() {
            castling
                .add_castling_char(c)
                .ok_or_else(|| FenBuildError::UnrecognizedCastle {
                    castle: det_split[2].to_string(),
                })?;
        }
    }
    board.set_castling(castling);

    let ep = det_split[3];
    let ep_square = if ep == "-" {
        None
    } else {
        let sq: SQ = ep
            .parse()
            .map_err(|_| FenBuildError::EPSquareUnreadable { ep: ep.to_string() })?;
        // The target was skipped by the opponent's double push: rank 6 when White is to
        // move, rank 3 when Black is.
        let ep_rank = match turn {
            Player::White => 5,
            Player::Black => 2,
        };
        if sq.rank() != ep_rank {
            return Err(FenBuildError::EPSquareInvalid { ep: ep.to_string() });
        }
        Some(sq)
    };
    board.set_ep_square(ep_square);

    for counter in det_split.iter().skip(4) {
        counter.parse::<u16>()?;
    }

    Ok(board)
}

pub(super) fn generate_fen(board: &Board) -> String {
    let mut s = String::with_capacity(90);
    for row in 0..8u8 {
        if row != 0 {
            s.push('/');
        }
        let mut blanks = 0;
        for file in 0..8u8 {
            match board.piece_at_sq(SQ(row * 8 + file)) {
                None => blanks += 1,
                Some((player, piece)) => {
                    if blanks != 0 {
                        s.push_str(&blanks.to_string());
                        blanks = 0;
                    }
                    s.push(match player {
                        Player::White => piece.char_upper(),
                        Player::Black => piece.char_lower(),
                    });
                }
            }
        }
        if blanks != 0 {
            s.push_str(&blanks.to_string());
        }
    }

    s.push(' ');
    s.push(match board.turn() {
        Player::White => 'w',
        Player::Black => 'b',
    });
    s.push(' ');
    s.push_str(&board.castling().pretty_string());
    s.push(' ');
    match board.ep_square() {
        Some(sq) => s.push_str(&sq.to_string()),
        None => s.push('-'),
    }
    s.push_str(" 0 1");
    s
}
