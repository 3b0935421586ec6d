//! The rules of the game, as pure functions over a board. Nothing here mutates any state:
//! [`validate`] decides whether a proposed move is legal and [`game_outcome`] decides whether
//! the game has been won. [`crate::game::Game`] applies the results.

use crate::board::geometry;
use crate::board::state::Board;
use crate::error::PlayInvalid;
use crate::error::PlayInvalid::{
    CannotCapture, CannotEnterWater, JumpBlocked, LandRatVsWaterRat, NoPiece, NotAdjacent, OwnDen,
    RatInWaterVsElephant, RatInWaterVsLandRat, SamePosition, SelfCapture, WrongPlayer,
};
use crate::game::{GameOutcome, WinReason};
use crate::pieces::PieceType::{Elephant, Rat};
use crate::pieces::{Piece, Side};
use crate::play::{Play, ValidPlay};
use crate::player::Player;

/// Check whether the given side may make the given move on the given board, returning a
/// [`ValidPlay`] if so and the first reason it is invalid if not.
///
/// Checks are ordered so that the reported reason is the most specific one: piece ownership
/// before movement shape, movement shape before capture legality.
pub fn validate(board: &Board, side: Side, play: Play) -> Result<ValidPlay, PlayInvalid> {
    if play.from == play.to {
        return Err(SamePosition);
    }
    let piece = board.piece_at(play.from).ok_or(NoPiece)?;
    if piece.side != side {
        return Err(WrongPlayer);
    }
    let target = board.piece_at(play.to);
    if target.is_some_and(|t| t.side == side) {
        return Err(SelfCapture);
    }
    if geometry::is_den(play.to, side) {
        return Err(OwnDen);
    }
    if play.from.is_adjacent_to(play.to) {
        if geometry::is_water(play.to) && !piece.piece_type.can_enter_water() {
            return Err(CannotEnterWater(piece.piece_type));
        }
    } else {
        // Not adjacent, so only a water jump can make the move legal: a lion or tiger
        // leaping a straight, unbroken run of water squares onto a land square.
        if !is_jump_shape(play, piece) {
            return Err(NotAdjacent);
        }
        if board.rat_blocks_straight_path(play.from, play.to) {
            return Err(JumpBlocked(piece.piece_type));
        }
    }
    if let Some(target) = target {
        check_capture(piece, target, play, side)?;
    }
    Ok(ValidPlay { play })
}

/// Whether the move has the shape of a water jump: the piece can jump, the endpoints share a
/// row or column, every square strictly between them is water and the destination is not.
fn is_jump_shape(play: Play, piece: Piece) -> bool {
    if !piece.piece_type.can_jump_water() || !play.is_straight() || play.distance() < 2 {
        return false;
    }
    if geometry::is_water(play.to) {
        return false;
    }
    let between = geometry::positions_between(play.from, play.to);
    !between.is_empty() && between.into_iter().all(geometry::is_water)
}

/// Check whether `piece` may capture `target` over the given move. The water parity rules are
/// applied first, then the trap rule, then the plain rank comparison.
fn check_capture(piece: Piece, target: Piece, play: Play, side: Side) -> Result<(), PlayInvalid> {
    let mover_in_water = geometry::is_water(play.from);
    let target_in_water = geometry::is_water(play.to);
    if mover_in_water {
        if target.piece_type == Elephant {
            return Err(RatInWaterVsElephant);
        }
        if !target_in_water {
            return Err(RatInWaterVsLandRat);
        }
    } else if target_in_water {
        return Err(LandRatVsWaterRat);
    }
    // A piece standing on one of the mover's own traps has its rank nullified and may be
    // captured by any animal. The elephant still cannot take the rat.
    let nullified = geometry::is_trap(play.to, side)
        && !(piece.piece_type == Elephant && target.piece_type == Rat);
    if nullified || piece.can_capture(target) {
        Ok(())
    } else {
        Err(CannotCapture {
            mover: piece.piece_type,
            target: target.piece_type,
        })
    }
}

/// Check whether the game has been won, from the point of view of the side that just moved.
/// A win arises either from entering the opposing den or from capturing the opponent's last
/// piece.
pub fn game_outcome(board: &Board, players: &[Player; 2], mover: Side) -> Option<GameOutcome> {
    let opponent = mover.other();
    if board.occupied(geometry::den(opponent)) {
        // Entering one's own den is illegal, so any piece in a den belongs to the attacker.
        return Some(GameOutcome {
            winner: mover,
            reason: WinReason::DenEntered,
        });
    }
    if players[opponent.index()].has_lost(board) {
        return Some(GameOutcome {
            winner: mover,
            reason: WinReason::AllCaptured,
        });
    }
    None
}
