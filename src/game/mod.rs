//! The game engine. [`Game`] owns the board, the two players and the move history, and is the
//! intended entry point for anything that wants to play a full game: submit moves with
//! [`Game::execute_play`], hand the turn over with [`Game::confirm_turn`] and take moves back
//! with [`Game::undo_play`].

pub mod logic;

use crate::board::geometry;
use crate::board::geometry::Terrain;
use crate::board::state::Board;
use crate::error::{PlayInvalid, UndoError};
use crate::pieces::{Piece, Side};
use crate::play::{Play, PlayRecord};
use crate::player::Player;
use crate::preset;
use crate::record::{LogEntry, MoveRecorder};
use crate::tiles::{Position, COLS, ROWS};
use chrono::Utc;
use tracing::debug;

/// The way in which a player has won the game.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum WinReason {
    /// A piece reached the opposing den.
    DenEntered,
    /// The opponent's last piece was captured.
    AllCaptured,
}

/// The outcome of a finished game.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct GameOutcome {
    pub winner: Side,
    pub reason: WinReason,
}

/// Whether the game is ongoing or over.
#[derive(Debug, Default, Eq, PartialEq, Clone, Copy)]
pub enum GameStatus {
    #[default]
    Ongoing,
    Over(GameOutcome),
}

/// Information on the effect of a single executed move.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct MoveOutcome {
    /// The piece the move captured, if any.
    pub captured: Option<Piece>,
    /// The game outcome the move brought about, if any.
    pub outcome: Option<GameOutcome>,
}

/// A single game: board, players, whose turn it is and the move history.
///
/// A turn has two phases. [`Game::execute_play`] validates and applies a move but leaves the
/// turn with the mover, so that the move may still be taken back with [`Game::undo_play`];
/// only [`Game::confirm_turn`] passes the turn to the opponent.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) players: [Player; 2],
    pub(crate) recorder: MoveRecorder,
    pub(crate) side_to_play: Side,
    pub(crate) status: GameStatus,
}

impl Game {
    /// Start a new game from the standard starting position, north to move first.
    pub fn new(north_name: impl Into<String>, south_name: impl Into<String>) -> Self {
        let mut board = Board::empty();
        let mut rosters = [vec![], vec![]];
        for (piece_type, position) in preset::NORTH_PLACEMENTS {
            let id = board.spawn(Piece::new(piece_type, Side::North), position);
            rosters[Side::North.index()].push(id);
        }
        // South's setup mirrors north's through the centre of the board.
        for (piece_type, position) in preset::NORTH_PLACEMENTS {
            let mirrored =
                Position::new_unchecked(ROWS - 1 - position.row(), COLS - 1 - position.col());
            let id = board.spawn(Piece::new(piece_type, Side::South), mirrored);
            rosters[Side::South.index()].push(id);
        }
        let [north_roster, south_roster] = rosters;
        Self {
            board,
            players: [
                Player::new(north_name, Side::North, north_roster),
                Player::new(south_name, Side::South, south_roster),
            ],
            recorder: MoveRecorder::new(),
            side_to_play: Side::North,
            status: GameStatus::Ongoing,
        }
    }

    /// Validate the given move for the side to play and, if it is legal, apply it: capture any
    /// piece on the destination, move the piece and record the move. The turn stays with the
    /// mover until [`Self::confirm_turn`] is called.
    ///
    /// On failure nothing changes and the reason is returned.
    pub fn execute_play(&mut self, play: Play) -> Result<MoveOutcome, PlayInvalid> {
        if let GameStatus::Over(_) = self.status {
            return Err(PlayInvalid::GameOver);
        }
        let valid = logic::validate(&self.board, self.side_to_play, play)?;
        let play = valid.play;
        let captured_id = self.board.id_at(play.to);
        let captured = captured_id.map(|id| self.board.entry(id).piece);
        if let Some(id) = captured_id {
            self.board.capture(id);
        }
        let piece = self.board.relocate(play.from, play.to);
        self.recorder.record(PlayRecord {
            side: self.side_to_play,
            play,
            piece,
            captured: captured_id,
            timestamp: Utc::now(),
        });
        let outcome = logic::game_outcome(&self.board, &self.players, self.side_to_play);
        if let Some(outcome) = outcome {
            self.status = GameStatus::Over(outcome);
        }
        debug!(side = %self.side_to_play, %play, capture = captured.is_some(), "executed play");
        Ok(MoveOutcome { captured, outcome })
    }

    /// End the current player's turn, passing it to the opponent. Does nothing once the game
    /// is over.
    pub fn confirm_turn(&mut self) {
        if self.status == GameStatus::Ongoing {
            self.side_to_play = self.side_to_play.other();
            debug!(side = %self.side_to_play, "turn passed");
        }
    }

    /// Take back the most recent move, charging the current player one undo. The moved piece
    /// returns to its source square, any captured piece is restored where it fell and a win
    /// brought about by the move is rescinded. The turn does not change.
    pub fn undo_play(&mut self) -> Result<(), UndoError> {
        let record = self.recorder.undo_last(self.side_to_play)?;
        self.board.relocate(record.play.to, record.play.from);
        if let Some(id) = record.captured {
            self.board.restore(id);
        }
        self.status = GameStatus::Ongoing;
        debug!(side = %self.side_to_play, play = %record.play, "undid play");
        Ok(())
    }

    pub fn side_to_play(&self) -> Side {
        self.side_to_play
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.player(self.side_to_play)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The winner, if the game is over.
    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::Over(outcome) => Some(outcome.winner),
            GameStatus::Ongoing => None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The piece on the given square, if any.
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.board.piece_at(position)
    }

    /// The terrain of the given square.
    pub fn terrain_at(&self, position: Position) -> Terrain {
        geometry::classify(position)
    }

    /// The number of moves made so far, not counting moves that were undone.
    pub fn move_count(&self) -> usize {
        self.recorder.move_count()
    }

    /// How many undos the given side has left.
    pub fn remaining_undos(&self, side: Side) -> u8 {
        self.recorder.remaining_undos(side)
    }

    /// Whether the current player may undo right now.
    pub fn can_undo(&self) -> bool {
        self.recorder.can_undo(self.side_to_play)
    }

    /// Every executed move, oldest first.
    pub fn history(&self) -> &[PlayRecord] {
        self.recorder.moves()
    }

    /// The move history as serializable log entries.
    pub fn log(&self) -> Vec<LogEntry> {
        self.recorder
            .moves()
            .iter()
            .enumerate()
            .map(|(i, record)| LogEntry {
                seq: i + 1,
                side: record.side,
                play: record.play,
                piece: self.board.entry(record.piece).piece.piece_type,
                captured: record
                    .captured
                    .map(|id| self.board.entry(id).piece.piece_type),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::PlayInvalid::{GameOver, WrongPlayer};
    use crate::error::UndoError::NoUndosLeft;
    use crate::game::{Game, GameStatus, WinReason};
    use crate::pieces::PieceType::{Lion, Rat, Wolf};
    use crate::pieces::Side::{North, South};
    use crate::pieces::{Piece, PieceType};
    use crate::play::Play;
    use crate::record::MAX_UNDOS_PER_PLAYER;
    use crate::snapshot::Snapshot;
    use crate::tiles::Position;
    use std::str::FromStr;

    fn play(s: &str) -> Play {
        Play::from_str(s).unwrap()
    }

    fn game_from_board(board: &str, current: u8) -> Game {
        Game::from_snapshot(&Snapshot {
            current_player: current,
            players: [String::from("north"), String::from("south")],
            board: String::from(board),
        })
        .unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = Game::new("Alice", "Bob");
        assert_eq!(game.side_to_play(), North);
        assert_eq!(game.current_player().name(), "Alice");
        assert_eq!(game.player(South).name(), "Bob");
        assert_eq!(game.status(), GameStatus::Ongoing);
        assert_eq!(game.move_count(), 0);
        for side in [North, South] {
            assert_eq!(game.player(side).active_pieces(game.board()).count(), 8);
            assert_eq!(game.remaining_undos(side), MAX_UNDOS_PER_PLAYER);
        }
        assert_eq!(
            game.piece_at(Position::new(2, 2).unwrap()),
            Some(Piece::new(PieceType::Leopard, North))
        );
    }

    #[test]
    fn test_turn_confirmation() {
        let mut game = Game::new("a", "b");
        game.execute_play(play("A2-A3")).unwrap();
        // The turn stays with the mover until confirmed.
        assert_eq!(game.side_to_play(), North);
        assert_eq!(game.execute_play(play("A8-A7")), Err(WrongPlayer));
        game.confirm_turn();
        assert_eq!(game.side_to_play(), South);
        game.execute_play(play("A8-A7")).unwrap();
        game.confirm_turn();
        assert_eq!(game.side_to_play(), North);
        assert_eq!(game.move_count(), 2);
    }

    #[test]
    fn test_undo_restores_everything() {
        let mut game = Game::new("a", "b");
        let before = game.board().to_string();
        let outcome = game.execute_play(play("A2-A3")).unwrap();
        assert_eq!(outcome.captured, None);
        assert_ne!(game.board().to_string(), before);

        game.undo_play().unwrap();
        assert_eq!(game.board().to_string(), before);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.side_to_play(), North);
        assert_eq!(game.remaining_undos(North), MAX_UNDOS_PER_PLAYER - 1);
        assert_eq!(game.remaining_undos(South), MAX_UNDOS_PER_PLAYER);
    }

    #[test]
    fn test_undo_restores_captures() {
        // North wolf and south rat face off across the trap row.
        let mut game = game_from_board("7/7/7/7/7/7/3r3/3W3/7", 0);
        let before = game.board().to_string();
        let outcome = game.execute_play(play("D7-D6")).unwrap();
        assert_eq!(outcome.captured, Some(Piece::new(Rat, South)));
        assert_eq!(game.board().to_string(), "7/7/7/7/7/7/3W3/7/7");

        game.undo_play().unwrap();
        assert_eq!(game.board().to_string(), before);
        assert!(!game
            .player(South)
            .has_lost(game.board()));
    }

    #[test]
    fn test_undo_allowance_is_per_player() {
        let mut game = Game::new("a", "b");
        for _ in 0..MAX_UNDOS_PER_PLAYER {
            game.execute_play(play("A2-A3")).unwrap();
            game.undo_play().unwrap();
        }
        game.execute_play(play("A2-A3")).unwrap();
        assert!(!game.can_undo());
        assert_eq!(game.undo_play(), Err(NoUndosLeft));
        game.confirm_turn();

        // South is unaffected by north's spent allowance.
        game.execute_play(play("A8-A7")).unwrap();
        assert!(game.can_undo());
        game.undo_play().unwrap();
        assert_eq!(game.remaining_undos(South), MAX_UNDOS_PER_PLAYER - 1);
    }

    #[test]
    fn test_den_entry_wins() {
        // A south lion one step from the north den, a north tiger elsewhere.
        let mut game = game_from_board("T6/3l3/7/7/7/7/7/7/7", 1);
        let outcome = game.execute_play(play("D1-D0")).unwrap().outcome.unwrap();
        assert_eq!(outcome.winner, South);
        assert_eq!(outcome.reason, WinReason::DenEntered);
        assert_eq!(game.winner(), Some(South));

        // Further play is rejected, and confirmation does not pass the turn.
        assert_eq!(game.execute_play(play("D0-C0")), Err(GameOver));
        game.confirm_turn();
        assert_eq!(game.side_to_play(), South);

        // Undo rescinds the win.
        game.undo_play().unwrap();
        assert_eq!(game.status(), GameStatus::Ongoing);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_capturing_last_piece_wins() {
        let mut game = game_from_board("7/7/7/7/7/7/3r3/3W3/7", 0);
        let outcome = game.execute_play(play("D7-D6")).unwrap().outcome.unwrap();
        assert_eq!(outcome.winner, North);
        assert_eq!(outcome.reason, WinReason::AllCaptured);

        // Undo restores the rat and the game.
        game.undo_play().unwrap();
        assert_eq!(game.status(), GameStatus::Ongoing);
        assert!(!game.player(South).has_lost(game.board()));
    }

    #[test]
    fn test_log() {
        let mut game = Game::new("a", "b");
        game.execute_play(play("A2-A3")).unwrap();
        game.confirm_turn();
        game.execute_play(play("A8-A7")).unwrap();
        game.confirm_turn();

        let log = game.log();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].to_string(), "1,P0,A2,A3,R,-");
        assert_eq!(log[1].to_string(), "2,P1,A8,A7,T,-");
        assert_eq!(log[0].piece, Rat);
        assert!(log.iter().all(|e| e.captured.is_none()));

        // A capture shows up in the log.
        let mut game = game_from_board("7/7/7/7/7/7/3r3/3W3/7", 0);
        game.execute_play(play("D7-D6")).unwrap();
        let log = game.log();
        assert_eq!(log[0].piece, Wolf);
        assert_eq!(log[0].captured, Some(Rat));
        assert_eq!(log[0].to_string(), "1,P0,D7,D6,W,R");
    }

    #[test]
    fn test_jump_scenario() {
        // North lion on the west bank, a south rat lurking in the river.
        let mut game = game_from_board("7/7/7/Lr5/7/7/7/7/l6", 0);
        assert!(game.execute_play(play("A3-D3")).is_err());

        // Once the rat moves on, the leap is clear.
        let mut game = game_from_board("7/7/7/L6/7/7/7/7/l6", 0);
        game.execute_play(play("A3-D3")).unwrap();
        assert_eq!(
            game.piece_at(Position::new(3, 3).unwrap()),
            Some(Piece::new(Lion, North))
        );
    }
}
