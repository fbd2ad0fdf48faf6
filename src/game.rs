use tracing::{debug, info};
use web_time::Instant;

use crate::board::Board;
use crate::config::SessionConfig;
use crate::types::{ClickOutcome, GameState, Move, Player, Square};

/// Which piece, if any, the player to move is handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    NoSelection,
    PieceSelected { square: Square, moves: Vec<Move> },
    /// A capture landed and the same piece must keep jumping.
    ChainCapturing { square: Square, moves: Vec<Move> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    /// Decided, banner still hidden until the reveal delay passes.
    GameOver { winner: Player, decided_at: Instant },
    WinnerAnnounced { winner: Player },
}

impl Status {
    pub fn winner(&self) -> Option<Player> {
        match *self {
            Self::Playing => None,
            Self::GameOver { winner, .. } | Self::WinnerAnnounced { winner } => Some(winner),
        }
    }
}

/// The single local two-player session.
pub struct GameInstance {
    board: Board,
    turn: Player,
    selection: Selection,
    status: Status,
    config: SessionConfig,
}

impl GameInstance {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            board: Board::new(),
            turn: config.starting_player,
            selection: Selection::NoSelection,
            status: Status::Playing,
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.turn
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    pub fn is_game_over(&self) -> bool {
        self.status != Status::Playing
    }

    /// Replaces the session config.
    pub fn set_config(&mut self, config: SessionConfig) {
        self.config = config;
    }

    /// Destination squares for the current selection.
    pub fn legal_targets(&self) -> Vec<Square> {
        self.candidates().iter().map(|m| m.to).collect()
    }

    /// Handles a click on `square` and reports what changed.
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        if self.is_game_over() {
            return ClickOutcome::Ignored;
        }

        if let Some(mv) = self.candidates().iter().find(|m| m.to == square).cloned() {
            return self.apply_move(mv);
        }

        if matches!(self.selection, Selection::ChainCapturing { .. }) {
            debug!(row = square.row(), col = square.col(), "click ignored mid-chain");
            return ClickOutcome::Ignored;
        }

        match self.board.piece_at(square) {
            Some(piece) if piece.owner == self.turn => self.select(square),
            _ => {
                self.selection = Selection::NoSelection;
                ClickOutcome::Deselected
            }
        }
    }

    /// Moves a finished game to `WinnerAnnounced` once the reveal delay has
    /// elapsed. Returns `true` when the banner became visible on this call.
    pub fn announce_if_due(&mut self, now: Instant) -> bool {
        let Status::GameOver { winner, decided_at } = self.status else {
            return false;
        };
        if now.saturating_duration_since(decided_at) < self.config.reveal_delay {
            return false;
        }

        info!(winner = ?winner, "winner announced");
        self.status = Status::WinnerAnnounced { winner };
        true
    }

    /// Starts a fresh game with `starting_player` to move.
    pub fn reset(&mut self, starting_player: Player) {
        info!(starting_player = ?starting_player, "game reset");
        self.board = Board::new();
        self.turn = starting_player;
        self.selection = Selection::NoSelection;
        self.status = Status::Playing;
    }

    pub fn start_as(&mut self, player: Player) {
        self.reset(player);
    }

    /// Restarts with whoever is currently to move.
    pub fn reset_keep_turn(&mut self) {
        self.reset(self.turn);
    }

    /// The winner banner's restart: uses the configured starting player.
    pub fn play_again(&mut self) {
        self.reset(self.config.starting_player);
    }

    pub fn to_game_state(&self) -> GameState {
        let (black_count, white_count) = self.board.count();
        let selected = match &self.selection {
            Selection::NoSelection => None,
            Selection::PieceSelected { square, .. } | Selection::ChainCapturing { square, .. } => {
                Some(square.position())
            }
        };

        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.turn.to_u8(),
            selected,
            targets: self.legal_targets().into_iter().map(Square::position).collect(),
            black_count,
            white_count,
            chain_capturing: matches!(self.selection, Selection::ChainCapturing { .. }),
            is_game_over: self.is_game_over(),
            winner: self.winner().map(Player::to_u8),
            winner_visible: matches!(self.status, Status::WinnerAnnounced { .. }),
        }
    }

    fn candidates(&self) -> &[Move] {
        match &self.selection {
            Selection::NoSelection => &[],
            Selection::PieceSelected { moves, .. } | Selection::ChainCapturing { moves, .. } => {
                moves
            }
        }
    }

    fn select(&mut self, square: Square) -> ClickOutcome {
        let forced = self.board.find_all_captures(self.turn);
        if !forced.is_empty() && !forced.iter().any(|set| set.square == square) {
            debug!(row = square.row(), col = square.col(), "selection rejected: capture pending elsewhere");
            self.selection = Selection::NoSelection;
            return ClickOutcome::Rejected(square);
        }

        let moves = self.board.legal_moves(self.turn, square);
        if moves.is_empty() {
            self.selection = Selection::NoSelection;
            return ClickOutcome::Deselected;
        }

        debug!(row = square.row(), col = square.col(), candidates = moves.len(), "piece selected");
        self.selection = Selection::PieceSelected { square, moves };
        ClickOutcome::Selected(square)
    }

    fn apply_move(&mut self, mv: Move) -> ClickOutcome {
        self.board = self.board.apply_move(&mv);
        info!(
            player = ?self.turn,
            from = ?(mv.from.row(), mv.from.col()),
            to = ?(mv.to.row(), mv.to.col()),
            captured = mv.captured.len(),
            "move applied"
        );

        if mv.is_capture() {
            let further = self.board.further_captures(mv.to);
            if !further.is_empty() {
                debug!(candidates = further.len(), "chain capture continues");
                self.selection = Selection::ChainCapturing {
                    square: mv.to,
                    moves: further,
                };
                return ClickOutcome::ChainContinues(mv);
            }
        }

        self.selection = Selection::NoSelection;

        let terminal = self.board.check_terminal();
        if let Some(winner) = terminal.winner() {
            info!(winner = ?winner, "game over");
            self.status = Status::GameOver {
                winner,
                decided_at: Instant::now(),
            };
            return ClickOutcome::GameOver { last: mv, winner };
        }

        self.turn = self.turn.opponent();
        ClickOutcome::Moved(mv)
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, turn: Player) {
        self.board = board;
        self.turn = turn;
        self.selection = Selection::NoSelection;
        self.status = Status::Playing;
    }
}

impl Default for GameInstance {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
