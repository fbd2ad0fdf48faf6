use serde::Serialize;

use crate::error::{GameError, GameResult};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;
pub const PLAYER_BLACK: u8 = 1;
pub const PLAYER_WHITE: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// Row direction of a man's non-capturing step.
    pub fn forward(self) -> i32 {
        match self {
            Self::Black => 1,
            Self::White => -1,
        }
    }

    /// The far rank on which a man of this colour is crowned.
    pub fn promotion_row(self) -> u8 {
        match self {
            Self::Black => (BOARD_SIZE - 1) as u8,
            Self::White => 0,
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            Self::Black => PLAYER_BLACK,
            Self::White => PLAYER_WHITE,
        }
    }

    pub fn from_u8(code: u8) -> GameResult<Self> {
        match code {
            PLAYER_BLACK => Ok(Self::Black),
            PLAYER_WHITE => Ok(Self::White),
            other => Err(GameError::UnknownPlayer(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub owner: Player,
    pub promoted: bool,
}

impl Piece {
    pub fn man(owner: Player) -> Self {
        Self {
            owner,
            promoted: false,
        }
    }

    pub fn king(owner: Player) -> Self {
        Self {
            owner,
            promoted: true,
        }
    }

    /// Cell code used by the JS view: 1/2 for men, 3/4 for kings.
    pub fn code(self) -> u8 {
        match (self.owner, self.promoted) {
            (Player::Black, false) => 1,
            (Player::White, false) => 2,
            (Player::Black, true) => 3,
            (Player::White, true) => 4,
        }
    }
}

/// A board coordinate guaranteed to be on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> GameResult<Self> {
        if row as usize >= BOARD_SIZE || col as usize >= BOARD_SIZE {
            return Err(GameError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    /// Returns the square offset by `(dr, dc)`, or `None` when it leaves the board.
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if in_bounds(row, col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        if idx >= NUM_SQUARES {
            return None;
        }
        Some(Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        })
    }

    /// Playable squares are the dark ones.
    pub fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    pub fn position(self) -> Position {
        Position {
            row: self.row,
            col: self.col,
        }
    }
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

/// One step of play. A chain of jumps is a sequence of `Move`s, each with a
/// single captured square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub captured: Vec<Square>,
    pub must_continue: bool,
}

impl Move {
    pub fn simple(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captured: Vec::new(),
            must_continue: false,
        }
    }

    pub fn jump(from: Square, over: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captured: vec![over],
            must_continue: true,
        }
    }

    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

/// Every capture available to the piece standing on `square`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureSet {
    pub square: Square,
    pub options: Vec<Move>,
}

/// Result of a terminal-state check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    Ongoing,
    Won(Player),
}

impl Terminal {
    pub fn is_over(self) -> bool {
        matches!(self, Self::Won(_))
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Self::Ongoing => None,
            Self::Won(winner) => Some(winner),
        }
    }
}

/// What a single click did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Game is over, or a chain is in progress and the click was not a candidate.
    Ignored,
    Selected(Square),
    Deselected,
    /// Own piece clicked while another piece must capture.
    Rejected(Square),
    /// Move applied and the turn passed to the opponent.
    Moved(Move),
    /// Capture applied and the same piece must keep jumping.
    ChainContinues(Move),
    GameOver { last: Move, winner: Player },
}

/// A board coordinate as seen by JS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// 64 cells, row-major: 0=empty, 1=black, 2=white, 3=black king, 4=white king.
    pub board: Vec<u8>,
    pub current_player: u8,
    pub selected: Option<Position>,
    pub targets: Vec<Position>,
    pub black_count: u8,
    pub white_count: u8,
    pub chain_capturing: bool,
    pub is_game_over: bool,
    pub winner: Option<u8>,
    /// Contract:
    /// - `false` until the reveal delay after game over has elapsed.
    /// - Always `false` while the game is in progress.
    pub winner_visible: bool,
}
