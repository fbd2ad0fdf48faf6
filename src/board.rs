use crate::types::{
    BOARD_SIZE, CaptureSet, Move, NUM_SQUARES, Piece, Player, Square, Terminal,
};

const SETUP_ROWS: usize = 3;
const DIAGONALS: [(i32, i32); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

/// Checkers board: one optional piece per square, row-major.
///
/// `Board` is `Copy`; every move produces a fresh value and never touches the
/// board it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; NUM_SQUARES],
}

impl Board {
    /// Creates the standard opening: black men on the dark squares of rows
    /// 0-2, white men on the dark squares of rows 5-7.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for idx in 0..NUM_SQUARES {
            let Some(square) = Square::from_index(idx) else {
                continue;
            };
            if !square.is_dark() {
                continue;
            }
            let row = square.row() as usize;
            if row < SETUP_ROWS {
                board.cells[idx] = Some(Piece::man(Player::Black));
            } else if row >= BOARD_SIZE - SETUP_ROWS {
                board.cells[idx] = Some(Piece::man(Player::White));
            }
        }
        board
    }

    pub fn empty() -> Self {
        Self {
            cells: [None; NUM_SQUARES],
        }
    }

    /// Builds a position from explicit placements. Later entries win.
    pub fn from_pieces(pieces: &[(Square, Piece)]) -> Self {
        let mut board = Self::empty();
        for &(square, piece) in pieces {
            board.cells[square.index()] = Some(piece);
        }
        board
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    /// Returns every piece of `player` that has at least one capture.
    pub fn find_all_captures(&self, player: Player) -> Vec<CaptureSet> {
        self.squares_of(player)
            .filter_map(|square| {
                let options = self.captures_for_piece(square);
                if options.is_empty() {
                    None
                } else {
                    Some(CaptureSet { square, options })
                }
            })
            .collect()
    }

    /// Jumps available to the piece on `square`.
    ///
    /// Men and kings alike may capture along all four diagonals; only simple
    /// moves are restricted to the forward direction.
    pub fn captures_for_piece(&self, square: Square) -> Vec<Move> {
        let Some(piece) = self.piece_at(square) else {
            return Vec::new();
        };

        DIAGONALS
            .iter()
            .filter_map(|&(dr, dc)| {
                let over = square.offset(dr, dc)?;
                let landing = square.offset(2 * dr, 2 * dc)?;
                if self.piece_at(landing).is_some() {
                    return None;
                }
                match self.piece_at(over) {
                    Some(victim) if victim.owner != piece.owner => {
                        Some(Move::jump(square, over, landing))
                    }
                    _ => None,
                }
            })
            .collect()
    }

    /// Empty diagonal neighbours reachable without capturing.
    pub fn non_capture_moves(&self, square: Square, promoted: bool) -> Vec<Move> {
        let Some(piece) = self.piece_at(square) else {
            return Vec::new();
        };
        let forward = piece.owner.forward();

        DIAGONALS
            .iter()
            .filter(|&&(dr, _)| promoted || dr == forward)
            .filter_map(|&(dr, dc)| square.offset(dr, dc))
            .filter(|&to| self.piece_at(to).is_none())
            .map(|to| Move::simple(square, to))
            .collect()
    }

    /// Captures still open to whatever piece now stands on `square`.
    pub fn further_captures(&self, square: Square) -> Vec<Move> {
        self.captures_for_piece(square)
    }

    /// Candidate moves for the piece `player` has selected on `selected`.
    ///
    /// When any piece of `player` can capture, only the selected piece's
    /// captures are offered (possibly none).
    pub fn legal_moves(&self, player: Player, selected: Square) -> Vec<Move> {
        let Some(piece) = self.piece_at(selected) else {
            return Vec::new();
        };
        if piece.owner != player {
            return Vec::new();
        }

        if self.find_all_captures(player).is_empty() {
            self.non_capture_moves(selected, piece.promoted)
        } else {
            self.captures_for_piece(selected)
        }
    }

    /// Returns the board after `mv`. Does not validate legality.
    pub fn apply_move(&self, mv: &Move) -> Self {
        let mut next = *self;
        let Some(mut piece) = next.cells[mv.from.index()].take() else {
            return next;
        };

        if mv.to.row() == piece.owner.promotion_row() {
            piece.promoted = true;
        }
        next.cells[mv.to.index()] = Some(piece);

        for captured in &mv.captured {
            next.cells[captured.index()] = None;
        }

        next
    }

    /// Decides whether either side has run out of pieces or actions.
    ///
    /// Black is checked before White, so a board where both sides are stuck
    /// is scored as a White win.
    pub fn check_terminal(&self) -> Terminal {
        if !self.has_any_action(Player::Black) {
            return Terminal::Won(Player::White);
        }
        if !self.has_any_action(Player::White) {
            return Terminal::Won(Player::Black);
        }
        Terminal::Ongoing
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        self.cells
            .iter()
            .flatten()
            .fold((0, 0), |(black, white), piece| match piece.owner {
                Player::Black => (black + 1, white),
                Player::White => (black, white + 1),
            })
    }

    /// Converts board to `[u8; 64]` using [`Piece::code`], 0 for empty.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut out = [0u8; NUM_SQUARES];
        for (cell, slot) in out.iter_mut().zip(self.cells.iter()) {
            *cell = slot.map_or(0, Piece::code);
        }
        out
    }

    fn has_any_action(&self, player: Player) -> bool {
        self.squares_of(player).any(|square| {
            let promoted = self.piece_at(square).is_some_and(|p| p.promoted);
            !self.captures_for_piece(square).is_empty()
                || !self.non_capture_moves(square, promoted).is_empty()
        })
    }

    fn squares_of(&self, player: Player) -> impl Iterator<Item = Square> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| cell.is_some_and(|p| p.owner == player))
            .filter_map(|(idx, _)| Square::from_index(idx))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
