use super::types::{CELL_COUNT, Mark, Move, Outcome, Player, WinningLine};
use super::win_detector::check_win_with_line;

/// The 3x3 grid plus the fixed symbol assignment of both players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
    ai_mark: Mark,
    human_mark: Mark,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Empty board with the AI playing X and the human playing O.
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
            ai_mark: Mark::X,
            human_mark: Mark::O,
        }
    }

    pub fn with_ai_mark(ai_mark: Mark) -> Result<Self, String> {
        Self::from_marks([Mark::Empty; CELL_COUNT], ai_mark)
    }

    /// Builds a board from explicit cell contents. No legality check is made
    /// on the mark counts, so callers can set up arbitrary positions.
    pub fn from_marks(cells: [Mark; CELL_COUNT], ai_mark: Mark) -> Result<Self, String> {
        let human_mark = ai_mark
            .opponent()
            .ok_or_else(|| "AI mark must be X or O".to_string())?;
        Ok(Self {
            cells,
            ai_mark,
            human_mark,
        })
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, pos: Move) -> Option<Mark> {
        self.cells.get(pos).copied()
    }

    pub fn mark_of(&self, player: Player) -> Mark {
        match player {
            Player::Ai => self.ai_mark,
            Player::Human => self.human_mark,
        }
    }

    pub fn player_at(&self, pos: Move) -> Option<Player> {
        self.cell(pos).and_then(|mark| self.player_for_mark(mark))
    }

    fn player_for_mark(&self, mark: Mark) -> Option<Player> {
        if mark == Mark::Empty {
            None
        } else if mark == self.ai_mark {
            Some(Player::Ai)
        } else {
            Some(Player::Human)
        }
    }

    pub fn available_moves(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Mark::Empty)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Places `player`'s mark on an empty in-range cell. Returns false and
    /// leaves the board untouched otherwise.
    pub fn apply_move(&mut self, pos: Move, player: Player) -> bool {
        let mark = self.mark_of(player);
        match self.cells.get_mut(pos) {
            Some(cell) if *cell == Mark::Empty => {
                *cell = mark;
                true
            }
            _ => false,
        }
    }

    /// Clears a cell set by a hypothetical `apply_move`.
    pub fn undo_move(&mut self, pos: Move) {
        if let Some(cell) = self.cells.get_mut(pos) {
            *cell = Mark::Empty;
        }
    }

    /// Under legal play at most one player can own a complete line, so the
    /// fixed line order never has to break a tie between two winners.
    pub fn winner(&self) -> Option<Player> {
        self.winning_line().map(|line| line.player)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        let (mark, cells) = check_win_with_line(&self.cells)?;
        let player = self.player_for_mark(mark)?;
        Some(WinningLine::new(player, cells))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(Player::Ai) => Outcome::AiWins,
            Some(Player::Human) => Outcome::HumanWins,
            None if self.is_full() => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }
}
