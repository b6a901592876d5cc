use crate::games::SessionRng;
use super::board::Board;
use super::searcher::{SearchStats, Searcher};
use super::types::{BotType, Move};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotMove {
    pub position: Move,
    /// Minimax value of the chosen move; absent for the random bot.
    pub score: Option<i32>,
    pub stats: SearchStats,
}

pub fn calculate_move(
    bot_type: BotType,
    board: &mut Board,
    rng: &mut SessionRng,
) -> Option<BotMove> {
    match bot_type {
        BotType::Minimax => calculate_minimax_move(board),
        BotType::Random => calculate_random_move(board, rng),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<BotMove> {
    let position = rng.choose(&board.available_moves())?;
    Some(BotMove {
        position,
        score: None,
        stats: SearchStats::default(),
    })
}

pub fn calculate_minimax_move(board: &mut Board) -> Option<BotMove> {
    let mut searcher = Searcher::new();
    let result = searcher.search(board);
    let position = result.best_move?;
    Some(BotMove {
        position,
        score: Some(result.score),
        stats: searcher.stats(),
    })
}
