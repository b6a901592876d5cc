mod board;
mod bot_controller;
mod game_state;
mod searcher;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotMove, calculate_minimax_move, calculate_move};
pub use game_state::TicTacToeGameState;
pub use searcher::{
    AI_WIN_SCORE, DRAW_SCORE, HUMAN_WIN_SCORE, SearchResult, SearchStats, Searcher, best_move,
    evaluate,
};
pub use settings::TicTacToeSettings;
pub use types::{
    BOARD_SIZE, BotType, CELL_COUNT, FirstPlayerMode, Mark, Move, Outcome, Player, WinningLine,
};
pub use win_detector::{LINES, check_win_with_line};
