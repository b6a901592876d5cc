//! Perfect-play tic-tac-toe: board rules, exhaustive minimax search and the
//! game session shared by the console and desktop front-ends.

pub mod config;
pub mod games;
pub mod logger;

pub use games::SessionRng;
pub use games::tictactoe::{Board, Move, Outcome, Player, Searcher, TicTacToeGameState};
