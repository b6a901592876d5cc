use crate::games::SessionRng;
use super::board::Board;
use super::bot_controller::{BotMove, calculate_move};
use super::settings::TicTacToeSettings;
use super::types::{BotType, FirstPlayerMode, Move, Outcome, Player};

/// One game between a human and the bot. Front-ends drive it by calling
/// `human_move` and `ai_move` whenever their loop or event queue decides.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    bot_type: BotType,
    first_player: Player,
    current_player: Player,
    last_move: Option<Move>,
}

impl TicTacToeGameState {
    pub fn new(settings: &TicTacToeSettings, rng: &mut SessionRng) -> Result<Self, String> {
        let board = Board::with_ai_mark(settings.ai_mark)?;

        let first_player = match settings.first_player {
            FirstPlayerMode::Random => {
                if rng.random_bool() {
                    Player::Ai
                } else {
                    Player::Human
                }
            }
            FirstPlayerMode::Human => Player::Human,
            FirstPlayerMode::Ai => Player::Ai,
        };

        Ok(Self {
            board,
            bot_type: settings.bot_type,
            first_player,
            current_player: first_player,
            last_move: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn first_player(&self) -> Player {
        self.first_player
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    pub fn human_move(&mut self, pos: Move) -> Result<(), String> {
        self.ensure_turn(Player::Human)?;

        if pos >= self.board.cells().len() {
            return Err("Position out of bounds".to_string());
        }

        if !self.board.apply_move(pos, Player::Human) {
            return Err("Cell is already marked".to_string());
        }

        self.finish_turn(pos);
        Ok(())
    }

    pub fn ai_move(&mut self, rng: &mut SessionRng) -> Result<BotMove, String> {
        self.ensure_turn(Player::Ai)?;

        let bot_move = calculate_move(self.bot_type, &mut self.board, rng)
            .ok_or_else(|| "No move available".to_string())?;

        if !self.board.apply_move(bot_move.position, Player::Ai) {
            return Err(format!("Bot chose occupied cell {}", bot_move.position));
        }

        self.finish_turn(bot_move.position);
        Ok(bot_move)
    }

    fn ensure_turn(&self, player: Player) -> Result<(), String> {
        if self.is_over() {
            return Err("Game is already over".to_string());
        }
        if self.current_player != player {
            return Err("Not your turn".to_string());
        }
        Ok(())
    }

    fn finish_turn(&mut self, pos: Move) {
        self.last_move = Some(pos);
        if !self.is_over() {
            self.current_player = self.current_player.opponent();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Mark;

    fn settings(first_player: FirstPlayerMode) -> TicTacToeSettings {
        TicTacToeSettings {
            first_player,
            ..TicTacToeSettings::default()
        }
    }

    fn create_state(first_player: FirstPlayerMode) -> (TicTacToeGameState, SessionRng) {
        let mut rng = SessionRng::new(42);
        let state = TicTacToeGameState::new(&settings(first_player), &mut rng).unwrap();
        (state, rng)
    }

    #[test]
    fn test_first_player_mode_is_respected() {
        let (human_first, _) = create_state(FirstPlayerMode::Human);
        assert_eq!(human_first.current_player(), Player::Human);

        let (ai_first, _) = create_state(FirstPlayerMode::Ai);
        assert_eq!(ai_first.current_player(), Player::Ai);
        assert_eq!(ai_first.first_player(), Player::Ai);
    }

    #[test]
    fn test_random_first_player_is_seeded() {
        let (a, _) = create_state(FirstPlayerMode::Random);
        let (b, _) = create_state(FirstPlayerMode::Random);
        assert_eq!(a.first_player(), b.first_player());
    }

    #[test]
    fn test_human_move_passes_turn() {
        let (mut state, _) = create_state(FirstPlayerMode::Human);
        state.human_move(4).unwrap();
        assert_eq!(state.board().cell(4), Some(Mark::O));
        assert_eq!(state.current_player(), Player::Ai);
        assert_eq!(state.last_move(), Some(4));
    }

    #[test]
    fn test_human_move_rejections() {
        let (mut state, mut rng) = create_state(FirstPlayerMode::Human);
        assert_eq!(state.human_move(9).unwrap_err(), "Position out of bounds");

        state.human_move(0).unwrap();
        assert_eq!(state.human_move(1).unwrap_err(), "Not your turn");

        state.ai_move(&mut rng).unwrap();
        assert_eq!(state.human_move(0).unwrap_err(), "Cell is already marked");
        assert_eq!(state.current_player(), Player::Human);
    }

    #[test]
    fn test_ai_move_out_of_turn_is_rejected() {
        let (mut state, mut rng) = create_state(FirstPlayerMode::Human);
        assert_eq!(state.ai_move(&mut rng).unwrap_err(), "Not your turn");
    }

    #[test]
    fn test_ai_opens_at_lowest_index() {
        let (mut state, mut rng) = create_state(FirstPlayerMode::Ai);
        let bot_move = state.ai_move(&mut rng).unwrap();
        assert_eq!(bot_move.position, 0);
        assert_eq!(state.board().cell(0), Some(Mark::X));
        assert_eq!(state.current_player(), Player::Human);
    }

    #[test]
    fn test_human_mistake_is_punished_and_game_locks() {
        let (mut state, mut rng) = create_state(FirstPlayerMode::Ai);
        state.ai_move(&mut rng).unwrap(); // 0
        state.human_move(1).unwrap();
        state.ai_move(&mut rng).unwrap();
        state.human_move(2).unwrap();

        while !state.is_over() {
            match state.current_player() {
                Player::Ai => {
                    state.ai_move(&mut rng).unwrap();
                }
                Player::Human => {
                    let pos = state.board().available_moves()[0];
                    state.human_move(pos).unwrap();
                }
            }
        }

        assert_eq!(state.outcome(), Outcome::AiWins);
        assert_eq!(state.human_move(8).unwrap_err(), "Game is already over");
        assert_eq!(state.ai_move(&mut rng).unwrap_err(), "Game is already over");
    }

    #[test]
    fn test_random_bot_game_finishes() {
        let settings = TicTacToeSettings {
            first_player: FirstPlayerMode::Ai,
            bot_type: BotType::Random,
            ..TicTacToeSettings::default()
        };
        let mut rng = SessionRng::new(8);
        let mut state = TicTacToeGameState::new(&settings, &mut rng).unwrap();

        while !state.is_over() {
            match state.current_player() {
                Player::Ai => {
                    state.ai_move(&mut rng).unwrap();
                }
                Player::Human => {
                    let pos = state.board().available_moves()[0];
                    state.human_move(pos).unwrap();
                }
            }
        }
        assert!(state.outcome().is_terminal());
    }
}
