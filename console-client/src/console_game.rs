use std::io::{BufRead, Write};
use tictactoe_engine::games::tictactoe::{
    BOARD_SIZE, Board, Outcome, Player, TicTacToeGameState, TicTacToeSettings,
};
use tictactoe_engine::{SessionRng, log};

pub fn render_board(board: &Board) -> String {
    let rows: Vec<String> = board
        .cells()
        .chunks(BOARD_SIZE)
        .map(|row| {
            row.iter()
                .map(|mark| mark.to_char().to_string())
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect();
    rows.join("\n---------\n")
}

fn render_position_key() -> String {
    (0..BOARD_SIZE)
        .map(|row| {
            (0..BOARD_SIZE)
                .map(|col| (row * BOARD_SIZE + col).to_string())
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect::<Vec<_>>()
        .join("\n---------\n")
}

pub fn outcome_message(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::AiWins => Some("AI wins!"),
        Outcome::HumanWins => Some("Congratulations! You win!"),
        Outcome::Draw => Some("It's a tie!"),
        Outcome::InProgress => None,
    }
}

/// Text front-end: owns prompting, input validation and turn alternation.
pub struct ConsoleGame<R: BufRead, W: Write> {
    input: R,
    output: W,
    show_search_stats: bool,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    pub fn new(input: R, output: W, show_search_stats: bool) -> Self {
        Self {
            input,
            output,
            show_search_stats,
        }
    }

    /// Plays one game. Returns `Ok(None)` when input ends before the game does.
    pub fn run(
        &mut self,
        settings: &TicTacToeSettings,
        rng: &mut SessionRng,
    ) -> Result<Option<Outcome>, String> {
        let mut state = TicTacToeGameState::new(settings, rng)?;
        log!(
            "New game: seed {}, first player {}, bot {:?}",
            rng.seed(),
            state.first_player(),
            settings.bot_type
        );

        self.print_welcome(&state)?;

        while !state.is_over() {
            self.write_line(&render_board(state.board()))?;

            match state.current_player() {
                Player::Ai => {
                    self.write_line("\nAI's turn...")?;
                    let bot_move = state.ai_move(rng)?;
                    log!(
                        "AI played {} (score {:?}, {} positions searched)",
                        bot_move.position,
                        bot_move.score,
                        bot_move.stats.nodes
                    );
                    if self.show_search_stats {
                        self.write_line(&format!(
                            "AI searched {} positions, {} plies deep",
                            bot_move.stats.nodes, bot_move.stats.max_depth
                        ))?;
                    }
                }
                Player::Human => {
                    let Some(pos) = self.read_human_move(&mut state)? else {
                        log!("Input closed, abandoning game");
                        return Ok(None);
                    };
                    log!("Human played {}", pos);
                }
            }
        }

        let outcome = state.outcome();
        self.write_line(&render_board(state.board()))?;
        if let Some(message) = outcome_message(outcome) {
            self.write_line(&format!("\n{}", message))?;
        }
        log!("Game over: {:?}", outcome);
        Ok(Some(outcome))
    }

    fn print_welcome(&mut self, state: &TicTacToeGameState) -> Result<(), String> {
        let board = state.board();
        self.write_line("Welcome to Tic Tac Toe!")?;
        self.write_line(&format!(
            "You are '{}' and the AI is '{}'",
            board.mark_of(Player::Human),
            board.mark_of(Player::Ai)
        ))?;
        self.write_line("Enter positions (0-8) as shown below:")?;
        self.write_line(&render_position_key())?;
        self.write_line("")?;
        let first = match state.first_player() {
            Player::Ai => "The AI goes first.",
            Player::Human => "You go first.",
        };
        self.write_line(first)
    }

    fn read_human_move(&mut self, state: &mut TicTacToeGameState) -> Result<Option<usize>, String> {
        loop {
            self.write("\nYour turn (0-8): ")?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| format!("Failed to read input: {}", e))?;
            if read == 0 {
                return Ok(None);
            }

            let Ok(number) = line.trim().parse::<i64>() else {
                self.write_line("Please enter a number between 0 and 8!")?;
                continue;
            };
            let Ok(pos) = usize::try_from(number) else {
                log!("Rejected move {}: negative position", number);
                self.write_line("Invalid move! Try again.")?;
                continue;
            };

            match state.human_move(pos) {
                Ok(()) => return Ok(Some(pos)),
                Err(reason) => {
                    log!("Rejected move {}: {}", pos, reason);
                    self.write_line("Invalid move! Try again.")?;
                }
            }
        }
    }

    fn write(&mut self, text: &str) -> Result<(), String> {
        write!(self.output, "{}", text)
            .and_then(|_| self.output.flush())
            .map_err(|e| format!("Failed to write output: {}", e))
    }

    fn write_line(&mut self, text: &str) -> Result<(), String> {
        writeln!(self.output, "{}", text).map_err(|e| format!("Failed to write output: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::games::tictactoe::{FirstPlayerMode, Mark};

    fn settings(first_player: FirstPlayerMode) -> TicTacToeSettings {
        TicTacToeSettings {
            first_player,
            ..TicTacToeSettings::default()
        }
    }

    fn play(input: &str, first_player: FirstPlayerMode) -> (Option<Outcome>, String) {
        let mut output = Vec::new();
        let mut rng = SessionRng::new(1);
        let outcome = {
            let mut game = ConsoleGame::new(input.as_bytes(), &mut output, true);
            game.run(&settings(first_player), &mut rng).unwrap()
        };
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_render_board_layout() {
        let board = Board::from_marks(
            [Mark::X, Mark::O, Mark::Empty, Mark::Empty, Mark::X, Mark::Empty, Mark::O, Mark::Empty, Mark::Empty],
            Mark::X,
        )
        .unwrap();
        assert_eq!(
            render_board(&board),
            "X | O |  \n---------\n  | X |  \n---------\nO |   |  "
        );
    }

    #[test]
    fn test_position_key_lists_indices() {
        assert_eq!(
            render_position_key(),
            "0 | 1 | 2\n---------\n3 | 4 | 5\n---------\n6 | 7 | 8"
        );
    }

    #[test]
    fn test_losing_human_line_ends_with_ai_win() {
        // AI: 0, human 1, AI 3, human 2, AI 4, human 5, AI 6 completes column 0
        let (outcome, output) = play("1\n2\n5\n", FirstPlayerMode::Ai);
        assert_eq!(outcome, Some(Outcome::AiWins));
        assert!(output.contains("The AI goes first."));
        assert!(output.contains("AI's turn..."));
        assert!(output.ends_with("AI wins!\n"));
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let (outcome, output) = play("abc\n9\n4\n4\n", FirstPlayerMode::Human);
        assert_eq!(outcome, None);
        assert!(output.contains("Please enter a number between 0 and 8!"));
        assert_eq!(output.matches("Invalid move! Try again.").count(), 2);
    }

    #[test]
    fn test_negative_input_is_invalid_move() {
        let (outcome, output) = play("-1\n", FirstPlayerMode::Human);
        assert_eq!(outcome, None);
        assert!(output.contains("Invalid move! Try again."));
        assert!(!output.contains("Please enter a number between 0 and 8!"));
    }

    #[test]
    fn test_outcome_message_only_for_finished_games() {
        assert_eq!(outcome_message(Outcome::Draw), Some("It's a tie!"));
        assert_eq!(outcome_message(Outcome::InProgress), None);
    }

    #[test]
    fn test_closed_input_abandons_game() {
        let (outcome, output) = play("", FirstPlayerMode::Human);
        assert_eq!(outcome, None);
        assert!(output.contains("You go first."));
    }

    #[test]
    fn test_search_stats_are_printed() {
        let (_, output) = play("", FirstPlayerMode::Ai);
        assert!(output.contains("AI searched 549945 positions, 9 plies deep"));
    }
}
