use eframe::egui;
use tictactoe_engine::games::tictactoe::{Move, Outcome, Player, TicTacToeGameState, TicTacToeSettings};
use tictactoe_engine::{SessionRng, log};

use super::board_view::BoardView;

pub struct TicTacToeApp {
    settings: TicTacToeSettings,
    rng: SessionRng,
    state: TicTacToeGameState,
    board_view: BoardView,
    message: Option<String>,
}

impl TicTacToeApp {
    pub fn new(settings: TicTacToeSettings, mut rng: SessionRng) -> Result<Self, String> {
        let state = TicTacToeGameState::new(&settings, &mut rng)?;
        let mut app = Self {
            settings,
            rng,
            state,
            board_view: BoardView::new(),
            message: None,
        };
        app.log_new_game();
        app.play_ai_turn();
        Ok(app)
    }

    pub fn start_new_game(&mut self) {
        match TicTacToeGameState::new(&self.settings, &mut self.rng) {
            Ok(state) => {
                self.state = state;
                self.message = None;
                self.log_new_game();
                self.play_ai_turn();
            }
            Err(e) => self.message = Some(e),
        }
    }

    pub fn handle_cell_click(&mut self, pos: Move) {
        match self.state.human_move(pos) {
            Ok(()) => {
                log!("Human played {}", pos);
                self.message = None;
                self.play_ai_turn();
            }
            Err(e) => self.message = Some(e),
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    fn log_new_game(&self) {
        log!(
            "New game: first player {}, bot {:?}",
            self.state.first_player(),
            self.settings.bot_type
        );
    }

    fn play_ai_turn(&mut self) {
        if self.state.is_over() || self.state.current_player() != Player::Ai {
            return;
        }
        match self.state.ai_move(&mut self.rng) {
            Ok(bot_move) => log!(
                "AI played {} (score {:?}, {} positions searched)",
                bot_move.position,
                bot_move.score,
                bot_move.stats.nodes
            ),
            Err(e) => self.message = Some(e),
        }
        if self.state.is_over() {
            log!("Game over: {:?}", self.state.outcome());
        }
    }

    pub fn status_text(&self) -> String {
        match self.state.outcome() {
            Outcome::AiWins => "AI wins!".to_string(),
            Outcome::HumanWins => "Congratulations! You win!".to_string(),
            Outcome::Draw => "It's a tie!".to_string(),
            Outcome::InProgress => {
                let human_mark = self.state.board().mark_of(Player::Human);
                format!("Your turn, you play '{}'", human_mark)
            }
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(self.status_text());
                if let Some(message) = &self.message {
                    ui.label(egui::RichText::new(message).color(egui::Color32::RED));
                }
                ui.add_space(10.0);

                if let Some(pos) = self.board_view.show(ui, &self.state) {
                    self.handle_cell_click(pos);
                }

                ui.add_space(10.0);
                if ui.button("New game").clicked() {
                    self.start_new_game();
                }
            });
        });
    }
}
