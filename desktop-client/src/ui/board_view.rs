use tictactoe_engine::games::tictactoe::{BOARD_SIZE, Mark, Move, Player, TicTacToeGameState};

pub struct BoardView {
    hovered_cell: Option<Move>,
}

impl BoardView {
    const MIN_CELL_SIZE: f32 = 40.0;
    const MAX_CELL_SIZE: f32 = 140.0;
    const STATUS_AREA_HEIGHT: f32 = 90.0;
    const LINE_WIDTH: f32 = 2.0;

    pub fn new() -> Self {
        Self { hovered_cell: None }
    }

    fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let side = available_width.min(available_height - Self::STATUS_AREA_HEIGHT);
        (side / BOARD_SIZE as f32).clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    /// Paints the board and returns the empty cell the human clicked, if any.
    pub fn show(&mut self, ui: &mut egui::Ui, state: &TicTacToeGameState) -> Option<Move> {
        let cell_size = Self::calculate_cell_size(ui.available_width(), ui.available_height());
        let board_side = cell_size * BOARD_SIZE as f32;

        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(board_side, board_side), egui::Sense::click());
        let painter = ui.painter();
        let board = state.board();

        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

        let winning_line = board.winning_line();
        for pos in 0..board.cells().len() {
            if let Some(line) = winning_line.filter(|line| line.contains(pos)) {
                painter.rect_filled(cell_rect(rect, cell_size, pos), 0.0, line_fill(line.player));
            }
        }

        let human_to_move = !state.is_over() && state.current_player() == Player::Human;
        self.hovered_cell = if human_to_move {
            response
                .hover_pos()
                .and_then(|pos| cell_at(rect.min, cell_size, pos))
                .filter(|&pos| board.cell(pos) == Some(Mark::Empty))
        } else {
            None
        };

        if let Some(pos) = self.hovered_cell {
            painter.rect_filled(
                cell_rect(rect, cell_size, pos),
                0.0,
                egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
            );
        }

        let stroke = egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK);
        for i in 1..BOARD_SIZE {
            let offset = i as f32 * cell_size;
            painter.line_segment(
                [
                    egui::pos2(rect.left() + offset, rect.top()),
                    egui::pos2(rect.left() + offset, rect.bottom()),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    egui::pos2(rect.left(), rect.top() + offset),
                    egui::pos2(rect.right(), rect.top() + offset),
                ],
                stroke,
            );
        }

        for (pos, &mark) in board.cells().iter().enumerate() {
            let Some(player) = board.player_at(pos) else {
                continue;
            };
            let target = cell_rect(rect, cell_size, pos);
            let color = mark_color(player);
            match mark {
                Mark::X => draw_x(painter, target, color),
                Mark::O => draw_o(painter, target, color),
                Mark::Empty => {}
            }
        }

        if response.clicked() {
            return self.hovered_cell;
        }
        None
    }
}

fn cell_rect(board_rect: egui::Rect, cell_size: f32, pos: Move) -> egui::Rect {
    let row = pos / BOARD_SIZE;
    let col = pos % BOARD_SIZE;
    egui::Rect::from_min_size(
        egui::pos2(
            board_rect.left() + col as f32 * cell_size,
            board_rect.top() + row as f32 * cell_size,
        ),
        egui::vec2(cell_size, cell_size),
    )
}

pub fn cell_at(board_min: egui::Pos2, cell_size: f32, pointer: egui::Pos2) -> Option<Move> {
    let x = (pointer.x - board_min.x) / cell_size;
    let y = (pointer.y - board_min.y) / cell_size;
    if x < 0.0 || y < 0.0 {
        return None;
    }
    let (col, row) = (x as usize, y as usize);
    if col >= BOARD_SIZE || row >= BOARD_SIZE {
        return None;
    }
    Some(row * BOARD_SIZE + col)
}

fn line_fill(player: Player) -> egui::Color32 {
    match player {
        Player::Ai => egui::Color32::from_rgb(250, 200, 200),
        Player::Human => egui::Color32::from_rgb(200, 240, 200),
    }
}

fn mark_color(player: Player) -> egui::Color32 {
    match player {
        Player::Ai => egui::Color32::from_rgb(220, 50, 50),
        Player::Human => egui::Color32::from_rgb(50, 50, 220),
    }
}

fn draw_x(painter: &egui::Painter, rect: egui::Rect, color: egui::Color32) {
    let padding = rect.width() * 0.2;
    let stroke = egui::Stroke::new(4.0, color);
    painter.line_segment(
        [
            egui::pos2(rect.left() + padding, rect.top() + padding),
            egui::pos2(rect.right() - padding, rect.bottom() - padding),
        ],
        stroke,
    );
    painter.line_segment(
        [
            egui::pos2(rect.right() - padding, rect.top() + padding),
            egui::pos2(rect.left() + padding, rect.bottom() - padding),
        ],
        stroke,
    );
}

fn draw_o(painter: &egui::Painter, rect: egui::Rect, color: egui::Color32) {
    let padding = rect.width() * 0.2;
    let radius = rect.width() / 2.0 - padding;
    let stroke = egui::Stroke::new(4.0, color);
    painter.circle_stroke(rect.center(), radius, stroke);
}
