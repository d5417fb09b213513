use console::Style;
use itertools::Itertools;

use chessboard_ui::coord::{Coord, NUM_COLS, NUM_ROWS};
use chessboard_ui::display::{BoardOrientation, DisplayCoord, Highlight, from_display_coord};
use chessboard_ui::force::Force;
use chessboard_ui::piece::piece_to_pictogram;
use chessboard_ui::rules::RulesEngine;
use chessboard_ui::session::GameSession;
use chessboard_ui::view_state::CapturedPieces;


const BOARD_WIDTH: usize = (NUM_COLS as usize + 2) * 3;

fn format_square(ch: char) -> String { format!(" {} ", ch) }

fn square_style(coord: Coord, highlight: Option<Highlight>) -> Style {
    let background = match highlight {
        Some(Highlight::Selection) => 228,
        Some(Highlight::OptionPlain) => 151,
        Some(Highlight::OptionCapture) => 217,
        Some(Highlight::Annotation) => 117,
        None if coord.is_light() => 230,
        None => 222,
    };
    Style::new().color256(233).on_color256(background)
}

// Pieces `force` has taken, shown on `force`'s side of the board.
fn render_captured(captured: &CapturedPieces, force: Force) -> String {
    let lost_force = force.opponent();
    let pieces = captured
        .lost_counts(lost_force)
        .into_iter()
        .map(|(kind, count)| piece_to_pictogram(kind, lost_force).to_string().repeat(count))
        .join("");
    format!(
        "{1:^0$}\n",
        BOARD_WIDTH,
        Style::new().color256(233).on_color256(194).apply_to(pieces)
    )
}

fn render_grid(session: &GameSession) -> String {
    let orientation = session.config().orientation;
    let highlights = session.square_highlights();
    let col_labels = (0..NUM_COLS)
        .map(|x| {
            let coord = from_display_coord(DisplayCoord { x, y: 0 }, orientation);
            format_square(coord.map_or(' ', |c| c.col.to_algebraic()))
        })
        .join("");
    let col_header = format!("{0}{1}{0}\n", format_square(' '), col_labels);
    let mut ret = col_header.clone();
    for y in 0..NUM_ROWS {
        let coords = (0..NUM_COLS)
            .filter_map(|x| from_display_coord(DisplayCoord { x, y }, orientation))
            .collect_vec();
        let row_label = format_square(coords.first().map_or(' ', |c| c.row.to_algebraic()));
        ret.push_str(&row_label);
        for coord in coords {
            let highlight = highlights.get(&coord).copied();
            let ch = match session.engine().piece_at(coord) {
                Some(piece) => piece_to_pictogram(piece.kind, piece.force),
                None if highlight == Some(Highlight::OptionPlain) => '·',
                None => ' ',
            };
            ret.push_str(&square_style(coord, highlight).apply_to(format_square(ch)).to_string());
        }
        ret.push_str(&row_label);
        ret.push('\n');
    }
    ret.push_str(&col_header);
    ret
}

fn render_move_list(session: &GameSession) -> String {
    session
        .view()
        .move_pairs()
        .into_iter()
        .map(|pair| {
            let white = pair.white.as_deref().unwrap_or("...");
            format!("{:>3}. {:<8}{}", pair.number, white, pair.black.as_deref().unwrap_or_default())
        })
        .join("\n")
}

pub fn render_game(session: &GameSession) -> String {
    let view = session.view();
    let (top, bottom) = match session.config().orientation {
        BoardOrientation::Normal => (Force::Black, Force::White),
        BoardOrientation::Rotated => (Force::White, Force::Black),
    };
    let status = Style::new().bold().apply_to(session.status_message());
    let moves = render_move_list(session);
    let moves = if moves.is_empty() { moves } else { format!("\n{moves}\n") };
    format!(
        "{}{}{}\n{:^width$}\n{}",
        render_captured(&view.captured, top),
        render_grid(session),
        render_captured(&view.captured, bottom),
        status,
        moves,
        width = BOARD_WIDTH,
    )
}
