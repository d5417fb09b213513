// PGN (Portable Game Notation) export of a single game.
// Doc: http://www.saremba.de/chessgml/standards/pgn/pgn-complete.htm

use crate::force::Force;
use crate::view_state::{GameStatus, ViewState};


const LINE_WIDTH: usize = 80;

struct TextDocument {
    text: String,
    last_line_len: usize,
}
impl TextDocument {
    fn new() -> Self { TextDocument { text: String::new(), last_line_len: 0 } }
    fn push_word(&mut self, word: &str) {
        if self.last_line_len == 0 {
            // no separators: first word on the line
        } else if self.last_line_len + word.len() < LINE_WIDTH {
            self.text.push(' ');
            self.last_line_len += 1;
        } else {
            self.text.push('\n');
            self.last_line_len = 0;
        }
        self.text.push_str(word);
        self.last_line_len += word.len();
    }
    fn render(&self) -> String {
        let trailing_newline = if self.last_line_len > 0 { "\n" } else { "" };
        format!("{}{}", self.text, trailing_newline)
    }
}

pub fn result_tag(status: &GameStatus, side_to_move: Force) -> &'static str {
    if status.in_checkmate {
        match side_to_move {
            Force::White => "0-1",
            Force::Black => "1-0",
        }
    } else if status.in_draw {
        "1/2-1/2"
    } else {
        "*"
    }
}

pub fn export_pgn(view: &ViewState) -> String {
    let result = result_tag(&view.status, view.side_to_move);
    let mut tags = vec![
        ("Event", "Casual game"),
        ("Site", "?"),
        ("White", "?"),
        ("Black", "?"),
        ("Result", result),
    ];
    if !view.start.is_standard() {
        tags.push(("SetUp", "1"));
        tags.push(("FEN", view.start.position.as_str()));
    }
    let mut doc = TextDocument::new();
    for pair in view.move_pairs() {
        match pair.white {
            Some(white) => {
                doc.push_word(&format!("{}.", pair.number));
                doc.push_word(&white);
            }
            None => doc.push_word(&format!("{}...", pair.number)),
        }
        if let Some(black) = pair.black {
            doc.push_word(&black);
        }
    }
    doc.push_word(result);
    let header: String =
        tags.into_iter().map(|(name, value)| format!("[{name} \"{value}\"]\n")).collect();
    format!("{}\n{}", header, doc.render())
}
