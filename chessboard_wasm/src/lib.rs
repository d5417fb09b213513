// Browser front-end. JS owns one `WebSession`, forwards board events to it and re-renders the
// board component from `board_props_json` after each call.

extern crate console_error_panic_hook;
extern crate serde_json;
extern crate wasm_bindgen;

extern crate chessboard_ui;

pub mod web_error_handling;
pub mod web_session;

pub use web_error_handling::{RustError, last_panic, set_panic_hook};
pub use web_session::WebSession;
