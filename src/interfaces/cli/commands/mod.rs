//! CLI command implementations

mod config_gen;
mod history;
mod open;
mod shorten;

pub use config_gen::config_generate;
pub use history::{clear_history, list_history};
pub use open::{TerminalNavigator, open_path};
pub use shorten::shorten_url;
