//! Progress display for the CLI

pub mod renderer;
pub mod utils;

pub use renderer::percent_bar;
pub use utils::format_bytes;
