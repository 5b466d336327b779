//! Terminal glue - framebuffer, renderer, and the board view
//!
//! Everything terminal-shaped lives here; the core never touches I/O.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
