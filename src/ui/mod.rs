//! Drawing the window contents.

pub mod draw_cursor;
pub mod paint;

pub use draw_cursor::DrawCursor;
pub use paint::paint_window;
