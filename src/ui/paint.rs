use tracing::warn;

use super::draw_cursor::DrawCursor;
use crate::constants::{PLACEHOLDER_TEXT, PLACEHOLDER_X, PLACEHOLDER_Y};
use crate::error::PaintError;
use crate::platform::{PaintGuard, Platform, SelectedObject, WindowId};

/// Repaint the window: background, then the placeholder text in the system font.
///
/// The previous font is back in the DC before `EndPaint`, whichever step fails.
pub fn paint_window<P: Platform>(platform: &P, window: WindowId) -> Result<(), PaintError> {
    let paint = PaintGuard::begin(platform, window)?;

    if let Err(err) = platform.fill_background(paint.dc(), paint.dirty_rect()) {
        warn!(%err, "background fill failed");
    }

    let font = platform.system_font()?;
    let _font = SelectedObject::font(platform, paint.dc(), font)?;

    let cursor =
        DrawCursor::new(paint.dc(), paint.dirty_rect()).inset(PLACEHOLDER_X, PLACEHOLDER_Y);
    cursor.text_out(platform, PLACEHOLDER_TEXT)?;

    Ok(())
}
