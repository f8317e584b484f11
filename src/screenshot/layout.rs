use crate::platform::{Rect, Size};

/// Where an image and its bars go when it is fitted into a rectangle with its aspect ratio kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letterbox {
    pub image: Rect,
    /// Left/top bar followed by right/bottom bar. Empty when the aspect ratios match.
    pub bars: [Option<Rect>; 2],
}

/// Fit `source` into `dest` keeping its aspect ratio.
///
/// A narrower source gets bars left and right, a wider one top and bottom. When the excess is odd
/// the extra pixel goes to the right/bottom bar. Callers must not pass an empty `source` or `dest`.
pub fn letterbox(source: Size, dest: Rect) -> Letterbox {
    let (x, y, w, h) = (dest.left, dest.top, dest.width(), dest.height());

    let src_ar = source.width as f32 / source.height as f32;
    let dest_ar = w as f32 / h as f32;

    if src_ar < dest_ar {
        let proper_width = (h as f32 * src_ar) as i32;
        let excess = w - proper_width;
        let left_w = excess / 2;
        let right_w = excess - left_w;

        Letterbox {
            image: Rect::from_xywh(x + left_w, y, proper_width, h),
            bars: [
                Some(Rect::from_xywh(x, y, left_w, h)),
                Some(Rect::from_xywh(x + left_w + proper_width, y, right_w, h)),
            ],
        }
    } else if src_ar > dest_ar {
        let proper_height = (w as f32 / src_ar) as i32;
        let excess = h - proper_height;
        let top_h = excess / 2;
        let bottom_h = excess - top_h;

        Letterbox {
            image: Rect::from_xywh(x, y + top_h, w, proper_height),
            bars: [
                Some(Rect::from_xywh(x, y, w, top_h)),
                Some(Rect::from_xywh(x, y + top_h + proper_height, w, bottom_h)),
            ],
        }
    } else {
        Letterbox {
            image: dest,
            bars: [None, None],
        }
    }
}

/// Height that keeps `source`'s aspect ratio at width `width`, rounded up.
pub fn height_for_width(source: Size, width: i32) -> i32 {
    if source.width > 0 {
        (source.height as f32 * width as f32 / source.width as f32).ceil() as i32
    } else {
        0
    }
}
