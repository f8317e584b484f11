mod common;

use chrono::NaiveDateTime;
use common::{Call, FakePlatform};
use game_todo_list::platform::{Rect, Size};
use game_todo_list::screenshot::Screenshot;
use game_todo_list::screenshot::snapshot::TIMESTAMP_FORMAT;

#[test]
fn capture_copies_screen_one_to_one() {
    let platform = FakePlatform::default();
    let shot = Screenshot::capture(&platform).unwrap();

    assert_eq!(shot.size(), Size::new(1920, 1080));
    // screen DC = 1, memory DC = 2, bitmap = 3
    assert_eq!(shot.bitmap(), 3);
    assert!(platform.calls().contains(&Call::BitBlt {
        dest: 2,
        dest_rect: Rect::new(0, 0, 1920, 1080),
        src: 1,
        src_origin: (0, 0),
    }));

    // Only the bitmap is still alive.
    assert_eq!(platform.outstanding(), 1);
    drop(shot);
    assert_eq!(platform.outstanding(), 0);
}

#[test]
fn timestamp_is_local_time() {
    let platform = FakePlatform::default();
    let shot = Screenshot::capture(&platform).unwrap();

    assert_eq!(shot.timestamp().len(), 19);
    assert!(NaiveDateTime::parse_from_str(shot.timestamp(), TIMESTAMP_FORMAT).is_ok());
}

#[test]
fn draw_letterboxes_into_area() {
    let platform = FakePlatform::new(Size::new(200, 100), Rect::new(0, 0, 384, 361));
    let shot = Screenshot::capture(&platform).unwrap();
    platform.clear_calls();

    // 2:1 into 400x300: image 400x200, 50 of bar above and below.
    shot.draw_to(50, Rect::from_xywh(0, 0, 400, 300)).unwrap();

    let calls = platform.calls();
    assert!(calls.contains(&Call::FillBackground {
        dc: 50,
        rect: Rect::from_xywh(0, 0, 400, 50)
    }));
    assert!(calls.contains(&Call::FillBackground {
        dc: 50,
        rect: Rect::from_xywh(0, 250, 400, 50)
    }));
    assert!(calls.iter().any(|call| matches!(
        call,
        Call::StretchBlt {
            dest: 50,
            dest_rect,
            src_rect,
            ..
        } if *dest_rect == Rect::from_xywh(0, 50, 400, 200)
            && *src_rect == Rect::new(0, 0, 200, 100)
    )));
    assert_eq!(platform.outstanding(), 1);
}

#[test]
fn draw_into_empty_area_does_nothing() {
    let platform = FakePlatform::default();
    let shot = Screenshot::capture(&platform).unwrap();
    platform.clear_calls();

    shot.draw_to(50, Rect::from_xywh(10, 10, 0, 100)).unwrap();
    assert!(platform.calls().is_empty());
}

#[test]
fn auto_height_keeps_aspect_ratio() {
    let platform = FakePlatform::default();
    let shot = Screenshot::capture(&platform).unwrap();

    assert_eq!(shot.height_for_width(400), 225);
    assert_eq!(shot.draw_to_auto_height(50, 0, 0, 400).unwrap(), 225);
}
