use std::cell::RefCell;

use tracing::debug;
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};

use super::event_converter::EventConverter;
use super::gdi::Win32Platform;
use super::{win_api, window_id};
use crate::config::WindowOptions;
use crate::constants::WINDOW_CLASS_NAME;
use crate::controller::{WindowController, dispatch_shared};
use crate::platform::WindowEvent;

type SharedController = RefCell<WindowController<Win32Platform>>;

/// Create the main window, show it and pump messages until it is destroyed.
///
/// Returns the exit code carried by `WM_QUIT`.
pub fn run_main_window(options: &WindowOptions) -> windows::core::Result<i32> {
    let class_name = win_api::to_wide_chars(WINDOW_CLASS_NAME);
    let title = win_api::to_wide_chars(&options.title);

    win_api::register_window_class(&class_name, window_proc)?;
    let hwnd = win_api::create_overlapped_window(
        &class_name,
        &title,
        options.x,
        options.y,
        options.width,
        options.height,
        None,
    )?;

    debug!("calling ShowWindow");
    win_api::show_window(hwnd);

    let exit_code = win_api::run_message_loop();
    debug!(exit_code, "message loop finished");
    Ok(exit_code)
}

fn finish(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
    result: Option<isize>,
) -> LRESULT {
    match result {
        Some(result) => LRESULT(result),
        None => win_api::def_window_proc(hwnd, msg, wparam, lparam),
    }
}

unsafe extern "system" fn window_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let event = EventConverter::convert(msg, wparam, lparam);

    match event {
        WindowEvent::Created => {
            // Published only after setup; messages sent during it (WM_SETICON) take the default
            // path.
            let controller = WindowController::new(Win32Platform::new(), window_id(hwnd));
            let shared: Box<SharedController> = Box::new(RefCell::new(controller));
            let result = dispatch_shared(&shared, event);
            win_api::set_window_user_data(hwnd, Box::into_raw(shared) as isize);
            finish(hwnd, msg, wparam, lparam, result)
        }

        WindowEvent::Destroyed => {
            let ptr = win_api::get_window_user_data(hwnd) as *mut SharedController;
            if ptr.is_null() {
                return win_api::def_window_proc(hwnd, msg, wparam, lparam);
            }

            // SAFETY: published in WM_CREATE, freed only below; shared access only.
            let in_use = unsafe { &*ptr }.try_borrow_mut().is_err();
            if in_use {
                // Destroyed from inside a handler; the outer call still holds the controller.
                return win_api::def_window_proc(hwnd, msg, wparam, lparam);
            }
            win_api::set_window_user_data(hwnd, 0);

            // SAFETY: came from Box::into_raw in WM_CREATE, just unpublished and not borrowed.
            let shared = unsafe { Box::from_raw(ptr) };
            let result = dispatch_shared(&shared, event);
            finish(hwnd, msg, wparam, lparam, result)
        }

        _ => {
            let ptr = win_api::get_window_user_data(hwnd) as *const SharedController;
            if ptr.is_null() {
                return win_api::def_window_proc(hwnd, msg, wparam, lparam);
            }

            // SAFETY: published in WM_CREATE, only touched on this thread, freed in WM_DESTROY.
            // Only a shared reference is formed; mutation goes through the RefCell.
            let shared = unsafe { &*ptr };
            let result = dispatch_shared(shared, event);
            finish(hwnd, msg, wparam, lparam, result)
        }
    }
}
