use windows::Win32::UI::WindowsAndMessaging::{GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN};

/// 获取主屏幕尺寸（宽度，高度）
pub fn get_screen_size() -> (i32, i32) {
    // SAFETY: GetSystemMetrics 是线程安全的只读 API，
    // SM_CXSCREEN/SM_CYSCREEN 是有效的系统度量标识符。
    let w = unsafe { GetSystemMetrics(SM_CXSCREEN) };
    let h = unsafe { GetSystemMetrics(SM_CYSCREEN) };
    (w, h)
}
