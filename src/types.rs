/*
 * Portable value types shared by the dispatch core and the native backend.
 *
 * The handle and word newtypes are `#[repr(transparent)]` over the same
 * primitive the Win32 ABI uses (`HWND` is a pointer, `WPARAM` an unsigned
 * machine word, `LPARAM`/`LRESULT` signed machine words). That makes the
 * generic window procedures in `dispatcher` and `subclass` ABI-identical to
 * the native callback signatures, while still letting every non-Windows build
 * compile and test the routing logic.
 */
use crate::params::MessageParams;

use std::ffi::c_void;

/// Opaque OS-assigned identifier for a live window instance.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hwnd(pub *mut c_void);

// A window handle is an identifier, never dereferenced by this crate.
unsafe impl Send for Hwnd {}
unsafe impl Sync for Hwnd {}

impl Hwnd {
    pub const NULL: Hwnd = Hwnd(std::ptr::null_mut());

    pub fn from_raw(raw: usize) -> Self {
        Hwnd(raw as *mut c_void)
    }

    pub fn as_raw(self) -> usize {
        self.0 as usize
    }

    pub fn is_null(self) -> bool {
        self.0.is_null()
    }
}

impl Default for Hwnd {
    fn default() -> Self {
        Hwnd::NULL
    }
}

/// First message word (`WPARAM`).
#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WParam(pub usize);

/// Second message word (`LPARAM`).
#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LParam(pub isize);

/// Result of processing one message (`LRESULT`).
#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LResult(pub isize);

impl LParam {
    pub fn from_ptr<T>(ptr: *const T) -> Self {
        LParam(ptr as isize)
    }

    pub fn as_ptr<T>(self) -> *mut T {
        self.0 as *mut T
    }
}

/*
 * Declares opaque GDI/USER handle newtypes. Views hand these out without
 * ever dereferencing them.
 */
macro_rules! opaque_handles {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[repr(transparent)]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub struct $name(pub *mut c_void);

            impl $name {
                pub fn is_null(self) -> bool {
                    self.0.is_null()
                }
            }

            impl Default for $name {
                fn default() -> Self {
                    $name(std::ptr::null_mut())
                }
            }
        )+
    };
}

opaque_handles!(
    /// Device context.
    Hdc,
    /// Menu.
    Hmenu,
    /// Logical font.
    Hfont,
    /// Icon.
    Hicon,
    /// Region.
    Hrgn,
    /// Dropped-files block.
    Hdrop,
    /// Keyboard layout.
    Hkl,
    /// Module instance.
    Hinstance,
);

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub cx: i32,
    pub cy: i32,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

// ── Word helpers ──────────────────────────────────────────────────────────────

#[inline]
pub(crate) fn loword(value: usize) -> u16 {
    (value & 0xFFFF) as u16
}

#[inline]
pub(crate) fn hiword(value: usize) -> u16 {
    ((value >> 16) & 0xFFFF) as u16
}

#[inline]
pub(crate) fn lobyte(value: u16) -> u8 {
    (value & 0xFF) as u8
}

#[inline]
pub(crate) fn make_long(low: u16, high: u16) -> u32 {
    (low as u32) | ((high as u32) << 16)
}

/// One entry retrieved from the thread's message queue.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QueuedMessage {
    pub hwnd: Hwnd,
    pub message: u32,
    pub params: MessageParams,
}

/*
 * Describes a window to be created. Field meanings follow `CreateWindowExW`;
 * `menu_or_id` is the menu handle for top-level windows and the control
 * identifier for child windows.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub ex_style: u32,
    pub class_name: String,
    pub title: String,
    pub style: u32,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub parent: Option<Hwnd>,
    pub menu_or_id: usize,
    pub instance: Hinstance,
}

impl WindowConfig {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            ex_style: 0,
            class_name: class_name.into(),
            title: String::new(),
            style: 0,
            x: crate::messages::CW_USEDEFAULT,
            y: crate::messages::CW_USEDEFAULT,
            width: crate::messages::CW_USEDEFAULT,
            height: crate::messages::CW_USEDEFAULT,
            parent: None,
            menu_or_id: 0,
            instance: Hinstance::default(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn style(mut self, style: u32) -> Self {
        self.style = style;
        self
    }

    pub fn ex_style(mut self, ex_style: u32) -> Self {
        self.ex_style = ex_style;
        self
    }

    pub fn position(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn parent(mut self, parent: Hwnd) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn control_id(mut self, id: u16) -> Self {
        self.menu_or_id = id as usize;
        self
    }

    /// Menu bar of a top-level window.
    pub fn menu(mut self, menu: Hmenu) -> Self {
        self.menu_or_id = menu.0 as usize;
        self
    }

    pub fn instance(mut self, instance: Hinstance) -> Self {
        self.instance = instance;
        self
    }
}

// ── Native conversions ────────────────────────────────────────────────────────

#[cfg(target_os = "windows")]
mod native {
    use super::*;
    use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, LRESULT, WPARAM};

    impl From<HWND> for Hwnd {
        fn from(hwnd: HWND) -> Self {
            Hwnd(hwnd.0)
        }
    }

    impl From<Hwnd> for HWND {
        fn from(hwnd: Hwnd) -> Self {
            HWND(hwnd.0)
        }
    }

    impl From<WPARAM> for WParam {
        fn from(wparam: WPARAM) -> Self {
            WParam(wparam.0)
        }
    }

    impl From<WParam> for WPARAM {
        fn from(wparam: WParam) -> Self {
            WPARAM(wparam.0)
        }
    }

    impl From<LPARAM> for LParam {
        fn from(lparam: LPARAM) -> Self {
            LParam(lparam.0)
        }
    }

    impl From<LParam> for LPARAM {
        fn from(lparam: LParam) -> Self {
            LPARAM(lparam.0)
        }
    }

    impl From<LRESULT> for LResult {
        fn from(lresult: LRESULT) -> Self {
            LResult(lresult.0)
        }
    }

    impl From<LResult> for LRESULT {
        fn from(lresult: LResult) -> Self {
            LRESULT(lresult.0)
        }
    }

    impl From<HINSTANCE> for Hinstance {
        fn from(instance: HINSTANCE) -> Self {
            Hinstance(instance.0)
        }
    }

    impl From<Hinstance> for HINSTANCE {
        fn from(instance: Hinstance) -> Self {
            HINSTANCE(instance.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_helpers_split_and_join() {
        assert_eq!(loword(0x1234_5678), 0x5678);
        assert_eq!(hiword(0x1234_5678), 0x1234);
        assert_eq!(lobyte(0xABCD), 0xCD);
        assert_eq!(make_long(0x5678, 0x1234), 0x1234_5678);
    }

    #[test]
    fn hwnd_raw_round_trip_and_null() {
        let hwnd = Hwnd::from_raw(0x42);
        assert_eq!(hwnd.as_raw(), 0x42);
        assert!(!hwnd.is_null());
        assert!(Hwnd::default().is_null());
    }

    #[test]
    fn window_config_builder_sets_fields() {
        let config = WindowConfig::new("TypedWndTest")
            .title("Main")
            .style(0x10CF_0000)
            .position(10, 20)
            .size(300, 200)
            .parent(Hwnd::from_raw(7))
            .control_id(1001);

        assert_eq!(config.class_name, "TypedWndTest");
        assert_eq!(config.title, "Main");
        assert_eq!(config.style, 0x10CF_0000);
        assert_eq!((config.x, config.y), (10, 20));
        assert_eq!((config.width, config.height), (300, 200));
        assert_eq!(config.parent, Some(Hwnd::from_raw(7)));
        assert_eq!(config.menu_or_id, 1001);
    }

    #[test]
    fn window_config_menu_stores_the_handle() {
        let menu = Hmenu(0x7A0 as *mut c_void);

        let config = WindowConfig::new("TypedWndTest").menu(menu);

        assert_eq!(config.menu_or_id, 0x7A0);
        assert_eq!(Hmenu(config.menu_or_id as *mut c_void), menu);
    }

    #[test]
    fn rect_dimensions() {
        let rect = Rect {
            left: 5,
            top: 10,
            right: 105,
            bottom: 60,
        };
        assert_eq!(rect.width(), 100);
        assert_eq!(rect.height(), 50);
    }
}
