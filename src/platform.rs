/*
 * The OS seam. Everything the attachment manager and event loop need from the
 * windowing system goes through `Platform`. The functions are associated (no
 * receiver) because the OS re-enters the window procedures without any
 * context but the window handle; the implementation is selected by the type
 * parameter of `Dispatcher<P>` / `SubclassDispatcher<P>`.
 *
 * `Win32` in the `win32` module is the production implementation.
 */
use crate::error::Result as PlatformResult;
use crate::types::{Hinstance, Hwnd, LParam, LResult, QueuedMessage, WParam, WindowConfig};

use std::ffi::c_void;

/// `WNDPROC`.
pub type WindowProc = unsafe extern "system" fn(Hwnd, u32, WParam, LParam) -> LResult;

/// `DLGPROC`. The return value is a `BOOL` in a machine word.
pub type DialogProc = unsafe extern "system" fn(Hwnd, u32, WParam, LParam) -> isize;

/// `SUBCLASSPROC`: the message, then the layer id and its reference data.
pub type SubclassProc =
    unsafe extern "system" fn(Hwnd, u32, WParam, LParam, usize, usize) -> LResult;

pub trait Platform: 'static {
    /// Registers a window class whose procedure is `proc`.
    fn register_class(class_name: &str, instance: Hinstance, proc: WindowProc)
    -> PlatformResult<()>;

    /// Creates a window. `create_param` arrives as `lpCreateParams` of the
    /// creation structure during `WM_NCCREATE`/`WM_CREATE`.
    fn create_window(config: &WindowConfig, create_param: *mut c_void) -> PlatformResult<Hwnd>;

    /// Destroys a window; `WM_DESTROY` and `WM_NCDESTROY` are delivered
    /// before this returns.
    fn destroy_window(hwnd: Hwnd) -> PlatformResult<()>;

    /// Runs a modal dialog from an in-memory template. `init_param` arrives
    /// as the LPARAM of `WM_INITDIALOG`. Returns the value passed to
    /// `EndDialog`.
    ///
    /// # Safety
    ///
    /// `template` must point to a valid `DLGTEMPLATE` (or extended template)
    /// that stays alive for the duration of the call.
    unsafe fn dialog_box_indirect_param(
        instance: Hinstance,
        template: *const c_void,
        parent: Hwnd,
        dialog_proc: DialogProc,
        init_param: LParam,
    ) -> PlatformResult<isize>;

    fn def_window_proc(hwnd: Hwnd, msg: u32, wparam: WParam, lparam: LParam) -> LResult;

    /// Installs a subclass layer on top of the window's current chain.
    fn set_window_subclass(
        hwnd: Hwnd,
        proc: SubclassProc,
        id: usize,
        ref_data: usize,
    ) -> PlatformResult<()>;

    /// Removes the layer identified by (`proc`, `id`).
    fn remove_window_subclass(hwnd: Hwnd, proc: SubclassProc, id: usize) -> PlatformResult<()>;

    /// Forwards to the next layer below the one currently executing.
    fn def_subclass_proc(hwnd: Hwnd, msg: u32, wparam: WParam, lparam: LParam) -> LResult;

    /// Blocks for the next queued message. `Ok(false)` means `WM_QUIT` was
    /// retrieved and `message` holds it.
    fn get_message(message: &mut QueuedMessage) -> PlatformResult<bool>;

    fn translate_and_dispatch(message: &QueuedMessage);

    fn post_quit(exit_code: i32);
}
