/*
 * The production `Platform`: thin wrappers over the Win32 calls the
 * dispatchers need.
 *
 * The dispatcher callbacks are declared with this crate's `#[repr(transparent)]`
 * handle and word types, so they are converted to the native callback types
 * with a transmute rather than wrapped; the OS calls them directly.
 */
use crate::error::{PlatformError, Result as PlatformResult};
use crate::params::MessageParams;
use crate::platform::{DialogProc, Platform, SubclassProc, WindowProc};
use crate::types::{Hinstance, Hwnd, LParam, LResult, QueuedMessage, WParam, WindowConfig};

use windows::Win32::{
    Foundation::{GetLastError, HINSTANCE, HWND, LPARAM, LRESULT, WIN32_ERROR, WPARAM},
    Graphics::Gdi::{COLOR_WINDOW, HBRUSH},
    System::LibraryLoader::GetModuleHandleW,
    UI::Shell::{DefSubclassProc, RemoveWindowSubclass, SetWindowSubclass},
    UI::WindowsAndMessaging::{
        CS_HREDRAW, CS_VREDRAW, CreateWindowExW, DLGTEMPLATE, DefWindowProcW,
        DestroyWindow, DialogBoxIndirectParamW, DispatchMessageW, GetMessageW, HMENU, IDC_ARROW,
        LoadCursorW, MSG, PostQuitMessage, RegisterClassExW, TranslateMessage, WINDOW_EX_STYLE,
        WINDOW_STYLE, WNDCLASSEXW,
    },
};
use windows::core::{HSTRING, PCWSTR};

use std::cell::Cell;
use std::ffi::c_void;

type NativeWindowProc = unsafe extern "system" fn(HWND, u32, WPARAM, LPARAM) -> LRESULT;
type NativeDialogProc = unsafe extern "system" fn(HWND, u32, WPARAM, LPARAM) -> isize;
type NativeSubclassProc =
    unsafe extern "system" fn(HWND, u32, WPARAM, LPARAM, usize, usize) -> LRESULT;

// SAFETY (all three): every parameter and the return value are
// `#[repr(transparent)]` over the native type, so the signatures share an ABI.
fn native_window_proc(proc: WindowProc) -> NativeWindowProc {
    unsafe { std::mem::transmute::<WindowProc, NativeWindowProc>(proc) }
}

fn native_dialog_proc(proc: DialogProc) -> NativeDialogProc {
    unsafe { std::mem::transmute::<DialogProc, NativeDialogProc>(proc) }
}

fn native_subclass_proc(proc: SubclassProc) -> NativeSubclassProc {
    unsafe { std::mem::transmute::<SubclassProc, NativeSubclassProc>(proc) }
}

fn last_error(function: &'static str) -> PlatformError {
    let code = unsafe { GetLastError() };
    PlatformError::OsCallFailed {
        function,
        code: code.0,
    }
}

fn os_call_failed(function: &'static str, error: &windows::core::Error) -> PlatformError {
    PlatformError::OsCallFailed {
        function,
        code: WIN32_ERROR::from_error(error).map_or(error.code().0 as u32, |e| e.0),
    }
}

/// A null instance means "this module".
fn module_instance(instance: Hinstance) -> PlatformResult<HINSTANCE> {
    if !instance.is_null() {
        return Ok(instance.into());
    }
    let module = unsafe { GetModuleHandleW(PCWSTR::null()) }
        .map_err(|e| os_call_failed("GetModuleHandleW", &e))?;
    Ok(module.into())
}

thread_local! {
    // Full record of the last retrieved message; `QueuedMessage` carries only
    // the routing fields.
    static LAST_MESSAGE: Cell<MSG> = Cell::new(MSG::default());
}

pub struct Win32;

impl Platform for Win32 {
    fn register_class(
        class_name: &str,
        instance: Hinstance,
        proc: WindowProc,
    ) -> PlatformResult<()> {
        let class_name = HSTRING::from(class_name);
        let cursor = unsafe { LoadCursorW(None, IDC_ARROW) }
            .map_err(|e| os_call_failed("LoadCursorW", &e))?;
        let wc = WNDCLASSEXW {
            cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(native_window_proc(proc)),
            hInstance: module_instance(instance)?,
            hCursor: cursor,
            hbrBackground: HBRUSH((COLOR_WINDOW.0 + 1) as *mut c_void),
            lpszClassName: PCWSTR(class_name.as_ptr()),
            ..Default::default()
        };

        if unsafe { RegisterClassExW(&wc) } == 0 {
            let error = last_error("RegisterClassExW");
            log::error!("Platform: {error}");
            return Err(error);
        }
        Ok(())
    }

    fn create_window(config: &WindowConfig, create_param: *mut c_void) -> PlatformResult<Hwnd> {
        let class_name = HSTRING::from(config.class_name.as_str());
        let title = HSTRING::from(config.title.as_str());
        let menu = (config.menu_or_id != 0).then(|| HMENU(config.menu_or_id as *mut c_void));
        let hwnd = unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE(config.ex_style),
                &class_name,
                &title,
                WINDOW_STYLE(config.style),
                config.x,
                config.y,
                config.width,
                config.height,
                config.parent.map(HWND::from),
                menu,
                Some(module_instance(config.instance)?),
                Some(create_param.cast_const()),
            )
        }
        .map_err(|e| os_call_failed("CreateWindowExW", &e))?;
        Ok(hwnd.into())
    }

    fn destroy_window(hwnd: Hwnd) -> PlatformResult<()> {
        unsafe { DestroyWindow(hwnd.into()) }.map_err(|e| os_call_failed("DestroyWindow", &e))
    }

    unsafe fn dialog_box_indirect_param(
        instance: Hinstance,
        template: *const c_void,
        parent: Hwnd,
        dialog_proc: DialogProc,
        init_param: LParam,
    ) -> PlatformResult<isize> {
        let result = unsafe {
            DialogBoxIndirectParamW(
                Some(module_instance(instance)?),
                template.cast::<DLGTEMPLATE>(),
                (!parent.is_null()).then(|| parent.into()),
                Some(native_dialog_proc(dialog_proc)),
                init_param.into(),
            )
        };
        if result == -1 {
            return Err(last_error("DialogBoxIndirectParamW"));
        }
        Ok(result)
    }

    fn def_window_proc(hwnd: Hwnd, msg: u32, wparam: WParam, lparam: LParam) -> LResult {
        unsafe { DefWindowProcW(hwnd.into(), msg, wparam.into(), lparam.into()) }.into()
    }

    fn set_window_subclass(
        hwnd: Hwnd,
        proc: SubclassProc,
        id: usize,
        ref_data: usize,
    ) -> PlatformResult<()> {
        let installed =
            unsafe { SetWindowSubclass(hwnd.into(), Some(native_subclass_proc(proc)), id, ref_data) };
        if !installed.as_bool() {
            return Err(last_error("SetWindowSubclass"));
        }
        Ok(())
    }

    fn remove_window_subclass(hwnd: Hwnd, proc: SubclassProc, id: usize) -> PlatformResult<()> {
        let removed =
            unsafe { RemoveWindowSubclass(hwnd.into(), Some(native_subclass_proc(proc)), id) };
        if !removed.as_bool() {
            return Err(last_error("RemoveWindowSubclass"));
        }
        Ok(())
    }

    fn def_subclass_proc(hwnd: Hwnd, msg: u32, wparam: WParam, lparam: LParam) -> LResult {
        unsafe { DefSubclassProc(hwnd.into(), msg, wparam.into(), lparam.into()) }.into()
    }

    fn get_message(message: &mut QueuedMessage) -> PlatformResult<bool> {
        let mut msg = MSG::default();
        let status = unsafe { GetMessageW(&mut msg, None, 0, 0) };
        if status.0 == -1 {
            return Err(last_error("GetMessageW"));
        }
        LAST_MESSAGE.set(msg);
        *message = QueuedMessage {
            hwnd: msg.hwnd.into(),
            message: msg.message,
            params: MessageParams {
                wparam: msg.wParam.into(),
                lparam: msg.lParam.into(),
            },
        };
        Ok(status.0 != 0)
    }

    fn translate_and_dispatch(message: &QueuedMessage) {
        let msg = MSG {
            hwnd: message.hwnd.into(),
            message: message.message,
            wParam: message.params.wparam.into(),
            lParam: message.params.lparam.into(),
            ..LAST_MESSAGE.get()
        };
        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }

    fn post_quit(exit_code: i32) {
        unsafe { PostQuitMessage(exit_code) };
    }
}
