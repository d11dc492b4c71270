/*
 * An in-process stand-in for the windowing system, used by the unit tests.
 *
 * Each test thread gets its own "desktop": window handles, registered
 * classes, per-window subclass chains, a message queue and a few switches to
 * make the next OS call fail. Messages are delivered synchronously through the
 * same procedures the real OS would call, including `WM_NCCREATE`/`WM_CREATE`
 * during creation and `WM_DESTROY`/`WM_NCDESTROY` during destruction.
 *
 * Subclass chains behave like comctl32's: the last installed layer runs
 * first, `def_subclass_proc` continues with the layer below the one currently
 * executing and the bottom of the chain is the window's class procedure.
 * Layers removed while a message is in flight do not disturb that message.
 */
use crate::error::{PlatformError, Result as PlatformResult};
use crate::messages::{
    FALSE, TRUE, WM_CREATE, WM_DESTROY, WM_INITDIALOG, WM_NCCREATE, WM_NCDESTROY, WM_QUIT,
};
use crate::params::{CreateStruct, MessageParams};
use crate::platform::{DialogProc, Platform, SubclassProc, WindowProc};
use crate::types::{
    Hinstance, Hmenu, Hwnd, LParam, LResult, QueuedMessage, WParam, WindowConfig,
};

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::ffi::c_void;

/// What the default window procedure returns for most messages.
pub const DEFAULT_RESULT: isize = 0xDEF;
/// What the class procedure of a foreign (non-dispatcher) class returns.
pub const FOREIGN_RESULT: isize = 0xF0E;

const ERROR_INVALID_WINDOW_HANDLE: u32 = 1400;
const ERROR_CLASS_ALREADY_EXISTS: u32 = 1410;
const ERROR_CLASS_DOES_NOT_EXIST: u32 = 1411;

#[derive(Clone, Copy)]
enum ClassProc {
    Window(WindowProc),
    Foreign,
}

#[derive(Clone, Copy)]
enum BaseProc {
    Window(WindowProc),
    Dialog(DialogProc),
    Foreign,
}

#[derive(Clone, Copy)]
struct Layer {
    proc: SubclassProc,
    id: usize,
    ref_data: usize,
}

struct FakeWindow {
    base: BaseProc,
    // Bottom to top.
    layers: Vec<Layer>,
}

// One executing subclass layer: what lies below it for this delivery.
struct Frame {
    hwnd: Hwnd,
    below: Vec<Layer>,
    base: BaseProc,
}

enum Queued {
    Message(QueuedMessage),
    Failure(u32),
}

#[derive(Default)]
struct Desktop {
    next_hwnd: usize,
    classes: HashMap<String, ClassProc>,
    windows: HashMap<Hwnd, FakeWindow>,
    frames: Vec<Frame>,
    queue: VecDeque<Queued>,
    quit: Option<i32>,
    default_calls: Vec<(Hwnd, u32, MessageParams)>,
    removed_layers: Vec<(Hwnd, usize)>,
    dialog_script: Option<(Vec<(u32, MessageParams)>, isize)>,
    dialog_results: Vec<isize>,
    set_subclass_failure: Option<u32>,
    remove_subclass_failure: Option<u32>,
}

impl Desktop {
    fn alloc(&mut self, base: BaseProc) -> Hwnd {
        self.next_hwnd += 1;
        let hwnd = Hwnd::from_raw(self.next_hwnd * 0x10);
        self.windows.insert(
            hwnd,
            FakeWindow {
                base,
                layers: Vec::new(),
            },
        );
        hwnd
    }
}

thread_local! {
    static DESKTOP: RefCell<Desktop> = RefCell::new(Desktop::default());
}

fn with<R>(f: impl FnOnce(&mut Desktop) -> R) -> R {
    DESKTOP.with(|desktop| f(&mut desktop.borrow_mut()))
}

fn os_error(function: &'static str, code: u32) -> PlatformError {
    PlatformError::OsCallFailed { function, code }
}

// ── Delivery ──────────────────────────────────────────────────────────────────

fn deliver(hwnd: Hwnd, msg: u32, wparam: WParam, lparam: LParam) -> LResult {
    let target = with(|d| {
        d.windows
            .get(&hwnd)
            .map(|window| (window.layers.clone(), window.base))
    });
    match target {
        Some((layers, base)) => call_chain(hwnd, layers, base, msg, wparam, lparam),
        None => LResult(0),
    }
}

fn call_chain(
    hwnd: Hwnd,
    mut layers: Vec<Layer>,
    base: BaseProc,
    msg: u32,
    wparam: WParam,
    lparam: LParam,
) -> LResult {
    let Some(top) = layers.pop() else {
        return call_base(hwnd, base, msg, wparam, lparam);
    };
    with(|d| {
        d.frames.push(Frame {
            hwnd,
            below: layers,
            base,
        })
    });
    // SAFETY: layers are only installed through `set_window_subclass`, whose
    // callers promise a procedure valid for the window.
    let result = unsafe { (top.proc)(hwnd, msg, wparam, lparam, top.id, top.ref_data) };
    with(|d| d.frames.pop());
    result
}

fn call_base(hwnd: Hwnd, base: BaseProc, msg: u32, wparam: WParam, lparam: LParam) -> LResult {
    match base {
        // SAFETY: class procedures come from `register_class`.
        BaseProc::Window(proc) => unsafe { proc(hwnd, msg, wparam, lparam) },
        BaseProc::Dialog(proc) => {
            // SAFETY: dialog procedures come from `dialog_box_indirect_param`.
            let handled = unsafe { proc(hwnd, msg, wparam, lparam) };
            if msg != WM_DESTROY && msg != WM_NCDESTROY {
                with(|d| d.dialog_results.push(handled));
            }
            if handled != FALSE {
                LResult(handled)
            } else {
                FakePlatform::def_window_proc(hwnd, msg, wparam, lparam)
            }
        }
        BaseProc::Foreign => LResult(FOREIGN_RESULT),
    }
}

/// Thread-local fake OS; see the module documentation.
pub struct FakePlatform;

impl FakePlatform {
    /// Registers a class whose procedure answers every message with
    /// `FOREIGN_RESULT`, standing in for system control classes.
    pub fn register_foreign_class(class_name: &str) {
        with(|d| {
            d.classes.insert(class_name.to_owned(), ClassProc::Foreign);
        });
    }

    /// A window of a foreign class, created without any creation messages.
    pub fn spawn_foreign_window() -> Hwnd {
        with(|d| d.alloc(BaseProc::Foreign))
    }

    /// Synchronous delivery through the window's full chain.
    pub fn send_message(hwnd: Hwnd, msg: u32, wparam: usize, lparam: isize) -> LResult {
        deliver(hwnd, msg, WParam(wparam), LParam(lparam))
    }

    /// Appends a message to the queue read by `get_message`.
    pub fn post(hwnd: Hwnd, msg: u32, params: MessageParams) {
        with(|d| {
            d.queue.push_back(Queued::Message(QueuedMessage {
                hwnd,
                message: msg,
                params,
            }))
        });
    }

    pub fn destroy(hwnd: Hwnd) {
        <Self as Platform>::destroy_window(hwnd).expect("window exists");
    }

    /// Messages the next modal dialog receives after `WM_INITDIALOG`, and the
    /// value it ends with.
    pub fn script_dialog(messages: Vec<(u32, MessageParams)>, result: isize) {
        with(|d| d.dialog_script = Some((messages, result)));
    }

    /// Raw dialog procedure results, excluding destruction messages.
    pub fn dialog_results() -> Vec<isize> {
        with(|d| d.dialog_results.clone())
    }

    pub fn default_calls() -> Vec<(Hwnd, u32, MessageParams)> {
        with(|d| d.default_calls.clone())
    }

    /// (window, layer id) of every removed subclass layer, in order.
    pub fn removed_layers() -> Vec<(Hwnd, usize)> {
        with(|d| d.removed_layers.clone())
    }

    pub fn layer_count(hwnd: Hwnd) -> usize {
        with(|d| d.windows.get(&hwnd).map_or(0, |window| window.layers.len()))
    }

    pub fn window_exists(hwnd: Hwnd) -> bool {
        with(|d| d.windows.contains_key(&hwnd))
    }

    pub fn window_count() -> usize {
        with(|d| d.windows.len())
    }

    pub fn fail_next_set_subclass(code: u32) {
        with(|d| d.set_subclass_failure = Some(code));
    }

    pub fn fail_next_remove_subclass(code: u32) {
        with(|d| d.remove_subclass_failure = Some(code));
    }

    /// Queues a retrieval failure behind the messages already posted.
    pub fn fail_get_message(code: u32) {
        with(|d| d.queue.push_back(Queued::Failure(code)));
    }
}

impl Platform for FakePlatform {
    fn register_class(
        class_name: &str,
        _instance: Hinstance,
        proc: WindowProc,
    ) -> PlatformResult<()> {
        with(|d| {
            if d.classes.contains_key(class_name) {
                return Err(os_error("RegisterClassExW", ERROR_CLASS_ALREADY_EXISTS));
            }
            d.classes
                .insert(class_name.to_owned(), ClassProc::Window(proc));
            Ok(())
        })
    }

    fn create_window(config: &WindowConfig, create_param: *mut c_void) -> PlatformResult<Hwnd> {
        let class = with(|d| d.classes.get(&config.class_name).copied())
            .ok_or_else(|| os_error("CreateWindowExW", ERROR_CLASS_DOES_NOT_EXIST))?;
        let base = match class {
            ClassProc::Window(proc) => BaseProc::Window(proc),
            ClassProc::Foreign => BaseProc::Foreign,
        };
        let hwnd = with(|d| d.alloc(base));

        let mut create_struct = CreateStruct {
            create_params: create_param,
            instance: config.instance,
            menu: Hmenu(config.menu_or_id as *mut c_void),
            parent: config.parent.unwrap_or_default(),
            cy: config.height,
            cx: config.width,
            y: config.y,
            x: config.x,
            style: config.style as i32,
            ex_style: config.ex_style,
            ..Default::default()
        };
        let lparam = LParam::from_ptr(&raw mut create_struct);

        if deliver(hwnd, WM_NCCREATE, WParam(0), lparam) == LResult(FALSE) {
            deliver(hwnd, WM_NCDESTROY, WParam(0), LParam(0));
            with(|d| d.windows.remove(&hwnd));
            return Err(os_error("CreateWindowExW", 0));
        }
        if deliver(hwnd, WM_CREATE, WParam(0), lparam) == LResult(-1) {
            Self::destroy_window(hwnd)?;
            return Err(os_error("CreateWindowExW", 0));
        }
        Ok(hwnd)
    }

    fn destroy_window(hwnd: Hwnd) -> PlatformResult<()> {
        if !Self::window_exists(hwnd) {
            return Err(os_error("DestroyWindow", ERROR_INVALID_WINDOW_HANDLE));
        }
        deliver(hwnd, WM_DESTROY, WParam(0), LParam(0));
        deliver(hwnd, WM_NCDESTROY, WParam(0), LParam(0));
        with(|d| d.windows.remove(&hwnd));
        Ok(())
    }

    unsafe fn dialog_box_indirect_param(
        _instance: Hinstance,
        _template: *const c_void,
        _parent: Hwnd,
        dialog_proc: DialogProc,
        init_param: LParam,
    ) -> PlatformResult<isize> {
        let hwnd = with(|d| d.alloc(BaseProc::Dialog(dialog_proc)));
        let (script, result) = with(|d| d.dialog_script.take()).unwrap_or_default();

        deliver(hwnd, WM_INITDIALOG, WParam(0), init_param);
        for (msg, params) in script {
            deliver(hwnd, msg, params.wparam, params.lparam);
        }
        Self::destroy_window(hwnd)?;
        Ok(result)
    }

    fn def_window_proc(hwnd: Hwnd, msg: u32, wparam: WParam, lparam: LParam) -> LResult {
        with(|d| {
            d.default_calls
                .push((hwnd, msg, MessageParams { wparam, lparam }))
        });
        match msg {
            WM_NCCREATE => LResult(TRUE),
            _ => LResult(DEFAULT_RESULT),
        }
    }

    fn set_window_subclass(
        hwnd: Hwnd,
        proc: SubclassProc,
        id: usize,
        ref_data: usize,
    ) -> PlatformResult<()> {
        with(|d| {
            if let Some(code) = d.set_subclass_failure.take() {
                return Err(os_error("SetWindowSubclass", code));
            }
            let window = d
                .windows
                .get_mut(&hwnd)
                .ok_or_else(|| os_error("SetWindowSubclass", ERROR_INVALID_WINDOW_HANDLE))?;
            match window
                .layers
                .iter_mut()
                .find(|layer| layer.id == id && std::ptr::fn_addr_eq(layer.proc, proc))
            {
                Some(layer) => layer.ref_data = ref_data,
                None => window.layers.push(Layer { proc, id, ref_data }),
            }
            Ok(())
        })
    }

    fn remove_window_subclass(hwnd: Hwnd, proc: SubclassProc, id: usize) -> PlatformResult<()> {
        with(|d| {
            if let Some(code) = d.remove_subclass_failure.take() {
                return Err(os_error("RemoveWindowSubclass", code));
            }
            let window = d
                .windows
                .get_mut(&hwnd)
                .ok_or_else(|| os_error("RemoveWindowSubclass", ERROR_INVALID_WINDOW_HANDLE))?;
            let position = window
                .layers
                .iter()
                .position(|layer| layer.id == id && std::ptr::fn_addr_eq(layer.proc, proc))
                .ok_or_else(|| os_error("RemoveWindowSubclass", 0))?;
            window.layers.remove(position);
            d.removed_layers.push((hwnd, id));
            Ok(())
        })
    }

    fn def_subclass_proc(hwnd: Hwnd, msg: u32, wparam: WParam, lparam: LParam) -> LResult {
        let next = with(|d| {
            d.frames
                .iter()
                .rev()
                .find(|frame| frame.hwnd == hwnd)
                .map(|frame| (frame.below.clone(), frame.base))
        });
        match next {
            Some((layers, base)) => call_chain(hwnd, layers, base, msg, wparam, lparam),
            None => LResult(0),
        }
    }

    fn get_message(message: &mut QueuedMessage) -> PlatformResult<bool> {
        with(|d| match d.queue.pop_front() {
            Some(Queued::Message(next)) => {
                *message = next;
                Ok(next.message != WM_QUIT)
            }
            Some(Queued::Failure(code)) => Err(os_error("GetMessageW", code)),
            None => match d.quit.take() {
                Some(exit_code) => {
                    *message = QueuedMessage {
                        hwnd: Hwnd::NULL,
                        message: WM_QUIT,
                        params: MessageParams::new(exit_code as usize, 0),
                    };
                    Ok(false)
                }
                None => Err(PlatformError::OperationFailed(
                    "message queue is empty and no quit was posted".to_owned(),
                )),
            },
        })
    }

    fn translate_and_dispatch(message: &QueuedMessage) {
        deliver(
            message.hwnd,
            message.message,
            message.params.wparam,
            message.params.lparam,
        );
    }

    fn post_quit(exit_code: i32) {
        with(|d| d.quit = Some(exit_code));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe extern "system" fn counting_layer(
        hwnd: Hwnd,
        msg: u32,
        wparam: WParam,
        lparam: LParam,
        id: usize,
        _ref_data: usize,
    ) -> LResult {
        let below = FakePlatform::def_subclass_proc(hwnd, msg, wparam, lparam);
        LResult(below.0 + id as isize)
    }

    #[test]
    fn layers_run_top_down_and_forward_to_the_class() {
        let hwnd = FakePlatform::spawn_foreign_window();
        FakePlatform::set_window_subclass(hwnd, counting_layer, 1, 0).expect("install");
        FakePlatform::set_window_subclass(hwnd, counting_layer, 10, 0).expect("install");

        let result = FakePlatform::send_message(hwnd, 0x400, 0, 0);

        assert_eq!(result, LResult(FOREIGN_RESULT + 11));
    }

    #[test]
    fn reinstalling_a_layer_does_not_duplicate_it() {
        let hwnd = FakePlatform::spawn_foreign_window();
        FakePlatform::set_window_subclass(hwnd, counting_layer, 1, 0).expect("install");
        FakePlatform::set_window_subclass(hwnd, counting_layer, 1, 5).expect("reinstall");

        assert_eq!(FakePlatform::layer_count(hwnd), 1);
    }

    #[test]
    fn removing_an_unknown_layer_fails() {
        let hwnd = FakePlatform::spawn_foreign_window();

        let result = FakePlatform::remove_window_subclass(hwnd, counting_layer, 3);

        assert!(matches!(
            result,
            Err(PlatformError::OsCallFailed {
                function: "RemoveWindowSubclass",
                ..
            })
        ));
    }

    #[test]
    fn empty_queue_with_pending_quit_yields_quit() {
        FakePlatform::post_quit(-2);
        let mut message = QueuedMessage::default();

        assert_eq!(FakePlatform::get_message(&mut message), Ok(false));
        assert_eq!(message.message, WM_QUIT);
        assert_eq!(message.params.wparam.0 as i32, -2);
    }
}
