/*
 * Attachment and lifecycle management for windows whose messages are routed
 * to a `MessageHandler`.
 *
 * A per-thread table maps each attached window handle to its record (the
 * registry it dispatches to, how it was attached and, for subclassed windows,
 * the layer id). Windows get into the table in one of three ways:
 *
 * - creation-time injection: `create_window` passes a stack shim through the
 *   creation parameter. `window_proc` picks it up at `WM_NCCREATE`, restores
 *   the caller's own creation parameter and inserts the record before any
 *   handler runs, so the handler sees `WM_NCCREATE` itself.
 * - dialog-time injection: `dialog_box_indirect_param` does the same through
 *   the `WM_INITDIALOG` init parameter.
 * - subclassing: `create_subclass_window` creates a window of any class and
 *   layers `subclass_proc` on top of its chain.
 *
 * Every record is removed at `WM_NCDESTROY` after the handler has seen it.
 * The table holds a strong reference to the registry, so a registry is never
 * dropped while a window can still deliver to it.
 *
 * The table is thread-local; windows belong to the thread that created them
 * and so do their records.
 */
use crate::error::{PlatformError, Result as PlatformResult};
use crate::handler::MessageHandler;
use crate::messages::{FALSE, WM_INITDIALOG, WM_NCCREATE, WM_NCDESTROY};
use crate::params::{CreateParams, MessageParams, MessageView, QuitParams};
use crate::platform::{DialogProc, Platform, SubclassProc, WindowProc};
use crate::types::{Hinstance, Hwnd, LParam, LResult, QueuedMessage, WParam, WindowConfig};

use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::c_void;
use std::marker::PhantomData;
use std::rc::Rc;

/// How a window came to be attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Window,
    Dialog,
    Subclass,
}

struct AttachmentRecord {
    handler: Rc<MessageHandler>,
    kind: AttachmentKind,
    subclass_id: Option<usize>,
}

thread_local! {
    static RECORDS: RefCell<HashMap<Hwnd, AttachmentRecord>> = RefCell::new(HashMap::new());
}

// Travels through `lpCreateParams`; lives on the stack of `create_window`.
struct CreateShim {
    handler: Rc<MessageHandler>,
    user_param: *mut c_void,
}

// Travels through the `WM_INITDIALOG` LPARAM.
struct DialogShim {
    handler: Rc<MessageHandler>,
    init_param: LParam,
}

// ── Record table ──────────────────────────────────────────────────────────────

fn attach(hwnd: Hwnd, record: AttachmentRecord) -> PlatformResult<()> {
    let kind = record.kind;
    RECORDS.with(|records| {
        let mut records = records.borrow_mut();
        if records.contains_key(&hwnd) {
            return Err(PlatformError::AlreadyAttached(hwnd));
        }
        records.insert(hwnd, record);
        Ok(())
    })?;
    log::debug!("Dispatcher: attached {:#x} ({kind:?})", hwnd.as_raw());
    Ok(())
}

fn detach(hwnd: Hwnd) -> Option<AttachmentRecord> {
    let record = RECORDS.with(|records| records.borrow_mut().remove(&hwnd));
    if record.is_some() {
        log::debug!("Dispatcher: detached {:#x}", hwnd.as_raw());
    }
    record
}

fn handler_for(hwnd: Hwnd) -> Option<Rc<MessageHandler>> {
    RECORDS.with(|records| {
        records
            .borrow()
            .get(&hwnd)
            .map(|record| Rc::clone(&record.handler))
    })
}

/// Routes messages of attached windows to their registries, using `P` for
/// every OS interaction.
pub struct Dispatcher<P: Platform> {
    _platform: PhantomData<P>,
}

impl<P: Platform> Dispatcher<P> {
    // ── Attachment entry points ───────────────────────────────────────────────

    /// Registers a window class routed through `window_proc`. Windows of this
    /// class should be created with `create_window`; one created without the
    /// shim is left unattached.
    pub fn register_window_class(class_name: &str, instance: Hinstance) -> PlatformResult<()> {
        P::register_class(class_name, instance, Self::window_proc as WindowProc)?;
        log::debug!("Dispatcher: registered window class '{class_name}'");
        Ok(())
    }

    /// Creates a window of a class registered with `register_window_class`
    /// and attaches it to `handler` from `WM_NCCREATE` on. `user_param` is
    /// what the window's handlers see as the creation parameter.
    pub fn create_window(
        handler: &Rc<MessageHandler>,
        config: &WindowConfig,
        user_param: *mut c_void,
    ) -> PlatformResult<Hwnd> {
        let shim = CreateShim {
            handler: Rc::clone(handler),
            user_param,
        };
        P::create_window(config, (&raw const shim).cast_mut().cast())
            .inspect_err(|e| log::warn!("Dispatcher: creating '{}' failed: {e}", config.class_name))
    }

    /// Runs a modal dialog attached to `handler` from `WM_INITDIALOG` on.
    /// Handlers see `init_param` as the `WM_INITDIALOG` init parameter.
    ///
    /// # Safety
    ///
    /// `template` must point to a valid in-memory dialog template that
    /// outlives the call.
    pub unsafe fn dialog_box_indirect_param(
        handler: &Rc<MessageHandler>,
        instance: Hinstance,
        template: *const c_void,
        parent: Hwnd,
        init_param: LParam,
    ) -> PlatformResult<isize> {
        let shim = DialogShim {
            handler: Rc::clone(handler),
            init_param,
        };
        // SAFETY: template validity is forwarded to the caller; the shim
        // outlives the modal loop.
        unsafe {
            P::dialog_box_indirect_param(
                instance,
                template,
                parent,
                Self::dialog_proc as DialogProc,
                LParam::from_ptr(&raw const shim),
            )
        }
    }

    /// Creates a window of any class and subclasses it so its messages reach
    /// `handler` first. Messages no handler claims continue down the
    /// window's own chain.
    pub fn create_subclass_window(
        handler: &Rc<MessageHandler>,
        config: &WindowConfig,
        user_param: *mut c_void,
        subclass_id: usize,
    ) -> PlatformResult<Hwnd> {
        let hwnd = P::create_window(config, user_param)?;
        attach(
            hwnd,
            AttachmentRecord {
                handler: Rc::clone(handler),
                kind: AttachmentKind::Subclass,
                subclass_id: Some(subclass_id),
            },
        )?;

        if let Err(e) = P::set_window_subclass(hwnd, Self::subclass_proc as SubclassProc, subclass_id, 0) {
            log::error!("Dispatcher: subclassing {:#x} failed: {e}", hwnd.as_raw());
            detach(hwnd);
            if let Err(destroy_err) = P::destroy_window(hwnd) {
                log::warn!("Dispatcher: could not destroy {:#x}: {destroy_err}", hwnd.as_raw());
            }
            return Err(e);
        }
        Ok(hwnd)
    }

    // ── Introspection ─────────────────────────────────────────────────────────

    pub fn is_attached(hwnd: Hwnd) -> bool {
        RECORDS.with(|records| records.borrow().contains_key(&hwnd))
    }

    pub fn attachment_kind(hwnd: Hwnd) -> Option<AttachmentKind> {
        RECORDS.with(|records| records.borrow().get(&hwnd).map(|record| record.kind))
    }

    /// Attached windows on the calling thread.
    pub fn attached_count() -> usize {
        RECORDS.with(|records| records.borrow().len())
    }

    // ── Event loop ────────────────────────────────────────────────────────────

    /// Retrieves and dispatches messages until `WM_QUIT`, returning its exit
    /// code. A retrieval failure ends the loop with the error.
    pub fn run() -> PlatformResult<i32> {
        let mut message = QueuedMessage::default();
        loop {
            let more = P::get_message(&mut message)
                .inspect_err(|e| log::error!("Dispatcher: message retrieval failed: {e}"))?;
            if !more {
                let exit_code = QuitParams::from_params(&message.params).exit_code();
                log::debug!("Dispatcher: message loop finished with exit code {exit_code}");
                return Ok(exit_code);
            }
            P::translate_and_dispatch(&message);
        }
    }

    pub fn post_quit(exit_code: i32) {
        P::post_quit(exit_code);
    }

    // ── OS callbacks ──────────────────────────────────────────────────────────

    /// Window procedure of classes registered through this dispatcher.
    ///
    /// # Safety
    ///
    /// Called by the OS only. At `WM_NCCREATE`, a non-null creation parameter
    /// must be the shim placed by `create_window`.
    pub unsafe extern "system" fn window_proc(
        hwnd: Hwnd,
        msg: u32,
        wparam: WParam,
        lparam: LParam,
    ) -> LResult {
        let mut params = MessageParams { wparam, lparam };
        let result = match msg {
            // SAFETY: forwarded to the OS contract above.
            WM_NCCREATE => unsafe { Self::on_nccreate(hwnd, &mut params) },
            WM_NCDESTROY => {
                let result = Self::on_ncdestroy(hwnd, &mut params);
                let default = P::def_window_proc(hwnd, msg, params.wparam, params.lparam);
                return result.unwrap_or(default);
            }
            _ => handler_for(hwnd).and_then(|handler| handler.call_handler(hwnd, msg, &mut params)),
        };
        result.unwrap_or_else(|| P::def_window_proc(hwnd, msg, params.wparam, params.lparam))
    }

    /// Dialog procedure for `dialog_box_indirect_param`. Returns the
    /// handler's value, or FALSE when no handler claimed the message.
    ///
    /// # Safety
    ///
    /// Called by the OS only. At `WM_INITDIALOG`, a non-null LPARAM must be
    /// the shim placed by `dialog_box_indirect_param`.
    pub unsafe extern "system" fn dialog_proc(
        hwnd: Hwnd,
        msg: u32,
        wparam: WParam,
        lparam: LParam,
    ) -> isize {
        let mut params = MessageParams { wparam, lparam };
        let result = match msg {
            // SAFETY: forwarded to the OS contract above.
            WM_INITDIALOG => unsafe { Self::on_initdialog(hwnd, &mut params) },
            WM_NCDESTROY => Self::on_ncdestroy(hwnd, &mut params),
            _ => handler_for(hwnd).and_then(|handler| handler.call_handler(hwnd, msg, &mut params)),
        };
        result.map_or(FALSE, |r| r.0)
    }

    /// Subclass procedure installed by `create_subclass_window`.
    ///
    /// # Safety
    ///
    /// Called by the OS only, for windows subclassed by this dispatcher.
    pub unsafe extern "system" fn subclass_proc(
        hwnd: Hwnd,
        msg: u32,
        wparam: WParam,
        lparam: LParam,
        _subclass_id: usize,
        _ref_data: usize,
    ) -> LResult {
        let mut params = MessageParams { wparam, lparam };
        if msg == WM_NCDESTROY {
            // Inner layers and the class procedure still need to see it.
            let result = Self::on_ncdestroy(hwnd, &mut params);
            let next = P::def_subclass_proc(hwnd, msg, params.wparam, params.lparam);
            return result.unwrap_or(next);
        }
        handler_for(hwnd)
            .and_then(|handler| handler.call_handler(hwnd, msg, &mut params))
            .unwrap_or_else(|| P::def_subclass_proc(hwnd, msg, params.wparam, params.lparam))
    }

    // ── Lifecycle transitions ─────────────────────────────────────────────────

    unsafe fn on_nccreate(hwnd: Hwnd, params: &mut MessageParams) -> Option<LResult> {
        let create_struct = CreateParams::from_params(params).create_struct_ptr();
        if create_struct.is_null() {
            return None;
        }
        // SAFETY: the OS passes a live CREATESTRUCTW with WM_NCCREATE.
        let create_struct = unsafe { &mut *create_struct };
        let shim = create_struct.create_params.cast::<CreateShim>().cast_const();
        if shim.is_null() {
            log::debug!(
                "Dispatcher: {:#x} created without a handler, left unattached",
                hwnd.as_raw()
            );
            return None;
        }
        // SAFETY: a non-null creation parameter for this class is always the
        // shim on the stack of `create_window`, which is still running.
        let shim = unsafe { &*shim };
        create_struct.create_params = shim.user_param;

        let record = AttachmentRecord {
            handler: Rc::clone(&shim.handler),
            kind: AttachmentKind::Window,
            subclass_id: None,
        };
        if let Err(e) = attach(hwnd, record) {
            log::error!("Dispatcher: rejecting creation: {e}");
            return Some(LResult(FALSE));
        }

        let result = shim.handler.call_handler(hwnd, WM_NCCREATE, params);
        if result == Some(LResult(FALSE)) {
            log::debug!("Dispatcher: WM_NCCREATE handler rejected {:#x}", hwnd.as_raw());
            detach(hwnd);
        }
        result
    }

    unsafe fn on_initdialog(hwnd: Hwnd, params: &mut MessageParams) -> Option<LResult> {
        let shim = params.lparam.as_ptr::<DialogShim>().cast_const();
        if shim.is_null() {
            return None;
        }
        // SAFETY: the shim lives on the stack of `dialog_box_indirect_param`
        // for the whole modal loop.
        let shim = unsafe { &*shim };
        let record = AttachmentRecord {
            handler: Rc::clone(&shim.handler),
            kind: AttachmentKind::Dialog,
            subclass_id: None,
        };
        if let Err(e) = attach(hwnd, record) {
            log::error!("Dispatcher: dialog not attached: {e}");
            return None;
        }

        params.lparam = shim.init_param;
        shim.handler.call_handler(hwnd, WM_INITDIALOG, params)
    }

    /// Runs the handler for `WM_NCDESTROY`, then forgets the window and drops
    /// its subclass layer, if any. A window that is not attached (or already
    /// torn down) is left alone.
    fn on_ncdestroy(hwnd: Hwnd, params: &mut MessageParams) -> Option<LResult> {
        let handler = handler_for(hwnd)?;
        let result = handler.call_handler(hwnd, WM_NCDESTROY, params);

        let subclass_id = detach(hwnd).and_then(|record| record.subclass_id);
        if let Some(id) = subclass_id {
            if let Err(e) = P::remove_window_subclass(hwnd, Self::subclass_proc as SubclassProc, id) {
                log::warn!("Dispatcher: removing subclass from {:#x} failed: {e}", hwnd.as_raw());
            }
        }
        result
    }
}
