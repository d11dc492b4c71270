/*
 * Subclass layers that can be stacked on any window, including windows of
 * classes this crate did not register and windows already routed by a
 * `Dispatcher`.
 *
 * A `SubclassDispatcher` owns one registry and may be installed on many
 * windows. Each installation is a separate layer in the window's comctl32
 * subclass chain, identified by (`subclass_proc`, a process-unique id) and
 * carrying a pointer to the dispatcher's shared state as reference data. A
 * layer forwards anything its registry does not claim to the layer below it,
 * so layers installed by independent dispatchers compose, and removing any
 * layer (outermost or not) leaves the remaining chain intact.
 *
 * A layer removes itself at `WM_NCDESTROY`; dropping the dispatcher removes
 * the layers that are still installed. A layer whose removal fails stays
 * tracked, and its shared state is never freed.
 */
use crate::error::{PlatformError, Result as PlatformResult};
use crate::handler::MessageHandler;
use crate::messages::WM_NCDESTROY;
use crate::params::MessageParams;
use crate::platform::{Platform, SubclassProc};
use crate::types::{Hwnd, LParam, LResult, WParam};

use std::cell::RefCell;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_LAYER_ID: AtomicUsize = AtomicUsize::new(1);

// Shared with the OS through the layers' reference data.
struct SubclassLayer {
    handler: Rc<MessageHandler>,
    ids: RefCell<HashMap<Hwnd, usize>>,
}

pub struct SubclassDispatcher<P: Platform> {
    layer: Rc<SubclassLayer>,
    _platform: PhantomData<P>,
}

impl<P: Platform> Default for SubclassDispatcher<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Platform> SubclassDispatcher<P> {
    pub fn new() -> Self {
        Self::with_handler(Rc::new(MessageHandler::new()))
    }

    /// Shares an existing registry, e.g. one also used by a `Dispatcher`.
    pub fn with_handler(handler: Rc<MessageHandler>) -> Self {
        Self {
            layer: Rc::new(SubclassLayer {
                handler,
                ids: RefCell::new(HashMap::new()),
            }),
            _platform: PhantomData,
        }
    }

    /// The registry consulted by every layer of this dispatcher.
    pub fn handler(&self) -> &MessageHandler {
        &self.layer.handler
    }

    /// Installs a layer on top of `hwnd`'s subclass chain.
    pub fn subclass(&self, hwnd: Hwnd) -> PlatformResult<()> {
        if self.is_subclassed(hwnd) {
            return Err(PlatformError::AlreadyAttached(hwnd));
        }
        let id = NEXT_LAYER_ID.fetch_add(1, Ordering::Relaxed);
        let ref_data = Rc::as_ptr(&self.layer) as usize;
        P::set_window_subclass(hwnd, Self::subclass_proc as SubclassProc, id, ref_data)?;
        self.layer.ids.borrow_mut().insert(hwnd, id);
        log::debug!("Subclass: layer {id} installed on {:#x}", hwnd.as_raw());
        Ok(())
    }

    /// Removes this dispatcher's layer from `hwnd`. On failure the layer is
    /// still installed and still tracked.
    pub fn unsubclass(&self, hwnd: Hwnd) -> PlatformResult<()> {
        let id = self.layer.ids.borrow().get(&hwnd).copied().ok_or_else(|| {
            PlatformError::InvalidHandle(format!(
                "window {:#x} is not subclassed by this dispatcher",
                hwnd.as_raw()
            ))
        })?;
        P::remove_window_subclass(hwnd, Self::subclass_proc as SubclassProc, id)
            .inspect_err(|e| log::error!("Subclass: removing layer {id} from {:#x} failed: {e}", hwnd.as_raw()))?;
        self.layer.ids.borrow_mut().remove(&hwnd);
        log::debug!("Subclass: layer {id} removed from {:#x}", hwnd.as_raw());
        Ok(())
    }

    pub fn is_subclassed(&self, hwnd: Hwnd) -> bool {
        self.layer.ids.borrow().contains_key(&hwnd)
    }

    pub fn subclassed_count(&self) -> usize {
        self.layer.ids.borrow().len()
    }

    /// # Safety
    ///
    /// Called by the OS only, with the reference data given to
    /// `set_window_subclass` by `subclass`.
    pub unsafe extern "system" fn subclass_proc(
        hwnd: Hwnd,
        msg: u32,
        wparam: WParam,
        lparam: LParam,
        id: usize,
        ref_data: usize,
    ) -> LResult {
        let layer_ptr = ref_data as *const SubclassLayer;
        // SAFETY: `ref_data` is `Rc::as_ptr` of the dispatcher's layer, which
        // stays alive while any of its layers is installed. Taking our own
        // strong reference keeps it alive for this call even if a handler
        // drops the dispatcher.
        let layer = unsafe {
            Rc::increment_strong_count(layer_ptr);
            Rc::from_raw(layer_ptr)
        };

        let mut params = MessageParams { wparam, lparam };
        let result = layer.handler.call_handler(hwnd, msg, &mut params);

        if msg == WM_NCDESTROY {
            match P::remove_window_subclass(hwnd, Self::subclass_proc as SubclassProc, id) {
                Ok(()) => {
                    layer.ids.borrow_mut().remove(&hwnd);
                    log::debug!("Subclass: layer {id} detached from {:#x}", hwnd.as_raw());
                }
                // Still tracked, so `is_subclassed` reports it and `Drop`
                // keeps the shared state alive for it.
                Err(e) => log::error!(
                    "Subclass: detaching layer {id} from {:#x} failed: {e}",
                    hwnd.as_raw()
                ),
            }
            // Layers below still need to see it.
            let next = P::def_subclass_proc(hwnd, msg, params.wparam, params.lparam);
            return result.unwrap_or(next);
        }

        result.unwrap_or_else(|| P::def_subclass_proc(hwnd, msg, params.wparam, params.lparam))
    }
}

impl<P: Platform> Drop for SubclassDispatcher<P> {
    fn drop(&mut self) {
        let installed: Vec<(Hwnd, usize)> = self.layer.ids.borrow_mut().drain().collect();
        let mut stranded = false;
        for (hwnd, id) in installed {
            if let Err(e) = P::remove_window_subclass(hwnd, Self::subclass_proc as SubclassProc, id) {
                log::error!("Subclass: layer {id} left on {:#x}: {e}", hwnd.as_raw());
                stranded = true;
            }
        }
        if stranded {
            // The OS can still call into the stranded layers.
            std::mem::forget(Rc::clone(&self.layer));
        }
    }
}
