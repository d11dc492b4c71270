/*
 * The handler registry: per-message ordered chains of typed handlers.
 *
 * Each registration wraps the typed closure into a uniform entry that
 * (1) reinterprets the raw words as the view the message marker names,
 * (2) asks its filter about that view and (3) normalizes the closure's return
 * value through `HandlerResult`. Dispatch walks the chain for the message in registration
 * order and stops at the first entry that produces a value; a chain that
 * produces nothing means "no opinion" and the caller falls back to default
 * processing.
 *
 * Registration goes through `&self` so handlers (which only ever see the
 * registry through a shared `Rc`) can add handlers while a dispatch is
 * running. Dispatch iterates over a snapshot of the chain, so such additions
 * take effect from the next delivery on.
 */
use crate::filters::{CommandFilter, Filter, NoFilter, NotifyFilter};
use crate::message_traits::{Message, Notification, WmCommand, WmNotify};
use crate::params::{CommandParams, MessageParams, MessageView, NotifyParams};
use crate::types::{Hwnd, LResult};

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

type Entry = Rc<dyn Fn(Hwnd, &mut MessageParams) -> Option<LResult>>;

/// Converts a handler's return value into a dispatch outcome.
/// `None` means the handler declined and the next one is consulted.
pub trait HandlerResult {
    fn into_result(self) -> Option<LResult>;
}

impl HandlerResult for () {
    fn into_result(self) -> Option<LResult> {
        Some(LResult(0))
    }
}

impl HandlerResult for LResult {
    fn into_result(self) -> Option<LResult> {
        Some(self)
    }
}

impl HandlerResult for isize {
    fn into_result(self) -> Option<LResult> {
        Some(LResult(self))
    }
}

impl HandlerResult for bool {
    fn into_result(self) -> Option<LResult> {
        Some(LResult(self as isize))
    }
}

impl HandlerResult for Option<LResult> {
    fn into_result(self) -> Option<LResult> {
        self
    }
}

#[derive(Default)]
pub struct MessageHandler {
    entries: RefCell<HashMap<u32, Vec<Entry>>>,
}

impl fmt::Debug for MessageHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.entries.borrow();
        let mut messages: Vec<_> = entries.iter().map(|(msg, v)| (*msg, v.len())).collect();
        messages.sort_unstable();
        f.debug_struct("MessageHandler")
            .field("messages", &messages)
            .finish()
    }
}

impl MessageHandler {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, msg: u32, entry: Entry) -> &Self {
        self.entries.borrow_mut().entry(msg).or_default().push(entry);
        self
    }

    // ── Typed messages ────────────────────────────────────────────────────────

    /// Appends `handler` to the chain for `M`. The handler receives the view
    /// mutably; changes to the words are seen by later handlers and by
    /// default processing.
    pub fn on_message<M, R>(
        &self,
        message: M,
        handler: impl Fn(Hwnd, &mut M::Params) -> R + 'static,
    ) -> &Self
    where
        M: Message,
        R: HandlerResult,
    {
        self.on_message_filtered(message, NoFilter, handler)
    }

    /// Like `on_message`, but `handler` only runs when `filter` accepts the
    /// message's view. The filter must be written for `M`'s view type.
    pub fn on_message_filtered<M, F, R>(
        &self,
        _message: M,
        filter: F,
        handler: impl Fn(Hwnd, &mut M::Params) -> R + 'static,
    ) -> &Self
    where
        M: Message,
        F: Filter<M::Params>,
        R: HandlerResult,
    {
        self.push(
            M::ID,
            Rc::new(move |hwnd, params: &mut MessageParams| {
                let view = M::Params::from_params_mut(params);
                if !filter.matches(view) {
                    return None;
                }
                handler(hwnd, view).into_result()
            }),
        )
    }

    /// Registers a callable that takes no arguments; captured state travels in
    /// the closure.
    pub fn on_message_invoke<M, R>(&self, message: M, f: impl Fn() -> R + 'static) -> &Self
    where
        M: Message,
        R: HandlerResult,
    {
        self.on_message(message, move |_, _| f())
    }

    pub fn on_message_invoke_hwnd<M, R>(
        &self,
        message: M,
        f: impl Fn(Hwnd) -> R + 'static,
    ) -> &Self
    where
        M: Message,
        R: HandlerResult,
    {
        self.on_message(message, move |hwnd, _| f(hwnd))
    }

    // ── WM_COMMAND ────────────────────────────────────────────────────────────

    pub fn on_command<R: HandlerResult>(
        &self,
        id: u16,
        handler: impl Fn(Hwnd, &mut CommandParams) -> R + 'static,
    ) -> &Self {
        self.on_message_filtered(WmCommand, CommandFilter::id(id), handler)
    }

    pub fn on_command_invoke<R: HandlerResult>(
        &self,
        id: u16,
        f: impl Fn() -> R + 'static,
    ) -> &Self {
        self.on_command(id, move |_, _| f())
    }

    pub fn on_command_invoke_hwnd<R: HandlerResult>(
        &self,
        id: u16,
        f: impl Fn(Hwnd) -> R + 'static,
    ) -> &Self {
        self.on_command(id, move |hwnd, _| f(hwnd))
    }

    /// Like `on_command`, additionally requiring the control notification
    /// code (`BN_CLICKED`, `EN_CHANGE`, ...).
    pub fn on_command_notify<R: HandlerResult>(
        &self,
        id: u16,
        notif_code: u16,
        handler: impl Fn(Hwnd, &mut CommandParams) -> R + 'static,
    ) -> &Self {
        self.on_message_filtered(
            WmCommand,
            CommandFilter::id_and_code(id, notif_code),
            handler,
        )
    }

    pub fn on_command_notify_invoke<R: HandlerResult>(
        &self,
        id: u16,
        notif_code: u16,
        f: impl Fn() -> R + 'static,
    ) -> &Self {
        self.on_command_notify(id, notif_code, move |_, _| f())
    }

    // ── WM_NOTIFY ─────────────────────────────────────────────────────────────

    /// Handles notification `N` sent by the control whose id is `control_id`.
    /// The handler receives the notification's payload structure.
    pub fn on_notify<N, R>(
        &self,
        _notification: N,
        control_id: usize,
        handler: impl Fn(Hwnd, &mut N::Payload) -> R + 'static,
    ) -> &Self
    where
        N: Notification,
        R: HandlerResult,
    {
        self.on_message_filtered(
            WmNotify,
            NotifyFilter::code_and_id(N::CODE, control_id),
            move |hwnd, params: &mut NotifyParams| {
                // SAFETY: the filter only passes non-null headers whose code
                // is `N::CODE`, and the sender guarantees that code is
                // accompanied by an `N::Payload`.
                let payload = unsafe { &mut *params.nmhdr_ptr().cast::<N::Payload>() };
                handler(hwnd, payload)
            },
        )
    }

    pub fn on_notify_invoke<N, R>(
        &self,
        notification: N,
        control_id: usize,
        f: impl Fn() -> R + 'static,
    ) -> &Self
    where
        N: Notification,
        R: HandlerResult,
    {
        self.on_notify(notification, control_id, move |_, _| f())
    }

    // ── Dispatch ──────────────────────────────────────────────────────────────

    /// Runs the chain for `msg`. Returns the first handled result, or `None`
    /// when no handler is registered or every handler declined.
    pub fn call_handler(&self, hwnd: Hwnd, msg: u32, params: &mut MessageParams) -> Option<LResult> {
        let snapshot = self.entries.borrow().get(&msg).cloned()?;
        for entry in &snapshot {
            if let Some(result) = entry(hwnd, params) {
                log::trace!(
                    "Dispatcher: message {msg:#06x} for {:#x} handled -> {}",
                    hwnd.as_raw(),
                    result.0
                );
                return Some(result);
            }
        }
        None
    }

    pub fn handler_count(&self, msg: u32) -> usize {
        self.entries.borrow().get(&msg).map_or(0, Vec::len)
    }
}
