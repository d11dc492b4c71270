/*
 * Provides the public entry point for the typedwnd crate, a type-safe layer
 * between Win32 window procedures and application code. It wires together the
 * typed parameter views, the filtered handler registry and the attachment
 * manager that routes each window's messages to its registry for the whole
 * lifetime of the window.
 *
 * Everything that decides *what* happens to a message is portable and talks
 * to the OS only through the `Platform` trait. The Windows implementation of
 * that trait lives in `win32`; conditional compilation keeps the rest
 * available on every platform so non-Windows builds can still compile and test
 * the routing and lifecycle logic.
 */
pub mod dispatcher;
pub mod error;
pub mod filters;
pub mod handler;
pub mod message_traits;
pub mod messages;
pub mod params;
pub mod platform;
pub mod subclass;
#[cfg(test)]
pub(crate) mod testing;
pub mod types;
#[cfg(target_os = "windows")]
pub mod win32;

pub use dispatcher::{AttachmentKind, Dispatcher};
pub use error::{PlatformError, Result as PlatformResult};
pub use filters::{CommandFilter, Filter, NoFilter, NotifyFilter};
pub use handler::{HandlerResult, MessageHandler};
pub use message_traits::{Message, Notification, WmAny, notify};
pub use params::{MessageParams, MessageView};
pub use platform::Platform;
pub use subclass::SubclassDispatcher;
pub use types::{Hinstance, Hwnd, LParam, LResult, QueuedMessage, WParam, WindowConfig};

#[cfg(target_os = "windows")]
pub use win32::Win32;

/// Dispatcher backed by the native window manager.
#[cfg(target_os = "windows")]
pub type Win32Dispatcher = Dispatcher<Win32>;

#[cfg(target_os = "windows")]
pub type Win32SubclassDispatcher = SubclassDispatcher<Win32>;
