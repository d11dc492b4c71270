/*
 * Predicates that gate a registered handler. A filter is typed on the view
 * of the message it guards and answers whether the handler should run.
 * Non-matching handlers are skipped; they never count as "handled".
 *
 * Because the view type is part of the trait, pairing a filter with a message
 * whose view it cannot read is rejected when the handler is registered.
 */
use crate::params::{CommandParams, MessageView, NotifyParams};

/// Decides whether a handler sees a message with view `V`.
///
/// A command filter only fits messages whose view is `CommandParams`:
///
/// ```compile_fail
/// use typedwnd::message_traits::WmSize;
/// use typedwnd::{CommandFilter, LResult, MessageHandler};
///
/// MessageHandler::new().on_message_filtered(WmSize, CommandFilter::id(5), |_, _| LResult(1));
/// ```
pub trait Filter<V: MessageView>: 'static {
    fn matches(&self, view: &V) -> bool;
}

impl<V, F> Filter<V> for F
where
    V: MessageView,
    F: Fn(&V) -> bool + 'static,
{
    fn matches(&self, view: &V) -> bool {
        self(view)
    }
}

/// Always passes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoFilter;

impl<V: MessageView> Filter<V> for NoFilter {
    fn matches(&self, _view: &V) -> bool {
        true
    }
}

/// Matches `WM_COMMAND` deliveries by control/menu id and notification code.
/// An unset field matches anything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CommandFilter {
    pub id: Option<u16>,
    pub notif_code: Option<u16>,
}

impl CommandFilter {
    pub fn id(id: u16) -> Self {
        Self {
            id: Some(id),
            notif_code: None,
        }
    }

    pub fn id_and_code(id: u16, notif_code: u16) -> Self {
        Self {
            id: Some(id),
            notif_code: Some(notif_code),
        }
    }
}

impl Filter<CommandParams> for CommandFilter {
    fn matches(&self, command: &CommandParams) -> bool {
        self.id.is_none_or(|id| command.id() == id)
            && self
                .notif_code
                .is_none_or(|code| command.control_notif_code() == code)
    }
}

/// Matches `WM_NOTIFY` deliveries by `NMHDR.code` and `NMHDR.idFrom`.
/// A null header never matches.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NotifyFilter {
    pub code: Option<u32>,
    pub id_from: Option<usize>,
}

impl NotifyFilter {
    pub fn code(code: u32) -> Self {
        Self {
            code: Some(code),
            id_from: None,
        }
    }

    pub fn code_and_id(code: u32, id_from: usize) -> Self {
        Self {
            code: Some(code),
            id_from: Some(id_from),
        }
    }
}

impl Filter<NotifyParams> for NotifyFilter {
    fn matches(&self, notify: &NotifyParams) -> bool {
        // SAFETY: a `NotifyParams` view only exists for WM_NOTIFY, whose
        // LPARAM is either null or the sender's NMHDR-prefixed payload, alive
        // for the duration of the send.
        let Some(hdr) = (unsafe { notify.nmhdr() }) else {
            return false;
        };
        self.code.is_none_or(|code| hdr.code == code)
            && self.id_from.is_none_or(|id| hdr.id_from == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{BN_CLICKED, EN_CHANGE, NM_CLICK, NM_CUSTOMDRAW, SIZE_MAXIMIZED};
    use crate::params::{MessageParams, NmHdr, SizeParams};
    use crate::types::{Hwnd, LParam};

    fn command(id: u16, code: u16) -> CommandParams {
        MessageParams::new(((code as usize) << 16) | id as usize, 0).into()
    }

    #[test]
    fn no_filter_passes_every_view() {
        assert!(NoFilter.matches(&MessageParams::default()));
        assert!(NoFilter.matches(&SizeParams::default()));
        assert!(NoFilter.matches(&command(1, 0)));
    }

    #[test]
    fn command_filter_matches_id_only_when_equal() {
        let filter = CommandFilter::id(5);

        assert!(filter.matches(&command(5, BN_CLICKED)));
        assert!(!filter.matches(&command(7, BN_CLICKED)));
    }

    #[test]
    fn command_filter_with_code_requires_both() {
        let filter = CommandFilter::id_and_code(5, EN_CHANGE);

        assert!(filter.matches(&command(5, EN_CHANGE)));
        assert!(!filter.matches(&command(5, BN_CLICKED)));
        assert!(!filter.matches(&command(6, EN_CHANGE)));
    }

    #[test]
    fn empty_command_filter_is_a_wildcard() {
        assert!(CommandFilter::default().matches(&command(9, EN_CHANGE)));
    }

    #[test]
    fn notify_filter_reads_the_header() {
        let hdr = NmHdr {
            hwnd_from: Hwnd::from_raw(0x10),
            id_from: 42,
            code: NM_CLICK,
        };
        let params: NotifyParams = MessageParams {
            lparam: LParam::from_ptr(&hdr),
            ..Default::default()
        }
        .into();

        assert!(NotifyFilter::code_and_id(NM_CLICK, 42).matches(&params));
        assert!(NotifyFilter::code(NM_CLICK).matches(&params));
        assert!(!NotifyFilter::code_and_id(NM_CLICK, 43).matches(&params));
        assert!(!NotifyFilter::code_and_id(NM_CUSTOMDRAW, 42).matches(&params));
    }

    #[test]
    fn notify_filter_rejects_null_header() {
        assert!(!NotifyFilter::default().matches(&NotifyParams::default()));
    }

    #[test]
    fn closures_filter_on_the_decoded_view() {
        let maximized_only = |size: &SizeParams| size.is_maximized();
        let maximized: SizeParams = MessageParams::new(SIZE_MAXIMIZED, 0).into();

        assert!(maximized_only.matches(&maximized));
        assert!(!maximized_only.matches(&SizeParams::default()));
    }
}
