/*
 * Compile-time mapping from message identifiers to parameter views.
 *
 * Each marker type ties one `WM_*` identifier to the view its words are
 * decoded with, so `on_message::<WmSize>` hands the handler a `&mut
 * SizeParams` and nothing else. `WmAny<ID>` covers identifiers with no
 * dedicated view (including application-defined ones). The `notify` submodule
 * plays the same role for `WM_NOTIFY`, keyed on the `NMHDR.code`.
 */
use crate::messages::*;
use crate::params::*;

/// A window message with a statically known parameter layout.
pub trait Message: 'static {
    const ID: u32;
    type Params: MessageView;
}

/// Fallback mapping for any identifier, decoded with the raw words.
pub struct WmAny<const ID: u32>;

impl<const ID: u32> Message for WmAny<ID> {
    const ID: u32 = ID;
    type Params = MessageParams;
}

macro_rules! message_map {
    ($($marker:ident => $id:ident : $params:ty),+ $(,)?) => {
        $(
            #[doc = concat!("`", stringify!($id), "`.")]
            #[derive(Debug, Clone, Copy)]
            pub struct $marker;

            impl Message for $marker {
                const ID: u32 = $id;
                type Params = $params;
            }
        )+
    };
}

message_map!(
    WmActivate => WM_ACTIVATE: ActivateParams,
    WmActivateApp => WM_ACTIVATEAPP: ActivateAppParams,
    WmCaptureChanged => WM_CAPTURECHANGED: CaptureChangedParams,
    WmChar => WM_CHAR: CharParams,
    WmClose => WM_CLOSE: CloseParams,
    WmCommand => WM_COMMAND: CommandParams,
    WmContextMenu => WM_CONTEXTMENU: ContextMenuParams,
    WmCopyData => WM_COPYDATA: CopyDataParams,
    WmCreate => WM_CREATE: CreateParams,
    WmCtlColorBtn => WM_CTLCOLORBTN: CtlColorParams,
    WmCtlColorDlg => WM_CTLCOLORDLG: CtlColorParams,
    WmCtlColorEdit => WM_CTLCOLOREDIT: CtlColorParams,
    WmCtlColorListBox => WM_CTLCOLORLISTBOX: CtlColorParams,
    WmCtlColorMsgBox => WM_CTLCOLORMSGBOX: CtlColorParams,
    WmCtlColorScrollBar => WM_CTLCOLORSCROLLBAR: CtlColorParams,
    WmCtlColorStatic => WM_CTLCOLORSTATIC: CtlColorParams,
    WmDeadChar => WM_DEADCHAR: DeadCharParams,
    WmDestroy => WM_DESTROY: DestroyParams,
    WmDisplayChange => WM_DISPLAYCHANGE: DisplayChangeParams,
    WmDpiChanged => WM_DPICHANGED: DpiChangedParams,
    WmDrawItem => WM_DRAWITEM: DrawItemParams,
    WmDropFiles => WM_DROPFILES: DropFilesParams,
    WmEnable => WM_ENABLE: EnableParams,
    WmEndSession => WM_ENDSESSION: EndSessionParams,
    WmEraseBkgnd => WM_ERASEBKGND: EraseBkgndParams,
    WmGetDlgCode => WM_GETDLGCODE: GetDlgCodeParams,
    WmGetIcon => WM_GETICON: GetIconParams,
    WmGetMinMaxInfo => WM_GETMINMAXINFO: GetMinMaxInfoParams,
    WmGetText => WM_GETTEXT: GetTextParams,
    WmHelp => WM_HELP: HelpParams,
    WmHScroll => WM_HSCROLL: HScrollParams,
    WmInitDialog => WM_INITDIALOG: InitDialogParams,
    WmInitMenu => WM_INITMENU: InitMenuParams,
    WmInitMenuPopup => WM_INITMENUPOPUP: InitMenuPopupParams,
    WmInputLangChange => WM_INPUTLANGCHANGE: InputLangParams,
    WmKeyDown => WM_KEYDOWN: KeyDownParams,
    WmKeyUp => WM_KEYUP: KeyUpParams,
    WmKillFocus => WM_KILLFOCUS: KillFocusParams,
    WmLButtonDblClk => WM_LBUTTONDBLCLK: MouseParams,
    WmLButtonDown => WM_LBUTTONDOWN: MouseParams,
    WmLButtonUp => WM_LBUTTONUP: MouseParams,
    WmMButtonDblClk => WM_MBUTTONDBLCLK: MouseParams,
    WmMButtonDown => WM_MBUTTONDOWN: MouseParams,
    WmMButtonUp => WM_MBUTTONUP: MouseParams,
    WmMeasureItem => WM_MEASUREITEM: MeasureItemParams,
    WmMenuChar => WM_MENUCHAR: MenuCharParams,
    WmMenuSelect => WM_MENUSELECT: MenuSelectParams,
    WmMouseActivate => WM_MOUSEACTIVATE: MouseActivateParams,
    WmMouseHover => WM_MOUSEHOVER: MouseParams,
    WmMouseLeave => WM_MOUSELEAVE: MessageParams,
    WmMouseMove => WM_MOUSEMOVE: MouseParams,
    WmMouseWheel => WM_MOUSEWHEEL: MouseWheelParams,
    WmMove => WM_MOVE: MoveParams,
    WmMoving => WM_MOVING: MovingParams,
    WmNcActivate => WM_NCACTIVATE: NcActivateParams,
    WmNcCalcSize => WM_NCCALCSIZE: NcCalcSizeParams,
    WmNcCreate => WM_NCCREATE: NcCreateParams,
    WmNcDestroy => WM_NCDESTROY: NcDestroyParams,
    WmNcHitTest => WM_NCHITTEST: NcHitTestParams,
    WmNcLButtonDblClk => WM_NCLBUTTONDBLCLK: NcMouseParams,
    WmNcLButtonDown => WM_NCLBUTTONDOWN: NcMouseParams,
    WmNcLButtonUp => WM_NCLBUTTONUP: NcMouseParams,
    WmNcMButtonDblClk => WM_NCMBUTTONDBLCLK: NcMouseParams,
    WmNcMButtonDown => WM_NCMBUTTONDOWN: NcMouseParams,
    WmNcMButtonUp => WM_NCMBUTTONUP: NcMouseParams,
    WmNcMouseMove => WM_NCMOUSEMOVE: NcMouseParams,
    WmNcPaint => WM_NCPAINT: NcPaintParams,
    WmNcRButtonDblClk => WM_NCRBUTTONDBLCLK: NcMouseParams,
    WmNcRButtonDown => WM_NCRBUTTONDOWN: NcMouseParams,
    WmNcRButtonUp => WM_NCRBUTTONUP: NcMouseParams,
    WmNotify => WM_NOTIFY: NotifyParams,
    WmNotifyFormat => WM_NOTIFYFORMAT: NotifyFormatParams,
    WmPaint => WM_PAINT: PaintParams,
    WmParentNotify => WM_PARENTNOTIFY: ParentNotifyParams,
    WmPrint => WM_PRINT: PrintParams,
    WmPrintClient => WM_PRINTCLIENT: PrintClientParams,
    WmQueryEndSession => WM_QUERYENDSESSION: QueryEndSessionParams,
    WmQuit => WM_QUIT: QuitParams,
    WmRButtonDblClk => WM_RBUTTONDBLCLK: MouseParams,
    WmRButtonDown => WM_RBUTTONDOWN: MouseParams,
    WmRButtonUp => WM_RBUTTONUP: MouseParams,
    WmSetCursor => WM_SETCURSOR: SetCursorParams,
    WmSetFocus => WM_SETFOCUS: SetFocusParams,
    WmSetFont => WM_SETFONT: SetFontParams,
    WmSetIcon => WM_SETICON: SetIconParams,
    WmSetRedraw => WM_SETREDRAW: SetRedrawParams,
    WmSetText => WM_SETTEXT: SetTextParams,
    WmShowWindow => WM_SHOWWINDOW: ShowWindowParams,
    WmSize => WM_SIZE: SizeParams,
    WmSizing => WM_SIZING: SizingParams,
    WmStyleChanged => WM_STYLECHANGED: StyleChangedParams,
    WmStyleChanging => WM_STYLECHANGING: StyleChangingParams,
    WmSysChar => WM_SYSCHAR: SysCharParams,
    WmSysCommand => WM_SYSCOMMAND: SysCommandParams,
    WmSysDeadChar => WM_SYSDEADCHAR: SysDeadCharParams,
    WmSysKeyDown => WM_SYSKEYDOWN: SysKeyDownParams,
    WmSysKeyUp => WM_SYSKEYUP: SysKeyUpParams,
    WmTimer => WM_TIMER: TimerParams,
    WmVScroll => WM_VSCROLL: VScrollParams,
    WmWindowPosChanged => WM_WINDOWPOSCHANGED: WindowPosChangedParams,
    WmWindowPosChanging => WM_WINDOWPOSCHANGING: WindowPosChangingParams,
    WmAskCbFormatName => WM_ASKCBFORMATNAME: AskCbFormatNameParams,
    WmChangeCbChain => WM_CHANGECBCHAIN: ChangeCbChainParams,
    WmCharToItem => WM_CHARTOITEM: CharToItemParams,
    WmCompacting => WM_COMPACTING: CompactingParams,
    WmCompareItem => WM_COMPAREITEM: CompareItemParams,
    WmDeleteItem => WM_DELETEITEM: DeleteItemParams,
    WmDevModeChange => WM_DEVMODECHANGE: DevModeChangeParams,
    WmEnterIdle => WM_ENTERIDLE: EnterIdleParams,
    WmEnterMenuLoop => WM_ENTERMENULOOP: EnterMenuLoopParams,
    WmExitMenuLoop => WM_EXITMENULOOP: ExitMenuLoopParams,
    WmHotKey => WM_HOTKEY: HotKeyParams,
    WmHScrollClipboard => WM_HSCROLLCLIPBOARD: HScrollClipboardParams,
    WmIconEraseBkgnd => WM_ICONERASEBKGND: IconEraseBkgndParams,
    WmInputLangChangeRequest => WM_INPUTLANGCHANGEREQUEST: InputLangChangeRequestParams,
    WmMdiActivate => WM_MDIACTIVATE: MdiActivateParams,
    WmMenuDrag => WM_MENUDRAG: MenuDragParams,
    WmMenuGetObject => WM_MENUGETOBJECT: MenuGetObjectParams,
    WmMenuRButtonUp => WM_MENURBUTTONUP: MenuRButtonUpParams,
    WmNextDlgCtl => WM_NEXTDLGCTL: NextDlgCtlParams,
    WmNextMenu => WM_NEXTMENU: NextMenuParams,
    WmPaintClipboard => WM_PAINTCLIPBOARD: PaintClipboardParams,
    WmPaletteChanged => WM_PALETTECHANGED: PaletteChangedParams,
    WmPaletteIsChanging => WM_PALETTEISCHANGING: PaletteIsChangingParams,
    WmPowerBroadcast => WM_POWERBROADCAST: PowerBroadcastParams,
    WmRenderFormat => WM_RENDERFORMAT: RenderFormatParams,
    WmSetHotKey => WM_SETHOTKEY: SetHotKeyParams,
    WmSettingChange => WM_SETTINGCHANGE: SettingChangeParams,
    WmSizeClipboard => WM_SIZECLIPBOARD: SizeClipboardParams,
    WmSpoolerStatus => WM_SPOOLERSTATUS: SpoolerStatusParams,
    WmTCard => WM_TCARD: TCardParams,
    WmUninitMenuPopup => WM_UNINITMENUPOPUP: UninitMenuPopupParams,
    WmVKeyToItem => WM_VKEYTOITEM: VKeyToItemParams,
    WmVScrollClipboard => WM_VSCROLLCLIPBOARD: VScrollClipboardParams,
);

/// A `WM_NOTIFY` code with a statically known payload structure.
///
/// The payload always begins with an `NMHDR`; handlers receive it by
/// reference for the duration of the call.
pub trait Notification: 'static {
    const CODE: u32;
    type Payload;
}

pub mod notify {
    use super::Notification;
    use crate::messages::*;
    use crate::params::{NmCustomDraw, NmHdr};

    macro_rules! notification_map {
        ($($marker:ident => $code:ident : $payload:ty),+ $(,)?) => {
            $(
                #[doc = concat!("`", stringify!($code), "`.")]
                #[derive(Debug, Clone, Copy)]
                pub struct $marker;

                impl Notification for $marker {
                    const CODE: u32 = $code;
                    type Payload = $payload;
                }
            )+
        };
    }

    notification_map!(
        Click => NM_CLICK: NmHdr,
        DblClk => NM_DBLCLK: NmHdr,
        Return => NM_RETURN: NmHdr,
        RClick => NM_RCLICK: NmHdr,
        RDblClk => NM_RDBLCLK: NmHdr,
        SetFocus => NM_SETFOCUS: NmHdr,
        KillFocus => NM_KILLFOCUS: NmHdr,
        Hover => NM_HOVER: NmHdr,
        CustomDraw => NM_CUSTOMDRAW: NmCustomDraw,
    );

    // Typed payloads of the common controls. The `NmHdr` markers above stay
    // portable; the item markers below read the same codes with the richer
    // structures list and tree views send.
    #[cfg(target_os = "windows")]
    use windows::Win32::UI::Controls::{
        NMBCDROPDOWN, NMBCHOTITEM, NMCBEDRAGBEGINW, NMCBEENDEDITW, NMCOMBOBOXEXW, NMDATETIMECHANGE,
        NMDATETIMEFORMATQUERYW, NMDATETIMEFORMATW, NMDATETIMESTRINGW, NMDATETIMEWMKEYDOWNW,
        NMDAYSTATE, NMHDDISPINFOW, NMHDFILTERBTNCLICK, NMHEADERW, NMIPADDRESS, NMITEMACTIVATE,
        NMLISTVIEW, NMLVCACHEHINT, NMLVDISPINFOW, NMLVEMPTYMARKUP, NMLVFINDITEMW, NMLVGETINFOTIPW,
        NMLVKEYDOWN, NMLVLINK, NMLVODSTATECHANGE, NMLVSCROLL, NMMOUSE, NMOBJECTNOTIFY,
        NMPGCALCSIZE, NMPGHOTITEM, NMPGSCROLL, NMSELCHANGE, NMTREEVIEWW, NMVIEWCHANGE, PSHNOTIFY,
    };

    #[cfg(target_os = "windows")]
    notification_map!(
        ItemClick => NM_CLICK: NMITEMACTIVATE,
        ItemDblClk => NM_DBLCLK: NMITEMACTIVATE,
        ItemRClick => NM_RCLICK: NMITEMACTIVATE,
        ItemRDblClk => NM_RDBLCLK: NMITEMACTIVATE,
        SetCursor => NM_SETCURSOR: NMMOUSE,

        LvnBeginDrag => LVN_BEGINDRAG: NMLISTVIEW,
        LvnBeginLabelEdit => LVN_BEGINLABELEDITW: NMLVDISPINFOW,
        LvnBeginRDrag => LVN_BEGINRDRAG: NMLISTVIEW,
        LvnBeginScroll => LVN_BEGINSCROLL: NMLVSCROLL,
        LvnColumnClick => LVN_COLUMNCLICK: NMLISTVIEW,
        LvnColumnDropDown => LVN_COLUMNDROPDOWN: NMLISTVIEW,
        LvnColumnOverflowClick => LVN_COLUMNOVERFLOWCLICK: NMLISTVIEW,
        LvnDeleteAllItems => LVN_DELETEALLITEMS: NMLISTVIEW,
        LvnDeleteItem => LVN_DELETEITEM: NMLISTVIEW,
        LvnEndLabelEdit => LVN_ENDLABELEDITW: NMLVDISPINFOW,
        LvnEndScroll => LVN_ENDSCROLL: NMLVSCROLL,
        LvnGetDispInfo => LVN_GETDISPINFOW: NMLVDISPINFOW,
        LvnGetEmptyMarkup => LVN_GETEMPTYMARKUP: NMLVEMPTYMARKUP,
        LvnGetInfoTip => LVN_GETINFOTIPW: NMLVGETINFOTIPW,
        LvnHotTrack => LVN_HOTTRACK: NMLISTVIEW,
        LvnIncrementalSearch => LVN_INCREMENTALSEARCHW: NMLVFINDITEMW,
        LvnInsertItem => LVN_INSERTITEM: NMLISTVIEW,
        LvnItemActivate => LVN_ITEMACTIVATE: NMITEMACTIVATE,
        LvnItemChanged => LVN_ITEMCHANGED: NMLISTVIEW,
        LvnItemChanging => LVN_ITEMCHANGING: NMLISTVIEW,
        LvnKeyDown => LVN_KEYDOWN: NMLVKEYDOWN,
        LvnLinkClick => LVN_LINKCLICK: NMLVLINK,
        LvnMarqueeBegin => LVN_MARQUEEBEGIN: NMLISTVIEW,
        LvnOdCacheHint => LVN_ODCACHEHINT: NMLVCACHEHINT,
        LvnOdFindItem => LVN_ODFINDITEMW: NMLVFINDITEMW,
        LvnOdStateChanged => LVN_ODSTATECHANGED: NMLVODSTATECHANGE,
        LvnSetDispInfo => LVN_SETDISPINFOW: NMLVDISPINFOW,

        PsnApply => PSN_APPLY: PSHNOTIFY,
        PsnGetObject => PSN_GETOBJECT: NMOBJECTNOTIFY,
        PsnHelp => PSN_HELP: PSHNOTIFY,
        PsnKillActive => PSN_KILLACTIVE: PSHNOTIFY,
        PsnQueryCancel => PSN_QUERYCANCEL: PSHNOTIFY,
        PsnQueryInitialFocus => PSN_QUERYINITIALFOCUS: PSHNOTIFY,
        PsnReset => PSN_RESET: PSHNOTIFY,
        PsnSetActive => PSN_SETACTIVE: PSHNOTIFY,
        PsnTranslateAccelerator => PSN_TRANSLATEACCELERATOR: PSHNOTIFY,
        PsnWizBack => PSN_WIZBACK: PSHNOTIFY,
        PsnWizFinish => PSN_WIZFINISH: PSHNOTIFY,
        PsnWizNext => PSN_WIZNEXT: PSHNOTIFY,

        HdnBeginDrag => HDN_BEGINDRAG: NMHEADERW,
        HdnBeginFilterEdit => HDN_BEGINFILTEREDIT: NMHEADERW,
        HdnBeginTrack => HDN_BEGINTRACKW: NMHEADERW,
        HdnDividerDblClick => HDN_DIVIDERDBLCLICKW: NMHEADERW,
        HdnDropDown => HDN_DROPDOWN: NMHEADERW,
        HdnEndDrag => HDN_ENDDRAG: NMHEADERW,
        HdnEndFilterEdit => HDN_ENDFILTEREDIT: NMHEADERW,
        HdnEndTrack => HDN_ENDTRACKW: NMHEADERW,
        HdnFilterBtnClick => HDN_FILTERBTNCLICK: NMHDFILTERBTNCLICK,
        HdnFilterChange => HDN_FILTERCHANGE: NMHEADERW,
        HdnGetDispInfo => HDN_GETDISPINFOW: NMHDDISPINFOW,
        HdnItemChanged => HDN_ITEMCHANGEDW: NMHEADERW,
        HdnItemChanging => HDN_ITEMCHANGINGW: NMHEADERW,
        HdnItemClick => HDN_ITEMCLICKW: NMHEADERW,
        HdnItemDblClick => HDN_ITEMDBLCLICKW: NMHEADERW,
        HdnItemKeyDown => HDN_ITEMKEYDOWN: NMHEADERW,
        HdnItemStateIconClick => HDN_ITEMSTATEICONCLICK: NMHEADERW,
        HdnOverflowClick => HDN_OVERFLOWCLICK: NMHEADERW,
        HdnTrack => HDN_TRACKW: NMHEADERW,

        TvnSelChanged => TVN_SELCHANGEDW: NMTREEVIEWW,

        DtnDateTimeChange => DTN_DATETIMECHANGE: NMDATETIMECHANGE,
        DtnFormat => DTN_FORMATW: NMDATETIMEFORMATW,
        DtnFormatQuery => DTN_FORMATQUERYW: NMDATETIMEFORMATQUERYW,
        DtnUserString => DTN_USERSTRINGW: NMDATETIMESTRINGW,
        DtnWmKeyDown => DTN_WMKEYDOWNW: NMDATETIMEWMKEYDOWNW,

        McnGetDayState => MCN_GETDAYSTATE: NMDAYSTATE,
        McnSelChange => MCN_SELCHANGE: NMSELCHANGE,
        McnSelect => MCN_SELECT: NMSELCHANGE,
        McnViewChange => MCN_VIEWCHANGE: NMVIEWCHANGE,

        CbenDeleteItem => CBEN_DELETEITEM: NMCOMBOBOXEXW,
        CbenDragBegin => CBEN_DRAGBEGINW: NMCBEDRAGBEGINW,
        CbenEndEdit => CBEN_ENDEDITW: NMCBEENDEDITW,

        IpnFieldChanged => IPN_FIELDCHANGED: NMIPADDRESS,

        PgnCalcSize => PGN_CALCSIZE: NMPGCALCSIZE,
        PgnHotItemChange => PGN_HOTITEMCHANGE: NMPGHOTITEM,
        PgnScroll => PGN_SCROLL: NMPGSCROLL,

        BcnDropDown => BCN_DROPDOWN: NMBCDROPDOWN,
        BcnHotItemChange => BCN_HOTITEMCHANGE: NMBCHOTITEM,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_of<M: Message>() -> u32 {
        M::ID
    }

    #[test]
    fn markers_carry_documented_identifiers() {
        assert_eq!(id_of::<WmCommand>(), 0x0111);
        assert_eq!(id_of::<WmNcCreate>(), 0x0081);
        assert_eq!(id_of::<WmNcDestroy>(), 0x0082);
        assert_eq!(id_of::<WmNotify>(), 0x004E);
        assert_eq!(id_of::<WmAny<{ WM_APP + 5 }>>(), WM_APP + 5);
    }

    #[test]
    fn clipboard_menu_and_power_markers_carry_their_identifiers() {
        assert_eq!(id_of::<WmSettingChange>(), 0x001A);
        assert_eq!(id_of::<WmNextDlgCtl>(), 0x0028);
        assert_eq!(id_of::<WmUninitMenuPopup>(), 0x0125);
        assert_eq!(id_of::<WmPowerBroadcast>(), 0x0218);
        assert_eq!(id_of::<WmChangeCbChain>(), 0x030D);
        assert_eq!(id_of::<WmHotKey>(), 0x0312);
    }

    #[test]
    fn scroll_clipboard_markers_share_a_view() {
        let raw = MessageParams::new(0x20, (7 << 16) | 3);
        let h = <WmHScrollClipboard as Message>::Params::from_params(&raw);
        let v = <WmVScrollClipboard as Message>::Params::from_params(&raw);
        assert_eq!(h.scroll_pos(), v.scroll_pos());
        assert_eq!(h.scroll_event(), 3);
    }

    #[test]
    fn mapped_view_decodes_the_message_words() {
        let raw = MessageParams::new(SIZE_MINIMIZED, 0);
        let view = <WmSize as Message>::Params::from_params(&raw);
        assert!(view.is_minimized());
    }

    #[test]
    fn notification_codes_are_the_negative_control_codes() {
        assert_eq!(<notify::Click as Notification>::CODE, (-2i32) as u32);
        assert_eq!(<notify::CustomDraw as Notification>::CODE, (-12i32) as u32);
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn control_notifications_use_the_wide_codes() {
        assert_eq!(<notify::ItemClick as Notification>::CODE, NM_CLICK);
        assert_eq!(<notify::LvnGetDispInfo as Notification>::CODE, (-177i32) as u32);
        assert_eq!(<notify::HdnItemClick as Notification>::CODE, (-322i32) as u32);
        assert_eq!(<notify::McnSelect as Notification>::CODE, (-746i32) as u32);
        assert_eq!(<notify::BcnHotItemChange as Notification>::CODE, (-1249i32) as u32);
    }
}
