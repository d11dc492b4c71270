/*
 * Typed, zero-copy views over the two message words.
 *
 * `MessageParams` is the raw (wparam, lparam) pair exactly as the OS delivers
 * it. Every view type below is a `#[repr(transparent)]` wrapper around it, so a
 * `&MessageParams` can be reinterpreted in place as `&SizeParams`,
 * `&CommandParams`, ... without copying. The accessors only mask, shift or
 * reinterpret the words; they never dereference anything. Accessors that
 * follow an embedded structure pointer are `unsafe` and the caller vouches
 * that the OS populated it for this message.
 *
 * Which view belongs to which message identifier is decided in
 * `message_traits`; this module only knows how to decode a layout.
 */
use crate::messages::{
    ENDSESSION_CLOSEAPP, ENDSESSION_CRITICAL, ENDSESSION_LOGOFF, GWL_EXSTYLE, GWL_STYLE,
    HOTKEYF_ALT, HOTKEYF_CONTROL, HOTKEYF_EXT, HOTKEYF_SHIFT, ICON_BIG, ICON_SMALL, ICON_SMALL2,
    IDHOT_SNAPDESKTOP, IDHOT_SNAPWINDOW, INPUTLANGCHANGE_BACKWARD, INPUTLANGCHANGE_FORWARD,
    INPUTLANGCHANGE_SYSCHARSET, MF_BITMAP, MF_CHECKED, MF_DISABLED, MF_GRAYED, MF_HILITE,
    MF_MOUSESELECT, MF_OWNERDRAW, MF_POPUP, MF_SYSMENU, MK_CONTROL, MK_LBUTTON, MK_MBUTTON,
    MK_RBUTTON, MK_SHIFT, MK_XBUTTON1, MK_XBUTTON2, MOD_ALT, MOD_CONTROL, MOD_SHIFT, MOD_WIN,
    MSGF_MENU, NF_QUERY, NF_REQUERY, PBT_APMPOWERSTATUSCHANGE, PBT_APMRESUMEAUTOMATIC,
    PBT_APMSUSPEND, PBT_POWERSETTINGCHANGE, SIZE_MAXHIDE, SIZE_MAXIMIZED, SIZE_MAXSHOW,
    SIZE_MINIMIZED, SIZE_RESTORED, SW_OTHERUNZOOM, SW_OTHERZOOM, SW_PARENTCLOSING,
    SW_PARENTOPENING, WA_ACTIVE, WA_CLICKACTIVE, WA_INACTIVE,
};
use crate::types::{
    Hdc, Hdrop, Hfont, Hicon, Hinstance, Hkl, Hmenu, Hrgn, Hwnd, LParam, Point, Rect, Size,
    WParam, hiword, lobyte, loword, make_long,
};

use std::ffi::c_void;

/// The raw payload of one window message.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageParams {
    pub wparam: WParam,
    pub lparam: LParam,
}

impl MessageParams {
    pub fn new(wparam: usize, lparam: isize) -> Self {
        Self {
            wparam: WParam(wparam),
            lparam: LParam(lparam),
        }
    }
}

/// A typed interpretation of [`MessageParams`].
///
/// # Safety
///
/// Implementors must be `#[repr(transparent)]` wrappers around
/// `MessageParams` (or `MessageParams` itself) so the pointer casts in the
/// provided methods reinterpret the same two words.
pub unsafe trait MessageView: Sized + 'static {
    fn from_params(params: &MessageParams) -> &Self {
        // SAFETY: the trait contract guarantees `Self` has the layout of
        // `MessageParams`; the lifetime is carried over unchanged.
        unsafe { &*(params as *const MessageParams).cast::<Self>() }
    }

    fn from_params_mut(params: &mut MessageParams) -> &mut Self {
        // SAFETY: as above; exclusivity is inherited from `params`.
        unsafe { &mut *(params as *mut MessageParams).cast::<Self>() }
    }

    fn params(&self) -> &MessageParams {
        // SAFETY: inverse of `from_params`.
        unsafe { &*(self as *const Self).cast::<MessageParams>() }
    }
}

// SAFETY: identity.
unsafe impl MessageView for MessageParams {}

/*
 * Declares view types. Each one gets the layout guarantee, a compile-time
 * size check, raw-word shorthands and `Deref` to the base words.
 */
macro_rules! views {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[repr(transparent)]
            #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
            pub struct $name(MessageParams);

            // SAFETY: `#[repr(transparent)]` over `MessageParams`.
            unsafe impl MessageView for $name {}

            const _: () = assert!(
                std::mem::size_of::<$name>() == std::mem::size_of::<MessageParams>()
            );

            impl $name {
                #[allow(dead_code)]
                #[inline]
                fn w(&self) -> usize {
                    self.0.wparam.0
                }

                #[allow(dead_code)]
                #[inline]
                fn l(&self) -> isize {
                    self.0.lparam.0
                }
            }

            impl From<MessageParams> for $name {
                fn from(params: MessageParams) -> Self {
                    $name(params)
                }
            }

            impl std::ops::Deref for $name {
                type Target = MessageParams;

                fn deref(&self) -> &MessageParams {
                    &self.0
                }
            }
        )+
    };
}

#[inline]
fn point_from_lparam(lparam: isize) -> Point {
    let raw = lparam as usize;
    Point {
        x: loword(raw) as i16 as i32,
        y: hiword(raw) as i16 as i32,
    }
}

#[inline]
fn size_from_lparam(lparam: isize) -> Size {
    let raw = lparam as usize;
    Size {
        cx: loword(raw) as i32,
        cy: hiword(raw) as i32,
    }
}

/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated UTF-16 string.
unsafe fn wide_str_lossy(ptr: *const u16) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    let mut len = 0usize;
    // SAFETY: the caller guarantees NUL termination, so every read up to and
    // including the terminator is in bounds.
    unsafe {
        while *ptr.add(len) != 0 {
            len += 1;
        }
        Some(String::from_utf16_lossy(std::slice::from_raw_parts(ptr, len)))
    }
}

// ── Embedded structure mirrors ────────────────────────────────────────────────
// Layout-identical to the Win32 structures of the same purpose.

/// `CREATESTRUCTW`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CreateStruct {
    pub create_params: *mut c_void,
    pub instance: Hinstance,
    pub menu: Hmenu,
    pub parent: Hwnd,
    pub cy: i32,
    pub cx: i32,
    pub y: i32,
    pub x: i32,
    pub style: i32,
    pub name: *const u16,
    pub class_name: *const u16,
    pub ex_style: u32,
}

impl Default for CreateStruct {
    fn default() -> Self {
        Self {
            create_params: std::ptr::null_mut(),
            instance: Hinstance::default(),
            menu: Hmenu::default(),
            parent: Hwnd::NULL,
            cy: 0,
            cx: 0,
            y: 0,
            x: 0,
            style: 0,
            name: std::ptr::null(),
            class_name: std::ptr::null(),
            ex_style: 0,
        }
    }
}

/// `NMHDR`, the header every `WM_NOTIFY` payload starts with.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NmHdr {
    pub hwnd_from: Hwnd,
    pub id_from: usize,
    pub code: u32,
}

/// `NMCUSTOMDRAW`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct NmCustomDraw {
    pub hdr: NmHdr,
    pub draw_stage: u32,
    pub hdc: Hdc,
    pub rc: Rect,
    pub item_spec: usize,
    pub item_state: u32,
    pub item_lparam: isize,
}

/// `MINMAXINFO`.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MinMaxInfo {
    pub reserved: Point,
    pub max_size: Point,
    pub max_position: Point,
    pub min_track_size: Point,
    pub max_track_size: Point,
}

/// `WINDOWPOS`.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WindowPos {
    pub hwnd: Hwnd,
    pub hwnd_insert_after: Hwnd,
    pub x: i32,
    pub y: i32,
    pub cx: i32,
    pub cy: i32,
    pub flags: u32,
}

/// `NCCALCSIZE_PARAMS`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct NcCalcSizeInfo {
    pub rgrc: [Rect; 3],
    pub window_pos: *mut WindowPos,
}

/// `COPYDATASTRUCT`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CopyDataStruct {
    pub data: usize,
    pub cb_data: u32,
    pub lp_data: *mut c_void,
}

/// `STYLESTRUCT`.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StyleStruct {
    pub old_style: u32,
    pub new_style: u32,
}

// ── Decoded flag sets ─────────────────────────────────────────────────────────

/// Mouse-key state carried in the low word of WPARAM by mouse messages.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MouseKeys(pub u16);

impl MouseKeys {
    pub fn has_ctrl(self) -> bool {
        self.0 & MK_CONTROL != 0
    }
    pub fn has_shift(self) -> bool {
        self.0 & MK_SHIFT != 0
    }
    pub fn has_left_btn(self) -> bool {
        self.0 & MK_LBUTTON != 0
    }
    pub fn has_middle_btn(self) -> bool {
        self.0 & MK_MBUTTON != 0
    }
    pub fn has_right_btn(self) -> bool {
        self.0 & MK_RBUTTON != 0
    }
    pub fn has_xbtn1(self) -> bool {
        self.0 & MK_XBUTTON1 != 0
    }
    pub fn has_xbtn2(self) -> bool {
        self.0 & MK_XBUTTON2 != 0
    }
}

/// Keystroke flags carried in LPARAM by keyboard and character messages.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeystrokeFlags(pub isize);

impl KeystrokeFlags {
    pub fn repeat_count(self) -> u16 {
        loword(self.0 as usize)
    }
    pub fn scan_code(self) -> u8 {
        lobyte(hiword(self.0 as usize))
    }
    pub fn is_extended_key(self) -> bool {
        (self.0 >> 24) & 1 != 0
    }
    pub fn has_alt_key(self) -> bool {
        (self.0 >> 29) & 1 != 0
    }
    pub fn key_previously_down(self) -> bool {
        (self.0 >> 30) & 1 != 0
    }
    pub fn key_being_released(self) -> bool {
        (self.0 >> 31) & 1 != 0
    }
}

// ── Views ─────────────────────────────────────────────────────────────────────

views!(
    /// Messages whose LPARAM packs a signed client or screen position.
    PosParams,
    /// `WM_COMMAND`.
    CommandParams,
    /// `WM_NOTIFY`.
    NotifyParams,
    /// `WM_ACTIVATE`.
    ActivateParams,
    /// `WM_ACTIVATEAPP`.
    ActivateAppParams,
    /// `WM_CAPTURECHANGED`.
    CaptureChangedParams,
    /// `WM_CHAR` and the dead/system character variants.
    CharParams,
    /// `WM_CONTEXTMENU`.
    ContextMenuParams,
    /// `WM_COPYDATA`.
    CopyDataParams,
    /// `WM_CREATE` and `WM_NCCREATE`.
    CreateParams,
    /// `WM_CTLCOLOR*`.
    CtlColorParams,
    /// `WM_DISPLAYCHANGE`.
    DisplayChangeParams,
    /// `WM_DRAWITEM`.
    DrawItemParams,
    /// `WM_DROPFILES`.
    DropFilesParams,
    /// `WM_ENABLE`.
    EnableParams,
    /// `WM_ENDSESSION`.
    EndSessionParams,
    /// `WM_QUERYENDSESSION`.
    QueryEndSessionParams,
    /// `WM_ERASEBKGND`.
    EraseBkgndParams,
    /// `WM_GETDLGCODE`.
    GetDlgCodeParams,
    /// `WM_GETICON`.
    GetIconParams,
    /// `WM_GETMINMAXINFO`.
    GetMinMaxInfoParams,
    /// `WM_GETTEXT`.
    GetTextParams,
    /// `WM_HELP`.
    HelpParams,
    /// `WM_HSCROLL` / `WM_VSCROLL`.
    ScrollParams,
    /// `WM_INITDIALOG`.
    InitDialogParams,
    /// `WM_INITMENU`.
    InitMenuParams,
    /// `WM_INITMENUPOPUP`.
    InitMenuPopupParams,
    /// `WM_KEYDOWN`, `WM_KEYUP` and the system-key variants.
    KeyParams,
    /// `WM_KILLFOCUS`.
    KillFocusParams,
    /// `WM_SETFOCUS`.
    SetFocusParams,
    /// Client-area mouse button and move messages.
    MouseParams,
    /// `WM_MOUSEWHEEL`.
    MouseWheelParams,
    /// `WM_MEASUREITEM`.
    MeasureItemParams,
    /// `WM_MENUSELECT`.
    MenuSelectParams,
    /// `WM_MENUCHAR`.
    MenuCharParams,
    /// `WM_MOUSEACTIVATE`.
    MouseActivateParams,
    /// `WM_MOVING`.
    MovingParams,
    /// `WM_SIZING`.
    SizingParams,
    /// `WM_NCACTIVATE`.
    NcActivateParams,
    /// `WM_NCCALCSIZE`.
    NcCalcSizeParams,
    /// Non-client mouse messages.
    NcMouseParams,
    /// `WM_NCPAINT`.
    NcPaintParams,
    /// `WM_NOTIFYFORMAT`.
    NotifyFormatParams,
    /// `WM_PARENTNOTIFY`.
    ParentNotifyParams,
    /// `WM_PRINT` / `WM_PRINTCLIENT`.
    PrintParams,
    /// `WM_SETCURSOR`.
    SetCursorParams,
    /// `WM_SETFONT`.
    SetFontParams,
    /// `WM_SETICON`.
    SetIconParams,
    /// `WM_SETREDRAW`.
    SetRedrawParams,
    /// `WM_SETTEXT`.
    SetTextParams,
    /// `WM_SHOWWINDOW`.
    ShowWindowParams,
    /// `WM_SIZE`.
    SizeParams,
    /// `WM_STYLECHANGED` / `WM_STYLECHANGING`.
    StyleChangedParams,
    /// `WM_SYSCOMMAND`.
    SysCommandParams,
    /// `WM_TIMER`.
    TimerParams,
    /// `WM_WINDOWPOSCHANGED` / `WM_WINDOWPOSCHANGING`.
    WindowPosParams,
    /// `WM_QUIT`.
    QuitParams,
    /// `WM_DPICHANGED`.
    DpiChangedParams,
    /// `WM_INPUTLANGCHANGE`.
    InputLangParams,
    /// `WM_INPUTLANGCHANGEREQUEST`.
    InputLangChangeRequestParams,
    /// `WM_ASKCBFORMATNAME`.
    AskCbFormatNameParams,
    /// `WM_CHANGECBCHAIN`.
    ChangeCbChainParams,
    /// `WM_CHARTOITEM`.
    CharToItemParams,
    /// `WM_VKEYTOITEM`.
    VKeyToItemParams,
    /// `WM_COMPACTING`.
    CompactingParams,
    /// `WM_COMPAREITEM`.
    CompareItemParams,
    /// `WM_DELETEITEM`.
    DeleteItemParams,
    /// `WM_DEVMODECHANGE`.
    DevModeChangeParams,
    /// `WM_ENTERIDLE`.
    EnterIdleParams,
    /// `WM_ENTERMENULOOP`.
    EnterMenuLoopParams,
    /// `WM_EXITMENULOOP`.
    ExitMenuLoopParams,
    /// `WM_HOTKEY`.
    HotKeyParams,
    /// `WM_SETHOTKEY`.
    SetHotKeyParams,
    /// `WM_HSCROLLCLIPBOARD` / `WM_VSCROLLCLIPBOARD`.
    ClipboardScrollParams,
    /// `WM_PAINTCLIPBOARD`.
    PaintClipboardParams,
    /// `WM_SIZECLIPBOARD`.
    SizeClipboardParams,
    /// `WM_RENDERFORMAT`.
    RenderFormatParams,
    /// `WM_ICONERASEBKGND`.
    IconEraseBkgndParams,
    /// `WM_MDIACTIVATE`.
    MdiActivateParams,
    /// `WM_MENUDRAG`.
    MenuDragParams,
    /// `WM_MENUGETOBJECT`.
    MenuGetObjectParams,
    /// `WM_MENURBUTTONUP`.
    MenuRButtonUpParams,
    /// `WM_UNINITMENUPOPUP`.
    UninitMenuPopupParams,
    /// `WM_NEXTDLGCTL`.
    NextDlgCtlParams,
    /// `WM_NEXTMENU`.
    NextMenuParams,
    /// `WM_PALETTECHANGED` / `WM_PALETTEISCHANGING`.
    PaletteChangedParams,
    /// `WM_POWERBROADCAST`.
    PowerBroadcastParams,
    /// `WM_SETTINGCHANGE`.
    SettingChangeParams,
    /// `WM_SPOOLERSTATUS`.
    SpoolerStatusParams,
    /// `WM_TCARD`.
    TCardParams,
);

pub type CloseParams = MessageParams;
pub type DestroyParams = MessageParams;
pub type NcDestroyParams = MessageParams;
pub type PaintParams = MessageParams;
pub type MoveParams = PosParams;
pub type NcHitTestParams = PosParams;
pub type NcCreateParams = CreateParams;
pub type DeadCharParams = CharParams;
pub type SysCharParams = CharParams;
pub type SysDeadCharParams = CharParams;
pub type KeyDownParams = KeyParams;
pub type KeyUpParams = KeyParams;
pub type SysKeyDownParams = KeyParams;
pub type SysKeyUpParams = KeyParams;
pub type HScrollParams = ScrollParams;
pub type VScrollParams = ScrollParams;
pub type PrintClientParams = PrintParams;
pub type StyleChangingParams = StyleChangedParams;
pub type WindowPosChangedParams = WindowPosParams;
pub type WindowPosChangingParams = WindowPosParams;
pub type HScrollClipboardParams = ClipboardScrollParams;
pub type VScrollClipboardParams = ClipboardScrollParams;
pub type PaletteIsChangingParams = PaletteChangedParams;

impl PosParams {
    pub fn pos(&self) -> Point {
        point_from_lparam(self.l())
    }
}

impl CommandParams {
    /// A zero high word means the command came from a menu.
    pub fn is_from_menu(&self) -> bool {
        hiword(self.w()) == 0
    }
    pub fn is_from_accelerator(&self) -> bool {
        hiword(self.w()) == 1
    }
    pub fn is_from_control(&self) -> bool {
        !self.is_from_menu() && !self.is_from_accelerator()
    }
    pub fn id(&self) -> u16 {
        loword(self.w())
    }
    pub fn control_notif_code(&self) -> u16 {
        hiword(self.w())
    }
    pub fn control_hwnd(&self) -> Hwnd {
        Hwnd(self.l() as *mut c_void)
    }
}

impl NotifyParams {
    pub fn nmhdr_ptr(&self) -> *mut NmHdr {
        self.l() as *mut NmHdr
    }

    /// # Safety
    ///
    /// LPARAM must be null or point to a live `NMHDR`-prefixed structure,
    /// which the OS guarantees for genuine `WM_NOTIFY` deliveries.
    pub unsafe fn nmhdr(&self) -> Option<&NmHdr> {
        // SAFETY: forwarded to the caller.
        unsafe { self.nmhdr_ptr().as_ref() }
    }
}

impl ActivateParams {
    pub fn is_being_activated(&self) -> bool {
        loword(self.w()) as usize != WA_INACTIVE
    }
    pub fn activated_not_by_mouse_click(&self) -> bool {
        loword(self.w()) as usize == WA_ACTIVE
    }
    pub fn activated_by_mouse_click(&self) -> bool {
        loword(self.w()) as usize == WA_CLICKACTIVE
    }
    pub fn is_minimized(&self) -> bool {
        hiword(self.w()) != 0
    }
    pub fn swapped_window(&self) -> Hwnd {
        Hwnd(self.l() as *mut c_void)
    }
}

impl ActivateAppParams {
    pub fn is_being_activated(&self) -> bool {
        self.w() != 0
    }
    pub fn thread_id(&self) -> u32 {
        self.l() as u32
    }
}

impl CaptureChangedParams {
    pub fn window_gaining_mouse(&self) -> Hwnd {
        Hwnd(self.l() as *mut c_void)
    }
}

impl CharParams {
    pub fn char_code(&self) -> u16 {
        self.w() as u16
    }
    pub fn flags(&self) -> KeystrokeFlags {
        KeystrokeFlags(self.l())
    }
}

impl ContextMenuParams {
    pub fn target(&self) -> Hwnd {
        Hwnd(self.w() as *mut c_void)
    }
    /// Screen coordinates; (-1, -1) when invoked from the keyboard.
    pub fn pos(&self) -> Point {
        point_from_lparam(self.l())
    }
}

impl CopyDataParams {
    pub fn sender(&self) -> Hwnd {
        Hwnd(self.w() as *mut c_void)
    }
    pub fn copy_data_ptr(&self) -> *mut CopyDataStruct {
        self.l() as *mut CopyDataStruct
    }
}

impl CreateParams {
    pub fn create_struct_ptr(&self) -> *mut CreateStruct {
        self.l() as *mut CreateStruct
    }

    /// # Safety
    ///
    /// LPARAM must be null or point to the live `CREATESTRUCTW` the OS passed
    /// with this message.
    pub unsafe fn create_struct(&self) -> Option<&CreateStruct> {
        // SAFETY: forwarded to the caller.
        unsafe { self.create_struct_ptr().as_ref() }
    }
}

impl CtlColorParams {
    pub fn hdc(&self) -> Hdc {
        Hdc(self.w() as *mut c_void)
    }
    pub fn hctl(&self) -> Hwnd {
        Hwnd(self.l() as *mut c_void)
    }
}

impl DisplayChangeParams {
    pub fn bits_per_pixel(&self) -> u32 {
        self.w() as u32
    }
    pub fn size(&self) -> Size {
        size_from_lparam(self.l())
    }
}

impl DrawItemParams {
    pub fn control_id(&self) -> u16 {
        self.w() as u16
    }
    pub fn is_from_menu(&self) -> bool {
        self.control_id() == 0
    }
    pub fn draw_item_ptr(&self) -> *mut c_void {
        self.l() as *mut c_void
    }
    #[cfg(target_os = "windows")]
    pub fn draw_item_struct(&self) -> *mut windows::Win32::UI::Controls::DRAWITEMSTRUCT {
        self.draw_item_ptr().cast()
    }
}

impl DropFilesParams {
    pub fn hdrop(&self) -> Hdrop {
        Hdrop(self.w() as *mut c_void)
    }
}

impl EnableParams {
    pub fn has_been_enabled(&self) -> bool {
        self.w() != 0
    }
}

impl EndSessionParams {
    pub fn is_session_being_ended(&self) -> bool {
        self.w() != 0
    }
    pub fn is_system_issue(&self) -> bool {
        self.l() & ENDSESSION_CLOSEAPP != 0
    }
    pub fn is_forced_critical(&self) -> bool {
        self.l() & ENDSESSION_CRITICAL != 0
    }
    pub fn is_logoff(&self) -> bool {
        self.l() & ENDSESSION_LOGOFF != 0
    }
    pub fn is_shutdown(&self) -> bool {
        self.l() == 0
    }
}

impl QueryEndSessionParams {
    pub fn is_system_issue(&self) -> bool {
        self.l() & ENDSESSION_CLOSEAPP != 0
    }
    pub fn is_forced_critical(&self) -> bool {
        self.l() & ENDSESSION_CRITICAL != 0
    }
    pub fn is_logoff(&self) -> bool {
        self.l() & ENDSESSION_LOGOFF != 0
    }
    pub fn is_shutdown(&self) -> bool {
        self.l() == 0
    }
}

impl EraseBkgndParams {
    pub fn hdc(&self) -> Hdc {
        Hdc(self.w() as *mut c_void)
    }
}

impl GetDlgCodeParams {
    pub fn vkey_code(&self) -> u8 {
        self.w() as u8
    }
    pub fn is_query(&self) -> bool {
        self.l() == 0
    }
    /// The `MSG` being processed, or null for a plain query.
    pub fn msg_ptr(&self) -> *const c_void {
        self.l() as *const c_void
    }
}

impl GetIconParams {
    pub fn is_big(&self) -> bool {
        self.w() == ICON_BIG
    }
    pub fn is_small(&self) -> bool {
        self.w() == ICON_SMALL
    }
    pub fn is_small_app(&self) -> bool {
        self.w() == ICON_SMALL2
    }
    pub fn dpi(&self) -> u32 {
        self.l() as u32
    }
}

impl GetMinMaxInfoParams {
    pub fn min_max_info_ptr(&self) -> *mut MinMaxInfo {
        self.l() as *mut MinMaxInfo
    }
}

impl GetTextParams {
    pub fn buffer_size(&self) -> u32 {
        self.w() as u32
    }
    pub fn buffer(&self) -> *mut u16 {
        self.l() as *mut u16
    }
}

impl HelpParams {
    pub fn help_info_ptr(&self) -> *mut c_void {
        self.l() as *mut c_void
    }
}

impl ScrollParams {
    pub fn scroll_request(&self) -> u16 {
        loword(self.w())
    }
    pub fn scroll_pos(&self) -> u16 {
        hiword(self.w())
    }
    pub fn scrollbar(&self) -> Hwnd {
        Hwnd(self.l() as *mut c_void)
    }
}

impl InitDialogParams {
    pub fn focused_ctrl(&self) -> Hwnd {
        Hwnd(self.w() as *mut c_void)
    }
    /// The caller-supplied initialization value.
    pub fn init_param(&self) -> isize {
        self.l()
    }
}

impl InitMenuParams {
    pub fn hmenu(&self) -> Hmenu {
        Hmenu(self.w() as *mut c_void)
    }
}

impl InitMenuPopupParams {
    pub fn hmenu(&self) -> Hmenu {
        Hmenu(self.w() as *mut c_void)
    }
    pub fn relative_pos(&self) -> i16 {
        loword(self.l() as usize) as i16
    }
    pub fn is_window_menu(&self) -> bool {
        hiword(self.l() as usize) != 0
    }
}

impl KeyParams {
    pub fn vkey_code(&self) -> u8 {
        self.w() as u8
    }
    pub fn flags(&self) -> KeystrokeFlags {
        KeystrokeFlags(self.l())
    }
}

impl KillFocusParams {
    /// Window receiving the focus, possibly null.
    pub fn focused_window(&self) -> Hwnd {
        Hwnd(self.w() as *mut c_void)
    }
}

impl SetFocusParams {
    /// Window that lost the focus, possibly null.
    pub fn unfocused_window(&self) -> Hwnd {
        Hwnd(self.w() as *mut c_void)
    }
}

impl MouseParams {
    pub fn pos(&self) -> Point {
        point_from_lparam(self.l())
    }
    pub fn keys(&self) -> MouseKeys {
        MouseKeys(self.w() as u16)
    }
}

impl MouseWheelParams {
    pub fn wheel_delta(&self) -> i16 {
        hiword(self.w()) as i16
    }
    pub fn keys(&self) -> MouseKeys {
        MouseKeys(loword(self.w()))
    }
    /// Screen coordinates of the pointer.
    pub fn pos(&self) -> Point {
        point_from_lparam(self.l())
    }
}

impl MeasureItemParams {
    pub fn control_id(&self) -> u16 {
        self.w() as u16
    }
    pub fn measure_item_ptr(&self) -> *mut c_void {
        self.l() as *mut c_void
    }
    #[cfg(target_os = "windows")]
    pub fn measure_item_struct(&self) -> *mut windows::Win32::UI::Controls::MEASUREITEMSTRUCT {
        self.measure_item_ptr().cast()
    }
}

impl MenuSelectParams {
    fn menu_flags(&self) -> u16 {
        hiword(self.w())
    }
    pub fn item(&self) -> u16 {
        loword(self.w())
    }
    pub fn has_bitmap(&self) -> bool {
        self.menu_flags() & MF_BITMAP != 0
    }
    pub fn is_checked(&self) -> bool {
        self.menu_flags() & MF_CHECKED != 0
    }
    pub fn is_disabled(&self) -> bool {
        self.menu_flags() & MF_DISABLED != 0
    }
    pub fn is_grayed(&self) -> bool {
        self.menu_flags() & MF_GRAYED != 0
    }
    pub fn is_highlighted(&self) -> bool {
        self.menu_flags() & MF_HILITE != 0
    }
    pub fn mouse_selected(&self) -> bool {
        self.menu_flags() & MF_MOUSESELECT != 0
    }
    pub fn is_owner_draw(&self) -> bool {
        self.menu_flags() & MF_OWNERDRAW != 0
    }
    pub fn opens_popup(&self) -> bool {
        self.menu_flags() & MF_POPUP != 0
    }
    pub fn is_sysmenu(&self) -> bool {
        self.menu_flags() & MF_SYSMENU != 0
    }
    pub fn system_has_closed(&self) -> bool {
        self.menu_flags() == 0xFFFF && self.l() == 0
    }
    /// The menu holding the item, when the flags say it is a popup or the
    /// window menu. `None` once the menu has closed.
    pub fn hmenu(&self) -> Option<Hmenu> {
        let flagged = self.opens_popup() || self.is_sysmenu();
        (flagged && !self.system_has_closed() && self.l() != 0)
            .then(|| Hmenu(self.l() as *mut c_void))
    }
}

impl MenuCharParams {
    pub fn char_code(&self) -> u16 {
        loword(self.w())
    }
    pub fn is_window_menu(&self) -> bool {
        hiword(self.w()) == MF_SYSMENU
    }
    pub fn hmenu(&self) -> Hmenu {
        Hmenu(self.l() as *mut c_void)
    }
}

impl MouseActivateParams {
    pub fn top_level(&self) -> Hwnd {
        Hwnd(self.w() as *mut c_void)
    }
    pub fn hit_test_code(&self) -> i16 {
        loword(self.l() as usize) as i16
    }
    pub fn mouse_msg_id(&self) -> u16 {
        hiword(self.l() as usize)
    }
}

impl MovingParams {
    pub fn screen_rect_ptr(&self) -> *mut Rect {
        self.l() as *mut Rect
    }
}

impl SizingParams {
    pub fn edge(&self) -> u16 {
        self.w() as u16
    }
    pub fn screen_rect_ptr(&self) -> *mut Rect {
        self.l() as *mut Rect
    }
}

impl NcActivateParams {
    pub fn is_active(&self) -> bool {
        self.w() != 0
    }
}

impl NcCalcSizeParams {
    /// TRUE in WPARAM: LPARAM points to `NCCALCSIZE_PARAMS`; otherwise to a `RECT`.
    pub fn is_nccalcsize(&self) -> bool {
        self.w() != 0
    }
    pub fn is_rect(&self) -> bool {
        self.w() == 0
    }
    pub fn info_ptr(&self) -> *mut NcCalcSizeInfo {
        self.l() as *mut NcCalcSizeInfo
    }
    pub fn rect_ptr(&self) -> *mut Rect {
        self.l() as *mut Rect
    }
}

impl NcMouseParams {
    pub fn hit_test_code(&self) -> i16 {
        self.w() as i16
    }
    pub fn pos(&self) -> Point {
        point_from_lparam(self.l())
    }
}

impl NcPaintParams {
    pub fn hrgn(&self) -> Hrgn {
        Hrgn(self.w() as *mut c_void)
    }
}

impl NotifyFormatParams {
    pub fn window_from(&self) -> Hwnd {
        Hwnd(self.w() as *mut c_void)
    }
    pub fn is_query_from_control(&self) -> bool {
        self.l() == NF_QUERY
    }
    pub fn is_requery_to_control(&self) -> bool {
        self.l() == NF_REQUERY
    }
}

impl ParentNotifyParams {
    pub fn event_message(&self) -> u32 {
        loword(self.w()) as u32
    }
    pub fn child_id(&self) -> u16 {
        hiword(self.w())
    }
    pub fn child_hwnd(&self) -> Hwnd {
        Hwnd(self.l() as *mut c_void)
    }
    pub fn pos(&self) -> Point {
        point_from_lparam(self.l())
    }
}

impl PrintParams {
    pub fn hdc(&self) -> Hdc {
        Hdc(self.w() as *mut c_void)
    }
    pub fn set_hdc(&mut self, hdc: Hdc) {
        self.0.wparam = WParam(hdc.0 as usize);
    }
    pub fn flags(&self) -> u32 {
        self.l() as u32
    }
    pub fn set_flags(&mut self, flags: u32) {
        self.0.lparam = LParam(flags as isize);
    }
}

impl SetCursorParams {
    pub fn cursor_owner(&self) -> Hwnd {
        Hwnd(self.w() as *mut c_void)
    }
    pub fn hit_test_code(&self) -> i16 {
        loword(self.l() as usize) as i16
    }
    pub fn mouse_msg_id(&self) -> u16 {
        hiword(self.l() as usize)
    }
}

impl SetFontParams {
    pub fn hfont(&self) -> Hfont {
        Hfont(self.w() as *mut c_void)
    }
    pub fn should_redraw(&self) -> bool {
        loword(self.l() as usize) != 0
    }
    /// Rewrites the redraw flag in the low word, keeping the high word.
    pub fn set_should_redraw(&mut self, redraw: bool) {
        let high = hiword(self.l() as usize);
        self.0.lparam = LParam(make_long(redraw as u16, high) as isize);
    }
}

impl SetIconParams {
    pub fn is_small(&self) -> bool {
        self.w() == ICON_SMALL
    }
    pub fn hicon(&self) -> Hicon {
        Hicon(self.l() as *mut c_void)
    }
    pub fn is_removed(&self) -> bool {
        self.hicon().is_null()
    }
}

impl SetRedrawParams {
    pub fn can_redraw(&self) -> bool {
        self.w() != 0
    }
}

impl SetTextParams {
    pub fn text_ptr(&self) -> *const u16 {
        self.l() as *const u16
    }

    /// # Safety
    ///
    /// LPARAM must be null or point to a NUL-terminated UTF-16 string.
    pub unsafe fn text_lossy(&self) -> Option<String> {
        // SAFETY: forwarded to the caller.
        unsafe { wide_str_lossy(self.text_ptr()) }
    }
}

impl ShowWindowParams {
    pub fn is_being_shown(&self) -> bool {
        self.w() != 0
    }
    pub fn is_other_away(&self) -> bool {
        self.l() == SW_OTHERUNZOOM
    }
    pub fn is_other_over(&self) -> bool {
        self.l() == SW_OTHERZOOM
    }
    pub fn is_owner_being_minimized(&self) -> bool {
        self.l() == SW_PARENTCLOSING
    }
    pub fn is_owner_being_restored(&self) -> bool {
        self.l() == SW_PARENTOPENING
    }
}

impl SizeParams {
    pub fn is_restored(&self) -> bool {
        self.w() == SIZE_RESTORED
    }
    pub fn is_minimized(&self) -> bool {
        self.w() == SIZE_MINIMIZED
    }
    pub fn is_maximized(&self) -> bool {
        self.w() == SIZE_MAXIMIZED
    }
    pub fn is_other_restored(&self) -> bool {
        self.w() == SIZE_MAXSHOW
    }
    pub fn is_other_maximized(&self) -> bool {
        self.w() == SIZE_MAXHIDE
    }
    /// New client-area size.
    pub fn size(&self) -> Size {
        size_from_lparam(self.l())
    }
}

impl StyleChangedParams {
    pub fn is_style(&self) -> bool {
        self.w() as i32 == GWL_STYLE
    }
    pub fn is_ex_style(&self) -> bool {
        self.w() as i32 == GWL_EXSTYLE
    }
    pub fn style_struct_ptr(&self) -> *mut StyleStruct {
        self.l() as *mut StyleStruct
    }
}

impl SysCommandParams {
    pub fn command_type(&self) -> u16 {
        self.w() as u16
    }
    pub fn pos(&self) -> Point {
        point_from_lparam(self.l())
    }
}

impl TimerParams {
    pub fn timer_id(&self) -> usize {
        self.w()
    }
    /// `TIMERPROC` supplied to `SetTimer`, null when none.
    pub fn callback_ptr(&self) -> *const c_void {
        self.l() as *const c_void
    }
}

impl WindowPosParams {
    pub fn window_pos_ptr(&self) -> *mut WindowPos {
        self.l() as *mut WindowPos
    }
}

impl QuitParams {
    pub fn exit_code(&self) -> i32 {
        self.w() as i32
    }
}

impl DpiChangedParams {
    pub fn dpi_x(&self) -> u16 {
        loword(self.w())
    }
    pub fn dpi_y(&self) -> u16 {
        hiword(self.w())
    }
    pub fn suggested_rect_ptr(&self) -> *mut Rect {
        self.l() as *mut Rect
    }

    /// # Safety
    ///
    /// LPARAM must be null or point to the live `RECT` sent with the message.
    pub unsafe fn suggested_rect(&self) -> Option<&Rect> {
        // SAFETY: forwarded to the caller.
        unsafe { self.suggested_rect_ptr().as_ref() }
    }
}

impl InputLangParams {
    pub fn keyboard_layout(&self) -> Hkl {
        Hkl(self.l() as *mut c_void)
    }
    pub fn charset(&self) -> u32 {
        self.w() as u32
    }
}

impl InputLangChangeRequestParams {
    pub fn previous_chosen(&self) -> bool {
        self.w() & INPUTLANGCHANGE_BACKWARD != 0
    }
    pub fn next_chosen(&self) -> bool {
        self.w() & INPUTLANGCHANGE_FORWARD != 0
    }
    pub fn can_be_used_with_sys(&self) -> bool {
        self.w() & INPUTLANGCHANGE_SYSCHARSET != 0
    }
    pub fn keyboard_layout(&self) -> Hkl {
        Hkl(self.l() as *mut c_void)
    }
}

impl AskCbFormatNameParams {
    pub fn buffer_size(&self) -> u32 {
        self.w() as u32
    }
    pub fn buffer(&self) -> *mut u16 {
        self.l() as *mut u16
    }
}

impl ChangeCbChainParams {
    pub fn window_being_removed(&self) -> Hwnd {
        Hwnd(self.w() as *mut c_void)
    }
    pub fn next_window(&self) -> Hwnd {
        Hwnd(self.l() as *mut c_void)
    }
    pub fn is_last_window(&self) -> bool {
        self.next_window().is_null()
    }
}

impl CharToItemParams {
    pub fn char_code(&self) -> u16 {
        loword(self.w())
    }
    pub fn current_caret_pos(&self) -> u16 {
        hiword(self.w())
    }
    pub fn listbox(&self) -> Hwnd {
        Hwnd(self.l() as *mut c_void)
    }
}

impl VKeyToItemParams {
    pub fn vkey_code(&self) -> u8 {
        loword(self.w()) as u8
    }
    pub fn current_caret_pos(&self) -> u16 {
        hiword(self.w())
    }
    pub fn listbox(&self) -> Hwnd {
        Hwnd(self.l() as *mut c_void)
    }
}

impl CompactingParams {
    /// CPU time spent compacting, in 1/0x10000 units.
    pub fn cpu_time_ratio(&self) -> u32 {
        self.w() as u32
    }
}

impl CompareItemParams {
    pub fn control_id(&self) -> u16 {
        self.w() as u16
    }
    pub fn compare_item_ptr(&self) -> *mut c_void {
        self.l() as *mut c_void
    }
    #[cfg(target_os = "windows")]
    pub fn compare_item_struct(&self) -> *mut windows::Win32::UI::Controls::COMPAREITEMSTRUCT {
        self.compare_item_ptr().cast()
    }
}

impl DeleteItemParams {
    pub fn control_id(&self) -> u16 {
        self.w() as u16
    }
    pub fn delete_item_ptr(&self) -> *mut c_void {
        self.l() as *mut c_void
    }
    #[cfg(target_os = "windows")]
    pub fn delete_item_struct(&self) -> *mut windows::Win32::UI::Controls::DELETEITEMSTRUCT {
        self.delete_item_ptr().cast()
    }
}

impl DevModeChangeParams {
    pub fn device_name_ptr(&self) -> *const u16 {
        self.l() as *const u16
    }

    /// # Safety
    ///
    /// LPARAM must be null or point to a NUL-terminated UTF-16 string.
    pub unsafe fn device_name_lossy(&self) -> Option<String> {
        // SAFETY: forwarded to the caller.
        unsafe { wide_str_lossy(self.device_name_ptr()) }
    }
}

impl EnterIdleParams {
    pub fn is_menu_displayed(&self) -> bool {
        self.w() == MSGF_MENU
    }
    /// The dialog box or the window owning the menu.
    pub fn window(&self) -> Hwnd {
        Hwnd(self.l() as *mut c_void)
    }
}

impl EnterMenuLoopParams {
    pub fn uses_track_popup_menu(&self) -> bool {
        self.w() != 0
    }
}

impl ExitMenuLoopParams {
    pub fn is_shortcut_menu(&self) -> bool {
        self.w() != 0
    }
}

impl HotKeyParams {
    pub fn id(&self) -> i32 {
        self.w() as i32
    }
    pub fn is_snap_desktop(&self) -> bool {
        self.w() == IDHOT_SNAPDESKTOP
    }
    pub fn is_snap_window(&self) -> bool {
        self.w() == IDHOT_SNAPWINDOW
    }
    fn modifiers(&self) -> u16 {
        loword(self.l() as usize)
    }
    pub fn has_alt(&self) -> bool {
        self.modifiers() & MOD_ALT != 0
    }
    pub fn has_ctrl(&self) -> bool {
        self.modifiers() & MOD_CONTROL != 0
    }
    pub fn has_shift(&self) -> bool {
        self.modifiers() & MOD_SHIFT != 0
    }
    pub fn has_win(&self) -> bool {
        self.modifiers() & MOD_WIN != 0
    }
    pub fn vkey_code(&self) -> u8 {
        hiword(self.l() as usize) as u8
    }
}

impl SetHotKeyParams {
    pub fn vkey_code(&self) -> u8 {
        loword(self.w()) as u8
    }
    fn modifiers(&self) -> u16 {
        hiword(self.w())
    }
    pub fn has_alt(&self) -> bool {
        self.modifiers() & HOTKEYF_ALT != 0
    }
    pub fn has_ctrl(&self) -> bool {
        self.modifiers() & HOTKEYF_CONTROL != 0
    }
    pub fn has_extended(&self) -> bool {
        self.modifiers() & HOTKEYF_EXT != 0
    }
    pub fn has_shift(&self) -> bool {
        self.modifiers() & HOTKEYF_SHIFT != 0
    }
}

impl ClipboardScrollParams {
    pub fn clipboard_viewer(&self) -> Hwnd {
        Hwnd(self.w() as *mut c_void)
    }
    pub fn scroll_event(&self) -> u16 {
        loword(self.l() as usize)
    }
    pub fn scroll_pos(&self) -> u16 {
        hiword(self.l() as usize)
    }
}

impl PaintClipboardParams {
    pub fn clipboard_viewer(&self) -> Hwnd {
        Hwnd(self.w() as *mut c_void)
    }
    pub fn paint_struct_ptr(&self) -> *const c_void {
        self.l() as *const c_void
    }
    #[cfg(target_os = "windows")]
    pub fn paint_struct(&self) -> *const windows::Win32::Graphics::Gdi::PAINTSTRUCT {
        self.paint_struct_ptr().cast()
    }
}

impl SizeClipboardParams {
    pub fn clipboard_viewer(&self) -> Hwnd {
        Hwnd(self.w() as *mut c_void)
    }
    pub fn clipboard_rect_ptr(&self) -> *const Rect {
        self.l() as *const Rect
    }

    /// # Safety
    ///
    /// LPARAM must be null or point to the live `RECT` sent with the message.
    pub unsafe fn clipboard_rect(&self) -> Option<&Rect> {
        // SAFETY: forwarded to the caller.
        unsafe { self.clipboard_rect_ptr().as_ref() }
    }
}

impl RenderFormatParams {
    pub fn clipboard_format(&self) -> u16 {
        self.w() as u16
    }
}

impl IconEraseBkgndParams {
    pub fn hdc(&self) -> Hdc {
        Hdc(self.w() as *mut c_void)
    }
}

impl MdiActivateParams {
    pub fn deactivated_child(&self) -> Hwnd {
        Hwnd(self.w() as *mut c_void)
    }
    pub fn activated_child(&self) -> Hwnd {
        Hwnd(self.l() as *mut c_void)
    }
}

impl MenuDragParams {
    pub fn initial_pos(&self) -> u32 {
        self.w() as u32
    }
    pub fn hmenu(&self) -> Hmenu {
        Hmenu(self.l() as *mut c_void)
    }
}

impl MenuGetObjectParams {
    pub fn menu_get_object_info_ptr(&self) -> *mut c_void {
        self.l() as *mut c_void
    }
    #[cfg(target_os = "windows")]
    pub fn menu_get_object_info(
        &self,
    ) -> *mut windows::Win32::UI::WindowsAndMessaging::MENUGETOBJECTINFO {
        self.menu_get_object_info_ptr().cast()
    }
}

impl MenuRButtonUpParams {
    pub fn index(&self) -> u32 {
        self.w() as u32
    }
    pub fn hmenu(&self) -> Hmenu {
        Hmenu(self.l() as *mut c_void)
    }
}

impl UninitMenuPopupParams {
    pub fn hmenu(&self) -> Hmenu {
        Hmenu(self.w() as *mut c_void)
    }
    pub fn menu_id(&self) -> u16 {
        hiword(self.l() as usize)
    }
}

impl NextDlgCtlParams {
    /// A non-zero low word of LPARAM means WPARAM names the control.
    pub fn has_ctrl_receiving_focus(&self) -> bool {
        loword(self.l() as usize) != 0
    }
    pub fn ctrl_receiving_focus(&self) -> Option<Hwnd> {
        self.has_ctrl_receiving_focus()
            .then(|| Hwnd(self.w() as *mut c_void))
    }
    pub fn focus_next(&self) -> bool {
        !self.has_ctrl_receiving_focus() && self.w() == 0
    }
}

impl NextMenuParams {
    pub fn vkey_code(&self) -> u8 {
        self.w() as u8
    }
    pub fn mdi_next_menu_ptr(&self) -> *mut c_void {
        self.l() as *mut c_void
    }
    #[cfg(target_os = "windows")]
    pub fn mdi_next_menu(&self) -> *mut windows::Win32::UI::WindowsAndMessaging::MDINEXTMENU {
        self.mdi_next_menu_ptr().cast()
    }
}

impl PaletteChangedParams {
    pub fn window_origin(&self) -> Hwnd {
        Hwnd(self.w() as *mut c_void)
    }
}

impl PowerBroadcastParams {
    pub fn event(&self) -> usize {
        self.w()
    }
    pub fn is_power_status_change(&self) -> bool {
        self.w() == PBT_APMPOWERSTATUSCHANGE
    }
    pub fn is_resuming(&self) -> bool {
        self.w() == PBT_APMRESUMEAUTOMATIC
    }
    pub fn is_suspending(&self) -> bool {
        self.w() == PBT_APMSUSPEND
    }
    pub fn is_power_setting_change(&self) -> bool {
        self.w() == PBT_POWERSETTINGCHANGE
    }
    /// Only meaningful for `PBT_POWERSETTINGCHANGE`.
    pub fn power_setting_ptr(&self) -> *mut c_void {
        self.l() as *mut c_void
    }
    #[cfg(target_os = "windows")]
    pub fn power_setting(&self) -> *mut windows::Win32::System::Power::POWERBROADCAST_SETTING {
        self.power_setting_ptr().cast()
    }
}

impl SettingChangeParams {
    pub fn area_ptr(&self) -> *const u16 {
        self.l() as *const u16
    }

    /// The name of the changed section, e.g. `"Policy"`, `"intl"` or
    /// `"Environment"`.
    ///
    /// # Safety
    ///
    /// LPARAM must be null or point to a NUL-terminated UTF-16 string.
    pub unsafe fn area_lossy(&self) -> Option<String> {
        // SAFETY: forwarded to the caller.
        unsafe { wide_str_lossy(self.area_ptr()) }
    }

    /// # Safety
    ///
    /// As for `area_lossy`.
    pub unsafe fn is_policy(&self) -> bool {
        // SAFETY: forwarded to the caller.
        unsafe { self.area_lossy() }.as_deref() == Some("Policy")
    }

    /// # Safety
    ///
    /// As for `area_lossy`.
    pub unsafe fn is_locale(&self) -> bool {
        // SAFETY: forwarded to the caller.
        unsafe { self.area_lossy() }.as_deref() == Some("intl")
    }

    /// # Safety
    ///
    /// As for `area_lossy`.
    pub unsafe fn is_environment_vars(&self) -> bool {
        // SAFETY: forwarded to the caller.
        unsafe { self.area_lossy() }.as_deref() == Some("Environment")
    }
}

impl SpoolerStatusParams {
    pub fn status_flag(&self) -> u32 {
        self.w() as u32
    }
    pub fn remaining_jobs(&self) -> u16 {
        loword(self.l() as usize)
    }
}

impl TCardParams {
    pub fn action_id(&self) -> u32 {
        self.w() as u32
    }
    pub fn action_data(&self) -> i32 {
        self.l() as i32
    }
}

// ── Native layout checks ──────────────────────────────────────────────────────

#[cfg(target_os = "windows")]
mod layout_checks {
    use super::*;
    use std::mem::size_of;
    use windows::Win32::UI::Controls::{NMCUSTOMDRAW, NMHDR};
    use windows::Win32::UI::WindowsAndMessaging::{
        COPYDATASTRUCT, CREATESTRUCTW, MINMAXINFO, NCCALCSIZE_PARAMS, STYLESTRUCT, WINDOWPOS,
    };

    const _: () = assert!(size_of::<CreateStruct>() == size_of::<CREATESTRUCTW>());
    const _: () = assert!(size_of::<NmHdr>() == size_of::<NMHDR>());
    const _: () = assert!(size_of::<NmCustomDraw>() == size_of::<NMCUSTOMDRAW>());
    const _: () = assert!(size_of::<MinMaxInfo>() == size_of::<MINMAXINFO>());
    const _: () = assert!(size_of::<WindowPos>() == size_of::<WINDOWPOS>());
    const _: () = assert!(size_of::<NcCalcSizeInfo>() == size_of::<NCCALCSIZE_PARAMS>());
    const _: () = assert!(size_of::<CopyDataStruct>() == size_of::<COPYDATASTRUCT>());
    const _: () = assert!(size_of::<StyleStruct>() == size_of::<STYLESTRUCT>());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view<V: MessageView + Copy>(wparam: usize, lparam: isize) -> V {
        *V::from_params(&MessageParams::new(wparam, lparam))
    }

    #[test]
    fn view_reinterprets_in_place_without_copying() {
        let params = MessageParams::new(1, 2);
        let size = SizeParams::from_params(&params);
        assert!(std::ptr::eq(size.params(), &params));
    }

    #[test]
    fn position_is_sign_extended() {
        // x = -5 (0xFFFB), y = 300
        let lparam = ((300u32 << 16) | 0xFFFB) as isize;
        let params: MouseParams = view(MK_LBUTTON as usize | MK_SHIFT as usize, lparam);
        assert_eq!(params.pos(), Point { x: -5, y: 300 });
        assert!(params.keys().has_left_btn());
        assert!(params.keys().has_shift());
        assert!(!params.keys().has_ctrl());
    }

    #[test]
    fn command_distinguishes_menu_accelerator_and_control() {
        let menu: CommandParams = view(1001, 0);
        assert!(menu.is_from_menu());
        assert_eq!(menu.id(), 1001);

        let accel: CommandParams = view((1 << 16) | 1002, 0);
        assert!(accel.is_from_accelerator());
        assert!(!accel.is_from_control());

        let control: CommandParams = view((0x0300 << 16) | 1003, 0x7777);
        assert!(control.is_from_control());
        assert_eq!(control.control_notif_code(), 0x0300);
        assert_eq!(control.control_hwnd(), Hwnd::from_raw(0x7777));
    }

    #[test]
    fn size_decodes_request_and_dimensions() {
        let params: SizeParams = view(SIZE_MAXIMIZED, ((480 << 16) | 640) as isize);
        assert!(params.is_maximized());
        assert!(!params.is_restored());
        assert_eq!(params.size(), Size { cx: 640, cy: 480 });
    }

    #[test]
    fn keystroke_flags_decode_bits() {
        let lparam = (1isize << 24) | (1 << 30) | (0x1E << 16) | 3;
        let params: KeyParams = view(0x41, lparam);
        let flags = params.flags();
        assert_eq!(params.vkey_code(), 0x41);
        assert_eq!(flags.repeat_count(), 3);
        assert_eq!(flags.scan_code(), 0x1E);
        assert!(flags.is_extended_key());
        assert!(flags.key_previously_down());
        assert!(!flags.has_alt_key());
    }

    #[test]
    fn set_font_redraw_flag_is_written_back_to_the_low_word() {
        let mut params = MessageParams::new(0x99, 0x0005_0000);
        let view = SetFontParams::from_params_mut(&mut params);
        assert!(!view.should_redraw());

        view.set_should_redraw(true);

        assert!(view.should_redraw());
        assert_eq!(params.lparam, LParam(0x0005_0001));
    }

    #[test]
    fn print_mutators_rewrite_both_words() {
        let mut params = MessageParams::default();
        {
            let view = PrintParams::from_params_mut(&mut params);
            view.set_hdc(Hdc(0x1234 as *mut c_void));
            view.set_flags(0x10);
        }
        assert_eq!(params, MessageParams::new(0x1234, 0x10));
    }

    #[test]
    fn create_struct_accessor_follows_the_pointer() {
        let cs = CreateStruct {
            cx: 320,
            cy: 200,
            ..Default::default()
        };
        let params: CreateParams = view(0, LParam::from_ptr(&cs).0);

        // SAFETY: `cs` outlives the borrow.
        let decoded = unsafe { params.create_struct() }.expect("pointer is non-null");
        assert_eq!((decoded.cx, decoded.cy), (320, 200));

        let empty: CreateParams = view(0, 0);
        // SAFETY: null is explicitly allowed.
        assert!(unsafe { empty.create_struct() }.is_none());
    }

    #[test]
    fn set_text_reads_utf16() {
        let text: Vec<u16> = "Title".encode_utf16().chain(std::iter::once(0)).collect();
        let params: SetTextParams = view(0, LParam::from_ptr(text.as_ptr()).0);
        // SAFETY: `text` is NUL-terminated and alive.
        assert_eq!(unsafe { params.text_lossy() }.as_deref(), Some("Title"));
    }

    #[test]
    fn menu_select_reports_popup_menu_only_when_flagged() {
        let popup: MenuSelectParams = view(((MF_POPUP as usize) << 16) | 2, 0x500);
        assert!(popup.opens_popup());
        assert_eq!(popup.hmenu(), Some(Hmenu(0x500 as *mut c_void)));

        let closed: MenuSelectParams = view(0xFFFF << 16, 0);
        assert!(closed.system_has_closed());
        assert!(closed.opens_popup() && closed.is_sysmenu());
        assert_eq!(closed.hmenu(), None);

        let plain_item: MenuSelectParams = view(7, 0x500);
        assert_eq!(plain_item.hmenu(), None);
    }

    #[test]
    fn wheel_delta_is_signed() {
        let wparam = ((-120i16 as u16 as usize) << 16) | MK_CONTROL as usize;
        let params: MouseWheelParams = view(wparam, 0);
        assert_eq!(params.wheel_delta(), -120);
        assert!(params.keys().has_ctrl());
    }

    #[test]
    fn quit_and_dpi_views() {
        let quit: QuitParams = view(7, 0);
        assert_eq!(quit.exit_code(), 7);

        let dpi: DpiChangedParams = view((144 << 16) | 120, 0);
        assert_eq!((dpi.dpi_x(), dpi.dpi_y()), (120, 144));
    }

    #[test]
    fn style_changed_matches_index_exactly() {
        let style: StyleChangedParams = view(GWL_STYLE as isize as usize, 0);
        assert!(style.is_style());
        assert!(!style.is_ex_style());
    }

    #[test]
    fn hot_key_splits_modifiers_and_virtual_key() {
        let lparam = ((0x41 << 16) | (MOD_CONTROL | MOD_SHIFT) as usize) as isize;
        let params: HotKeyParams = view(7, lparam);
        assert_eq!(params.id(), 7);
        assert!(params.has_ctrl() && params.has_shift());
        assert!(!params.has_alt() && !params.has_win());
        assert_eq!(params.vkey_code(), 0x41);
        assert!(!params.is_snap_desktop());

        let snap: HotKeyParams = view(IDHOT_SNAPDESKTOP, 0);
        assert!(snap.is_snap_desktop());
        assert!(!snap.is_snap_window());
    }

    #[test]
    fn set_hot_key_reads_modifiers_from_the_high_word() {
        let wparam = (((HOTKEYF_ALT | HOTKEYF_EXT) as usize) << 16) | 0x70;
        let params: SetHotKeyParams = view(wparam, 0);
        assert_eq!(params.vkey_code(), 0x70);
        assert!(params.has_alt() && params.has_extended());
        assert!(!params.has_ctrl() && !params.has_shift());
    }

    #[test]
    fn next_dlg_ctl_names_a_control_only_when_flagged() {
        let named: NextDlgCtlParams = view(0x4321, 1);
        assert_eq!(named.ctrl_receiving_focus(), Some(Hwnd::from_raw(0x4321)));
        assert!(!named.focus_next());

        let next: NextDlgCtlParams = view(0, 0);
        assert_eq!(next.ctrl_receiving_focus(), None);
        assert!(next.focus_next());

        let previous: NextDlgCtlParams = view(1, 0);
        assert!(!previous.focus_next());
    }

    #[test]
    fn uninit_menu_popup_reads_menu_and_id() {
        let params: UninitMenuPopupParams = view(0x900, (0x0002 << 16) as isize);
        assert_eq!(params.hmenu(), Hmenu(0x900 as *mut c_void));
        assert_eq!(params.menu_id(), 2);
    }

    #[test]
    fn list_box_item_messages_split_the_wparam() {
        let chars: CharToItemParams = view((3 << 16) | 'x' as usize, 0x55);
        assert_eq!(chars.char_code(), 'x' as u16);
        assert_eq!(chars.current_caret_pos(), 3);
        assert_eq!(chars.listbox(), Hwnd::from_raw(0x55));

        let keys: VKeyToItemParams = view((9 << 16) | 0x28, 0x55);
        assert_eq!(keys.vkey_code(), 0x28);
        assert_eq!(keys.current_caret_pos(), 9);
    }

    #[test]
    fn enter_idle_tells_menus_from_dialogs() {
        let menu: EnterIdleParams = view(MSGF_MENU, 0x66);
        assert!(menu.is_menu_displayed());
        assert_eq!(menu.window(), Hwnd::from_raw(0x66));

        let dialog: EnterIdleParams = view(0, 0x66);
        assert!(!dialog.is_menu_displayed());
    }

    #[test]
    fn power_broadcast_classifies_the_event() {
        let suspend: PowerBroadcastParams = view(PBT_APMSUSPEND, 0);
        assert!(suspend.is_suspending());
        assert!(!suspend.is_resuming());

        let setting: PowerBroadcastParams = view(PBT_POWERSETTINGCHANGE, 0x1000);
        assert!(setting.is_power_setting_change());
        assert_eq!(setting.power_setting_ptr(), 0x1000 as *mut c_void);
    }

    #[test]
    fn input_lang_change_request_flags() {
        let params: InputLangChangeRequestParams =
            view(INPUTLANGCHANGE_FORWARD | INPUTLANGCHANGE_SYSCHARSET, 0x0409);
        assert!(params.next_chosen());
        assert!(params.can_be_used_with_sys());
        assert!(!params.previous_chosen());
        assert_eq!(params.keyboard_layout(), Hkl(0x0409 as *mut c_void));
    }

    #[test]
    fn setting_change_names_the_changed_area() {
        let area: Vec<u16> = "intl".encode_utf16().chain(Some(0)).collect();
        let params: SettingChangeParams = view(0, area.as_ptr() as isize);

        // SAFETY: `area` is NUL-terminated and outlives the view.
        unsafe {
            assert_eq!(params.area_lossy().as_deref(), Some("intl"));
            assert!(params.is_locale());
            assert!(!params.is_policy());
            assert!(!params.is_environment_vars());
        }
        // SAFETY: null LPARAM is allowed.
        assert_eq!(unsafe { SettingChangeParams::default().area_lossy() }, None);
    }

    #[test]
    fn clipboard_chain_detects_the_last_window() {
        let last: ChangeCbChainParams = view(0x10, 0);
        assert!(last.is_last_window());
        assert_eq!(last.window_being_removed(), Hwnd::from_raw(0x10));

        let scroll: ClipboardScrollParams = view(0x20, ((40 << 16) | 5) as isize);
        assert_eq!(scroll.scroll_event(), 5);
        assert_eq!(scroll.scroll_pos(), 40);
    }

    #[test]
    fn spooler_status_and_tcard_words() {
        let spooler: SpoolerStatusParams = view(0, 3);
        assert_eq!(spooler.remaining_jobs(), 3);

        let tcard: TCardParams = view(2, -1);
        assert_eq!(tcard.action_id(), 2);
        assert_eq!(tcard.action_data(), -1);
    }
}
