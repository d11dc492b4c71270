// ── Window message identifiers and decoding constants ────────────────────────
//
// Source of truth: WinUser.h / CommCtrl.h. The identifiers that have a typed
// view in `params` or a payload in `message_traits::notify`, plus the flags
// those views decode, are listed here.
// They are portable constants so the dispatch core builds and tests on every
// target; the values match the `windows` crate bindings exactly.

// ── Lifecycle ─────────────────────────────────────────────────────────────────

pub const WM_NULL: u32 = 0x0000;
pub const WM_CREATE: u32 = 0x0001;
pub const WM_DESTROY: u32 = 0x0002;
pub const WM_MOVE: u32 = 0x0003;
pub const WM_SIZE: u32 = 0x0005;
pub const WM_ACTIVATE: u32 = 0x0006;
pub const WM_SETFOCUS: u32 = 0x0007;
pub const WM_KILLFOCUS: u32 = 0x0008;
pub const WM_ENABLE: u32 = 0x000A;
pub const WM_SETREDRAW: u32 = 0x000B;
pub const WM_SETTEXT: u32 = 0x000C;
pub const WM_GETTEXT: u32 = 0x000D;
pub const WM_GETTEXTLENGTH: u32 = 0x000E;
pub const WM_PAINT: u32 = 0x000F;
pub const WM_CLOSE: u32 = 0x0010;
pub const WM_QUERYENDSESSION: u32 = 0x0011;
/// Queue sentinel that ends the message loop. WPARAM = exit code.
pub const WM_QUIT: u32 = 0x0012;
pub const WM_ERASEBKGND: u32 = 0x0014;
pub const WM_ENDSESSION: u32 = 0x0016;
pub const WM_SHOWWINDOW: u32 = 0x0018;
pub const WM_SETTINGCHANGE: u32 = 0x001A;
pub const WM_DEVMODECHANGE: u32 = 0x001B;
pub const WM_ACTIVATEAPP: u32 = 0x001C;
pub const WM_SETCURSOR: u32 = 0x0020;
pub const WM_MOUSEACTIVATE: u32 = 0x0021;
pub const WM_GETMINMAXINFO: u32 = 0x0024;
pub const WM_ICONERASEBKGND: u32 = 0x0027;
pub const WM_NEXTDLGCTL: u32 = 0x0028;
pub const WM_SPOOLERSTATUS: u32 = 0x002A;
pub const WM_DRAWITEM: u32 = 0x002B;
pub const WM_MEASUREITEM: u32 = 0x002C;
pub const WM_DELETEITEM: u32 = 0x002D;
pub const WM_VKEYTOITEM: u32 = 0x002E;
pub const WM_CHARTOITEM: u32 = 0x002F;
pub const WM_SETFONT: u32 = 0x0030;
pub const WM_GETFONT: u32 = 0x0031;
pub const WM_SETHOTKEY: u32 = 0x0032;
pub const WM_COMPAREITEM: u32 = 0x0039;
pub const WM_COMPACTING: u32 = 0x0041;
pub const WM_WINDOWPOSCHANGING: u32 = 0x0046;
pub const WM_WINDOWPOSCHANGED: u32 = 0x0047;
pub const WM_COPYDATA: u32 = 0x004A;
/// Common-control notification. LPARAM = pointer to an `NMHDR`-prefixed struct.
pub const WM_NOTIFY: u32 = 0x004E;
pub const WM_INPUTLANGCHANGEREQUEST: u32 = 0x0050;
pub const WM_INPUTLANGCHANGE: u32 = 0x0051;
pub const WM_TCARD: u32 = 0x0052;
pub const WM_HELP: u32 = 0x0053;
pub const WM_NOTIFYFORMAT: u32 = 0x0055;
pub const WM_CONTEXTMENU: u32 = 0x007B;
pub const WM_STYLECHANGING: u32 = 0x007C;
pub const WM_STYLECHANGED: u32 = 0x007D;
pub const WM_DISPLAYCHANGE: u32 = 0x007E;
pub const WM_GETICON: u32 = 0x007F;
pub const WM_SETICON: u32 = 0x0080;
/// First message a new window receives. LPARAM = `CREATESTRUCTW*`.
pub const WM_NCCREATE: u32 = 0x0081;
/// Final message a window receives before its handle becomes invalid.
pub const WM_NCDESTROY: u32 = 0x0082;
pub const WM_NCCALCSIZE: u32 = 0x0083;
pub const WM_NCHITTEST: u32 = 0x0084;
pub const WM_NCPAINT: u32 = 0x0085;
pub const WM_NCACTIVATE: u32 = 0x0086;
pub const WM_GETDLGCODE: u32 = 0x0087;

// ── Non-client mouse ──────────────────────────────────────────────────────────

pub const WM_NCMOUSEMOVE: u32 = 0x00A0;
pub const WM_NCLBUTTONDOWN: u32 = 0x00A1;
pub const WM_NCLBUTTONUP: u32 = 0x00A2;
pub const WM_NCLBUTTONDBLCLK: u32 = 0x00A3;
pub const WM_NCRBUTTONDOWN: u32 = 0x00A4;
pub const WM_NCRBUTTONUP: u32 = 0x00A5;
pub const WM_NCRBUTTONDBLCLK: u32 = 0x00A6;
pub const WM_NCMBUTTONDOWN: u32 = 0x00A7;
pub const WM_NCMBUTTONUP: u32 = 0x00A8;
pub const WM_NCMBUTTONDBLCLK: u32 = 0x00A9;

// ── Keyboard ──────────────────────────────────────────────────────────────────

pub const WM_KEYDOWN: u32 = 0x0100;
pub const WM_KEYUP: u32 = 0x0101;
pub const WM_CHAR: u32 = 0x0102;
pub const WM_DEADCHAR: u32 = 0x0103;
pub const WM_SYSKEYDOWN: u32 = 0x0104;
pub const WM_SYSKEYUP: u32 = 0x0105;
pub const WM_SYSCHAR: u32 = 0x0106;
pub const WM_SYSDEADCHAR: u32 = 0x0107;

// ── Dialogs, commands, menus ──────────────────────────────────────────────────

/// Dialog handoff message. WPARAM = control to focus; LPARAM = init param.
pub const WM_INITDIALOG: u32 = 0x0110;
pub const WM_COMMAND: u32 = 0x0111;
pub const WM_SYSCOMMAND: u32 = 0x0112;
pub const WM_TIMER: u32 = 0x0113;
pub const WM_HSCROLL: u32 = 0x0114;
pub const WM_VSCROLL: u32 = 0x0115;
pub const WM_INITMENU: u32 = 0x0116;
pub const WM_INITMENUPOPUP: u32 = 0x0117;
pub const WM_MENUSELECT: u32 = 0x011F;
pub const WM_MENUCHAR: u32 = 0x0120;
pub const WM_ENTERIDLE: u32 = 0x0121;
pub const WM_MENURBUTTONUP: u32 = 0x0122;
pub const WM_MENUDRAG: u32 = 0x0123;
pub const WM_MENUGETOBJECT: u32 = 0x0124;
pub const WM_UNINITMENUPOPUP: u32 = 0x0125;
pub const WM_CTLCOLORMSGBOX: u32 = 0x0132;
pub const WM_CTLCOLOREDIT: u32 = 0x0133;
pub const WM_CTLCOLORLISTBOX: u32 = 0x0134;
pub const WM_CTLCOLORBTN: u32 = 0x0135;
pub const WM_CTLCOLORDLG: u32 = 0x0136;
pub const WM_CTLCOLORSCROLLBAR: u32 = 0x0137;
pub const WM_CTLCOLORSTATIC: u32 = 0x0138;

// ── Client mouse ──────────────────────────────────────────────────────────────

pub const WM_MOUSEMOVE: u32 = 0x0200;
pub const WM_LBUTTONDOWN: u32 = 0x0201;
pub const WM_LBUTTONUP: u32 = 0x0202;
pub const WM_LBUTTONDBLCLK: u32 = 0x0203;
pub const WM_RBUTTONDOWN: u32 = 0x0204;
pub const WM_RBUTTONUP: u32 = 0x0205;
pub const WM_RBUTTONDBLCLK: u32 = 0x0206;
pub const WM_MBUTTONDOWN: u32 = 0x0207;
pub const WM_MBUTTONUP: u32 = 0x0208;
pub const WM_MBUTTONDBLCLK: u32 = 0x0209;
pub const WM_MOUSEWHEEL: u32 = 0x020A;
pub const WM_PARENTNOTIFY: u32 = 0x0210;
pub const WM_ENTERMENULOOP: u32 = 0x0211;
pub const WM_EXITMENULOOP: u32 = 0x0212;
pub const WM_NEXTMENU: u32 = 0x0213;
pub const WM_SIZING: u32 = 0x0214;
pub const WM_CAPTURECHANGED: u32 = 0x0215;
pub const WM_MOVING: u32 = 0x0216;
pub const WM_POWERBROADCAST: u32 = 0x0218;
pub const WM_MDIACTIVATE: u32 = 0x0222;
pub const WM_DROPFILES: u32 = 0x0233;
pub const WM_MOUSEHOVER: u32 = 0x02A1;
pub const WM_MOUSELEAVE: u32 = 0x02A3;
pub const WM_DPICHANGED: u32 = 0x02E0;
pub const WM_RENDERFORMAT: u32 = 0x0305;
pub const WM_PAINTCLIPBOARD: u32 = 0x0309;
pub const WM_VSCROLLCLIPBOARD: u32 = 0x030A;
pub const WM_SIZECLIPBOARD: u32 = 0x030B;
pub const WM_ASKCBFORMATNAME: u32 = 0x030C;
pub const WM_CHANGECBCHAIN: u32 = 0x030D;
pub const WM_HSCROLLCLIPBOARD: u32 = 0x030E;
pub const WM_PALETTEISCHANGING: u32 = 0x0310;
pub const WM_PALETTECHANGED: u32 = 0x0311;
pub const WM_HOTKEY: u32 = 0x0312;
pub const WM_PRINT: u32 = 0x0317;
pub const WM_PRINTCLIENT: u32 = 0x0318;

pub const WM_USER: u32 = 0x0400;
pub const WM_APP: u32 = 0x8000;

// ── Notification codes (NMHDR.code) ──────────────────────────────────────────
// Defined as negative offsets from the *_FIRST bases, stored as u32. Where a
// control has ANSI and UTF-16 variants only the UTF-16 code is listed.

pub const NM_CLICK: u32 = -2i32 as u32;
pub const NM_DBLCLK: u32 = -3i32 as u32;
pub const NM_RETURN: u32 = -4i32 as u32;
pub const NM_RCLICK: u32 = -5i32 as u32;
pub const NM_RDBLCLK: u32 = -6i32 as u32;
pub const NM_SETFOCUS: u32 = -7i32 as u32;
pub const NM_KILLFOCUS: u32 = -8i32 as u32;
pub const NM_CUSTOMDRAW: u32 = -12i32 as u32;
pub const NM_HOVER: u32 = -13i32 as u32;
pub const NM_SETCURSOR: u32 = -17i32 as u32;

// List view, LVN_FIRST = -100.
pub const LVN_ITEMCHANGING: u32 = -100i32 as u32;
pub const LVN_ITEMCHANGED: u32 = -101i32 as u32;
pub const LVN_INSERTITEM: u32 = -102i32 as u32;
pub const LVN_DELETEITEM: u32 = -103i32 as u32;
pub const LVN_DELETEALLITEMS: u32 = -104i32 as u32;
pub const LVN_COLUMNCLICK: u32 = -108i32 as u32;
pub const LVN_BEGINDRAG: u32 = -109i32 as u32;
pub const LVN_BEGINRDRAG: u32 = -111i32 as u32;
pub const LVN_ODCACHEHINT: u32 = -113i32 as u32;
pub const LVN_ITEMACTIVATE: u32 = -114i32 as u32;
pub const LVN_ODSTATECHANGED: u32 = -115i32 as u32;
pub const LVN_HOTTRACK: u32 = -121i32 as u32;
pub const LVN_KEYDOWN: u32 = -155i32 as u32;
pub const LVN_MARQUEEBEGIN: u32 = -156i32 as u32;
pub const LVN_GETINFOTIPW: u32 = -158i32 as u32;
pub const LVN_INCREMENTALSEARCHW: u32 = -163i32 as u32;
pub const LVN_COLUMNDROPDOWN: u32 = -164i32 as u32;
pub const LVN_COLUMNOVERFLOWCLICK: u32 = -166i32 as u32;
pub const LVN_BEGINLABELEDITW: u32 = -175i32 as u32;
pub const LVN_ENDLABELEDITW: u32 = -176i32 as u32;
pub const LVN_GETDISPINFOW: u32 = -177i32 as u32;
pub const LVN_SETDISPINFOW: u32 = -178i32 as u32;
pub const LVN_ODFINDITEMW: u32 = -179i32 as u32;
pub const LVN_BEGINSCROLL: u32 = -180i32 as u32;
pub const LVN_ENDSCROLL: u32 = -181i32 as u32;
pub const LVN_LINKCLICK: u32 = -184i32 as u32;
pub const LVN_GETEMPTYMARKUP: u32 = -187i32 as u32;

// Property sheet pages, PSN_FIRST = -200.
pub const PSN_SETACTIVE: u32 = -200i32 as u32;
pub const PSN_KILLACTIVE: u32 = -201i32 as u32;
pub const PSN_APPLY: u32 = -202i32 as u32;
pub const PSN_RESET: u32 = -203i32 as u32;
pub const PSN_HELP: u32 = -205i32 as u32;
pub const PSN_WIZBACK: u32 = -206i32 as u32;
pub const PSN_WIZNEXT: u32 = -207i32 as u32;
pub const PSN_WIZFINISH: u32 = -208i32 as u32;
pub const PSN_QUERYCANCEL: u32 = -209i32 as u32;
pub const PSN_GETOBJECT: u32 = -210i32 as u32;
pub const PSN_TRANSLATEACCELERATOR: u32 = -212i32 as u32;
pub const PSN_QUERYINITIALFOCUS: u32 = -213i32 as u32;

// Header, HDN_FIRST = -300.
pub const HDN_BEGINDRAG: u32 = -310i32 as u32;
pub const HDN_ENDDRAG: u32 = -311i32 as u32;
pub const HDN_FILTERCHANGE: u32 = -312i32 as u32;
pub const HDN_FILTERBTNCLICK: u32 = -313i32 as u32;
pub const HDN_BEGINFILTEREDIT: u32 = -314i32 as u32;
pub const HDN_ENDFILTEREDIT: u32 = -315i32 as u32;
pub const HDN_ITEMSTATEICONCLICK: u32 = -316i32 as u32;
pub const HDN_ITEMKEYDOWN: u32 = -317i32 as u32;
pub const HDN_DROPDOWN: u32 = -318i32 as u32;
pub const HDN_OVERFLOWCLICK: u32 = -319i32 as u32;
pub const HDN_ITEMCHANGINGW: u32 = -320i32 as u32;
pub const HDN_ITEMCHANGEDW: u32 = -321i32 as u32;
pub const HDN_ITEMCLICKW: u32 = -322i32 as u32;
pub const HDN_ITEMDBLCLICKW: u32 = -323i32 as u32;
pub const HDN_DIVIDERDBLCLICKW: u32 = -325i32 as u32;
pub const HDN_BEGINTRACKW: u32 = -326i32 as u32;
pub const HDN_ENDTRACKW: u32 = -327i32 as u32;
pub const HDN_TRACKW: u32 = -328i32 as u32;
pub const HDN_GETDISPINFOW: u32 = -329i32 as u32;

// Tree view, TVN_FIRST = -400.
pub const TVN_SELCHANGEDW: u32 = -451i32 as u32;

// Date/time picker, DTN_FIRST = -740 and DTN_FIRST2 = -753.
pub const DTN_FORMATQUERYW: u32 = -742i32 as u32;
pub const DTN_FORMATW: u32 = -743i32 as u32;
pub const DTN_WMKEYDOWNW: u32 = -744i32 as u32;
pub const DTN_USERSTRINGW: u32 = -745i32 as u32;
pub const DTN_DATETIMECHANGE: u32 = -759i32 as u32;

// Month calendar, MCN_FIRST = -746.
pub const MCN_SELECT: u32 = -746i32 as u32;
pub const MCN_GETDAYSTATE: u32 = -747i32 as u32;
pub const MCN_SELCHANGE: u32 = -749i32 as u32;
pub const MCN_VIEWCHANGE: u32 = -750i32 as u32;

// ComboBoxEx, CBEN_FIRST = -800.
pub const CBEN_DELETEITEM: u32 = -802i32 as u32;
pub const CBEN_ENDEDITW: u32 = -806i32 as u32;
pub const CBEN_DRAGBEGINW: u32 = -809i32 as u32;

// IP address, IPN_FIRST = -860.
pub const IPN_FIELDCHANGED: u32 = -860i32 as u32;

// Pager, PGN_FIRST = -900.
pub const PGN_SCROLL: u32 = -901i32 as u32;
pub const PGN_CALCSIZE: u32 = -902i32 as u32;
pub const PGN_HOTITEMCHANGE: u32 = -903i32 as u32;

// Split button, BCN_FIRST = -1250.
pub const BCN_HOTITEMCHANGE: u32 = -1249i32 as u32;
pub const BCN_DROPDOWN: u32 = -1248i32 as u32;

// Drag list boxes report through the registered DRAGLISTMSGSTRING message;
// `DRAGLISTINFO.uNotification` carries one of these.
pub const DL_BEGINDRAG: u32 = WM_USER + 133;
pub const DL_DRAGGING: u32 = WM_USER + 134;
pub const DL_DROPPED: u32 = WM_USER + 135;
pub const DL_CANCELDRAG: u32 = WM_USER + 136;

// ── WM_COMMAND notification codes (HIWORD(wParam)) ───────────────────────────

pub const BN_CLICKED: u16 = 0;
pub const BN_DOUBLECLICKED: u16 = 5;
pub const EN_SETFOCUS: u16 = 0x0100;
pub const EN_KILLFOCUS: u16 = 0x0200;
pub const EN_CHANGE: u16 = 0x0300;
pub const EN_UPDATE: u16 = 0x0400;

// ── Flags decoded by the views ────────────────────────────────────────────────

pub const MK_LBUTTON: u16 = 0x0001;
pub const MK_RBUTTON: u16 = 0x0002;
pub const MK_SHIFT: u16 = 0x0004;
pub const MK_CONTROL: u16 = 0x0008;
pub const MK_MBUTTON: u16 = 0x0010;
pub const MK_XBUTTON1: u16 = 0x0020;
pub const MK_XBUTTON2: u16 = 0x0040;

pub const WA_INACTIVE: usize = 0;
pub const WA_ACTIVE: usize = 1;
pub const WA_CLICKACTIVE: usize = 2;

pub const SIZE_RESTORED: usize = 0;
pub const SIZE_MINIMIZED: usize = 1;
pub const SIZE_MAXIMIZED: usize = 2;
pub const SIZE_MAXSHOW: usize = 3;
pub const SIZE_MAXHIDE: usize = 4;

pub const SW_PARENTCLOSING: isize = 1;
pub const SW_OTHERZOOM: isize = 2;
pub const SW_PARENTOPENING: isize = 3;
pub const SW_OTHERUNZOOM: isize = 4;

pub const ICON_SMALL: usize = 0;
pub const ICON_BIG: usize = 1;
pub const ICON_SMALL2: usize = 2;

pub const ENDSESSION_CLOSEAPP: isize = 0x0000_0001;
pub const ENDSESSION_CRITICAL: isize = 0x4000_0000;
pub const ENDSESSION_LOGOFF: isize = 0x8000_0000u32 as isize;

pub const MF_GRAYED: u16 = 0x0001;
pub const MF_DISABLED: u16 = 0x0002;
pub const MF_BITMAP: u16 = 0x0004;
pub const MF_CHECKED: u16 = 0x0008;
pub const MF_POPUP: u16 = 0x0010;
pub const MF_HILITE: u16 = 0x0080;
pub const MF_OWNERDRAW: u16 = 0x0100;
pub const MF_SYSMENU: u16 = 0x2000;
pub const MF_MOUSESELECT: u16 = 0x8000;

pub const GWL_STYLE: i32 = -16;
pub const GWL_EXSTYLE: i32 = -20;

pub const NF_QUERY: isize = 3;
pub const NF_REQUERY: isize = 4;

pub const CDDS_PREPAINT: u32 = 0x0000_0001;
pub const CDDS_ITEM: u32 = 0x0001_0000;
pub const CDDS_ITEMPREPAINT: u32 = CDDS_ITEM | CDDS_PREPAINT;
pub const CDRF_DODEFAULT: isize = 0x0000_0000;
pub const CDRF_NOTIFYITEMDRAW: isize = 0x0000_0020;

pub const MSGF_MENU: usize = 2;

pub const IDHOT_SNAPWINDOW: usize = -1isize as usize;
pub const IDHOT_SNAPDESKTOP: usize = -2isize as usize;

pub const MOD_ALT: u16 = 0x0001;
pub const MOD_CONTROL: u16 = 0x0002;
pub const MOD_SHIFT: u16 = 0x0004;
pub const MOD_WIN: u16 = 0x0008;

pub const HOTKEYF_SHIFT: u16 = 0x01;
pub const HOTKEYF_CONTROL: u16 = 0x02;
pub const HOTKEYF_ALT: u16 = 0x04;
pub const HOTKEYF_EXT: u16 = 0x08;

pub const INPUTLANGCHANGE_SYSCHARSET: usize = 0x0001;
pub const INPUTLANGCHANGE_FORWARD: usize = 0x0002;
pub const INPUTLANGCHANGE_BACKWARD: usize = 0x0004;

pub const PBT_APMSUSPEND: usize = 0x0004;
pub const PBT_APMPOWERSTATUSCHANGE: usize = 0x000A;
pub const PBT_APMRESUMEAUTOMATIC: usize = 0x0012;
pub const PBT_POWERSETTINGCHANGE: usize = 0x8013;

// ── Window styles and creation defaults ───────────────────────────────────────

pub const WS_OVERLAPPEDWINDOW: u32 = 0x00CF_0000;
pub const WS_VISIBLE: u32 = 0x1000_0000;
pub const WS_CHILD: u32 = 0x4000_0000;
pub const CW_USEDEFAULT: i32 = 0x8000_0000u32 as i32;

pub const IDOK: u16 = 1;
pub const IDCANCEL: u16 = 2;

pub const TRUE: isize = 1;
pub const FALSE: isize = 0;
