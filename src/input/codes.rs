// SPDX-License-Identifier: GPL-3.0-only

//! Host (USB HID) scancode to Linux evdev keycode translation, plus the
//! mouse button mapping. The input server speaks evdev codes exclusively.

use crate::backend::MouseButton;

pub const KEY_RESERVED: u32 = 0;
pub const KEY_ESC: u32 = 1;
pub const KEY_1: u32 = 2;
pub const KEY_2: u32 = 3;
pub const KEY_3: u32 = 4;
pub const KEY_4: u32 = 5;
pub const KEY_5: u32 = 6;
pub const KEY_6: u32 = 7;
pub const KEY_7: u32 = 8;
pub const KEY_8: u32 = 9;
pub const KEY_9: u32 = 10;
pub const KEY_0: u32 = 11;
pub const KEY_MINUS: u32 = 12;
pub const KEY_EQUAL: u32 = 13;
pub const KEY_BACKSPACE: u32 = 14;
pub const KEY_TAB: u32 = 15;
pub const KEY_Q: u32 = 16;
pub const KEY_W: u32 = 17;
pub const KEY_E: u32 = 18;
pub const KEY_R: u32 = 19;
pub const KEY_T: u32 = 20;
pub const KEY_Y: u32 = 21;
pub const KEY_U: u32 = 22;
pub const KEY_I: u32 = 23;
pub const KEY_O: u32 = 24;
pub const KEY_P: u32 = 25;
pub const KEY_LEFTBRACE: u32 = 26;
pub const KEY_RIGHTBRACE: u32 = 27;
pub const KEY_ENTER: u32 = 28;
pub const KEY_LEFTCTRL: u32 = 29;
pub const KEY_A: u32 = 30;
pub const KEY_S: u32 = 31;
pub const KEY_D: u32 = 32;
pub const KEY_F: u32 = 33;
pub const KEY_G: u32 = 34;
pub const KEY_H: u32 = 35;
pub const KEY_J: u32 = 36;
pub const KEY_K: u32 = 37;
pub const KEY_L: u32 = 38;
pub const KEY_SEMICOLON: u32 = 39;
pub const KEY_APOSTROPHE: u32 = 40;
pub const KEY_GRAVE: u32 = 41;
pub const KEY_LEFTSHIFT: u32 = 42;
pub const KEY_BACKSLASH: u32 = 43;
pub const KEY_Z: u32 = 44;
pub const KEY_X: u32 = 45;
pub const KEY_C: u32 = 46;
pub const KEY_V: u32 = 47;
pub const KEY_B: u32 = 48;
pub const KEY_N: u32 = 49;
pub const KEY_M: u32 = 50;
pub const KEY_COMMA: u32 = 51;
pub const KEY_DOT: u32 = 52;
pub const KEY_SLASH: u32 = 53;
pub const KEY_RIGHTSHIFT: u32 = 54;
pub const KEY_KPASTERISK: u32 = 55;
pub const KEY_LEFTALT: u32 = 56;
pub const KEY_SPACE: u32 = 57;
pub const KEY_CAPSLOCK: u32 = 58;
pub const KEY_F1: u32 = 59;
pub const KEY_F2: u32 = 60;
pub const KEY_F3: u32 = 61;
pub const KEY_F4: u32 = 62;
pub const KEY_F5: u32 = 63;
pub const KEY_F6: u32 = 64;
pub const KEY_F7: u32 = 65;
pub const KEY_F8: u32 = 66;
pub const KEY_F9: u32 = 67;
pub const KEY_F10: u32 = 68;
pub const KEY_NUMLOCK: u32 = 69;
pub const KEY_SCROLLLOCK: u32 = 70;
pub const KEY_KP7: u32 = 71;
pub const KEY_KP8: u32 = 72;
pub const KEY_KP9: u32 = 73;
pub const KEY_KPMINUS: u32 = 74;
pub const KEY_KP4: u32 = 75;
pub const KEY_KP5: u32 = 76;
pub const KEY_KP6: u32 = 77;
pub const KEY_KPPLUS: u32 = 78;
pub const KEY_KP1: u32 = 79;
pub const KEY_KP2: u32 = 80;
pub const KEY_KP3: u32 = 81;
pub const KEY_KP0: u32 = 82;
pub const KEY_KPDOT: u32 = 83;
pub const KEY_102ND: u32 = 86;
pub const KEY_F11: u32 = 87;
pub const KEY_F12: u32 = 88;
pub const KEY_KPENTER: u32 = 96;
pub const KEY_RIGHTCTRL: u32 = 97;
pub const KEY_KPSLASH: u32 = 98;
pub const KEY_SYSRQ: u32 = 99;
pub const KEY_RIGHTALT: u32 = 100;
pub const KEY_HOME: u32 = 102;
pub const KEY_UP: u32 = 103;
pub const KEY_PAGEUP: u32 = 104;
pub const KEY_LEFT: u32 = 105;
pub const KEY_RIGHT: u32 = 106;
pub const KEY_END: u32 = 107;
pub const KEY_DOWN: u32 = 108;
pub const KEY_PAGEDOWN: u32 = 109;
pub const KEY_INSERT: u32 = 110;
pub const KEY_DELETE: u32 = 111;
pub const KEY_MUTE: u32 = 113;
pub const KEY_VOLUMEDOWN: u32 = 114;
pub const KEY_VOLUMEUP: u32 = 115;
pub const KEY_POWER: u32 = 116;
pub const KEY_KPEQUAL: u32 = 117;
pub const KEY_PAUSE: u32 = 119;
pub const KEY_LEFTMETA: u32 = 125;
pub const KEY_RIGHTMETA: u32 = 126;
pub const KEY_COMPOSE: u32 = 127;

pub const BTN_LEFT: u32 = 0x110;
pub const BTN_RIGHT: u32 = 0x111;
pub const BTN_MIDDLE: u32 = 0x112;
pub const BTN_SIDE: u32 = 0x113;
pub const BTN_EXTRA: u32 = 0x114;

/// Translates a host scancode into an evdev keycode. Unmapped scancodes
/// yield [`KEY_RESERVED`] and are dropped by the dispatcher.
pub fn scancode_to_keycode(scancode: u32) -> u32 {
    match scancode {
        4 => KEY_A,
        5 => KEY_B,
        6 => KEY_C,
        7 => KEY_D,
        8 => KEY_E,
        9 => KEY_F,
        10 => KEY_G,
        11 => KEY_H,
        12 => KEY_I,
        13 => KEY_J,
        14 => KEY_K,
        15 => KEY_L,
        16 => KEY_M,
        17 => KEY_N,
        18 => KEY_O,
        19 => KEY_P,
        20 => KEY_Q,
        21 => KEY_R,
        22 => KEY_S,
        23 => KEY_T,
        24 => KEY_U,
        25 => KEY_V,
        26 => KEY_W,
        27 => KEY_X,
        28 => KEY_Y,
        29 => KEY_Z,
        30 => KEY_1,
        31 => KEY_2,
        32 => KEY_3,
        33 => KEY_4,
        34 => KEY_5,
        35 => KEY_6,
        36 => KEY_7,
        37 => KEY_8,
        38 => KEY_9,
        39 => KEY_0,
        40 => KEY_ENTER,
        41 => KEY_ESC,
        42 => KEY_BACKSPACE,
        43 => KEY_TAB,
        44 => KEY_SPACE,
        45 => KEY_MINUS,
        46 => KEY_EQUAL,
        47 => KEY_LEFTBRACE,
        48 => KEY_RIGHTBRACE,
        49 | 50 => KEY_BACKSLASH,
        51 => KEY_SEMICOLON,
        52 => KEY_APOSTROPHE,
        53 => KEY_GRAVE,
        54 => KEY_COMMA,
        55 => KEY_DOT,
        56 => KEY_SLASH,
        57 => KEY_CAPSLOCK,
        58 => KEY_F1,
        59 => KEY_F2,
        60 => KEY_F3,
        61 => KEY_F4,
        62 => KEY_F5,
        63 => KEY_F6,
        64 => KEY_F7,
        65 => KEY_F8,
        66 => KEY_F9,
        67 => KEY_F10,
        68 => KEY_F11,
        69 => KEY_F12,
        70 => KEY_SYSRQ,
        71 => KEY_SCROLLLOCK,
        72 => KEY_PAUSE,
        73 => KEY_INSERT,
        74 => KEY_HOME,
        75 => KEY_PAGEUP,
        76 => KEY_DELETE,
        77 => KEY_END,
        78 => KEY_PAGEDOWN,
        79 => KEY_RIGHT,
        80 => KEY_LEFT,
        81 => KEY_DOWN,
        82 => KEY_UP,
        83 => KEY_NUMLOCK,
        84 => KEY_KPSLASH,
        85 => KEY_KPASTERISK,
        86 => KEY_KPMINUS,
        87 => KEY_KPPLUS,
        88 => KEY_KPENTER,
        89 => KEY_KP1,
        90 => KEY_KP2,
        91 => KEY_KP3,
        92 => KEY_KP4,
        93 => KEY_KP5,
        94 => KEY_KP6,
        95 => KEY_KP7,
        96 => KEY_KP8,
        97 => KEY_KP9,
        98 => KEY_KP0,
        99 => KEY_KPDOT,
        100 => KEY_102ND,
        101 => KEY_COMPOSE,
        102 => KEY_POWER,
        103 => KEY_KPEQUAL,
        127 => KEY_MUTE,
        128 => KEY_VOLUMEUP,
        129 => KEY_VOLUMEDOWN,
        224 => KEY_LEFTCTRL,
        225 => KEY_LEFTSHIFT,
        226 => KEY_LEFTALT,
        227 => KEY_LEFTMETA,
        228 => KEY_RIGHTCTRL,
        229 => KEY_RIGHTSHIFT,
        230 => KEY_RIGHTALT,
        231 => KEY_RIGHTMETA,
        _ => KEY_RESERVED,
    }
}

/// Finite host-button to evdev-button mapping; anything else is dropped.
pub fn button_to_code(button: MouseButton) -> Option<u32> {
    match button {
        MouseButton::Left => Some(BTN_LEFT),
        MouseButton::Middle => Some(BTN_MIDDLE),
        MouseButton::Right => Some(BTN_RIGHT),
        MouseButton::Side => Some(BTN_SIDE),
        MouseButton::Extra => Some(BTN_EXTRA),
        MouseButton::Other(_) => None,
    }
}
