//! Generated glyph data for the five display areas.
//!
//! Regenerated offline from the XBM artwork; edit the images, not this
//! file. Bytes are display-memory order: one byte per 8-pixel column
//! slice, rows top to bottom.

/* key letters, 32x32 px */

pub static KEY_A: [u8; 128] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xc0, 0xe0,
    0xf0, 0xf8, 0xf8, 0xf8, 0xf8, 0xf8, 0xf8, 0xf8,
    0xe0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0xc0, 0xf0, 0xf8, 0xfe, 0xff, 0x7f, 0x1f,
    0x0f, 0x03, 0x01, 0x07, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xfc, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x80, 0xc0, 0xf0, 0xf8, 0xfe,
    0xff, 0xff, 0xff, 0xff, 0xf3, 0xf1, 0xf0, 0xf0,
    0xf0, 0xf0, 0xf0, 0xf0, 0xf0, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xf8, 0x80, 0x00, 0x00, 0x00,
    0x00, 0x0c, 0x0e, 0x0f, 0x0f, 0x0f, 0x07, 0x03,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x0f,
    0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0x00, 0x00, 0x00,
];

pub static KEY_B: [u8; 128] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0xe0, 0xf8, 0xf8,
    0xf8, 0xf8, 0xf8, 0x78, 0x78, 0x78, 0x78, 0x78,
    0x78, 0x78, 0x78, 0x78, 0x78, 0xf8, 0xf8, 0xf0,
    0xf0, 0xf0, 0xe0, 0xe0, 0x80, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xc0, 0xfe, 0xff, 0xff, 0xff,
    0xff, 0xef, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0,
    0xe0, 0xe0, 0xe0, 0xe0, 0xf0, 0xb0, 0xb8, 0xbd,
    0x1f, 0x1f, 0x0f, 0x0f, 0x07, 0x00, 0x00, 0x00,
    0x00, 0x00, 0xf8, 0xff, 0xff, 0xff, 0xff, 0x3f,
    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x01, 0x81, 0x81, 0xc3, 0xe7, 0xff,
    0xff, 0xff, 0xfe, 0x7c, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0x0f,
    0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0x0f,
    0x0f, 0x0f, 0x0f, 0x07, 0x07, 0x07, 0x03, 0x03,
    0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

pub static KEY_C: [u8; 128] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80,
    0xc0, 0xc0, 0xe0, 0xe0, 0xf0, 0xf0, 0x70, 0x70,
    0x38, 0x38, 0x38, 0x38, 0x38, 0x38, 0x38, 0x78,
    0x78, 0xf8, 0xf0, 0xf0, 0x70, 0x00, 0x00, 0x00,
    0x00, 0x80, 0xe0, 0xf8, 0xfc, 0xfe, 0xff, 0x3f,
    0x0f, 0x07, 0x03, 0x01, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x0f, 0x3f, 0xff, 0xff, 0xff, 0xff, 0xf0,
    0xc0, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80,
    0xc0, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x01, 0x01, 0x03, 0x03,
    0x07, 0x07, 0x0f, 0x0f, 0x0f, 0x0e, 0x0e, 0x0e,
    0x0e, 0x0e, 0x0e, 0x0e, 0x0f, 0x07, 0x07, 0x07,
    0x03, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

pub static KEY_D: [u8; 128] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0xe0, 0xf8, 0xf8,
    0xf8, 0xf8, 0xf8, 0x78, 0x78, 0x78, 0x78, 0x78,
    0x78, 0x78, 0x78, 0x78, 0x78, 0x78, 0xf8, 0xf8,
    0xf0, 0xf0, 0xf0, 0xe0, 0xc0, 0x80, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xc0, 0xfe, 0xff, 0xff, 0xff,
    0xff, 0x1f, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x01, 0x03, 0x8f, 0xff, 0xff, 0xff, 0xff, 0xfc,
    0x00, 0x00, 0xf8, 0xff, 0xff, 0xff, 0xff, 0x3f,
    0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x80, 0x80, 0x80, 0xc0, 0xe0,
    0xf0, 0xfc, 0xff, 0x7f, 0x3f, 0x1f, 0x0f, 0x03,
    0x00, 0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0x0f,
    0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0x0f,
    0x0f, 0x0f, 0x0f, 0x07, 0x07, 0x07, 0x03, 0x03,
    0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

pub static KEY_E: [u8; 128] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0xe0, 0xf8, 0xf8,
    0xf8, 0xf8, 0xf8, 0x38, 0x38, 0x38, 0x38, 0x38,
    0x38, 0x38, 0x38, 0x38, 0x38, 0x38, 0x38, 0x38,
    0x38, 0x38, 0x38, 0x38, 0x38, 0x18, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xc0, 0xfc, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0,
    0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0,
    0xc0, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0xf8, 0xff, 0xff, 0xff, 0xff, 0x7f,
    0x03, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0x0e,
    0x0e, 0x0e, 0x0e, 0x0e, 0x0e, 0x0e, 0x0e, 0x0e,
    0x0e, 0x0e, 0x0e, 0x0e, 0x0e, 0x0e, 0x0e, 0x0e,
    0x0e, 0x0e, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

pub static KEY_F: [u8; 128] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0xe0, 0xf8, 0xf8,
    0xf8, 0xf8, 0xf8, 0x38, 0x38, 0x38, 0x38, 0x38,
    0x38, 0x38, 0x38, 0x38, 0x38, 0x38, 0x38, 0x38,
    0x38, 0x38, 0x38, 0x38, 0x38, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xc0, 0xfc, 0xff, 0xff, 0xff,
    0xff, 0xdf, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0,
    0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0,
    0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0xf8, 0xff, 0xff, 0xff, 0xff, 0x7f,
    0x03, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0x07, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

pub static KEY_G: [u8; 128] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80,
    0xc0, 0xc0, 0xe0, 0xe0, 0xe0, 0xf0, 0x70, 0x70,
    0x38, 0x38, 0x38, 0x38, 0x38, 0x38, 0x38, 0x78,
    0x78, 0xf8, 0xf0, 0xf0, 0xf0, 0x60, 0x00, 0x00,
    0x00, 0x80, 0xe0, 0xf8, 0xfc, 0xfe, 0xff, 0x7f,
    0x0f, 0x07, 0x03, 0x01, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0,
    0xc0, 0xc0, 0xc1, 0xc3, 0x41, 0x00, 0x00, 0x00,
    0x00, 0x0f, 0x3f, 0xff, 0xff, 0xff, 0xff, 0xf0,
    0xc0, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x01, 0x01, 0x01, 0xc1, 0xfd, 0xff,
    0xff, 0xff, 0xff, 0x07, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x01, 0x01, 0x03, 0x03,
    0x07, 0x07, 0x0f, 0x0f, 0x0e, 0x0e, 0x0e, 0x0e,
    0x0e, 0x0e, 0x0e, 0x0e, 0x0f, 0x07, 0x07, 0x07,
    0x07, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];


/* key modifiers, 16x16 px */

pub static MOD_SHARP: [u8; 32] = [
    0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xe0,
    0xf0, 0xd8, 0xc0, 0xc0, 0xe0, 0xf8, 0xc8, 0xc0,
    0x18, 0x98, 0xf8, 0x38, 0x1c, 0x1f, 0x9b, 0xf8,
    0x38, 0x1c, 0x1f, 0x19, 0x18, 0x18, 0x18, 0x08,
];

pub static MOD_FLAT: [u8; 32] = [
    0x00, 0x00, 0x00, 0x80, 0xf8, 0xf8, 0xb8, 0xc0,
    0xc0, 0xc0, 0xc0, 0x80, 0x80, 0x00, 0x00, 0x00,
    0x00, 0x00, 0xf8, 0xff, 0x7f, 0xc3, 0xc0, 0xc0,
    0xc0, 0x60, 0x7d, 0x3f, 0x1f, 0x00, 0x00, 0x00,
];

pub static MOD_BLANK: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];


/* menu bars, 84x8 px, one per selectable item */

pub static MENU_BAR_KEY: [u8; 84] = [
    0x80, 0xa0, 0x9e, 0x99, 0xa4, 0x90, 0xac, 0xac,
    0xac, 0x80, 0xfc, 0x90, 0x8c, 0x80, 0x00, 0x00,
    0x00, 0x3c, 0x04, 0x3c, 0x04, 0x3c, 0x10, 0x2c,
    0x24, 0x1c, 0x10, 0x2c, 0x24, 0x3c, 0x13, 0x2c,
    0x2c, 0x2c, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3e,
    0x24, 0x10, 0x2c, 0x2c, 0x2c, 0x00, 0x3c, 0x04,
    0x3c, 0x04, 0x3c, 0x60, 0x3c, 0x24, 0x1c, 0x10,
    0x2c, 0x24, 0x1c, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3c, 0x04, 0x3c, 0x04, 0x3c, 0x10, 0x2c, 0x2c,
    0x2c, 0x00, 0x3e, 0x24, 0x20, 0x1c, 0x04, 0x10,
    0x2c, 0x2c, 0x2c, 0x00,
];

pub static MENU_BAR_MODE: [u8; 84] = [
    0x00, 0x20, 0x1e, 0x19, 0x24, 0x10, 0x2c, 0x2c,
    0x2c, 0x80, 0x7c, 0x10, 0x0c, 0x00, 0x00, 0x00,
    0x80, 0xbc, 0x84, 0xbc, 0x84, 0xbc, 0x90, 0xac,
    0xa4, 0x9c, 0x90, 0xac, 0xa4, 0xbc, 0x93, 0xac,
    0xac, 0xac, 0x80, 0x00, 0x00, 0x00, 0x00, 0x3e,
    0x24, 0x10, 0x2c, 0x2c, 0x2c, 0x00, 0x3c, 0x04,
    0x3c, 0x04, 0x3c, 0x60, 0x3c, 0x24, 0x1c, 0x10,
    0x2c, 0x24, 0x1c, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3c, 0x04, 0x3c, 0x04, 0x3c, 0x10, 0x2c, 0x2c,
    0x2c, 0x00, 0x3e, 0x24, 0x20, 0x1c, 0x04, 0x10,
    0x2c, 0x2c, 0x2c, 0x00,
];

pub static MENU_BAR_TEMPO: [u8; 84] = [
    0x00, 0x20, 0x1e, 0x19, 0x24, 0x10, 0x2c, 0x2c,
    0x2c, 0x80, 0x7c, 0x10, 0x0c, 0x00, 0x00, 0x00,
    0x00, 0x3c, 0x04, 0x3c, 0x04, 0x3c, 0x10, 0x2c,
    0x24, 0x1c, 0x10, 0x2c, 0x24, 0x3c, 0x13, 0x2c,
    0x2c, 0x2c, 0x00, 0x00, 0x00, 0x00, 0x80, 0xbe,
    0xa4, 0x90, 0xac, 0xac, 0xac, 0x80, 0xbc, 0x84,
    0xbc, 0x84, 0xbc, 0xe0, 0xbc, 0xa4, 0x9c, 0x90,
    0xac, 0xa4, 0x9c, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x3c, 0x04, 0x3c, 0x04, 0x3c, 0x10, 0x2c, 0x2c,
    0x2c, 0x00, 0x3e, 0x24, 0x20, 0x1c, 0x04, 0x10,
    0x2c, 0x2c, 0x2c, 0x00,
];

pub static MENU_BAR_METRE: [u8; 84] = [
    0x00, 0x20, 0x1e, 0x19, 0x24, 0x10, 0x2c, 0x2c,
    0x2c, 0x80, 0x7c, 0x10, 0x0c, 0x00, 0x00, 0x00,
    0x00, 0x3c, 0x04, 0x3c, 0x04, 0x3c, 0x10, 0x2c,
    0x24, 0x1c, 0x10, 0x2c, 0x24, 0x3c, 0x13, 0x2c,
    0x2c, 0x2c, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3e,
    0x24, 0x10, 0x2c, 0x2c, 0x2c, 0x00, 0x3c, 0x04,
    0x3c, 0x04, 0x3c, 0x60, 0x3c, 0x24, 0x1c, 0x10,
    0x2c, 0x24, 0x1c, 0x00, 0x00, 0x00, 0x00, 0x80,
    0xbc, 0x84, 0xbc, 0x84, 0xbc, 0x90, 0xac, 0xac,
    0xac, 0x80, 0xbe, 0xa4, 0xa0, 0x9c, 0x84, 0x90,
    0xac, 0xac, 0xac, 0x80,
];


/* playback mode icons, 32x16 px */

pub static MODE_CHORD: [u8; 64] = [
    0x92, 0x92, 0x92, 0xd2, 0xd2, 0x92, 0x92, 0x92,
    0x92, 0x92, 0x92, 0x92, 0x92, 0x92, 0x92, 0x92,
    0x92, 0x92, 0x92, 0x92, 0x92, 0x92, 0x92, 0x92,
    0x92, 0x92, 0x92, 0x92, 0x92, 0x92, 0x92, 0x92,
    0x24, 0x24, 0x24, 0x7f, 0x7f, 0x24, 0x24, 0x24,
    0x24, 0x24, 0x24, 0x24, 0x24, 0x24, 0x24, 0x24,
    0x24, 0x24, 0x24, 0x24, 0x24, 0x24, 0x24, 0x24,
    0x24, 0x24, 0x24, 0x24, 0x24, 0x24, 0x24, 0x24,
];

pub static MODE_CHORD_ARP: [u8; 64] = [
    0x92, 0x92, 0x92, 0xd2, 0xd2, 0x92, 0x92, 0x92,
    0x92, 0x92, 0x92, 0x92, 0x92, 0x92, 0x92, 0x92,
    0x92, 0x92, 0x92, 0xd2, 0xd2, 0x92, 0x92, 0x92,
    0x92, 0x92, 0x92, 0x92, 0x92, 0x92, 0x92, 0x92,
    0x24, 0x24, 0x24, 0x7f, 0x7f, 0x24, 0x24, 0x24,
    0x24, 0x24, 0x24, 0x2e, 0x2e, 0x24, 0x24, 0x24,
    0x24, 0x24, 0x24, 0x25, 0x25, 0x24, 0x24, 0x24,
    0x24, 0x24, 0x24, 0x2e, 0x2e, 0x24, 0x24, 0x24,
];

pub static MODE_CHORD_ARP_OCT: [u8; 64] = [
    0x92, 0x92, 0x92, 0xd2, 0xd2, 0x92, 0x92, 0x92,
    0x92, 0x92, 0x92, 0x92, 0x92, 0x92, 0x92, 0x92,
    0x92, 0x92, 0x92, 0xd2, 0xd2, 0x92, 0x92, 0x92,
    0x92, 0x92, 0x92, 0x9e, 0x9e, 0x92, 0x92, 0x92,
    0x24, 0x24, 0x24, 0x7f, 0x7f, 0x24, 0x24, 0x24,
    0x24, 0x24, 0x24, 0x2e, 0x2e, 0x24, 0x24, 0x24,
    0x24, 0x24, 0x24, 0x25, 0x25, 0x24, 0x24, 0x24,
    0x24, 0x24, 0x24, 0x24, 0x24, 0x24, 0x24, 0x24,
];

pub static MODE_ARP: [u8; 64] = [
    0x92, 0x92, 0x92, 0x92, 0x92, 0x92, 0x92, 0x92,
    0x92, 0x92, 0x92, 0x92, 0x92, 0x92, 0x92, 0x92,
    0x92, 0x92, 0x92, 0xd2, 0xd2, 0x92, 0x92, 0x92,
    0x92, 0x92, 0x92, 0x92, 0x92, 0x92, 0x92, 0x92,
    0x24, 0x24, 0x24, 0x74, 0x74, 0x24, 0x24, 0x24,
    0x24, 0x24, 0x24, 0x2e, 0x2e, 0x24, 0x24, 0x24,
    0x24, 0x24, 0x24, 0x25, 0x25, 0x24, 0x24, 0x24,
    0x24, 0x24, 0x24, 0x2e, 0x2e, 0x24, 0x24, 0x24,
];

pub static MODE_ARP_OCT: [u8; 64] = [
    0x92, 0x92, 0x92, 0x92, 0x92, 0x92, 0x92, 0x92,
    0x92, 0x92, 0x92, 0x92, 0x92, 0x92, 0x92, 0x92,
    0x92, 0x92, 0x92, 0xd2, 0xd2, 0x92, 0x92, 0x92,
    0x92, 0x92, 0x92, 0x9e, 0x9e, 0x92, 0x92, 0x92,
    0x24, 0x24, 0x24, 0x74, 0x74, 0x24, 0x24, 0x24,
    0x24, 0x24, 0x24, 0x2e, 0x2e, 0x24, 0x24, 0x24,
    0x24, 0x24, 0x24, 0x25, 0x25, 0x24, 0x24, 0x24,
    0x24, 0x24, 0x24, 0x24, 0x24, 0x24, 0x24, 0x24,
];


/* tempo digits, 8x16 px each */

pub static DIGITS: [[u8; 16]; 10] = [
    [
        0xe0, 0xf8, 0x1c, 0x0c, 0x0c, 0x1c, 0xf8, 0xe0,
        0x07, 0x1f, 0x38, 0x30, 0x30, 0x38, 0x1f, 0x07,
    ],
    [
        0x00, 0x30, 0x30, 0x38, 0xfc, 0xfc, 0x00, 0x00,
        0x00, 0x30, 0x30, 0x30, 0x3f, 0x3f, 0x30, 0x30,
    ],
    [
        0x08, 0x1c, 0x0c, 0x0c, 0x8c, 0xf8, 0x78, 0x00,
        0x38, 0x3c, 0x36, 0x33, 0x31, 0x30, 0x30, 0x30,
    ],
    [
        0x08, 0x1c, 0x8c, 0x8c, 0x8c, 0xcc, 0xf8, 0x70,
        0x38, 0x30, 0x31, 0x31, 0x31, 0x33, 0x1f, 0x0e,
    ],
    [
        0x00, 0x80, 0xe0, 0x70, 0x38, 0xfc, 0xfc, 0x00,
        0x07, 0x07, 0x07, 0x06, 0x06, 0x3f, 0x3f, 0x06,
    ],
    [
        0x00, 0xfc, 0xfc, 0xcc, 0xcc, 0x8c, 0x8c, 0x0c,
        0x30, 0x30, 0x30, 0x30, 0x30, 0x39, 0x1f, 0x0f,
    ],
    [
        0xc0, 0xf0, 0xf8, 0xd8, 0xcc, 0x8c, 0x8c, 0x00,
        0x0f, 0x1f, 0x38, 0x30, 0x30, 0x39, 0x1f, 0x0f,
    ],
    [
        0x0c, 0x0c, 0x0c, 0xcc, 0xec, 0x3c, 0x1c, 0x00,
        0x00, 0x38, 0x3e, 0x07, 0x00, 0x00, 0x00, 0x00,
    ],
    [
        0x70, 0xf8, 0xfc, 0x8c, 0x8c, 0x8c, 0xf8, 0x78,
        0x1e, 0x1f, 0x33, 0x31, 0x31, 0x33, 0x1f, 0x1e,
    ],
    [
        0xf0, 0xf8, 0x9c, 0x0c, 0x0c, 0x1c, 0xf8, 0xf0,
        0x00, 0x31, 0x31, 0x33, 0x1b, 0x1f, 0x0f, 0x03,
    ],
];

pub static DIGIT_BLANK: [u8; 16] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/* metre separator, 8x16 px, hand drawn */
pub static SLASH: [u8; 16] = [
    0x00, 0x00, 0x00, 0x00, 0xc0, 0x30, 0x0c, 0x03,
    0xc0, 0x30, 0x0c, 0x03, 0x00, 0x00, 0x00, 0x00,
];
