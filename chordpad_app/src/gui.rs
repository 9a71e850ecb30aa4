//! Map engine UI updates to glyphs and display areas.

use chordpad_core::lcd::{DisplayLink, Lcd};
use chordpad_core::menu::{Metre, MenuItem, PlaybackKey, PlaybackMode, UiUpdate};

use crate::gfx;

/// Draw one changed area.
pub fn render<L: DisplayLink>(lcd: &mut Lcd<L>, update: UiUpdate) {
    match update {
        UiUpdate::MenuBar(item) => lcd.set_menu(menu_bar(item)),
        UiUpdate::Key(key) => {
            let (letter, modifier) = key_glyphs(key);
            lcd.set_chord(letter, modifier);
        }
        UiUpdate::Mode(mode) => lcd.set_mode(mode_icon(mode)),
        UiUpdate::Tempo(tempo) => lcd.set_tempo(tempo_digits(tempo)),
        UiUpdate::Metre(metre) => lcd.set_tempo(metre_digits(metre)),
        UiUpdate::Inverse(on) => lcd.set_inverse(on),
    }
}

fn menu_bar(item: MenuItem) -> &'static [u8] {
    match item {
        MenuItem::Key => &gfx::MENU_BAR_KEY,
        MenuItem::Mode => &gfx::MENU_BAR_MODE,
        MenuItem::Tempo => &gfx::MENU_BAR_TEMPO,
        MenuItem::Metre => &gfx::MENU_BAR_METRE,
    }
}

fn key_glyphs(key: PlaybackKey) -> (&'static [u8], &'static [u8]) {
    match key {
        PlaybackKey::C => (&gfx::KEY_C, &gfx::MOD_BLANK),
        PlaybackKey::CSharp => (&gfx::KEY_C, &gfx::MOD_SHARP),
        PlaybackKey::D => (&gfx::KEY_D, &gfx::MOD_BLANK),
        PlaybackKey::DSharp => (&gfx::KEY_D, &gfx::MOD_SHARP),
        PlaybackKey::E => (&gfx::KEY_E, &gfx::MOD_BLANK),
        PlaybackKey::F => (&gfx::KEY_F, &gfx::MOD_BLANK),
        PlaybackKey::FSharp => (&gfx::KEY_F, &gfx::MOD_SHARP),
        PlaybackKey::G => (&gfx::KEY_G, &gfx::MOD_BLANK),
        PlaybackKey::GSharp => (&gfx::KEY_G, &gfx::MOD_SHARP),
        PlaybackKey::A => (&gfx::KEY_A, &gfx::MOD_BLANK),
        PlaybackKey::BFlat => (&gfx::KEY_B, &gfx::MOD_FLAT),
        PlaybackKey::B => (&gfx::KEY_B, &gfx::MOD_BLANK),
    }
}

fn mode_icon(mode: PlaybackMode) -> &'static [u8] {
    match mode {
        PlaybackMode::Chord => &gfx::MODE_CHORD,
        PlaybackMode::ChordArpeggio => &gfx::MODE_CHORD_ARP,
        PlaybackMode::ChordArpeggioOctave => &gfx::MODE_CHORD_ARP_OCT,
        PlaybackMode::Arpeggio => &gfx::MODE_ARP,
        PlaybackMode::ArpeggioOctave => &gfx::MODE_ARP_OCT,
    }
}

/// Tempo as three digits, hundreds first, leading zero blanked.
fn tempo_digits(tempo: u8) -> [&'static [u8]; 3] {
    let hundreds = (tempo / 100) as usize;
    [
        if hundreds == 0 {
            &gfx::DIGIT_BLANK
        } else {
            &gfx::DIGITS[hundreds]
        },
        &gfx::DIGITS[(tempo / 10 % 10) as usize],
        &gfx::DIGITS[(tempo % 10) as usize],
    ]
}

/// Metre in the tempo area: numerator, slash, denominator.
fn metre_digits(metre: Metre) -> [&'static [u8]; 3] {
    [
        &gfx::DIGITS[metre.numerator() as usize],
        &gfx::SLASH,
        &gfx::DIGITS[metre.denominator() as usize],
    ]
}
