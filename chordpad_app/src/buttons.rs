//! Debounced button input: four chord buttons and three menu buttons.

use chordpad_core::chord::Degree;
use chordpad_core::menu::MenuButton;
use debouncr::{debounce_4, Debouncer, Edge, Repeat4};
use embedded_hal::digital::v2::InputPin;
use heapless::Vec;
use rp2040_hal::gpio::DynPin;

pub const BUTTON_COUNT: usize = 7;

/// Logical identity of each input, in wiring order.
const LAYOUT: [ButtonId; BUTTON_COUNT] = [
    ButtonId::Chord(Degree::Tonic),
    ButtonId::Chord(Degree::Dominant),
    ButtonId::Chord(Degree::Submediant),
    ButtonId::Chord(Degree::Subdominant),
    ButtonId::Menu(MenuButton::Prev),
    ButtonId::Menu(MenuButton::Select),
    ButtonId::Menu(MenuButton::Next),
];

#[derive(Clone, Copy, Debug)]
enum ButtonId {
    Chord(Degree),
    Menu(MenuButton),
}

#[derive(Clone, Copy, Debug)]
pub enum ButtonEvent {
    ChordPress(Degree),
    ChordRelease(Degree),
    MenuPress(MenuButton),
    MenuRelease(MenuButton),
}

pub struct Buttons {
    pins: [DynPin; BUTTON_COUNT],
    debouncers: [Debouncer<u8, Repeat4>; BUTTON_COUNT],
}

impl Buttons {
    /// Takes the pins in `LAYOUT` order: chord I, V, vi, IV, then menu
    /// prev, select, next. All are pulled up and active low.
    pub fn new(pins: [DynPin; BUTTON_COUNT]) -> Buttons {
        Buttons {
            pins,
            debouncers: [
                debounce_4(false),
                debounce_4(false),
                debounce_4(false),
                debounce_4(false),
                debounce_4(false),
                debounce_4(false),
                debounce_4(false),
            ],
        }
    }

    /// Sample every pin once and report the edges that settled. Call this
    /// at a fixed rate; four agreeing samples flip a button's state.
    pub fn update(&mut self) -> Vec<ButtonEvent, BUTTON_COUNT> {
        let mut events = Vec::new();
        for (index, pin) in self.pins.iter().enumerate() {
            let pressed = pin.is_low().unwrap_or(false);
            let event = match self.debouncers[index].update(pressed) {
                Some(Edge::Rising) => Some(match LAYOUT[index] {
                    ButtonId::Chord(degree) => ButtonEvent::ChordPress(degree),
                    ButtonId::Menu(button) => ButtonEvent::MenuPress(button),
                }),
                Some(Edge::Falling) => Some(match LAYOUT[index] {
                    ButtonId::Chord(degree) => ButtonEvent::ChordRelease(degree),
                    ButtonId::Menu(button) => ButtonEvent::MenuRelease(button),
                }),
                None => None,
            };
            if let Some(event) = event {
                events.push(event).unwrap();
            }
        }
        events
    }
}
