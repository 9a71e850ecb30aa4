#![cfg_attr(not(test), no_std)]

pub mod chord;
pub mod lcd;
pub mod menu;
pub mod playback;
pub mod timer;
pub mod xbm;

use heapless::Vec;

use chord::Degree;
use menu::{Menu, MenuButton, UiUpdates};
use playback::{MidiEvents, Playback};
use timer::{TickTimer, TimerUser};

/// MIDI channel all note events are sent on.
pub const MIDI_CHANNEL: u8 = 0;

/// Note-on velocity for every event the device sends.
pub const VELOCITY: u8 = 0x7f;

/// Everything the poll step can produce in one pass.
#[derive(Debug, Default)]
pub struct PollOutput {
    pub midi: MidiEvents,
    pub ui: UiUpdates,
}

/// Top-level device state: menu selection, playback engine and the shared
/// tick timer, threaded through every input event and poll step.
///
/// The controller never talks to a transport itself. Input handlers return
/// the MIDI messages and display updates they caused, and the platform layer
/// delivers them. `timer_fired` is the only method meant for interrupt
/// context; it does nothing but flag state for the next `poll`.
#[derive(Debug, Default)]
pub struct Controller {
    pub menu: Menu,
    pub playback: Playback,
    pub timer: TickTimer,
}

impl Controller {
    pub fn new() -> Controller {
        Controller::default()
    }

    /// Display updates that draw the initial view of all menu areas.
    pub fn startup_view(&self) -> UiUpdates {
        self.menu.startup_view()
    }

    /// One of the four chord buttons went down.
    pub fn chord_press(&mut self, degree: Degree) -> MidiEvents {
        self.playback.press(
            degree,
            self.menu.key(),
            self.menu.mode(),
            self.menu.tempo(),
            &mut self.timer,
        )
    }

    /// The held chord button came back up.
    pub fn chord_release(&mut self) -> MidiEvents {
        self.playback.release(&mut self.timer)
    }

    /// One of the three menu buttons went down.
    pub fn menu_press(&mut self, button: MenuButton) -> UiUpdates {
        self.menu
            .button_press(button, self.playback.ongoing(), &mut self.timer)
    }

    /// The held menu button came back up.
    pub fn menu_release(&mut self) {
        self.menu
            .button_release(self.playback.ongoing(), &mut self.timer);
    }

    /// Timer expiry, called from the hardware compare-match interrupt.
    /// Bumps the beat counter and flags the expiry; nothing else may happen
    /// here, the cycle work runs from `poll` on the main loop.
    pub fn timer_fired(&mut self) {
        if let Some(TimerUser::Playback) = self.timer.fire() {
            self.playback.advance_beat();
        }
    }

    /// Main-loop poll step: drain a pending timer expiry and run the cycle
    /// behavior of whoever owns the timer.
    pub fn poll(&mut self) -> PollOutput {
        match self.timer.take() {
            Some(TimerUser::Playback) => PollOutput {
                midi: self.playback.poll_cycle(),
                ui: Vec::new(),
            },
            Some(TimerUser::Menu) => PollOutput {
                midi: Vec::new(),
                ui: self.menu.poll_tick(&mut self.timer),
            },
            None => PollOutput::default(),
        }
    }
}
