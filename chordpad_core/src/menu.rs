//! Menu selection state and the long-press auto-repeat engine.
//!
//! Four independent selection cursors (key, playback mode, tempo, metre)
//! plus the cursor over the menu items themselves. Key, mode and metre wrap
//! on next/prev; tempo clamps at its bounds. The three menu buttons map to
//! prev/select/next, and holding prev or next repeats the action: slowly at
//! first, then faster after a few cycles. Holding select toggles inverse
//! video.

use heapless::Vec;

use crate::timer::{TickTimer, TimerUser};

pub const TEMPO_MIN: u8 = 30;
pub const TEMPO_DEFAULT: u8 = 120;
pub const TEMPO_MAX: u8 = 240;

/// Long-press repeat schedule, in timer ticks.
const DELAY_LONG_PRESS: u16 = 0x44a8; // 1.5 seconds
const DELAY_CYCLE_SLOW: u16 = 0x16e2; // 0.5 seconds
const DELAY_CYCLE_FAST: u16 = 0x0492; // 0.1 seconds

/// Cycles at the slow delay before a held button speeds up.
const CYCLES_UNTIL_FAST: u8 = 3;

/// The three menu buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuButton {
    Prev,
    Select,
    Next,
}

/// Menu items the select button cycles through, forward only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuItem {
    #[default]
    Key,
    Mode,
    Tempo,
    Metre,
}

impl MenuItem {
    fn next(self) -> MenuItem {
        match self {
            MenuItem::Key => MenuItem::Mode,
            MenuItem::Mode => MenuItem::Tempo,
            MenuItem::Tempo => MenuItem::Metre,
            MenuItem::Metre => MenuItem::Key,
        }
    }
}

/// Playback key, all twelve semitones from C.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackKey {
    #[default]
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    BFlat,
    B,
}

impl PlaybackKey {
    pub const COUNT: usize = 12;

    pub fn from_index(index: usize) -> PlaybackKey {
        match index {
            0 => PlaybackKey::C,
            1 => PlaybackKey::CSharp,
            2 => PlaybackKey::D,
            3 => PlaybackKey::DSharp,
            4 => PlaybackKey::E,
            5 => PlaybackKey::F,
            6 => PlaybackKey::FSharp,
            7 => PlaybackKey::G,
            8 => PlaybackKey::GSharp,
            9 => PlaybackKey::A,
            10 => PlaybackKey::BFlat,
            _ => PlaybackKey::B,
        }
    }

    fn next(self) -> PlaybackKey {
        PlaybackKey::from_index((self as usize + 1) % PlaybackKey::COUNT)
    }

    fn prev(self) -> PlaybackKey {
        PlaybackKey::from_index((self as usize + PlaybackKey::COUNT - 1) % PlaybackKey::COUNT)
    }
}

/// Playback modes the engine can run a chord press in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackMode {
    #[default]
    Chord,
    ChordArpeggio,
    ChordArpeggioOctave,
    Arpeggio,
    ArpeggioOctave,
}

impl PlaybackMode {
    pub const COUNT: usize = 5;

    pub fn from_index(index: usize) -> PlaybackMode {
        match index {
            0 => PlaybackMode::Chord,
            1 => PlaybackMode::ChordArpeggio,
            2 => PlaybackMode::ChordArpeggioOctave,
            3 => PlaybackMode::Arpeggio,
            _ => PlaybackMode::ArpeggioOctave,
        }
    }

    fn next(self) -> PlaybackMode {
        PlaybackMode::from_index((self as usize + 1) % PlaybackMode::COUNT)
    }

    fn prev(self) -> PlaybackMode {
        PlaybackMode::from_index((self as usize + PlaybackMode::COUNT - 1) % PlaybackMode::COUNT)
    }
}

/// Playback metre.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Metre {
    #[default]
    FourFour,
    ThreeFour,
    SixEight,
}

impl Metre {
    pub const COUNT: usize = 3;

    pub fn from_index(index: usize) -> Metre {
        match index {
            0 => Metre::FourFour,
            1 => Metre::ThreeFour,
            _ => Metre::SixEight,
        }
    }

    fn next(self) -> Metre {
        Metre::from_index((self as usize + 1) % Metre::COUNT)
    }

    fn prev(self) -> Metre {
        Metre::from_index((self as usize + Metre::COUNT - 1) % Metre::COUNT)
    }

    pub fn numerator(&self) -> u8 {
        match self {
            Metre::FourFour => 4,
            Metre::ThreeFour => 3,
            Metre::SixEight => 6,
        }
    }

    pub fn denominator(&self) -> u8 {
        match self {
            Metre::FourFour | Metre::ThreeFour => 4,
            Metre::SixEight => 8,
        }
    }
}

/// A display area whose content changed. The platform layer renders these;
/// the menu itself never touches the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiUpdate {
    MenuBar(MenuItem),
    Key(PlaybackKey),
    Mode(PlaybackMode),
    Tempo(u8),
    Metre(Metre),
    Inverse(bool),
}

pub type UiUpdates = Vec<UiUpdate, 6>;

/// What a button does on press and while held, with its repeat schedule.
/// Indexed by `MenuButton`; a fixed table instead of function pointers.
struct ButtonHandler {
    start: MenuAction,
    cycle: Option<MenuAction>,
    init_delay: u16,
    cont_delay: u16,
    /// Slow cycles before switching to `cont_delay`; 0 means one-shot.
    cont_delay_cycles: u8,
}

#[derive(Clone, Copy, Debug)]
enum MenuAction {
    PrevValue,
    NextValue,
    Select,
    ToggleInverse,
}

static HANDLERS: [ButtonHandler; 3] = [
    ButtonHandler {
        start: MenuAction::PrevValue,
        cycle: Some(MenuAction::PrevValue),
        init_delay: DELAY_CYCLE_SLOW,
        cont_delay: DELAY_CYCLE_FAST,
        cont_delay_cycles: CYCLES_UNTIL_FAST,
    },
    ButtonHandler {
        start: MenuAction::Select,
        // TODO open a settings menu here once there is one
        cycle: Some(MenuAction::ToggleInverse),
        init_delay: DELAY_LONG_PRESS,
        cont_delay: 0,
        cont_delay_cycles: 0,
    },
    ButtonHandler {
        start: MenuAction::NextValue,
        cycle: Some(MenuAction::NextValue),
        init_delay: DELAY_CYCLE_SLOW,
        cont_delay: DELAY_CYCLE_FAST,
        cont_delay_cycles: CYCLES_UNTIL_FAST,
    },
];

#[derive(Debug)]
pub struct Menu {
    item: MenuItem,
    key: PlaybackKey,
    mode: PlaybackMode,
    tempo: u8,
    metre: Metre,
    inverse: bool,

    // long-press state
    pressed: bool,
    active: MenuButton,
    cycle_count: u8,
    cycle_handled: bool,
}

impl Default for Menu {
    fn default() -> Menu {
        Menu {
            item: MenuItem::Key,
            key: PlaybackKey::C,
            mode: PlaybackMode::Chord,
            tempo: TEMPO_DEFAULT,
            metre: Metre::FourFour,
            inverse: false,
            pressed: false,
            active: MenuButton::Select,
            cycle_count: 0,
            cycle_handled: false,
        }
    }
}

impl Menu {
    pub fn key(&self) -> PlaybackKey {
        self.key
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn tempo(&self) -> u8 {
        self.tempo
    }

    pub fn metre(&self) -> Metre {
        self.metre
    }

    /// Updates that draw every menu area with its current value. The metre
    /// shares the tempo's display area, so only the tempo is drawn here.
    pub fn startup_view(&self) -> UiUpdates {
        let mut updates = UiUpdates::new();
        updates.push(UiUpdate::MenuBar(self.item)).unwrap();
        updates.push(UiUpdate::Key(self.key)).unwrap();
        updates.push(UiUpdate::Mode(self.mode)).unwrap();
        updates.push(UiUpdate::Tempo(self.tempo)).unwrap();
        updates
    }

    /// Menu button went down: run its start action once, and arm the repeat
    /// timer unless playback holds it. Playback has priority; a long press
    /// taking the timer over would silence the running cycle.
    pub fn button_press(
        &mut self,
        button: MenuButton,
        playback_ongoing: bool,
        timer: &mut TickTimer,
    ) -> UiUpdates {
        let mut updates = UiUpdates::new();

        if self.pressed {
            return updates;
        }

        let handler = &HANDLERS[button as usize];
        self.apply(handler.start, &mut updates);

        if !playback_ongoing {
            timer.start(handler.init_delay, TimerUser::Menu);
            self.cycle_count = 0;
            self.cycle_handled = false;
        }

        self.active = button;
        self.pressed = true;
        updates
    }

    /// Menu button came back up.
    pub fn button_release(&mut self, playback_ongoing: bool, timer: &mut TickTimer) {
        self.pressed = false;
        if !playback_ongoing {
            timer.stop();
        }
    }

    /// Poll step for an elapsed long-press interval: run the held button's
    /// cycle action, then advance the repeat schedule. The first few cycles
    /// run at the initial delay; after `cont_delay_cycles` of them the timer
    /// restarts at the faster delay, or stops entirely for one-shot buttons.
    pub fn poll_tick(&mut self, timer: &mut TickTimer) -> UiUpdates {
        let mut updates = UiUpdates::new();
        let handler = &HANDLERS[self.active as usize];

        if let Some(action) = handler.cycle {
            self.apply(action, &mut updates);
        }

        if !self.cycle_handled {
            if handler.cont_delay_cycles == 0 {
                timer.stop();
                self.cycle_handled = true;
            } else {
                self.cycle_count += 1;
                if self.cycle_count == handler.cont_delay_cycles {
                    timer.start(handler.cont_delay, TimerUser::Menu);
                    self.cycle_handled = true;
                }
            }
        }

        updates
    }

    fn apply(&mut self, action: MenuAction, updates: &mut UiUpdates) {
        let update = match action {
            MenuAction::PrevValue => self.value_prev(),
            MenuAction::NextValue => self.value_next(),
            MenuAction::Select => {
                self.select(updates);
                return;
            }
            MenuAction::ToggleInverse => {
                self.inverse = !self.inverse;
                Some(UiUpdate::Inverse(self.inverse))
            }
        };
        if let Some(update) = update {
            updates.push(update).unwrap();
        }
    }

    /// Advance to the next menu item and refresh the shared tempo/metre
    /// area with the value now under the cursor.
    fn select(&mut self, updates: &mut UiUpdates) {
        self.item = self.item.next();
        updates.push(UiUpdate::MenuBar(self.item)).unwrap();
        match self.item {
            MenuItem::Tempo => updates.push(UiUpdate::Tempo(self.tempo)).unwrap(),
            MenuItem::Metre => updates.push(UiUpdate::Metre(self.metre)).unwrap(),
            _ => {}
        }
    }

    fn value_next(&mut self) -> Option<UiUpdate> {
        match self.item {
            MenuItem::Key => {
                self.key = self.key.next();
                Some(UiUpdate::Key(self.key))
            }
            MenuItem::Mode => {
                self.mode = self.mode.next();
                Some(UiUpdate::Mode(self.mode))
            }
            MenuItem::Tempo => {
                if self.tempo < TEMPO_MAX {
                    self.tempo += 1;
                    Some(UiUpdate::Tempo(self.tempo))
                } else {
                    None
                }
            }
            MenuItem::Metre => {
                self.metre = self.metre.next();
                Some(UiUpdate::Metre(self.metre))
            }
        }
    }

    fn value_prev(&mut self) -> Option<UiUpdate> {
        match self.item {
            MenuItem::Key => {
                self.key = self.key.prev();
                Some(UiUpdate::Key(self.key))
            }
            MenuItem::Mode => {
                self.mode = self.mode.prev();
                Some(UiUpdate::Mode(self.mode))
            }
            MenuItem::Tempo => {
                if self.tempo > TEMPO_MIN {
                    self.tempo -= 1;
                    Some(UiUpdate::Tempo(self.tempo))
                } else {
                    None
                }
            }
            MenuItem::Metre => {
                self.metre = self.metre.prev();
                Some(UiUpdate::Metre(self.metre))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::TimerProgram;

    fn press_and_release(menu: &mut Menu, button: MenuButton, timer: &mut TickTimer) -> UiUpdates {
        let updates = menu.button_press(button, false, timer);
        menu.button_release(false, timer);
        updates
    }

    #[test]
    fn key_should_wrap_in_both_directions() {
        let mut menu = Menu::default();
        let mut timer = TickTimer::default();
        press_and_release(&mut menu, MenuButton::Prev, &mut timer);
        assert_eq!(PlaybackKey::B, menu.key());
        press_and_release(&mut menu, MenuButton::Next, &mut timer);
        assert_eq!(PlaybackKey::C, menu.key());
    }

    #[test]
    fn tempo_should_clamp_at_bounds_without_redraw() {
        let mut menu = Menu::default();
        let mut timer = TickTimer::default();
        menu.tempo = TEMPO_MAX;
        menu.item = MenuItem::Tempo;
        let updates = press_and_release(&mut menu, MenuButton::Next, &mut timer);
        assert_eq!(TEMPO_MAX, menu.tempo());
        assert!(updates.is_empty());

        menu.tempo = TEMPO_MIN;
        let updates = press_and_release(&mut menu, MenuButton::Prev, &mut timer);
        assert_eq!(TEMPO_MIN, menu.tempo());
        assert!(updates.is_empty());
    }

    #[test]
    fn select_should_cycle_items_and_refresh_shared_area() {
        let mut menu = Menu::default();
        let mut timer = TickTimer::default();

        let updates = press_and_release(&mut menu, MenuButton::Select, &mut timer);
        assert_eq!(&[UiUpdate::MenuBar(MenuItem::Mode)], updates.as_slice());

        let updates = press_and_release(&mut menu, MenuButton::Select, &mut timer);
        assert_eq!(
            &[
                UiUpdate::MenuBar(MenuItem::Tempo),
                UiUpdate::Tempo(TEMPO_DEFAULT)
            ],
            updates.as_slice()
        );

        let updates = press_and_release(&mut menu, MenuButton::Select, &mut timer);
        assert_eq!(
            &[
                UiUpdate::MenuBar(MenuItem::Metre),
                UiUpdate::Metre(Metre::FourFour)
            ],
            updates.as_slice()
        );

        let updates = press_and_release(&mut menu, MenuButton::Select, &mut timer);
        assert_eq!(&[UiUpdate::MenuBar(MenuItem::Key)], updates.as_slice());
    }

    #[test]
    fn held_button_should_repeat_and_speed_up_after_three_cycles() {
        let mut menu = Menu::default();
        let mut timer = TickTimer::default();

        menu.button_press(MenuButton::Next, false, &mut timer);
        assert_eq!(Some(TimerProgram::Arm(DELAY_CYCLE_SLOW)), timer.take_program());
        assert_eq!(PlaybackKey::CSharp, menu.key());

        // three slow cycles, then the timer restarts at the fast delay
        for expected in [PlaybackKey::D, PlaybackKey::DSharp, PlaybackKey::E] {
            timer.fire();
            timer.take();
            menu.poll_tick(&mut timer);
            assert_eq!(expected, menu.key());
        }
        assert_eq!(Some(TimerProgram::Arm(DELAY_CYCLE_FAST)), timer.take_program());

        // further cycles keep repeating without reprogramming
        timer.fire();
        timer.take();
        menu.poll_tick(&mut timer);
        assert_eq!(PlaybackKey::F, menu.key());
        assert_eq!(None, timer.take_program());

        menu.button_release(false, &mut timer);
        assert_eq!(None, timer.owner());
    }

    #[test]
    fn held_select_should_toggle_inverse_once() {
        let mut menu = Menu::default();
        let mut timer = TickTimer::default();

        menu.button_press(MenuButton::Select, false, &mut timer);
        assert_eq!(Some(TimerProgram::Arm(DELAY_LONG_PRESS)), timer.take_program());

        timer.fire();
        timer.take();
        let updates = menu.poll_tick(&mut timer);
        assert_eq!(&[UiUpdate::Inverse(true)], updates.as_slice());
        // one-shot: the timer is stopped, no repeat follows
        assert_eq!(None, timer.owner());
    }

    #[test]
    fn press_should_not_take_timer_while_playback_is_ongoing() {
        let mut menu = Menu::default();
        let mut timer = TickTimer::default();
        timer.start(1234, TimerUser::Playback);
        timer.take_program();

        menu.button_press(MenuButton::Next, true, &mut timer);
        assert_eq!(Some(TimerUser::Playback), timer.owner());
        assert_eq!(None, timer.take_program());

        menu.button_release(true, &mut timer);
        assert_eq!(Some(TimerUser::Playback), timer.owner());
    }

    #[test]
    fn second_button_while_pressed_should_be_ignored() {
        let mut menu = Menu::default();
        let mut timer = TickTimer::default();
        menu.button_press(MenuButton::Next, false, &mut timer);
        let updates = menu.button_press(MenuButton::Prev, false, &mut timer);
        assert!(updates.is_empty());
        assert_eq!(PlaybackKey::CSharp, menu.key());
    }
}
