//! The playback engine: one state machine per chord press.
//!
//! A chord button press constructs the chord, latches the playback mode
//! selected at that moment, and emits the mode's start events. Modes with a
//! cycle behavior arm the shared timer at eighth-note granularity; every
//! expiry advances a beat counter through 0..=7 and the poll step emits the
//! cycle events for that beat. Release stops the timer and emits note-offs
//! for the whole chord, whatever subset of it is currently sounding.
//!
//! Arpeggiated modes re-strike notes without a note-off in between; the
//! layering is intentional, synths merge the repeated note-ons into one
//! sustained voice with accents.

use heapless::Vec;
use midi_types::MidiMessage;

use crate::chord::{Chord, Degree};
use crate::menu::{PlaybackKey, PlaybackMode};
use crate::timer::{TickTimer, TimerUser, TICKS_PER_SECOND};
use crate::{MIDI_CHANNEL, VELOCITY};

/// Upper bound of MIDI events a single engine step can emit.
pub const MAX_EVENTS_PER_STEP: usize = 8;

pub type MidiEvents = Vec<MidiMessage, MAX_EVENTS_PER_STEP>;

/// Beats per cycle; the beat counter wraps here.
const BEATS: u8 = 8;

/// Timer ticks between cycle steps: half a quarter note at the given tempo,
/// so arpeggios run in eighth notes.
pub fn cycle_interval(tempo: u8) -> u16 {
    ((TICKS_PER_SECOND * 60 / tempo as u32) / 2) as u16
}

#[derive(Debug, Default)]
pub struct Playback {
    pressed: bool,
    mode: PlaybackMode,
    chord: Chord,
    count: u8,
}

impl Playback {
    /// Whether a chord button is currently held.
    pub fn ongoing(&self) -> bool {
        self.pressed
    }

    /// Chord button press: construct the chord, latch the mode and emit its
    /// start events. A second chord button while one is held is a no-op;
    /// only one concurrent chord is supported.
    pub fn press(
        &mut self,
        degree: Degree,
        key: PlaybackKey,
        mode: PlaybackMode,
        tempo: u8,
        timer: &mut TickTimer,
    ) -> MidiEvents {
        let mut events = MidiEvents::new();

        if self.pressed {
            return events;
        }

        self.chord = Chord::construct(key, degree);
        self.mode = mode;
        self.count = 0;
        self.start(&mut events);

        if self.cycles() {
            timer.start(cycle_interval(tempo), TimerUser::Playback);
        }

        self.pressed = true;
        events
    }

    /// Chord button release: stop the timer, reset the beat counter and
    /// release all four notes. Releasing notes that never sounded is safe,
    /// a MIDI note-off for a silent note is a no-op downstream.
    pub fn release(&mut self, timer: &mut TickTimer) -> MidiEvents {
        let mut events = MidiEvents::new();

        if !self.pressed {
            return events;
        }

        timer.stop();
        self.count = 0;
        for note in self.chord.notes() {
            note_off(&mut events, note);
        }

        self.pressed = false;
        events
    }

    /// Beat advance, called from the timer interrupt path. Nothing but the
    /// counter moves here; the cycle events go out from `poll_cycle`.
    pub fn advance_beat(&mut self) {
        self.count += 1;
        if self.count == BEATS {
            self.count = 0;
        }
    }

    /// Emit the cycle events for the current beat.
    pub fn poll_cycle(&self) -> MidiEvents {
        let mut events = MidiEvents::new();
        if self.pressed {
            self.cycle(&mut events);
        }
        events
    }

    /// Whether the latched mode wants periodic cycle calls at all.
    fn cycles(&self) -> bool {
        !matches!(self.mode, PlaybackMode::Chord)
    }

    /// Start events. Plain chord playback strikes all four notes at once;
    /// the arpeggiated modes enter through their own beat-0 cycle step.
    fn start(&mut self, events: &mut MidiEvents) {
        match self.mode {
            PlaybackMode::Chord => {
                for note in self.chord.notes() {
                    note_on(events, note);
                }
            }
            _ => self.cycle(events),
        }
    }

    fn cycle(&self, events: &mut MidiEvents) {
        let chord = self.chord;
        match self.mode {
            PlaybackMode::Chord => {}

            PlaybackMode::ChordArpeggio => match self.count {
                // beat 0 lays down the chord; the root re-strikes at the
                // half cycle, third and fifth walk the beats in between
                0 => {
                    note_on(events, chord.third);
                    note_on(events, chord.fifth);
                    note_on(events, chord.octave);
                    note_on(events, chord.root);
                }
                4 => note_on(events, chord.root),
                1 | 5 => note_on(events, chord.third),
                2 | 6 => note_on(events, chord.fifth),
                3 | 7 => note_on(events, chord.third),
                _ => {}
            },

            PlaybackMode::ChordArpeggioOctave => match self.count {
                // the octave from the previous cycle is released before the
                // chord comes back down
                0 => {
                    note_off(events, chord.octave);
                    note_on(events, chord.root);
                    note_on(events, chord.third);
                    note_on(events, chord.fifth);
                }
                1 => note_on(events, chord.third),
                2 => note_on(events, chord.fifth),
                3 => note_on(events, chord.octave),
                _ => {}
            },

            PlaybackMode::Arpeggio => match self.count {
                0 | 4 => note_on(events, chord.root),
                1 | 5 => note_on(events, chord.third),
                2 | 6 => note_on(events, chord.fifth),
                3 | 7 => note_on(events, chord.third),
                _ => {}
            },

            PlaybackMode::ArpeggioOctave => match self.count {
                0 | 4 => note_on(events, chord.root),
                1 | 5 => note_on(events, chord.third),
                2 | 6 => note_on(events, chord.fifth),
                3 | 7 => note_on(events, chord.octave),
                _ => {}
            },
        }
    }
}

fn note_on(events: &mut MidiEvents, note: u8) {
    events
        .push(MidiMessage::NoteOn(
            MIDI_CHANNEL.into(),
            note.into(),
            VELOCITY.into(),
        ))
        .unwrap();
}

fn note_off(events: &mut MidiEvents, note: u8) {
    events
        .push(MidiMessage::NoteOff(
            MIDI_CHANNEL.into(),
            note.into(),
            VELOCITY.into(),
        ))
        .unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuButton;
    use crate::timer::TimerProgram;
    use crate::Controller;

    fn on(note: u8) -> MidiMessage {
        MidiMessage::NoteOn(MIDI_CHANNEL.into(), note.into(), VELOCITY.into())
    }

    fn off(note: u8) -> MidiMessage {
        MidiMessage::NoteOff(MIDI_CHANNEL.into(), note.into(), VELOCITY.into())
    }

    /// Run one timer expiry through the interrupt and poll phases.
    fn tick(controller: &mut Controller) -> MidiEvents {
        controller.timer_fired();
        controller.poll().midi
    }

    #[test]
    fn chord_mode_should_strike_and_release_all_four_notes() {
        let mut controller = Controller::new();
        let events = controller.chord_press(Degree::Tonic);
        assert_eq!(&[on(48), on(52), on(55), on(60)], events.as_slice());
        // no cycle behavior, so the timer stays unarmed
        assert_eq!(None, controller.timer.owner());

        let events = controller.chord_release();
        assert_eq!(&[off(48), off(52), off(55), off(60)], events.as_slice());
    }

    #[test]
    fn release_without_press_should_emit_nothing() {
        let mut controller = Controller::new();
        assert!(controller.chord_release().is_empty());
    }

    #[test]
    fn second_chord_button_while_held_should_be_ignored() {
        let mut controller = Controller::new();
        controller.chord_press(Degree::Tonic);
        let events = controller.chord_press(Degree::Dominant);
        assert!(events.is_empty());

        // the release still targets the first chord
        let events = controller.chord_release();
        assert_eq!(&[off(48), off(52), off(55), off(60)], events.as_slice());
    }

    #[test]
    fn every_mode_should_release_cleanly_right_after_press() {
        for mode_index in 0..PlaybackMode::COUNT {
            let mut playback = Playback::default();
            let mut timer = TickTimer::default();
            playback.press(
                Degree::Tonic,
                PlaybackKey::C,
                PlaybackMode::from_index(mode_index),
                120,
                &mut timer,
            );
            let events = playback.release(&mut timer);
            assert_eq!(&[off(48), off(52), off(55), off(60)], events.as_slice());
            assert_eq!(None, timer.owner());
        }
    }

    #[test]
    fn chord_arpeggio_should_layer_chord_then_walk_the_triad() {
        let mut controller = Controller::new();
        controller.menu_press(MenuButton::Select); // cursor to mode
        controller.menu_release();
        controller.menu_press(MenuButton::Next); // Chord -> ChordArpeggio
        controller.menu_release();

        let events = controller.chord_press(Degree::Tonic);
        assert_eq!(&[on(52), on(55), on(60), on(48)], events.as_slice());
        assert_eq!(
            Some(TimerProgram::Arm(cycle_interval(120))),
            controller.timer.take_program()
        );

        let beats: [&[MidiMessage]; 8] = [
            &[on(52)],                            // 1
            &[on(55)],                            // 2
            &[on(52)],                            // 3
            &[on(48)],                            // 4
            &[on(52)],                            // 5
            &[on(55)],                            // 6
            &[on(52)],                            // 7
            &[on(52), on(55), on(60), on(48)],    // wrapped back to 0
        ];
        for expected in beats {
            assert_eq!(expected, tick(&mut controller).as_slice());
        }

        let events = controller.chord_release();
        assert_eq!(&[off(48), off(52), off(55), off(60)], events.as_slice());
        assert_eq!(None, controller.timer.owner());
    }

    #[test]
    fn chord_arpeggio_octave_should_release_octave_on_beat_zero() {
        let mut playback = Playback::default();
        let mut timer = TickTimer::default();
        let events = playback.press(
            Degree::Tonic,
            PlaybackKey::C,
            PlaybackMode::ChordArpeggioOctave,
            120,
            &mut timer,
        );
        assert_eq!(&[off(60), on(48), on(52), on(55)], events.as_slice());

        let expected: [&[MidiMessage]; 8] = [
            &[on(52)],
            &[on(55)],
            &[on(60)],
            &[], // beats 4..=7 are silent in this mode
            &[],
            &[],
            &[],
            &[off(60), on(48), on(52), on(55)],
        ];
        for step in expected {
            playback.advance_beat();
            assert_eq!(step, playback.poll_cycle().as_slice());
        }
    }

    #[test]
    fn arpeggio_should_play_one_note_per_beat() {
        let mut playback = Playback::default();
        let mut timer = TickTimer::default();
        let events = playback.press(
            Degree::Tonic,
            PlaybackKey::C,
            PlaybackMode::Arpeggio,
            120,
            &mut timer,
        );
        assert_eq!(&[on(48)], events.as_slice());

        let expected = [on(52), on(55), on(52), on(48), on(52), on(55), on(52), on(48)];
        for step in expected {
            playback.advance_beat();
            assert_eq!(&[step], playback.poll_cycle().as_slice());
        }
    }

    #[test]
    fn arpeggio_octave_should_reach_the_octave_every_fourth_beat() {
        let mut playback = Playback::default();
        let mut timer = TickTimer::default();
        playback.press(
            Degree::Tonic,
            PlaybackKey::C,
            PlaybackMode::ArpeggioOctave,
            120,
            &mut timer,
        );

        let expected = [on(52), on(55), on(60), on(48), on(52), on(55), on(60)];
        for step in expected {
            playback.advance_beat();
            assert_eq!(&[step], playback.poll_cycle().as_slice());
        }
    }

    #[test]
    fn mode_should_latch_at_press_time() {
        let mut controller = Controller::new();
        controller.menu_press(MenuButton::Select); // cursor to mode
        controller.menu_release();
        controller.menu_press(MenuButton::Next); // -> ChordArpeggio
        controller.menu_release();

        controller.chord_press(Degree::Tonic);

        // changing the menu selection mid-press must not affect the cycle;
        // beats 3 and 4 would differ under ChordArpeggioOctave
        controller.menu_press(MenuButton::Next);
        controller.menu_release();

        for expected in [on(52), on(55), on(52), on(48)] {
            assert_eq!(&[expected], tick(&mut controller).as_slice());
        }
    }

    #[test]
    fn beat_counter_should_wrap_after_eight_ticks() {
        let mut playback = Playback::default();
        for _ in 0..BEATS {
            playback.advance_beat();
        }
        assert_eq!(0, playback.count);
    }

    #[test]
    fn cycle_interval_should_be_an_eighth_note() {
        // 120 BPM: half a 0.5 s quarter note
        assert_eq!(2929, cycle_interval(120));
        // the tempo clamp extremes need no special casing
        assert_eq!(11718, cycle_interval(30));
        assert_eq!(1464, cycle_interval(240));
    }

    #[test]
    fn end_to_end_press_tick_release_at_120_bpm() {
        let mut controller = Controller::new();
        controller.menu_press(MenuButton::Select);
        controller.menu_release();
        controller.menu_press(MenuButton::Next); // mode: ChordArpeggio
        controller.menu_release();

        let events = controller.chord_press(Degree::Tonic);
        assert_eq!(&[on(52), on(55), on(60), on(48)], events.as_slice());
        assert_eq!(
            Some(TimerProgram::Arm(2929)),
            controller.timer.take_program()
        );

        assert_eq!(&[on(52)], tick(&mut controller).as_slice());

        let events = controller.chord_release();
        assert_eq!(&[off(48), off(52), off(55), off(60)], events.as_slice());
        assert_eq!(
            Some(TimerProgram::Disarm),
            controller.timer.take_program()
        );

        // a stale hardware expiry after the stop is ignored
        controller.timer_fired();
        assert!(controller.poll().midi.is_empty());
    }

    #[test]
    fn menu_repeat_and_playback_should_share_the_timer_politely() {
        let mut controller = Controller::new();

        // playback takes the timer even while a menu button is held
        controller.menu_press(MenuButton::Next);
        assert_eq!(Some(TimerUser::Menu), controller.timer.owner());
        controller.menu_release();
        controller.menu_press(MenuButton::Select);
        controller.menu_release();
        controller.menu_press(MenuButton::Next); // mode -> ChordArpeggio
        controller.chord_press(Degree::Tonic);
        assert_eq!(Some(TimerUser::Playback), controller.timer.owner());

        // the held menu button's release leaves playback's timer alone
        controller.menu_release();
        assert_eq!(Some(TimerUser::Playback), controller.timer.owner());

        controller.chord_release();
        assert_eq!(None, controller.timer.owner());
    }

    #[test]
    fn ui_updates_should_not_interleave_with_playback_cycles() {
        let mut controller = Controller::new();
        controller.menu_press(MenuButton::Select);
        controller.menu_release();
        controller.menu_press(MenuButton::Next); // mode -> ChordArpeggio
        controller.menu_release();
        controller.chord_press(Degree::Tonic);

        controller.timer_fired();
        let output = controller.poll();
        assert_eq!(&[on(52)], output.midi.as_slice());
        assert!(output.ui.is_empty());
    }
}
