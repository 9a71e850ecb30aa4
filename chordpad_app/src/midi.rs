//! USB-MIDI framing for the messages the engine emits.

use defmt::{debug, trace};
use midi_types::MidiMessage;
use usbd_midi::data::byte::u7::U7;
use usbd_midi::data::midi::channel::Channel;
use usbd_midi::data::midi::message::Message;
use usbd_midi::data::midi::notes::Note;
use usbd_midi::data::usb_midi::cable_number::CableNumber;
use usbd_midi::data::usb_midi::usb_midi_event_packet::UsbMidiEventPacket;

/// Frame an engine message as a USB-MIDI event packet on cable 0. Returns
/// `None` for message kinds the device never produces.
pub fn packet_for(message: &MidiMessage) -> Option<UsbMidiEventPacket> {
    let framed = match *message {
        MidiMessage::NoteOn(_, note, velocity) => {
            Message::NoteOn(channel(), note_for(note), velocity_for(velocity))
        }
        MidiMessage::NoteOff(_, note, velocity) => {
            Message::NoteOff(channel(), note_for(note), velocity_for(velocity))
        }
        _ => return None,
    };
    Some(UsbMidiEventPacket {
        cable_number: CableNumber::Cable0,
        message: framed,
    })
}

pub fn log_message(message: &MidiMessage) {
    match message {
        MidiMessage::NoteOn(_, note, velocity) => {
            let note: u8 = (*note).into();
            let velocity: u8 = (*velocity).into();
            debug!("[midi_send] note on note={} velocity={}", note, velocity);
        }
        MidiMessage::NoteOff(_, note, _velocity) => {
            let note: u8 = (*note).into();
            debug!("[midi_send] note off note={}", note);
        }
        _ => trace!("[midi_send] UNKNOWN"),
    }
}

/// The device only ever speaks on MIDI channel 1.
fn channel() -> Channel {
    Channel::Channel1
}

fn note_for(note: midi_types::Note) -> Note {
    // chord notes stay well inside 0..=127, the conversion cannot miss
    Note::try_from(u8::from(note)).unwrap_or(Note::C3)
}

fn velocity_for(velocity: midi_types::Value7) -> U7 {
    U7::try_from(u8::from(velocity)).unwrap_or(U7::MAX)
}
