//! The shared countdown timer service.
//!
//! There is exactly one hardware countdown on the board, and two very
//! different users for it: the playback engine's cycle tick and the menu's
//! long-press auto-repeat. Whoever calls [`TickTimer::start`] last owns the
//! timer; callers coordinate through the playback/menu mutual exclusion
//! rule, not through this type.
//!
//! The expiry path is two-phase. The compare-match interrupt calls
//! [`TickTimer::fire`], which only raises a pending flag; the main loop
//! drains it with [`TickTimer::take`] and runs the actual cycle work there.
//! The interrupt context must never call into the rest of the system.

use fugit::MicrosDurationU32;

/// Abstract tick rate of the countdown: a 16-bit counter behind a /1024
/// prescaler on a 12 MHz clock. Tempo intervals and the long-press repeat
/// delays are all expressed in these ticks.
pub const TICKS_PER_SECOND: u32 = 11_718;

/// Who armed the timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerUser {
    Playback,
    Menu,
}

/// Hardware (re)programming request produced by `start`/`stop` and consumed
/// by the platform layer that owns the real alarm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerProgram {
    Arm(u16),
    Disarm,
}

#[derive(Debug, Default)]
pub struct TickTimer {
    owner: Option<TimerUser>,
    interval: u16,
    pending: bool,
    program: Option<TimerProgram>,
}

impl TickTimer {
    /// Arm the countdown. Replaces any previous registration, including one
    /// by the other user (last writer wins). A pending expiry of the old
    /// registration is discarded.
    pub fn start(&mut self, interval: u16, user: TimerUser) {
        self.owner = Some(user);
        self.interval = interval;
        self.pending = false;
        self.program = Some(TimerProgram::Arm(interval));
    }

    /// Disarm and clear the registration. Safe to call when already stopped.
    pub fn stop(&mut self) {
        self.owner = None;
        self.pending = false;
        self.program = Some(TimerProgram::Disarm);
    }

    /// Expiry, called from the compare-match interrupt. Raises the pending
    /// flag and reports the owner so the caller can do its own single-byte
    /// bookkeeping; everything heavier waits for the poll step.
    pub fn fire(&mut self) -> Option<TimerUser> {
        if self.owner.is_some() {
            self.pending = true;
        }
        self.owner
    }

    /// Poll step: drain a pending expiry, if any.
    pub fn take(&mut self) -> Option<TimerUser> {
        if self.pending {
            self.pending = false;
            self.owner
        } else {
            None
        }
    }

    pub fn owner(&self) -> Option<TimerUser> {
        self.owner
    }

    /// Interval in ticks while armed. The hardware layer re-arms with this
    /// after each expiry, giving the auto-repeat of compare-match mode.
    pub fn interval(&self) -> Option<u16> {
        self.owner.map(|_| self.interval)
    }

    /// Drain the pending hardware programming request.
    pub fn take_program(&mut self) -> Option<TimerProgram> {
        self.program.take()
    }
}

/// Convert a tick count to wall-clock time for platform alarms.
pub fn ticks_to_duration(ticks: u16) -> MicrosDurationU32 {
    MicrosDurationU32::micros((ticks as u64 * 1_000_000 / TICKS_PER_SECOND as u64) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_should_replace_previous_registration() {
        let mut timer = TickTimer::default();
        timer.start(100, TimerUser::Menu);
        timer.start(200, TimerUser::Playback);
        assert_eq!(Some(TimerUser::Playback), timer.owner());
        assert_eq!(Some(200), timer.interval());
    }

    #[test]
    fn fire_then_take_should_deliver_exactly_once() {
        let mut timer = TickTimer::default();
        timer.start(100, TimerUser::Playback);
        assert_eq!(Some(TimerUser::Playback), timer.fire());
        assert_eq!(Some(TimerUser::Playback), timer.take());
        assert_eq!(None, timer.take());
    }

    #[test]
    fn stop_should_drop_pending_expiry_and_be_idempotent() {
        let mut timer = TickTimer::default();
        timer.start(100, TimerUser::Menu);
        timer.fire();
        timer.stop();
        assert_eq!(None, timer.take());
        timer.stop();
        assert_eq!(None, timer.owner());
        assert_eq!(None, timer.interval());
    }

    #[test]
    fn fire_when_stopped_should_do_nothing() {
        let mut timer = TickTimer::default();
        assert_eq!(None, timer.fire());
        assert_eq!(None, timer.take());
    }

    #[test]
    fn restart_should_discard_stale_expiry_of_old_owner() {
        let mut timer = TickTimer::default();
        timer.start(100, TimerUser::Menu);
        timer.fire();
        timer.start(50, TimerUser::Playback);
        assert_eq!(None, timer.take());
    }

    #[test]
    fn start_and_stop_should_emit_hardware_programs() {
        let mut timer = TickTimer::default();
        timer.start(0x16e2, TimerUser::Menu);
        assert_eq!(Some(TimerProgram::Arm(0x16e2)), timer.take_program());
        assert_eq!(None, timer.take_program());
        timer.stop();
        assert_eq!(Some(TimerProgram::Disarm), timer.take_program());
    }

    #[test]
    fn ticks_should_convert_to_microseconds() {
        // one second's worth of ticks is one second, give or take rounding
        let duration = ticks_to_duration(TICKS_PER_SECOND as u16);
        assert_eq!(1_000_000, duration.to_micros());
    }
}
