#![no_std]
#![no_main]

mod buttons;
mod gfx;
mod gui;
mod intro;
mod midi;
mod peripherals;

use panic_probe as _;

// RTIC app module runs the firmware as a set of concurrent tasks sharing the
// controller state; this module is responsible for interfacing with the
// hardware
#[rtic::app(
    device = rp_pico::hal::pac,
    peripherals = true,
    dispatchers = [DMA_IRQ_0, DMA_IRQ_1, PWM_IRQ_WRAP]
)]
mod app {
    use defmt::{self, error, info, trace};
    use defmt_rtt as _;
    use embedded_hal::PwmPin;
    use fugit::MicrosDurationU64;
    use midi_types::MidiMessage;
    use rp_pico::hal::timer::{monotonic::Monotonic, Alarm, Alarm0, Alarm1};

    use crate::{
        buttons::{ButtonEvent, Buttons},
        gui, intro, midi,
        peripherals::{setup, Backlight, Display, UsbMidiClass, UsbMidiDevice},
    };
    use chordpad_core::{
        menu::UiUpdate,
        timer::{ticks_to_duration, TimerProgram},
        Controller,
    };

    /// How often to sample the buttons. Four agreeing samples settle an
    /// edge, so this gives ~8 ms of debounce.
    const BUTTON_READ_INTERVAL: MicrosDurationU64 = MicrosDurationU64::millis(2);

    /// Hold each intro animation frame this long.
    const INTRO_FRAME_INTERVAL: MicrosDurationU64 = MicrosDurationU64::millis(50);

    /// USB send retry policy: a not-ready endpoint gets this many attempts
    /// with a fixed backoff before the message is dropped.
    const MIDI_SEND_ATTEMPTS: u8 = 10;
    const MIDI_SEND_BACKOFF: MicrosDurationU64 = MicrosDurationU64::millis(2);

    /// Define RTIC monotonic timer. Also used for defmt.
    #[monotonic(binds = TIMER_IRQ_0, default = true)]
    type TimerMonotonic = Monotonic<Alarm0>;

    /// RTIC shared resources.
    #[shared]
    struct Shared {
        /// Menu, playback and tick timer big-ball-of-state.
        controller: Controller,

        /// Hardware face of the controller's tick timer.
        tick_alarm: Alarm1,

        /// USB device handle.
        usb_dev: UsbMidiDevice,

        /// USB MIDI class endpoint.
        usb_midi: UsbMidiClass,

        /// Interface to the display.
        display: Display,
    }

    /// RTIC local resources.
    #[local]
    struct Local {
        buttons: Buttons,
        backlight: Backlight,
    }

    /// RTIC init method sets up the hardware and initialises shared and
    /// local resources.
    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        info!("[init] hello chordpad!");

        // configure RTIC monotonic as source of timestamps for defmt
        defmt::timestamp!("{=u64:us}", {
            monotonics::now().duration_since_epoch().to_micros()
        });

        let (display, buttons, usb_dev, usb_midi, backlight, tick_alarm, monotonic_timer) =
            setup(ctx.device);

        // play the boot animation; button input starts when it finishes
        intro_frame::spawn(0).expect("intro_frame::spawn should succeed");

        info!("[init] complete");

        (
            Shared {
                controller: Controller::new(),
                tick_alarm,
                usb_dev,
                usb_midi,
                display,
            },
            Local { buttons, backlight },
            init::Monotonics(monotonic_timer),
        )
    }

    /// USB device poll, driven by the controller's interrupt.
    #[task(binds = USBCTRL_IRQ, priority = 4, shared = [usb_dev, usb_midi])]
    fn usbctrl_irq(ctx: usbctrl_irq::Context) {
        (ctx.shared.usb_dev, ctx.shared.usb_midi).lock(|usb_dev, usb_midi| {
            usb_dev.poll(&mut [usb_midi]);
        });
    }

    /// Tick timer expiry. Compare-match context: flag the expiry, re-arm
    /// the alarm for auto-repeat and get out; the engine work runs from
    /// `engine_poll` at task priority.
    #[task(binds = TIMER_IRQ_1, priority = 4, shared = [controller, tick_alarm])]
    fn timer_irq(ctx: timer_irq::Context) {
        (ctx.shared.controller, ctx.shared.tick_alarm).lock(|controller, tick_alarm| {
            tick_alarm.clear_interrupt();
            controller.timer_fired();
            if let Some(ticks) = controller.timer.interval() {
                tick_alarm
                    .schedule(ticks_to_duration(ticks))
                    .expect("tick_alarm re-arm should succeed");
            }
        });
        if engine_poll::spawn().is_err() {
            error!("engine_poll spawn failed, tick dropped");
        }
    }

    /// Drain a pending timer expiry: playback cycles emit MIDI, menu
    /// auto-repeat emits display updates and may reprogram the timer.
    #[task(priority = 2, shared = [controller, tick_alarm])]
    fn engine_poll(ctx: engine_poll::Context) {
        let output = (ctx.shared.controller, ctx.shared.tick_alarm).lock(
            |controller, tick_alarm| {
                let output = controller.poll();
                program_tick_alarm(controller, tick_alarm);
                output
            },
        );

        for message in output.midi {
            send_midi(message);
        }
        for update in output.ui {
            show(update);
        }
    }

    /// Sample the buttons and feed settled edges into the controller.
    #[task(priority = 3, shared = [controller, tick_alarm], local = [buttons])]
    fn read_buttons(ctx: read_buttons::Context) {
        let events = ctx.local.buttons.update();

        if !events.is_empty() {
            (ctx.shared.controller, ctx.shared.tick_alarm).lock(|controller, tick_alarm| {
                for event in events {
                    trace!("[read_buttons] event");
                    match event {
                        ButtonEvent::ChordPress(degree) => {
                            for message in controller.chord_press(degree) {
                                send_midi(message);
                            }
                        }
                        ButtonEvent::ChordRelease(_) => {
                            for message in controller.chord_release() {
                                send_midi(message);
                            }
                        }
                        ButtonEvent::MenuPress(button) => {
                            for update in controller.menu_press(button) {
                                show(update);
                            }
                        }
                        ButtonEvent::MenuRelease(_) => controller.menu_release(),
                    }
                    program_tick_alarm(controller, tick_alarm);
                }
            });
        }

        read_buttons::spawn_after(BUTTON_READ_INTERVAL)
            .expect("read_buttons::spawn_after should succeed");
    }

    /// Send one framed message over USB, retrying a not-ready endpoint with
    /// a fixed backoff. Exhausting the retries drops the message with only
    /// a log line; the transport is best-effort by design.
    #[task(priority = 2, capacity = 16, shared = [usb_midi])]
    fn midi_send(mut ctx: midi_send::Context, message: MidiMessage, attempts_left: u8) {
        if attempts_left == MIDI_SEND_ATTEMPTS {
            midi::log_message(&message);
        }

        let packet = match midi::packet_for(&message) {
            Some(packet) => packet,
            None => return,
        };

        let result = ctx.shared.usb_midi.lock(|usb_midi| usb_midi.send_message(packet));
        if result.is_err() {
            if attempts_left > 1 {
                if midi_send::spawn_after(MIDI_SEND_BACKOFF, message, attempts_left - 1).is_err() {
                    error!("[midi_send] requeue failed, message dropped");
                }
            } else {
                error!("[midi_send] endpoint not ready, message dropped");
            }
        }
    }

    /// Draw one changed display area. The slow SPI writes happen at the
    /// lowest priority so input and playback stay responsive.
    #[task(priority = 1, capacity = 8, shared = [display])]
    fn render(mut ctx: render::Context, update: UiUpdate) {
        ctx.shared.display.lock(|display| gui::render(display, update));
    }

    /// Play one frame of the boot animation and ramp the back light, then
    /// either queue the next frame or hand over to the main UI.
    #[task(priority = 1, shared = [display, controller], local = [backlight])]
    fn intro_frame(mut ctx: intro_frame::Context, index: usize) {
        ctx.shared.display.lock(|display| {
            intro::FRAMES[index].replay(display);
        });

        let channel = &mut ctx.local.backlight.channel_b;
        let duty_step = channel.get_max_duty() / intro::FRAMES.len() as u16;
        channel.set_duty(duty_step * (index as u16 + 1));

        if index + 1 < intro::FRAMES.len() {
            intro_frame::spawn_after(INTRO_FRAME_INTERVAL, index + 1)
                .expect("intro_frame::spawn_after should succeed");
        } else {
            info!("[intro] complete");
            (ctx.shared.display, ctx.shared.controller).lock(|display, controller| {
                display.clear();
                for update in controller.startup_view() {
                    gui::render(display, update);
                }
            });
            read_buttons::spawn().expect("read_buttons::spawn should succeed");
        }
    }

    /// Queue a MIDI message for transmission with the full retry budget.
    fn send_midi(message: MidiMessage) {
        if midi_send::spawn(message, MIDI_SEND_ATTEMPTS).is_err() {
            error!("[midi_send] queue full, message dropped");
        }
    }

    /// Queue a display update for rendering.
    fn show(update: UiUpdate) {
        if render::spawn(update).is_err() {
            error!("[render] queue full, update dropped");
        }
    }

    /// Apply a pending (re)programming request to the hardware alarm.
    fn program_tick_alarm(controller: &mut Controller, tick_alarm: &mut Alarm1) {
        match controller.timer.take_program() {
            Some(TimerProgram::Arm(ticks)) => {
                tick_alarm
                    .schedule(ticks_to_duration(ticks))
                    .expect("tick_alarm schedule should succeed");
                tick_alarm.enable_interrupt();
            }
            Some(TimerProgram::Disarm) => {
                tick_alarm.disable_interrupt();
                tick_alarm.clear_interrupt();
            }
            None => {}
        }
    }

    // idle task needed because default RTIC idle task calls wfi(), which
    // breaks rtt
    #[idle]
    fn task_main(_: task_main::Context) -> ! {
        loop {
            cortex_m::asm::nop();
        }
    }
}
