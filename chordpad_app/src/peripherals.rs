//! Device initialisation and interfacing.

use chordpad_core::lcd::{DisplayLink, Lcd};
use cortex_m::asm;
use embedded_hal::blocking::spi::Write as SpiWrite;
use embedded_hal::digital::v2::OutputPin;
use fugit::{HertzU32, RateExtU32};
use rp_pico::{
    hal::{
        clocks::{self, Clock},
        gpio::{
            pin::bank0::{Gpio16, Gpio17, Gpio20},
            FunctionSpi, Pin, PushPullOutput,
        },
        pac::{self, SPI0},
        pwm::{FreeRunning, Pwm2, Slice, Slices},
        sio::Sio,
        spi::{Enabled, Spi},
        timer::{monotonic::Monotonic, Alarm0, Alarm1},
        usb::UsbBus,
        Timer, Watchdog,
    },
    Pins, XOSC_CRYSTAL_FREQ,
};
use usb_device::{
    bus::UsbBusAllocator,
    device::{UsbDevice, UsbDeviceBuilder, UsbVidPid},
};
use usbd_midi::{data::usb::constants::USB_CLASS_NONE, midi_device::MidiClass};

use crate::buttons::Buttons;

// type aliases for the display control pins
type LcdDcPin = Pin<Gpio16, PushPullOutput>;
type LcdCsPin = Pin<Gpio17, PushPullOutput>;
type LcdResetPin = Pin<Gpio20, PushPullOutput>;

/// Command/data byte link to the LCD over SPI0, chip select per byte.
pub struct SpiLink {
    spi: Spi<Enabled, SPI0, 8>,
    dc: LcdDcPin,
    cs: LcdCsPin,
}

impl SpiLink {
    fn send(&mut self, byte: u8) {
        self.cs.set_low().ok();
        self.spi.write(&[byte]).ok();
        self.cs.set_high().ok();
    }
}

impl DisplayLink for SpiLink {
    fn command(&mut self, byte: u8) {
        self.dc.set_low().ok();
        self.send(byte);
    }

    fn data(&mut self, byte: u8) {
        self.dc.set_high().ok();
        self.send(byte);
    }
}

// chordpad-specific display type
pub type Display = Lcd<SpiLink>;

// PWM slice driving the LCD back light
pub type Backlight = Slice<Pwm2, FreeRunning>;

// USB MIDI class device types
pub type UsbMidiClass = MidiClass<'static, UsbBus>;
pub type UsbMidiDevice = UsbDevice<'static, UsbBus>;

/// USB bus allocator, static because the class and device borrow from it
/// for the life of the program.
static mut USB_BUS: Option<UsbBusAllocator<UsbBus>> = None;

pub fn setup(
    mut pac: pac::Peripherals,
) -> (
    Display,
    Buttons,
    UsbMidiDevice,
    UsbMidiClass,
    Backlight,
    Alarm1,
    Monotonic<Alarm0>,
) {
    // setup gpio pins
    let sio = Sio::new(pac.SIO);
    let pins = Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    // setup clocks
    let mut watchdog = Watchdog::new(pac.WATCHDOG);
    let clocks = clocks::init_clocks_and_plls(
        XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .expect("init: init_clocks_and_plls(...) should succeed");
    let system_clock_hz = clocks.system_clock.freq().to_Hz();

    // setup display on SPI0, with dedicated D/C, chip select and reset pins
    let _spi_sclk = pins.gpio18.into_mode::<FunctionSpi>();
    let _spi_mosi = pins.gpio19.into_mode::<FunctionSpi>();
    let display = new_display(
        pac.SPI0,
        &mut pac.RESETS,
        clocks.peripheral_clock.freq(),
        pins.gpio16.into_push_pull_output(),
        pins.gpio17.into_push_pull_output(),
        pins.gpio20.into_push_pull_output(),
        system_clock_hz,
    );

    // setup buttons: chord I, V, vi, IV on gpio2..5, menu prev/select/next
    // on gpio6..8
    let buttons = Buttons::new([
        pins.gpio2.into_pull_up_input().into(),
        pins.gpio3.into_pull_up_input().into(),
        pins.gpio4.into_pull_up_input().into(),
        pins.gpio5.into_pull_up_input().into(),
        pins.gpio6.into_pull_up_input().into(),
        pins.gpio7.into_pull_up_input().into(),
        pins.gpio8.into_pull_up_input().into(),
    ]);

    // setup back light PWM, off until the intro ramps it up
    let pwm_slices = Slices::new(pac.PWM, &mut pac.RESETS);
    let mut backlight = pwm_slices.pwm2;
    backlight.set_ph_correct();
    backlight.enable();
    backlight.channel_b.output_to(pins.gpio21);

    let (usb_dev, usb_midi) = new_usb_midi(
        pac.USBCTRL_REGS,
        pac.USBCTRL_DPRAM,
        clocks.usb_clock,
        &mut pac.RESETS,
    );

    // timer: alarm 0 backs the RTIC monotonic, alarm 1 is the tick timer
    let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS);
    let monotonic_alarm = timer.alarm_0().expect("init: alarm_0 should be free");
    let tick_alarm = timer.alarm_1().expect("init: alarm_1 should be free");

    (
        display,
        buttons,
        usb_dev,
        usb_midi,
        backlight,
        tick_alarm,
        Monotonic::new(timer, monotonic_alarm),
    )
}

fn new_display(
    spi0: SPI0,
    resets: &mut pac::RESETS,
    peripheral_clock_freq: HertzU32,
    dc: LcdDcPin,
    cs: LcdCsPin,
    mut reset: LcdResetPin,
    system_clock_hz: u32,
) -> Display {
    let spi = Spi::<_, _, 8>::new(spi0).init(
        resets,
        peripheral_clock_freq,
        4.MHz(),
        &embedded_hal::spi::MODE_0,
    );

    // hardware reset pulse; a bounded busy-wait is fine this early
    reset.set_low().ok();
    asm::delay(system_clock_hz / 20); // 50 ms
    reset.set_high().ok();

    let mut display = Lcd::new(SpiLink { spi, dc, cs });
    display.init();
    display.clear();
    display
}

fn new_usb_midi(
    regs: pac::USBCTRL_REGS,
    dpram: pac::USBCTRL_DPRAM,
    usb_clock: clocks::UsbClock,
    resets: &mut pac::RESETS,
) -> (UsbMidiDevice, UsbMidiClass) {
    let usb_bus = UsbBusAllocator::new(UsbBus::new(regs, dpram, usb_clock, true, resets));
    let usb_bus_ref = unsafe {
        USB_BUS = Some(usb_bus);
        USB_BUS.as_ref().unwrap()
    };

    let usb_midi = MidiClass::new(usb_bus_ref);
    let usb_dev = UsbDeviceBuilder::new(usb_bus_ref, UsbVidPid(0x16c0, 0x05e4))
        .manufacturer("chordpad")
        .product("chordpad MIDI controller")
        .device_class(USB_CLASS_NONE)
        .build();

    (usb_dev, usb_midi)
}
