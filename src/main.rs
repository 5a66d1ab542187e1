#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;

use rtic::app;

/// Clock time at power-on.
const START_HOUR: u8 = 12;
const START_MINUTE: u8 = 0;

/// One tick per minute.
const TICK_PERIOD_US: u32 = 60_000_000;

/// Button auto-repeat delay; each repeat shortens it to 8/10 down to the floor.
const REPEAT_START_US: u32 = 500_000;
const REPEAT_MIN_US: u32 = 20_000;

const INTENSITY: u8 = 0x0;

#[app(device = rp_pico::hal::pac, peripherals = true, dispatchers = [I2C0_IRQ])]
mod app {
    use super::*;
    use clock_display::display::{prepare_buffer, DEVICES};
    use clock_display::ClockDisplay;
    use max7219::MAX7219;
    use rp_pico::hal::{
        clocks::{init_clocks_and_plls, Clock},
        fugit::{ExtU32, RateExtU32},
        gpio::{bank0::Gpio15, FunctionSio, Pin, PullUp, SioInput},
        sio::Sio,
        spi::Spi,
        timer::{Alarm, Alarm0, Timer},
        watchdog::Watchdog,
    };
    use embedded_hal::digital::v2::{InputPin, ToggleableOutputPin};

    // Type definition for the MAX7219 display
    type Spi0 = Spi<rp_pico::hal::spi::Enabled, rp_pico::hal::pac::SPI0, (
        Pin<rp_pico::hal::gpio::bank0::Gpio19, rp_pico::hal::gpio::FunctionSpi, rp_pico::hal::gpio::PullDown>,
        Pin<rp_pico::hal::gpio::bank0::Gpio16, rp_pico::hal::gpio::FunctionSpi, rp_pico::hal::gpio::PullDown>,
        Pin<rp_pico::hal::gpio::bank0::Gpio18, rp_pico::hal::gpio::FunctionSpi, rp_pico::hal::gpio::PullDown>
    )>;
    type CsPin = Pin<rp_pico::hal::gpio::bank0::Gpio17, rp_pico::hal::gpio::FunctionSio<rp_pico::hal::gpio::SioOutput>, rp_pico::hal::gpio::PullDown>;
    type DisplayType = MAX7219<max7219::connectors::SpiConnectorSW<Spi0, CsPin>>;
    type LedPin = Pin<rp_pico::hal::gpio::bank0::Gpio25, rp_pico::hal::gpio::FunctionSio<rp_pico::hal::gpio::SioOutput>, rp_pico::hal::gpio::PullDown>;

    // Shared resources. Every clock mutation and render runs inside one lock.
    #[shared]
    struct Shared {
        clock: ClockDisplay,
        button: Pin<Gpio15, FunctionSio<SioInput>, PullUp>,
        alarm1: rp_pico::hal::timer::Alarm1,
        repeat_delay: u32,
    }

    #[local]
    struct Local {
        display: DisplayType,
        led: LedPin,
        alarm: Alarm0,
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        let mut pac = ctx.device;
        let mut watchdog = Watchdog::new(pac.WATCHDOG);
        let sio = Sio::new(pac.SIO);

        let external_xtal_freq_hz = 12_000_000u32;
        let clocks = init_clocks_and_plls(
            external_xtal_freq_hz,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok()
        .unwrap();

        let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
        let mut alarm = timer.alarm_0().unwrap();
        alarm.schedule(TICK_PERIOD_US.micros()).unwrap();
        alarm.enable_interrupt();

        let mut alarm1 = timer.alarm_1().unwrap();
        alarm1.enable_interrupt();

        let pins = rp_pico::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        let led = pins.led.into_push_pull_output();
        let button = pins.gpio15.into_pull_up_input();
        button.set_interrupt_enabled(rp_pico::hal::gpio::Interrupt::EdgeLow, true);

        let mosi = pins.gpio19.into_function::<rp_pico::hal::gpio::FunctionSpi>();
        let sck = pins.gpio18.into_function::<rp_pico::hal::gpio::FunctionSpi>();
        let miso = pins.gpio16.into_function::<rp_pico::hal::gpio::FunctionSpi>();
        let cs = pins.gpio17.into_push_pull_output();

        let spi = Spi::<_, _, _, 8>::new(pac.SPI0, (mosi, miso, sck));
        let spi = spi.init(
            &mut pac.RESETS,
            clocks.peripheral_clock.freq(),
            2_000_000u32.Hz(),
            &embedded_hal::spi::MODE_0,
        );

        let mut display = MAX7219::from_spi_cs(DEVICES, spi, cs).unwrap();
        display.power_on().unwrap();
        for i in 0..DEVICES {
            display.set_intensity(i, INTENSITY).unwrap();
            display.clear_display(i).unwrap();
        }

        let clock = ClockDisplay::with_time(START_HOUR, START_MINUTE).unwrap();
        defmt::info!("clock started at {=str}", clock.time());
        update_display::spawn().ok();

        (
            Shared {
                clock,
                button,
                alarm1,
                repeat_delay: REPEAT_START_US,
            },
            Local {
                display,
                led,
                alarm,
            },
            init::Monotonics(),
        )
    }

    // Hardware Task: Timer Interrupt, once per minute
    #[task(binds = TIMER_IRQ_0, priority = 1, shared = [clock], local = [alarm, led])]
    fn timer_tick(mut ctx: timer_tick::Context) {
        ctx.local.alarm.clear_interrupt();
        ctx.local.alarm.schedule(TICK_PERIOD_US.micros()).unwrap();

        ctx.local.led.toggle().unwrap();

        ctx.shared.clock.lock(|c| {
            c.time_tick();
            defmt::debug!("tick {=str}", c.time());
        });

        update_display::spawn().ok();
    }

    // Hardware Task: GPIO Interrupt (button press sets the time forward)
    #[task(binds = IO_IRQ_BANK0, priority = 1, shared = [clock, button, alarm1, repeat_delay])]
    fn button_press(mut ctx: button_press::Context) {
        // Disable interrupt to prevent bouncing re-entry
        ctx.shared.button.lock(|b| {
            b.set_interrupt_enabled(rp_pico::hal::gpio::Interrupt::EdgeLow, false);
            b.clear_interrupt(rp_pico::hal::gpio::Interrupt::EdgeLow);
        });

        ctx.shared.clock.lock(|c| c.time_tick());
        update_display::spawn().ok();

        ctx.shared.repeat_delay.lock(|d| *d = REPEAT_START_US);
        ctx.shared.alarm1.lock(|a| {
            a.clear_interrupt();
            a.schedule(REPEAT_START_US.micros()).ok();
        });
    }

    // Hardware Task: Button Repeat (Timer 1)
    #[task(binds = TIMER_IRQ_1, priority = 1, shared = [clock, button, alarm1, repeat_delay])]
    fn button_repeat(mut ctx: button_repeat::Context) {
        ctx.shared.alarm1.lock(|a| a.clear_interrupt());

        let is_held = ctx.shared.button.lock(|b| b.is_low().unwrap_or(false));

        if is_held {
            ctx.shared.clock.lock(|c| c.time_tick());
            update_display::spawn().ok();

            // Accelerate
            let delay = ctx.shared.repeat_delay.lock(|d| {
                *d = (*d / 10 * 8).max(REPEAT_MIN_US);
                *d
            });

            ctx.shared.alarm1.lock(|a| {
                a.schedule(delay.micros()).ok();
            });
        } else {
            ctx.shared.clock.lock(|c| defmt::info!("time set to {=str}", c.time()));
            ctx.shared.button.lock(|b| {
                // Clear any pending gpio interrupt flags that might have accumulated during bounce
                b.clear_interrupt(rp_pico::hal::gpio::Interrupt::EdgeLow);
                b.set_interrupt_enabled(rp_pico::hal::gpio::Interrupt::EdgeLow, true);
            });
        }
    }

    #[task(shared = [clock], local = [display])]
    fn update_display(mut ctx: update_display::Context) {
        let buffers = ctx.shared.clock.lock(|c| prepare_buffer(c));

        let display = ctx.local.display;
        for (dev_idx, buffer) in buffers.iter().enumerate() {
            display.write_raw(dev_idx, buffer).unwrap();
        }
    }
}
