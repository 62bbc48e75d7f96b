//! Embedded entry point - peripheral bring-up, then the menu loop.

#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_nrf::bind_interrupts;
use embassy_nrf::gpio::{Input, Pull};
use embassy_nrf::saadc::{self, ChannelConfig, Saadc};
use menupad::bus::DisplayBus;
use menupad::input::joystick::Joystick;

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("menupad starting");

    let mut display = DisplayBus::new(p.TWISPI0, p.P0_26, p.P0_27);
    if let Err(e) = display.init_text().await {
        // Degraded boot: keep running, the fault path re-inits the
        // controller once the bus recovers.
        warn!("text controller init failed: {}", e);
    }
    display.init_backlight().await;

    let channel = ChannelConfig::single_ended(p.P0_02);
    let adc = Saadc::new(p.SAADC, Irqs, saadc::Config::default(), [channel]);
    let button = Input::new(p.P0_24, Pull::Up);
    let joystick = Joystick::new(adc, button);

    menupad::app::run_forever(display, joystick).await
}
