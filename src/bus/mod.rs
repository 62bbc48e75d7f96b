//! Display bus - transactional writes to the text controller and RGB
//! backlight, with fault counting and autonomous recovery.
//!
//! Both devices share one I²C bus.  Text controller writes are the ones
//! that matter for menu usability, so only they feed the fault counter;
//! backlight writes are best-effort.  When the counter trips, the bus
//! drops its TWIM driver, lets the lines settle, rebuilds the driver and
//! re-runs both device init sequences - the menu state itself is untouched
//! and the next redraw repaints it.

pub mod fault;
pub mod protocol;

#[cfg(feature = "embedded")]
pub use embedded::DisplayBus;

#[cfg(feature = "embedded")]
mod embedded {
    use super::fault::FaultTracker;
    use super::protocol;
    use crate::config::{
        BACKLIGHT_ADDR, BACKLIGHT_STARTUP_RGB, I2C_TIMEOUT_MS, LCD_ADDR, LCD_POWER_ON_DELAY_MS,
        RECOVERY_SETTLE_MS, WRITE_FAILURE_THRESHOLD,
    };
    use crate::error::Error;
    use defmt::{error, info, warn};
    use embassy_nrf::bind_interrupts;
    use embassy_nrf::peripherals::{P0_26, P0_27, TWISPI0};
    use embassy_nrf::twim::{self, Twim};
    use embassy_time::{with_timeout, Duration, Timer};

    bind_interrupts!(struct Irqs {
        SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<TWISPI0>;
    });

    /// TWIM configuration shared by startup and recovery.  The text
    /// controller is only rated for 100 kHz.
    pub fn twim_config() -> twim::Config {
        let mut config = twim::Config::default();
        config.frequency = twim::Frequency::K100;
        config
    }

    /// Transactional write access to the two display-bus devices.
    pub struct DisplayBus {
        twim: Option<Twim<'static, TWISPI0>>,
        faults: FaultTracker,
        backlight_present: bool,
    }

    impl DisplayBus {
        /// Take ownership of the bus peripheral and pins and build the
        /// driver.  Call [`init_text`](Self::init_text) and
        /// [`init_backlight`](Self::init_backlight) before rendering.
        pub fn new(twi: TWISPI0, sda: P0_26, scl: P0_27) -> Self {
            let twim = Twim::new(twi, Irqs, sda, scl, twim_config());
            Self {
                twim: Some(twim),
                faults: FaultTracker::new(WRITE_FAILURE_THRESHOLD),
                backlight_present: false,
            }
        }

        /// One bounded transaction to `addr`.  Fails fast with `NotReady`
        /// while the driver is torn down mid-recovery.
        async fn transmit(&mut self, addr: u8, bytes: &[u8]) -> Result<(), Error> {
            let Some(twim) = self.twim.as_mut() else {
                return Err(Error::NotReady);
            };
            match with_timeout(Duration::from_millis(I2C_TIMEOUT_MS), twim.write(addr, bytes)).await
            {
                Ok(Ok(())) => Ok(()),
                Ok(Err(_)) => Err(Error::Transport),
                Err(_) => Err(Error::Timeout),
            }
        }

        /// Instruction write without fault accounting; used by the init
        /// sequences, where a failure aborts the sequence instead of
        /// re-entering recovery.
        async fn raw_command(&mut self, command: u8) -> Result<(), Error> {
            self.transmit(LCD_ADDR, &protocol::command_frame(command)).await
        }

        /// Feed a text-controller write result into the fault counter and
        /// run recovery when it trips.  `NotReady` is a programming error,
        /// not a bus fault, and is passed through uncounted.
        async fn track(&mut self, result: Result<(), Error>) -> Result<(), Error> {
            match result {
                Ok(()) => {
                    self.faults.record_success();
                    Ok(())
                }
                Err(Error::NotReady) => Err(Error::NotReady),
                Err(e) => {
                    warn!("display write failed: {}", e);
                    if self.faults.record_failure() {
                        error!("display bus wedged, recovering");
                        self.recover().await;
                    }
                    Err(e)
                }
            }
        }

        /// Send one instruction to the text controller.
        pub async fn write_command(&mut self, command: u8) -> Result<(), Error> {
            let result = self.raw_command(command).await;
            self.track(result).await
        }

        /// Send display data at the current cursor, chunked to the
        /// controller's transaction limit.
        pub async fn write_data(&mut self, bytes: &[u8]) -> Result<(), Error> {
            for chunk in bytes.chunks(protocol::DATA_CHUNK) {
                let mut buf = [0u8; protocol::DATA_CHUNK + 1];
                buf[0] = protocol::CONTROL_DATA;
                buf[1..1 + chunk.len()].copy_from_slice(chunk);
                let result = self.transmit(LCD_ADDR, &buf[..1 + chunk.len()]).await;
                self.track(result).await?;
            }
            Ok(())
        }

        /// Rewrite one full display row: set the row address, then send the
        /// padded row text as a single data write.
        pub async fn write_row(&mut self, row: u8, text: &str) -> Result<(), Error> {
            self.write_command(protocol::row_address_command(row)).await?;
            self.write_data(text.as_bytes()).await
        }

        /// Run the text controller's documented bring-up sequence.
        pub async fn init_text(&mut self) -> Result<(), Error> {
            Timer::after(Duration::from_millis(LCD_POWER_ON_DELAY_MS)).await;
            for &(command, delay_ms) in protocol::TEXT_INIT_SEQUENCE {
                self.raw_command(command).await?;
                if delay_ms > 0 {
                    Timer::after(Duration::from_millis(delay_ms as u64)).await;
                }
            }
            info!("text controller initialised");
            Ok(())
        }

        /// Bring up the backlight controller and apply the startup color.
        ///
        /// Best-effort: if the device is absent or unresponsive, all later
        /// backlight writes become no-ops and the text menu is unaffected.
        pub async fn init_backlight(&mut self) {
            for &(register, value) in protocol::BACKLIGHT_INIT_SEQUENCE {
                let frame = protocol::register_frame(register, value);
                if self.transmit(BACKLIGHT_ADDR, &frame).await.is_err() {
                    warn!("backlight not responding, continuing without it");
                    self.backlight_present = false;
                    return;
                }
            }
            self.backlight_present = true;
            let (r, g, b) = BACKLIGHT_STARTUP_RGB;
            self.set_backlight(r, g, b).await;
        }

        /// Write one backlight register.  Failures are logged, never
        /// escalated.
        pub async fn write_backlight_register(&mut self, register: u8, value: u8) {
            if !self.backlight_present {
                return;
            }
            let frame = protocol::register_frame(register, value);
            if let Err(e) = self.transmit(BACKLIGHT_ADDR, &frame).await {
                warn!("backlight write failed: {}", e);
            }
        }

        /// Set the backlight color (best-effort).
        pub async fn set_backlight(&mut self, r: u8, g: u8, b: u8) {
            self.write_backlight_register(protocol::REG_PWM_RED, r).await;
            self.write_backlight_register(protocol::REG_PWM_GREEN, g).await;
            self.write_backlight_register(protocol::REG_PWM_BLUE, b).await;
        }

        /// Best-effort bus recovery: drop the wedged driver so the
        /// peripheral is disabled, let the lines settle, rebuild the driver
        /// and re-run both device init sequences.
        ///
        /// The HAL has no bus teardown API, so rebuilding means re-stealing
        /// the peripheral singletons the dropped driver owned.  Must only
        /// ever be invoked from the polling task's call path.
        async fn recover(&mut self) {
            self.twim = None;
            Timer::after(Duration::from_millis(RECOVERY_SETTLE_MS)).await;

            // SAFETY: the TWISPI0/P0.26/P0.27 singletons were consumed by
            // the driver dropped above; nothing else in the firmware holds
            // them.
            let p = unsafe { embassy_nrf::Peripherals::steal() };
            self.twim = Some(Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim_config()));

            if self.init_text().await.is_err() {
                error!("display recovery failed, retrying next tick");
                return;
            }
            self.init_backlight().await;
            info!("display bus recovered");
        }
    }
}
