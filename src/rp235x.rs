//! SPI0 and SPI1 of the RP2350.
//!
//! The data path stays with the `rp235x_hal::spi::Spi` owned by the driver;
//! these bus types only retune the controller's clock and CPOL/CPHA when a
//! chip select opens a transaction, and wait for it to drain when it closes.

use embedded_hal::spi::{Phase, Polarity};
use fugit::HertzU32;
use portable_atomic::{AtomicBool, AtomicU32, Ordering};
use rp235x_hal::gpio::{Function, FunctionSioOutput, Pin, PinId, PullType, ValidFunction};
use rp235x_hal::pac;

use crate::divider::clock_dividers;
use crate::{ActiveLowChipSelect, BitOrder, IntoOutputPin, SpiSettings, SpiTransactionBus};

static PERIPHERAL_CLOCK_HZ: AtomicU32 = AtomicU32::new(0);

/// Records `clk_peri`, which the clock dividers are derived from.
///
/// Must be called once the clocks are up and before the first transaction.
pub fn init(peripheral_clock: HertzU32) {
    PERIPHERAL_CLOCK_HZ.store(peripheral_clock.to_Hz(), Ordering::Relaxed);
}

fn apply_settings(regs: &pac::spi0::RegisterBlock, settings: &SpiSettings) {
    if settings.bit_order() == BitOrder::LsbFirst {
        warn!("LSB-first transfers are not supported by the RP2350 SPI controller");
    }

    let mode = settings.mode();
    let peripheral_hz = PERIPHERAL_CLOCK_HZ.load(Ordering::Relaxed);
    if peripheral_hz == 0 {
        warn!("rp235x::init was not called, keeping the current SPI clock");
        regs.sspcr0().modify(|_, w| {
            w.spo()
                .bit(mode.polarity == Polarity::IdleHigh)
                .sph()
                .bit(mode.phase == Phase::CaptureOnSecondTransition)
        });
        return;
    }

    let (cpsdvsr, scr) = clock_dividers(peripheral_hz, settings.frequency().to_Hz());
    regs.sspcpsr().write(|w| unsafe { w.cpsdvsr().bits(cpsdvsr) });
    regs.sspcr0().modify(|_, w| unsafe {
        w.scr()
            .bits(scr)
            .spo()
            .bit(mode.polarity == Polarity::IdleHigh)
            .sph()
            .bit(mode.phase == Phase::CaptureOnSecondTransition)
    });
}

fn wait_idle(regs: &pac::spi0::RegisterBlock) {
    while regs.sspsr().read().bsy().bit_is_set() {
        core::hint::spin_loop();
    }
}

macro_rules! spi_controller {
    ($($n:literal),*) => {
        $(
            paste::paste! {
                #[doc = "SPI" $n " controller."]
                #[derive(Copy, Clone, Debug)]
                pub struct [<Spi $n>];

                static [<SPI $n _OPEN>]: AtomicBool = AtomicBool::new(false);

                impl SpiTransactionBus for [<Spi $n>] {
                    fn begin_transaction(settings: &SpiSettings) {
                        let was_open = [<SPI $n _OPEN>].swap(true, Ordering::Acquire);
                        debug_assert!(!was_open, concat!("SPI", $n, " transaction already open"));
                        // SAFETY: only the chip select holding the open transaction touches
                        // the controller configuration.
                        let regs = unsafe { &*pac::[<SPI $n>]::ptr() };
                        wait_idle(regs);
                        apply_settings(regs, settings);
                    }

                    fn end_transaction() {
                        // SAFETY: read-only status polling.
                        let regs = unsafe { &*pac::[<SPI $n>]::ptr() };
                        wait_idle(regs);
                        let was_open = [<SPI $n _OPEN>].swap(false, Ordering::Release);
                        debug_assert!(was_open, concat!("SPI", $n, " transaction not open"));
                    }
                }

                #[doc = "Active-low chip select on SPI" $n "."]
                pub type [<ActiveLowChipSelect $n>]<P> = ActiveLowChipSelect<[<Spi $n>], P>;
            }
        )*
    };
}

spi_controller!(0, 1);

impl<I, F, P> IntoOutputPin for Pin<I, F, P>
where
    I: PinId + ValidFunction<FunctionSioOutput>,
    F: Function,
    P: PullType,
{
    type Output = Pin<I, FunctionSioOutput, P>;

    fn into_output_pin(self) -> Self::Output {
        self.into_push_pull_output()
    }
}
