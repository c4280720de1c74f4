use core::convert::Infallible;
use core::marker::PhantomData;

use embedded_hal::digital::{OutputPin, PinState};

use super::ChipSelect;
use crate::pin::drive;
use crate::{IntoOutputPin, SpiSettings, SpiTransactionBus, TransferType};

/// Active-low CS line that also owns the transaction on bus `B`.
///
/// The pin is asserted only after `B` has been configured with the stored
/// settings, and deasserted before the transaction ends.
pub struct ActiveLowChipSelect<B, P> {
    pin: P,
    settings: SpiSettings,
    _bus: PhantomData<fn() -> B>,
}

impl<B, P> ActiveLowChipSelect<B, P>
where
    B: SpiTransactionBus,
    P: OutputPin<Error = Infallible>,
{
    /// Configures `pin` as an output and parks it high.
    pub fn new<I>(pin: I, settings: SpiSettings) -> Self
    where
        I: IntoOutputPin<Output = P>,
    {
        let mut pin = pin.into_output_pin();
        drive(&mut pin, PinState::High);
        Self {
            pin,
            settings,
            _bus: PhantomData,
        }
    }

    pub fn settings(&self) -> &SpiSettings {
        &self.settings
    }

    /// Gives the pin back. Its level is left untouched.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<B, P> ChipSelect for ActiveLowChipSelect<B, P>
where
    B: SpiTransactionBus,
    P: OutputPin<Error = Infallible>,
{
    fn select_with(&mut self, transfer_type: TransferType) {
        trace!("cs select {}", transfer_type);
        B::begin_transaction(&self.settings);
        if !transfer_type.asserts_cs() {
            return;
        }
        drive(&mut self.pin, PinState::Low);
    }

    fn deselect_with(&mut self, transfer_type: TransferType) {
        trace!("cs deselect {}", transfer_type);
        if transfer_type.releases_cs() {
            drive(&mut self.pin, PinState::High);
        }
        B::end_transaction();
    }
}
