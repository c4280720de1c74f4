use embedded_hal::spi::{Mode, MODE_0};
use fugit::HertzU32;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    #[default]
    MsbFirst,
    LsbFirst,
}

/// Bus configuration applied whenever a chip select opens a transaction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiSettings {
    frequency: HertzU32,
    bit_order: BitOrder,
    mode: Mode,
}

impl SpiSettings {
    pub const fn new(frequency: HertzU32, bit_order: BitOrder, mode: Mode) -> Self {
        Self {
            frequency,
            bit_order,
            mode,
        }
    }

    pub const fn frequency(&self) -> HertzU32 {
        self.frequency
    }

    pub const fn bit_order(&self) -> BitOrder {
        self.bit_order
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }
}

impl Default for SpiSettings {
    /// 4 MHz, MSB first, mode 0.
    fn default() -> Self {
        Self::new(HertzU32::from_raw(4_000_000), BitOrder::MsbFirst, MODE_0)
    }
}
