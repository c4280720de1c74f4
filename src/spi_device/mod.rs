use embedded_hal::delay::DelayNs;
use embedded_hal::spi::{ErrorType, Operation, SpiBus, SpiDevice};

use crate::{ChipSelect, TransferType};

/// An [`SpiDevice`] built from a raw bus and any [`ChipSelect`].
///
/// Every transaction is wrapped in one select/deselect pair. The pair is
/// closed even when an operation fails.
pub struct ChipSelectDevice<BUS, CS, D = NoDelay> {
    bus: BUS,
    cs: CS,
    delay: D,
}

impl<BUS, CS, D> ChipSelectDevice<BUS, CS, D> {
    pub fn new(bus: BUS, cs: CS, delay: D) -> Self {
        Self { bus, cs, delay }
    }

    pub fn bus(&self) -> &BUS {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut BUS {
        &mut self.bus
    }

    pub fn chip_select(&self) -> &CS {
        &self.cs
    }

    pub fn release(self) -> (BUS, CS, D) {
        (self.bus, self.cs, self.delay)
    }
}

impl<BUS, CS> ChipSelectDevice<BUS, CS, NoDelay> {
    /// Devices created this way panic on [`Operation::DelayNs`].
    pub fn new_no_delay(bus: BUS, cs: CS) -> Self {
        Self::new(bus, cs, NoDelay)
    }
}

impl<BUS, CS, D> ChipSelectDevice<BUS, CS, D>
where
    BUS: SpiBus,
    CS: ChipSelect,
{
    /// Writes `phases` back to back under one continuous CS assertion.
    ///
    /// Each phase gets its own bus transaction; CS is asserted by the first
    /// and released by the last.
    pub fn write_phases(&mut self, phases: &[&[u8]]) -> Result<(), BUS::Error> {
        let last = phases.len().saturating_sub(1);
        for (index, phase) in phases.iter().enumerate() {
            let start = if index == 0 {
                TransferType::Normal
            } else {
                TransferType::NoStartCs
            };
            let end = if index == last {
                TransferType::Normal
            } else {
                TransferType::NoEndCs
            };

            self.cs.select_with(start);
            if let Err(e) = self.bus.write(phase).and_then(|()| self.bus.flush()) {
                self.cs.deselect_with(TransferType::Normal);
                return Err(e);
            }
            self.cs.deselect_with(end);
        }
        Ok(())
    }
}

impl<BUS: ErrorType, CS, D> ErrorType for ChipSelectDevice<BUS, CS, D> {
    type Error = BUS::Error;
}

impl<BUS, CS, D> SpiDevice for ChipSelectDevice<BUS, CS, D>
where
    BUS: SpiBus,
    CS: ChipSelect,
    D: DelayNs,
{
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        self.cs.select();
        let result = run_operations(&mut self.bus, &mut self.delay, operations);
        let flushed = self.bus.flush();
        self.cs.deselect();
        result.and(flushed)
    }
}

fn run_operations<BUS, D>(
    bus: &mut BUS,
    delay: &mut D,
    operations: &mut [Operation<'_, u8>],
) -> Result<(), BUS::Error>
where
    BUS: SpiBus,
    D: DelayNs,
{
    for op in operations {
        match op {
            Operation::Read(buf) => bus.read(buf)?,
            Operation::Write(buf) => bus.write(buf)?,
            Operation::Transfer(read, write) => bus.transfer(read, write)?,
            Operation::TransferInPlace(buf) => bus.transfer_in_place(buf)?,
            Operation::DelayNs(ns) => {
                bus.flush()?;
                delay.delay_ns(*ns);
            }
        }
    }
    Ok(())
}

/// Dummy [`DelayNs`] implementation that panics on use.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct NoDelay;

#[cold]
fn no_delay_panic() {
    panic!("You've tried to execute a SPI transaction containing a `Operation::DelayNs` in a `ChipSelectDevice` created with `new_no_delay()`. Create it with `new()` instead, passing a `DelayNs` implementation.");
}

impl DelayNs for NoDelay {
    #[inline]
    fn delay_ns(&mut self, _ns: u32) {
        no_delay_panic();
    }
}
