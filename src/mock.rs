//! Simulated pins, buses and sinks that record what they are asked to do.
//!
//! Every mock appends to a thread-local event log, so each test thread sees
//! only its own events. Read the log with [`take_events`].

use core::cell::RefCell;
use core::convert::Infallible;
use std::string::String;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital;
use embedded_hal::spi::{self, ErrorKind, SpiBus};

use crate::{DiagnosticSink, IntoOutputPin, SpiSettings, SpiTransactionBus};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    ConfigureOutput(u8),
    PinLow(u8),
    PinHigh(u8),
    BeginTransaction { bus: u8, settings: SpiSettings },
    EndTransaction { bus: u8 },
    Line(String),
    Write(Vec<u8>),
    Read(usize),
    Flush,
    Delay(u32),
}

std::thread_local! {
    static EVENTS: RefCell<Vec<Event>> = const { RefCell::new(Vec::new()) };
}

pub fn record(event: Event) {
    EVENTS.with(|events| events.borrow_mut().push(event));
}

/// Drains the events recorded on the current thread.
pub fn take_events() -> Vec<Event> {
    EVENTS.with(|events| core::mem::take(&mut *events.borrow_mut()))
}

/// An unconfigured GPIO line.
#[derive(Debug)]
pub struct MockPin {
    id: u8,
}

impl MockPin {
    pub fn new(id: u8) -> Self {
        Self { id }
    }
}

impl IntoOutputPin for MockPin {
    type Output = MockOutputPin;

    fn into_output_pin(self) -> MockOutputPin {
        record(Event::ConfigureOutput(self.id));
        MockOutputPin { id: self.id }
    }
}

#[derive(Debug)]
pub struct MockOutputPin {
    id: u8,
}

impl MockOutputPin {
    pub fn id(&self) -> u8 {
        self.id
    }
}

impl digital::ErrorType for MockOutputPin {
    type Error = Infallible;
}

impl digital::OutputPin for MockOutputPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        record(Event::PinLow(self.id));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        record(Event::PinHigh(self.id));
        Ok(())
    }
}

/// Bus controller number `BUS`.
#[derive(Copy, Clone, Debug, Default)]
pub struct MockBus<const BUS: u8 = 0>;

impl<const BUS: u8> SpiTransactionBus for MockBus<BUS> {
    fn begin_transaction(settings: &SpiSettings) {
        record(Event::BeginTransaction {
            bus: BUS,
            settings: *settings,
        });
    }

    fn end_transaction() {
        record(Event::EndTransaction { bus: BUS });
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct MockSink;

impl DiagnosticSink for MockSink {
    fn write_line(&mut self, line: &str) {
        record(Event::Line(String::from(line)));
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct MockDelay;

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        record(Event::Delay(ns));
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MockSpiError;

impl spi::Error for MockSpiError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Data path of an SPI controller. Reads return `0xFF`.
///
/// After [`MockSpi::fail_after`] successful writes every further write fails.
#[derive(Debug, Default)]
pub struct MockSpi {
    writes_left: Option<usize>,
}

impl MockSpi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_after(writes: usize) -> Self {
        Self {
            writes_left: Some(writes),
        }
    }
}

impl spi::ErrorType for MockSpi {
    type Error = MockSpiError;
}

impl SpiBus for MockSpi {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        words.fill(0xFF);
        record(Event::Read(words.len()));
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        if let Some(left) = self.writes_left.as_mut() {
            if *left == 0 {
                return Err(MockSpiError);
            }
            *left -= 1;
        }
        record(Event::Write(words.to_vec()));
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        self.write(write)?;
        self.read(read)
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        self.write(words)?;
        self.read(words)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        record(Event::Flush);
        Ok(())
    }
}
