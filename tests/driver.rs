//! A small display-style driver written only against the public API.

use std::cell::RefCell;
use std::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use embedded_hal::spi::MODE_0;
use fugit::RateExtU32;
use spi_chip_select::{
    ActiveLowChipSelect, BitOrder, ChipSelect, Configured, DebugChipSelect, DiagnosticSink,
    DummyChipSelect, SpiSettings, SpiTransactionBus, TransferType,
};

#[derive(Debug, PartialEq)]
enum Trace {
    Cs(bool),
    Begin(u32),
    End,
    Byte(u8),
    Line(&'static str),
}

thread_local! {
    static TRACE: RefCell<Vec<Trace>> = const { RefCell::new(Vec::new()) };
}

fn push(t: Trace) {
    TRACE.with(|trace| trace.borrow_mut().push(t));
}

fn drain() -> Vec<Trace> {
    TRACE.with(|trace| trace.take())
}

struct Line;

impl ErrorType for Line {
    type Error = Infallible;
}

impl OutputPin for Line {
    fn set_low(&mut self) -> Result<(), Infallible> {
        push(Trace::Cs(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        push(Trace::Cs(true));
        Ok(())
    }
}

struct Bus;

impl SpiTransactionBus for Bus {
    fn begin_transaction(settings: &SpiSettings) {
        push(Trace::Begin(settings.frequency().to_Hz()));
    }

    fn end_transaction() {
        push(Trace::End);
    }
}

struct Console;

impl DiagnosticSink for Console {
    fn write_line(&mut self, line: &str) {
        let line = match line {
            "Debug CS: select()" => "select",
            "Debug CS: deselect()" => "deselect",
            _ => "other",
        };
        push(Trace::Line(line));
    }
}

/// Sends a command byte, then its parameters, under one CS assertion.
struct Display<'a> {
    cs: &'a mut dyn ChipSelect,
}

impl Display<'_> {
    fn command(&mut self, cmd: u8, params: &[u8]) {
        self.cs.select();
        push(Trace::Byte(cmd));
        self.cs.deselect_with(TransferType::NoEndCs);

        self.cs.select_with(TransferType::NoStartCs);
        for byte in params {
            push(Trace::Byte(*byte));
        }
        self.cs.deselect();
    }
}

#[test]
fn driver_keeps_cs_low_between_command_and_data() {
    let settings = SpiSettings::new(10.MHz(), BitOrder::MsbFirst, MODE_0);
    let mut cs: ActiveLowChipSelect<Bus, Line> =
        ActiveLowChipSelect::new(Configured(Line), settings);
    assert_eq!(drain(), vec![Trace::Cs(true)]);

    Display { cs: &mut cs }.command(0x2A, &[0x00, 0xEF]);

    assert_eq!(
        drain(),
        vec![
            Trace::Begin(10_000_000),
            Trace::Cs(false),
            Trace::Byte(0x2A),
            Trace::End,
            Trace::Begin(10_000_000),
            Trace::Byte(0x00),
            Trace::Byte(0xEF),
            Trace::Cs(true),
            Trace::End,
        ]
    );
}

#[test]
fn same_driver_runs_on_dummy_and_debug_selects() {
    let mut dummy = DummyChipSelect;
    Display { cs: &mut dummy }.command(0x01, &[]);
    assert_eq!(drain(), vec![Trace::Byte(0x01)]);

    let mut debug = DebugChipSelect::new(Console);
    Display { cs: &mut debug }.command(0x11, &[0x80]);
    assert_eq!(
        drain(),
        vec![
            Trace::Line("select"),
            Trace::Byte(0x11),
            Trace::Line("deselect"),
            Trace::Line("select"),
            Trace::Byte(0x80),
            Trace::Line("deselect"),
        ]
    );
}
