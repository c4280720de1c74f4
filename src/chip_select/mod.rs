mod active_low;

pub use active_low::ActiveLowChipSelect;

use crate::{DiagnosticSink, TransferType};

/// Selects and deselects one SPI device around a bus transaction.
///
/// Every `select_with` must be followed by exactly one `deselect_with` before
/// any other device on the same bus is selected.
pub trait ChipSelect {
    fn select_with(&mut self, transfer_type: TransferType);

    fn deselect_with(&mut self, transfer_type: TransferType);

    fn select(&mut self) {
        self.select_with(TransferType::Normal)
    }

    fn deselect(&mut self) {
        self.deselect_with(TransferType::Normal)
    }

    /// Runs `f` between `select_with(start)` and `deselect_with(end)`.
    fn with_selected<R>(
        &mut self,
        start: TransferType,
        end: TransferType,
        f: impl FnOnce() -> R,
    ) -> R
    where
        Self: Sized,
    {
        self.select_with(start);
        let result = f();
        self.deselect_with(end);
        result
    }
}

impl<T: ChipSelect + ?Sized> ChipSelect for &mut T {
    #[inline]
    fn select_with(&mut self, transfer_type: TransferType) {
        (**self).select_with(transfer_type)
    }

    #[inline]
    fn deselect_with(&mut self, transfer_type: TransferType) {
        (**self).deselect_with(transfer_type)
    }
}

/// For buses with a single device, or a CS line driven elsewhere.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct DummyChipSelect;

impl ChipSelect for DummyChipSelect {
    #[inline]
    fn select_with(&mut self, _transfer_type: TransferType) {}

    #[inline]
    fn deselect_with(&mut self, _transfer_type: TransferType) {}
}

/// A [`DummyChipSelect`] that reports every call to a diagnostic sink.
pub struct DebugChipSelect<S> {
    sink: S,
}

impl<S: DiagnosticSink> DebugChipSelect<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn into_inner(self) -> S {
        self.sink
    }
}

impl<S: DiagnosticSink> ChipSelect for DebugChipSelect<S> {
    fn select_with(&mut self, _transfer_type: TransferType) {
        self.sink.write_line("Debug CS: select()");
    }

    fn deselect_with(&mut self, _transfer_type: TransferType) {
        self.sink.write_line("Debug CS: deselect()");
    }
}

#[cfg(test)]
mod tests {
    use std::string::String;
    use std::vec;

    use super::*;
    use crate::mock::{take_events, Event, MockSink};
    use crate::IoSink;

    const ALL: [TransferType; 3] = [
        TransferType::Normal,
        TransferType::NoStartCs,
        TransferType::NoEndCs,
    ];

    #[test]
    fn dummy_records_nothing() {
        let mut cs = DummyChipSelect;
        for t in ALL {
            cs.select_with(t);
            cs.deselect_with(t);
        }
        cs.select();
        cs.deselect();
        assert!(take_events().is_empty());
    }

    #[test]
    fn debug_writes_one_line_per_call() {
        let mut cs = DebugChipSelect::new(MockSink);
        for t in ALL {
            cs.select_with(t);
            cs.deselect_with(t);
        }
        let select = Event::Line(String::from("Debug CS: select()"));
        let deselect = Event::Line(String::from("Debug CS: deselect()"));
        assert_eq!(
            take_events(),
            vec![
                select.clone(),
                deselect.clone(),
                select.clone(),
                deselect.clone(),
                select,
                deselect,
            ]
        );
    }

    #[test]
    fn debug_writes_to_injected_writer() {
        let mut buf = [0u8; 64];
        {
            let mut cs = DebugChipSelect::new(IoSink::new(&mut buf[..]));
            cs.select();
            cs.deselect();
        }
        let expected = b"Debug CS: select()\r\nDebug CS: deselect()\r\n";
        assert_eq!(&buf[..expected.len()], expected);
    }

    #[test]
    fn usable_as_trait_object() {
        let mut dummy = DummyChipSelect;
        let mut debug = DebugChipSelect::new(MockSink);
        let selects: [&mut dyn ChipSelect; 2] = [&mut dummy, &mut debug];
        for cs in selects {
            cs.select();
            cs.deselect();
        }
        assert_eq!(take_events().len(), 2);
    }

    #[test]
    fn with_selected_returns_closure_result() {
        let mut cs = DebugChipSelect::new(MockSink);
        let value = cs.with_selected(TransferType::Normal, TransferType::NoEndCs, || 7);
        assert_eq!(value, 7);
        assert_eq!(
            take_events(),
            vec![
                Event::Line(String::from("Debug CS: select()")),
                Event::Line(String::from("Debug CS: deselect()")),
            ]
        );
    }
}
