use crate::SpiSettings;

/// The transaction primitive of one physical SPI controller.
///
/// Implemented by zero-sized marker types, one per controller, so a chip
/// select is tied to its bus at compile time. `begin_transaction` applies
/// `settings` and claims the bus; `end_transaction` waits for the controller
/// to go idle and releases it. Neither call is reentrant.
pub trait SpiTransactionBus {
    fn begin_transaction(settings: &SpiSettings);
    fn end_transaction();
}
