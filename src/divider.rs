//! PL022 clock divider selection.
//!
//! The SPI clock is `clk_peri / (CPSDVSR * (1 + SCR))`, with CPSDVSR an even
//! value in 2..=254 and SCR in 0..=255.

/// Returns `(cpsdvsr, scr)` for the fastest SPI clock not above `baudrate`.
///
/// Requests below the slowest reachable rate saturate to the largest dividers.
pub(crate) fn clock_dividers(peripheral_hz: u32, baudrate_hz: u32) -> (u8, u8) {
    let freq_in = u64::from(peripheral_hz);
    let baudrate = u64::from(baudrate_hz);

    let prescale = (2u64..=254)
        .step_by(2)
        .find(|prescale| freq_in <= prescale * 256 * baudrate)
        .unwrap_or(254);

    let postdiv = (2u64..=256)
        .rev()
        .find(|postdiv| freq_in / (prescale * (postdiv - 1)) > baudrate)
        .unwrap_or(1);

    (prescale as u8, (postdiv - 1) as u8)
}

/// The SPI clock produced by [`clock_dividers`].
pub(crate) fn effective_rate(peripheral_hz: u32, cpsdvsr: u8, scr: u8) -> u32 {
    peripheral_hz / (u32::from(cpsdvsr) * (u32::from(scr) + 1))
}
