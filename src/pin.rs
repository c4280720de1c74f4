use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, PinState};

/// A GPIO line that can be switched into push-pull output mode.
pub trait IntoOutputPin {
    type Output: OutputPin<Error = Infallible>;

    fn into_output_pin(self) -> Self::Output;
}

/// Wraps a pin that is already configured as an output.
#[derive(Debug)]
pub struct Configured<P>(pub P);

impl<P> IntoOutputPin for Configured<P>
where
    P: OutputPin<Error = Infallible>,
{
    type Output = P;

    fn into_output_pin(self) -> P {
        self.0
    }
}

#[inline]
pub(crate) fn drive<P>(pin: &mut P, state: PinState)
where
    P: OutputPin<Error = Infallible>,
{
    match pin.set_state(state) {
        Ok(()) => {}
        Err(never) => match never {},
    }
}
