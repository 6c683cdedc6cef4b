use tracing::{trace, warn};

use crate::decoder::Symbol;

/// How the accumulator treats [`Symbol::EndOfTransmissionSecondary`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SecondaryEot {
    /// Skip it like an unrecognized report.
    #[default]
    Ignore,
    /// End the barcode like the primary marker does.
    Terminate,
}

/// Outcome of feeding one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccumulatorAction {
    Continue,
    /// A barcode was terminated. May be empty.
    BarcodeComplete(String),
    /// The scan in progress was abandoned because the device failed.
    DeviceError,
}

/// Builds one barcode at a time from decoded symbols.
#[derive(Debug, Default)]
pub struct Accumulator {
    buffer: String,
    secondary_eot: SecondaryEot,
}

impl Accumulator {
    pub fn new(secondary_eot: SecondaryEot) -> Self {
        Accumulator {
            buffer: String::new(),
            secondary_eot,
        }
    }

    pub fn feed(&mut self, symbol: Symbol) -> AccumulatorAction {
        match symbol {
            Symbol::Character(c) => {
                self.buffer.push(c);
                AccumulatorAction::Continue
            }
            Symbol::EndOfTransmissionPrimary => self.complete(),
            Symbol::EndOfTransmissionSecondary => match self.secondary_eot {
                SecondaryEot::Terminate => self.complete(),
                SecondaryEot::Ignore => {
                    trace!("Ignoring secondary end-of-transmission marker.");
                    AccumulatorAction::Continue
                }
            },
            Symbol::Unrecognized => AccumulatorAction::Continue,
        }
    }

    /// Drops the scan in progress after a device fault.
    pub fn fail(&mut self) -> AccumulatorAction {
        self.discard();
        AccumulatorAction::DeviceError
    }

    /// Clears the buffer without producing a barcode, returning how many
    /// characters were dropped.
    pub fn discard(&mut self) -> usize {
        let dropped = self.buffer.chars().count();
        if dropped > 0 {
            warn!(dropped, "Discarding partial scan.");
        }
        self.buffer.clear();
        dropped
    }

    /// Characters gathered so far for the current barcode.
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    fn complete(&mut self) -> AccumulatorAction {
        AccumulatorAction::BarcodeComplete(std::mem::take(&mut self.buffer))
    }
}
