use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::decoder::Report;

/// A device level failure that ends the read loop.
///
/// Faults are never retried by the loop itself; reconnecting is left to whoever
/// owns the loop.
#[derive(Debug, Error)]
pub enum ReadFault {
    /// The device returned no bytes, usually because it was unplugged.
    #[error("device reached end of stream")]
    EndOfStream,
    /// The device returned a report of the wrong size.
    #[error("short report: read {read} of {expected} bytes")]
    ShortRead { read: usize, expected: usize },
    /// The read itself failed.
    #[error("device read failed: {0}")]
    Io(#[from] io::Error),
}

/// A symbol table that would break the one pattern per character rule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("pattern {0} is mapped more than once")]
    DuplicatePattern(Report),
    #[error("character {0:?} is mapped by more than one pattern")]
    DuplicateCharacter(char),
    #[error("invalid hex pattern {0:?}")]
    InvalidHex(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("no HID device found in {}", dir.display())]
    DeviceNotFound { dir: PathBuf },
    #[error("failed to list devices in {}: {source}", dir.display())]
    DeviceList { dir: PathBuf, source: io::Error },
    #[error("failed to open {}: {source}", path.display())]
    DeviceOpen { path: PathBuf, source: io::Error },
    #[error(transparent)]
    ReadFault(#[from] ReadFault),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
    #[cfg(feature = "hidapi")]
    #[error("hidapi error: {0}")]
    HidApi(#[from] hidapi::HidError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
