use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use hid_barcode::constants::DEFAULT_DEVICE_DIR;
use hid_barcode::decoder::SecondaryEot;

/// Print barcodes read from a USB HID barcode scanner.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Raw HID node to read instead of picking one from --dev-dir.
    #[arg(long)]
    pub device: Option<PathBuf>,

    /// Directory searched for hidraw nodes; the last one by name is used.
    #[arg(long, default_value = DEFAULT_DEVICE_DIR)]
    pub dev_dir: PathBuf,

    /// What to do with the secondary end-of-transmission marker (Ctrl+J).
    #[arg(long, value_enum, default_value_t = SecondaryEotArg::Ignore)]
    pub secondary_eot: SecondaryEotArg,

    /// Log as JSON.
    #[arg(long)]
    pub json_logs: bool,

    /// Find and open the scanner through hidapi.
    #[cfg(feature = "hidapi")]
    #[arg(long, conflicts_with = "device")]
    pub hidapi: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SecondaryEotArg {
    Ignore,
    Terminate,
}

impl From<SecondaryEotArg> for SecondaryEot {
    fn from(arg: SecondaryEotArg) -> Self {
        match arg {
            SecondaryEotArg::Ignore => SecondaryEot::Ignore,
            SecondaryEotArg::Terminate => SecondaryEot::Terminate,
        }
    }
}
