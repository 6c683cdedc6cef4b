/// Size in bytes of every input report the scanner sends.
pub const REPORT_LEN: usize = 16;

/// Report byte holding the keyboard modifier bitmap.
pub const MODIFIER_INDEX: usize = 0;

/// Report byte holding the first pressed key's usage ID.
pub const USAGE_INDEX: usize = 2;

/// No modifier held.
pub const MOD_NONE: u8 = 0x00;

/// Left Control held.
pub const MOD_LEFT_CTRL: u8 = 0x01;

/// Left Shift held.
pub const MOD_LEFT_SHIFT: u8 = 0x02;

/// Directory scanned for raw HID nodes when no device is given.
pub static DEFAULT_DEVICE_DIR: &str = "/dev";

/// Substring identifying a raw HID device node.
pub static HIDRAW_MARKER: &str = "hidraw";

/// Prefix of the line emitted for each completed barcode.
pub static SCANNER_READ_PREFIX: &str = "SCANNER_READ:";

/// Prefix of diagnostic lines emitted on fatal paths.
pub static SCAN_ERROR_PREFIX: &str = "SCAN_ERROR:";

/// Diagnostic emitted when no scanner can be selected.
pub static DEVICE_NOT_FOUND_NOTICE: &str = "CAN NOT FIND DEV";

/// Last line emitted once the device has been released.
pub static SCAN_CLOSE: &str = "SCAN_CLOSE";

/// Human readable notice emitted on the interrupt path.
pub static EXIT_NOTICE: &str = "Exiting...";
