use std::fs::{self, File, OpenOptions};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use derive_more::Display;
use tracing::{info, warn};

use crate::constants::HIDRAW_MARKER;
use crate::error::{Error, Result};

#[cfg(feature = "hidapi")]
pub mod hidapi;

/// Identifies the scanner the reader loop is attached to.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum DeviceIdentifier {
    /// A raw HID node opened directly.
    #[display(fmt = "hidraw {}", "_0.display()")]
    Hidraw(PathBuf),

    /// A device opened through hidapi, by its platform path.
    #[display(fmt = "hidapi {}", _0)]
    HidApi(String),
}

/// Lists raw HID nodes in `dir`, sorted by file name.
#[tracing::instrument]
pub fn find_hidraw_devices(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| Error::DeviceList {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut devices = vec![];
    for entry in entries {
        let entry = entry.map_err(|source| Error::DeviceList {
            dir: dir.to_path_buf(),
            source,
        })?;
        if entry.file_name().to_string_lossy().contains(HIDRAW_MARKER) {
            devices.push(entry.path());
        }
    }
    devices.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    info!("Candidate devices: {:?}", devices);
    Ok(devices)
}

/// Picks the scanner node: the lexicographically last raw HID node in `dir`.
#[tracing::instrument]
pub fn select_device(dir: &Path) -> Result<PathBuf> {
    match find_hidraw_devices(dir)?.pop() {
        Some(path) => {
            info!("Selected device {}.", path.display());
            Ok(path)
        }
        None => {
            warn!("No raw HID device found.");
            Err(Error::DeviceNotFound {
                dir: dir.to_path_buf(),
            })
        }
    }
}

/// Opens a raw HID node for reading.
#[tracing::instrument]
pub fn open_device(path: &Path) -> Result<HidrawDevice> {
    let file = OpenOptions::new()
        .read(true)
        .open(path)
        .map_err(|source| Error::DeviceOpen {
            path: path.to_path_buf(),
            source,
        })?;
    let id = DeviceIdentifier::Hidraw(path.to_path_buf());
    info!("Connected to {}.", id);
    Ok(HidrawDevice { id, file })
}

/// An open raw HID node. The node is closed when this is dropped.
#[derive(Debug)]
pub struct HidrawDevice {
    id: DeviceIdentifier,
    file: File,
}

impl HidrawDevice {
    pub fn id(&self) -> &DeviceIdentifier {
        &self.id
    }
}

impl Read for HidrawDevice {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Drop for HidrawDevice {
    fn drop(&mut self) {
        info!("Closing {}.", self.id);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn scratch_dir(files: &[&str]) -> PathBuf {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let dir = std::env::temp_dir().join(format!(
            "hid_barcode-devices-{}-{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::SeqCst)
        ));
        fs::create_dir_all(&dir).unwrap();
        for name in files {
            fs::write(dir.join(name), b"").unwrap();
        }
        dir
    }

    #[test]
    fn lists_only_hidraw_nodes_sorted() {
        let dir = scratch_dir(&["hidraw2", "tty0", "hidraw0", "hidraw10", "null"]);
        let found: Vec<_> = find_hidraw_devices(&dir)
            .unwrap()
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(found, vec!["hidraw0", "hidraw10", "hidraw2"]);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn selects_lexicographically_last() {
        let dir = scratch_dir(&["hidraw0", "hidraw2", "hidraw10"]);
        assert_eq!(select_device(&dir).unwrap(), dir.join("hidraw2"));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn no_candidates_is_device_not_found() {
        let dir = scratch_dir(&["tty0"]);
        match select_device(&dir) {
            Err(Error::DeviceNotFound { dir: reported }) => assert_eq!(reported, dir),
            other => panic!("unexpected {:?}", other),
        }
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn missing_directory_is_a_listing_error() {
        let dir = std::env::temp_dir().join("hid_barcode-does-not-exist");
        assert!(matches!(
            find_hidraw_devices(&dir),
            Err(Error::DeviceList { .. })
        ));
    }

    #[test]
    fn opens_and_reads_node() {
        let dir = scratch_dir(&[]);
        let path = dir.join("hidraw0");
        fs::write(&path, [0x00, 0x00, 0x28]).unwrap();

        let mut device = open_device(&path).unwrap();
        assert_eq!(device.id(), &DeviceIdentifier::Hidraw(path.clone()));
        let mut buf = [0u8; 16];
        assert_eq!(device.read(&mut buf).unwrap(), 3);
        drop(device);

        assert!(matches!(
            open_device(&dir.join("hidraw9")),
            Err(Error::DeviceOpen { .. })
        ));
        fs::remove_dir_all(dir).unwrap();
    }
}
