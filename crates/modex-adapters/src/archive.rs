//! Starter archive adapter backed by a zip bundled at build time.

use std::borrow::Cow;
use std::io::{Cursor, Read};
use std::path::Path;

use tracing::debug;
use zip::ZipArchive;

use modex_core::{
    application::{ApplicationError, ports::StarterArchive},
    error::{ModexError, ModexResult},
};

/// The starter tree, zipped by the build script.
static STARTER_ZIP: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/starter.zip"));

/// Unpacks a zip archive held in memory.
///
/// The production instance wraps the starter zip embedded in the binary;
/// [`ZipStarterArchive::from_bytes`] exists for tests.
pub struct ZipStarterArchive {
    bytes: Cow<'static, [u8]>,
}

impl ZipStarterArchive {
    /// The starter tree shipped inside the binary.
    pub fn bundled() -> Self {
        Self {
            bytes: Cow::Borrowed(STARTER_ZIP),
        }
    }

    /// An archive over arbitrary zip bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Cow::Owned(bytes),
        }
    }
}

impl StarterArchive for ZipStarterArchive {
    fn unpack(&self, dest: &Path) -> ModexResult<usize> {
        let mut archive = ZipArchive::new(Cursor::new(self.bytes.as_ref()))
            .map_err(|e| extraction_error(format!("unreadable archive: {e}")))?;

        let mut written = 0;
        for index in 0..archive.len() {
            let mut entry = archive
                .by_index(index)
                .map_err(|e| extraction_error(format!("unreadable entry {index}: {e}")))?;

            // enclosed_name filters absolute paths and `..` components.
            let Some(rel) = entry.enclosed_name().map(Path::to_path_buf) else {
                return Err(extraction_error(format!(
                    "entry '{}' escapes the destination",
                    entry.name()
                )));
            };
            let out = dest.join(rel);

            if entry.is_dir() {
                std::fs::create_dir_all(&out)
                    .map_err(|e| extraction_error(format!("{}: {e}", out.display())))?;
                continue;
            }

            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| extraction_error(format!("{}: {e}", parent.display())))?;
            }
            let mut content = Vec::with_capacity(entry.size() as usize);
            entry
                .read_to_end(&mut content)
                .map_err(|e| extraction_error(format!("{}: {e}", out.display())))?;
            std::fs::write(&out, content)
                .map_err(|e| extraction_error(format!("{}: {e}", out.display())))?;
            written += 1;
        }

        debug!(files = written, dest = %dest.display(), "Starter unpacked");
        Ok(written)
    }
}

fn extraction_error(reason: String) -> ModexError {
    ApplicationError::ExtractionFailed { reason }.into()
}
