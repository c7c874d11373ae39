// crates/smartdial-core/src/loader.rs

//! # Contact Loader
//!
//! Reads a contact list from a JSON array of `{ "name": ..., "number": ... }`
//! objects. Files ending in `.gz` are decompressed on the fly when the
//! `compact` feature is on.

use crate::common::Contact;
use crate::error::{Result, SmartDialError};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Loads and parses a contact list.
pub fn load_contacts(path: impl AsRef<Path>) -> Result<Vec<Contact>> {
    let path = path.as_ref();
    let reader = open_stream(path)?;
    let contacts: Vec<Contact> = serde_json::from_reader(reader)?;
    log::info!("loaded {} contacts from {}", contacts.len(), path.display());
    Ok(contacts)
}

/// Opens a file, buffers it, and wraps `.gz` files in a Gzip decoder.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            SmartDialError::NotFound(format!("Contacts not found at {}: {}", path.display(), e))
        }
        _ => SmartDialError::Io(e),
    })?;
    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    if is_gzip(path) {
        return Ok(Box::new(GzDecoder::new(reader)));
    }

    Ok(Box::new(reader))
}

#[cfg(feature = "compact")]
fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
