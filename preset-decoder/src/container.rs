//! Program archive containers
//!
//! Programs travel either as a bare 160-byte record or packed inside a ZIP
//! archive (a single-program export or a whole library). Whether a buffer is
//! an archive is decided up front by [`try_open`], which returns an explicit
//! [`Container`] value instead of signalling through errors; a buffer that is
//! not an archive is passed through as a raw record.

use std::fs;
use std::io::{self, Read, Seek};
use std::path::Path;

use zip::ZipArchive;

use crate::types::{DecodeError, Result};

/// File-name suffix of program entries inside an archive.
pub const PROGRAM_ENTRY_SUFFIX: &str = ".prog_bin";

/// Canonical entry name for a program at the given library slot.
pub fn program_entry_name(program_number: u32) -> String {
    format!("Prog_{:03}{}", program_number, PROGRAM_ENTRY_SUFFIX)
}

/// Outcome of probing a buffer for an archive container.
pub enum Container<'a> {
    /// The buffer parsed as a ZIP archive.
    Archive(ZipArchive<io::Cursor<&'a [u8]>>),
    /// The buffer is not an archive and should be treated as a raw record.
    NotAnArchive,
}

/// Probe a buffer for a ZIP container.
///
/// Failure to parse is not an error condition here: raw program records are
/// a supported input, so an unparseable buffer simply selects the
/// [`Container::NotAnArchive`] path.
pub fn try_open(bytes: &[u8]) -> Container<'_> {
    match ZipArchive::new(io::Cursor::new(bytes)) {
        Ok(zip) => Container::Archive(zip),
        Err(err) => {
            log::debug!("not an archive ({}), treating input as raw record", err);
            Container::NotAnArchive
        }
    }
}

/// Read a program file from disk and unwrap it to raw record bytes.
///
/// Archives are resolved to the `Prog_NNN.prog_bin` entry for
/// `program_number`, falling back to the first entry when that slot is not
/// present. Non-archive files are returned unchanged.
///
/// # Errors
/// * [`DecodeError::Io`] when the file cannot be read
/// * [`DecodeError::NoEntries`] for an archive with no entries
/// * [`DecodeError::MalformedLayout`] for a corrupt archive entry
pub fn unwrap_file<P: AsRef<Path>>(path: P, program_number: u32) -> Result<Vec<u8>> {
    let bytes = fs::read(path.as_ref())?;
    match try_open(&bytes) {
        Container::Archive(mut zip) => {
            let index = entry_for_number(&zip, program_number)?;
            read_entry(&mut zip, index)
        }
        Container::NotAnArchive => Ok(bytes),
    }
}

/// Unwrap an in-memory buffer (an uploaded file) to raw record bytes.
///
/// Archives resolve to the first entry named with the `.prog_bin` suffix,
/// falling back to the first entry of any name. Non-archive buffers are
/// returned unchanged.
pub fn unwrap_upload(bytes: &[u8]) -> Result<Vec<u8>> {
    match try_open(bytes) {
        Container::Archive(mut zip) => {
            let index = first_program_entry(&zip)?;
            read_entry(&mut zip, index)
        }
        Container::NotAnArchive => Ok(bytes.to_vec()),
    }
}

fn entry_for_number<R: Read + Seek>(zip: &ZipArchive<R>, program_number: u32) -> Result<usize> {
    if zip.is_empty() {
        return Err(DecodeError::NoEntries);
    }
    let wanted = program_entry_name(program_number);
    let found = (0..zip.len()).find(|&i| zip.name_for_index(i) == Some(wanted.as_str()));
    if found.is_none() {
        log::debug!("entry {} not in archive, falling back to first entry", wanted);
    }
    Ok(found.unwrap_or(0))
}

fn first_program_entry<R: Read + Seek>(zip: &ZipArchive<R>) -> Result<usize> {
    if zip.is_empty() {
        return Err(DecodeError::NoEntries);
    }
    let found = (0..zip.len()).find(|&i| {
        zip.name_for_index(i)
            .is_some_and(|name| name.ends_with(PROGRAM_ENTRY_SUFFIX))
    });
    Ok(found.unwrap_or(0))
}

fn read_entry<R: Read + Seek>(zip: &mut ZipArchive<R>, index: usize) -> Result<Vec<u8>> {
    let mut entry = zip
        .by_index(index)
        .map_err(|e| DecodeError::MalformedLayout(format!("archive entry {}: {}", index, e)))?;
    let mut out = Vec::with_capacity(entry.size() as usize);
    entry.read_to_end(&mut out)?;
    log::debug!("unwrapped entry '{}' ({} bytes)", entry.name(), out.len());
    Ok(out)
}
