//! Text decoding for collected files.
//!
//! Files are decoded as UTF-8 first. Byte sequences that are not valid UTF-8
//! fall back to ISO-8859-1 (Latin-1), which maps every byte to the code point
//! of the same value and therefore never fails.

use std::{fs, io, path::Path};

/// How a file's bytes were turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Latin1,
}

/// Decoded file content together with the encoding that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub encoding: Encoding,
}

/// Read a file and decode it, falling back to Latin-1 on invalid UTF-8.
///
/// The file handle is dropped before this returns. Only I/O failures are
/// reported as errors; decoding itself cannot fail.
pub fn read_text(path: &Path) -> io::Result<Decoded> {
    let bytes = fs::read(path)?;
    Ok(decode(bytes))
}

pub fn decode(bytes: Vec<u8>) -> Decoded {
    match String::from_utf8(bytes) {
        Ok(text) => Decoded {
            text,
            encoding: Encoding::Utf8,
        },
        Err(err) => Decoded {
            text: decode_latin1(err.as_bytes()),
            encoding: Encoding::Latin1,
        },
    }
}

/// Decode bytes as ISO-8859-1.
///
/// ```
/// use promptcat::collector::decode::decode_latin1;
///
/// assert_eq!(decode_latin1(b"caf\xe9"), "café");
/// assert_eq!(decode_latin1(b""), "");
/// ```
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
