//! Input decoding with UTF-8 fast path.
//!
//! - Valid UTF-8 is returned untouched, including any BOM (the table reader
//!   trims it)
//! - BOM-marked UTF-16 is decoded with `encoding_rs`
//! - Anything else falls back to a `chardetng` guess with replacement characters

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::path::Path;

use crate::error::EnvSplitError;

/// Read the whole file at `path` as text.
pub fn read_text(path: &Path) -> Result<String, EnvSplitError> {
    let bytes = std::fs::read(path)
        .map_err(|source| EnvSplitError::Read { path: path.to_path_buf(), source })?;
    Ok(decode_bytes(bytes, path))
}

fn decode_bytes(bytes: Vec<u8>, path: &Path) -> String {
    let bytes = match String::from_utf8(bytes) {
        Ok(text) => return text,
        Err(err) => err.into_bytes(),
    };

    if let Some((encoding, bom_len)) = Encoding::for_bom(&bytes) {
        tracing::debug!("Decoding {} as {} (BOM)", path.display(), encoding.name());
        let (decoded, _had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return decoded.into_owned();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(&bytes, true);
    let encoding = detector.guess(None, true);
    tracing::warn!(
        "{} is not valid UTF-8; decoding as {}",
        path.display(),
        encoding.name().to_lowercase()
    );
    let (decoded, _encoding_used, _had_errors) = encoding.decode(&bytes);
    decoded.into_owned()
}
