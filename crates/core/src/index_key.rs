//! Order-preserving index keys for signed tick counts
//!
//! Some canonical texts cannot be compared lexicographically: signed duration
//! text reverses under a leading minus sign and shifts with the day-field
//! width, and zoned offset text reorders across zones. An indexer that
//! compares stored strings without decoding them needs a projection whose
//! byte order equals the value order. These keys provide that projection:
//! the signed tick count is mapped to offset binary (sign bit flipped, so the
//! most negative value becomes zero) and written as a fixed-width decimal.
//!
//! For all tick counts `a`, `b`:
//! `a < b` iff `encode_ticks(a) < encode_ticks(b)` as byte strings.

use crate::error::{Error, Result};

/// Width of every index key in bytes
pub const INDEX_KEY_WIDTH: usize = 20;

const SIGN_BIT: u64 = 1 << 63;

/// Encode a signed tick count as a fixed-width order-preserving key
pub fn encode_ticks(ticks: i64) -> String {
    format!("{:020}", (ticks as u64) ^ SIGN_BIT)
}

/// Decode a key produced by [`encode_ticks`]
pub fn decode_ticks(key: &str) -> Result<i64> {
    if key.len() != INDEX_KEY_WIDTH || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::format(
            key,
            "index key must be exactly 20 decimal digits",
        ));
    }
    let biased: u64 = key
        .parse()
        .map_err(|_| Error::range(format!("index key {key:?} exceeds the tick range")))?;
    Ok((biased ^ SIGN_BIT) as i64)
}
