//! One-shot MD5 message digest (RFC 1321).
//!
//! MD5 is broken as a cryptographic hash. This crate exists for checksums and
//! interoperability with systems that still speak MD5, not for integrity
//! against an adversary.
//!
//! ```
//! assert_eq!(raupach_md5::hash(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
//! ```
mod constants;
mod error;
mod utils;

use crate::constants::{BLOCKSIZE, DIGEST_SIZE, INITIAL_STATE, SHIFTS, T};
use crate::utils::{f, g, h, i, pad, parse, swap};

pub use crate::error::{Error, Result};

/// Applies the 64 steps of one block to `state`, adding the result into it.
pub fn compress(state: &mut [u32; 4], block: &[u32; 16]) {
    // Initialize the four working variables with the current state
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];

    for step in 0..64 {
        let round = step / 16;
        let t = step % 16;

        let (mixed, k) = match round {
            0 => (f(b, c, d), t),
            1 => (g(b, c, d), (5 * t + 1) % 16),
            2 => (h(b, c, d), (3 * t + 5) % 16),
            _ => (i(b, c, d), (7 * t) % 16),
        };

        let temp = a
            .wrapping_add(mixed)
            .wrapping_add(block[k])
            .wrapping_add(T[step]);
        let rotated = b.wrapping_add(temp.rotate_left(SHIFTS[round][t % 4]));

        a = d;
        d = c;
        c = b;
        b = rotated;
    }

    // Accumulate into the running state
    let temp_values = [a, b, c, d];
    for (word, temp_value) in state.iter_mut().zip(temp_values) {
        *word = word.wrapping_add(temp_value);
    }
}

/// Serializes the state with each word's least-significant byte first.
pub fn to_bytes(state: &[u32; 4]) -> [u8; DIGEST_SIZE] {
    let mut final_hash = [0_u8; DIGEST_SIZE];
    for (chunk, word) in final_hash.chunks_exact_mut(4).zip(state) {
        chunk.copy_from_slice(&swap(*word).to_be_bytes());
    }
    final_hash
}

/// Renders the state as the canonical 32-digit lowercase hex string.
pub fn to_hex(state: &[u32; 4]) -> String {
    hex::encode(to_bytes(state))
}

/// Returns the raw 16-byte digest of `data`.
pub fn digest(data: &[u8]) -> [u8; DIGEST_SIZE] {
    let padded_message = pad(data);
    let message_blocks = parse(&padded_message);
    log::trace!(
        "md5: {} input bytes, {} blocks of {} bytes",
        data.len(),
        message_blocks.len(),
        BLOCKSIZE
    );

    let mut state = INITIAL_STATE;
    for block in &message_blocks {
        compress(&mut state, block);
    }

    to_bytes(&state)
}

/// Returns the MD5 digest of `data` as 32 lowercase hex digits.
pub fn hash(data: &[u8]) -> String {
    hex::encode(digest(data))
}

/// Hashes text by mapping each character to a single byte (ISO-8859-1).
///
/// Fails if any character lies above U+00FF.
pub fn hash_str(text: &str) -> Result<String> {
    let mut bytes = Vec::with_capacity(text.len());
    for (index, ch) in text.chars().enumerate() {
        match u8::try_from(ch) {
            Ok(byte) => bytes.push(byte),
            Err(_) => {
                log::debug!("md5: rejecting {:?} at index {}", ch, index);
                return Err(Error::NonLatin1Char { ch, index });
            }
        }
    }
    Ok(hash(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_DIGEST: &str = "d41d8cd98f00b204e9800998ecf8427e";

    #[test]
    fn test_hash() {
        assert_eq!(hash(b""), EMPTY_DIGEST);
        assert_eq!(hash(b"a"), "0cc175b9c0f1b6a831c399e269772661");
        assert_eq!(hash(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(hash(b"message digest"), "f96b697d7cb7938d525a2f31aaf161d0");
        assert_eq!(hash(b"abcdefghijklmnopqrstuvwxyz"), "c3fcd3d76192e4007dfb496cca67e13b");
    }

    #[test]
    fn test_hash_is_deterministic() {
        let message = b"The quick brown fox jumps over the lazy dog";
        assert_eq!(hash(message), hash(message));
        assert_eq!(hash(message), "9e107d9d372bb6826bd81d3542a419d6");
    }

    #[test]
    fn test_compress_single_padded_block() {
        let mut state = INITIAL_STATE;
        let mut block = [0_u32; 16];
        block[0] = 0x80;
        compress(&mut state, &block);

        assert_eq!(to_hex(&state), EMPTY_DIGEST);
    }

    #[test]
    fn test_to_hex_matches_swapped_words() {
        let state = [0x01234567, 0x89abcdef, 0xfedcba98, 0x76543210];
        let expected: String = state.iter().map(|word| format!("{:08x}", swap(*word))).collect();
        assert_eq!(to_hex(&state), expected);
        assert_eq!(to_hex(&state), "67452301efcdab8998badcfe10325476");
    }

    #[test]
    fn test_digest_bytes() {
        let digest_value = digest(b"abc");
        assert_eq!(digest_value.len(), DIGEST_SIZE);
        assert_eq!(hex::encode(digest_value), hash(b"abc"));
    }

    #[test]
    fn test_hash_str_latin1() {
        assert_eq!(hash_str("abc").unwrap(), hash(b"abc"));
        assert_eq!(hash_str("caf\u{e9}").unwrap(), hash(&[b'c', b'a', b'f', 0xe9]));
        assert_eq!(hash_str("\u{ff}").unwrap(), hash(&[0xff]));
    }

    #[test]
    fn test_hash_str_rejects_wide_chars() {
        let err = hash_str("ab\u{20ac}").unwrap_err();
        assert_eq!(err, Error::NonLatin1Char { ch: '\u{20ac}', index: 2 });
    }
}
