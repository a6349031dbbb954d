use crate::constants::BLOCKSIZE;

// Pads the message so its length is a multiple of BLOCKSIZE bytes:
// the message, a single 0x80 byte, zeros, then the bit length as a little-endian u64
pub fn pad(data: &[u8]) -> Vec<u8> {
    // The bit length is taken modulo 2^64
    let num_bits = (data.len() as u64).wrapping_mul(8);

    // Number of zero bytes so that len + 1 + zero_bytes is congruent to 56 mod 64
    let zero_bytes = (BLOCKSIZE + 55 - data.len() % BLOCKSIZE) % BLOCKSIZE;

    let mut padded_message = Vec::with_capacity(data.len() + 1 + zero_bytes + 8);
    padded_message.extend_from_slice(data);
    padded_message.push(0x80);
    padded_message.resize(padded_message.len() + zero_bytes, 0);
    padded_message.extend_from_slice(&num_bits.to_le_bytes());

    debug_assert_eq!(padded_message.len() % BLOCKSIZE, 0);
    padded_message
}

// Parses the padded message into blocks of 16 words, each word read little-endian
pub fn parse(data: &[u8]) -> Vec<[u32; 16]> {
    debug_assert_eq!(data.len() % BLOCKSIZE, 0);

    let mut message_blocks: Vec<[u32; 16]> = Vec::with_capacity(data.len() / BLOCKSIZE);
    for outer_chunk in data.chunks_exact(BLOCKSIZE) {
        let mut block: [u32; 16] = [0_u32; 16];
        for (word, inner_chunk) in block.iter_mut().zip(outer_chunk.chunks_exact(4)) {
            *word = u32::from_le_bytes([inner_chunk[0], inner_chunk[1], inner_chunk[2], inner_chunk[3]]);
        }
        message_blocks.push(block);
    }

    message_blocks
}

// ============== Operations on Words ================== //
pub fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

pub fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & z) | (y & !z)
}

pub fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

pub fn i(x: u32, y: u32, z: u32) -> u32 {
    y ^ (x | !z)
}

/// Reverses the byte order of a word.
pub fn swap(n: u32) -> u32 {
    (n & 0xff) << 24
        | ((n >> 8) & 0xff) << 16
        | ((n >> 16) & 0xff) << 8
        | ((n >> 24) & 0xff)
}
