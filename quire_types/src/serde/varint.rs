
/// Longest varint an `int` may occupy.
pub const MAX_INT_VARINT_LEN: usize = 5;
/// Longest varint a `long` may occupy. The last byte may carry only one payload bit.
pub const MAX_LONG_VARINT_LEN: usize = 10;

const PAYLOAD_MASK: u8 = 0x7f;
const CONTINUATION_BIT: u8 = 0x80;

pub fn zigzag_encode(n: i64) -> u64 {
    ((n << 1) ^ (n >> 63)) as u64
}

pub fn zigzag_decode(z: u64) -> i64 {
    ((z >> 1) as i64) ^ -((z & 1) as i64)
}

/// Appends `n` as a zig-zag varint.
pub fn write_long(buf: &mut Vec<u8>, n: i64) {
    let mut z = zigzag_encode(n);
    while z > PAYLOAD_MASK as u64 {
        buf.push((z as u8 & PAYLOAD_MASK) | CONTINUATION_BIT);
        z >>= 7;
    }
    buf.push(z as u8);
}

/// Accumulates varint bytes one at a time.
pub struct VarintAccumulator {
    max_len: usize,
    len: usize,
    z: u64,
}

pub enum VarintStep {
    More,
    Done(u64),
}

/// The varint ran past its maximum length or overflowed 64 bits.
#[derive(Debug)]
pub struct VarintOverflow;

impl VarintAccumulator {
    pub fn new(max_len: usize) -> Self {
        Self {
            max_len,
            len: 0,
            z: 0,
        }
    }

    pub fn push(&mut self, byte: u8) -> Result<VarintStep, VarintOverflow> {
        let payload = (byte & PAYLOAD_MASK) as u64;
        if self.len == MAX_LONG_VARINT_LEN - 1 && payload > 1 {
            return Err(VarintOverflow);
        }
        self.z |= payload << (7 * self.len);
        self.len += 1;

        if byte & CONTINUATION_BIT == 0 {
            Ok(VarintStep::Done(self.z))
        } else if self.len >= self.max_len {
            Err(VarintOverflow)
        } else {
            Ok(VarintStep::More)
        }
    }
}
