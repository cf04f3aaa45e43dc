use crate::error::{Error, Result};

/// The suffix alphabet, index = 5-bit symbol value.
///
/// 32 symbols; `i`, `l`, `o` and `u` are excluded to avoid visual
/// ambiguity. Unlike Crockford base32 the alphabet is lowercase-only and
/// decoding accepts no aliases.
pub(crate) const ALPHABET: &[u8; 32] = b"0123456789abcdefghjkmnpqrstvwxyz";

/// Number of characters in an encoded suffix.
pub const SUFFIX_LEN: usize = 26;

const NO_VALUE: u8 = 255;
const BITS_PER_CHAR: usize = 5;

/// Lookup table for suffix decoding: ascii byte -> 5-bit symbol value,
/// [`NO_VALUE`] for bytes outside the alphabet.
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 32 {
        lut[ALPHABET[i as usize] as usize] = i;
        i += 1;
    }
    lut
};

/// Encodes the two 64-bit words of a 128-bit value into `buf`.
///
/// 128 bits is not a multiple of 5, so the encoding runs in two passes
/// that share one overlapping symbol: 13 symbols cover the high word
/// except its lowest bit, symbol 13 packs that bit together with the top
/// 4 bits of the low word, and the final 12 symbols cover the remaining
/// 60 bits of the low word.
#[inline]
pub(crate) fn encode_suffix(msb: u64, lsb: u64, buf: &mut [u8; SUFFIX_LEN]) {
    for (i, slot) in buf[..13].iter_mut().enumerate() {
        let shift = 61 - BITS_PER_CHAR * i;
        *slot = ALPHABET[((msb >> shift) & 0x1F) as usize];
    }

    let overlap = ((msb & 0x1) << 4) | (lsb >> 60);
    buf[13] = ALPHABET[overlap as usize];

    for i in 0..12 {
        let shift = 55 - BITS_PER_CHAR * i;
        buf[14 + i] = ALPHABET[((lsb >> shift) & 0x1F) as usize];
    }
}

/// Validates `suffix` and decodes it back into the two 64-bit words.
///
/// Checks run in a fixed order: length, then the leftmost-symbol bound,
/// then alphabet membership while the words are reassembled with the
/// inverse of the [`encode_suffix`] shifts.
#[inline]
pub(crate) fn decode_suffix(suffix: &[u8]) -> Result<(u64, u64)> {
    if suffix.len() != SUFFIX_LEN {
        return Err(Error::SuffixLength { len: suffix.len() });
    }

    // The leftmost symbol may only contribute its lowest 3 bits, anything
    // at alphabet index 8 or above would overflow 128 bits. Bytes outside
    // the alphabet also fail here (the sentinel has all high bits set),
    // which matches the validation order of the format.
    if LOOKUP[suffix[0] as usize] >> 3 != 0 {
        return Err(Error::SuffixLeftmost);
    }

    let mut msb = 0_u64;
    let mut lsb = 0_u64;
    for (i, &b) in suffix.iter().enumerate() {
        let val = LOOKUP[b as usize];
        if val == NO_VALUE {
            return Err(Error::InvalidSuffixChar);
        }
        let val = u64::from(val);
        match i {
            0..=12 => msb |= val << (61 - BITS_PER_CHAR * i),
            // the overlap symbol: 1 bit belongs to the high word, 4 bits
            // to the low word
            13 => {
                msb |= val >> 4;
                lsb |= (val & 0xF) << 60;
            }
            _ => lsb |= val << (55 - BITS_PER_CHAR * (i - 14)),
        }
    }

    Ok((msb, lsb))
}
