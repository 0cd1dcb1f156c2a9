//! CashAddr encoding and decoding.
//!
//! Spec: <https://github.com/bitcoincashorg/bitcoincash.org/blob/master/spec/cashaddr.md>
//!
//! A cashaddr is `prefix ":" payload`, where the payload is a base32 string
//! of 5-bit symbols: a version byte (address type in the high nibble, a
//! 3-bit hash size code in the low bits), the hash itself, and a 40-bit
//! checksum.
//!
//! The checksum is a BCH code over GF(32) and is *not* the bech32 checksum:
//! it has its own generator constants, covers the prefix expanded to the low
//! 5 bits of each character (bech32 expands both halves), and spans 8
//! symbols rather than 6. Only the 5-bit symbol/charset type [`Fe32`] is
//! shared with bech32; everything else is implemented here.

use bech32::Fe32;

use super::convert_bits::convert_bits;
use super::{Address, AddressError, AddressType, Result};

/// Precomputed multiples of the generator polynomial, one per bit of the
/// top coefficient. These values are fixed by the published spec.
const GENERATOR: [u64; 5] = [
    0x98f2bc8e61,
    0x79b76d99e2,
    0xf33e5fb3c4,
    0xae2eabe2a8,
    0x1e4f43e470,
];

/// Compute the cashaddr checksum over a sequence of 5-bit values.
///
/// The input is read as coefficients of a polynomial over GF(32) with an
/// implicit leading 1, and the result is the 40-bit remainder mod the
/// generator, XORed with 1. A valid checksummed payload therefore gives 0.
/// The final XOR makes the empty extension of a valid string invalid, so
/// trailing symbols cannot be forged by appending zeros.
pub fn polymod(values: &[u8]) -> u64 {
    let mut c: u64 = 1;
    for &d in values {
        let c0 = (c >> 35) as u8;
        c = ((c & 0x07ff_ffff_ff) << 5) ^ u64::from(d);
        for (bit, generator) in GENERATOR.iter().enumerate() {
            if c0 & (1u8 << bit) != 0 {
                c ^= generator;
            }
        }
    }
    c ^ 1
}

/// Expand the prefix for checksum computation: the low 5 bits of each
/// character followed by a zero separator. Never transmitted.
pub fn expand_prefix(prefix: &str) -> Vec<u8> {
    let mut ret = Vec::with_capacity(prefix.len() + 1);
    for byte in prefix.bytes() {
        ret.push(byte & 0x1f);
    }
    ret.push(0);
    ret
}

/// Compute the 8 checksum symbols for a prefix and 5-bit payload.
pub fn create_checksum(prefix: &str, payload: &[u8]) -> [u8; 8] {
    let mut enc = expand_prefix(prefix);
    enc.extend_from_slice(payload);
    // Placeholder for the checksum itself.
    enc.extend_from_slice(&[0u8; 8]);

    let m = polymod(&enc);
    let mut ret = [0u8; 8];
    for (i, symbol) in ret.iter_mut().enumerate() {
        *symbol = ((m >> (5 * (7 - i))) & 0x1f) as u8;
    }
    ret
}

/// Check the trailing checksum symbols of a 5-bit payload.
pub fn verify_checksum(prefix: &str, payload: &[u8]) -> bool {
    let mut enc = expand_prefix(prefix);
    enc.extend_from_slice(payload);
    polymod(&enc) == 0
}

/// Build the 5-bit payload for an address: version byte plus hash, regrouped
/// with zero padding.
///
/// The version byte sets bit 3 for P2SH and carries a 3-bit code for the
/// hash size; only the sizes in the spec's table are encodable.
fn pack_address_data(addr_type: AddressType, hash: &[u8]) -> Result<Vec<u8>> {
    let type_bits: u8 = match addr_type {
        AddressType::P2pkh => 0x00,
        AddressType::P2sh => 0x08,
        other => return Err(AddressError::UnsupportedAddressType(other)),
    };

    let size_bits: u8 = match hash.len() * 8 {
        160 => 0,
        192 => 1,
        224 => 2,
        256 => 3,
        320 => 4,
        384 => 5,
        448 => 6,
        512 => 7,
        _ => return Err(AddressError::UnsupportedHashSize(hash.len())),
    };

    let mut data = Vec::with_capacity(1 + hash.len());
    data.push(type_bits | size_bits);
    data.extend_from_slice(hash);
    convert_bits(&data, 8, 5, true)
}

/// Render a 5-bit payload as `prefix:symbols`, checksum appended.
pub fn encode(prefix: &str, payload: &[u8]) -> String {
    let checksum = create_checksum(prefix, payload);
    let mut ret = String::with_capacity(prefix.len() + 1 + payload.len() + 8);
    ret.push_str(prefix);
    ret.push(':');
    for &value in payload.iter().chain(checksum.iter()) {
        ret.push(Fe32::try_from(value).expect("masked to 5 bits").to_char());
    }
    ret
}

/// Split and validate a cashaddr string, returning the lowercased prefix and
/// the 5-bit payload with the checksum symbols stripped.
pub fn decode(address: &str) -> Result<(String, Vec<u8>)> {
    // One pass over the raw string enforces the structural rules: a single
    // separator that is not the first character, no digits before it, and
    // no mixed case anywhere.
    let mut lower = false;
    let mut upper = false;
    let mut prefix_size = 0usize;
    for (i, c) in address.chars().enumerate() {
        match c {
            'a'..='z' => lower = true,
            'A'..='Z' => upper = true,
            '0'..='9' => {
                if prefix_size == 0 {
                    return Err(AddressError::MalformedAddressString(
                        "digits are not allowed in the prefix",
                    ));
                }
            }
            ':' => {
                if i == 0 || prefix_size != 0 {
                    return Err(AddressError::MalformedAddressString(
                        "separator must appear exactly once, after the prefix",
                    ));
                }
                prefix_size = i;
            }
            _ => return Err(AddressError::InvalidCharacter(c)),
        }
    }
    if prefix_size == 0 {
        return Err(AddressError::MalformedAddressString("missing prefix"));
    }
    if upper && lower {
        return Err(AddressError::MalformedAddressString(
            "uppercase and lowercase must not be mixed",
        ));
    }

    // Only ASCII reached this point, so byte and char indices agree.
    let address = address.to_lowercase();
    let (prefix, rest) = address.split_at(prefix_size);

    let mut values = Vec::with_capacity(rest.len() - 1);
    for c in rest[1..].chars() {
        let fe = Fe32::from_char(c).map_err(|_| AddressError::InvalidCharacter(c))?;
        values.push(fe.to_u8());
    }
    if values.len() < 8 {
        return Err(AddressError::TooShort(values.len()));
    }

    if !verify_checksum(prefix, &values) {
        return Err(AddressError::ChecksumMismatch);
    }

    values.truncate(values.len() - 8);
    Ok((prefix.to_string(), values))
}

/// Encode a hash as a full cashaddr string under the given prefix.
pub fn check_encode_cash_address(
    hash: &[u8],
    prefix: &str,
    addr_type: AddressType,
) -> Result<String> {
    let packed = pack_address_data(addr_type, hash)?;
    Ok(encode(prefix, &packed))
}

/// Decode a full cashaddr string into an [`Address`].
///
/// Version bytes other than 0x00/0x08 decode leniently as
/// [`AddressType::Unknown`] rather than failing; callers that care must
/// check the type.
pub fn check_decode_cash_address(address: &str) -> Result<Address> {
    let (prefix, values) = decode(address)?;
    let data = convert_bits(&values, 5, 8, false)?;
    if data.len() != 21 {
        return Err(AddressError::IncorrectDataLength(data.len()));
    }

    let address_type = match data[0] {
        0x00 => AddressType::P2pkh,
        0x08 => AddressType::P2sh,
        _ => AddressType::Unknown,
    };

    Ok(Address {
        address_type,
        hash: data[1..21].to_vec(),
        bech32_hrp: String::new(),
        cashaddr_prefix: prefix,
    })
}
