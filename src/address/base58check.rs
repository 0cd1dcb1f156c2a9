//! Base58Check encoding and decoding for legacy addresses.
//!
//! The payload is `version byte || data || checksum`, where the checksum is
//! the first four bytes of `sha256d` over everything before it. The base-58
//! rendering treats the payload as one big-endian integer, so no bigint
//! dependency is needed: both directions run long division over a little
//! endian byte vector.

use bitcoin::hashes::{sha256d, Hash};

use super::{AddressError, Result};

const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const fn reverse_alphabet() -> [i8; 128] {
    let mut table = [-1i8; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as i8;
        i += 1;
    }
    table
}

static DIGITS: [i8; 128] = reverse_alphabet();

/// First four bytes of sha256d over `data`.
fn checksum(data: &[u8]) -> [u8; 4] {
    let hash = sha256d::Hash::hash(data);
    let mut check = [0u8; 4];
    check.copy_from_slice(&hash.to_byte_array()[..4]);
    check
}

/// Base58-encode raw bytes, one `'1'` per leading zero byte.
fn encode(data: &[u8]) -> String {
    // log(256) / log(58) is just under 137/100
    let mut scratch: Vec<u8> = Vec::with_capacity(1 + data.len() * 137 / 100);
    let mut leading_zeroes = 0;
    let mut in_leading = true;

    for &byte in data {
        let mut carry = u32::from(byte);
        if in_leading && carry == 0 {
            leading_zeroes += 1;
        } else {
            in_leading = false;
        }

        for digit in scratch.iter_mut() {
            let acc = u32::from(*digit) * 256 + carry;
            *digit = (acc % 58) as u8;
            carry = acc / 58;
        }
        while carry > 0 {
            scratch.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    let mut ret = String::with_capacity(leading_zeroes + scratch.len());
    for _ in 0..leading_zeroes {
        ret.push(char::from(ALPHABET[0]));
    }
    for &digit in scratch.iter().rev() {
        ret.push(char::from(ALPHABET[usize::from(digit)]));
    }
    ret
}

/// Base58-decode a string, restoring one zero byte per leading `'1'`.
fn decode(address: &str) -> Result<Vec<u8>> {
    // 11/15 is just over log(58) / log(256)
    let mut scratch: Vec<u8> = Vec::with_capacity(1 + address.len() * 11 / 15);

    for c in address.chars() {
        let digit = match u32::from(c) {
            i if i < 128 => DIGITS[i as usize],
            _ => -1,
        };
        if digit < 0 {
            return Err(AddressError::InvalidCharacter(c));
        }

        let mut carry = digit as u32;
        for byte in scratch.iter_mut() {
            carry += u32::from(*byte) * 58;
            *byte = carry as u8;
            carry >>= 8;
        }
        while carry > 0 {
            scratch.push(carry as u8);
            carry >>= 8;
        }
    }

    let mut ret: Vec<u8> = address
        .bytes()
        .take_while(|&b| b == ALPHABET[0])
        .map(|_| 0)
        .collect();
    ret.extend(scratch.iter().rev().skip_while(|&&b| b == 0));
    Ok(ret)
}

/// Encode `payload` under a network version byte, checksummed.
pub fn check_encode(payload: &[u8], version: u8) -> String {
    let mut data = Vec::with_capacity(1 + payload.len() + 4);
    data.push(version);
    data.extend_from_slice(payload);
    let check = checksum(&data);
    data.extend_from_slice(&check);
    encode(&data)
}

/// Decode a Base58Check string into its raw `(payload, version)` pair.
///
/// The caller maps the version byte back to an address type against a
/// network table; see [`crate::Network::decode`].
pub fn check_decode(address: &str) -> Result<(Vec<u8>, u8)> {
    let decoded = decode(address)?;
    // version byte, at least one payload byte, four checksum bytes
    if decoded.len() < 6 {
        return Err(AddressError::TooShort(decoded.len()));
    }

    let check_start = decoded.len() - 4;
    let expected = checksum(&decoded[..check_start]);
    if decoded[check_start..] != expected {
        return Err(AddressError::ChecksumMismatch);
    }

    Ok((decoded[1..check_start].to_vec(), decoded[0]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base58_basics() {
        assert_eq!(encode(&[0]), "1");
        assert_eq!(encode(&[1]), "2");
        assert_eq!(encode(&[58]), "21");
        assert_eq!(encode(&[13, 36]), "211");
        assert_eq!(encode(&[0, 0, 13, 36]), "11211");

        assert_eq!(decode("1").unwrap(), vec![0]);
        assert_eq!(decode("211").unwrap(), vec![13, 36]);
        assert_eq!(decode("11211").unwrap(), vec![0, 0, 13, 36]);
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn check_encode_known_addresses() {
        let hash = hex::decode("bdb2b538e6b07e93d6bafcef4bec9dc936818a19").unwrap();
        assert_eq!(check_encode(&hash, 0x00), "1JJ2o6iKB4UXVMHXBSzVvbAKim5su2VUfa");

        let hash = hex::decode("4aef67ed61d391d6f3d9903ead92386c1efc9925").unwrap();
        assert_eq!(check_encode(&hash, 0x05), "38XEixUj1QpcqxTWbxvqdbv4Mjre4imw9Z");

        // Leading zero byte in the hash keeps its own '1' after the
        // version byte's.
        let hash = hex::decode("011f28e473c95f4013d7d53ec5fbc3b42df8ed10").unwrap();
        assert_eq!(check_encode(&hash, 0x00), "16w1D5WRVKJuZUsSRzdLp9w3YGcgoxDXb");
    }

    #[test]
    fn check_decode_roundtrip() {
        let hash = hex::decode("bdb2b538e6b07e93d6bafcef4bec9dc936818a19").unwrap();
        let (payload, version) =
            check_decode("1JJ2o6iKB4UXVMHXBSzVvbAKim5su2VUfa").unwrap();
        assert_eq!(payload, hash);
        assert_eq!(version, 0x00);

        let (payload, version) =
            check_decode("38XEixUj1QpcqxTWbxvqdbv4Mjre4imw9Z").unwrap();
        assert_eq!(hex::encode(payload), "4aef67ed61d391d6f3d9903ead92386c1efc9925");
        assert_eq!(version, 0x05);
    }

    #[test]
    fn check_decode_rejects_tampering() {
        // Base address is valid; flipping any single character must trip
        // the checksum.
        let valid = "1JJ2o6iKB4UXVMHXBSzVvbAKim5su2VUfa";
        assert!(check_decode(valid).is_ok());

        for i in 0..valid.len() {
            let mut tampered: Vec<char> = valid.chars().collect();
            tampered[i] = if tampered[i] == 'a' { 'b' } else { 'a' };
            let tampered: String = tampered.into_iter().collect();
            assert_eq!(
                check_decode(&tampered),
                Err(AddressError::ChecksumMismatch),
                "tampered index {} was accepted",
                i
            );
        }
    }

    #[test]
    fn check_decode_rejects_bad_characters() {
        assert_eq!(
            check_decode("1JJ2o6iKB4UXVMHXBSzVvbAKim5su2VUf0"),
            Err(AddressError::InvalidCharacter('0'))
        );
        assert_eq!(
            check_decode("1JJ2o6iKB4UXVMHXBSzVvbAKim5su2VUf¢"),
            Err(AddressError::InvalidCharacter('¢'))
        );
    }

    #[test]
    fn check_decode_rejects_short_input() {
        assert_eq!(check_decode(""), Err(AddressError::TooShort(0)));
        // "2" decodes to the single byte 0x01.
        assert_eq!(check_decode("2"), Err(AddressError::TooShort(1)));
        // Five decoded bytes would leave an empty payload.
        assert_eq!(
            check_decode(&encode(&[0x00, 0xde, 0xad, 0xbe, 0xef])),
            Err(AddressError::TooShort(5))
        );
    }
}
