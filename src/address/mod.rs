//! Address encoding and decoding for bitcoin-like output scripts.
//!
//! Supported address formats:
//!
//! - **Base58Check**: traditional P2PKH and P2SH addresses
//! - **CashAddr**: the Bitcoin Cash `prefix:payload` format with a 40-bit
//!   BCH-style checksum
//! - **Bech32/Bech32m**: native segwit addresses, produced through the
//!   `bech32` crate
//!
//! Encoding starts from an output script and a [`crate::Network`]; decoding
//! tries each format the network supports in order and returns a typed
//! [`Address`] describing what was found.

pub mod base58check;
pub mod bech32;
pub mod cashaddr;
mod convert_bits;
mod networks;

pub use convert_bits::convert_bits;

use std::fmt;

/// The script shape an address stands for.
///
/// `Unknown` is a valid decode result: Base58Check version bytes outside the
/// network table and CashAddr version bytes other than 0x00/0x08 decode
/// leniently instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressType {
    Unknown,
    P2pkh,
    P2sh,
    P2shP2wpkh,
    P2shP2wsh,
    P2wpkh,
    P2wsh,
    P2pk,
}

/// A decoded address: the script shape, the raw hash or witness program,
/// and the prefix of whichever encoding produced it.
///
/// At most one of `bech32_hrp` and `cashaddr_prefix` is non-empty, matching
/// the decode path taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub address_type: AddressType,
    /// Pubkey hash, script hash, or witness program bytes.
    pub hash: Vec<u8>,
    /// Human readable part when segwit-encoded, empty otherwise.
    pub bech32_hrp: String,
    /// CashAddr prefix when cashaddr-encoded, empty otherwise.
    pub cashaddr_prefix: String,
}

impl Address {
    /// True for plain P2SH and for the P2SH-wrapped segwit variants.
    pub fn is_p2sh(&self) -> bool {
        matches!(
            self.address_type,
            AddressType::P2sh | AddressType::P2shP2wpkh | AddressType::P2shP2wsh
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// A character outside the encoding's alphabet.
    InvalidCharacter(char),
    /// The embedded checksum does not match the payload.
    ChecksumMismatch,
    /// Decoded data shorter than version byte + payload + checksum.
    TooShort(usize),
    /// Bit-group conversion left non-zero or oversized padding.
    PaddingError,
    /// The address type cannot be represented in the target encoding.
    UnsupportedAddressType(AddressType),
    /// The hash length has no size code in the cashaddr version byte.
    UnsupportedHashSize(usize),
    /// The unpacked cashaddr payload is not version byte + 20-byte hash.
    IncorrectDataLength(usize),
    /// Separator, case, or prefix rule violated; the rule is named.
    MalformedAddressString(&'static str),
    /// No supported encoding could decode the string.
    UnknownAddressType,
    /// The script classified as a known shape but its data could not be
    /// extracted.
    UnrecognizedScriptShape,
    /// The network has no cashaddr prefix.
    CashAddrUnsupported,
    /// Error reported by the bech32 segwit encoder.
    Bech32(String),
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::InvalidCharacter(c) => write!(f, "invalid character {:?}", c),
            AddressError::ChecksumMismatch => write!(f, "checksum mismatch"),
            AddressError::TooShort(len) => write!(f, "decoded data too short: {} bytes", len),
            AddressError::PaddingError => write!(f, "invalid padding in bit conversion"),
            AddressError::UnsupportedAddressType(t) => {
                write!(f, "unsupported address type {:?}", t)
            }
            AddressError::UnsupportedHashSize(len) => {
                write!(f, "unsupported hash size: {} bytes", len)
            }
            AddressError::IncorrectDataLength(len) => {
                write!(f, "incorrect data length: {} bytes", len)
            }
            AddressError::MalformedAddressString(reason) => {
                write!(f, "malformed address string: {}", reason)
            }
            AddressError::UnknownAddressType => write!(f, "unknown address type"),
            AddressError::UnrecognizedScriptShape => write!(f, "unrecognized script shape"),
            AddressError::CashAddrUnsupported => write!(f, "network does not support cashaddr"),
            AddressError::Bech32(msg) => write!(f, "bech32 error: {}", msg),
        }
    }
}

impl std::error::Error for AddressError {}

type Result<T> = std::result::Result<T, AddressError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_p2sh_covers_wrapped_variants() {
        let mut address = Address {
            address_type: AddressType::P2sh,
            hash: vec![0; 20],
            bech32_hrp: String::new(),
            cashaddr_prefix: String::new(),
        };
        assert!(address.is_p2sh());

        address.address_type = AddressType::P2shP2wpkh;
        assert!(address.is_p2sh());

        address.address_type = AddressType::P2shP2wsh;
        assert!(address.is_p2sh());

        address.address_type = AddressType::P2pkh;
        assert!(!address.is_p2sh());

        address.address_type = AddressType::Unknown;
        assert!(!address.is_p2sh());
    }
}
