//! Network-aware encoding and decoding.
//!
//! This module bridges the [`Network`] parameter table with the codecs:
//! scripts are classified and routed to the right encoding, strings are
//! decoded by trying each encoding the network supports in order.

use bitcoin::hashes::Hash;
use bitcoin::Script;

use super::{base58check, bech32, cashaddr, Address, AddressError, AddressType, Result};
use crate::networks::Network;

/// Fallback rendering for scripts with no address form.
fn to_display_string(script: &Script) -> String {
    hex::encode(script.as_bytes())
}

impl Network {
    /// Encode an output script as an address string.
    ///
    /// Classification runs in priority order: op-return, P2PK, P2PKH, P2SH,
    /// witness program. Op-return outputs and scripts that match no known
    /// shape pass through as their hex representation rather than failing.
    pub fn encode(&self, script: &Script) -> Result<String> {
        if script.is_op_return() {
            return Ok(to_display_string(script));
        }

        if script.is_p2pk() {
            let pubkey = script
                .p2pk_public_key()
                .ok_or(AddressError::UnrecognizedScriptShape)?;
            let hash = pubkey.pubkey_hash();
            return Ok(base58check::check_encode(
                &hash.to_byte_array(),
                self.pub_key_prefix,
            ));
        }

        if script.is_p2pkh() {
            // OP_DUP OP_HASH160 <20> ... OP_EQUALVERIFY OP_CHECKSIG
            let hash = &script.as_bytes()[3..23];
            return Ok(base58check::check_encode(hash, self.pub_key_prefix));
        }

        if script.is_p2sh() {
            // OP_HASH160 <20> ... OP_EQUAL
            let hash = &script.as_bytes()[2..22];
            return Ok(base58check::check_encode(hash, self.script_hash_prefix));
        }

        if script.is_witness_program() {
            let version = script
                .witness_version()
                .ok_or(AddressError::UnrecognizedScriptShape)?;
            let program = &script.as_bytes()[2..];
            return bech32::encode_witness(self.bech32_prefix, version.to_num(), program);
        }

        Ok(to_display_string(script))
    }

    /// Decode an address string into a typed [`Address`].
    ///
    /// Base58Check is tried first since more or less every network supports
    /// it; on success the version byte is mapped back through this network's
    /// prefix table (an unlisted byte yields [`AddressType::Unknown`]). If
    /// that fails and the network has a cashaddr prefix, the string is tried
    /// as a cashaddr, with the prefix prepended when absent. The first
    /// encoding that validates wins.
    pub fn decode(&self, address: &str) -> Result<Address> {
        if let Ok((hash, version)) = base58check::check_decode(address) {
            let address_type = if version == self.pub_key_prefix {
                AddressType::P2pkh
            } else if version == self.script_hash_prefix {
                AddressType::P2sh
            } else {
                AddressType::Unknown
            };
            return Ok(Address {
                address_type,
                hash,
                bech32_hrp: String::new(),
                cashaddr_prefix: String::new(),
            });
        }

        if self.supports_cashaddr() {
            let prefixed = format!("{}:", self.cashaddr_prefix);
            let candidate = if address.starts_with(&prefixed) {
                address.to_string()
            } else {
                format!("{}{}", prefixed, address)
            };
            if let Ok(decoded) = cashaddr::check_decode_cash_address(&candidate) {
                return Ok(decoded);
            }
        }

        Err(AddressError::UnknownAddressType)
    }

    /// Re-encode a decoded address as Base58Check under this network's
    /// version bytes. P2SH-wrapped segwit variants encode as P2SH.
    pub fn encode_to_base58(&self, address: &Address) -> Result<String> {
        if address.address_type == AddressType::P2pkh {
            return Ok(base58check::check_encode(&address.hash, self.pub_key_prefix));
        }
        if address.is_p2sh() {
            return Ok(base58check::check_encode(
                &address.hash,
                self.script_hash_prefix,
            ));
        }
        Err(AddressError::UnsupportedAddressType(address.address_type))
    }

    /// Re-encode a decoded address as a cashaddr under this network's
    /// prefix. Only plain P2PKH and P2SH carry over to cashaddr.
    pub fn encode_to_cashaddr(&self, address: &Address) -> Result<String> {
        if !self.supports_cashaddr() {
            return Err(AddressError::CashAddrUnsupported);
        }
        if address.address_type != AddressType::P2pkh
            && address.address_type != AddressType::P2sh
        {
            return Err(AddressError::UnsupportedAddressType(address.address_type));
        }
        cashaddr::check_encode_cash_address(
            &address.hash,
            self.cashaddr_prefix,
            address.address_type,
        )
    }
}
