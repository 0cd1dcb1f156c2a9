//! Convert blockchain output scripts to display addresses and back.
//!
//! Every supported network is described by a [`Network`] parameter set;
//! encoding classifies the script (P2PK, P2PKH, P2SH, witness, op-return)
//! and routes it to Base58Check, CashAddr, or Bech32, while decoding tries
//! the encodings a network supports in order and returns a typed
//! [`Address`].
//!
//! ```rust
//! use addrconv::bitcoin::ScriptBuf;
//!
//! let script = ScriptBuf::from(
//!     hex::decode("76a914bdb2b538e6b07e93d6bafcef4bec9dc936818a1988ac").unwrap(),
//! );
//!
//! // Bitcoin by default...
//! let address = addrconv::to_address(&script).unwrap();
//! assert_eq!(address, "1JJ2o6iKB4UXVMHXBSzVvbAKim5su2VUfa");
//!
//! // ...or any network from the table.
//! let network = addrconv::get_network_by_ticker("ltc");
//! let address = addrconv::to_network_address(&script, network).unwrap();
//! let decoded = addrconv::from_network_address(&address, network).unwrap();
//! assert_eq!(decoded.address_type, addrconv::AddressType::P2pkh);
//! ```

mod address;
mod networks;

// Re-export so callers can build and inspect scripts without depending on
// the bitcoin crate themselves.
pub use bitcoin;

pub use crate::address::{base58check, bech32 as segwit, cashaddr, convert_bits};
pub use crate::address::{Address, AddressError, AddressType};
pub use crate::networks::{
    find_network, find_network_by_ticker, get_network, get_network_by_ticker, Network, BITCOIN,
    BITCOIN_CASH, BITCOIN_CASH_TESTNET, BITCOIN_TESTNET, DIGIBYTE, LITECOIN, ZCOIN,
};

use bitcoin::Script;

/// Encode an output script as a Bitcoin address.
pub fn to_address(script: &Script) -> Result<String, AddressError> {
    to_network_address(script, &BITCOIN)
}

/// Encode an output script as an address for the given network.
pub fn to_network_address(script: &Script, network: &Network) -> Result<String, AddressError> {
    network.encode(script)
}

/// Decode an address string against the Bitcoin network.
pub fn from_address(address: &str) -> Result<Address, AddressError> {
    from_network_address(address, &BITCOIN)
}

/// Decode an address string against the given network.
pub fn from_network_address(address: &str, network: &Network) -> Result<Address, AddressError> {
    network.decode(address)
}
