//! Address parameters for the supported networks.
//!
//! One [`Network`] value per coin, holding the prefix bytes and strings that
//! address encoding needs. The table is compile-time constant data; lookups
//! are pure functions over it.

/// The address parameters of one coin network.
///
/// An empty `bech32_prefix` means the network has no segwit addresses; an
/// empty `cashaddr_prefix` means it has no cashaddr form. Prefix emptiness
/// is the only feature-detection mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    /// Human readable part of bech32 addresses.
    pub bech32_prefix: &'static str,
    /// P2PKH address version byte.
    pub pub_key_prefix: u8,
    /// P2SH address version byte.
    pub script_hash_prefix: u8,
    /// WIF private key version byte. Not used by address conversion, kept
    /// as part of the chainparams table.
    pub wif_prefix: u8,
    /// Extended public key prefix (BIP32). Table data only.
    pub bip32_pub_prefix: [u8; 4],
    /// Extended private key prefix (BIP32). Table data only.
    pub bip32_priv_prefix: [u8; 4],
    /// CashAddr prefix.
    pub cashaddr_prefix: &'static str,
}

impl Network {
    pub fn supports_bech32(&self) -> bool {
        !self.bech32_prefix.is_empty()
    }

    pub fn supports_cashaddr(&self) -> bool {
        !self.cashaddr_prefix.is_empty()
    }
}

// Version bytes from each coin's src/chainparams.cpp.

/// Bitcoin mainnet.
pub const BITCOIN: Network = Network {
    bech32_prefix: "bc",
    pub_key_prefix: 0x00,
    script_hash_prefix: 0x05,
    wif_prefix: 0x80,
    bip32_pub_prefix: [0x04, 0x88, 0xb2, 0x1e],
    bip32_priv_prefix: [0x04, 0x88, 0xad, 0xe4],
    cashaddr_prefix: "",
};

/// Bitcoin testnet3.
pub const BITCOIN_TESTNET: Network = Network {
    bech32_prefix: "tb",
    pub_key_prefix: 0x6f,
    script_hash_prefix: 0xc4,
    wif_prefix: 0xef,
    bip32_pub_prefix: [0x04, 0x35, 0x87, 0xcf],
    bip32_priv_prefix: [0x04, 0x35, 0x83, 0x94],
    cashaddr_prefix: "",
};

/// Bitcoin Cash mainnet. Legacy base58 addresses share Bitcoin's version
/// bytes; the cashaddr prefix is what tells the networks apart.
pub const BITCOIN_CASH: Network = Network {
    bech32_prefix: "",
    pub_key_prefix: 0x00,
    script_hash_prefix: 0x05,
    wif_prefix: 0x80,
    bip32_pub_prefix: [0x04, 0x88, 0xb2, 0x1e],
    bip32_priv_prefix: [0x04, 0x88, 0xad, 0xe4],
    cashaddr_prefix: "bitcoincash",
};

/// Bitcoin Cash testnet.
pub const BITCOIN_CASH_TESTNET: Network = Network {
    bech32_prefix: "",
    pub_key_prefix: 0x6f,
    script_hash_prefix: 0xc4,
    wif_prefix: 0xef,
    bip32_pub_prefix: [0x04, 0x35, 0x87, 0xcf],
    bip32_priv_prefix: [0x04, 0x35, 0x83, 0x94],
    cashaddr_prefix: "bchtest",
};

/// Litecoin mainnet.
pub const LITECOIN: Network = Network {
    bech32_prefix: "ltc",
    pub_key_prefix: 0x30,
    script_hash_prefix: 0x32,
    wif_prefix: 0xb0,
    bip32_pub_prefix: [0x04, 0x88, 0xb2, 0x1e],
    bip32_priv_prefix: [0x04, 0x88, 0xad, 0xe4],
    cashaddr_prefix: "",
};

/// Digibyte mainnet.
pub const DIGIBYTE: Network = Network {
    bech32_prefix: "dgb",
    pub_key_prefix: 0x1e,
    script_hash_prefix: 0x3f,
    wif_prefix: 0x9e,
    bip32_pub_prefix: [0x04, 0x88, 0xb2, 0x1e],
    bip32_priv_prefix: [0x04, 0x88, 0xad, 0xe4],
    cashaddr_prefix: "",
};

/// Zcoin mainnet.
pub const ZCOIN: Network = Network {
    bech32_prefix: "",
    pub_key_prefix: 0x52,
    script_hash_prefix: 0x07,
    wif_prefix: 0xd2,
    bip32_pub_prefix: [0x04, 0x88, 0xb2, 0x1e],
    bip32_priv_prefix: [0x04, 0x88, 0xad, 0xe4],
    cashaddr_prefix: "",
};

/// Look up a network by name, case-insensitively.
pub fn find_network(name: &str) -> Option<&'static Network> {
    match name.to_lowercase().as_str() {
        "bitcoin" => Some(&BITCOIN),
        "bitcointestnet" | "testnet" => Some(&BITCOIN_TESTNET),
        "bitcoincash" => Some(&BITCOIN_CASH),
        "bitcoincashtestnet" => Some(&BITCOIN_CASH_TESTNET),
        "litecoin" => Some(&LITECOIN),
        "digibyte" => Some(&DIGIBYTE),
        "zcoin" => Some(&ZCOIN),
        _ => None,
    }
}

/// Look up a network by ticker, case-insensitively.
pub fn find_network_by_ticker(ticker: &str) -> Option<&'static Network> {
    match ticker.to_lowercase().as_str() {
        "btc" => Some(&BITCOIN),
        "tbtc" => Some(&BITCOIN_TESTNET),
        "bch" => Some(&BITCOIN_CASH),
        "tbch" => Some(&BITCOIN_CASH_TESTNET),
        "ltc" => Some(&LITECOIN),
        "dgb" => Some(&DIGIBYTE),
        "xzc" => Some(&ZCOIN),
        _ => None,
    }
}

/// Network settings for common coins by name.
///
/// Unknown names fall back to Bitcoin rather than failing. Use
/// [`find_network`] when a missing entry should be an error.
pub fn get_network(name: &str) -> &'static Network {
    find_network(name).unwrap_or(&BITCOIN)
}

/// Network settings for common coins by ticker.
///
/// Unknown tickers fall back to Bitcoin rather than failing. Use
/// [`find_network_by_ticker`] when a missing entry should be an error.
pub fn get_network_by_ticker(ticker: &str) -> &'static Network {
    find_network_by_ticker(ticker).unwrap_or(&BITCOIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        assert_eq!(get_network("bitcoin"), &BITCOIN);
        assert_eq!(get_network("Litecoin"), &LITECOIN);
        assert_eq!(get_network("BITCOINCASH"), &BITCOIN_CASH);
        assert_eq!(get_network("digibyte"), &DIGIBYTE);
        assert_eq!(get_network("zcoin"), &ZCOIN);
    }

    #[test]
    fn lookup_by_ticker() {
        assert_eq!(get_network_by_ticker("btc"), &BITCOIN);
        assert_eq!(get_network_by_ticker("LTC"), &LITECOIN);
        assert_eq!(get_network_by_ticker("bch"), &BITCOIN_CASH);
        assert_eq!(get_network_by_ticker("dgb"), &DIGIBYTE);
        assert_eq!(get_network_by_ticker("xzc"), &ZCOIN);
    }

    #[test]
    fn unknown_names_fall_back_to_bitcoin() {
        assert_eq!(get_network("nonsense"), &BITCOIN);
        assert_eq!(get_network_by_ticker("zzz"), &BITCOIN);

        // The strict variants report the miss instead.
        assert_eq!(find_network("nonsense"), None);
        assert_eq!(find_network_by_ticker("zzz"), None);
    }

    #[test]
    fn feature_detection_by_prefix() {
        assert!(BITCOIN.supports_bech32());
        assert!(!BITCOIN.supports_cashaddr());
        assert!(!BITCOIN_CASH.supports_bech32());
        assert!(BITCOIN_CASH.supports_cashaddr());
        assert!(!ZCOIN.supports_bech32());
        assert!(!ZCOIN.supports_cashaddr());
    }
}
