//! Tokens, chains and display currencies the payment provider accepts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stablecoins selectable as accepted tokens.
pub const SUPPORTED_TOKENS: &[&str] = &[
    "USDC", "USDT", "DAI", "USDGLO", "USDM", "CRVUSD", "XDAI", "WXDAI",
];

/// A network the provider can settle on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chain {
    /// Short identifier used in payment URLs.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
}

pub const SUPPORTED_CHAINS: &[Chain] = &[
    Chain { id: "eth", name: "Ethereum Mainnet" },
    Chain { id: "base", name: "Base" },
    Chain { id: "oeth", name: "Optimism" },
    Chain { id: "gno", name: "Gnosis Chain" },
    Chain { id: "pol", name: "Polygon" },
    Chain { id: "arb1", name: "Arbitrum One" },
];

pub fn is_supported_token(symbol: &str) -> bool {
    SUPPORTED_TOKENS.contains(&symbol)
}

pub fn find_chain(id: &str) -> Option<&'static Chain> {
    SUPPORTED_CHAINS.iter().find(|c| c.id == id)
}

/// Currency amounts are displayed in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Currency {
    #[default]
    USD,
    CHF,
    EUR,
    GBP,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::USD, Currency::CHF, Currency::EUR, Currency::GBP];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::CHF => "CHF",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "CHF" => Ok(Currency::CHF),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            other => Err(format!("unsupported currency '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_lookup_is_exact() {
        assert!(is_supported_token("USDC"));
        assert!(!is_supported_token("usdc"));
        assert!(!is_supported_token("DOGE"));
    }

    #[test]
    fn test_find_chain() {
        assert_eq!(find_chain("arb1").map(|c| c.name), Some("Arbitrum One"));
        assert!(find_chain("sol").is_none());
    }

    #[test]
    fn test_currency_parse() {
        assert_eq!("eur".parse::<Currency>(), Ok(Currency::EUR));
        assert!("JPY".parse::<Currency>().is_err());
        assert_eq!(Currency::default().to_string(), "USD");
    }
}
