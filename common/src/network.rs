use std::fmt::{
    Display,
    Formatter
};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The network a node runs on
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// The production network
    Main,
    /// The public test network
    Test,
    /// Local regression testing network
    Regtest,
}

impl Default for Network {
    fn default() -> Self {
        Network::Main
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Network::Main => "main",
            Network::Test => "test",
            Network::Regtest => "regtest",
        };
        write!(f, "{}", name)
    }
}

/// Returned when a network name is not recognised
#[derive(thiserror::Error, Debug, Eq, PartialEq)]
#[error("Unknown network \"{0}\" (expected one of main, test, regtest)")]
pub struct ParseNetworkError(String);

impl FromStr for Network {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(Network::Main),
            "test" | "testnet" => Ok(Network::Test),
            "regtest" => Ok(Network::Regtest),
            _ => Err(ParseNetworkError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_network_names() {
        [
            ("main", Network::Main),
            ("mainnet", Network::Main),
            ("Test", Network::Test),
            ("testnet", Network::Test),
            ("regtest", Network::Regtest),
        ]
        .iter()
        .for_each(|(name, network)| {
            assert_eq!(name.parse::<Network>().unwrap(), *network);
        });
    }

    #[test]
    fn display_round_trips() {
        [Network::Main, Network::Test, Network::Regtest]
            .iter()
            .for_each(|network| assert_eq!(network.to_string().parse::<Network>().unwrap(), *network));
    }

    #[test]
    fn rejects_unknown_networks() {
        assert_eq!("signet".parse::<Network>(), Err(ParseNetworkError("signet".to_owned())));
    }
}
