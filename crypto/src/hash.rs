use std::convert::{
    From,
    TryFrom
};
use std::fmt::{
    Display,
    Formatter
};
use std::str::FromStr;

use serde::{Serialize, Deserialize};

pub type Hash256Data = generic_array::GenericArray<u8, generic_array::typenum::U32>;

/// A 256-bit block digest, stored in the order it is displayed
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Hash256(Hash256Data);

impl Hash256 {
    pub fn null_hash() -> Self {
        Hash256::from([0; 32])
    }
    pub fn data(&self) -> &Hash256Data {
        &self.0
    }
}

impl Display for Hash256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl From<Hash256Data> for Hash256 {
    fn from(data: Hash256Data) -> Self {
        Hash256(data)
    }
}

impl From<[u8; 32]> for Hash256 {
    fn from(data: [u8; 32]) -> Self {
        Hash256(Hash256Data::clone_from_slice(&data))
    }
}

/// Parses a hex digest, optionally prefixed with `0x`
impl TryFrom<&str> for Hash256 {
    type Error = hex::FromHexError;
    fn try_from(data: &str) -> Result<Self, Self::Error> {
        let data = data.strip_prefix("0x").unwrap_or(data);
        if data.len() != 64 {
            return Err(hex::FromHexError::InvalidStringLength)
        }
        Ok(Hash256(Hash256Data::clone_from_slice(&hex::decode(data)?)))
    }
}

impl FromStr for Hash256 {
    type Err = hex::FromHexError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hash256::try_from(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_hash() {
        assert_eq!(Hash256::null_hash().to_string(), "0000000000000000000000000000000000000000000000000000000000000000");
    }

    #[test]
    fn decodes_correctly() {
        let data: [u8; 32] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32];
        let hash = Hash256::try_from("0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20").unwrap();
        assert_eq!(hash.data().as_slice(), data);
        assert_eq!(hash, Hash256::from(data));
    }

    #[test]
    fn accepts_prefixed_input() {
        let plain: Hash256 = "00000f639db5734b2b861ef8dbccc33aebd7de44d13de000a12d093bcc866c64".parse().unwrap();
        let prefixed: Hash256 = "0x00000f639db5734b2b861ef8dbccc33aebd7de44d13de000a12d093bcc866c64".parse().unwrap();
        assert_eq!(plain, prefixed);
        assert_eq!(prefixed.to_string(), "00000f639db5734b2b861ef8dbccc33aebd7de44d13de000a12d093bcc866c64");
    }

    #[test]
    fn errors_on_invalid_input() {
        assert!(Hash256::try_from("01").is_err());
        assert!(Hash256::try_from("0x01").is_err());
        assert!(Hash256::try_from("zz0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f").is_err());
    }
}
