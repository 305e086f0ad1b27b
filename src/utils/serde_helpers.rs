use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};

/// Deserialize a port column ("5521", " 5521 ") into u16
pub fn port_from_str<'de, D>(d: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(d)?;
    s.trim()
        .parse::<u16>()
        .map_err(|e| D::Error::custom(format!("invalid port {:?}: {}", s, e)))
}
