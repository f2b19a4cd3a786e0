//! Adapter configuration
//!
//! The configuration is resolved once at startup into an immutable
//! [`GlsConfig`] and passed by reference into every component that needs it.
//! Defaults are applied during resolution, so downstream code never checks
//! whether an optional field was set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PRINTER_TYPE, DEFAULT_WEBSHOP_ENGINE};
use crate::errors::GlsError;

/// Countries served by the MyGLS API.
///
/// The lowercase wire form is interpolated into the API host name
/// (`api.mygls.<country>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountryCode {
    Si,
    Hr,
    Hu,
    Cz,
    Sk,
    Ro,
    Rs,
}

impl CountryCode {
    /// Lowercase ISO form used in the API host name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Si => "si",
            Self::Hr => "hr",
            Self::Hu => "hu",
            Self::Cz => "cz",
            Self::Sk => "sk",
            Self::Ro => "ro",
            Self::Rs => "rs",
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = GlsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "si" => Ok(Self::Si),
            "hr" => Ok(Self::Hr),
            "hu" => Ok(Self::Hu),
            "cz" => Ok(Self::Cz),
            "sk" => Ok(Self::Sk),
            "ro" => Ok(Self::Ro),
            "rs" => Ok(Self::Rs),
            other => Err(GlsError::Config(format!("Unsupported GLS country: {other}"))),
        }
    }
}

/// Fully resolved adapter configuration.
///
/// Built once at startup; every field is populated. Immutable for the
/// process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlsConfig {
    /// MyGLS account username.
    pub username: String,
    /// Plaintext account password. Hashed per request; never transmitted
    /// as-is.
    pub password: String,
    /// MyGLS client number for the account.
    pub client_number: i64,
    /// Country whose MyGLS endpoint the account belongs to.
    pub country: CountryCode,
    /// Label printer layout.
    pub printer_type: String,
    /// Webshop engine identifier reported to the carrier.
    pub webshop_engine: String,
}

/// Configuration as it appears in files or the host's plugin options,
/// before defaults are applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawGlsConfig {
    pub username: String,
    pub password: String,
    pub client_number: i64,
    pub country: CountryCode,
    #[serde(default)]
    pub printer_type: Option<String>,
    #[serde(default)]
    pub webshop_engine: Option<String>,
}

impl RawGlsConfig {
    /// Apply defaults once, producing the immutable runtime record.
    pub fn resolve(self) -> GlsConfig {
        GlsConfig {
            username: self.username,
            password: self.password,
            client_number: self.client_number,
            country: self.country,
            printer_type: self.printer_type.unwrap_or_else(|| DEFAULT_PRINTER_TYPE.to_string()),
            webshop_engine: self
                .webshop_engine
                .unwrap_or_else(|| DEFAULT_WEBSHOP_ENGINE.to_string()),
        }
    }
}
