//! Routing provider identity

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identity of a routing data provider
///
/// The serialized representation uses the canonical names `"Google"` and
/// `"Openstreetmap"` — the same strings stored in cache records, so the
/// enum round-trips against records written by earlier versions of the
/// service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderId {
    /// Commercial mapping provider (Google Directions API)
    Google,
    /// Community routing provider (OSRM routing + Nominatim geocoding)
    Openstreetmap,
}

impl ProviderId {
    /// The statically paired alternate queried when this provider errors
    ///
    /// The pairing is symmetric: Google falls back to Openstreetmap and
    /// vice versa.
    #[must_use]
    pub const fn fallback(self) -> Self {
        match self {
            Self::Google => Self::Openstreetmap,
            Self::Openstreetmap => Self::Google,
        }
    }

    /// Canonical provider name as stored in cache records
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Openstreetmap => "Openstreetmap",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Google" => Ok(Self::Google),
            "Openstreetmap" => Ok(Self::Openstreetmap),
            _ => Err(format!("Unknown provider: {s}")),
        }
    }
}
