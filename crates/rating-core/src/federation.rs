//! Rating federations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a federation name is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown federation '{0}': expected uscf, fide or ecf")]
pub struct FederationParseError(pub String);

/// The rating bodies whose formulas are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Federation {
    /// US Chess Federation.
    Uscf,
    /// Fédération Internationale des Échecs.
    Fide,
    /// English Chess Federation.
    Ecf,
}

impl Federation {
    /// All supported federations.
    pub const ALL: [Federation; 3] = [Federation::Uscf, Federation::Fide, Federation::Ecf];

    /// Returns the short lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Federation::Uscf => "uscf",
            Federation::Fide => "fide",
            Federation::Ecf => "ecf",
        }
    }

    /// Returns the federation's full name.
    pub const fn full_name(self) -> &'static str {
        match self {
            Federation::Uscf => "US Chess",
            Federation::Fide => "FIDE",
            Federation::Ecf => "English Chess Federation",
        }
    }
}

impl FromStr for Federation {
    type Err = FederationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uscf" | "us" | "uschess" => Ok(Federation::Uscf),
            "fide" => Ok(Federation::Fide),
            "ecf" => Ok(Federation::Ecf),
            _ => Err(FederationParseError(s.to_string())),
        }
    }
}

impl fmt::Display for Federation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}
