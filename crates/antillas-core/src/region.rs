//! Supported territories.
//!
//! `Region` is the closed set of territories the marketplace serves. The
//! lowercase identifier (`"cayman"`, `"jamaica"`) is the persisted form and the
//! key into theme and catalog tables.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::error::{AntillasError, Result};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Region {
    #[default]
    Cayman,
    Jamaica,
}

impl Region {
    /// Parses a region identifier, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        Region::iter()
            .find(|region| region.id().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| AntillasError::invalid_region(value))
    }

    /// All supported regions in display order.
    pub fn all() -> Vec<Region> {
        Region::iter().collect()
    }

    /// Persisted identifier.
    pub fn id(&self) -> &'static str {
        (*self).into()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Region::Cayman => "Cayman Islands",
            Region::Jamaica => "Jamaica",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Region::Cayman => "🇰🇾",
            Region::Jamaica => "🇯🇲",
        }
    }

    pub fn currency_symbol(&self) -> &'static str {
        match self {
            Region::Cayman => "CI$",
            Region::Jamaica => "J$",
        }
    }

    /// Cities served in this region. The first entry is the primary city.
    pub fn cities(&self) -> &'static [&'static str] {
        match self {
            Region::Cayman => &["George Town", "West Bay", "Bodden Town"],
            Region::Jamaica => &["Kingston", "Montego Bay", "Ocho Rios"],
        }
    }

    pub fn primary_city(&self) -> &'static str {
        self.cities()[0]
    }

    /// Formats an amount in the region's currency, e.g. `CI$120/hr`.
    pub fn price(&self, amount: &str) -> String {
        format!("{}{}", self.currency_symbol(), amount)
    }
}

impl FromStr for Region {
    type Err = AntillasError;

    fn from_str(s: &str) -> Result<Self> {
        Region::parse(s)
    }
}
