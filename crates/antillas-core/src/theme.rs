//! Region color palettes.
//!
//! Cayman palettes take the blue/red of the Cayman flag, Jamaica palettes the
//! green/gold of the Jamaican flag.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

use crate::region::Region;

/// Light or dark appearance.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, AsRefStr, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// A full color palette. Values are CSS hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub gradient: [&'static str; 2],
}

const CAYMAN_LIGHT: Palette = Palette {
    primary: "#0066CC",
    secondary: "#FF4444",
    accent: "#00AAFF",
    background: "#F8FCFF",
    surface: "#FFFFFF",
    text: "#1A365D",
    text_secondary: "#4A5568",
    border: "#E2E8F0",
    success: "#38B2AC",
    warning: "#ED8936",
    error: "#E53E3E",
    gradient: ["#0066CC", "#00AAFF"],
};

const CAYMAN_DARK: Palette = Palette {
    primary: "#4299E1",
    secondary: "#FC8181",
    accent: "#63B3ED",
    background: "#0A1A2A",
    surface: "#1A2B3D",
    text: "#F7FAFC",
    text_secondary: "#CBD5E0",
    border: "#2D3748",
    success: "#4FD1C7",
    warning: "#F6AD55",
    error: "#FEB2B2",
    gradient: ["#4299E1", "#63B3ED"],
};

const JAMAICA_LIGHT: Palette = Palette {
    primary: "#00AA44",
    secondary: "#FFD700",
    accent: "#228B22",
    background: "#F0FFF4",
    surface: "#FFFFFF",
    text: "#1A202C",
    text_secondary: "#4A5568",
    border: "#E2E8F0",
    success: "#38B2AC",
    warning: "#ED8936",
    error: "#E53E3E",
    gradient: ["#00AA44", "#228B22"],
};

const JAMAICA_DARK: Palette = Palette {
    primary: "#48BB78",
    secondary: "#F6E05E",
    accent: "#68D391",
    background: "#0A1A0F",
    surface: "#1A2B1F",
    text: "#F7FAFC",
    text_secondary: "#CBD5E0",
    border: "#2D3748",
    success: "#4FD1C7",
    warning: "#F6AD55",
    error: "#FEB2B2",
    gradient: ["#48BB78", "#68D391"],
};

impl Palette {
    pub fn for_region(region: Region, scheme: ColorScheme) -> &'static Palette {
        match (region, scheme) {
            (Region::Cayman, ColorScheme::Light) => &CAYMAN_LIGHT,
            (Region::Cayman, ColorScheme::Dark) => &CAYMAN_DARK,
            (Region::Jamaica, ColorScheme::Light) => &JAMAICA_LIGHT,
            (Region::Jamaica, ColorScheme::Dark) => &JAMAICA_DARK,
        }
    }

    /// Parses `primary` into an RGB triple for terminal rendering.
    pub fn primary_rgb(&self) -> Option<(u8, u8, u8)> {
        hex_to_rgb(self.primary)
    }
}

fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
