//! Shared types used across storeart.
//! Includes `TargetDimensions`, the Apple display table (`AppleDisplay`) and
//! the Google Play feature graphic size.
use serde::{Deserialize, Serialize};

/// Exact output size in pixels.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct TargetDimensions {
    pub width: u32,
    pub height: u32,
}

impl TargetDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for TargetDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Google Play feature graphic size.
pub const FEATURE_GRAPHIC: TargetDimensions = TargetDimensions::new(1024, 500);

/// App Store portrait screenshot sizes, keyed by iPhone display diagonal.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
pub enum AppleDisplay {
    /// iPhone 14 Pro Max, 15 Pro Max
    #[default]
    Inch6_7,
    /// iPhone 11 Pro Max, XS Max
    Inch6_5,
}

impl AppleDisplay {
    pub const ALL: [AppleDisplay; 2] = [AppleDisplay::Inch6_7, AppleDisplay::Inch6_5];

    pub fn key(&self) -> &'static str {
        match self {
            AppleDisplay::Inch6_7 => "6.7",
            AppleDisplay::Inch6_5 => "6.5",
        }
    }

    pub fn dimensions(&self) -> TargetDimensions {
        match self {
            AppleDisplay::Inch6_7 => TargetDimensions::new(1284, 2778),
            AppleDisplay::Inch6_5 => TargetDimensions::new(1242, 2688),
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }

    /// Resolve an optional command-line key; unknown keys fall back to the default.
    pub fn resolve(key: Option<&str>) -> Self {
        key.and_then(Self::from_key).unwrap_or_default()
    }
}

impl std::fmt::Display for AppleDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "iPhone {}\"", self.key())
    }
}
