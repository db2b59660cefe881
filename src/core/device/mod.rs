//! # Device Module
//!
//! The closed set of device size classes a store accepts screenshots for,
//! and the static lookups hanging off each class.
//!
//! Every lookup is an exhaustive `match`, so adding a class fails to compile
//! until its identifier, device code, display name and resolutions exist.

mod table;

pub use table::{canonical_entries, Resolution};

use crate::error::ParseDeviceClassError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target display category for a screenshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DeviceSizeClass {
    /// iPhone 6 Plus
    #[serde(rename = "iOS-5.5-in")]
    Iphone55,
    /// iPhone 6
    #[serde(rename = "iOS-4.7-in")]
    Iphone47,
    /// iPhone 5
    #[serde(rename = "iOS-4-in")]
    Iphone40,
    /// iPhone 4
    #[serde(rename = "iOS-3.5-in")]
    Iphone35,
    #[serde(rename = "iOS-iPad")]
    Ipad,
    #[serde(rename = "Mac")]
    Mac,
    #[serde(rename = "iOS-Apple-Watch")]
    AppleWatch,
}

impl DeviceSizeClass {
    /// All classes in classification order. The first class whose table
    /// entry matches an image wins.
    pub const ALL: [DeviceSizeClass; 7] = [
        DeviceSizeClass::Iphone55,
        DeviceSizeClass::Iphone47,
        DeviceSizeClass::Iphone40,
        DeviceSizeClass::Iphone35,
        DeviceSizeClass::Ipad,
        DeviceSizeClass::Mac,
        DeviceSizeClass::AppleWatch,
    ];

    /// Stable screen-size identifier (e.g. `iOS-4.7-in`)
    pub fn identifier(&self) -> &'static str {
        match self {
            DeviceSizeClass::Iphone55 => "iOS-5.5-in",
            DeviceSizeClass::Iphone47 => "iOS-4.7-in",
            DeviceSizeClass::Iphone40 => "iOS-4-in",
            DeviceSizeClass::Iphone35 => "iOS-3.5-in",
            DeviceSizeClass::Ipad => "iOS-iPad",
            DeviceSizeClass::Mac => "Mac",
            DeviceSizeClass::AppleWatch => "iOS-Apple-Watch",
        }
    }

    /// Wire identifier expected by the store submission API
    pub fn device_code(&self) -> &'static str {
        match self {
            DeviceSizeClass::Iphone55 => "iphone6Plus",
            DeviceSizeClass::Iphone47 => "iphone6",
            DeviceSizeClass::Iphone40 => "iphone4",
            DeviceSizeClass::Iphone35 => "iphone35",
            DeviceSizeClass::Ipad => "ipad",
            DeviceSizeClass::Mac => "mac",
            DeviceSizeClass::AppleWatch => "watch",
        }
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            DeviceSizeClass::Iphone55 => "iPhone 6 Plus",
            DeviceSizeClass::Iphone47 => "iPhone 6",
            DeviceSizeClass::Iphone40 => "iPhone 5",
            DeviceSizeClass::Iphone35 => "iPhone 4",
            DeviceSizeClass::Ipad => "iPad",
            DeviceSizeClass::Mac => "Mac",
            DeviceSizeClass::AppleWatch => "Watch",
        }
    }

    /// Canonical portrait resolutions, in declared order
    pub fn resolutions(&self) -> &'static [Resolution] {
        table::resolutions_for(*self)
    }
}

impl fmt::Display for DeviceSizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for DeviceSizeClass {
    type Err = ParseDeviceClassError;

    /// Accepts either the identifier or the device code, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        DeviceSizeClass::ALL
            .iter()
            .copied()
            .find(|class| {
                class.identifier().eq_ignore_ascii_case(input)
                    || class.device_code().eq_ignore_ascii_case(input)
            })
            .ok_or_else(|| ParseDeviceClassError {
                input: s.to_string(),
            })
    }
}

/// Wire identifier for a class
pub fn device_code(class: DeviceSizeClass) -> &'static str {
    class.device_code()
}

/// Human-readable label for a class
pub fn display_name(class: DeviceSizeClass) -> &'static str {
    class.display_name()
}
