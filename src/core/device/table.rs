//! Static resolution table.

use super::DeviceSizeClass;
use serde::{Deserialize, Serialize};

/// A canonical portrait resolution in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if `width x height` equals this entry in either orientation
    pub fn matches(&self, width: u32, height: u32) -> bool {
        (width == self.width && height == self.height)
            || (width == self.height && height == self.width)
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

const IPHONE_55: &[Resolution] = &[Resolution::new(1080, 1920), Resolution::new(1242, 2208)];

const IPHONE_47: &[Resolution] = &[Resolution::new(750, 1334)];

const IPHONE_40: &[Resolution] = &[
    Resolution::new(640, 1136),
    Resolution::new(640, 1096),
    Resolution::new(1136, 600), // landscape status bar is shorter
];

const IPHONE_35: &[Resolution] = &[
    Resolution::new(640, 960),
    Resolution::new(640, 920),
    Resolution::new(960, 600), // landscape status bar is shorter
];

const IPAD: &[Resolution] = &[
    Resolution::new(1024, 748),
    Resolution::new(1024, 768),
    Resolution::new(2048, 1496),
    Resolution::new(2048, 1536),
    Resolution::new(768, 1004),
    Resolution::new(768, 1024),
    Resolution::new(1536, 2008),
    Resolution::new(1536, 2048),
];

const MAC: &[Resolution] = &[
    Resolution::new(1280, 800),
    Resolution::new(1440, 900),
    Resolution::new(2880, 1800),
    Resolution::new(2560, 1600),
];

const APPLE_WATCH: &[Resolution] = &[Resolution::new(312, 390)];

pub(super) fn resolutions_for(class: DeviceSizeClass) -> &'static [Resolution] {
    match class {
        DeviceSizeClass::Iphone55 => IPHONE_55,
        DeviceSizeClass::Iphone47 => IPHONE_47,
        DeviceSizeClass::Iphone40 => IPHONE_40,
        DeviceSizeClass::Iphone35 => IPHONE_35,
        DeviceSizeClass::Ipad => IPAD,
        DeviceSizeClass::Mac => MAC,
        DeviceSizeClass::AppleWatch => APPLE_WATCH,
    }
}

/// Every (class, resolution) pair in lookup order
pub fn canonical_entries() -> impl Iterator<Item = (DeviceSizeClass, Resolution)> {
    DeviceSizeClass::ALL
        .into_iter()
        .flat_map(|class| class.resolutions().iter().map(move |r| (class, *r)))
}
