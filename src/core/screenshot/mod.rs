//! Screenshot module.
//!
//! A screenshot is a path, a language tag and a device class. The class is
//! either asserted by the caller or computed from the image at construction;
//! validation is a separate query so callers can warn instead of failing.

mod entity;

pub use entity::Screenshot;
