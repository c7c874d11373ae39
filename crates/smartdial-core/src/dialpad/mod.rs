// crates/smartdial-core/src/dialpad/mod.rs

//! # Dialpad Maps
//!
//! Concrete [`DialpadMap`](crate::traits::DialpadMap) implementations.
//! The Latin map is the default everywhere; the others are selected by the
//! caller, typically from the device language.

mod composite;
mod latin;
mod russian;
mod transliterate;

pub use composite::CompositeDialpadMap;
pub use latin::LatinDialpadMap;
pub use russian::RussianDialpadMap;
pub use transliterate::TransliteratingDialpadMap;
