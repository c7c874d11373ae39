//! smartdial-cli
//! =============
//!
//! Command-line interface for the `smartdial-core` dialpad matcher.
//!
//! This crate primarily provides a binary (`smartdial-cli`). The library
//! target only exists so docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! smartdial-cli tokens "John Smith"
//! smartdial-cli prefixes "Albert Ben Ed Foster"
//! smartdial-cli --country US number "+1 (555) 123-4567"
//! smartdial-cli match 57 --name "John Smith"
//! smartdial-cli --json search 5646 --contacts contacts.json.gz
//! ```
//!
//! Set `RUST_LOG=debug` to see what the core is doing.
#![cfg_attr(docsrs, feature(doc_cfg))]
