//! Indic Text - Indian-English text formatting
//!
//! This crate provides:
//! - Amounts in words using the Indian numbering system (Lakh, Crore)
//! - Money formatting with thousands separators
//! - Display normalization for Indian postal addresses
//!
//! # Example
//!
//! ```
//! use indic_text::{rupees_in_words, format_money, normalize_display, SpacingMode};
//!
//! let words = rupees_in_words(263_928);
//! assert_eq!(words, "Two Lakh Sixty Three Thousand Nine Hundred Twenty Eight");
//!
//! let amount = format_money(263927.69);
//! assert_eq!(amount, "263,927.69");
//!
//! let line = normalize_display("CHENNAI - 600018", SpacingMode::Plain);
//! assert_eq!(line, "CHENNAI - 600 018");
//! ```

mod money;
mod normalize;
mod words;

pub use money::format_money;
pub use normalize::{normalize_display, SpacingMode};
pub use words::rupees_in_words;
