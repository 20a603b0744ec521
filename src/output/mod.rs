//! Text processing for display.
//!
//! The trivia provider HTML-encodes every question and answer; everything
//! shown to the user goes through [`EntityDecoder`] first.
//!
//! # Example
//!
//! ```
//! use trivia_quiz::output::EntityDecoder;
//!
//! let clean = EntityDecoder::decode("Jean-Luc Picard &amp; Co");
//! assert_eq!(clean, "Jean-Luc Picard & Co");
//! ```

mod entities;

pub use entities::EntityDecoder;
