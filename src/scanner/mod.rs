//! ATS keyword matching and scoring

pub mod engine;
pub mod findings;
pub mod lexicon;

pub use engine::AtsScanner;
pub use findings::{AtsFindings, MatchDetails};
pub use lexicon::Lexicon;
