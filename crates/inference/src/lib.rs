//! Tokenizer and inference simulator for Sitewright.
//!
//! Tokens are Unicode code points: lossless for any Rust string, including
//! Arabic script. The simulator stands in for a local compute stage. It
//! waits a fixed latency on an injectable [`Clock`](sitewright_core::Clock)
//! and returns a fixed-shape report.

pub mod clock;
pub mod simulator;
pub mod tokenizer;

pub use clock::TokioClock;
pub use simulator::InferenceSimulator;
pub use tokenizer::{detokenize, tokenize, try_detokenize};
