//! # Sentence Encoder
//!
//! ONNX MiniLM sentence-transformer wrapper producing one fixed-length
//! embedding per document.

pub mod encoder;

pub use encoder::Encoder;
