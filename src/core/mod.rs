//! Core domain types

pub mod document;
pub mod embedding;
pub mod group;
pub mod similarity;
pub mod text;

pub use document::{Document, SourceKind};
pub use embedding::Embedding;
pub use group::{ClusterParams, Group, NamedGroup};
pub use similarity::SimilarityMatrix;
