//! # Processing Pipeline
//!
//! Corpus loading, greedy clustering, and group naming.

pub mod cluster;
pub mod corpus;
pub mod name;

pub use cluster::cluster_documents;
pub use corpus::{load_corpus, CorpusReport};
pub use name::name_group;
