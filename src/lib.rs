//! # Docsort Library
//!
//! Semantic document organizer. Extracts text from scanned/text PDFs and
//! DOCX files, embeds it with a MiniLM sentence encoder, greedily clusters
//! the documents by cosine similarity, and copies the originals into
//! topical folders named after each cluster's dominant keyword.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod extract;
pub mod models;
pub mod processing;
pub mod runtime;
pub mod ui;
