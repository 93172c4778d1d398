//! JSON graph documents consumed by the CLI.

pub mod document;

pub use document::GraphDocument;
