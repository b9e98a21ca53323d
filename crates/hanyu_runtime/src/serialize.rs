//! Tree serialization and deserialization using `MessagePack`.
//!
//! A [`Document`] pairs a tree with the node to realise. The lexicon is
//! not stored; a loaded tree gets the standard lexicon.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use hanyu_foundation::{Error, ErrorContext, ErrorKind, NodeId, Result};
use hanyu_tree::Tree;
use serde::{Deserialize, Serialize};

/// A tree and its root.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Document {
    /// The node arena.
    pub tree: Tree,
    /// The node to realise.
    pub root: NodeId,
}

impl Document {
    /// Creates a document.
    #[must_use]
    pub fn new(tree: Tree, root: NodeId) -> Self {
        Self { tree, root }
    }

    /// Checks that the root belongs to the tree and that the tree under it
    /// is finite.
    ///
    /// # Errors
    ///
    /// Returns `UnknownNode` for a missing root or child, and
    /// `InvalidArgument` if a node reaches itself.
    pub fn validate(&self) -> Result<()> {
        self.tree.validate(self.root)
    }
}

/// Serializes a document to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(document: &Document) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(document)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Deserializes a document from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails or the root is not in the
/// tree.
pub fn from_bytes(bytes: &[u8]) -> Result<Document> {
    let document: Document = rmp_serde::from_slice(bytes)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))?;
    document.validate()?;
    Ok(document)
}

/// Saves a document to a file using `MessagePack` format.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(document: &Document, path: P) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to create file '{}': {e}",
            path.as_ref().display()
        )))
    })?;

    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(document)?;

    writer.write_all(&bytes).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to write to file '{}': {e}",
            path.as_ref().display()
        )))
    })?;

    writer.flush().map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to flush file '{}': {e}",
            path.as_ref().display()
        )))
    })?;

    Ok(())
}

/// Loads a document from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let file = File::open(path.as_ref()).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to open file '{}': {e}",
            path.as_ref().display()
        )))
    })?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();

    reader.read_to_end(&mut bytes).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to read file '{}': {e}",
            path.as_ref().display()
        )))
    })?;

    from_bytes(&bytes).map_err(|e| {
        e.with_context(ErrorContext::new().with_source(path.as_ref().display().to_string()))
    })
}
