//! Export destinations.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use invtrack_inventory::{Inventory, export};

#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing stocked; no destination was touched.
    #[error("inventory is empty; nothing to export")]
    EmptyInventory,

    /// Writing failed; the message is the underlying IO error.
    #[error("{source}")]
    Io {
        destination: String,
        #[source]
        source: io::Error,
    },
}

/// Somewhere an export can be written to.
pub trait ExportSink {
    /// Human-readable destination, used in messages.
    fn destination(&self) -> String;

    /// Replace whatever the destination held with `text`.
    fn write_export(&mut self, text: &str) -> Result<(), ExportError>;
}

impl<S: ExportSink + ?Sized> ExportSink for &mut S {
    fn destination(&self) -> String {
        (**self).destination()
    }

    fn write_export(&mut self, text: &str) -> Result<(), ExportError> {
        (**self).write_export(text)
    }
}

/// Render `inventory` and hand it to `sink`.
///
/// An empty inventory fails before the sink is touched.
pub fn export_inventory<S: ExportSink + ?Sized>(
    inventory: &Inventory,
    sink: &mut S,
) -> Result<(), ExportError> {
    if inventory.is_empty() {
        return Err(ExportError::EmptyInventory);
    }
    let entries: Vec<_> = inventory.entries().collect();
    let text = export::render_entries(&entries);
    sink.write_export(&text)?;
    tracing::info!(
        destination = %sink.destination(),
        items = inventory.len(),
        "inventory exported"
    );
    Ok(())
}

/// Writes exports to a file, truncating any previous content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileExportSink {
    path: PathBuf,
}

impl FileExportSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExportSink for FileExportSink {
    fn destination(&self) -> String {
        self.path.display().to_string()
    }

    fn write_export(&mut self, text: &str) -> Result<(), ExportError> {
        fs::write(&self.path, text).map_err(|source| {
            tracing::error!(path = %self.path.display(), error = %source, "export write failed");
            ExportError::Io {
                destination: self.destination(),
                source,
            }
        })
    }
}

/// In-memory sink for tests/dev. Keeps only the latest export.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemorySink {
    contents: Option<String>,
    writes: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ExportSink for MemorySink {
    fn destination(&self) -> String {
        "memory".to_string()
    }

    fn write_export(&mut self, text: &str) -> Result<(), ExportError> {
        self.contents = Some(text.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invtrack_core::{ItemName, Quantity};

    fn stocked(pairs: &[(&str, i64)]) -> Inventory {
        let mut inv = Inventory::new();
        for (n, q) in pairs {
            inv.add(ItemName::new(*n).unwrap(), Quantity::new(*q)).unwrap();
        }
        inv
    }

    #[test]
    fn empty_inventory_never_reaches_the_sink() {
        let mut sink = MemorySink::new();
        let err = export_inventory(&Inventory::new(), &mut sink).unwrap_err();
        assert!(matches!(err, ExportError::EmptyInventory));
        assert_eq!(sink.writes(), 0);
    }

    #[test]
    fn file_sink_overwrites_existing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("inventory.txt");
        fs::write(&path, "stale content that is much longer than the export\n").unwrap();

        let mut sink = FileExportSink::new(&path);
        export_inventory(&stocked(&[("bolt", 3)]), &mut sink).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), " CURRENT INVENTORY:\n\nbolt: 3\n");
    }

    #[test]
    fn file_sink_surfaces_io_message() {
        let dir = tempfile::TempDir::new().unwrap();
        // A directory cannot be opened for writing.
        let mut sink = FileExportSink::new(dir.path());

        let err = export_inventory(&stocked(&[("bolt", 3)]), &mut sink).unwrap_err();
        match &err {
            ExportError::Io { destination, source } => {
                assert_eq!(destination, &dir.path().display().to_string());
                assert_eq!(err.to_string(), source.to_string());
            }
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
