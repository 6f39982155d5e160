//! Editing vocabulary for product drafts: which form, which field, and the
//! local file staged for upload.

use super::ProductId;
use std::fmt;

/// What a form submission does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// POST a new product.
    Create,
    /// PUT over an existing product.
    Edit(ProductId),
}

/// Selects one of the two independent form instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Add,
    Edit,
}

/// Editable draft fields addressed by `SetField`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Code,
    Name,
    Unit,
    DefaultExpiration,
    CategoryId,
    Description,
    TaxId,
}

/// A local file chosen for upload but not yet sent.
#[derive(Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub file_name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl StagedFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: None,
            bytes,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

impl fmt::Debug for StagedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StagedFile")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_file_contents() {
        let file = StagedFile::new("a.png", vec![7; 2048]).with_mime_type("image/png");
        let printed = format!("{file:?}");
        assert!(printed.contains("len: 2048"));
        assert!(printed.contains("image/png"));
        assert!(!printed.contains("7, 7"));
    }
}
