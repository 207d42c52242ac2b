use super::require_non_empty;
use crate::error::{EslError, Result};
use crate::model::{Document, DocumentType, Field, Signature};
use std::path::PathBuf;

#[derive(Debug, Clone)]
enum Source {
    Bytes(Vec<u8>),
    File(PathBuf),
}

/// Builds a [`Document`] with its signatures and fields.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    name: String,
    description: Option<String>,
    file_name: Option<String>,
    source: Option<Source>,
    document_type: Option<DocumentType>,
    index: Option<i32>,
    extract: bool,
    signatures: Vec<Signature>,
    fields: Vec<Field>,
}

impl DocumentBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            file_name: None,
            source: None,
            document_type: None,
            index: None,
            extract: false,
            signatures: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Use in-memory content.
    pub fn from_bytes(mut self, content: Vec<u8>, document_type: DocumentType) -> Self {
        self.source = Some(Source::Bytes(content));
        self.document_type = Some(document_type);
        self
    }

    /// Read content from a file when the document is built. The type is taken
    /// from the file extension unless set with [`Self::with_type`].
    pub fn from_file(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if self.file_name.is_none() {
            self.file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_string);
        }
        self.source = Some(Source::File(path));
        self
    }

    pub fn with_type(mut self, document_type: DocumentType) -> Self {
        self.document_type = Some(document_type);
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Position of the document within the package.
    pub fn at_index(mut self, index: i32) -> Self {
        self.index = Some(index);
        self
    }

    /// Turn the PDF's own form fields into package fields.
    pub fn enable_extraction(mut self) -> Self {
        self.extract = true;
        self
    }

    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signatures.push(signature);
        self
    }

    pub fn with_injected_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn build(self) -> Result<Document> {
        require_non_empty("document name", &self.name)?;

        let content = match self.source {
            Some(Source::Bytes(bytes)) => Some(bytes),
            Some(Source::File(path)) => Some(std::fs::read(&path)?),
            None => None,
        };

        let document_type = match self.document_type {
            Some(t) => t,
            None => match self.file_name.as_deref() {
                Some(file_name) => DocumentType::from_file_name(file_name).ok_or_else(|| {
                    EslError::validation(
                        "document type",
                        format!("cannot infer a document type from {file_name}"),
                    )
                })?,
                None => DocumentType::Pdf,
            },
        };

        Ok(Document {
            id: None,
            name: self.name,
            description: self.description,
            file_name: self.file_name,
            content,
            document_type,
            index: self.index,
            extract: self.extract,
            signatures: self.signatures,
            fields: self.fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::SignatureBuilder;

    #[test]
    fn test_build_from_bytes() {
        let document = DocumentBuilder::new("contract")
            .from_bytes(b"%PDF-1.4".to_vec(), DocumentType::Pdf)
            .with_signature(
                SignatureBuilder::signature_for("a@example.com")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        assert_eq!(document.name(), "contract");
        assert_eq!(document.file_name(), "contract.pdf");
        assert_eq!(document.content(), Some(&b"%PDF-1.4"[..]));
        assert_eq!(document.signatures().len(), 1);
    }

    #[test]
    fn test_build_from_file() {
        let path = std::env::temp_dir().join(format!("esl-doc-{}.docx", std::process::id()));
        std::fs::write(&path, b"docx bytes").unwrap();

        let document = DocumentBuilder::new("report").from_file(&path).build().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(document.document_type(), DocumentType::Docx);
        assert_eq!(document.content(), Some(&b"docx bytes"[..]));
        assert!(document.file_name().ends_with(".docx"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = DocumentBuilder::new("missing")
            .from_file("/definitely/not/here.pdf")
            .build()
            .unwrap_err();
        assert!(matches!(err, EslError::Io(_)));
    }

    #[test]
    fn test_unknown_extension_fails() {
        let err = DocumentBuilder::new("archive")
            .with_file_name("archive.zip")
            .build()
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_empty_name_fails() {
        assert!(DocumentBuilder::new("").build().unwrap_err().is_validation());
    }
}
