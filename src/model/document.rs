use super::{Field, Signature};

/// File format of a document's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    Pdf,
    Word,
    Docx,
    Odt,
    Rtf,
    Text,
}

impl DocumentType {
    /// File extension the service uses to detect the format.
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentType::Pdf => "pdf",
            DocumentType::Word => "doc",
            DocumentType::Docx => "docx",
            DocumentType::Odt => "odt",
            DocumentType::Rtf => "rtf",
            DocumentType::Text => "txt",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            DocumentType::Pdf => "application/pdf",
            DocumentType::Word => "application/msword",
            DocumentType::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            DocumentType::Odt => "application/vnd.oasis.opendocument.text",
            DocumentType::Rtf => "application/rtf",
            DocumentType::Text => "text/plain",
        }
    }

    /// Guess the type from a file name's extension.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentType::Pdf),
            "doc" => Some(DocumentType::Word),
            "docx" => Some(DocumentType::Docx),
            "odt" => Some(DocumentType::Odt),
            "rtf" => Some(DocumentType::Rtf),
            "txt" => Some(DocumentType::Text),
            _ => None,
        }
    }
}

/// A document to be signed, with the signatures and fields placed on it.
///
/// `content` is only present on documents built locally; documents of a
/// fetched package carry metadata only.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub(crate) id: Option<String>,
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) file_name: Option<String>,
    pub(crate) content: Option<Vec<u8>>,
    pub(crate) document_type: DocumentType,
    pub(crate) index: Option<i32>,
    pub(crate) extract: bool,
    pub(crate) signatures: Vec<Signature>,
    pub(crate) fields: Vec<Field>,
}

impl Document {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// File name sent with the upload; defaults to the document name plus
    /// the type's extension.
    pub fn file_name(&self) -> String {
        self.file_name
            .clone()
            .unwrap_or_else(|| format!("{}.{}", self.name, self.document_type.extension()))
    }

    pub fn content(&self) -> Option<&[u8]> {
        self.content.as_deref()
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    pub fn index(&self) -> Option<i32> {
        self.index
    }

    /// Whether fields are extracted from the PDF's own form fields.
    pub fn extract(&self) -> bool {
        self.extract
    }

    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    /// Fields not bound to any signature.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}
