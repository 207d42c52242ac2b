/// How a signature is captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureStyle {
    FullName,
    Initials,
    HandDrawn,
}

impl SignatureStyle {
    pub(crate) fn subtype(&self) -> &'static str {
        match self {
            SignatureStyle::FullName => "FULLNAME",
            SignatureStyle::Initials => "INITIALS",
            SignatureStyle::HandDrawn => "CAPTURE",
        }
    }

    pub(crate) fn from_subtype(subtype: &str) -> Self {
        match subtype {
            "INITIALS" => SignatureStyle::Initials,
            "CAPTURE" => SignatureStyle::HandDrawn,
            _ => SignatureStyle::FullName,
        }
    }
}

/// A signature box on a document, bound to a signer by email.
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    pub(crate) id: Option<String>,
    pub(crate) signer_email: String,
    pub(crate) style: SignatureStyle,
    pub(crate) page: u32,
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) fields: Vec<Field>,
}

impl Signature {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn signer_email(&self) -> &str {
        &self.signer_email
    }

    pub fn style(&self) -> SignatureStyle {
        self.style
    }

    /// Zero-based page index.
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Fields the signer fills in as part of this signature.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

/// Kind of a field. Bound styles are filled in by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldStyle {
    Label,
    TextField,
    TextArea,
    Checkbox,
    /// Date the signature was applied.
    SigningDate,
    SignerName,
    SignerTitle,
    SignerCompany,
    /// A subtype this SDK version does not model.
    Other(String),
}

const BINDING_SIGNED: &str = "{approval.signed}";
const BINDING_NAME: &str = "{signer.name}";
const BINDING_TITLE: &str = "{signer.title}";
const BINDING_COMPANY: &str = "{signer.company}";

impl FieldStyle {
    /// Wire `(subtype, binding)` pair.
    pub(crate) fn to_wire(&self) -> (String, Option<String>) {
        let (subtype, binding) = match self {
            FieldStyle::Label => ("LABEL", None),
            FieldStyle::TextField => ("TEXTFIELD", None),
            FieldStyle::TextArea => ("TEXTAREA", None),
            FieldStyle::Checkbox => ("CHECKBOX", None),
            FieldStyle::SigningDate => ("LABEL", Some(BINDING_SIGNED)),
            FieldStyle::SignerName => ("LABEL", Some(BINDING_NAME)),
            FieldStyle::SignerTitle => ("LABEL", Some(BINDING_TITLE)),
            FieldStyle::SignerCompany => ("LABEL", Some(BINDING_COMPANY)),
            FieldStyle::Other(s) => (s.as_str(), None),
        };
        (subtype.to_string(), binding.map(str::to_string))
    }

    pub(crate) fn from_wire(subtype: &str, binding: Option<&str>) -> Self {
        match binding {
            Some(BINDING_SIGNED) => return FieldStyle::SigningDate,
            Some(BINDING_NAME) => return FieldStyle::SignerName,
            Some(BINDING_TITLE) => return FieldStyle::SignerTitle,
            Some(BINDING_COMPANY) => return FieldStyle::SignerCompany,
            _ => {}
        }
        match subtype {
            "LABEL" => FieldStyle::Label,
            "TEXTFIELD" => FieldStyle::TextField,
            "TEXTAREA" => FieldStyle::TextArea,
            "CHECKBOX" => FieldStyle::Checkbox,
            other => FieldStyle::Other(other.to_string()),
        }
    }
}

/// A positioned input or label on a document page.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub(crate) id: Option<String>,
    pub(crate) name: Option<String>,
    pub(crate) style: FieldStyle,
    pub(crate) page: u32,
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) value: Option<String>,
}

impl Field {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn style(&self) -> &FieldStyle {
        &self.style
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_styles_survive_wire_form() {
        for style in [
            FieldStyle::Label,
            FieldStyle::TextField,
            FieldStyle::TextArea,
            FieldStyle::Checkbox,
            FieldStyle::SigningDate,
            FieldStyle::SignerName,
            FieldStyle::SignerTitle,
            FieldStyle::SignerCompany,
            FieldStyle::Other("LIST".to_string()),
        ] {
            let (subtype, binding) = style.to_wire();
            assert_eq!(FieldStyle::from_wire(&subtype, binding.as_deref()), style);
        }
    }

    #[test]
    fn test_signature_subtypes() {
        assert_eq!(SignatureStyle::HandDrawn.subtype(), "CAPTURE");
        assert_eq!(SignatureStyle::from_subtype("INITIALS"), SignatureStyle::Initials);
        assert_eq!(SignatureStyle::from_subtype("MOBILE_CAPTURE"), SignatureStyle::FullName);
    }
}
