//! Strictly parsed CPF and CNPJ values.
//!
//! Unlike [`crate::format`] and the validators, these types refuse input
//! that is not a complete, checksum-valid document.

use crate::checksum::{validate_cnpj, validate_cpf};
use crate::define_document;
use crate::mask::{mask_cnpj, mask_cpf, CNPJ_DIGITS, CPF_DIGITS};
use crate::{normalize, DocumentError};

define_document!(Cpf, "CPF", 11, validate_cpf, mask_cpf);
define_document!(Cnpj, "CNPJ", 14, validate_cnpj, mask_cnpj);

/// Either kind of document, chosen by digit count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(tag = "kind", content = "digits", rename_all = "lowercase")]
pub enum Document {
    Cpf(Cpf),
    Cnpj(Cnpj),
}

impl Document {
    /// Parses an 11-digit CPF or a 14-digit CNPJ.
    pub fn parse(s: &str) -> Result<Self, DocumentError> {
        match normalize(s).len() {
            0 => Err(DocumentError::Empty),
            CPF_DIGITS => Cpf::parse(s).map(Self::Cpf),
            CNPJ_DIGITS => Cnpj::parse(s).map(Self::Cnpj),
            actual => Err(DocumentError::InvalidLength {
                kind: "CPF/CNPJ",
                expected: "11 or 14",
                actual,
            }),
        }
    }

    /// Returns the document kind name.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Cpf(_) => Cpf::KIND,
            Self::Cnpj(_) => Cnpj::KIND,
        }
    }

    /// Returns the raw digits.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cpf(cpf) => cpf.as_str(),
            Self::Cnpj(cnpj) => cnpj.as_str(),
        }
    }

    /// Returns the masked display form.
    #[must_use]
    pub fn masked(&self) -> String {
        match self {
            Self::Cpf(cpf) => cpf.masked(),
            Self::Cnpj(cnpj) => cnpj.masked(),
        }
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cpf(cpf) => std::fmt::Display::fmt(cpf, f),
            Self::Cnpj(cnpj) => std::fmt::Display::fmt(cnpj, f),
        }
    }
}

impl std::str::FromStr for Document {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Cpf> for Document {
    fn from(cpf: Cpf) -> Self {
        Self::Cpf(cpf)
    }
}

impl From<Cnpj> for Document {
    fn from(cnpj: Cnpj) -> Self {
        Self::Cnpj(cnpj)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpf_parse_masked() {
        let cpf: Cpf = "529.982.247-25".parse().unwrap();
        assert_eq!(cpf.as_str(), "52998224725");
        assert_eq!(cpf.to_string(), "529.982.247-25");
    }

    #[test]
    fn test_cnpj_parse_raw() {
        let cnpj = Cnpj::parse("11444777000161").unwrap();
        assert_eq!(cnpj.masked(), "11.444.777/0001-61");
        assert_eq!(cnpj.into_inner(), "11444777000161");
    }

    #[test]
    fn test_cpf_empty() {
        let result: Result<Cpf, _> = "".parse();
        assert!(result.unwrap_err().is_empty());
        assert!(Cpf::parse("./-").unwrap_err().is_empty());
    }

    #[test]
    fn test_cpf_wrong_length() {
        let err = Cpf::parse("11444777000161").unwrap_err();
        assert!(err.is_length_error());
        assert_eq!(
            err,
            DocumentError::InvalidLength {
                kind: "CPF",
                expected: "11",
                actual: 14
            }
        );
    }

    #[test]
    fn test_cpf_repeated_digits() {
        assert_eq!(
            Cpf::parse("111.111.111-11").unwrap_err(),
            DocumentError::RepeatedDigits { kind: "CPF" }
        );
    }

    #[test]
    fn test_cnpj_bad_check_digits() {
        let err = Cnpj::parse("11.444.777/0001-62").unwrap_err();
        assert!(err.is_checksum_error());
        assert_eq!(err, DocumentError::InvalidCheckDigits { kind: "CNPJ" });
    }

    #[test]
    fn test_document_dispatch() {
        let doc = Document::parse("529.982.247-25").unwrap();
        assert_eq!(doc.kind(), "CPF");
        assert!(matches!(doc, Document::Cpf(_)));

        let doc: Document = "11.444.777/0001-61".parse().unwrap();
        assert_eq!(doc.kind(), "CNPJ");
        assert_eq!(doc.as_str(), "11444777000161");
        assert_eq!(doc.to_string(), "11.444.777/0001-61");
    }

    #[test]
    fn test_document_invalid_length() {
        let err = Document::parse("123456789012").unwrap_err();
        assert!(err.is_length_error());
        assert!(Document::parse("").unwrap_err().is_empty());
    }

    #[test]
    fn test_cpf_json_roundtrip() {
        let cpf = Cpf::parse("52998224725").unwrap();
        let json = serde_json::to_string(&cpf).unwrap();
        assert_eq!(json, "\"52998224725\"");
        let parsed: Cpf = serde_json::from_str(&json).unwrap();
        assert_eq!(cpf, parsed);
    }

    #[test]
    fn test_cnpj_deserialize_accepts_mask_and_rejects_invalid() {
        let parsed: Cnpj = serde_json::from_str("\"11.444.777/0001-61\"").unwrap();
        assert_eq!(parsed.as_str(), "11444777000161");
        assert!(serde_json::from_str::<Cnpj>("\"11.444.777/0001-60\"").is_err());
    }

    #[test]
    fn test_document_serialize_tagged() {
        let doc: Document = Cnpj::parse("11444777000161").unwrap().into();
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "cnpj", "digits": "11444777000161" })
        );
    }
}
