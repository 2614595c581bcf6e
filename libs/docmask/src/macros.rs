//! Macros for defining strictly parsed document types.

/// Macro to define a document newtype that only holds valid raw digits.
///
/// This generates a newtype wrapper around a `String` with:
/// - `KIND` and `DIGITS` constants
/// - `parse()` that normalizes, then checks length and check digits
/// - `as_str()` for the raw digits and `masked()` for the display form
/// - `Display` (masked) and `FromStr` implementations
/// - `Serialize` (raw digits) and `Deserialize` (strict parse)
///
/// # Example
///
/// ```ignore
/// define_document!(Cpf, "CPF", 11, validate_cpf, mask_cpf);
///
/// let cpf: Cpf = "529.982.247-25".parse()?;
/// assert_eq!(cpf.as_str(), "52998224725");
/// ```
#[macro_export]
macro_rules! define_document {
    ($name:ident, $kind:literal, $digits:literal, $validate:path, $mask:path) => {
        /// A validated document holding raw digits only.
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Human-readable name of this document kind.
            pub const KIND: &'static str = $kind;

            /// Number of digits in a complete document.
            pub const DIGITS: usize = $digits;

            /// Parses a document from raw or masked input.
            ///
            /// Any non-digit characters are ignored.
            pub fn parse(s: &str) -> Result<Self, $crate::DocumentError> {
                let digits = $crate::normalize(s);

                if digits.is_empty() {
                    return Err($crate::DocumentError::Empty);
                }

                if digits.len() != Self::DIGITS {
                    return Err($crate::DocumentError::InvalidLength {
                        kind: Self::KIND,
                        expected: stringify!($digits),
                        actual: digits.len(),
                    });
                }

                let first = digits.as_bytes()[0];
                if digits.bytes().all(|b| b == first) {
                    return Err($crate::DocumentError::RepeatedDigits { kind: Self::KIND });
                }

                if !$validate(&digits) {
                    return Err($crate::DocumentError::InvalidCheckDigits { kind: Self::KIND });
                }

                Ok(Self(digits))
            }

            /// Returns the raw digits.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the masked display form.
            #[must_use]
            pub fn masked(&self) -> String {
                $mask(&self.0)
            }

            /// Consumes the document, returning the raw digits.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.masked())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::DocumentError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}
