//! The rendered header together with the names derived from its identifier.

use crate::render::{render_header, HEADER_EXTENSION, SIZE_SUFFIX};
use alloc::format;
use alloc::string::String;

/// A rendered header ready to be written to disk.
///
/// The byte count declared by the header always matches [`EncodedArtifact::byte_len`],
/// as both are produced from the same input slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedArtifact {
    identifier: String,
    text: String,
    byte_len: usize,
}

impl EncodedArtifact {
    /// Renders `data` into a header whose array is named `identifier`.
    pub fn new(identifier: impl Into<String>, data: &[u8]) -> Self {
        let identifier = identifier.into();
        let text = render_header(&identifier, data);
        Self {
            identifier,
            text,
            byte_len: data.len(),
        }
    }

    /// Name of the array, also the stem of the output file.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Full text of the header.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of bytes embedded in the array.
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Name of the generated size constant, e.g. `iconSize`.
    pub fn size_constant_name(&self) -> String {
        format!("{}{SIZE_SUFFIX}", self.identifier)
    }

    /// Name of the file the header should be written to, e.g. `icon.h`.
    pub fn output_file_name(&self) -> String {
        format!("{}.{HEADER_EXTENSION}", self.identifier)
    }

    /// Consumes the artifact, returning the header text.
    pub fn into_text(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_header;
    use crate::test_prelude::*;

    #[test]
    fn derives_names_from_identifier() {
        let artifact = EncodedArtifact::new("icon", &PNG_SIGNATURE[..4]);
        assert_eq!(artifact.identifier(), "icon");
        assert_eq!(artifact.size_constant_name(), "iconSize");
        assert_eq!(artifact.output_file_name(), "icon.h");
        assert_eq!(artifact.byte_len(), 4);
    }

    #[rstest]
    #[case(0)]
    #[case(8)]
    #[case(12)]
    #[case(1337)]
    fn declared_bytes_match_input(#[case] len: usize) {
        let data = create_test_pattern(len);
        let artifact = EncodedArtifact::new("blob", &data);

        let parsed = parse_header(artifact.text()).unwrap();
        assert_eq!(parsed.bytes.len(), artifact.byte_len());
        assert_eq!(parsed.bytes, data);
    }

    #[test]
    fn into_text_returns_rendered_header() {
        let artifact = EncodedArtifact::new("icon", &PNG_SIGNATURE);
        let expected = render_header("icon", &PNG_SIGNATURE);
        assert_eq!(artifact.into_text(), expected);
    }
}
