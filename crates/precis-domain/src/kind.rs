//! Document families supported by the extraction layer

/// Supported document families, keyed by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Plain text (`.txt`, `.md`)
    Plain,

    /// PDF (`.pdf`)
    Pdf,

    /// Word documents (`.docx`, `.doc`)
    Word,

    /// PowerPoint presentations (`.pptx`)
    Slides,
}

impl DocumentKind {
    /// Resolve a document kind from a file extension (without the dot)
    ///
    /// Matching is case-insensitive. Returns `None` for anything the
    /// extraction layer does not handle.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "txt" | "md" => Some(DocumentKind::Plain),
            "pdf" => Some(DocumentKind::Pdf),
            "docx" | "doc" => Some(DocumentKind::Word),
            "pptx" => Some(DocumentKind::Slides),
            _ => None,
        }
    }

    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Plain => "plain",
            DocumentKind::Pdf => "pdf",
            DocumentKind::Word => "word",
            DocumentKind::Slides => "slides",
        }
    }

    /// All extensions the extraction layer accepts
    pub fn supported_extensions() -> &'static [&'static str] {
        &["txt", "md", "pdf", "docx", "doc", "pptx"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_dispatch() {
        assert_eq!(DocumentKind::from_extension("txt"), Some(DocumentKind::Plain));
        assert_eq!(DocumentKind::from_extension("md"), Some(DocumentKind::Plain));
        assert_eq!(DocumentKind::from_extension("pdf"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_extension("docx"), Some(DocumentKind::Word));
        assert_eq!(DocumentKind::from_extension("doc"), Some(DocumentKind::Word));
        assert_eq!(DocumentKind::from_extension("pptx"), Some(DocumentKind::Slides));
    }

    #[test]
    fn test_extension_case_insensitive() {
        assert_eq!(DocumentKind::from_extension("PDF"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_extension("Docx"), Some(DocumentKind::Word));
    }

    #[test]
    fn test_unsupported_extension() {
        assert_eq!(DocumentKind::from_extension("xlsx"), None);
        assert_eq!(DocumentKind::from_extension(""), None);
    }
}
