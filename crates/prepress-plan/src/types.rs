use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("no signature layout within policy bounds for {0} pages")]
    NoSuggestion(usize),
    #[error("layout covers {layout_pages} pages but the document has {document_pages}")]
    SizeMismatch {
        layout_pages: usize,
        document_pages: usize,
    },
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;

/// A planned division of a document into consecutive signatures.
///
/// `sizes` lists the page count of each signature, first to last. `padding`
/// is the number of blank pages that must be appended to the source so that
/// the signature sizes sum to the padded page count.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignatureLayout {
    pub sizes: Vec<usize>,
    pub padding: usize,
}

impl SignatureLayout {
    /// Build a layout for a document of `source_pages` pages.
    ///
    /// Fails when the sizes cover fewer pages than the document, since
    /// padding can never be negative.
    pub fn new(sizes: Vec<usize>, source_pages: usize) -> Result<Self> {
        let layout_pages: usize = sizes.iter().sum();
        if layout_pages < source_pages {
            return Err(PlanError::SizeMismatch {
                layout_pages,
                document_pages: source_pages,
            });
        }
        Ok(Self {
            padding: layout_pages - source_pages,
            sizes,
        })
    }

    /// Total pages covered by all signatures, padding included.
    pub fn total_pages(&self) -> usize {
        self.sizes.iter().sum()
    }

    /// Check that this layout covers `document_pages` exactly.
    ///
    /// Called before cutting; a mismatch means the document was not padded
    /// to match the plan.
    pub fn verify(&self, document_pages: usize) -> Result<()> {
        let layout_pages = self.total_pages();
        if layout_pages != document_pages {
            return Err(PlanError::SizeMismatch {
                layout_pages,
                document_pages,
            });
        }
        Ok(())
    }
}

impl fmt::Display for SignatureLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Run-length encode consecutive equal sizes: [32, 32, 32, 12]
        // renders as "3 × 32-page + 1 × 12-page".
        let mut groups: Vec<(usize, usize)> = Vec::new();
        for &size in &self.sizes {
            match groups.last_mut() {
                Some((s, n)) if *s == size => *n += 1,
                _ => groups.push((size, 1)),
            }
        }

        let parts: Vec<String> = groups
            .iter()
            .map(|(size, n)| format!("{n} × {size}-page"))
            .collect();
        write!(f, "{}", parts.join(" + "))?;
        if groups.len() == 1 {
            write!(f, " signatures")?;
        }
        Ok(())
    }
}

/// A ranked layout candidate with its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutSuggestion {
    pub label: String,
    pub layout: SignatureLayout,
}

impl LayoutSuggestion {
    pub fn new(layout: SignatureLayout) -> Self {
        Self {
            label: layout.to_string(),
            layout,
        }
    }

    /// Sort key: least padding first, then fewest signatures.
    pub(crate) fn rank_key(&self) -> (usize, usize) {
        (self.layout.padding, self.layout.sizes.len())
    }
}

/// One physical print unit with its realized page count.
///
/// The identifier is opaque to the packer; order among units is meaningful
/// and preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrintUnit<T> {
    pub id: T,
    pub pages: usize,
}

impl<T> PrintUnit<T> {
    pub fn new(id: T, pages: usize) -> Self {
        Self { id, pages }
    }
}

/// A contiguous group of print units forming one combined print job.
///
/// `weight` is the job's page total: unit pages plus the spacer pages
/// inserted between adjacent units (none before the first or after the
/// last).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Batch<T> {
    pub units: Vec<PrintUnit<T>>,
    pub weight: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_layout_label() {
        let layout = SignatureLayout::new(vec![32; 4], 128).unwrap();
        assert_eq!(layout.to_string(), "4 × 32-page signatures");
    }

    #[test]
    fn mixed_layout_label() {
        let layout = SignatureLayout::new(vec![32, 32, 32, 12], 100).unwrap();
        assert_eq!(layout.to_string(), "3 × 32-page + 1 × 12-page");
    }

    #[test]
    fn single_signature_label() {
        let layout = SignatureLayout::new(vec![16], 13).unwrap();
        assert_eq!(layout.to_string(), "1 × 16-page signatures");
        assert_eq!(layout.padding, 3);
    }

    #[test]
    fn layout_rejects_undersized_sizes() {
        let err = SignatureLayout::new(vec![32, 32], 100).unwrap_err();
        match err {
            PlanError::SizeMismatch {
                layout_pages,
                document_pages,
            } => {
                assert_eq!(layout_pages, 64);
                assert_eq!(document_pages, 100);
            }
            other => panic!("expected SizeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn verify_requires_exact_cover() {
        let layout = SignatureLayout::new(vec![32, 32], 60).unwrap();
        assert_eq!(layout.padding, 4);
        assert!(layout.verify(64).is_ok());
        assert!(layout.verify(60).is_err());
    }
}
