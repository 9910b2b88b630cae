//! Minimal SVG document assembly.
//!
//! Output size is small and bounded (one document per tile), so a plain
//! string builder is enough: callers push pre-formatted elements in draw
//! order and [`SvgDocument::finish`] wraps them in the XML header, root
//! element, and footer.

/// An SVG document under construction.
///
/// The document declares a square `size x size` canvas with a matching
/// viewBox. Elements are emitted in push order, which is also SVG paint
/// order: later elements layer over earlier ones.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    /// Canvas width and height in output units.
    size: u32,
    /// Pre-formatted child elements of the root `<svg>`, in paint order.
    elements: Vec<String>,
}

impl SvgDocument {
    /// Start an empty document for a `size x size` canvas.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            elements: Vec::new(),
        }
    }

    /// Append one element.
    pub fn push(&mut self, element: impl Into<String>) {
        self.elements.push(element.into());
    }

    /// Append a sequence of elements in order.
    pub fn extend(&mut self, elements: impl IntoIterator<Item = String>) {
        self.elements.extend(elements);
    }

    /// Assemble the final document text.
    pub fn finish(self) -> String {
        let size = self.size;
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");
        out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
        ));
        out.push('\n');
        for element in &self.elements {
            out.push_str("    ");
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
