//! Image references: `[[image:src]]` with optional ordered attributes.

use wikirender_core::{CssProperties, Node};

/// Optional image attributes; each contributes a `name="value"` fragment
/// only when supplied, in field order.
#[derive(Debug, Clone, Default)]
pub struct ImageParams {
    pub alt_text: Option<String>,
    pub width_px: Option<u32>,
    pub height_px: Option<u32>,
    pub inline_style: Option<CssProperties>,
}

/// Image reference: `[[image:src]]` or
/// `[[image:src||alt="..." width="..." height="..." style="..."]]`
pub fn image(src: impl Into<String>, params: ImageParams) -> Node {
    let src = src.into();

    let mut attributes: Vec<String> = Vec::new();
    if let Some(alt) = &params.alt_text {
        attributes.push(format!("alt=\"{alt}\""));
    }
    if let Some(width) = params.width_px {
        attributes.push(format!("width=\"{width}\""));
    }
    if let Some(height) = params.height_px {
        attributes.push(format!("height=\"{height}\""));
    }
    if let Some(style) = &params.inline_style {
        if !style.is_empty() {
            attributes.push(format!("style=\"{}\"", style.to_inline()));
        }
    }

    if attributes.is_empty() {
        Node::inline(format!("[[image:{src}]]"))
    } else {
        Node::inline(format!("[[image:{src}||{}]]", attributes.join(" ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wikirender_core::Context;

    fn rendered(node: Node) -> String {
        node.render(&Context::default()).unwrap()
    }

    #[test]
    fn test_src_only() {
        let node = image("test.jpg", ImageParams::default());
        assert!(!node.newline_before());
        assert!(!node.newline_after());
        assert_eq!(rendered(node), "[[image:test.jpg]]");
    }

    #[test]
    fn test_all_attributes_in_order() {
        let params = ImageParams {
            alt_text: Some("Alt text".to_string()),
            width_px: Some(100),
            height_px: Some(200),
            inline_style: Some(CssProperties::new().with("float", "right")),
        };
        assert_eq!(
            rendered(image("test.jpg", params)),
            "[[image:test.jpg||alt=\"Alt text\" width=\"100\" height=\"200\" style=\"float: right;\"]]"
        );
    }

    #[test]
    fn test_subset_of_attributes_leaves_no_residue() {
        let params = ImageParams {
            alt_text: None,
            width_px: Some(640),
            height_px: None,
            inline_style: None,
        };
        assert_eq!(
            rendered(image("photo.png", params)),
            "[[image:photo.png||width=\"640\"]]"
        );
    }

    #[test]
    fn test_empty_style_contributes_nothing() {
        let params = ImageParams {
            inline_style: Some(CssProperties::new()),
            ..ImageParams::default()
        };
        assert_eq!(rendered(image("a.png", params)), "[[image:a.png]]");
    }
}
