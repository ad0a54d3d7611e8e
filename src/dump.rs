//! Element tree dump for diagnostics.

use crate::widget::Element;

/// Render the subtree rooted at `root`, one line per element.
///
/// Format: `name [ANCHOR] (x, y) WxH`, followed by `hovered`/`pressed`
/// flags and the quoted text when set. Children are indented two spaces.
pub fn dump_tree(root: &Element) -> String {
    let mut out = String::new();
    dump_element(root, 0, &mut out);
    out
}

fn dump_element(element: &Element, depth: usize, out: &mut String) {
    let (x, y) = element.position();
    let (w, h) = element.size();
    let name = element.name.as_deref().unwrap_or("<anon>");
    out.push_str(&format!(
        "{:indent$}{} [{}] ({}, {}) {}x{}",
        "",
        name,
        element.anchor().as_str(),
        x,
        y,
        w,
        h,
        indent = depth * 2
    ));
    if element.is_hovered() {
        out.push_str(" hovered");
    }
    if element.is_pressed() {
        out.push_str(" pressed");
    }
    if !element.text.is_empty() {
        out.push_str(&format!(" {:?}", element.text));
    }
    out.push('\n');

    for child in element.children() {
        dump_element(child, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_lines_are_indented() {
        let mut root = Element::new(0.0, 0.0, 100.0, 100.0).named("root");
        let mut panel = Element::new(10.0, 10.0, 50.0, 50.0).named("panel");
        panel.add_element(Element::new(1.0, 2.0, 3.0, 4.0).with_text("hi"));
        root.add_element(panel);

        assert_eq!(
            dump_tree(&root),
            "root [BOTTOMLEFT] (0, 0) 100x100\n\
             \x20 panel [BOTTOMLEFT] (10, 10) 50x50\n\
             \x20   <anon> [BOTTOMLEFT] (11, 12) 3x4 \"hi\"\n"
        );
    }
}
