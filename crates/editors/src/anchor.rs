//! Anchor location: the textual fences new content is spliced at.
//!
//! Anchors are positional, not semantic. They rely on recognizable line
//! shapes (an import prefix, a fixed listener call, a closing brace line)
//! rather than a syntax tree.

/// Marker that opens the manifest's run-on-load lifecycle block.
pub(crate) const LOAD_BLOCK_MARKER: &str = "window.addEventListener(\"load\"";

/// Line content that closes the lifecycle block.
const BLOCK_CLOSE: &str = "});";

/// Index of the last top-level import line, if any.
pub(crate) fn last_import_line(lines: &[&str]) -> Option<usize> {
    lines.iter().rposition(|line| {
        line.strip_prefix("import")
            .is_some_and(|rest| rest.starts_with(|c: char| c.is_whitespace()))
    })
}

/// Index of the line carrying the lifecycle block marker, if any.
pub(crate) fn load_block_line(lines: &[&str]) -> Option<usize> {
    lines.iter().position(|line| line.contains(LOAD_BLOCK_MARKER))
}

/// Insertion anchor inside the lifecycle block: the last `new ` call before
/// the block closes, or the marker line itself when the block holds none.
pub(crate) fn last_activation_line(lines: &[&str], block_start: usize) -> usize {
    let mut anchor = block_start;
    for (index, line) in lines.iter().enumerate().skip(block_start + 1) {
        if line.contains("new ") {
            anchor = index;
        }
        if line.contains(BLOCK_CLOSE) {
            break;
        }
    }
    anchor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_last_import_not_first() {
        let lines = vec![
            "import { A } from \"./class/A.ts\";",
            "",
            "import { B } from \"./class/B.ts\";",
            "const x = 1;",
        ];
        assert_eq!(last_import_line(&lines), Some(2));
    }

    #[test]
    fn indented_import_is_not_an_anchor() {
        let lines = vec!["  import { A } from \"./class/A.ts\";"];
        assert_eq!(last_import_line(&lines), None);
    }

    #[test]
    fn activation_anchor_defaults_to_marker_line() {
        let lines = vec!["window.addEventListener(\"load\", () => {", "});"];
        assert_eq!(load_block_line(&lines), Some(0));
        assert_eq!(last_activation_line(&lines, 0), 0);
    }

    #[test]
    fn activation_anchor_stops_at_block_close() {
        let lines = vec![
            "window.addEventListener(\"load\", () => {",
            "  new Tab();",
            "});",
            "const later = new Date();",
        ];
        // The constructor call after the block close must not move the anchor.
        assert_eq!(last_activation_line(&lines, 0), 1);
    }
}
