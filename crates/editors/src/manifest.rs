//! Script manifest patcher.
//!
//! Ensures the client manifest declares and activates every script class a
//! UI pattern needs. Declarations are import lines at the top of the file;
//! activations are constructor calls inside the run-on-load lifecycle block.

use crate::anchor;
use crate::scan;
use crate::types::UiPattern;

/// Script classes each UI pattern registers in the manifest.
///
/// Carousel is handled by an external slider library; grid and list are pure
/// markup. Both map to no scripts.
#[must_use]
pub const fn required_scripts(pattern: UiPattern) -> &'static [&'static str] {
    match pattern {
        UiPattern::Tab => &["Tab"],
        UiPattern::Accordion => &["Accordion"],
        UiPattern::Modal => &["Modal"],
        UiPattern::Carousel | UiPattern::Grid | UiPattern::List => &[],
    }
}

/// True when any script required by `pattern` is missing either its import
/// or its activation signature in the manifest text.
#[must_use]
pub fn needs_update(text: &str, pattern: UiPattern) -> bool {
    let required = required_scripts(pattern);
    if required.is_empty() {
        return false;
    }
    let signatures = scan::scan_manifest(text);
    required.iter().any(|script| {
        !signatures.imported.contains(*script) || !signatures.activated.contains(*script)
    })
}

/// Merge import and activation lines for `scripts` into the manifest.
///
/// Each signature is inserted independently: a script missing only its
/// activation gets only an activation line. Imports land after the last
/// existing import line, or at the top of the file when there is none.
/// Activations land after the last constructor call inside the run-on-load
/// block; when the block cannot be found they are silently dropped and the
/// imports are still inserted.
#[must_use]
pub fn patch_manifest(text: &str, scripts: &[&str]) -> String {
    if scripts.is_empty() {
        return text.to_string();
    }

    let signatures = scan::scan_manifest(text);
    let need_import: Vec<&str> = scripts
        .iter()
        .copied()
        .filter(|script| !signatures.imported.contains(*script))
        .collect();
    let need_activation: Vec<&str> = scripts
        .iter()
        .copied()
        .filter(|script| !signatures.activated.contains(*script))
        .collect();

    if need_import.is_empty() && need_activation.is_empty() {
        return text.to_string();
    }

    let mut patched = text.to_string();

    if !need_import.is_empty() {
        let import_block = need_import
            .iter()
            .map(|script| format!("import {{ {script} }} from \"./class/{script}.ts\";"))
            .collect::<Vec<_>>()
            .join("\n");
        patched = insert_imports(&patched, &import_block);
    }

    if !need_activation.is_empty() {
        let activation_block = need_activation
            .iter()
            .map(|script| format!("  new {script}();"))
            .collect::<Vec<_>>()
            .join("\n");
        patched = insert_activations(&patched, &activation_block);
    }

    patched
}

/// Splice an import block after the last import line, or prepend it.
fn insert_imports(text: &str, import_block: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    match anchor::last_import_line(&lines) {
        Some(index) => format!(
            "{}\n{import_block}\n{}",
            lines[..=index].join("\n"),
            lines[index + 1..].join("\n")
        ),
        None => format!("{import_block}\n{text}"),
    }
}

/// Splice an activation block at the end of the run-on-load block; with no
/// block present the text is returned unchanged.
fn insert_activations(text: &str, activation_block: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    match anchor::load_block_line(&lines) {
        Some(block_start) => {
            let insert_at = anchor::last_activation_line(&lines, block_start);
            format!(
                "{}\n{activation_block}\n{}",
                lines[..=insert_at].join("\n"),
                lines[insert_at + 1..].join("\n")
            )
        }
        None => {
            log::warn!("manifest has no run-on-load block; activation lines dropped");
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EMPTY_BLOCK: &str = "window.addEventListener(\"load\", () => {\n});\n";

    const REGISTERED: &str = concat!(
        "import { Tab } from \"./class/Tab.ts\";\n",
        "\n",
        "window.addEventListener(\"load\", () => {\n",
        "  new Tab();\n",
        "});\n",
    );

    #[test]
    fn required_scripts_table() {
        assert_eq!(required_scripts(UiPattern::Tab), &["Tab"]);
        assert_eq!(required_scripts(UiPattern::Accordion), &["Accordion"]);
        assert_eq!(required_scripts(UiPattern::Modal), &["Modal"]);
        assert!(required_scripts(UiPattern::Carousel).is_empty());
        assert!(required_scripts(UiPattern::Grid).is_empty());
        assert!(required_scripts(UiPattern::List).is_empty());
    }

    #[test]
    fn ordered_merge_into_empty_manifest() {
        let patched = patch_manifest(EMPTY_BLOCK, &["Tab", "Accordion"]);
        let expected = concat!(
            "import { Tab } from \"./class/Tab.ts\";\n",
            "import { Accordion } from \"./class/Accordion.ts\";\n",
            "window.addEventListener(\"load\", () => {\n",
            "  new Tab();\n",
            "  new Accordion();\n",
            "});\n",
        );
        assert_eq!(patched, expected);
    }

    #[test]
    fn apply_is_idempotent() {
        let once = patch_manifest(EMPTY_BLOCK, &["Tab", "Accordion"]);
        let twice = patch_manifest(&once, &["Tab", "Accordion"]);
        assert_eq!(twice, once);
    }

    #[test]
    fn missing_block_drops_activations_but_keeps_imports() {
        let patched = patch_manifest("console.log(\"boot\");\n", &["Tab", "Accordion"]);
        let expected = concat!(
            "import { Tab } from \"./class/Tab.ts\";\n",
            "import { Accordion } from \"./class/Accordion.ts\";\n",
            "console.log(\"boot\");\n",
        );
        assert_eq!(patched, expected);
        // Still idempotent: the dropped activations never re-trigger imports.
        assert_eq!(patch_manifest(&patched, &["Tab", "Accordion"]), patched);
    }

    #[test]
    fn fully_registered_script_is_left_alone() {
        let patched = patch_manifest(REGISTERED, &["Tab", "Accordion"]);
        assert_eq!(patched.matches("import { Tab }").count(), 1);
        assert_eq!(patched.matches("new Tab()").count(), 1);
        let expected = concat!(
            "import { Tab } from \"./class/Tab.ts\";\n",
            "import { Accordion } from \"./class/Accordion.ts\";\n",
            "\n",
            "window.addEventListener(\"load\", () => {\n",
            "  new Tab();\n",
            "  new Accordion();\n",
            "});\n",
        );
        assert_eq!(patched, expected);
    }

    #[test]
    fn declared_but_not_activated_gains_only_the_activation() {
        let text = concat!(
            "import { Modal } from \"./class/Modal.ts\";\n",
            "\n",
            "window.addEventListener(\"load\", () => {\n",
            "});\n",
        );
        let patched = patch_manifest(text, &["Modal"]);
        assert_eq!(patched.matches("import { Modal }").count(), 1);
        assert_eq!(patched.matches("new Modal()").count(), 1);
    }

    #[test]
    fn no_scripts_is_a_no_op() {
        assert_eq!(patch_manifest(REGISTERED, &[]), REGISTERED);
    }

    #[test]
    fn needs_update_triggers_on_either_missing_signature() {
        assert!(needs_update("", UiPattern::Tab));
        let declared_only = "import { Tab } from \"./class/Tab.ts\";\n";
        assert!(needs_update(declared_only, UiPattern::Tab));
        assert!(!needs_update(REGISTERED, UiPattern::Tab));
        // Patterns without scripts never need a manifest update.
        assert!(!needs_update("", UiPattern::Grid));
        assert!(!needs_update("", UiPattern::Carousel));
    }
}
