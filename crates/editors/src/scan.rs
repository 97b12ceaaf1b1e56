//! Signature scanning: which declarations already exist in raw artifact text.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// `import { Name } from ...` — the manifest's declaration signature.
static IMPORT_SIGNATURE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"import\s+\{\s*(\w+)\s*\}\s+from").expect("static pattern"));

/// `new Name()` — the manifest's activation signature.
static ACTIVATION_SIGNATURE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"new\s+(\w+)\(\)").expect("static pattern"));

/// Identifiers already registered in a script manifest, split by signature.
#[derive(Debug, Default)]
pub(crate) struct ManifestSignatures {
    pub(crate) imported: HashSet<String>,
    pub(crate) activated: HashSet<String>,
}

/// Scan every line of a manifest and collect the identifiers that already
/// carry an import or an activation signature. Recomputed from scratch on
/// each call; the artifact may have been edited externally in between.
pub(crate) fn scan_manifest(text: &str) -> ManifestSignatures {
    let mut signatures = ManifestSignatures::default();
    for line in text.split('\n') {
        if let Some(captures) = IMPORT_SIGNATURE.captures(line) {
            signatures.imported.insert(captures[1].to_string());
        }
        if let Some(captures) = ACTIVATION_SIGNATURE.captures(line) {
            signatures.activated.insert(captures[1].to_string());
        }
    }
    signatures
}

/// Compile a `key: "value"` assignment pattern for one document key.
///
/// Returns `None` instead of propagating a pattern error; the patchers stay
/// total over their input and simply skip the key.
pub(crate) fn keyed_assignment(key: &str) -> Option<Regex> {
    let pattern = format!(r#"({}:\s*)"[^"]*""#, regex::escape(key));
    match Regex::new(&pattern) {
        Ok(regex) => Some(regex),
        Err(error) => {
            log::debug!("unusable key '{key}': {error}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_imports_and_activations_separately() {
        let text = concat!(
            "import { Tab } from \"./class/Tab.ts\";\n",
            "import { Modal } from \"./class/Modal.ts\";\n",
            "window.addEventListener(\"load\", () => {\n",
            "  new Tab();\n",
            "});\n",
        );
        let signatures = scan_manifest(text);
        assert!(signatures.imported.contains("Tab"));
        assert!(signatures.imported.contains("Modal"));
        assert!(signatures.activated.contains("Tab"));
        assert!(!signatures.activated.contains("Modal"));
    }

    #[test]
    fn ignores_unrelated_lines() {
        let signatures = scan_manifest("const x = 1;\nconsole.log(x);\n");
        assert!(signatures.imported.is_empty());
        assert!(signatures.activated.is_empty());
    }

    #[test]
    fn keyed_assignment_matches_quoted_values_only() {
        let regex = keyed_assignment("siteName").unwrap();
        assert!(regex.is_match("siteName: \"Demo\","));
        assert!(!regex.is_match("siteNameLength: 4,"));
    }
}
