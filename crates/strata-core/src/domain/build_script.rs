//! Structural text edits on build scripts.
//!
//! A build script is opaque text with one recognized unit: a
//! `dependencies { ... }` block. Blocks are found through [`BlockLocator`];
//! the shipped [`BraceMatcher`] counts `{`/`}` depth and does not understand
//! string literals or comments, so a stray brace before the real block will
//! mislead it.

use std::collections::BTreeSet;

/// Byte offsets of a located block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpan {
    /// Offset of the opening `{`.
    pub open: usize,
    /// Offset of the matching `}`.
    pub close: usize,
}

/// Finds a named brace-delimited block in a build script.
pub trait BlockLocator: Send + Sync {
    fn find_block(&self, text: &str, keyword: &str) -> Option<BlockSpan>;
}

/// Depth-counting brace matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct BraceMatcher;

impl BlockLocator for BraceMatcher {
    fn find_block(&self, text: &str, keyword: &str) -> Option<BlockSpan> {
        let open = find_block_open(text, keyword)?;
        let close = find_matching_brace(text, open)?;
        Some(BlockSpan { open, close })
    }
}

/// Offset of the `{` following the first `<keyword>` that is followed by
/// optional whitespace and `{`. The match is purely textual, so
/// `legacydependencies {` matches as well.
fn find_block_open(text: &str, keyword: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(rel) = text[from..].find(keyword) {
        let end = from + rel + keyword.len();
        let after = &text[end..];
        let skipped = after.len() - after.trim_start().len();
        if after[skipped..].starts_with('{') {
            return Some(end + skipped);
        }
        from = end;
    }
    None
}

/// Offset of the `}` closing the `{` at `open`.
pub fn find_matching_brace(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, byte) in text.as_bytes().iter().enumerate().skip(open) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// `    implementation(project("<path>"))`
pub fn project_dependency_line(module_path: &str) -> String {
    format!("    implementation(project(\"{}\"))", module_path)
}

/// Whether `text` already references `module_path` as a project dependency.
pub fn references_project(text: &str, module_path: &str) -> bool {
    text.contains(&format!("project(\"{}\")", module_path))
}

/// Required paths that are neither inside `own_prefix` nor already referenced.
pub fn missing_dependencies<'a>(
    text: &str,
    own_prefix: &str,
    required: &'a BTreeSet<String>,
) -> Vec<&'a str> {
    let nested = format!("{}:", own_prefix);
    required
        .iter()
        .map(String::as_str)
        .filter(|path| !path.is_empty())
        .filter(|path| *path != own_prefix && !path.starts_with(&nested))
        .filter(|path| !references_project(text, path))
        .collect()
}

/// Insert one dependency line per path into the first `dependencies` block,
/// or append a new block when there is none.
pub fn insert_dependencies(original: &str, paths: &[&str], locator: &dyn BlockLocator) -> String {
    if paths.is_empty() {
        return original.to_string();
    }
    let declarations = paths
        .iter()
        .map(|p| project_dependency_line(p))
        .collect::<Vec<_>>()
        .join("\n");

    match locator.find_block(original, "dependencies") {
        Some(span) => {
            let head = &original[..span.close];
            let (body, indent) = match head.rfind('\n') {
                Some(nl) if nl > span.open && head[nl + 1..].trim().is_empty() => {
                    (&head[..nl], &head[nl + 1..])
                }
                _ => (head, ""),
            };
            format!(
                "{}\n{}\n{}{}",
                body.trim_end(),
                declarations,
                indent,
                &original[span.close..]
            )
        }
        None => {
            let trimmed = original.trim_end();
            if trimmed.is_empty() {
                format!("dependencies {{\n{}\n}}\n", declarations)
            } else {
                format!("{}\n\ndependencies {{\n{}\n}}\n", trimmed, declarations)
            }
        }
    }
}

/// `apply(from = rootProject.file("<rel>"))`
pub fn apply_from_line(relative_script: &str) -> String {
    format!("apply(from = rootProject.file(\"{}\"))", relative_script)
}

/// Prepend the apply line for `relative_script` unless `current` already has it.
pub fn ensure_apply_from(current: &str, relative_script: &str) -> Option<String> {
    let line = apply_from_line(relative_script);
    if current.contains(&line) {
        return None;
    }
    if current.is_empty() {
        Some(format!("{}\n", line))
    } else {
        Some(format!("{}\n\n{}", line, current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(paths: &[&str]) -> BTreeSet<String> {
        paths.iter().map(|s| s.to_string()).collect()
    }

    // ========================================================================
    // Brace matching
    // ========================================================================

    #[test]
    fn matches_nested_braces() {
        let text = "dependencies {\n  a { b { } }\n}\nafter";
        let span = BraceMatcher.find_block(text, "dependencies").unwrap();
        assert_eq!(&text[span.open..=span.open], "{");
        assert_eq!(&text[span.close..], "}\nafter");
    }

    #[test]
    fn unbalanced_block_is_not_found() {
        assert!(BraceMatcher.find_block("dependencies {\n a {\n", "dependencies").is_none());
    }

    // Inherited limitation: the keyword is matched as a substring.
    #[test]
    fn keyword_matches_inside_longer_identifiers() {
        let text = "legacydependencies {\n}\ndependencies {\n}\n";
        let span = BraceMatcher.find_block(text, "dependencies").unwrap();
        assert_eq!(span.open, "legacydependencies ".len());
    }

    #[test]
    fn keyword_without_brace_is_skipped() {
        let text = "// dependencies are below\ndependencies{\n}\n";
        let span = BraceMatcher.find_block(text, "dependencies").unwrap();
        assert_eq!(&text[span.open..span.open + 1], "{");
        assert!(text[..span.open].ends_with("\ndependencies"));
    }

    // Inherited limitation: braces inside strings are counted.
    #[test]
    fn braces_in_strings_are_counted() {
        let text = "dependencies {\n  x(\"}\")\n}\n";
        let span = BraceMatcher.find_block(text, "dependencies").unwrap();
        assert!(span.close < text.rfind('}').unwrap());
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    #[test]
    fn inserts_before_closing_brace() {
        let text = "plugins {\n}\n\ndependencies {\n    implementation(libs.x)\n}\n";
        let out = insert_dependencies(text, &[":features:a:domain"], &BraceMatcher);
        assert_eq!(
            out,
            "plugins {\n}\n\ndependencies {\n    implementation(libs.x)\n    implementation(project(\":features:a:domain\"))\n}\n"
        );
    }

    #[test]
    fn inserts_into_empty_block() {
        let out = insert_dependencies("dependencies {\n}\n", &[":a", ":b"], &BraceMatcher);
        assert_eq!(
            out,
            "dependencies {\n    implementation(project(\":a\"))\n    implementation(project(\":b\"))\n}\n"
        );
    }

    #[test]
    fn inserts_into_single_line_block() {
        let out = insert_dependencies("dependencies {}", &[":a"], &BraceMatcher);
        assert_eq!(out, "dependencies {\n    implementation(project(\":a\"))\n}");
    }

    #[test]
    fn appends_block_when_missing() {
        let out = insert_dependencies("plugins {\n}\n\n\n", &[":a"], &BraceMatcher);
        assert_eq!(
            out,
            "plugins {\n}\n\ndependencies {\n    implementation(project(\":a\"))\n}\n"
        );
    }

    #[test]
    fn no_paths_is_identity() {
        assert_eq!(insert_dependencies("x", &[], &BraceMatcher), "x");
    }

    // ========================================================================
    // Filtering
    // ========================================================================

    #[test]
    fn excludes_own_feature_and_existing_references() {
        let text = "dependencies {\n    implementation(project(\":features:b:domain\"))\n}\n";
        let required = set(&[
            ":features:a",
            ":features:a:data",
            ":features:b:domain",
            ":features:c:domain",
        ]);
        assert_eq!(
            missing_dependencies(text, ":features:a", &required),
            vec![":features:c:domain"]
        );
    }

    #[test]
    fn similar_prefix_is_not_own_feature() {
        let required = set(&[":features:ab:domain"]);
        assert_eq!(
            missing_dependencies("", ":features:a", &required),
            vec![":features:ab:domain"]
        );
    }

    // ========================================================================
    // Apply line
    // ========================================================================

    #[test]
    fn apply_line_is_prepended_once() {
        let first = ensure_apply_from("plugins {}\n", "scripts/data.gradle.kts").unwrap();
        assert!(first.starts_with("apply(from = rootProject.file(\"scripts/data.gradle.kts\"))\n\nplugins"));
        assert!(ensure_apply_from(&first, "scripts/data.gradle.kts").is_none());
        assert_eq!(
            ensure_apply_from("", "a.gradle.kts").unwrap(),
            "apply(from = rootProject.file(\"a.gradle.kts\"))\n"
        );
    }
}
