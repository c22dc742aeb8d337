//! Android project editor: app name in `AndroidManifest.xml`, application id
//! in `build.gradle`.
//!
//! Both files are edited the same way as the iOS side: load into lines,
//! rewrite only the quoted value span on matching lines, save the whole file
//! back. Groovy (`applicationId "com.x"`) and Kotlin
//! (`applicationId = "com.x"`) assignment styles both match; the quoted span
//! is replaced in place so the surrounding formatting survives.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::core::line_file;
use crate::error::Result;

const LABEL_PATTERN: &str = r#"android:label="([^"]*)""#;
const APPLICATION_ID_PATTERN: &str = r#"applicationId\s*=?\s*"([^"]*)""#;

/// Read the quoted value captured by `pattern` from the first matching line.
fn read_quoted(lines: &[String], pattern: &str) -> Option<String> {
    let re = Regex::new(pattern).ok()?;

    lines
        .iter()
        .find_map(|line| re.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Replace the quoted value captured by `pattern` with `value`.
///
/// Only the capture-group span is spliced, leaving the rest of each matching
/// line byte-identical. `first_only` limits the rewrite to the first
/// matching line (the manifest label); otherwise every matching line is
/// patched (gradle flavors repeat `applicationId`).
fn write_quoted(lines: &mut [String], pattern: &str, value: &str, first_only: bool) -> bool {
    let re = match Regex::new(pattern) {
        Ok(re) => re,
        Err(_) => return false,
    };

    let mut changed = false;
    for line in lines.iter_mut() {
        let span = match re.captures(line).and_then(|caps| caps.get(1)) {
            Some(m) => m.range(),
            None => continue,
        };

        line.replace_range(span, value);
        changed = true;

        if first_only {
            break;
        }
    }

    changed
}

/// Editor for the Android side of a project.
///
/// Same discipline as the iOS editor: explicit construction-time paths, one
/// load and at most one save per operation, missing fields surface as absent
/// results rather than errors.
pub struct AndroidProject {
    manifest_path: PathBuf,
    gradle_path: PathBuf,
}

impl AndroidProject {
    pub fn new(manifest_path: PathBuf, gradle_path: PathBuf) -> Self {
        Self {
            manifest_path,
            gradle_path,
        }
    }

    /// Editor rooted at a Flutter-style project directory. Prefers the
    /// Groovy build script, falling back to the Kotlin one when only that
    /// exists.
    pub fn at_root(root: &Path) -> Self {
        let app_dir = root.join("android").join("app");

        let gradle = app_dir.join("build.gradle");
        let gradle = if gradle.exists() {
            gradle
        } else {
            app_dir.join("build.gradle.kts")
        };

        Self::new(
            app_dir
                .join("src")
                .join("main")
                .join("AndroidManifest.xml"),
            gradle,
        )
    }

    /// Current `android:label` value, or `None` when the manifest has none.
    pub fn app_name(&self) -> Result<Option<String>> {
        let lines = line_file::load(&self.manifest_path)?;
        Ok(read_quoted(&lines, LABEL_PATTERN))
    }

    /// Rewrite the `android:label` value on the first line carrying it.
    pub fn set_app_name(&self, new_name: &str) -> Result<bool> {
        let mut lines = line_file::load(&self.manifest_path)?;

        if !write_quoted(&mut lines, LABEL_PATTERN, new_name, true) {
            return Ok(false);
        }

        line_file::save(&self.manifest_path, &lines)?;
        Ok(true)
    }

    /// Current `applicationId` value, or `None` when the build script has
    /// none.
    pub fn application_id(&self) -> Result<Option<String>> {
        let lines = line_file::load(&self.gradle_path)?;
        Ok(read_quoted(&lines, APPLICATION_ID_PATTERN))
    }

    /// Rewrite every `applicationId` value in the build script.
    pub fn set_application_id(&self, new_id: &str) -> Result<bool> {
        let mut lines = line_file::load(&self.gradle_path)?;

        if !write_quoted(&mut lines, APPLICATION_ID_PATTERN, new_id, false) {
            return Ok(false);
        }

        line_file::save(&self.gradle_path, &lines)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn reads_manifest_label() {
        let manifest = lines(&[
            "<application",
            "        android:label=\"demo\"",
            "        android:icon=\"@mipmap/ic_launcher\">",
        ]);

        assert_eq!(
            read_quoted(&manifest, LABEL_PATTERN),
            Some("demo".to_string())
        );
    }

    #[test]
    fn writes_label_preserving_surrounding_attributes() {
        let mut manifest = lines(&[
            "<application",
            "        android:label=\"demo\" android:icon=\"@mipmap/ic_launcher\">",
        ]);

        assert!(write_quoted(&mut manifest, LABEL_PATTERN, "Fancy App", true));
        assert_eq!(
            manifest[1],
            "        android:label=\"Fancy App\" android:icon=\"@mipmap/ic_launcher\">"
        );
    }

    #[test]
    fn reads_groovy_application_id() {
        let gradle = lines(&[
            "defaultConfig {",
            "        applicationId \"com.example.demo\"",
            "}",
        ]);

        assert_eq!(
            read_quoted(&gradle, APPLICATION_ID_PATTERN),
            Some("com.example.demo".to_string())
        );
    }

    #[test]
    fn reads_kotlin_application_id() {
        let gradle = lines(&["        applicationId = \"com.example.demo\""]);

        assert_eq!(
            read_quoted(&gradle, APPLICATION_ID_PATTERN),
            Some("com.example.demo".to_string())
        );
    }

    #[test]
    fn application_id_suffix_does_not_match() {
        let gradle = lines(&["        applicationIdSuffix \".debug\""]);

        assert_eq!(read_quoted(&gradle, APPLICATION_ID_PATTERN), None);
    }

    #[test]
    fn write_patches_every_application_id_line() {
        let mut gradle = lines(&[
            "defaultConfig {",
            "        applicationId \"com.example.demo\"",
            "}",
            "productFlavors {",
            "        applicationId = \"com.example.demo\"",
            "}",
        ]);

        assert!(write_quoted(
            &mut gradle,
            APPLICATION_ID_PATTERN,
            "com.acme.fancy",
            false,
        ));
        assert_eq!(gradle[1], "        applicationId \"com.acme.fancy\"");
        assert_eq!(gradle[4], "        applicationId = \"com.acme.fancy\"");
        assert_eq!(gradle[0], "defaultConfig {");
    }

    #[test]
    fn write_without_match_is_noop() {
        let mut gradle = lines(&["defaultConfig {", "}"]);
        let before = gradle.clone();

        assert!(!write_quoted(
            &mut gradle,
            APPLICATION_ID_PATTERN,
            "com.acme.fancy",
            false,
        ));
        assert_eq!(gradle, before);
    }

    #[test]
    fn label_write_touches_only_first_match() {
        let mut manifest = lines(&[
            "        android:label=\"demo\"",
            "        android:label=\"demo-secondary\"",
        ]);

        assert!(write_quoted(&mut manifest, LABEL_PATTERN, "Fancy", true));
        assert_eq!(manifest[0], "        android:label=\"Fancy\"");
        assert_eq!(manifest[1], "        android:label=\"demo-secondary\"");
    }
}
