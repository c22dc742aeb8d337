//! iOS project editor: app name in `Info.plist`, bundle identifier in
//! `project.pbxproj`.

use std::path::{Path, PathBuf};

use crate::core::{build_settings, line_file, plist};
use crate::error::Result;

const BUNDLE_NAME_KEY: &str = "CFBundleName";
const DISPLAY_NAME_KEY: &str = "CFBundleDisplayName";

/// Editor for the iOS side of a project.
///
/// Paths and the companion marker are explicit construction-time values so
/// tests (and non-Flutter layouts) can point at arbitrary fixtures. Every
/// operation re-loads its file, scans in memory, and saves at most once;
/// nothing is cached across calls.
pub struct IosProject {
    plist_path: PathBuf,
    pbxproj_path: PathBuf,
    /// Literal line content qualifying the main target's build-settings
    /// block (its `INFOPLIST_FILE` assignment).
    plist_marker: String,
}

impl IosProject {
    pub fn new(plist_path: PathBuf, pbxproj_path: PathBuf, plist_marker: String) -> Self {
        Self {
            plist_path,
            pbxproj_path,
            plist_marker,
        }
    }

    /// Editor rooted at a Flutter-style project directory.
    pub fn at_root(root: &Path) -> Self {
        Self::new(
            root.join("ios").join("Runner").join("Info.plist"),
            root.join("ios")
                .join("Runner.xcodeproj")
                .join("project.pbxproj"),
            "INFOPLIST_FILE = Runner/Info.plist".to_string(),
        )
    }

    /// Current app name (`CFBundleName`), or `None` when the field is absent.
    pub fn app_name(&self) -> Result<Option<String>> {
        let lines = line_file::load(&self.plist_path)?;
        Ok(plist::read_field(&lines, BUNDLE_NAME_KEY))
    }

    /// Rewrite the app name under both `CFBundleName` and
    /// `CFBundleDisplayName`. Each key gets its own scan from the top of the
    /// file; the file is saved once, and only when at least one key was
    /// present.
    pub fn set_app_name(&self, new_name: &str) -> Result<bool> {
        let mut lines = line_file::load(&self.plist_path)?;

        let named = plist::write_field(&mut lines, BUNDLE_NAME_KEY, new_name);
        let displayed = plist::write_field(&mut lines, DISPLAY_NAME_KEY, new_name);

        let changed = named || displayed;
        if changed {
            line_file::save(&self.plist_path, &lines)?;
        }

        Ok(changed)
    }

    /// Current bundle identifier of the main target, or `None` when no
    /// qualifying build-settings block records one.
    pub fn bundle_id(&self) -> Result<Option<String>> {
        let lines = line_file::load(&self.pbxproj_path)?;
        Ok(build_settings::read_bundle_id(&lines, &self.plist_marker))
    }

    /// Rewrite the bundle identifier across all configurations sharing the
    /// main target's current value. Without a readable current identifier
    /// this is a no-op returning false; the file is not touched.
    pub fn set_bundle_id(&self, new_id: &str) -> Result<bool> {
        let mut lines = line_file::load(&self.pbxproj_path)?;

        if !build_settings::write_bundle_id(&mut lines, &self.plist_marker, new_id) {
            return Ok(false);
        }

        line_file::save(&self.pbxproj_path, &lines)?;
        Ok(true)
    }
}
