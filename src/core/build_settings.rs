//! Bundle-identifier access for Xcode `project.pbxproj` files.
//!
//! A pbxproj carries one `buildSettings = { … };` block per build
//! configuration (main target Debug/Release, test targets, …). The main
//! target's blocks are the ones whose settings include the app's
//! `INFOPLIST_FILE` assignment; that line is the companion marker used to
//! qualify a block. Reads return the identifier from the first qualifying
//! block. Writes anchor on that value and then patch every
//! `PRODUCT_BUNDLE_IDENTIFIER` line carrying it — the other configuration
//! variants of the main target repeat the same identifier, and narrowing the
//! write to the discovered block would leave them stale.

const BLOCK_OPEN: &str = "buildSettings = {";
const BLOCK_CLOSE: &str = "};";
const BUNDLE_ID_KEY: &str = "PRODUCT_BUNDLE_IDENTIFIER";

/// Scan position within one pass over the file.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ScanState {
    /// Not inside any build-settings block.
    Outside,
    /// Inside a block whose owning target is not yet confirmed.
    InBlock { candidate: Option<String> },
    /// Inside a block confirmed (via the companion marker) to belong to the
    /// main application target.
    InMatchedBlock { candidate: Option<String> },
}

/// Outcome of feeding one line to the scanner.
enum Step {
    Continue(ScanState),
    Found(String),
}

/// Transition function for a single line.
///
/// Block state is discarded at every `};` whether or not the block matched;
/// a qualifying block yields its recorded assignment value at close.
fn step(state: ScanState, line: &str, plist_marker: &str) -> Step {
    match state {
        ScanState::Outside => {
            if line.contains(BLOCK_OPEN) {
                Step::Continue(ScanState::InBlock { candidate: None })
            } else {
                Step::Continue(ScanState::Outside)
            }
        }
        ScanState::InBlock { candidate } => {
            if line.contains(plist_marker) {
                Step::Continue(ScanState::InMatchedBlock { candidate })
            } else if line.contains(BUNDLE_ID_KEY) {
                Step::Continue(ScanState::InBlock {
                    candidate: Some(assignment_value(line)),
                })
            } else if line.contains(BLOCK_CLOSE) {
                Step::Continue(ScanState::Outside)
            } else {
                Step::Continue(ScanState::InBlock { candidate })
            }
        }
        ScanState::InMatchedBlock { candidate } => {
            if line.contains(BUNDLE_ID_KEY) {
                Step::Continue(ScanState::InMatchedBlock {
                    candidate: Some(assignment_value(line)),
                })
            } else if line.contains(BLOCK_CLOSE) {
                match candidate {
                    Some(value) => Step::Found(value),
                    None => Step::Continue(ScanState::Outside),
                }
            } else {
                Step::Continue(ScanState::InMatchedBlock { candidate })
            }
        }
    }
}

/// Everything after the last `=`, trimmed, trailing `;` stripped.
/// No validation beyond that — the identifier is whatever the file says.
fn assignment_value(line: &str) -> String {
    let raw = match line.rsplit_once('=') {
        Some((_, rest)) => rest,
        None => line,
    };
    raw.trim().trim_end_matches(';').trim().to_string()
}

/// Read the bundle identifier from the first build-settings block that also
/// carries the companion Info.plist marker. Returns `None` when no such
/// block records an assignment before the lines run out.
pub fn read_bundle_id(lines: &[String], plist_marker: &str) -> Option<String> {
    let mut state = ScanState::Outside;

    for line in lines {
        match step(state, line, plist_marker) {
            Step::Found(value) => return Some(value),
            Step::Continue(next) => state = next,
        }
    }

    None
}

/// Rewrite the bundle identifier to `new_id`.
///
/// The current identifier is discovered with [`read_bundle_id`]; without one
/// there is nothing to anchor the replacement on and the lines are left
/// untouched. Otherwise every line containing the assignment key gets every
/// occurrence of the old value replaced — deliberately broader than the
/// single block used for discovery, so Debug/Release variants mirroring the
/// main target's identifier are updated too.
///
/// Returns true when a current identifier was found and replaced.
pub fn write_bundle_id(lines: &mut [String], plist_marker: &str, new_id: &str) -> bool {
    let current = match read_bundle_id(lines, plist_marker) {
        Some(value) => value,
        None => return false,
    };

    for line in lines.iter_mut() {
        if line.contains(BUNDLE_ID_KEY) {
            *line = line.replace(&current, new_id);
        }
    }

    true
}
