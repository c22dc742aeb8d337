//! Field access for property-list files.
//!
//! A plist field is a `<key>NAME</key>` line immediately followed by a
//! `<string>VALUE</string>` line. Only the value line is ever rewritten;
//! everything else in the file is left untouched.

use regex::Regex;

/// Read the value paired with `<key>{key}</key>`.
///
/// The first matching key line wins and scanning stops there, even when the
/// following line does not carry a `<string>` value. A key line at the very
/// end of the file has no value line and reads as `None`.
pub fn read_field(lines: &[String], key: &str) -> Option<String> {
    let marker = format!("<key>{}</key>", key);
    let value = Regex::new(r"<string>(.*?)</string>").ok()?;

    for (idx, line) in lines.iter().enumerate() {
        if !line.contains(&marker) {
            continue;
        }

        return lines
            .get(idx + 1)
            .and_then(|next| value.captures(next))
            .map(|caps| caps[1].trim().to_string());
    }

    None
}

/// Replace the value line following `<key>{key}</key>`.
///
/// The replacement line is exactly `\t<string>{value}</string>\r` — the
/// leading tab and trailing carriage return match what Xcode-generated
/// plists carry, keeping diffs limited to the value itself. The value is
/// written as-is; callers own XML escaping. A missing key is a silent no-op.
///
/// Returns true when a line was replaced.
pub fn write_field(lines: &mut [String], key: &str, value: &str) -> bool {
    let marker = format!("<key>{}</key>", key);

    for idx in 0..lines.len() {
        if !lines[idx].contains(&marker) {
            continue;
        }

        // Key on the last line has no value line to replace.
        if idx + 1 >= lines.len() {
            return false;
        }

        lines[idx + 1] = format!("\t<string>{}</string>\r", value);
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn read_field_returns_trimmed_value() {
        let plist = lines(&[
            "<dict>",
            "\t<key>CFBundleName</key>",
            "\t<string>  Demo App  </string>\r",
            "</dict>",
        ]);

        assert_eq!(
            read_field(&plist, "CFBundleName"),
            Some("Demo App".to_string())
        );
    }

    #[test]
    fn read_field_missing_key_is_none() {
        let plist = lines(&["<dict>", "</dict>"]);
        assert_eq!(read_field(&plist, "CFBundleName"), None);
    }

    #[test]
    fn read_field_key_on_last_line_is_none() {
        let plist = lines(&["<dict>", "<key>CFBundleName</key>"]);
        assert_eq!(read_field(&plist, "CFBundleName"), None);
    }

    #[test]
    fn read_field_stops_at_first_key_match() {
        // The first occurrence wins even when its value line is malformed;
        // the later well-formed duplicate must not be consulted.
        let plist = lines(&[
            "<key>CFBundleName</key>",
            "\t<integer>7</integer>",
            "<key>CFBundleName</key>",
            "\t<string>Later</string>",
        ]);

        assert_eq!(read_field(&plist, "CFBundleName"), None);
    }

    #[test]
    fn read_field_captures_first_string_pair() {
        let plist = lines(&[
            "<key>CFBundleName</key>",
            "<string>First</string><string>Second</string>",
        ]);

        assert_eq!(read_field(&plist, "CFBundleName"), Some("First".to_string()));
    }

    #[test]
    fn write_field_uses_exact_line_format() {
        let mut plist = lines(&["<key>CFBundleName</key>", "\t<string>OldName</string>\r"]);

        assert!(write_field(&mut plist, "CFBundleName", "NewName"));
        assert_eq!(plist[1], "\t<string>NewName</string>\r");
    }

    #[test]
    fn write_then_read_round_trips() {
        let mut plist = lines(&[
            "<dict>",
            "\t<key>CFBundleName</key>",
            "\t<string>Old</string>\r",
            "</dict>",
        ]);

        assert!(write_field(&mut plist, "CFBundleName", "New"));
        assert_eq!(read_field(&plist, "CFBundleName"), Some("New".to_string()));
    }

    #[test]
    fn write_field_missing_key_is_silent_noop() {
        let mut plist = lines(&["<dict>", "</dict>"]);
        let before = plist.clone();

        assert!(!write_field(&mut plist, "CFBundleName", "New"));
        assert_eq!(plist, before);
    }

    #[test]
    fn write_field_key_on_last_line_is_noop() {
        let mut plist = lines(&["<dict>", "<key>CFBundleName</key>"]);
        let before = plist.clone();

        assert!(!write_field(&mut plist, "CFBundleName", "New"));
        assert_eq!(plist, before);
    }

    #[test]
    fn write_field_replaces_only_first_match() {
        let mut plist = lines(&[
            "<key>CFBundleName</key>",
            "\t<string>One</string>\r",
            "<key>CFBundleName</key>",
            "\t<string>Two</string>\r",
        ]);

        assert!(write_field(&mut plist, "CFBundleName", "New"));
        assert_eq!(plist[1], "\t<string>New</string>\r");
        assert_eq!(plist[3], "\t<string>Two</string>\r");
    }
}
