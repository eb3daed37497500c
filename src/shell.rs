use crate::store::Profile;

/// Render a profile as one `export` statement per variable, in the
/// profile's insertion order.
pub fn render(profile: &Profile) -> Vec<String> {
    profile
        .iter()
        .map(|(key, value)| export_line(key, value))
        .collect()
}

/// A single `export KEY='value';` statement. The trailing semicolon keeps
/// the output valid even when `$(...)` substitution collapses line breaks.
pub fn export_line(key: &str, value: &str) -> String {
    format!("export {key}='{}';", quote(value))
}

// Single-quote escaping: close the quote, emit an escaped quote, reopen.
// Inside single quotes the shell takes `$`, backslash, whitespace, and
// newlines literally, so an embedded newline stays within one statement.
fn quote(value: &str) -> String {
    value.replace('\'', "'\\''")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_plain_values() {
        assert_eq!(
            export_line("DB_HOST", "localhost"),
            "export DB_HOST='localhost';"
        );
    }

    #[test]
    fn escapes_single_quotes() {
        assert_eq!(export_line("KEY", "a b'c"), "export KEY='a b'\\''c';");
    }

    #[test]
    fn preserves_dollar_signs_literally() {
        assert_eq!(export_line("KEY", "$HOME"), "export KEY='$HOME';");
    }

    #[test]
    fn keeps_newlines_inside_the_quotes() {
        let line = export_line("KEY", "line1\nline2");
        assert_eq!(line, "export KEY='line1\nline2';");
        assert!(line.ends_with("';"));
    }

    #[test]
    fn renders_in_insertion_order() {
        let mut profile = Profile::new();
        profile.insert("B".to_string(), "2".to_string());
        profile.insert("A".to_string(), "1".to_string());

        let lines = render(&profile);
        assert_eq!(lines, ["export B='2';", "export A='1';"]);
    }
}
