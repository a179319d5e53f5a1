#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned two-column key/value table.
///
/// Values wider than the remaining width are truncated with an ellipsis.
#[must_use]
pub fn render_key_value_table(rows: &[(String, String)], options: TableOptions) -> String {
    if rows.is_empty() {
        return String::from("(empty)");
    }

    let key_width = rows
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0)
        .max("key".len());
    let value_width = options
        .max_width
        .map(|max| max.saturating_sub(key_width + 2).max(10));

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!("{:<key_width$}  value", "key"));
    let widest_value = rows
        .iter()
        .map(|(_, value)| value.chars().count())
        .max()
        .unwrap_or(0)
        .max("value".len());
    let divider_value = value_width.map_or(widest_value, |w| widest_value.min(w));
    lines.push("-".repeat(key_width + 2 + divider_value));
    for (key, value) in rows {
        let value = value_width.map_or_else(|| value.clone(), |w| truncate_text(value, w));
        let value = if options.color {
            colorize(&value)
        } else {
            value
        };
        lines.push(format!("{key:<key_width$}  {value}"));
    }
    lines.join("\n")
}

pub fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn colorize(value: &str) -> String {
    let code = match value.to_ascii_lowercase().as_str() {
        "true" | "remote" => Some("32"),
        "misleading" | "uncertain" | "fallback" => Some("33"),
        "false" | "error" => Some("31"),
        _ => None,
    };
    code.map_or_else(|| value.to_string(), |code| paint(value, code))
}

/// Wrap `value` in an ANSI SGR sequence.
pub fn paint(value: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<(String, String)> {
        vec![
            ("model".into(), "gpt-4o-mini".into()),
            ("max_attempts".into(), "3".into()),
        ]
    }

    #[test]
    fn keys_are_aligned() {
        let table = render_key_value_table(
            &rows(),
            TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("key"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2].find("gpt"), lines[3].find('3'));
    }

    #[test]
    fn long_values_are_truncated_to_width() {
        let rows = vec![("k".to_string(), "x".repeat(200))];
        let table = render_key_value_table(
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        let last = table.lines().last().unwrap();
        assert!(last.ends_with('…'));
        assert!(last.chars().count() <= 40);
    }

    #[test]
    fn verdict_labels_are_colored() {
        assert_eq!(colorize("FALSE"), "\u{1b}[31mFALSE\u{1b}[0m");
        assert_eq!(colorize("gpt-4o-mini"), "gpt-4o-mini");
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_text("abc", 5), "abc");
        assert_eq!(truncate_text("abcdef", 4), "abc…");
    }
}
