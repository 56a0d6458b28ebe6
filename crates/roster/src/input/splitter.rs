//! Splitting one raw line into fields.

use super::delimiter::Delimiter;

/// Split a line into raw fields.
///
/// Tab-separated lines are split on every tab. For comma-separated lines a
/// double-quoted span is kept as one field and its surrounding quotes are
/// removed; if the line has an unbalanced quote it is split naively instead.
/// Unquoted fields are returned untrimmed.
pub fn split_row(line: &str, delimiter: Delimiter) -> Vec<&str> {
    match delimiter {
        Delimiter::Tab => line.split('\t').collect(),
        Delimiter::Comma => split_quoted(line, ',').unwrap_or_else(|| line.split(',').collect()),
    }
}

/// Quote-aware split. Returns `None` when a quote is left open.
fn split_quoted(line: &str, delimiter: char) -> Option<Vec<&str>> {
    let mut fields = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;

    for (idx, ch) in line.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delimiter && !in_quotes => {
                fields.push(unquote(&line[start..idx]));
                start = idx + c.len_utf8();
            }
            _ => {}
        }
    }

    if in_quotes {
        return None;
    }

    fields.push(unquote(&line[start..]));
    Some(fields)
}

fn unquote(field: &str) -> &str {
    let trimmed = field.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tab() {
        assert_eq!(
            split_row("Jo\t5551234567\tj@x.com", Delimiter::Tab),
            vec!["Jo", "5551234567", "j@x.com"]
        );
    }

    #[test]
    fn test_tab_ignores_quotes_and_commas() {
        assert_eq!(
            split_row("\"Smith, Jo\"\t5551234567", Delimiter::Tab),
            vec!["\"Smith, Jo\"", "5551234567"]
        );
    }

    #[test]
    fn test_split_comma_untrimmed() {
        assert_eq!(
            split_row("Jo, 5551234567 ,j@x.com", Delimiter::Comma),
            vec!["Jo", " 5551234567 ", "j@x.com"]
        );
    }

    #[test]
    fn test_quoted_comma_is_one_field() {
        assert_eq!(
            split_row("Jo, \"555,0100\" ,j@x.com", Delimiter::Comma),
            vec!["Jo", "555,0100", "j@x.com"]
        );
    }

    #[test]
    fn test_quoted_name() {
        assert_eq!(
            split_row("\"Smith, Jo\",5551234567,j@x.com", Delimiter::Comma),
            vec!["Smith, Jo", "5551234567", "j@x.com"]
        );
    }

    #[test]
    fn test_empty_fields_kept() {
        assert_eq!(split_row("a,,b", Delimiter::Comma), vec!["a", "", "b"]);
        assert_eq!(split_row(",,", Delimiter::Comma), vec!["", "", ""]);
        assert_eq!(split_row("", Delimiter::Tab), vec![""]);
    }

    #[test]
    fn test_unbalanced_quote_falls_back() {
        assert_eq!(
            split_row("\"Jo,5551234567,j@x.com", Delimiter::Comma),
            vec!["\"Jo", "5551234567", "j@x.com"]
        );
    }
}
