//! Minimal CSV record handling: quoted fields, doubled-quote escapes, CRLF
//! tolerant. Enough for roster files; anything fancier belongs server-side.

/// Split one line into fields, honoring quotes.
pub fn parse_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(ch),
        }
    }
    fields.push(field);
    fields
}

/// Quote a field when it needs it.
pub fn quote(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Join fields into one CSV line.
pub fn to_line<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fields
        .into_iter()
        .map(|f| quote(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Non-empty lines of a roster file, with their 1-indexed line numbers.
pub fn lines(text: &str) -> Vec<(usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_quoted_fields() {
        assert_eq!(parse_record("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(
            parse_record(r#""Nguyen, Van A",240327,"say ""hi""""#),
            vec!["Nguyen, Van A", "240327", r#"say "hi""#]
        );
    }

    #[test]
    fn empty_fields_survive() {
        assert_eq!(parse_record("a,,c"), vec!["a", "", "c"]);
        assert_eq!(parse_record(""), vec![""]);
    }

    #[test]
    fn quote_round_trips_through_parse() {
        for value in ["plain", "with,comma", "with \"quotes\"", "multi\nline"] {
            let line = to_line([value]);
            assert_eq!(parse_record(&line), vec![value.to_string()]);
        }
    }

    #[test]
    fn lines_skip_blanks_and_keep_numbers() {
        let text = "header\r\n\r\nrow one\n   \nrow two\n";
        let collected = lines(text);
        assert_eq!(
            collected,
            vec![(1, "header"), (3, "row one"), (5, "row two")]
        );
    }
}
