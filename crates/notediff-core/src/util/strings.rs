pub fn string_concatenate<I, S>(items: I, separator: &str) -> String
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = String::new();
    let mut first = true;

    for item in items {
        if !first {
            result.push_str(separator);
        }
        result.push_str(item.as_ref());
        first = false;
    }

    result
}

/// Renders items as `"a", "b", "c"`.
pub fn quote_join<I, S>(items: I) -> String
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    string_concatenate(items.map(|s| format!("\"{}\"", s.as_ref())), ", ")
}

pub fn normalize_spaces(s: &str, conflate_nbsp: bool) -> String {
    if conflate_nbsp {
        s.replace('\u{00A0}', " ")
    } else {
        s.to_string()
    }
}
