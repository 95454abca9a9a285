//! Field-level splitting and joining of a single line.

/// Splits `line` on `delimiter`. A trailing empty segment is dropped, so
/// `"a,b,"` yields `["a", "b"]` and `""` yields nothing.
pub fn split(line: &str, delimiter: &str) -> Vec<String> {
    let mut fields = Vec::new();
    if delimiter.is_empty() {
        if !line.is_empty() {
            fields.push(line.to_string());
        }
        return fields;
    }

    let mut rest = line;
    while let Some(pos) = rest.find(delimiter) {
        fields.push(rest[..pos].to_string());
        rest = &rest[pos + delimiter.len()..];
    }

    if !rest.is_empty() {
        fields.push(rest.to_string());
    }

    fields
}

/// Joins `fields` with `delimiter` between consecutive fields only.
pub fn combine<S: AsRef<str>>(fields: &[S], delimiter: &str) -> String {
    let mut line = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            line.push_str(delimiter);
        }
        line.push_str(field.as_ref());
    }
    line
}
