/// Appends `value` to an existing `Vary` header value.
///
/// Existing entries keep their order; entries already present (case-insensitively) are not
/// repeated. Blank fragments left by stray commas are dropped.
pub fn merge_vary(existing: Option<&str>, value: &str) -> String {
    let mut entries: Vec<&str> = existing
        .map(|existing| {
            existing
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let incoming = value.trim();
    if !incoming.is_empty() {
        entries.push(incoming);
    }

    let mut deduped: Vec<&str> = Vec::with_capacity(entries.len());
    for entry in entries {
        if deduped
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(entry))
        {
            continue;
        }
        deduped.push(entry);
    }

    deduped.join(", ")
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
