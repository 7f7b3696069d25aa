//! Normalized multi-value header collection.

/// Header collection with case-insensitive, canonicalized names.
///
/// Names are unified to `Capitalized-Hyphenated` form (`content-type` and
/// `CONTENT-TYPE` both target the `Content-Type` slot). Each slot holds one
/// or more values; insertion order of distinct names is preserved so the
/// emitted header block is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, Vec<String>)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a header value.
    ///
    /// With `replace = true` any existing values under the same canonical
    /// name are discarded; with `replace = false` the value accumulates in
    /// the slot (repeated headers on the wire).
    pub fn add(&mut self, name: &str, value: impl Into<String>, replace: bool) {
        let canonical = canonicalize(name);
        let value = value.into();

        match self.entries.iter_mut().find(|(n, _)| *n == canonical) {
            Some((_, values)) => {
                if replace {
                    values.clear();
                }
                values.push(value);
            }
            None => self.entries.push((canonical, vec![value])),
        }
    }

    /// Returns all values for a header name, or `None` if unset.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        let canonical = canonicalize(name);
        self.entries
            .iter()
            .find(|(n, _)| *n == canonical)
            .map(|(_, v)| v.as_slice())
    }

    /// Removes every header.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, value)` pairs, expanding multi-value slots into
    /// repeated entries in wire order.
    pub fn iter_flat(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .flat_map(|(n, vs)| vs.iter().map(move |v| (n.as_str(), v.as_str())))
    }
}

/// Canonicalizes a header name: lowercases it, then capitalizes the first
/// letter of each hyphen-separated segment.
fn canonicalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_segment_start = true;

    for c in name.chars() {
        if c == '-' {
            out.push('-');
            at_segment_start = true;
        } else if at_segment_start {
            out.extend(c.to_uppercase());
            at_segment_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize() {
        assert_eq!(canonicalize("content-type"), "Content-Type");
        assert_eq!(canonicalize("CONTENT-TYPE"), "Content-Type");
        assert_eq!(canonicalize("x-request-id"), "X-Request-Id");
        assert_eq!(canonicalize("Location"), "Location");
    }

    #[test]
    fn test_replace_unifies_case_variants() {
        let mut headers = Headers::new();
        headers.add("content-type", "text/plain", true);
        headers.add("Content-Type", "application/json", true);

        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.get("CONTENT-TYPE").unwrap(),
            &["application/json".to_string()]
        );
    }

    #[test]
    fn test_multi_value_accumulation() {
        let mut headers = Headers::new();
        headers.add("set-cookie", "a=1", false);
        headers.add("Set-Cookie", "b=2", false);

        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.get("set-cookie").unwrap(),
            &["a=1".to_string(), "b=2".to_string()]
        );

        let flat: Vec<_> = headers.iter_flat().collect();
        assert_eq!(flat, vec![("Set-Cookie", "a=1"), ("Set-Cookie", "b=2")]);
    }

    #[test]
    fn test_replace_after_accumulation() {
        let mut headers = Headers::new();
        headers.add("Accept", "text/html", false);
        headers.add("Accept", "application/json", false);
        headers.add("accept", "*/*", true);

        assert_eq!(headers.get("Accept").unwrap(), &["*/*".to_string()]);
    }

    #[test]
    fn test_clear() {
        let mut headers = Headers::new();
        headers.add("Content-Type", "text/html", true);
        headers.clear();
        assert!(headers.is_empty());
        assert!(headers.get("Content-Type").is_none());
    }
}
