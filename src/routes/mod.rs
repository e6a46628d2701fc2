use std::collections::HashMap;

pub mod dashboard;
pub mod donations;
pub mod ngos;
pub mod pages;

/// Decodes a raw query string keeping the first value of every key, the way
/// browsers' `URLSearchParams::get` does. Repeated keys are never an error.
pub(crate) fn first_values(raw: Option<&str>) -> HashMap<String, String> {
    let mut out = HashMap::new();
    for (key, value) in url::form_urlencoded::parse(raw.unwrap_or("").as_bytes()) {
        out.entry(key.into_owned()).or_insert_with(|| value.into_owned());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_value_wins() {
        let params = first_values(Some("id=DON1&id=DON2&hash=0x%61"));
        assert_eq!(params.get("id").map(String::as_str), Some("DON1"));
        assert_eq!(params.get("hash").map(String::as_str), Some("0xa"));
    }

    #[test]
    fn missing_query_is_empty() {
        assert!(first_values(None).is_empty());
    }
}
