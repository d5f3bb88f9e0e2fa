// Append query parameters to a URL in the given order.
// Values are percent encoded; empty values are kept since the
// news endpoint requires q to be present even when blank.
pub fn make_call(call: &str, paras: &[(&str, &str)]) -> String {
    let mut call = call.to_string();
    let mut sep = if call.contains('?') { "&" } else { "?" };

    for (k, v) in paras {
        let pv = format!("{sep}{k}={}", urlencoding::encode(v));
        call = format!("{call}{pv}");
        sep = "&";
    }

    call
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_call_appends_in_order() {
        let call = make_call("https://example.com/v2/everything", &[("q", "rust"), ("page", "2")]);
        assert_eq!(call, "https://example.com/v2/everything?q=rust&page=2");
    }

    #[test]
    fn test_make_call_escapes_values() {
        let call = make_call("https://example.com/search", &[("q", "climate change & policy")]);
        assert_eq!(call, "https://example.com/search?q=climate%20change%20%26%20policy");
    }

    #[test]
    fn test_make_call_continues_existing_query_string() {
        let call = make_call("https://example.com/search?lang=en", &[("q", "rust")]);
        assert_eq!(call, "https://example.com/search?lang=en&q=rust");
    }

    #[test]
    fn test_make_call_keeps_empty_values() {
        let call = make_call("https://example.com/search", &[("q", ""), ("page", "1")]);
        assert_eq!(call, "https://example.com/search?q=&page=1");
    }
}
