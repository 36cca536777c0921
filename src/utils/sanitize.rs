use percent_encoding::percent_decode_str;

const URL_SAFE_PUNCTUATION: &str = "$-_.+!*'(),{}|\\^~[]`<>#%\";/?:@&=";

fn is_url_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || URL_SAFE_PUNCTUATION.contains(c)
}

/// Decode, trim and strip a single captured path fragment.
///
/// Bytes that are not valid UTF-8 are dropped along with every other
/// character outside the URL-safe set.
pub fn sanitize_argument(raw: &str) -> String {
    let plus_decoded = raw.replace('+', " ");
    percent_decode_str(&plus_decoded)
        .decode_utf8_lossy()
        .trim()
        .chars()
        .filter(|c| is_url_safe(*c))
        .collect()
}

/// Sanitize captured path arguments, one output per input, in order.
pub fn sanitize_arguments<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter().map(|arg| sanitize_argument(arg.as_ref())).collect()
}
