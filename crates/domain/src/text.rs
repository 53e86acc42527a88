//! Text helpers used by the endpoint accessors.

/// Returns true if the value is absent or the empty string.
#[must_use]
pub fn is_empty(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

/// Removes `remove` from the end of `value` if it is there exactly once at the end.
///
/// The value is returned unchanged when either argument is empty or when
/// `value` does not end with `remove`. Only a single occurrence is removed.
///
/// # Examples
///
/// ```
/// use endpoints_domain::remove_end;
///
/// assert_eq!(remove_end("https://x.example.com/", "/"), "https://x.example.com");
/// assert_eq!(remove_end("https://x.example.com", "/"), "https://x.example.com");
/// assert_eq!(remove_end("a//", "/"), "a/");
/// ```
#[must_use]
pub fn remove_end<'a>(value: &'a str, remove: &str) -> &'a str {
    if value.is_empty() || remove.is_empty() {
        return value;
    }
    value.strip_suffix(remove).unwrap_or(value)
}

/// Substitutes `arg` into the first `%s` of `template`.
///
/// `%%` is an escaped percent sign and renders as `%`. Any other `%`
/// sequence, and any `%s` after the first, is copied through untouched.
/// A template without `%s` comes back unchanged apart from `%%` escapes.
///
/// # Examples
///
/// ```
/// use endpoints_domain::format_template;
///
/// assert_eq!(
///     format_template("https://%s.example.com", "acme"),
///     "https://acme.example.com"
/// );
/// ```
#[must_use]
pub fn format_template(template: &str, arg: &str) -> String {
    let mut result = String::with_capacity(template.len() + arg.len());
    let mut substituted = false;
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            result.push(ch);
            continue;
        }
        match chars.peek() {
            Some('%') => {
                chars.next();
                result.push('%');
            }
            Some('s') if !substituted => {
                chars.next();
                result.push_str(arg);
                substituted = true;
            }
            _ => result.push('%'),
        }
    }

    result
}
