use thiserror::Error;
use url::Url;

/// Reasons a feed link is refused before handing it to the system browser.
#[derive(Error, Debug)]
pub enum UrlValidationError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Unsupported scheme: {0} (only http/https allowed)")]
    UnsupportedScheme(String),
}

/// Validates a link taken from feed content before opening it.
///
/// Feed links are untrusted: only `http` and `https` URLs are accepted, so
/// `file://`, `javascript:` and custom handlers never reach the OS opener.
///
/// ```
/// use coinboard::util::validate_url_for_open;
///
/// assert!(validate_url_for_open("https://example.com/story").is_ok());
/// assert!(validate_url_for_open("file:///etc/passwd").is_err());
/// ```
pub fn validate_url_for_open(link: &str) -> Result<Url, UrlValidationError> {
    let url = Url::parse(link.trim())?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(UrlValidationError::UnsupportedScheme(scheme.to_owned())),
    }

    Ok(url)
}
