//! Share-intent URLs.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    WhatsApp,
    Twitter,
}

impl SharePlatform {
    pub fn label(self) -> &'static str {
        match self {
            SharePlatform::WhatsApp => "WhatsApp",
            SharePlatform::Twitter => "Twitter",
        }
    }

    /// Prefilled share URL carrying `message` and `page_url`.
    pub fn intent_url(self, page_url: &str, message: &str) -> String {
        let url = encode_uri_component(page_url);
        let text = encode_uri_component(message);
        match self {
            SharePlatform::WhatsApp => format!("https://wa.me/?text={}%20{}", text, url),
            SharePlatform::Twitter => {
                format!("https://twitter.com/intent/tweet?text={}&url={}", text, url)
            }
        }
    }
}

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, the set JavaScript's
/// `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSAGE: &str = "I'm running DKD 2026! March 1st - Are you in? Join me! 🏃";

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("abc-XYZ_0.9"), "abc-XYZ_0.9");
        assert_eq!(encode_uri_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(
            encode_uri_component("http://localhost:8000/?x=1#top"),
            "http%3A%2F%2Flocalhost%3A8000%2F%3Fx%3D1%23top"
        );
        assert_eq!(encode_uri_component("🏃"), "%F0%9F%8F%83");
        assert_eq!(encode_uri_component("it's (ok)!*~"), "it's%20(ok)!*~");
    }

    #[test]
    fn test_whatsapp_intent() {
        let url = SharePlatform::WhatsApp.intent_url("http://localhost:8000/", MESSAGE);
        assert_eq!(
            url,
            "https://wa.me/?text=I'm%20running%20DKD%202026!%20March%201st%20-%20Are%20you%20in%3F%20Join%20me!%20%F0%9F%8F%83%20http%3A%2F%2Flocalhost%3A8000%2F"
        );
    }

    #[test]
    fn test_twitter_intent() {
        let url = SharePlatform::Twitter.intent_url("http://localhost:8000/", "Go");
        assert_eq!(
            url,
            "https://twitter.com/intent/tweet?text=Go&url=http%3A%2F%2Flocalhost%3A8000%2F"
        );
    }
}
