use std::borrow::Cow;
use std::sync::OnceLock;

use md5::{Digest, Md5};
use regex::Regex;

/// `[[content]]` spans, replaced by the MD5 digest of `content`.
pub struct HashSpan;

impl HashSpan {
    pub const OPEN: &'static str = "[[";

    fn pattern() -> &'static Regex {
        static HASH: OnceLock<Regex> = OnceLock::new();
        HASH.get_or_init(|| Regex::new(r"\[\[(.+?)\]\]").expect("Invalid hash regex"))
    }

    /// Lowercase hex MD5 of the UTF-8 bytes of `content`.
    pub fn digest(content: &str) -> String {
        format!("{:x}", Md5::digest(content.as_bytes()))
    }

    /// Replace every bracketed span, brackets included, with its digest.
    pub fn apply(text: &str) -> Cow<'_, str> {
        if !text.contains(Self::OPEN) {
            return Cow::Borrowed(text);
        }
        Self::pattern().replace_all(text, |caps: &regex::Captures<'_>| Self::digest(&caps[1]))
    }
}
