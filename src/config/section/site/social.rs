//! Social link entries.

use serde::{Deserialize, Serialize};

/// A `[label, url]` pair rendered verbatim by the theme.
///
/// Serialized as a two-element array so the TOML reads like the list it
/// is: `social = [["github", "https://github.com/me"]]`. Entries with
/// any other number of elements are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct SocialLink(pub String, pub String);

impl TryFrom<Vec<String>> for SocialLink {
    type Error = String;

    fn try_from(parts: Vec<String>) -> Result<Self, Self::Error> {
        let len = parts.len();
        match <[String; 2]>::try_from(parts) {
            Ok([label, url]) => Ok(Self(label, url)),
            Err(_) => Err(format!(
                "social link must be a [label, url] pair, got {len} element(s)"
            )),
        }
    }
}

impl SocialLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self(label.into(), url.into())
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn url(&self) -> &str {
        &self.1
    }

    /// Parse the URL, which must be absolute.
    pub fn parsed_url(&self) -> Result<url::Url, url::ParseError> {
        url::Url::parse(&self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let link = SocialLink::new("stack overflow", "https://stackoverflow.com/users/1");
        assert_eq!(link.label(), "stack overflow");
        assert_eq!(link.url(), "https://stackoverflow.com/users/1");
        assert_eq!(link.parsed_url().unwrap().host_str(), Some("stackoverflow.com"));
    }

    #[test]
    fn test_relative_url_rejected() {
        assert!(SocialLink::new("me", "/about").parsed_url().is_err());
    }

    #[test]
    fn test_pair_shape_required() {
        #[derive(Deserialize)]
        struct Wrapper {
            social: Vec<SocialLink>,
        }

        let ok: Wrapper = toml::from_str("social = [[\"a\", \"https://a.example\"]]").unwrap();
        assert_eq!(ok.social[0].label(), "a");

        assert!(toml::from_str::<Wrapper>("social = [[\"a\"]]").is_err());
        assert!(toml::from_str::<Wrapper>("social = [[\"a\", \"b\", \"c\"]]").is_err());
        assert!(toml::from_str::<Wrapper>("social = [[]]").is_err());
    }

    #[test]
    fn test_extra_element_fails_site_load() {
        let content = "[site]\nsocial = [[\"github\", \"https://github.com/me\", \"extra\"]]";
        let err = crate::config::SiteConfig::parse_with_ignored(content).unwrap_err();
        assert!(format!("{err:?}").contains("[label, url] pair"));
    }

    #[test]
    fn test_serializes_as_pair() {
        let value = toml::Value::try_from(SocialLink::new("a", "https://a.example")).unwrap();
        assert_eq!(
            value,
            toml::Value::Array(vec!["a".into(), "https://a.example".into()])
        );
    }
}
