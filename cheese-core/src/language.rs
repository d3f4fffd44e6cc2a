use std::{fmt, str::FromStr};

/// A language variant of a project's strings.
///
/// `Base` is the project's default language: the strings living in the
/// unqualified resource folder. It never carries a tag and is never equal to
/// any `Tag`, including one whose text happens to read like a base language
/// name (for example `"en"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LanguageId {
    /// The unqualified, default language of the project.
    #[default]
    Base,
    /// A language qualifier as found in the source tree (e.g. `fr`, `zh`).
    Tag(String),
}

impl LanguageId {
    /// Create a tagged language identifier.
    ///
    /// The tag is taken as-is; no well-formedness checks are made.
    pub fn tag(tag: impl Into<String>) -> Self {
        Self::Tag(tag.into())
    }

    /// Whether this is the base sentinel.
    pub fn is_base(&self) -> bool {
        matches!(self, Self::Base)
    }

    /// The tag text, or `None` for the base language.
    pub fn as_tag(&self) -> Option<&str> {
        match self {
            Self::Base => None,
            Self::Tag(tag) => Some(tag),
        }
    }
}

impl FromStr for LanguageId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("language tag cannot be empty".to_string());
        }
        Ok(Self::Tag(trimmed.to_string()))
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "(base)"),
            Self::Tag(tag) => write!(f, "{}", tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_base() {
        assert!(LanguageId::Base.is_base());
        assert!(!LanguageId::tag("fr").is_base());
        assert!(LanguageId::default().is_base());
    }

    #[test]
    fn test_base_never_equals_a_tag() {
        assert_ne!(LanguageId::Base, LanguageId::tag("en"));
        assert_ne!(LanguageId::Base, LanguageId::tag("Base"));
        assert_ne!(LanguageId::Base, LanguageId::tag("NONE"));
    }

    #[test]
    fn test_as_tag() {
        assert_eq!(LanguageId::Base.as_tag(), None);
        assert_eq!(LanguageId::tag("zh").as_tag(), Some("zh"));
    }

    #[test]
    fn test_ordering() {
        let mut ids = vec![
            LanguageId::tag("fr"),
            LanguageId::Base,
            LanguageId::tag("de"),
        ];
        ids.sort();
        assert_eq!(
            ids,
            vec![LanguageId::Base, LanguageId::tag("de"), LanguageId::tag("fr")]
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("fr".parse::<LanguageId>().unwrap(), LanguageId::tag("fr"));
        assert_eq!(
            " zh-rTW ".parse::<LanguageId>().unwrap(),
            LanguageId::tag("zh-rTW")
        );
        assert!("".parse::<LanguageId>().is_err());
        assert!("   ".parse::<LanguageId>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(LanguageId::tag("fr").to_string(), "fr");
        assert_eq!(LanguageId::Base.to_string(), "(base)");
    }
}
