use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::DomainError;

/// Output languages supported by the analysis and the UI string tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "id")]
    Indonesian,
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "id" => Some(Language::Indonesian),
            "en" => Some(Language::English),
            _ => None,
        }
    }

    /// Resolve a request's language code, falling back to Indonesian when the
    /// code is absent or unknown.
    pub fn from_code_or_default(code: Option<&str>) -> Self {
        code.and_then(Self::from_code).unwrap_or_default()
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Indonesian => "id",
            Language::English => "en",
        }
    }

    /// English name of the language, as spelled out to the model.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Indonesian => "Indonesian",
            Language::English => "English",
        }
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| {
            DomainError::invalid_input(format!("unsupported language '{s}' (expected 'id' or 'en')"))
        })
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_code() {
        assert_eq!(Language::from_code("id"), Some(Language::Indonesian));
        assert_eq!(Language::from_code("EN"), Some(Language::English));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn test_unknown_code_falls_back_to_indonesian() {
        assert_eq!(Language::from_code_or_default(Some("de")), Language::Indonesian);
        assert_eq!(Language::from_code_or_default(None), Language::Indonesian);
        assert_eq!(Language::from_code_or_default(Some("en")), Language::English);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("en".parse::<Language>().is_ok());
        let err = "xx".parse::<Language>().unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Language::English).unwrap(), "\"en\"");
        let lang: Language = serde_json::from_str("\"id\"").unwrap();
        assert_eq!(lang, Language::Indonesian);
    }
}
