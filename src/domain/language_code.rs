use std::fmt;
use std::str::FromStr;

/// Transcription language as a `ll-CC` tag, e.g. `es-US` or `en-GB`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self("es-US".to_string())
    }
}

impl FromStr for LanguageCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (language, region) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid language code: {}. Expected form ll-CC", s))?;

        let language_ok = (2..=3).contains(&language.len())
            && language.chars().all(|c| c.is_ascii_lowercase());
        let region_ok = region.len() == 2 && region.chars().all(|c| c.is_ascii_uppercase());

        if language_ok && region_ok {
            Ok(Self(s.to_string()))
        } else {
            Err(format!("Invalid language code: {}. Expected form ll-CC", s))
        }
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
