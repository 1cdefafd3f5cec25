use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Layout preset shared by every section component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    #[default]
    Default,
    Bento,
    Split,
    Centered,
    Immersive,
    CardGrid,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown layout variant '{0}'")]
pub struct UnknownVariant(pub String);

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Default,
        Variant::Bento,
        Variant::Split,
        Variant::Centered,
        Variant::Immersive,
        Variant::CardGrid,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::Bento => "bento",
            Variant::Split => "split",
            Variant::Centered => "centered",
            Variant::Immersive => "immersive",
            Variant::CardGrid => "card-grid",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for variant in Variant::ALL {
            assert_eq!(variant.as_str().parse::<Variant>(), Ok(variant));
        }
    }

    #[test]
    fn card_grid_uses_kebab_case() {
        assert_eq!(Variant::CardGrid.to_string(), "card-grid");
        assert_eq!(serde_json::to_string(&Variant::CardGrid).expect("json"), "\"card-grid\"");
        assert!("cardGrid".parse::<Variant>().is_err());
    }

    #[test]
    fn default_is_default() {
        assert_eq!(Variant::default(), Variant::Default);
    }
}
