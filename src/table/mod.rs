pub mod extend;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::color::ColorToken;
use crate::path::TokenPath;
use crate::validation::{describe_value, ValidationError, ValidationErrorKind, ValidationResult};

pub use extend::ExtendTokens;

pub const COLORS_SECTION: &str = "colors";
pub const EXTEND_SECTION: &str = "extend";

pub type LookupResult<T> = std::result::Result<T, LookupError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no token at {path}")]
    NotFound { path: TokenPath },
}

/// Validated design tokens: color families plus `extend` categories.
///
/// Built once through [`TokenTable::load`] and only read afterwards; share it
/// by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenTable {
    colors: BTreeMap<String, ColorToken>,
    extend: ExtendTokens,
}

impl TokenTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validates a raw nested document. The first offending node aborts the
    /// load; there is no partially built table.
    pub fn load(raw: &Value) -> ValidationResult<Self> {
        let root = TokenPath::root();
        let Some(sections) = raw.as_object() else {
            return Err(ValidationError::unexpected_shape(
                root,
                format!("token document must be a mapping, found {}", describe_value(raw)),
            ));
        };

        let mut table = TokenTable::empty();
        for (section, value) in sections {
            let path = root.child(section.as_str());
            match section.as_str() {
                COLORS_SECTION => table.colors = load_colors(&path, section_map(&path, value)?)?,
                EXTEND_SECTION => {
                    table.extend = ExtendTokens::from_raw(&path, section_map(&path, value)?)?
                }
                _ => {
                    return Err(ValidationError::new(
                        ValidationErrorKind::UnknownSection,
                        path,
                        format!("expected `{COLORS_SECTION}` or `{EXTEND_SECTION}`"),
                    ))
                }
            }
        }

        tracing::debug!(
            color_families = table.colors.len(),
            extension_tokens = table.extend.token_count(),
            "loaded token table"
        );
        Ok(table)
    }

    /// Looks up a leaf by path segments, e.g. `["colors", "primary", "500"]`.
    pub fn get<S: AsRef<str>>(&self, path: &[S]) -> LookupResult<&str> {
        self.resolve(path).ok_or_else(|| LookupError::NotFound {
            path: TokenPath::from_segments(path.iter().map(AsRef::<str>::as_ref)),
        })
    }

    /// Dotted-string convenience over [`TokenTable::get`]. Token names that
    /// contain a `.` must be quoted, as [`TokenPath`]'s `Display` writes them:
    /// `extend.spacing."0.5"`.
    pub fn get_dotted(&self, dotted: &str) -> LookupResult<&str> {
        self.get(TokenPath::parse(dotted).segments())
    }

    fn resolve<S: AsRef<str>>(&self, path: &[S]) -> Option<&str> {
        let (section, rest) = path.split_first()?;
        match (AsRef::<str>::as_ref(section), rest) {
            (COLORS_SECTION, [family, shade @ ..]) => self
                .colors
                .get(AsRef::<str>::as_ref(family))?
                .get(shade)
                .map(|color| color.as_str()),
            (EXTEND_SECTION, [category, token]) => self
                .extend
                .get(AsRef::<str>::as_ref(category), AsRef::<str>::as_ref(token)),
            _ => None,
        }
    }

    /// Deep merge where `overrides` wins per key and everything it leaves out
    /// is kept from `base`.
    pub fn merge(base: &TokenTable, overrides: &TokenTable) -> TokenTable {
        base.merged_with(overrides)
    }

    pub fn merged_with(&self, overrides: &TokenTable) -> TokenTable {
        let mut colors = self.colors.clone();
        for (family, token) in &overrides.colors {
            let merged = match colors.get(family) {
                Some(existing) => {
                    if std::mem::discriminant(existing) != std::mem::discriminant(token) {
                        tracing::warn!(
                            family = %family,
                            from = existing.kind_name(),
                            to = token.kind_name(),
                            "override replaces color family with a different shape"
                        );
                    }
                    existing.merged_with(token)
                }
                None => token.clone(),
            };
            colors.insert(family.clone(), merged);
        }

        TokenTable {
            colors,
            extend: self.extend.merged_with(&overrides.extend),
        }
    }

    /// Raw nested form accepted by [`TokenTable::load`]. Empty sections are
    /// omitted.
    pub fn to_raw(&self) -> Value {
        let mut root = Map::new();
        if !self.colors.is_empty() {
            let colors = self
                .colors
                .iter()
                .map(|(family, token)| (family.clone(), token.to_raw()))
                .collect();
            root.insert(COLORS_SECTION.to_string(), Value::Object(colors));
        }
        if !self.extend.is_empty() {
            root.insert(EXTEND_SECTION.to_string(), self.extend.to_raw());
        }
        Value::Object(root)
    }

    /// Every leaf with its full path, colors first, each section in key order.
    pub fn leaves(&self) -> impl Iterator<Item = (TokenPath, &str)> {
        let colors_root = TokenPath::root().child(COLORS_SECTION);
        let extend_root = TokenPath::root().child(EXTEND_SECTION);

        let mut leaves = Vec::new();
        for (family, token) in &self.colors {
            let family_path = colors_root.child(family.as_str());
            for (key, color) in token.leaves() {
                let path = match key {
                    Some(key) => family_path.child(key),
                    None => family_path.clone(),
                };
                leaves.push((path, color.as_str()));
            }
        }
        for (category, tokens) in self.extend.categories() {
            let category_path = extend_root.child(category);
            for (token, value) in tokens {
                leaves.push((category_path.child(token.as_str()), value.as_str()));
            }
        }
        leaves.into_iter()
    }

    pub fn colors(&self) -> impl Iterator<Item = (&str, &ColorToken)> {
        self.colors
            .iter()
            .map(|(family, token)| (family.as_str(), token))
    }

    pub fn color(&self, family: &str) -> Option<&ColorToken> {
        self.colors.get(family)
    }

    pub fn extend(&self) -> &ExtendTokens {
        &self.extend
    }

    pub fn extend_category(&self, category: &str) -> Option<&BTreeMap<String, String>> {
        self.extend.category(category)
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.extend.is_empty()
    }
}

impl Serialize for TokenTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_raw().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TokenTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        TokenTable::load(&raw).map_err(serde::de::Error::custom)
    }
}

fn section_map<'a>(path: &TokenPath, value: &'a Value) -> ValidationResult<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        ValidationError::unexpected_shape(
            path.clone(),
            format!("section must be a mapping, found {}", describe_value(value)),
        )
    })
}

fn load_colors(
    path: &TokenPath,
    raw: &Map<String, Value>,
) -> ValidationResult<BTreeMap<String, ColorToken>> {
    raw.iter()
        .map(|(family, value)| {
            ColorToken::from_raw(&path.child(family.as_str()), value)
                .map(|token| (family.clone(), token))
        })
        .collect()
}
