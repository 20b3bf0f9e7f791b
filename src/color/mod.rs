use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Value};

use crate::path::TokenPath;
use crate::validation::{describe_value, ValidationError, ValidationResult};

pub const SEMANTIC_LIGHT: &str = "light";
pub const SEMANTIC_DEFAULT: &str = "DEFAULT";
pub const SEMANTIC_DARK: &str = "dark";
pub const SEMANTIC_KEYS: [&str; 3] = [SEMANTIC_LIGHT, SEMANTIC_DEFAULT, SEMANTIC_DARK];

/// `#RRGGBB` literal, stored exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    pub fn parse(value: &str) -> Option<Self> {
        let digits = value.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_raw(path: &TokenPath, value: &Value) -> ValidationResult<Self> {
        let Some(literal) = value.as_str() else {
            return Err(ValidationError::malformed_color(
                path.clone(),
                format!("expected a hex string, found {}", describe_value(value)),
            ));
        };
        Self::parse(literal).ok_or_else(|| {
            ValidationError::malformed_color(
                path.clone(),
                format!("`{literal}` does not match #RRGGBB"),
            )
        })
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Closed set of shade steps, ordered from lightest to darkest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShadeKey {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
}

impl ShadeKey {
    pub const ALL: [ShadeKey; 10] = [
        ShadeKey::S50,
        ShadeKey::S100,
        ShadeKey::S200,
        ShadeKey::S300,
        ShadeKey::S400,
        ShadeKey::S500,
        ShadeKey::S600,
        ShadeKey::S700,
        ShadeKey::S800,
        ShadeKey::S900,
    ];

    pub const fn value(self) -> u16 {
        match self {
            ShadeKey::S50 => 50,
            ShadeKey::S100 => 100,
            ShadeKey::S200 => 200,
            ShadeKey::S300 => 300,
            ShadeKey::S400 => 400,
            ShadeKey::S500 => 500,
            ShadeKey::S600 => 600,
            ShadeKey::S700 => 700,
            ShadeKey::S800 => 800,
            ShadeKey::S900 => 900,
        }
    }

    pub fn from_value(value: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.value() == value)
    }

    /// Exact decimal spelling only: `"050"` and `" 50"` are not shade keys.
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|shade| shade.to_string() == key)
    }
}

impl fmt::Display for ShadeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShadeScale {
    shades: BTreeMap<ShadeKey, HexColor>,
}

impl ShadeScale {
    pub fn get(&self, key: ShadeKey) -> Option<&HexColor> {
        self.shades.get(&key)
    }

    pub fn insert(&mut self, key: ShadeKey, color: HexColor) -> Option<HexColor> {
        self.shades.insert(key, color)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShadeKey, &HexColor)> {
        self.shades.iter().map(|(key, color)| (*key, color))
    }

    pub fn len(&self) -> usize {
        self.shades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }

    fn merged_with(&self, overrides: &ShadeScale) -> ShadeScale {
        let mut shades = self.shades.clone();
        shades.extend(
            overrides
                .shades
                .iter()
                .map(|(key, color)| (*key, color.clone())),
        );
        ShadeScale { shades }
    }

    fn from_raw(path: &TokenPath, raw: &Map<String, Value>) -> ValidationResult<Self> {
        let mut scale = ShadeScale::default();
        for (key, value) in raw {
            let child = path.child(key.as_str());
            let shade = ShadeKey::parse(key)
                .ok_or_else(|| ValidationError::unknown_shade_key(child.clone(), key))?;
            scale.insert(shade, HexColor::from_raw(&child, value)?);
        }
        Ok(scale)
    }
}

impl FromIterator<(ShadeKey, HexColor)> for ShadeScale {
    fn from_iter<T: IntoIterator<Item = (ShadeKey, HexColor)>>(iter: T) -> Self {
        Self {
            shades: iter.into_iter().collect(),
        }
    }
}

/// State color with exactly three variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticTriple {
    pub light: HexColor,
    pub default: HexColor,
    pub dark: HexColor,
}

impl SemanticTriple {
    pub fn get(&self, key: &str) -> Option<&HexColor> {
        match key {
            SEMANTIC_LIGHT => Some(&self.light),
            SEMANTIC_DEFAULT => Some(&self.default),
            SEMANTIC_DARK => Some(&self.dark),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &HexColor)> {
        [
            (SEMANTIC_LIGHT, &self.light),
            (SEMANTIC_DEFAULT, &self.default),
            (SEMANTIC_DARK, &self.dark),
        ]
        .into_iter()
    }

    fn from_raw(path: &TokenPath, raw: &Map<String, Value>) -> ValidationResult<Self> {
        if let Some(extra) = raw.keys().find(|key| !SEMANTIC_KEYS.contains(&key.as_str())) {
            return Err(ValidationError::incomplete_semantic_triple(
                path.child(extra.as_str()),
                format!("unexpected key `{extra}`; expected only light, DEFAULT and dark"),
            ));
        }
        let field = |key: &str| -> ValidationResult<HexColor> {
            let value = raw.get(key).ok_or_else(|| {
                ValidationError::incomplete_semantic_triple(
                    path.clone(),
                    format!("missing `{key}`"),
                )
            })?;
            HexColor::from_raw(&path.child(key), value)
        };
        Ok(Self {
            light: field(SEMANTIC_LIGHT)?,
            default: field(SEMANTIC_DEFAULT)?,
            dark: field(SEMANTIC_DARK)?,
        })
    }
}

/// One entry of the `colors` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorToken {
    Literal(HexColor),
    Scale(ShadeScale),
    Semantic(SemanticTriple),
}

impl ColorToken {
    /// Classifies by key shape: any semantic key makes the mapping a triple,
    /// every other mapping is a shade scale.
    pub(crate) fn from_raw(path: &TokenPath, value: &Value) -> ValidationResult<Self> {
        match value {
            Value::String(_) => HexColor::from_raw(path, value).map(ColorToken::Literal),
            Value::Object(raw) => {
                let is_semantic = raw.keys().any(|key| SEMANTIC_KEYS.contains(&key.as_str()));
                if is_semantic {
                    SemanticTriple::from_raw(path, raw).map(ColorToken::Semantic)
                } else {
                    ShadeScale::from_raw(path, raw).map(ColorToken::Scale)
                }
            }
            other => Err(ValidationError::malformed_color(
                path.clone(),
                format!(
                    "expected a hex string or a mapping, found {}",
                    describe_value(other)
                ),
            )),
        }
    }

    pub(crate) fn to_raw(&self) -> Value {
        match self {
            ColorToken::Literal(color) => Value::String(color.as_str().to_string()),
            ColorToken::Scale(scale) => Value::Object(
                scale
                    .iter()
                    .map(|(key, color)| (key.to_string(), Value::String(color.as_str().to_string())))
                    .collect(),
            ),
            ColorToken::Semantic(triple) => Value::Object(
                triple
                    .iter()
                    .map(|(key, color)| (key.to_string(), Value::String(color.as_str().to_string())))
                    .collect(),
            ),
        }
    }

    /// Resolves the remaining path segments below this color family.
    pub fn get<S: AsRef<str>>(&self, rest: &[S]) -> Option<&HexColor> {
        match (self, rest) {
            (ColorToken::Literal(color), []) => Some(color),
            (ColorToken::Scale(scale), [key]) => scale.get(ShadeKey::parse(AsRef::<str>::as_ref(key))?),
            (ColorToken::Semantic(triple), [key]) => triple.get(AsRef::<str>::as_ref(key)),
            _ => None,
        }
    }

    pub fn leaves(&self) -> Vec<(Option<String>, &HexColor)> {
        match self {
            ColorToken::Literal(color) => vec![(None, color)],
            ColorToken::Scale(scale) => scale
                .iter()
                .map(|(key, color)| (Some(key.to_string()), color))
                .collect(),
            ColorToken::Semantic(triple) => triple
                .iter()
                .map(|(key, color)| (Some(key.to_string()), color))
                .collect(),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            ColorToken::Literal(_) => "literal",
            ColorToken::Scale(_) => "shade scale",
            ColorToken::Semantic(_) => "semantic triple",
        }
    }

    /// Scales merge shade-by-shade; any other combination is replaced whole.
    pub(crate) fn merged_with(&self, overrides: &ColorToken) -> ColorToken {
        match (self, overrides) {
            (ColorToken::Scale(base), ColorToken::Scale(over)) => {
                ColorToken::Scale(base.merged_with(over))
            }
            _ => overrides.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;
    use serde_json::json;

    fn family(value: Value) -> ValidationResult<ColorToken> {
        ColorToken::from_raw(&TokenPath::parse("colors.family"), &value)
    }

    #[test]
    fn hex_color_accepts_six_digits_in_either_case() {
        assert!(HexColor::parse("#FFFFFF").is_some());
        assert!(HexColor::parse("#3b82f6").is_some());
        assert_eq!(
            HexColor::parse("#1E3a8A").as_ref().map(HexColor::as_str),
            Some("#1E3a8A")
        );
    }

    #[test]
    fn hex_color_rejects_short_long_and_unprefixed_values() {
        assert_eq!(HexColor::parse("#fff"), None);
        assert_eq!(HexColor::parse("#ffffff00"), None);
        assert_eq!(HexColor::parse("ffffff"), None);
        assert_eq!(HexColor::parse("#zzzzzz"), None);
        assert_eq!(HexColor::parse("#+f+f+f"), None);
        assert_eq!(HexColor::parse(""), None);
    }

    #[test]
    fn shade_key_parse_is_exact() {
        assert_eq!(ShadeKey::parse("50"), Some(ShadeKey::S50));
        assert_eq!(ShadeKey::parse("900"), Some(ShadeKey::S900));
        assert_eq!(ShadeKey::parse("450"), None);
        assert_eq!(ShadeKey::parse("050"), None);
        assert_eq!(ShadeKey::parse("950"), None);
        assert_eq!(ShadeKey::from_value(300), Some(ShadeKey::S300));
    }

    #[test]
    fn shade_keys_are_ordered_light_to_dark() {
        let values: Vec<u16> = ShadeKey::ALL.iter().map(|key| key.value()).collect();
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(values, sorted);
        assert!(ShadeKey::S50 < ShadeKey::S900);
    }

    #[test]
    fn mapping_with_semantic_keys_is_a_triple() {
        let token = family(json!({"light": "#86efac", "DEFAULT": "#22c55e", "dark": "#15803d"}))
            .unwrap();
        assert_eq!(token.kind_name(), "semantic triple");
        assert_eq!(token.get(&["DEFAULT"]).map(HexColor::as_str), Some("#22c55e"));
    }

    #[test]
    fn triple_missing_a_key_is_incomplete() {
        let error = family(json!({"light": "#86efac", "DEFAULT": "#22c55e"})).unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::IncompleteSemanticTriple);
        assert_eq!(error.path.to_string(), "colors.family");
    }

    #[test]
    fn triple_with_extra_key_is_incomplete() {
        let error = family(json!({
            "light": "#86efac",
            "DEFAULT": "#22c55e",
            "dark": "#15803d",
            "500": "#000000"
        }))
        .unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::IncompleteSemanticTriple);
        assert_eq!(error.path.to_string(), "colors.family.500");
    }

    #[test]
    fn scale_rejects_keys_outside_closed_set() {
        let error = family(json!({"50": "#eff6ff", "xl": "#000000"})).unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::UnknownShadeKey);
        assert_eq!(error.path.to_string(), "colors.family.xl");
    }

    #[test]
    fn non_string_leaf_is_malformed_color() {
        let error = family(json!({"50": 12})).unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::MalformedColor);
        assert_eq!(error.path.to_string(), "colors.family.50");

        let error = family(json!(true)).unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::MalformedColor);
    }

    #[test]
    fn scale_merge_keeps_base_shades_and_replaces_overridden_ones() {
        let base = family(json!({"50": "#eff6ff", "100": "#dbeafe"})).unwrap();
        let over = family(json!({"100": "#000000", "200": "#bfdbfe"})).unwrap();
        let merged = base.merged_with(&over);
        assert_eq!(merged.get(&["50"]).map(HexColor::as_str), Some("#eff6ff"));
        assert_eq!(merged.get(&["100"]).map(HexColor::as_str), Some("#000000"));
        assert_eq!(merged.get(&["200"]).map(HexColor::as_str), Some("#bfdbfe"));
    }

    #[test]
    fn merge_across_shapes_replaces_whole_family() {
        let base = family(json!({"50": "#eff6ff"})).unwrap();
        let over = family(json!("#123456")).unwrap();
        assert_eq!(base.merged_with(&over), over);
    }
}
