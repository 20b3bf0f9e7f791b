use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::path::TokenPath;
use crate::validation::{describe_value, ValidationError, ValidationResult};

pub const BOX_SHADOW: &str = "boxShadow";
pub const SPACING: &str = "spacing";
pub const BORDER_RADIUS: &str = "borderRadius";
pub const FONT_SIZE: &str = "fontSize";
pub const HEIGHT: &str = "height";

/// Categories the theme ships values for. Others are accepted as-is.
pub const KNOWN_CATEGORIES: [&str; 5] = [BOX_SHADOW, SPACING, BORDER_RADIUS, FONT_SIZE, HEIGHT];

/// `extend.<category>.<token>` literals: CSS lengths, shadows, radii.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtendTokens {
    categories: BTreeMap<String, BTreeMap<String, String>>,
}

impl ExtendTokens {
    pub fn category(&self, name: &str) -> Option<&BTreeMap<String, String>> {
        self.categories.get(name)
    }

    pub fn get(&self, category: &str, token: &str) -> Option<&str> {
        self.categories
            .get(category)
            .and_then(|tokens| tokens.get(token))
            .map(String::as_str)
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, String>)> {
        self.categories
            .iter()
            .map(|(name, tokens)| (name.as_str(), tokens))
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn token_count(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }

    pub(crate) fn from_raw(path: &TokenPath, raw: &Map<String, Value>) -> ValidationResult<Self> {
        let mut categories = BTreeMap::new();
        for (name, value) in raw {
            let category_path = path.child(name.as_str());
            let Some(entries) = value.as_object() else {
                return Err(ValidationError::unexpected_shape(
                    category_path,
                    format!(
                        "extension category must be a mapping, found {}",
                        describe_value(value)
                    ),
                ));
            };
            if !KNOWN_CATEGORIES.contains(&name.as_str()) {
                tracing::debug!(category = %name, "accepting extension category outside the built-in set");
            }

            let mut tokens = BTreeMap::new();
            for (token, value) in entries {
                let token_path = category_path.child(token.as_str());
                tokens.insert(token.clone(), extension_value(&token_path, value)?);
            }
            categories.insert(name.clone(), tokens);
        }
        Ok(Self { categories })
    }

    pub(crate) fn to_raw(&self) -> Value {
        Value::Object(
            self.categories
                .iter()
                .map(|(name, tokens)| {
                    let entries = tokens
                        .iter()
                        .map(|(token, value)| (token.clone(), Value::String(value.clone())))
                        .collect();
                    (name.clone(), Value::Object(entries))
                })
                .collect(),
        )
    }

    pub(crate) fn merged_with(&self, overrides: &ExtendTokens) -> ExtendTokens {
        let mut categories = self.categories.clone();
        for (name, tokens) in &overrides.categories {
            categories
                .entry(name.clone())
                .or_default()
                .extend(tokens.iter().map(|(token, value)| (token.clone(), value.clone())));
        }
        ExtendTokens { categories }
    }
}

fn extension_value(path: &TokenPath, value: &Value) -> ValidationResult<String> {
    match value {
        Value::String(literal) if !literal.trim().is_empty() => Ok(literal.clone()),
        Value::String(_) => Err(ValidationError::empty_extension_value(
            path.clone(),
            "value is empty",
        )),
        other => Err(ValidationError::empty_extension_value(
            path.clone(),
            format!("expected a non-empty string, found {}", describe_value(other)),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;
    use serde_json::json;

    fn parse(value: Value) -> ValidationResult<ExtendTokens> {
        let raw = value.as_object().cloned().unwrap_or_default();
        ExtendTokens::from_raw(&TokenPath::parse("extend"), &raw)
    }

    #[test]
    fn keeps_literal_values_per_category() {
        let tokens = parse(json!({
            "spacing": {"18": "4.5rem", "72": "18rem"},
            "boxShadow": {"card": "0px 0px 10px rgba(0, 0, 0, 0.05)"}
        }))
        .unwrap();
        assert_eq!(tokens.get(SPACING, "18"), Some("4.5rem"));
        assert_eq!(
            tokens.get(BOX_SHADOW, "card"),
            Some("0px 0px 10px rgba(0, 0, 0, 0.05)")
        );
        assert_eq!(tokens.token_count(), 3);
    }

    #[test]
    fn rejects_empty_and_non_string_values() {
        let error = parse(json!({"fontSize": {"xxs": ""}})).unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::EmptyExtensionValue);
        assert_eq!(error.path.to_string(), "extend.fontSize.xxs");

        let error = parse(json!({"height": {"screen-50": "   "}})).unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::EmptyExtensionValue);

        let error = parse(json!({"spacing": {"18": 4.5}})).unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::EmptyExtensionValue);
        assert_eq!(error.path.to_string(), "extend.spacing.18");
    }

    #[test]
    fn rejects_category_that_is_not_a_mapping() {
        let error = parse(json!({"spacing": "4.5rem"})).unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::UnexpectedShape);
        assert_eq!(error.path.to_string(), "extend.spacing");
    }

    #[test]
    fn merge_is_per_token() {
        let base = parse(json!({"spacing": {"18": "4.5rem", "72": "18rem"}})).unwrap();
        let over = parse(json!({"spacing": {"72": "20rem"}, "height": {"screen-75": "75vh"}}))
            .unwrap();
        let merged = base.merged_with(&over);
        assert_eq!(merged.get(SPACING, "18"), Some("4.5rem"));
        assert_eq!(merged.get(SPACING, "72"), Some("20rem"));
        assert_eq!(merged.get(HEIGHT, "screen-75"), Some("75vh"));
    }
}
