use std::fmt;

const SEPARATOR: char = '.';
const QUOTE: char = '"';
const ESCAPE: char = '\\';

/// Dotted location of a node inside a token table, e.g. `colors.primary.500`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenPath {
    segments: Vec<String>,
}

impl TokenPath {
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits on `.`. Segments holding a `.` (spacing keys such as `0.5`)
    /// are written in double quotes, e.g. `extend.spacing."0.5"`; inside
    /// quotes `\"` and `\\` escape. Unquoted segments are trimmed and empty
    /// ones dropped, so `"colors..white"` and `"colors.white"` are the same.
    pub fn parse(dotted: &str) -> Self {
        let mut segments = Vec::new();
        let mut chars = dotted.chars().peekable();
        while chars.peek().is_some() {
            while chars.next_if(|c| c.is_whitespace()).is_some() {}
            if chars.next_if_eq(&QUOTE).is_some() {
                let mut segment = String::new();
                while let Some(c) = chars.next() {
                    match c {
                        QUOTE => break,
                        ESCAPE => segment.extend(chars.next()),
                        other => segment.push(other),
                    }
                }
                segments.push(segment);
                for c in chars.by_ref() {
                    if c == SEPARATOR {
                        break;
                    }
                }
            } else {
                let mut raw = String::new();
                for c in chars.by_ref() {
                    if c == SEPARATOR {
                        break;
                    }
                    raw.push(c);
                }
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    segments.push(trimmed.to_string());
                }
            }
        }
        Self { segments }
    }

    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for TokenPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            if needs_quotes(segment) {
                write!(f, "{QUOTE}")?;
                for c in segment.chars() {
                    if c == QUOTE || c == ESCAPE {
                        write!(f, "{ESCAPE}")?;
                    }
                    write!(f, "{c}")?;
                }
                write!(f, "{QUOTE}")?;
            } else {
                f.write_str(segment)?;
            }
        }
        Ok(())
    }
}

fn needs_quotes(segment: &str) -> bool {
    segment.is_empty() || segment.contains([SEPARATOR, QUOTE]) || segment.trim() != segment
}

impl From<&str> for TokenPath {
    fn from(dotted: &str) -> Self {
        Self::parse(dotted)
    }
}

impl AsRef<[String]> for TokenPath {
    fn as_ref(&self) -> &[String] {
        &self.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_dots_and_skips_empty_segments() {
        let path = TokenPath::parse("colors..primary.500.");
        assert_eq!(path.segments(), &["colors", "primary", "500"]);
    }

    #[test]
    fn display_joins_segments_with_dots() {
        let path = TokenPath::root().child("extend").child("spacing").child("18");
        assert_eq!(path.to_string(), "extend.spacing.18");
    }

    #[test]
    fn dotted_segments_are_quoted_and_parse_back() {
        let path = TokenPath::from_segments(["extend", "spacing", "0.5"]);
        assert_eq!(path.to_string(), r#"extend.spacing."0.5""#);
        assert_eq!(TokenPath::parse(&path.to_string()), path);
    }

    #[test]
    fn quoted_segments_unescape() {
        let path = TokenPath::parse(r#"extend."a\"b".c"#);
        assert_eq!(path.segments(), &["extend", "a\"b", "c"]);
        assert_eq!(TokenPath::parse(&path.to_string()), path);
    }

    #[test]
    fn blank_and_padded_segments_survive_display() {
        let path = TokenPath::from_segments(["extend", "", " x "]);
        assert_eq!(TokenPath::parse(&path.to_string()), path);
    }

    #[test]
    fn root_path_renders_placeholder() {
        assert!(TokenPath::root().is_root());
        assert_eq!(TokenPath::root().to_string(), "<root>");
    }
}
