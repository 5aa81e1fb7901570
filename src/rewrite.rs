use crate::{TranslitError, TranslitResult};
use regex::{Captures, NoExpand, Regex};

#[derive(Debug)]
pub struct RewriteRuleCollection {
    rules: Vec<RewriteRule>,
}

impl RewriteRuleCollection {
    pub fn new(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Applies every rule in order, each to the output of the previous one.
    pub fn apply_to_str(&self, input: &str) -> String {
        self.rules
            .iter()
            .fold(input.to_string(), |prev, next| next.apply_to_str(&prev))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Every occurrence of the pattern.
    Literal,
    /// The pattern at the end of the word only.
    Final,
    /// A doubled letter from the pattern becomes a single one.
    Collapse,
}

impl TryFrom<&str> for RuleKind {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(match value.to_ascii_lowercase().as_str() {
            "literal" => RuleKind::Literal,
            "final" => RuleKind::Final,
            "collapse" => RuleKind::Collapse,
            _ => return Err(()),
        })
    }
}

#[derive(Debug)]
pub struct RewriteRule {
    pub kind: RuleKind,
    pub from: String,
    pub to: String,
    matcher: Regex,
}

impl RewriteRule {
    pub fn try_parse(kind: &str, from: &str, to: &str) -> TranslitResult<Self> {
        const TABLE: &str = "phonetic rules";
        let kind = RuleKind::try_from(kind)
            .map_err(|_| TranslitError::malformed(TABLE, format!("unknown rule kind \"{}\"", kind)))?;
        if from.is_empty() {
            return Err(TranslitError::malformed(TABLE, "empty pattern"));
        }
        let pattern = match kind {
            RuleKind::Literal => regex::escape(from),
            RuleKind::Final => format!("{}$", regex::escape(from)),
            RuleKind::Collapse => from
                .chars()
                .map(|c| regex::escape(&c.to_string().repeat(2)))
                .collect::<Vec<_>>()
                .join("|"),
        };
        let matcher =
            Regex::new(&pattern).map_err(|e| TranslitError::malformed(TABLE, e.to_string()))?;
        Ok(Self {
            kind,
            from: from.to_string(),
            to: to.to_string(),
            matcher,
        })
    }

    pub fn apply_to_str(&self, input: &str) -> String {
        match self.kind {
            RuleKind::Literal | RuleKind::Final => self
                .matcher
                .replace_all(input, NoExpand(&self.to))
                .into_owned(),
            RuleKind::Collapse => self
                .matcher
                .replace_all(input, |caps: &Captures<'_>| {
                    caps[0].chars().next().map(String::from).unwrap_or_default()
                })
                .into_owned(),
        }
    }
}
