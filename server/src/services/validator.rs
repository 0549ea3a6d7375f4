//! Spam heuristics for submitted thoughts
//!
//! Rules are evaluated in order and the first match decides the rejection
//! reason. Inputs are expected to be trimmed already.

use crate::config::{
    MAX_TEXT_CHARS, MIN_TEXT_CHARS, PROMO_TERMS, REPEATED_CHAR_RUN, SHOUTY_CAPS_RUN,
};
use once_cell::sync::Lazy;
use regex::Regex;

static URL_SCHEME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)https?://").expect("valid url scheme regex"));
static WWW_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)www\.").expect("valid www regex"));
static SHOUTY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("[A-Z]{{{},}}", SHOUTY_CAPS_RUN)).expect("valid caps regex")
});
static PROMO_RE: Lazy<Regex> = Lazy::new(|| {
    let alternatives: Vec<String> = PROMO_TERMS.iter().map(|t| regex::escape(t)).collect();
    Regex::new(&format!("(?i)({})", alternatives.join("|"))).expect("valid promo regex")
});
static NAME_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)http").expect("valid name link regex"));

/// Identifies which heuristic rejected a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    TooShort,
    TooLong,
    Link,
    ShoutyCaps,
    RepeatedChars,
    Promo,
    HandleName,
}

/// Fields a rule looks at
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub name: &'a str,
    pub text: &'a str,
}

/// One predicate with the reason reported when it matches
pub struct SpamRule {
    pub kind: RuleKind,
    pub reason: &'static str,
    matches: fn(&Candidate<'_>) -> bool,
}

impl SpamRule {
    pub fn matches(&self, candidate: &Candidate<'_>) -> bool {
        (self.matches)(candidate)
    }
}

/// Rules in evaluation order
pub static RULES: &[SpamRule] = &[
    SpamRule {
        kind: RuleKind::TooShort,
        reason: "Add a bit more context so others can follow.",
        matches: |c| c.text.chars().count() < MIN_TEXT_CHARS,
    },
    SpamRule {
        kind: RuleKind::TooLong,
        reason: "Keep it under 600 characters.",
        matches: |c| c.text.chars().count() > MAX_TEXT_CHARS,
    },
    SpamRule {
        kind: RuleKind::Link,
        reason: "Links are filtered out; share the idea without URLs.",
        matches: |c| URL_SCHEME_RE.is_match(c.text) || WWW_RE.is_match(c.text),
    },
    SpamRule {
        kind: RuleKind::ShoutyCaps,
        reason: "Too many shouty caps; soften it.",
        matches: |c| SHOUTY_RE.is_match(c.text),
    },
    SpamRule {
        kind: RuleKind::RepeatedChars,
        reason: "Repeated characters look spammy.",
        matches: |c| has_repeated_run(c.text, REPEATED_CHAR_RUN),
    },
    SpamRule {
        kind: RuleKind::Promo,
        reason: "Reads like promo language; try a constructive note.",
        matches: |c| PROMO_RE.is_match(c.text),
    },
    SpamRule {
        kind: RuleKind::HandleName,
        reason: "Name looks like a handle/link; please use a plain alias.",
        matches: |c| !c.name.is_empty() && (NAME_LINK_RE.is_match(c.name) || c.name.contains('@')),
    },
];

/// First rule the submission trips, if any
pub fn first_violation(name: &str, text: &str) -> Option<&'static SpamRule> {
    let candidate = Candidate { name, text };
    RULES.iter().find(|rule| rule.matches(&candidate))
}

/// Rejection reason for a submission, `None` when it is acceptable
pub fn spam_reason(name: &str, text: &str) -> Option<&'static str> {
    first_violation(name, text).map(|rule| rule.reason)
}

/// True when some character occurs `run` or more times in a row
fn has_repeated_run(text: &str, run: usize) -> bool {
    let mut previous = None;
    let mut count = 0;

    for c in text.chars() {
        if Some(c) == previous {
            count += 1;
        } else {
            previous = Some(c);
            count = 1;
        }
        if count >= run {
            return true;
        }
    }

    false
}
