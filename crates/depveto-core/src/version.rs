//! Maven version parsing and comparison.
//!
//! Maven versions use a custom ordering that differs from semver:
//! - Tokens are split on `.` and `-`
//! - Numeric tokens compare as integers (arbitrary precision)
//! - Named qualifiers have a special ordering:
//!   `alpha` < `beta` < `milestone` < `rc` < `snapshot` < `""` (no qualifier)
//!   < `final`/`release`/`ga` < `sp`
//! - Unrecognized qualifiers sort above all named qualifiers and below
//!   positive numeric tokens, lexicographically among themselves
//! - A shorter version is padded with "no qualifier" tokens, so `1.0`
//!   equals `1.0.0` but sorts above `1.0-beta`; a `0` token carries the
//!   same rank as that padding

use std::cmp::Ordering;
use std::fmt;

/// A parsed Maven version with comparable tokens.
#[derive(Debug, Clone)]
pub struct MavenVersion {
    pub original: String,
    tokens: Vec<Token>,
}

impl PartialEq for MavenVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MavenVersion {}

#[derive(Debug, Clone, Eq, PartialEq)]
enum Token {
    /// Digits only, normalized (no leading zeros). Kept as a string so
    /// versions like `20240101000000001` never overflow.
    Numeric(String),
    Qualifier(QualifierKind),
    Text(String),
}

/// Well-known Maven qualifiers with defined ordering.
///
/// `NoQualifier` is the implicit token a shorter version is padded with;
/// the splitter itself never produces it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
enum QualifierKind {
    Alpha,
    Beta,
    Milestone,
    Rc,
    Snapshot,
    NoQualifier,
    Release,
    Sp,
}

impl MavenVersion {
    pub fn parse(version: &str) -> Self {
        let tokens = parse_tokens(version);
        Self {
            original: version.to_string(),
            tokens,
        }
    }
}

impl fmt::Display for MavenVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl Ord for MavenVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let max_len = self.tokens.len().max(other.tokens.len());
        for i in 0..max_len {
            let a = self.tokens.get(i);
            let b = other.tokens.get(i);
            let ord = compare_tokens(a, b);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for MavenVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two raw version strings with Maven semantics.
///
/// Total over any input: unexpected tokens degrade to qualifier comparison
/// rather than failing.
pub fn compare(a: &str, b: &str) -> Ordering {
    MavenVersion::parse(a).cmp(&MavenVersion::parse(b))
}

fn compare_tokens(a: Option<&Token>, b: Option<&Token>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (Some(t), None) => compare_token_to_padding(t),
        (None, Some(t)) => compare_token_to_padding(t).reverse(),
        (Some(a), Some(b)) => compare_two_tokens(a, b),
    }
}

/// Compare a token against the implicit "no qualifier" padding token.
fn compare_token_to_padding(token: &Token) -> Ordering {
    match token {
        Token::Numeric(n) if n == "0" => Ordering::Equal,
        Token::Numeric(_) => Ordering::Greater,
        Token::Qualifier(q) => q.cmp(&QualifierKind::NoQualifier),
        Token::Text(_) => Ordering::Greater,
    }
}

fn compare_two_tokens(a: &Token, b: &Token) -> Ordering {
    match (a, b) {
        (Token::Numeric(a), Token::Numeric(b)) => compare_numeric(a, b),
        (Token::Qualifier(a), Token::Qualifier(b)) => a.cmp(b),
        (Token::Text(a), Token::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        // An interior `0` carries the same rank as the implicit padding.
        // Letting it beat release qualifiers while the padding loses to them
        // would make the order intransitive (`1.0-alpha` vs `1-ga` vs `1`).
        (Token::Numeric(n), Token::Qualifier(q)) if n == "0" => {
            QualifierKind::NoQualifier.cmp(q)
        }
        (Token::Qualifier(q), Token::Numeric(n)) if n == "0" => {
            q.cmp(&QualifierKind::NoQualifier)
        }
        (Token::Numeric(n), Token::Text(_)) if n == "0" => Ordering::Less,
        (Token::Text(_), Token::Numeric(n)) if n == "0" => Ordering::Greater,
        // A positive numeric beats everything else at the same position.
        (Token::Numeric(_), _) => Ordering::Greater,
        (_, Token::Numeric(_)) => Ordering::Less,
        // Unknown qualifiers rank above all named qualifiers.
        (Token::Text(_), Token::Qualifier(_)) => Ordering::Greater,
        (Token::Qualifier(_), Token::Text(_)) => Ordering::Less,
    }
}

/// Compare normalized digit strings as integers: longer wins, then
/// lexicographic on equal length.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn parse_tokens(version: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in version.chars() {
        if ch == '.' || ch == '-' {
            if !current.is_empty() {
                tokens.push(classify(&current));
                current.clear();
            }
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        tokens.push(classify(&current));
    }

    // Trailing zero tokens are equivalent to the implicit padding;
    // normalize them away (`1.0.0` == `1.0`).
    while matches!(tokens.last(), Some(Token::Numeric(n)) if n == "0") {
        tokens.pop();
    }

    tokens
}

fn classify(token: &str) -> Token {
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        let trimmed = token.trim_start_matches('0');
        let normalized = if trimmed.is_empty() { "0" } else { trimmed };
        return Token::Numeric(normalized.to_string());
    }
    match token.to_lowercase().as_str() {
        "alpha" | "a" => Token::Qualifier(QualifierKind::Alpha),
        "beta" | "b" => Token::Qualifier(QualifierKind::Beta),
        "milestone" | "m" => Token::Qualifier(QualifierKind::Milestone),
        "rc" | "cr" => Token::Qualifier(QualifierKind::Rc),
        "snapshot" => Token::Qualifier(QualifierKind::Snapshot),
        "ga" | "final" | "release" => Token::Qualifier(QualifierKind::Release),
        "sp" => Token::Qualifier(QualifierKind::Sp),
        _ => Token::Text(token.to_string()),
    }
}
