//! Per-line token classification for display highlighting.
//!
//! The classifier partitions a line's text into typed runs (comment, string,
//! number, keyword, plain) driven by a [`RuleSet`] of exact-match keywords
//! and literal comment-marker prefixes. The scan is pure and re-derived on
//! every draw — no state is cached per line, which keeps edits trivially
//! correct at interactive-document scale.

/// The keyword list and comment-marker list driving classification.
///
/// Either list may be empty. Highlighting as a whole is disabled until a
/// rule set has been loaded; see [`classify`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    /// Identifiers highlighted as keywords (exact, byte-for-byte match).
    pub keywords: Vec<String>,
    /// Literal prefixes that start a comment running to end of line.
    pub comment_markers: Vec<String>,
}

impl RuleSet {
    fn is_keyword(&self, word: &str) -> bool {
        self.keywords.iter().any(|kw| kw == word)
    }

    fn has_comment_at(&self, suffix: &str) -> bool {
        self.comment_markers
            .iter()
            .any(|marker| !marker.is_empty() && suffix.starts_with(marker.as_str()))
    }
}

/// Semantic category of a classified run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Plain,
    Keyword,
    Str,
    Number,
    Comment,
}

/// A half-open byte range of a line with a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub start: usize,
    pub end: usize,
    pub category: Category,
}

/// Classify a line into runs that exactly tile `[0, text.len())`.
///
/// With no rule set (highlighting disabled), the whole line is one `Plain`
/// run. Otherwise the scan proceeds left to right, checking at each
/// position in priority order:
/// 1. a configured comment marker → `Comment` to end of line;
/// 2. a double quote → `Str` through the closing quote (inclusive), or to
///    end of line when unterminated;
/// 3. a decimal digit → the maximal digit run as `Number`;
/// 4. an alphabetic character → the maximal alphanumeric run, `Keyword` on
///    an exact match against the rule set, else `Plain`;
/// 5. anything else → `Plain`.
///
/// Adjacent runs of the same category are coalesced. The returned iterator
/// is lazy and restartable: call `classify` again to rescan.
pub fn classify<'a>(text: &'a str, rules: Option<&'a RuleSet>) -> Runs<'a> {
    Runs {
        text,
        rules,
        pos: 0,
    }
}

/// Lazy iterator over the classified runs of one line. See [`classify`].
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    text: &'a str,
    rules: Option<&'a RuleSet>,
    pos: usize,
}

impl Iterator for Runs<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let mut run = self.next_token()?;
        // Coalesce adjacent tokens of the same category into one run.
        while self.pos < self.text.len() {
            let mark = self.pos;
            match self.next_token() {
                Some(next) if next.category == run.category => run.end = next.end,
                _ => {
                    self.pos = mark;
                    break;
                }
            }
        }
        Some(run)
    }
}

impl Runs<'_> {
    /// Scan one token starting at `self.pos`, advancing past it.
    fn next_token(&mut self) -> Option<Run> {
        if self.pos >= self.text.len() {
            return None;
        }
        let start = self.pos;

        let Some(rules) = self.rules else {
            self.pos = self.text.len();
            return Some(Run {
                start,
                end: self.pos,
                category: Category::Plain,
            });
        };

        let suffix = &self.text[start..];
        let first = suffix.chars().next()?;

        let (len, category) = if rules.has_comment_at(suffix) {
            (suffix.len(), Category::Comment)
        } else if first == '"' {
            (string_token_len(suffix), Category::Str)
        } else if first.is_ascii_digit() {
            let digits = suffix
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(suffix.len());
            (digits, Category::Number)
        } else if first.is_alphabetic() {
            let word_len = suffix
                .find(|c: char| !c.is_alphanumeric())
                .unwrap_or(suffix.len());
            let category = if rules.is_keyword(&suffix[..word_len]) {
                Category::Keyword
            } else {
                Category::Plain
            };
            (word_len, category)
        } else {
            (first.len_utf8(), Category::Plain)
        };

        self.pos = start + len;
        Some(Run {
            start,
            end: self.pos,
            category,
        })
    }
}

/// Length of a string token: opening quote through the closing quote
/// inclusive, or to end of line when unterminated.
fn string_token_len(suffix: &str) -> usize {
    suffix[1..]
        .find('"')
        .map_or(suffix.len(), |idx| 1 + idx + 1)
}
