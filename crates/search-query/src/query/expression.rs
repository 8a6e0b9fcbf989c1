//! Query node types and their canonical rendering.

use std::fmt;

use regex_syntax::hir::{Hir, HirKind};

use crate::error::Result;

use super::case::CaseFlavor;

/// A query tree node.
///
/// Nodes are never mutated once built; every rewrite in this crate consumes a
/// tree and returns a freshly assembled one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Query {
    Substring(Substring),
    Regexp(Regexp),
    And(Vec<Query>),
    Or(Vec<Query>),
    Not(Box<Query>),
    Const(bool),
    Case(CaseFlavor),
    Repo(String),
    Branch(String),
}

/// Discriminant of a [`Query`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum QueryKind {
    Substring,
    Regexp,
    And,
    Or,
    Not,
    Const,
    Case,
    Repo,
    Branch,
}

/// Matches when `pattern` occurs in the file content (or the file name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substring {
    pub pattern: String,
    pub case_sensitive: bool,
    pub file_name: bool,
}

impl Substring {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            case_sensitive: false,
            file_name: false,
        }
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn file_name(mut self, file_name: bool) -> Self {
        self.file_name = file_name;
        self
    }
}

/// Matches when an already-parsed regular expression matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regexp {
    /// Pattern text as written; this is what `render` prints.
    pub source: String,
    pub regexp: Hir,
    pub case_sensitive: bool,
    pub file_name: bool,
}

impl Regexp {
    /// Parses `source` into a regex syntax tree.
    pub fn parse(source: &str) -> Result<Self> {
        let regexp = regex_syntax::Parser::new().parse(source)?;
        Ok(Self {
            source: source.to_string(),
            regexp,
            case_sensitive: false,
            file_name: false,
        })
    }

    /// Wraps an already-built syntax tree. Without the pattern text, the
    /// source falls back to the tree's own rendering.
    pub fn from_hir(regexp: Hir) -> Self {
        Self {
            source: regexp.to_string(),
            regexp,
            case_sensitive: false,
            file_name: false,
        }
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn file_name(mut self, file_name: bool) -> Self {
        self.file_name = file_name;
        self
    }

    /// Returns true when the top-level operator is the empty match, which
    /// matches every input.
    pub fn matches_empty_unconditionally(&self) -> bool {
        matches!(self.regexp.kind(), HirKind::Empty)
    }
}

impl From<Substring> for Query {
    fn from(substring: Substring) -> Self {
        Query::Substring(substring)
    }
}

impl From<Regexp> for Query {
    fn from(regexp: Regexp) -> Self {
        Query::Regexp(regexp)
    }
}

impl Query {
    pub fn substring(pattern: impl Into<String>) -> Self {
        Query::Substring(Substring::new(pattern))
    }

    pub fn regexp(source: &str) -> Result<Self> {
        Regexp::parse(source).map(Query::Regexp)
    }

    pub fn and(children: impl IntoIterator<Item = Query>) -> Self {
        Query::And(children.into_iter().collect())
    }

    pub fn or(children: impl IntoIterator<Item = Query>) -> Self {
        Query::Or(children.into_iter().collect())
    }

    pub fn not(child: Query) -> Self {
        Query::Not(Box::new(child))
    }

    pub fn constant(value: bool) -> Self {
        Query::Const(value)
    }

    pub fn case(flavor: CaseFlavor) -> Self {
        Query::Case(flavor)
    }

    pub fn repo(name: impl Into<String>) -> Self {
        Query::Repo(name.into())
    }

    pub fn branch(name: impl Into<String>) -> Self {
        Query::Branch(name.into())
    }

    /// Builds an AND (`is_and`) or OR node from `children`.
    pub(crate) fn junction(is_and: bool, children: Vec<Query>) -> Self {
        if is_and {
            Query::And(children)
        } else {
            Query::Or(children)
        }
    }

    pub fn kind(&self) -> QueryKind {
        match self {
            Query::Substring(_) => QueryKind::Substring,
            Query::Regexp(_) => QueryKind::Regexp,
            Query::And(_) => QueryKind::And,
            Query::Or(_) => QueryKind::Or,
            Query::Not(_) => QueryKind::Not,
            Query::Const(_) => QueryKind::Const,
            Query::Case(_) => QueryKind::Case,
            Query::Repo(_) => QueryKind::Repo,
            Query::Branch(_) => QueryKind::Branch,
        }
    }

    /// Children of an AND/OR node; empty for every other kind.
    pub fn children(&self) -> &[Query] {
        match self {
            Query::And(children) | Query::Or(children) => children,
            _ => &[],
        }
    }

    pub(crate) fn into_children(self) -> Vec<Query> {
        match self {
            Query::And(children) | Query::Or(children) => children,
            _ => Vec::new(),
        }
    }

    pub fn as_const(&self) -> Option<bool> {
        match self {
            Query::Const(value) => Some(*value),
            _ => None,
        }
    }

    /// Total number of nodes in the tree, this one included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            match node {
                Query::And(children) | Query::Or(children) => stack.extend(children.iter()),
                Query::Not(child) => stack.push(child),
                _ => {}
            }
        }
        count
    }

    /// Length of the longest root-to-leaf path; a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            match node {
                Query::And(children) | Query::Or(children) => {
                    stack.extend(children.iter().map(|child| (child, depth + 1)));
                }
                Query::Not(child) => stack.push((child, depth + 1)),
                _ => {}
            }
        }
        deepest
    }

    /// Canonical string form, e.g. `(and case_substr:"foo" (not repo:bar))`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Substring(q) => {
                write_prefix(f, q.case_sensitive, q.file_name)?;
                write!(f, "substr:{}", quote(&q.pattern))
            }
            Query::Regexp(q) => {
                write_prefix(f, q.case_sensitive, q.file_name)?;
                write!(f, "regex:{}", quote(&q.source))
            }
            Query::And(children) => write_list(f, "and", children),
            Query::Or(children) => write_list(f, "or", children),
            Query::Not(child) => write!(f, "(not {child})"),
            Query::Const(true) => f.write_str("TRUE"),
            Query::Const(false) => f.write_str("FALSE"),
            Query::Case(flavor) => write!(f, "case:{flavor}"),
            Query::Repo(name) => write!(f, "repo:{name}"),
            Query::Branch(name) => write!(f, "branch:{}", quote(name)),
        }
    }
}

// `case_` always precedes `file_`.
fn write_prefix(f: &mut fmt::Formatter<'_>, case_sensitive: bool, file_name: bool) -> fmt::Result {
    if case_sensitive {
        f.write_str("case_")?;
    }
    if file_name {
        f.write_str("file_")?;
    }
    Ok(())
}

/// Double-quotes `value` with Go-style escapes: `\a \b \f \n \r \t \v`,
/// `\xNN` for other ASCII controls, and `\uNNNN`/`\UNNNNNNNN` for other
/// non-printable characters.
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\u{7}' => quoted.push_str("\\a"),
            '\u{8}' => quoted.push_str("\\b"),
            '\u{c}' => quoted.push_str("\\f"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{b}' => quoted.push_str("\\v"),
            ch if is_printable(ch) => quoted.push(ch),
            ch if (ch as u32) < 0x80 => quoted.push_str(&format!("\\x{:02x}", ch as u32)),
            ch if (ch as u32) < 0x10000 => quoted.push_str(&format!("\\u{:04x}", ch as u32)),
            ch => quoted.push_str(&format!("\\U{:08x}", ch as u32)),
        }
    }
    quoted.push('"');
    quoted
}

// Letters, marks, numbers, punctuation, symbols and the ASCII space. Other
// whitespace, controls, format characters, private-use code points and
// noncharacters are escaped.
fn is_printable(ch: char) -> bool {
    if ch == ' ' {
        return true;
    }
    if ch.is_control() || ch.is_whitespace() {
        return false;
    }
    !matches!(
        ch as u32,
        0xad
            | 0x600..=0x605
            | 0x61c
            | 0x6dd
            | 0x70f
            | 0x180e
            | 0x200b..=0x200f
            | 0x202a..=0x202e
            | 0x2060..=0x206f
            | 0xe000..=0xf8ff
            | 0xfdd0..=0xfdef
            | 0xfeff
            | 0xfff9..=0xfffb
            | 0xfffe..=0xffff
            | 0xf0000..=0x10ffff
    )
}

fn write_list(f: &mut fmt::Formatter<'_>, op: &str, children: &[Query]) -> fmt::Result {
    write!(f, "({op} ")?;
    for (index, child) in children.iter().enumerate() {
        if index > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{child}")?;
    }
    f.write_str(")")
}
