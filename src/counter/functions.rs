use regex::Regex;
use serde::Serialize;

/// Shape of declaration a function pattern looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// `function name(`
    FunctionDeclaration,
    /// `const name = (...) =>`
    ConstArrow,
    /// `let name = (...) =>`
    LetArrow,
    /// `async function name(`
    AsyncFunction,
    /// `name: (...) =>`
    PropertyArrow,
    /// `name(...) {` at the start of a line
    Method,
    /// `async name(...) {` at the start of a line
    AsyncMethod,
}

impl PatternKind {
    /// All kinds, in the order their patterns are applied.
    pub const ALL: [Self; 7] = [
        Self::FunctionDeclaration,
        Self::ConstArrow,
        Self::LetArrow,
        Self::AsyncFunction,
        Self::PropertyArrow,
        Self::Method,
        Self::AsyncMethod,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FunctionDeclaration => "function",
            Self::ConstArrow => "const arrow",
            Self::LetArrow => "let arrow",
            Self::AsyncFunction => "async function",
            Self::PropertyArrow => "property arrow",
            Self::Method => "method",
            Self::AsyncMethod => "async method",
        }
    }

    const fn pattern(self) -> &'static str {
        match self {
            Self::FunctionDeclaration => r"(?mR)\bfunction\s+\w+\s*\(",
            Self::ConstArrow => r"(?mR)\bconst\s+\w+\s*=\s*\([^)]*\)\s*=>",
            Self::LetArrow => r"(?mR)\blet\s+\w+\s*=\s*\([^)]*\)\s*=>",
            Self::AsyncFunction => r"(?mR)\basync\s+function\s+\w+\s*\(",
            Self::PropertyArrow => r"(?mR)\w+\s*:\s*\([^)]*\)\s*=>",
            Self::Method => r"(?mR)^\s*\w+\s*\([^)]*\)\s*\{",
            Self::AsyncMethod => r"(?mR)^\s*async\s+\w+\s*\([^)]*\)\s*\{",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Per-kind match counts for one piece of source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FunctionTally {
    counts: [usize; PatternKind::ALL.len()],
}

impl FunctionTally {
    /// Sum of matches over every kind. Overlapping matches are not merged.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    #[must_use]
    pub const fn get(&self, kind: PatternKind) -> usize {
        self.counts[kind.index()]
    }

    /// Kinds with at least one match, in pattern order.
    pub fn non_zero(&self) -> impl Iterator<Item = (PatternKind, usize)> + '_ {
        PatternKind::ALL
            .into_iter()
            .map(|kind| (kind, self.get(kind)))
            .filter(|(_, count)| *count > 0)
    }
}

/// Heuristic JavaScript/TypeScript function counter.
///
/// Every pattern runs over the whole content and all matches are summed, so a
/// declaration such as `async function load(` is counted by both the
/// `function` and `async function` patterns.
pub struct FunctionCounter {
    patterns: Vec<(PatternKind, Regex)>,
}

impl Default for FunctionCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionCounter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            patterns: PatternKind::ALL
                .into_iter()
                .map(|kind| (kind, Regex::new(kind.pattern()).expect("Invalid regex")))
                .collect(),
        }
    }

    #[must_use]
    pub fn tally(&self, content: &str) -> FunctionTally {
        let mut tally = FunctionTally::default();
        for (kind, regex) in &self.patterns {
            tally.counts[kind.index()] = regex.find_iter(content).count();
        }
        tally
    }

    #[must_use]
    pub fn count(&self, content: &str) -> usize {
        self.tally(content).total()
    }
}

#[cfg(test)]
#[path = "functions_tests.rs"]
mod tests;
