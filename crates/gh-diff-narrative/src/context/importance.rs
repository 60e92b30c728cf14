//! Importance scoring for change blocks.
//!
//! The score is a sum of points, each a pure function of the changed lines:
//!
//! | signal                                              | points |
//! |-----------------------------------------------------|--------|
//! | 5+ / 15+ / 40+ changed lines                        | 1/2/3  |
//! | declaration keyword (`fn`, `class`, `def`, ...)     | 2      |
//! | security-sensitive word (`password`, `auth`, ...)   | 3      |
//! | error-handling word (`catch`, `panic`, `raise`, ..) | 1      |
//! | more removals than additions                        | 1      |
//! | 5+ removals and at least twice the additions        | 2      |
//!
//! Totals map to levels: 6+ critical, 4+ high, 2+ medium, else low.

use crate::model::{DiffLine, DiffStats, Importance};
use regex::Regex;
use std::sync::OnceLock;

/// Point breakdown behind an [`Importance`] level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportanceScore {
    pub size: u32,
    pub declaration: u32,
    pub security: u32,
    pub error_handling: u32,
    pub deletion: u32,
}

impl ImportanceScore {
    pub fn total(&self) -> u32 {
        self.size + self.declaration + self.security + self.error_handling + self.deletion
    }

    pub fn level(&self) -> Importance {
        match self.total() {
            6.. => Importance::Critical,
            4..=5 => Importance::High,
            2..=3 => Importance::Medium,
            _ => Importance::Low,
        }
    }
}

fn declaration_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"\b(fn|func|function|def|class|struct|enum|trait|impl|interface|module|namespace)\b",
        )
        .expect("declaration regex is valid")
    })
}

fn security_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)(?:^|[^a-z0-9])(passwords?|passwd|secrets?|tokens?|credentials?|auth|authn|authz|authenticat\w*|authoriz\w*|\w*crypt\w*|private_?keys?|permissions?|sanitiz\w*|unsafe|eval|exec)(?:$|[^a-z0-9])",
        )
        .expect("security regex is valid")
    })
}

fn error_handling_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"\b(try|catch|except|finally|throw|throws|raise|rescue|panic|unwrap|expect|Err|Error|error)\b",
        )
        .expect("error handling regex is valid")
    })
}

/// Compute the point breakdown for a change block.
pub fn score_change(change: &[DiffLine]) -> ImportanceScore {
    let DiffStats {
        additions,
        deletions,
        changes,
    } = DiffStats::from_lines(change);

    let mentions = |re: &Regex| change.iter().any(|l| l.is_change() && re.is_match(&l.content));

    let size = match changes {
        40.. => 3,
        15..=39 => 2,
        5..=14 => 1,
        _ => 0,
    };

    let deletion = if deletions >= 5 && deletions >= additions * 2 {
        2
    } else if deletions > additions {
        1
    } else {
        0
    };

    ImportanceScore {
        size,
        declaration: if mentions(declaration_regex()) { 2 } else { 0 },
        security: if mentions(security_regex()) { 3 } else { 0 },
        error_handling: if mentions(error_handling_regex()) { 1 } else { 0 },
        deletion,
    }
}

/// Classify a change block. Total and deterministic.
pub fn score_importance(change: &[DiffLine]) -> Importance {
    score_change(change).level()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn added(lines: &[&str]) -> Vec<DiffLine> {
        lines
            .iter()
            .enumerate()
            .map(|(i, c)| DiffLine::added(*c, i as u32 + 1, i))
            .collect()
    }

    fn removed(count: usize, content: &str) -> Vec<DiffLine> {
        (0..count)
            .map(|i| DiffLine::removed(content, i as u32 + 1, i))
            .collect()
    }

    #[test]
    fn test_small_plain_change_is_low() {
        assert_eq!(score_importance(&added(&["let x = 1;"])), Importance::Low);
        assert_eq!(score_importance(&[]), Importance::Low);
    }

    #[test]
    fn test_new_function_is_medium() {
        let change = added(&["fn helper() -> u32 {", "    42", "}"]);
        let score = score_change(&change);
        assert_eq!(score.declaration, 2);
        assert_eq!(score.level(), Importance::Medium);
    }

    #[test]
    fn test_auth_function_is_high() {
        let change = added(&["def check_auth(user):", "    return user.ok"]);
        assert_eq!(score_importance(&change), Importance::High);
    }

    #[test]
    fn test_large_deletion_of_declarations_is_critical() {
        let mut change = removed(20, "    old_call()");
        change.push(DiffLine::removed("class Legacy:", 21, 20));
        let score = score_change(&change);
        assert_eq!(score.size, 2);
        assert_eq!(score.deletion, 2);
        assert_eq!(score.level(), Importance::Critical);
    }

    #[test]
    fn test_deletion_dominance_single_point() {
        let mut change = removed(2, "x");
        change.extend(added(&["y"]));
        assert_eq!(score_change(&change).deletion, 1);
    }

    #[test]
    fn test_keywords_need_word_boundaries() {
        // "definitely" contains "def", "classic" contains "class".
        let change = added(&["definitely classic"]);
        assert_eq!(score_change(&change).declaration, 0);
    }

    #[test]
    fn test_security_words_are_whole_words() {
        for line in ["let words = tokenize(src);", "author: String,", "authority.check()"] {
            assert_eq!(score_change(&added(&[line])).security, 0, "{line}");
        }
        for line in [
            "let api_token = env();",
            "if check_auth(user) {",
            "headers.insert(AUTH_HEADER, v);",
            "let sealed = encrypt(data);",
            "fn authorize_request() {}",
            "password = input()",
        ] {
            assert_eq!(score_change(&added(&[line])).security, 3, "{line}");
        }
    }

    #[test]
    fn test_level_thresholds() {
        let at = |total: u32| ImportanceScore {
            size: total,
            ..Default::default()
        };
        assert_eq!(at(0).level(), Importance::Low);
        assert_eq!(at(1).level(), Importance::Low);
        assert_eq!(at(2).level(), Importance::Medium);
        assert_eq!(at(4).level(), Importance::High);
        assert_eq!(at(6).level(), Importance::Critical);
        assert_eq!(at(11).level(), Importance::Critical);
    }
}
