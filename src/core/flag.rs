//! Per-letter feedback flags
//!
//! Each letter of an evaluated guess carries one flag. The variant order
//! matters: `Ord` ranks flags from least to most informative, so the alphabet
//! summary can fold repeated observations with `max` and a letter once known
//! `Correct` never regresses.

use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AnswerFlag {
    /// No information yet (position not played)
    Unknown,
    /// Letter is not in the secret word (counting already-matched occurrences)
    Absent,
    /// Letter is in the secret word but at another position
    Present,
    /// Letter is at this exact position
    Correct,
}

impl fmt::Display for AnswerFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Unknown => '_',
            Self::Absent => ' ',
            Self::Present => '-',
            Self::Correct => '+',
        };
        write!(f, "{symbol}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_ranking() {
        assert!(AnswerFlag::Unknown < AnswerFlag::Absent);
        assert!(AnswerFlag::Absent < AnswerFlag::Present);
        assert!(AnswerFlag::Present < AnswerFlag::Correct);
    }

    #[test]
    fn flag_max_never_regresses() {
        let best = AnswerFlag::Correct;
        assert_eq!(best.max(AnswerFlag::Present), AnswerFlag::Correct);
        assert_eq!(best.max(AnswerFlag::Absent), AnswerFlag::Correct);
    }

    #[test]
    fn flag_symbols() {
        assert_eq!(AnswerFlag::Unknown.to_string(), "_");
        assert_eq!(AnswerFlag::Absent.to_string(), " ");
        assert_eq!(AnswerFlag::Present.to_string(), "-");
        assert_eq!(AnswerFlag::Correct.to_string(), "+");
    }
}
