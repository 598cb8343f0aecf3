use super::Detector;
use super::location::locate_line_prefix;
use crate::model::Candidate;

/// Reports `code` once when any of `phrases` occurs in the log.
///
/// Matching is a case-sensitive substring search. The earliest occurrence
/// across all phrases picks the location, unless the detector is
/// presence-only.
#[derive(Clone, Debug)]
pub struct PhraseDetector {
    code: &'static str,
    phrases: &'static [&'static str],
    locate: bool,
}

impl PhraseDetector {
    /// Detector that attaches the `file:line[:column]:` prefix of the matching line.
    pub const fn new(code: &'static str, phrases: &'static [&'static str]) -> Self {
        Self {
            code,
            phrases,
            locate: true,
        }
    }

    /// Detector that never attaches a location.
    pub const fn presence_only(code: &'static str, phrases: &'static [&'static str]) -> Self {
        Self {
            code,
            phrases,
            locate: false,
        }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Byte offset of the earliest phrase occurrence.
    fn first_match(&self, log_text: &str) -> Option<usize> {
        self.phrases
            .iter()
            .filter_map(|phrase| log_text.find(phrase))
            .min()
    }
}

impl Detector for PhraseDetector {
    fn scan(&self, log_text: &str) -> Vec<Candidate> {
        match self.first_match(log_text) {
            Some(offset) if self.locate => vec![Candidate::at(
                self.code,
                locate_line_prefix(log_text, offset),
            )],
            Some(_) => vec![Candidate::new(self.code)],
            None => Vec::new(),
        }
    }

    fn name(&self) -> &str {
        self.code
    }
}
