use serde::{Deserialize, Serialize};

/// A canned answer and the keywords that trigger it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QaEntry {
    /// Lowercase keywords. Any one of them appearing in the input is a
    /// match.
    pub keywords: Vec<String>,
    /// The label of the question this entry answers.
    pub question: String,
    /// The canned answer.
    pub answer: String,
}

impl QaEntry {
    /// Creates an entry, lowercasing the keywords.
    pub fn new<I, S>(keywords: I, question: &str, answer: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
            question: question.to_owned(),
            answer: answer.to_owned(),
        }
    }

    /// Returns `true` if any keyword is a substring of `lowered`.
    ///
    /// `lowered` must already be lowercased.
    #[inline]
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowered.contains(keyword.to_lowercase().as_str()))
    }
}

/// An ordered table of entries plus the answer used when nothing matches.
///
/// Entry order is a priority order: the first matching entry wins, even
/// if a later one matches more keywords.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QaTable {
    entries: Vec<QaEntry>,
    default_answer: String,
}

impl QaTable {
    /// Creates a table from entries in priority order.
    #[inline]
    pub fn new<S: Into<String>>(
        entries: Vec<QaEntry>,
        default_answer: S,
    ) -> Self {
        Self {
            entries,
            default_answer: default_answer.into(),
        }
    }

    /// Entries in priority order.
    #[inline]
    pub fn entries(&self) -> &[QaEntry] {
        &self.entries
    }

    /// The answer used when no entry matches.
    #[inline]
    pub fn default_answer(&self) -> &str {
        &self.default_answer
    }

    /// Finds the entry that answers `input`, if any.
    pub fn find_entry(&self, input: &str) -> Option<&QaEntry> {
        let lowered = input.to_lowercase();
        self.entries.iter().find(|entry| entry.matches(&lowered))
    }

    /// Finds the answer for `input`, falling back to the default answer.
    #[inline]
    pub fn find_answer(&self, input: &str) -> &str {
        self.find_entry(input)
            .map(|entry| entry.answer.as_str())
            .unwrap_or(self.default_answer.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greeting_table() -> QaTable {
        QaTable::new(
            vec![
                QaEntry::new(["hello", "hi"], "Hello!", "Hey there!"),
                QaEntry::new(["price"], "Pricing?", "It depends."),
            ],
            "No idea.",
        )
    }

    #[test]
    fn test_keyword_match() {
        let table = greeting_table();
        assert_eq!(table.find_answer("Hi there, how are you"), "Hey there!");
        assert_eq!(table.find_answer("What's the PRICE?"), "It depends.");
    }

    #[test]
    fn test_first_match_wins() {
        let table = greeting_table();
        // Both entries match, the earlier one has priority.
        assert_eq!(table.find_answer("hello, what's the price"), "Hey there!");

        let reversed = QaTable::new(
            greeting_table().entries().iter().rev().cloned().collect(),
            "No idea.",
        );
        assert_eq!(
            reversed.find_answer("hello, what's the price"),
            "It depends."
        );
    }

    #[test]
    fn test_substring_semantics() {
        let table = greeting_table();
        // "hi" is contained in "this", containment is the contract.
        assert_eq!(table.find_answer("this"), "Hey there!");
        assert_eq!(table.find_answer("ok"), "No idea.");
        assert_eq!(table.find_answer(""), "No idea.");
    }

    #[test]
    fn test_mixed_case_keywords() {
        let table = QaTable::new(
            vec![QaEntry {
                keywords: vec!["SEO".to_owned()],
                question: "SEO?".to_owned(),
                answer: "Yes.".to_owned(),
            }],
            "No.",
        );
        assert_eq!(table.find_answer("do you do seo"), "Yes.");
        assert_eq!(table.find_entry("Seo please").unwrap().question, "SEO?");
    }
}
