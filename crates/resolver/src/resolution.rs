use serde::{Deserialize, Serialize};

/// The outcome of a successful resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    /// The reply text, if the resolver produced one.
    ///
    /// `None` means the resolver understood the request but has nothing
    /// to say, the controller substitutes a "didn't understand" reply.
    pub reply: Option<String>,
    /// Follow-up suggestions, in display order.
    ///
    /// An empty list means "keep the suggestions cleared".
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl Resolution {
    /// Creates a `Resolution` with the given reply and no suggestions.
    #[inline]
    pub fn with_reply<S: Into<String>>(reply: S) -> Self {
        Self {
            reply: Some(reply.into()),
            suggestions: vec![],
        }
    }

    /// Sets the follow-up suggestions.
    #[inline]
    pub fn with_suggestions<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions = suggestions.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let resolution = Resolution::with_reply("Hi")
            .with_suggestions(["Pricing", "Contact"]);
        assert_eq!(resolution.reply.as_deref(), Some("Hi"));
        assert_eq!(resolution.suggestions, vec!["Pricing", "Contact"]);
    }

    #[test]
    fn test_missing_suggestions_deserialize() {
        let resolution: Resolution =
            serde_json::from_str(r#"{ "reply": null }"#).unwrap();
        assert_eq!(resolution, Resolution::default());
    }
}
