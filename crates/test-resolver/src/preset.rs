use brandsetu_chat_resolver::{ErrorKind, Resolution};
use serde::{Deserialize, Serialize};

/// The scripted outcome of one `resolve` call.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PresetOutcome {
    #[serde(rename = "reply")]
    Reply(Resolution),
    #[serde(rename = "failure")]
    Failure(ErrorKind),
}

impl PresetOutcome {
    /// A reply with no suggestions.
    #[inline]
    pub fn reply<S: Into<String>>(reply: S) -> Self {
        Self::Reply(Resolution::with_reply(reply))
    }

    /// A reply carrying follow-up suggestions.
    #[inline]
    pub fn reply_with_suggestions<S, I, T>(reply: S, suggestions: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::Reply(Resolution::with_reply(reply).with_suggestions(suggestions))
    }
}
