//! Topic input field.

/// Current topic text, replaced verbatim on every edit.
///
/// No trimming: a topic of only spaces counts as non-empty. Editing the topic
/// never touches lane results; results from an earlier topic stay visible
/// until their lane is triggered again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicField {
    value: String,
}

impl TopicField {
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
