//! Status Messages

/// Identifies one shown message, so a late clear can't hide a newer one
pub type MessageId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn css_class(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl UiMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: MessageKind::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: MessageKind::Error }
    }
}

/// Class for the `#message` region
pub fn banner_class(message: Option<&UiMessage>) -> &'static str {
    match message {
        Some(message) => message.kind.css_class(),
        None => "hidden",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_class() {
        let ok = UiMessage::success("Signed up");
        let err = UiMessage::error("Already signed up");
        assert_eq!(banner_class(Some(&ok)), "success");
        assert_eq!(banner_class(Some(&err)), "error");
        assert_eq!(banner_class(None), "hidden");
    }
}
