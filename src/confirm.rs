//! Confirmation Prompt
//!
//! Asked before any destructive action. Closures implement [`Confirm`], so
//! tests never need a real dialog.

pub trait Confirm {
    /// `subject` is who is affected, `context` is where
    fn confirm(&self, subject: &str, context: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str, &str) -> bool,
{
    fn confirm(&self, subject: &str, context: &str) -> bool {
        self(subject, context)
    }
}

pub fn prompt_text(subject: &str, context: &str) -> String {
    format!("Remove {} from {}?", subject, context)
}

/// `window.confirm`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, subject: &str, context: &str) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        window
            .confirm_with_message(&prompt_text(subject, context))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_text() {
        assert_eq!(prompt_text("michael", "Chess Club"), "Remove michael from Chess Club?");
    }

    #[test]
    fn test_closure_as_confirm() {
        let only_chess = |_: &str, context: &str| context == "Chess Club";
        assert!(only_chess.confirm("a", "Chess Club"));
        assert!(!only_chess.confirm("a", "Drama"));
    }
}
