//! Server-rendered flash messages
//!
//! The page template renders each pending flash as an element like
//! `<div data-flash data-category="success" data-message="..."></div>`.
//! On load these become toasts and the elements are removed.

use super::toast::ToastKind;

/// Selector matching flash elements
pub const FLASH_SELECTOR: &str = "[data-flash]";
pub const CATEGORY_ATTR: &str = "data-category";
pub const MESSAGE_ATTR: &str = "data-message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub category: Option<String>,
    pub message: String,
}

impl FlashMessage {
    /// Build from the element's attributes; `None` when there is no message
    pub fn from_attributes(category: Option<String>, message: Option<String>) -> Option<Self> {
        let message = message.filter(|m| !m.trim().is_empty())?;
        Some(Self { category, message })
    }

    pub fn kind(&self) -> ToastKind {
        self.category
            .as_deref()
            .map(ToastKind::from_category)
            .unwrap_or(ToastKind::Notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_attributes() {
        let flash = FlashMessage::from_attributes(
            Some("success".to_string()),
            Some("Login realizado com sucesso!".to_string()),
        )
        .unwrap();
        assert_eq!(flash.kind(), ToastKind::Success);
        assert_eq!(flash.message, "Login realizado com sucesso!");
    }

    #[test]
    fn test_missing_category_is_notice() {
        let flash = FlashMessage::from_attributes(None, Some("Olá".to_string())).unwrap();
        assert_eq!(flash.kind(), ToastKind::Notice);
    }

    #[test]
    fn test_missing_message_is_skipped() {
        assert!(FlashMessage::from_attributes(Some("danger".to_string()), None).is_none());
        assert!(FlashMessage::from_attributes(Some("danger".to_string()), Some("  ".to_string())).is_none());
    }
}
