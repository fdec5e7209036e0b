//! Notifications
//!
//! Transient toasts, fed by backend replies and by flash messages the
//! server renders into the page.

pub mod flash;
pub mod toast;

pub use flash::{FlashMessage, CATEGORY_ATTR, FLASH_SELECTOR, MESSAGE_ATTR};
pub use toast::{
    mutation_notice, Toast, ToastId, ToastKind, ToastPhase, ToastQueue, ENTER_DELAY_MS, FADE_MS,
    VISIBLE_MS,
};
