//! # Moderation Services

mod account;
mod moderation;

pub use account::AccountService;
pub use moderation::ModerationService;
