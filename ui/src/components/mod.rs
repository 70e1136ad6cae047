//! Reusable UI components

pub mod chat_message;
pub mod composer;
pub mod loading;
pub mod media_grid;
pub mod media_modal;
pub mod navbar;
pub mod sidebar;
pub mod toast;
pub mod user_menu;

pub use chat_message::ChatBubble;
pub use composer::Composer;
pub use loading::{LoadingDots, LoadingSpinner, TypingIndicator};
pub use media_grid::MediaGrid;
pub use media_modal::MediaModal;
pub use navbar::Navbar;
pub use sidebar::Sidebar;
pub use toast::Toaster;
pub use user_menu::UserMenu;
