//! UI Components
//!
//! Leptos components of the board page.

mod add_card_form;
mod add_list_column;
mod board_view;
mod card_tile;
mod delete_confirm_button;
mod list_column;
mod notice_bar;
mod title_bar;

pub use add_card_form::AddCardForm;
pub use add_list_column::AddListColumn;
pub use board_view::BoardView;
pub use card_tile::CardTile;
pub use delete_confirm_button::DeleteConfirmButton;
pub use list_column::ListColumn;
pub use notice_bar::NoticeBar;
pub use title_bar::TitleBar;
