pub mod components;
pub mod hooks;
pub mod theme;

pub use hooks::{use_open_state, use_sheet, use_viewport, OpenHandle, SheetHandle};
pub use theme::{ThemeFamily, ThemeSeed, ThemeState, TokenStyles};
