// Leaves
pub mod avatar;
pub mod badge;
pub mod button;
pub mod card;
pub mod checkbox;
pub mod label;
pub mod separator;
pub mod switch;

// Disclosure
pub mod accordion;
pub mod collapsible;

// Drag-dismiss panels and dialogs
pub mod action_sheet;
pub mod dialog;
pub mod overlay;

// Menus
pub mod configured_menu;
pub mod context_menu;
pub mod dropdown_menu;
pub mod menubar;

// Pickers
pub mod combobox;
pub mod radio_group;
pub mod select;
pub mod slider;

// Forms: depend on label, checkbox, radio_group, select, slider, switch
pub mod choice_field;
pub mod file_field;
pub mod form;
pub mod number_field;
pub mod range_field;
pub mod switch_field;
pub mod text_field;

// Re-exports for convenience
pub use accordion::*;
pub use action_sheet::*;
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use checkbox::*;
pub use choice_field::*;
pub use collapsible::*;
pub use combobox::*;
pub use configured_menu::*;
pub use context_menu::*;
pub use dialog::*;
pub use dropdown_menu::*;
pub use file_field::*;
pub use form::*;
pub use label::*;
pub use menubar::*;
pub use number_field::*;
pub use overlay::*;
pub use radio_group::*;
pub use range_field::*;
pub use select::*;
pub use separator::*;
pub use slider::*;
pub use switch::*;
pub use switch_field::*;
pub use text_field::*;
