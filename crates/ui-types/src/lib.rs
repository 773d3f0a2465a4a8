pub mod error;

// Drag-to-dismiss panels
pub mod drag;
pub mod motion;
pub mod presentation;
pub mod sheet;

// Component contracts
pub mod listbox;
pub mod menu;
pub mod open_state;

// Forms
pub mod form;
pub mod validation;

pub mod tokens;

pub use error::*;

pub use drag::*;
pub use form::*;
pub use listbox::*;
pub use menu::*;
pub use motion::*;
pub use open_state::*;
pub use presentation::*;
pub use sheet::*;
pub use tokens::*;
pub use validation::*;
