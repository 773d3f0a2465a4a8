mod frame;
mod open_state;
mod sheet;
mod viewport;

pub use frame::{next_frame, now_ms};
pub use open_state::{use_open_state, OpenHandle};
pub use sheet::{use_sheet, SheetHandle};
pub use viewport::use_viewport;
