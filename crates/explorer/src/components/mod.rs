pub mod side_toggle;
pub mod story_section;

pub use side_toggle::SideToggle;
pub use story_section::StorySection;
