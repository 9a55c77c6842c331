pub mod common;
pub mod completions;
pub mod list;
pub mod platforms;
pub mod search;
