pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::{fold_label, mins2readable};
pub use time::ClockTime;
