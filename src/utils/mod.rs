pub mod colors;
pub mod csv_text;
pub mod date;
pub mod formatting;
pub mod path;
pub mod period;
pub mod table;
pub mod time;
pub mod zone;

pub use formatting::mins2readable;
