pub mod convert;
pub mod labradar;
pub mod source;
pub mod stats;

pub use convert::{ConvertOptions, Converter};
pub use labradar::LabradarDocument;
