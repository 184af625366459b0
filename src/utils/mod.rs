pub mod clock;
pub mod date;
pub mod number;
pub mod path;

pub use clock::{Clock, FixedClock, SystemClock};
