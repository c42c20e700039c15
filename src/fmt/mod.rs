//! Header rendering, split by concern: the decoration policy, the timestamp source,
//! and the assembly of the line itself.

mod clock;
mod decoration;
mod header;

pub use clock::{Clock, FixedClock, MILLIS_FORMAT, SECONDS_FORMAT, SystemClock, TimeZone};
pub use decoration::{Decoration, RESET};
pub use header::{Header, finish_line, write_header, write_line_operands, write_sequence};
