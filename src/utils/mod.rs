pub mod date;
pub mod debug;
pub mod timezone;

pub use date::{parse_date, parse_timestamp};
pub use debug::{debug_enabled, set_debug};
pub use timezone::Timezone;
