pub mod catch_panic;
pub mod cors;
pub mod locale;

pub use catch_panic::CatchPanic;
pub use cors::create_cors;
pub use locale::{negotiate, LocaleScope};
