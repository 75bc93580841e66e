//! Demo components exercising the engine end to end.

pub use counter::Counter;
pub use hello::hello;
pub use toggle::Toggle;

mod counter;
mod hello;
mod toggle;
