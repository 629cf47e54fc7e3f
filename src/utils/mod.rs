mod format_int;
mod traits;

pub use format_int::NiceInt;
pub use traits::Engine;
