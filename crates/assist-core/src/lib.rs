mod format;
mod lenient;
mod model;

pub use format::*;
pub use model::*;
