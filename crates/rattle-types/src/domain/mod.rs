pub mod deal;
pub mod stage;

pub use deal::*;
pub use stage::*;
