pub mod number;
pub mod style;
pub mod text;

pub use number::{format_currency, format_percent};
pub use text::{category_label, stage_label, truncate};
