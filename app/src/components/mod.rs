mod batch_input;
mod header;
mod recipe;
mod style_select;

pub use batch_input::BatchInput;
pub use header::Header;
pub use recipe::Recipe;
pub use style_select::StyleSelect;
