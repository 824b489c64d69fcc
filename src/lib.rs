mod cont_frac;
mod errors;
mod render;

pub use cont_frac::{collapse, expand};
pub use errors::ContFracError;
pub use render::{render_continued, render_reduced, Block};
