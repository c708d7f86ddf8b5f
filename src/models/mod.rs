mod selection;
mod series_buffer;

pub use selection::{SelectionError, SelectionStore};
pub use series_buffer::SeriesBuffer;
