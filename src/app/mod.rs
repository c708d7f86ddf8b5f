mod pages;
mod root;
mod state;

pub use state::Page;

pub(crate) use state::{CatalogState, DetailPanel, UiMemory};

pub use root::App;
