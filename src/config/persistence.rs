//! File persistence configuration

/// Configuration for Application State Persistence
pub struct AppPersistenceConfig {
    /// Path for saving/loading egui UI state (current page, search term)
    pub state_path: &'static str,
}

/// Configuration for the durable coin selection (native builds only)
pub struct SelectionPersistenceConfig {
    /// JSON file that plays the role of the browser's localStorage
    pub path: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub app: AppPersistenceConfig,
    pub selection: SelectionPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    app: AppPersistenceConfig {
        state_path: ".states.json",
    },
    selection: SelectionPersistenceConfig {
        path: ".selection.json",
    },
};
