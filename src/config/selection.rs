/// Selection policy.
pub struct SelectionConfig {
    /// Maximum number of coins that can be tracked at once.
    pub capacity: usize,
    /// Durable storage key holding the serialized selection.
    pub storage_key: &'static str,
}

pub const SELECTION: SelectionConfig = SelectionConfig {
    capacity: 5,
    storage_key: "selectedCoins",
};
