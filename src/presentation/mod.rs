/// Activity type and lead activity models
pub mod activity;
/// Smart campaign models
pub mod campaign;
/// Lead, lead partition and write outcome models
pub mod lead;
/// Static list models
pub mod list;
