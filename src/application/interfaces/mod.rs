/// Activity service interface
pub mod activity;
/// Campaign service interface
pub mod campaign;
/// Lead service interface
pub mod lead;
/// Static list service interface
pub mod list;
