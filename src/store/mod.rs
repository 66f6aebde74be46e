// Models and the canonical collection
pub mod bookmark;

// Input validation
pub mod validate;

// Snapshot persistence
pub mod snapshot;
