// Typed access to the REST endpoints
pub mod api;

// Page state driving the CRUD calls
pub mod state;
