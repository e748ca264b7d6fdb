/// API route handlers
///
/// - `health`: Health check endpoint
/// - `classes`: Class search and registration

pub mod classes;
pub mod health;
