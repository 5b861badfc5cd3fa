// Composition root for the webhook buffer.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in-memory payload buffer.
// - Wire it into the use case handlers and the HTTP router.

pub mod config;
pub mod http;
pub mod state;
