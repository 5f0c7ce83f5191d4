// Composition root for the time clock service.
//
// Responsibilities
// - Read config from environment.
// - Identify the caller from request headers.
// - Wire the use case handlers into the REST and GraphQL surfaces.
// - Seed demo data for local runs.

pub mod actor;
pub mod config;
pub mod graphql;
pub mod http;
pub mod seed;
pub mod state;
