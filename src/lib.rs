//! Single-endpoint BFHL service.
//!
//! `POST /bfhl` validates a one-key JSON body, dispatches to one of five
//! computations (fibonacci, prime, lcm, hcf, AI), and replies with a
//! uniform success/error envelope. `GET /health` reports liveness.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod services;
pub mod startup;
