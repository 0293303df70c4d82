//! User API Server Library
//!
//! A REST API over a single `users` table: five endpoints, each making one
//! parameterized SQL call through a shared PostgreSQL pool.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod user;
