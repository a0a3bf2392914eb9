//! # Carlot Architecture
//!
//! Carlot keeps a dealership's vehicle inventory in one comma-delimited file
//! and lets a front end add, edit, delete and sort the rows. The library is
//! UI-agnostic; the bundled binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders the table, exit codes          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Table controller: owns the in-memory table               │
//! │  - Holds the sort state, flushes mutations to the store     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, normalization, id checks, sorting            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait                                        │
//! │  - CsvStore (production), InMemoryStore (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//!
//! - Every car in the table has a distinct `id` after any successful add or
//!   edit.
//! - Mutations are checked completely before the table changes; a rejected
//!   mutation leaves both the table and the file as they were.
//! - A successful mutation is written to the store before it returns.
//! - Sorting only reorders the table; the file keeps insertion order.
//!
//! ## Module Overview
//!
//! - [`api`]: the table controller facade
//! - [`commands`]: add, edit, delete, list and sort
//! - [`store`]: storage trait and implementations
//! - [`model`]: `Car`, `Field`, `FieldSet`
//! - [`normalize`]: unit suffixes and completeness checks
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod store;
