//! # Qboard Architecture
//!
//! Qboard is a **UI-agnostic question-board library**: a fixed list of
//! coding-interview questions, a search/filter/sort view over it, and a small
//! persisted record of which questions are done. The `qboard` binary is one
//! client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, render.rs)                    │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Loads the board once, normalizes selectors               │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - toggle, reset, import, export, list, status, config      │
//! │  - Operates on a QuestionBoard, returns CmdResult           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Board + Pipeline + Storage                                 │
//! │  - board.rs: the one owner of records and store             │
//! │  - loader.rs / pipeline.rs: parse, filter, sort (pure)      │
//! │  - store/: ProgressStore trait, FileStore, InMemoryStore    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! CSV text → [`loader::parse_csv`] → merge saved progress → full record set →
//! [`pipeline::derive`] (search, difficulty, sort) → displayed list.
//!
//! Toggle, reset and import change the record set and write the progress slot.
//! The displayed list is never cached; it is derived again from the current
//! state each time it is asked for.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never exits the
//! process and never prompts. Diagnostics go through `tracing`; anything the
//! user should see travels back as a [`commands::CmdMessage`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`board`]: [`board::QuestionBoard`], owner of the record set and store state
//! - [`commands`]: Business logic for each operation
//! - [`loader`]: CSV parsing, data sources, progress merge
//! - [`pipeline`]: Filtering, sorting, progress percentage
//! - [`store`]: Progress slot abstraction and implementations
//! - [`model`]: Core data types
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod board;
pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod store;
