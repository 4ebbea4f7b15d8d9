//! Core library for the maketest-merge command line application.
//!
//! The tool copies scores produced by an automated test runner into a
//! gradebook export, translating the runner's student identifiers into the
//! gradebook's through a hand-maintained mapping table. CSV adapters live
//! under [`maketest::merge::io`], the table representation in
//! [`maketest::merge::model`], column and row lookup in
//! [`maketest::merge::resolve`], the join itself in [`maketest::merge::join`],
//! and file-level orchestration in [`maketest::merge::sync`].

pub mod maketest;

pub use maketest::merge::{
    Result, ToolError, config, error, io, join, menu, model, resolve, sync,
};
