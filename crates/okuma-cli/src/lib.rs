//! # okuma-cli — Okuma Library Linter
//!
//! `okuma [-v...] [LIBRARY]` checks a library directory and prints the
//! first violation as a single `[FAILED Check ...]` line. A conforming
//! library prints nothing.
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; every check lives in `okuma-check`.
//! - stdout carries only the usage hint or the failure line. Logs go to
//!   stderr.

pub mod lint;
