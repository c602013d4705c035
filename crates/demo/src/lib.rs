//! `solid-demo` — the sample checkout and registration runs, packaged as
//! functions so the binary and the integration tests share them.

pub mod scenarios;
