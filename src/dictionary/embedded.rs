//! Embedded sample word lists
//!
//! Word lists compiled into the binary at build time from `data/`.

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/extra_guesses.rs"));
