// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! A textual syntax for the regular expressions of the [rederiv] crate.
//!
//! The syntax is the conventional one (literals, `|`, concatenation, `*`,
//! `+`, `?` and bounded repetition) extended with `&` for intersection and
//! `~` (or `¬`) for complement. Parsing produces a raw `Term<char>`.
//!
//! ```
//! use rederiv::matches;
//! use rederiv_syntax::parse;
//!
//! // every word over {a, b} without "aa" in it
//! let term = parse("(a|b)* & ~((a|b)* a a (a|b)*)").unwrap();
//!
//! assert!(matches(&term, "abab".chars()));
//! assert!(!matches(&term, "baab".chars()));
//! ```
//!
//! [rederiv]: https://crates.io/crates/rederiv

#![deny(missing_docs)]

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

mod error;
mod parser;

pub use crate::error::{Error, Result};
pub use crate::parser::{parse, Parser};
