// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use std::fmt::{self, Display};

use failure::Fail;

/// The error type for parsing regular expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    input: String,
    offset: usize,
    message: &'static str,
}

impl Error {
    pub(crate) fn new(input: &str, offset: usize, message: &'static str) -> Error {
        Error {
            input: input.to_string(),
            offset,
            message,
        }
    }

    /// The regular expression that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The byte offset in `input` at which the parse failed.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// A description of what went wrong.
    pub fn message(&self) -> &str {
        self.message
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Invalid regular expression (\"{}\") at offset {}: {}",
            self.input, self.offset, self.message
        )
    }
}

impl Fail for Error {}

/// A specilized `Result` type for parsing regular expressions.
pub type Result<T> = ::std::result::Result<T, Error>;
