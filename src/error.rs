// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use failure::Fail;
use std::result;

/// The error type for the drivers built on top of the derivative engine.
///
/// The algebraic operations themselves (`nullable`, `derive`, `simplify` and
/// `matches`) cannot fail.
#[derive(Debug, Fail, PartialEq, Eq)]
pub enum Error {
    /// A term or an input symbol uses a symbol that is not part of the
    /// declared finite alphabet. The symbol is given in its `Debug` form.
    #[fail(display = "The symbol {} is not part of the declared alphabet.", _0)]
    SymbolOutsideAlphabet(String),

    /// Building an automaton discovered more states than the configured limit.
    #[fail(display = "The automaton exceeded its limit of {} states.", _0)]
    StateLimitExceeded(usize),

    /// Building a term would nest it deeper than `DEPTH_LIMIT`. The value is
    /// the depth the term would have had.
    #[fail(display = "The term would be {} levels deep, beyond the supported depth.", _0)]
    DepthLimitExceeded(usize),
}

/// A specialized Result type for the drivers of the derivative engine.
pub type Result<T> = result::Result<T, Error>;
