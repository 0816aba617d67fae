// The MIT License (MIT)

// Copyright (c) 2015 Rustcc developers

// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:

// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Stackless resumable sequences.
//!
//! A sequence is driven by repeatedly calling a step function on a
//! `SequenceState`. Each call resumes where the previous one suspended,
//! produces at most one value and records where to resume next. No stack is
//! kept alive between calls: the resume position is an explicit `State` and
//! everything else lives in caller-owned working data.
//!
//! ```
//! use resumable::{doubles, SequenceState};
//!
//! let mut counter = 0;
//! let mut state = SequenceState::new(&mut counter);
//!
//! let mut produced = Vec::new();
//! while let Some(value) = doubles::step(&mut state).unwrap() {
//!     produced.push(value);
//! }
//!
//! assert!(state.is_complete());
//! assert_eq!(produced, [0, 2, 4, 6, 8, 10, 12, 14, 16, 18]);
//! ```

#[macro_use]
extern crate log;

use std::error;
use std::fmt;

pub use builder::Builder;
pub use options::Options;
pub use sequence::SequenceState;

pub mod builder;
pub mod doubles;
pub mod options;
pub mod sequence;

#[cfg(test)]
mod tests;

/// Resume position of a sequence
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum State {
    /// Initialized, the body has not run yet
    NotStarted,

    /// Suspended right after producing the value of iteration `n`.
    /// Resuming continues after that suspension point.
    Suspended(u32),

    /// Finished, cannot be resumed again
    Complete,
}

/// Return type of stepping.
///
/// See `doubles::step` for more detail
pub type Result<T> = ::std::result::Result<T, Error>;

/// Step Error
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Error {
    /// Sequence is already complete
    Finished,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Finished => write!(f, "sequence is already complete"),
        }
    }
}

impl error::Error for Error {}
