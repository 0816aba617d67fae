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

//! The doubling sequence: `counter * 2` for every counter in `0..10`.
//!
//! The body is a single loop with one suspension point. Written as a
//! straight-line generator it would read
//!
//! ```text
//! counter = 0
//! while counter < 10 {
//!     yield counter * 2
//!     counter += 1
//! }
//! ```
//!
//! `step` runs that body one leg at a time, entering it at the position the
//! state recorded on the previous call.

use std::iter::FusedIterator;

use crate::options::Options;
use crate::sequence::SequenceState;
use crate::{Error, Result, State};

/// Number of values the sequence produces
pub const ITERATIONS: i32 = 10;

/// Advance the sequence by one value.
///
/// Returns `Ok(Some(value))` while values remain and `Ok(None)` on the call
/// that completes the sequence. Stepping a complete sequence is an error and
/// leaves both the counter and the state untouched.
pub fn step(state: &mut SequenceState<'_, i32>) -> Result<Option<i32>> {
    let counter = match state.state() {
        State::NotStarted => {
            let counter = state.data_mut();
            *counter = 0;
            *counter
        }
        State::Suspended(_) => {
            // Resume right after the yield
            let counter = state.data_mut();
            *counter += 1;
            *counter
        }
        State::Complete => {
            warn!("Sequence `{}`: stepped after completion", state.debug_name());
            return Err(Error::Finished);
        }
    };

    if counter < ITERATIONS {
        Ok(state.suspend(counter as u32, counter * 2))
    } else {
        Ok(state.finish())
    }
}

/// Iterator over the doubling sequence.
///
/// Yields the ten values and then keeps returning `None`; it never steps a
/// complete state.
#[derive(Debug)]
pub struct Doubles<'a> {
    state: SequenceState<'a, i32>,
}

impl<'a> Doubles<'a> {
    pub fn new(counter: &'a mut i32) -> Doubles<'a> {
        Doubles::from_state(SequenceState::new(counter))
    }

    pub fn with_opts(counter: &'a mut i32, opts: Options) -> Doubles<'a> {
        Doubles::from_state(SequenceState::with_opts(counter, opts))
    }

    /// Continue an existing sequence from wherever it is suspended
    pub fn from_state(state: SequenceState<'a, i32>) -> Doubles<'a> {
        Doubles { state }
    }

    pub fn state(&self) -> &SequenceState<'a, i32> {
        &self.state
    }

    pub fn into_state(self) -> SequenceState<'a, i32> {
        self.state
    }
}

impl<'a> Iterator for Doubles<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.state.is_complete() {
            return None;
        }
        step(&mut self.state).ok().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.state.state() {
            State::NotStarted => ITERATIONS as usize,
            State::Suspended(n) => ITERATIONS as usize - 1 - n as usize,
            State::Complete => 0,
        };
        (remaining, Some(remaining))
    }
}

impl<'a> FusedIterator for Doubles<'a> {}
