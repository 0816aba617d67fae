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

//! Resume position and working data of one sequence instance.

use std::fmt;

use crate::options::Options;
use crate::State;

/// The suspended execution point of one sequence.
///
/// The state borrows its working data exclusively, so two states can never
/// share a counter. Only `init` and the step function move the resume
/// position; callers may observe it through `state()`.
pub struct SequenceState<'a, D> {
    state: State,
    data: &'a mut D,
    name: Option<String>,
}

impl<'a, D> SequenceState<'a, D> {
    /// Create an unnamed, initialized state
    #[inline]
    pub fn new(data: &'a mut D) -> SequenceState<'a, D> {
        SequenceState::with_opts(data, Default::default())
    }

    pub fn with_opts(data: &'a mut D, opts: Options) -> SequenceState<'a, D> {
        let mut state = SequenceState {
            state: State::NotStarted,
            data,
            name: opts.name,
        };
        state.init();
        state
    }

    /// Rewind to the start of the sequence.
    ///
    /// The working data is left alone; the step function resets it when it
    /// runs from the start.
    pub fn init(&mut self) {
        debug!("Sequence `{}`: init", self.debug_name());
        self.state = State::NotStarted;
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.state == State::Complete
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    #[inline]
    pub fn data(&self) -> &D {
        &*self.data
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().map(|s| &s[..])
    }

    pub fn debug_name(&self) -> &str {
        self.name().unwrap_or("<unnamed>")
    }

    pub(crate) fn data_mut(&mut self) -> &mut D {
        &mut *self.data
    }

    /// Record that iteration `n` produced a value and return control to the caller.
    pub(crate) fn suspend<T>(&mut self, n: u32, value: T) -> Option<T> {
        trace!("Sequence `{}`: suspended at iteration {}", self.debug_name(), n);
        self.state = State::Suspended(n);
        Some(value)
    }

    /// Take the exit path. Nothing is produced.
    pub(crate) fn finish<T>(&mut self) -> Option<T> {
        trace!("Sequence `{}`: complete", self.debug_name());
        self.state = State::Complete;
        None
    }
}

impl<'a, D: fmt::Debug> fmt::Debug for SequenceState<'a, D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Sequence({}, {:?}, {:?})", self.debug_name(), self.state, self.data)
    }
}
