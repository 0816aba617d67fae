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

use crate::options::Options;
use crate::sequence::SequenceState;

/// Sequence configuration. Provides control over the properties of new sequence states.
///
/// ```
/// use resumable::{doubles, Builder};
///
/// let mut counter = 0;
/// let mut state = Builder::new().name(format!("Sequence #{}", 1))
///                               .init(&mut counter);
///
/// assert_eq!(Some(0), doubles::step(&mut state).unwrap());
/// assert_eq!(Some("Sequence #1"), state.name());
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    opts: Options,
}

impl Builder {
    /// Generate the base configuration for a sequence, from which configuration methods can be chained.
    pub fn new() -> Builder {
        Builder {
            opts: Default::default(),
        }
    }

    /// Name the sequence-to-be. The name is used for identification in log messages only.
    pub fn name(mut self, name: String) -> Builder {
        self.opts.name = Some(name);
        self
    }

    /// Create an initialized sequence state borrowing `data` as its working data.
    pub fn init<D>(self, data: &mut D) -> SequenceState<'_, D> {
        SequenceState::with_opts(data, self.opts)
    }
}
