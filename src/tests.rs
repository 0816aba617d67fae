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

use crate::doubles::{self, Doubles};
use crate::{Builder, Error, SequenceState, State};

const EXPECTED: [i32; 10] = [0, 2, 4, 6, 8, 10, 12, 14, 16, 18];

fn drain(state: &mut SequenceState<'_, i32>) -> Vec<i32> {
    let mut produced = Vec::new();
    loop {
        let value = doubles::step(state).ok().expect("Failed to step");
        if state.is_complete() {
            assert_eq!(value, None);
            break;
        }
        produced.push(value.expect("Suspended without a value"));
    }
    produced
}

#[test]
fn test_sequence_basic() {
    let mut counter = 0;
    let mut state = SequenceState::new(&mut counter);

    assert_eq!(drain(&mut state), EXPECTED);
}

#[test]
fn test_sequence_eleventh_step_completes() {
    let mut counter = 0;
    let mut state = SequenceState::new(&mut counter);

    for _ in 0..10 {
        assert!(doubles::step(&mut state).unwrap().is_some());
        assert!(!state.is_complete());
    }

    assert_eq!(doubles::step(&mut state).unwrap(), None);
    assert!(state.is_complete());
}

#[test]
fn test_sequence_complete_never_reverts() {
    let mut counter = 0;
    let mut state = SequenceState::new(&mut counter);
    drain(&mut state);

    for _ in 0..3 {
        assert!(doubles::step(&mut state).is_err());
        assert!(state.is_complete());
    }
}

#[test]
fn test_sequence_reinit() {
    let mut counter = 0;
    let mut state = SequenceState::new(&mut counter);

    assert_eq!(drain(&mut state), EXPECTED);

    state.init();
    assert_eq!(state.state(), State::NotStarted);
    assert_eq!(drain(&mut state), EXPECTED);
}

#[test]
fn test_sequence_reinit_midway() {
    let mut counter = 0;
    let mut state = SequenceState::new(&mut counter);
    for _ in 0..4 {
        doubles::step(&mut state).unwrap();
    }

    state.init();
    assert_eq!(drain(&mut state), EXPECTED);
}

#[test]
fn test_sequence_interleaved() {
    let mut counter_a = 0;
    let mut counter_b = 0;
    let mut a = Builder::new().name("A".to_string()).init(&mut counter_a);
    let mut b = Builder::new().name("B".to_string()).init(&mut counter_b);

    let mut produced_a = Vec::new();
    let mut produced_b = Vec::new();

    // B starts two steps behind A
    produced_a.push(doubles::step(&mut a).unwrap().unwrap());
    produced_a.push(doubles::step(&mut a).unwrap().unwrap());

    while !a.is_complete() || !b.is_complete() {
        if !a.is_complete() {
            if let Some(value) = doubles::step(&mut a).unwrap() {
                produced_a.push(value);
            }
        }
        if !b.is_complete() {
            if let Some(value) = doubles::step(&mut b).unwrap() {
                produced_b.push(value);
            }
        }
    }

    assert_eq!(produced_a, EXPECTED);
    assert_eq!(produced_b, EXPECTED);
    assert_eq!(*a.data(), 10);
    assert_eq!(*b.data(), 10);
}

#[test]
fn test_sequence_step_after_complete_keeps_data() {
    let mut counter = 0;
    {
        let mut state = SequenceState::new(&mut counter);
        drain(&mut state);

        assert_eq!(doubles::step(&mut state), Err(Error::Finished));
        assert_eq!(state.state(), State::Complete);
    }

    assert_eq!(counter, 10);
}

#[test]
fn test_sequence_iterator_matches_steps() {
    let mut counter_a = 0;
    let mut counter_b = 0;

    let from_iter: Vec<i32> = Doubles::new(&mut counter_a).collect();
    let from_steps = drain(&mut SequenceState::new(&mut counter_b));

    assert_eq!(from_iter, from_steps);
}
