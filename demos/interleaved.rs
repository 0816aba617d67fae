extern crate env_logger;
extern crate resumable;

use resumable::doubles::Doubles;
use resumable::Options;

fn main() {
    env_logger::init();

    let mut left = 0;
    let mut right = 0;

    let evens = Doubles::with_opts(&mut left, Options { name: Some("left".to_string()) });
    let more = Doubles::with_opts(&mut right, Options { name: Some("right".to_string()) });

    for (l, r) in evens.zip(more.skip(1)) {
        println!("{} {}", l, r);
    }
}
