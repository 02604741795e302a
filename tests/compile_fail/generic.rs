#![allow(dead_code)]

use cortex::RunTimeTyped;

#[derive(RunTimeTyped)]
#[cortex(id = 400_900)]
struct Wrapper<T> {
    value: T,
}

fn main() {}
