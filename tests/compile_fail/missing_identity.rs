#![allow(dead_code)]

use cortex::RunTimeTyped;

#[derive(RunTimeTyped)]
#[cortex(id = 400_903)]
struct Token {
    value: u32,
}

fn main() {}
