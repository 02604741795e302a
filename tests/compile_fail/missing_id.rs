#![allow(dead_code)]

use cortex::RunTimeTyped;

#[derive(RunTimeTyped)]
struct Token {
    #[cortex(identity)]
    identity: cortex::Identity,
}

fn main() {}
