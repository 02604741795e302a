#![allow(dead_code)]

use cortex::RunTimeTyped;

#[derive(RunTimeTyped)]
#[cortex(id = 400_908, colour = "red")]
struct Token {
    #[cortex(identity)]
    identity: cortex::Identity,
}

fn main() {}
