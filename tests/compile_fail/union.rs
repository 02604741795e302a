#![allow(dead_code)]

use cortex::RunTimeTyped;

#[derive(RunTimeTyped)]
#[cortex(id = 400_902)]
union Bits {
    int: u32,
    float: f32,
}

fn main() {}
