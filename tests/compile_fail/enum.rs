#![allow(dead_code)]

use cortex::RunTimeTyped;

#[derive(RunTimeTyped)]
#[cortex(id = 400_901)]
enum Shape {
    Circle,
}

fn main() {}
