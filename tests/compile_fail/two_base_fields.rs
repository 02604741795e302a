#![allow(dead_code)]

use cortex::RunTimeTyped;

#[derive(RunTimeTyped)]
#[cortex(id = 400_906)]
struct Light {
    #[cortex(base)]
    first: cortex::objects::Renderable,
    #[cortex(base)]
    second: cortex::objects::Renderable,
}

fn main() {}
