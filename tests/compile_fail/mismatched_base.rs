#![allow(dead_code)]

use cortex::RunTimeTyped;

#[derive(RunTimeTyped)]
#[cortex(id = 400_907, base = cortex::objects::Primitive)]
struct Light {
    #[cortex(base)]
    renderable: cortex::objects::Renderable,
}

fn main() {}
