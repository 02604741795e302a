#![allow(dead_code)]

use cortex::RunTimeTyped;

#[derive(RunTimeTyped)]
#[cortex(id = 400_904)]
struct Light {
    #[cortex(base)]
    renderable: cortex::objects::Renderable,
    #[cortex(identity)]
    identity: cortex::Identity,
}

fn main() {}
