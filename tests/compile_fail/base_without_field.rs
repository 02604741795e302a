#![allow(dead_code)]

use cortex::RunTimeTyped;

#[derive(RunTimeTyped)]
#[cortex(id = 400_905, base = cortex::objects::Renderable)]
struct Light {
    intensity: f32,
}

fn main() {}
