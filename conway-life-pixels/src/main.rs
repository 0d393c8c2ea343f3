#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod config;

use pixels_main_support::animate;
use winit::error::EventLoopError;

fn main() -> Result<(), EventLoopError> {
    env_logger::init();
    animate(config::load())
}
