pub mod cli;
pub mod history;
pub mod mandelbrot;
pub mod ports;
