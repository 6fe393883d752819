pub mod frame_loop;
pub mod pointer;
pub mod spring;
pub mod starfield;
