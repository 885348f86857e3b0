mod size;
mod rcp;
mod pi;
mod si;

pub use size::Size;
pub use rcp::{RcpInterface, DEFAULT_READ_CYCLES, DEFAULT_WRITE_CYCLES};
pub use pi::PiInterface;
pub use si::SiInterface;
