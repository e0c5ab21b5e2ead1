mod cross;
mod pointer;

pub use cross::Cross;
pub use pointer::Pointer;
