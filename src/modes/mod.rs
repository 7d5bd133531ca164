mod common;
mod local;
mod socket;

pub use common::limit_frame_rate;
pub use local::run_local;
pub use socket::run_socket;
