pub mod server;

pub use server::{GuideMcpServer, run_server};
