pub mod session;

pub use session::{ChartSession, ChartSessionConfig};
