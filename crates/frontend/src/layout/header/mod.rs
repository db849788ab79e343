pub mod header;

pub use header::NavBar;
