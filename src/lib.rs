pub mod assist;
pub mod cli;
pub mod io;
pub mod model;
pub mod ops;
pub mod seed;
pub mod util;
pub mod views;
pub mod workspace;
