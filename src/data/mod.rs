pub mod csv_io;
pub mod curve_look;
pub mod plot;
pub mod reading;
pub mod scanner;
pub mod session;
