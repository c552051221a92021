//! Rendering compile errors against the pattern they came from.

mod printer;


pub use printer::ErrorPrinter;
