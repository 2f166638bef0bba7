pub mod diagnostics;
pub mod printers;
