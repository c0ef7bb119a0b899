//! CLI commands for the llamatok tokenizer.

pub mod benchmark;
pub mod decode;
pub mod encode;
pub mod inspect;

pub use benchmark::BenchmarkCommand;
pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use inspect::InspectCommand;

use std::io::Read;

/// Read the argument itself, or all of stdin when it is `-`.
pub(crate) fn read_input(arg: String) -> std::io::Result<String> {
    if arg == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(arg)
    }
}
