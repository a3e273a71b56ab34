use std::io;

use self::adapters::{EmitToStdoutAdapter, EmitToWriterAdapter};

pub mod adapters;

pub struct ConsoleModule {
    pub report_adapter: EmitToStdoutAdapter,
}

impl ConsoleModule {
    pub fn initialize() -> Self {
        Self {
            report_adapter: EmitToWriterAdapter::new(io::stdout()),
        }
    }
}
