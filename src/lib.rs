// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// How it is used
// - Tests import modules from this crate root to reach the code under test.

pub mod core {
    pub mod billing;
    pub mod consumer;
    pub mod export;
    pub mod ports;
}

pub mod application {
    pub mod errors;
    pub mod repositories;
    pub mod command_handlers {
        pub mod import_roster_handler;
        pub mod record_reading_handler;
    }
    pub mod query_handlers {
        pub mod consumer_queries;
        pub mod export_handler;
    }
}

pub mod adapters {
    pub mod file {
        pub mod file_key_value_store;
    }
    pub mod in_memory {
        pub mod in_memory_key_value_store;
    }
}
