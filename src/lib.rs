pub mod core {
    pub mod cli;
    pub mod error;
    pub mod tracing_init;
}

pub mod models {
    pub mod session;
    pub mod user;
}

pub mod api {
    pub mod client;
}

pub mod stores {
    pub mod credential_store;
}

pub mod session {
    pub mod manager;
}

pub mod provision {
    pub mod bulk;
    pub mod generator;
}
