pub mod config;
pub mod publisher;
pub mod report;
pub mod results;

pub mod models {
    pub mod competitor;
    pub mod general;
    pub mod heat;
}

pub mod helpers {
    pub mod category;
    pub mod logging;
    pub mod time;

    pub mod handelbars {
        pub mod format_heat_result;
    }
}
