pub mod collect;
pub mod config;
pub mod error;
pub mod fetch;
pub mod output;
pub mod report;
pub mod select;
pub mod series;
pub mod table;
pub mod topics;
