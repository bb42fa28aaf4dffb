// Library for tests to access modules

pub mod cli;
pub mod collector;
pub mod config;
pub mod derive;
pub mod docker_repo;
pub mod error;
pub mod models;
pub mod routes;
pub mod source;
pub mod terminal;
pub mod worker;
