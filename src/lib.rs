pub mod config;
pub mod db;
pub mod domain;
pub mod models;
pub mod remote;
pub mod repository;
pub mod schema;
pub mod services;
