pub mod admin;
pub mod auth;
pub mod catalog;
pub mod dashboard;
pub mod game;
pub mod ledger;
pub mod players;
pub mod regions;
