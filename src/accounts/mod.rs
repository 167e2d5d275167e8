pub mod models;
pub mod service;

pub use models::{Account, Accounts, Character, Level};
pub use service::{AccountError, AccountService, Identity};
