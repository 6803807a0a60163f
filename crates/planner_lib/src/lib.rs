//! The main crate of the event-planner API infrastructure.
//!
//! This crate is used by all the services related to the API. It contains environment setup
//! functions, the models saved in the database, and some other stuff.
//!
//! If you wish to see the crate of the server program itself, take a look
//! at the [`event_api`](../event_api/index.html) package.

#![warn(missing_docs)]

mod env;

pub mod error;
pub mod event;
pub mod guest;
pub mod item;
pub mod must;
pub mod pool;
pub mod validate;

pub use env::*;
pub use pool::Database;

use rand::Rng as _;

/// Returns a randomly-generated string with the `len` length. It contains alphanumeric characters.
pub fn gen_random_str(len: usize) -> String {
    rand::rng()
        .sample_iter(rand::distr::Alphanumeric)
        .map(char::from)
        .take(len)
        .collect()
}
