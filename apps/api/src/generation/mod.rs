// Project recommendation engine.
// The catalog holds the static tables; the resolver turns request parameters
// into a recommendation. Neither touches the network or the database.

pub mod catalog;
pub mod handlers;
pub mod resolver;
