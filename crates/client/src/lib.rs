//! Product list client.
//!
//! `state` is a pure unidirectional model (state + action -> new state +
//! effects); `api` is the HTTP client for the four product operations;
//! `sync` drives effects against the API one request at a time, feeding
//! outcomes back into the model. The list is kept consistent by a full
//! refetch after every successful mutation.

pub mod api;
pub mod state;
pub mod sync;
