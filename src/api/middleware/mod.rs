//! HTTP middleware applied to every request.
//!
//! Order, outermost first: [`request_id`] blank removal, [`request_id`] set,
//! [`request_id`] propagate,
//! [`access_log`], [`panic`].

pub mod access_log;
pub mod panic;
pub mod request_id;
