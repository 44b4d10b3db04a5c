//! The quote form controller: local form state plus the HTTP gateway it
//! submits through. Embeddable anywhere a form UI drives it; nothing here
//! touches server internals except the public endpoint.

pub mod api;
pub mod form;
