//! Domain layer for the errata publish round-trip: the records submitted to
//! the server, the parsed metadata that comes back, and the pure services
//! that verify both.
pub mod domain;
pub mod services;
