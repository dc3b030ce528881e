/// Database layer: connection pooling and migrations
///
/// Models are in the `models` module at crate root level.

pub mod migrations;
pub mod pool;
