/// Domain layer for dependency explanation
///
/// Pure business logic: package metadata, discovered chains and the
/// analyzers that walk them. Nothing in here performs I/O.
pub mod domain;
pub mod services;
