/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with package catalogs, the console
/// and the file system.
pub mod outbound;
