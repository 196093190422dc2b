/// Catalog adapters that turn on-disk package metadata into a CatalogSnapshot
mod lockfile_catalog_reader;
mod site_packages_catalog_reader;

pub use lockfile_catalog_reader::LockfileCatalogReader;
pub use site_packages_catalog_reader::SitePackagesCatalogReader;
