pub mod catalog_domain_error;
