use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;

pub fn create_catalog_service(config: &Configuration, books: Arc<dyn BookRepository>) -> Box<dyn CatalogService> {
    Box::new(CatalogServiceImpl::new(config, books))
}
