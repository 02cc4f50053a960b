use async_trait::async_trait;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // appends an entity
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // replaces an entity, keeping its identity and creation time
    async fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity
    async fn delete(&self, id: &str) -> LibraryResult<usize>;

    // all entities in insertion order
    async fn all(&self) -> LibraryResult<Vec<Entity>>;
}
