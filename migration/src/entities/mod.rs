pub mod resource;

pub use resource::Entity as ResourceEntity;
