pub mod allocator;
pub mod resource_service;

pub use allocator::IdAllocator;
pub use resource_service::{FetchOutcome, ResourceDraft, ResourceService};
