/// Contact service implementation
pub mod contact_service;
/// List service implementation
pub mod list_service;
/// Tag service implementation
pub mod tag_service;

pub use crate::application::interfaces::contact::*;
pub use crate::application::interfaces::list::*;
pub use crate::application::interfaces::tag::*;
pub use contact_service::ContactServiceImpl;
pub use list_service::ListServiceImpl;
pub use tag_service::TagServiceImpl;
