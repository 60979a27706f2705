/// Contact service interface
pub mod contact;
/// List service interface
pub mod list;
/// Tag service interface
pub mod tag;
