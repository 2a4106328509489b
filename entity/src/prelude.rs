pub use super::operation::Entity as Operation;
