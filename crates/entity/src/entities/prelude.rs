pub use super::assigned_item::Entity as AssignedItem;
pub use super::event::Entity as Event;
pub use super::event_guest::Entity as EventGuest;
pub use super::guest::Entity as Guest;
pub use super::item::Entity as Item;
