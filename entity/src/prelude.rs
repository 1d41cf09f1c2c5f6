pub use super::app_user::Entity as AppUser;
pub use super::collection::Entity as Collection;
pub use super::infinity_pass::Entity as InfinityPass;
pub use super::liquor::Entity as Liquor;
pub use super::outlet::Entity as Outlet;
pub use super::outlet_bartender::Entity as OutletBartender;
pub use super::outlet_collection::Entity as OutletCollection;
pub use super::outlet_details::Entity as OutletDetails;
pub use super::outlet_legal_document::Entity as OutletLegalDocument;
pub use super::outlet_manager::Entity as OutletManager;
pub use super::outlet_timing::Entity as OutletTiming;
pub use super::outlet_timing_slot::Entity as OutletTimingSlot;
pub use super::owner::Entity as Owner;
pub use super::ticket::Entity as Ticket;
pub use super::ticket_item::Entity as TicketItem;
