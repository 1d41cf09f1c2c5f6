//! Database model type aliases.
//!
//! Short names for the sea-orm entity models used throughout the server, so signatures
//! don't need to spell out the `entity` crate paths.

/// Business account owning outlets, unique by mobile number.
pub type OwnerModel = entity::owner::Model;

/// Outlet aggregate root.
///
/// # Fields (from `entity::outlet::Model`)
/// - `id` - Primary key
/// - `owner_id` - Owning business account
/// - `is_verified` - Verification gate, false on creation
/// - `details_id`, `legal_document_id`, `manager_id`, `timing_id` - Required parts
/// - `bartender_id`, `infinity_pass_id` - Optional parts
pub type OutletModel = entity::outlet::Model;

pub type OutletDetailsModel = entity::outlet_details::Model;

pub type LegalDocumentModel = entity::outlet_legal_document::Model;

pub type ManagerModel = entity::outlet_manager::Model;

pub type BartenderModel = entity::outlet_bartender::Model;

/// Weekly schedule header; slots live in [`TimingSlotModel`].
pub type TimingModel = entity::outlet_timing::Model;

/// One day's opening window within a timing schedule.
pub type TimingSlotModel = entity::outlet_timing_slot::Model;

/// Tiered consumption product; line items live in [`LiquorModel`].
pub type CollectionModel = entity::collection::Model;

pub type LiquorModel = entity::liquor::Model;

/// Assignment of a collection to one tier of one outlet.
pub type OutletCollectionModel = entity::outlet_collection::Model;

pub type InfinityPassModel = entity::infinity_pass::Model;
