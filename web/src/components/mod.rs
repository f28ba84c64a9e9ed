mod navbar;
mod vendor_card;
mod pet_card;
mod loading;
mod empty_state;

pub use navbar::Navbar;
pub use vendor_card::VendorCard;
pub use pet_card::PetCard;
pub use loading::Loading;
pub use empty_state::EmptyState;
