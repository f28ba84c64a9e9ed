mod vendor_pets;
mod vendors;

pub use vendor_pets::VendorPetsPage;
pub use vendors::VendorsPage;
