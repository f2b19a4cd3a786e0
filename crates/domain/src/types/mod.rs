//! Domain types and models

pub mod carrier;
pub mod order;

pub use carrier::{
    GlsAddress, Parcel, ParcelService, PrintLabelsError, PrintLabelsRequest, PrintLabelsResponse,
};
pub use order::{Order, ShippingAddress};
