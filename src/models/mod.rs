pub mod price;
pub mod stark;

pub use price::{
    generate_price_key, PriceQuote, PriceRequest, PriceResult, PriceVariant, PriceVariantSet,
};
pub use stark::{RugCalculationRequest, RugCalculationResponse};
