use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

use super::stark::RugCalculationResponse;
use crate::error::PricingError;

/// Everything the pricing service needs to price one variant of one rug
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRequest {
    pub sku: String,
    pub binding_method: String,
    pub width_inches: f64,
    pub length_inches: f64,
    pub is_pristine: bool,
    pub is_padding: bool,
}

impl PriceRequest {
    pub fn new(
        sku: impl Into<String>,
        binding_method: impl Into<String>,
        width_inches: f64,
        length_inches: f64,
        is_pristine: bool,
        is_padding: bool,
    ) -> Self {
        Self {
            sku: sku.into(),
            binding_method: binding_method.into(),
            width_inches,
            length_inches,
            is_pristine,
            is_padding,
        }
    }

    pub fn variant(&self) -> PriceVariant {
        PriceVariant::from_flags(self.is_pristine, self.is_padding)
    }
}

/// Charges extracted from a successful RugCalculation response
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceQuote {
    /// Carpet + fabrication + padding + pristine
    pub total_charge: f64,
    pub total_padding_charge: f64,
    pub total_pristine_charge: f64,
}

impl PriceQuote {
    pub fn from_response(response: &RugCalculationResponse) -> Self {
        let padding = response.padding_total();
        let pristine = response.pristine_total();

        Self {
            total_charge: response.carpet_charge()
                + response.fabrication_charge()
                + padding
                + pristine,
            total_padding_charge: padding,
            total_pristine_charge: pristine,
        }
    }
}

/// Outcome of pricing one variant
#[derive(Debug, Clone, PartialEq)]
pub enum PriceResult {
    Success(PriceQuote),
    Failure { error_message: String },
}

impl PriceResult {
    pub fn failure(error_message: impl Into<String>) -> Self {
        Self::Failure {
            error_message: error_message.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn quote(&self) -> Option<&PriceQuote> {
        match self {
            Self::Success(quote) => Some(quote),
            Self::Failure { .. } => None,
        }
    }

    pub fn total_charge(&self) -> Option<f64> {
        self.quote().map(|q| q.total_charge)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure { error_message } => Some(error_message),
        }
    }
}

impl From<Result<PriceQuote, PricingError>> for PriceResult {
    fn from(result: Result<PriceQuote, PricingError>) -> Self {
        match result {
            Ok(quote) => Self::Success(quote),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

// Serialized in the shape UI callers already consume:
// {"ok": true, "totalCarpetCharge", "totalPadding", "totalPristine"} or {"ok": false, "error"}
impl Serialize for PriceResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success(quote) => {
                let mut map = serializer.serialize_map(Some(4))?;
                map.serialize_entry("ok", &true)?;
                map.serialize_entry("totalCarpetCharge", &quote.total_charge)?;
                map.serialize_entry("totalPadding", &quote.total_padding_charge)?;
                map.serialize_entry("totalPristine", &quote.total_pristine_charge)?;
                map.end()
            }
            Self::Failure { error_message } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("ok", &false)?;
                map.serialize_entry("error", error_message)?;
                map.end()
            }
        }
    }
}

/// The four padding/pristine combinations priced for every rug size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceVariant {
    Price,
    WithPadding,
    WithPristine,
    WithBoth,
}

impl PriceVariant {
    pub const ALL: [PriceVariant; 4] = [
        PriceVariant::Price,
        PriceVariant::WithPadding,
        PriceVariant::WithPristine,
        PriceVariant::WithBoth,
    ];

    pub fn from_flags(is_pristine: bool, is_padding: bool) -> Self {
        match (is_pristine, is_padding) {
            (true, true) => Self::WithBoth,
            (true, false) => Self::WithPristine,
            (false, true) => Self::WithPadding,
            (false, false) => Self::Price,
        }
    }

    /// `(is_pristine, is_padding)`
    pub fn flags(self) -> (bool, bool) {
        match self {
            Self::Price => (false, false),
            Self::WithPadding => (false, true),
            Self::WithPristine => (true, false),
            Self::WithBoth => (true, true),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::WithPadding => "priceWithPadding",
            Self::WithPristine => "priceWithPristine",
            Self::WithBoth => "priceWithBoth",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.key() == key)
    }
}

impl fmt::Display for PriceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Variant key for a padding/pristine combination
pub fn generate_price_key(is_pristine: bool, is_padding: bool) -> &'static str {
    PriceVariant::from_flags(is_pristine, is_padding).key()
}

/// All four variant results for one rug size.
///
/// Only constructible with every variant present.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceVariantSet {
    price: PriceResult,
    price_with_padding: PriceResult,
    price_with_pristine: PriceResult,
    price_with_both: PriceResult,
}

impl PriceVariantSet {
    pub fn new(
        price: PriceResult,
        price_with_padding: PriceResult,
        price_with_pristine: PriceResult,
        price_with_both: PriceResult,
    ) -> Self {
        Self {
            price,
            price_with_padding,
            price_with_pristine,
            price_with_both,
        }
    }

    pub fn get(&self, variant: PriceVariant) -> &PriceResult {
        match variant {
            PriceVariant::Price => &self.price,
            PriceVariant::WithPadding => &self.price_with_padding,
            PriceVariant::WithPristine => &self.price_with_pristine,
            PriceVariant::WithBoth => &self.price_with_both,
        }
    }

    pub fn get_by_key(&self, key: &str) -> Option<&PriceResult> {
        PriceVariant::from_key(key).map(|v| self.get(v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        PriceVariant::ALL.into_iter().map(PriceVariant::key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PriceVariant, &PriceResult)> + '_ {
        PriceVariant::ALL.into_iter().map(move |v| (v, self.get(v)))
    }
}
