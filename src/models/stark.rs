use serde::{Deserialize, Serialize};

use super::price::PriceRequest;

/// RugCalculation request body
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RugCalculationRequest {
    #[serde(rename = "SKU")]
    pub sku: String,
    pub binding_method: String,
    pub width_in_inches: f64,
    pub length_in_inches: f64,
    pub is_pristine_treatment: bool,
    pub is_adding_padding: bool,
}

impl From<&PriceRequest> for RugCalculationRequest {
    fn from(request: &PriceRequest) -> Self {
        Self {
            sku: request.sku.clone(),
            binding_method: request.binding_method.clone(),
            width_in_inches: request.width_inches,
            length_in_inches: request.length_inches,
            is_pristine_treatment: request.is_pristine,
            is_adding_padding: request.is_padding,
        }
    }
}

/// RugCalculation response body
///
/// Only the fields used for the total are modelled. Every field is optional;
/// anything missing (or null) counts as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RugCalculationResponse {
    #[serde(default)]
    pub calculation_charge: Option<CalculationCharge>,
    #[serde(default)]
    pub calculation_values: Option<Vec<CalculationValue>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CalculationCharge {
    #[serde(default)]
    pub retail_charge: Option<RetailCharge>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RetailCharge {
    #[serde(default)]
    pub carpet_charge: Option<f64>,
    #[serde(default)]
    pub fabrication_charge: Option<f64>,
}

/// One line of the `CalculationValues` breakdown, e.g. `{"Type": "Padding", "Total": 15}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CalculationValue {
    #[serde(rename = "Type", default)]
    pub value_type: Option<String>,
    #[serde(default)]
    pub total: Option<f64>,
}

impl RugCalculationResponse {
    fn retail_charge(&self) -> Option<&RetailCharge> {
        self.calculation_charge
            .as_ref()
            .and_then(|c| c.retail_charge.as_ref())
    }

    pub fn carpet_charge(&self) -> f64 {
        self.retail_charge()
            .and_then(|r| r.carpet_charge)
            .unwrap_or(0.0)
    }

    pub fn fabrication_charge(&self) -> f64 {
        self.retail_charge()
            .and_then(|r| r.fabrication_charge)
            .unwrap_or(0.0)
    }

    /// Total of the first breakdown line with the given type, or zero
    pub fn value_total(&self, value_type: &str) -> f64 {
        self.calculation_values
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|v| v.value_type.as_deref() == Some(value_type))
            .and_then(|v| v.total)
            .unwrap_or(0.0)
    }

    pub fn padding_total(&self) -> f64 {
        self.value_total("Padding")
    }

    pub fn pristine_total(&self) -> f64 {
        self.value_total("Pristine")
    }
}
