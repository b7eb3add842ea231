use std::str::FromStr;

use thiserror::Error;

/// Fuel products carried by the price feed, each backed by one price column
/// in the raw record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FuelProduct {
    /// Default display product.
    #[default]
    Gasolina95E5,
    Gasolina98E5,
    GasoleoA,
    GasoleoPremium,
    Glp,
}

impl FuelProduct {
    /// Every supported product, in feed column order.
    pub const ALL: [FuelProduct; 5] = [
        FuelProduct::Gasolina95E5,
        FuelProduct::Gasolina98E5,
        FuelProduct::GasoleoA,
        FuelProduct::GasoleoPremium,
        FuelProduct::Glp,
    ];

    /// The feed column holding this product's price.
    #[must_use]
    pub fn price_field(self) -> &'static str {
        match self {
            FuelProduct::Gasolina95E5 => "Precio Gasolina 95 E5",
            FuelProduct::Gasolina98E5 => "Precio Gasolina 98 E5",
            FuelProduct::GasoleoA => "Precio Gasoleo A",
            FuelProduct::GasoleoPremium => "Precio Gasoleo Premium",
            FuelProduct::Glp => "Precio Gases licuados del petróleo",
        }
    }
}

impl std::fmt::Display for FuelProduct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FuelProduct::Gasolina95E5 => "gasolina95",
            FuelProduct::Gasolina98E5 => "gasolina98",
            FuelProduct::GasoleoA => "gasoleo-a",
            FuelProduct::GasoleoPremium => "gasoleo-premium",
            FuelProduct::Glp => "glp",
        };
        write!(f, "{name}")
    }
}

/// Error returned when parsing a [`FuelProduct`] from its CLI name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown fuel product {0:?}; expected one of: gasolina95, gasolina98, gasoleo-a, gasoleo-premium, glp")]
pub struct ParseFuelProductError(String);

impl FromStr for FuelProduct {
    type Err = ParseFuelProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gasolina95" => Ok(FuelProduct::Gasolina95E5),
            "gasolina98" => Ok(FuelProduct::Gasolina98E5),
            "gasoleo-a" => Ok(FuelProduct::GasoleoA),
            "gasoleo-premium" => Ok(FuelProduct::GasoleoPremium),
            "glp" => Ok(FuelProduct::Glp),
            _ => Err(ParseFuelProductError(s.to_owned())),
        }
    }
}
