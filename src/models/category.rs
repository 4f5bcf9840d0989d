//! Expense category and currency enumerations

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    #[default]
    General,
    Food,
    Travel,
    Housing,
    Entertainment,
    Utilities,
    Shopping,
}

impl ExpenseCategory {
    /// All categories, in display order
    pub fn all() -> &'static [ExpenseCategory] {
        &[
            Self::General,
            Self::Food,
            Self::Travel,
            Self::Housing,
            Self::Entertainment,
            Self::Utilities,
            Self::Shopping,
        ]
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::General => "General",
            Self::Food => "Food & Drink",
            Self::Travel => "Travel",
            Self::Housing => "Housing",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Shopping => "Shopping",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "general" => Ok(Self::General),
            "food" | "food-drink" => Ok(Self::Food),
            "travel" => Ok(Self::Travel),
            "housing" => Ok(Self::Housing),
            "entertainment" => Ok(Self::Entertainment),
            "utilities" => Ok(Self::Utilities),
            "shopping" => Ok(Self::Shopping),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

/// Currency an expense is denominated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Usdc,
    Eth,
}

impl Currency {
    /// Display symbol for amounts in this currency
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Usdc => "USDC ",
            Self::Eth => "Ξ",
        }
    }

    /// All supported currencies
    pub fn all() -> &'static [Currency] {
        &[Self::Usd, Self::Eur, Self::Gbp, Self::Usdc, Self::Eth]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Usdc => "USDC",
            Self::Eth => "ETH",
        };
        write!(f, "{}", code)
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            "USDC" => Ok(Self::Usdc),
            "ETH" => Ok(Self::Eth),
            other => Err(format!("Unknown currency: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in ExpenseCategory::all() {
            let json = serde_json::to_string(category).unwrap();
            let back: ExpenseCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(*category, back);
        }
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("food".parse::<ExpenseCategory>().unwrap(), ExpenseCategory::Food);
        assert_eq!("TRAVEL".parse::<ExpenseCategory>().unwrap(), ExpenseCategory::Travel);
        assert!("nope".parse::<ExpenseCategory>().is_err());
    }

    #[test]
    fn test_currency_symbol() {
        assert_eq!(Currency::Usd.symbol(), "$");
        assert_eq!(Currency::Eth.symbol(), "Ξ");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("usdc".parse::<Currency>().unwrap(), Currency::Usdc);
        assert!("XYZ".parse::<Currency>().is_err());
    }
}
