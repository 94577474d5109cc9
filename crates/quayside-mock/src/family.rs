//! Resource families: groups of endpoints sharing a path prefix and,
//! for listings, a generated dataset.

use std::fmt;

use quayside_types::endpoints;

/// A group of mock endpoints registered together under one enable flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceFamily {
    EquipmentInbound,
    EquipmentInventory,
    EquipmentOutbound,
    RentalApplication,
    RentalVoyage,
    RentalReturn,
    SettlementFee,
    Dashboard,
    UserSettings,
    DataAnalysis,
}

impl ResourceFamily {
    /// Every family, in registration order.
    ///
    /// Route precedence across families follows this order; within a family
    /// see the family's `register` function.
    pub const ALL: [ResourceFamily; 10] = [
        ResourceFamily::EquipmentInbound,
        ResourceFamily::EquipmentInventory,
        ResourceFamily::EquipmentOutbound,
        ResourceFamily::RentalApplication,
        ResourceFamily::RentalVoyage,
        ResourceFamily::RentalReturn,
        ResourceFamily::SettlementFee,
        ResourceFamily::Dashboard,
        ResourceFamily::UserSettings,
        ResourceFamily::DataAnalysis,
    ];

    /// Config key used under `[mock.families]`.
    pub fn name(&self) -> &'static str {
        match self {
            ResourceFamily::EquipmentInbound => "equipment-inbound",
            ResourceFamily::EquipmentInventory => "equipment-inventory",
            ResourceFamily::EquipmentOutbound => "equipment-outbound",
            ResourceFamily::RentalApplication => "rental-application",
            ResourceFamily::RentalVoyage => "rental-voyage",
            ResourceFamily::RentalReturn => "rental-return",
            ResourceFamily::SettlementFee => "settlement-fee",
            ResourceFamily::Dashboard => "dashboard",
            ResourceFamily::UserSettings => "user-settings",
            ResourceFamily::DataAnalysis => "data-analysis",
        }
    }

    /// Parse a config key.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Endpoint prefix of the family's listing, if it has one.
    pub fn listing_path(&self) -> Option<&'static str> {
        match self {
            ResourceFamily::EquipmentInbound => Some(endpoints::EQUIPMENT_INBOUND),
            ResourceFamily::EquipmentInventory => Some(endpoints::EQUIPMENT_INVENTORY),
            ResourceFamily::EquipmentOutbound => Some(endpoints::EQUIPMENT_OUTBOUND),
            ResourceFamily::RentalApplication => Some(endpoints::RENTAL_APPLICATION),
            ResourceFamily::RentalVoyage => Some(endpoints::RENTAL_VOYAGE),
            ResourceFamily::RentalReturn => Some(endpoints::RENTAL_RETURN),
            ResourceFamily::SettlementFee => Some(endpoints::SETTLEMENT_FEE),
            ResourceFamily::Dashboard
            | ResourceFamily::UserSettings
            | ResourceFamily::DataAnalysis => None,
        }
    }

    /// Whether the family is mocked when config does not say.
    ///
    /// Families backed by real listing endpoints default to the network.
    pub fn default_enabled(&self) -> bool {
        self.listing_path().is_none()
    }
}

impl fmt::Display for ResourceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for family in ResourceFamily::ALL {
            assert_eq!(ResourceFamily::from_name(family.name()), Some(family));
        }
        assert_eq!(ResourceFamily::from_name("nope"), None);
    }

    #[test]
    fn test_defaults() {
        assert!(!ResourceFamily::EquipmentInbound.default_enabled());
        assert!(!ResourceFamily::SettlementFee.default_enabled());
        assert!(ResourceFamily::Dashboard.default_enabled());
        assert!(ResourceFamily::UserSettings.default_enabled());
    }
}
