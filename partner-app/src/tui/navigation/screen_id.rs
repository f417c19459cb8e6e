use partner_app_macros::ScreenKey;
use std::fmt;
use std::str::FromStr;

/// Every screen the navigator can push above the host dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ScreenKey)]
pub enum ScreenId {
    #[screen(key = "settings", title = "Settings")]
    Settings,

    #[screen(key = "shop-profile", title = "Shop Profile")]
    ShopProfile,

    #[screen(key = "contact-info", title = "Contact Info")]
    ContactInfo,

    #[screen(key = "operating-hours", title = "Operating Hours")]
    OperatingHours,

    #[screen(key = "payment-settings", title = "Payment Settings")]
    PaymentSettings,
}

/// A screen key that does not name any registered screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScreen(pub String);

impl fmt::Display for UnknownScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown screen '{}'", self.0)
    }
}

impl std::error::Error for UnknownScreen {}

impl FromStr for ScreenId {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s.trim()).ok_or_else(|| UnknownScreen(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique_and_parse_back() {
        let keys: HashSet<_> = ScreenId::ALL.iter().map(|id| id.key()).collect();
        assert_eq!(keys.len(), ScreenId::ALL.len());

        for id in ScreenId::ALL {
            assert_eq!(id.key().parse::<ScreenId>().unwrap(), *id);
        }
    }

    #[test]
    fn test_unknown_key() {
        let err = "orders-archive".parse::<ScreenId>().unwrap_err();
        assert_eq!(err, UnknownScreen("orders-archive".to_string()));
        assert_eq!(err.to_string(), "unknown screen 'orders-archive'");
    }

    #[test]
    fn test_display_prints_key() {
        assert_eq!(ScreenId::OperatingHours.to_string(), "operating-hours");
        assert_eq!(ScreenId::OperatingHours.title(), "Operating Hours");
    }
}
