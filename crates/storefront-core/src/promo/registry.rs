//! Known promo codes.
//!
//! The registry is a compiled-in, read-only table. The engine looks codes up
//! here first and only then picks a pricing rule, so an entry added without
//! a matching rule is rejected as unsupported rather than mis-priced.

use serde::Serialize;

/// One entry in the promo registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PromoDefinition {
    /// Upper-case code as the shopper types it (after normalization).
    pub code: &'static str,
    /// Human-readable description, for display only.
    pub description: &'static str,
}

/// Every code the storefront accepts.
pub static KNOWN_PROMOS: &[PromoDefinition] = &[
    PromoDefinition {
        code: "WELCOME10",
        description: "10% off your order",
    },
    PromoDefinition {
        code: "B2G1",
        description: "Buy 2 Get 1 Free (cheapest item free)",
    },
    PromoDefinition {
        code: "FLAT25",
        description: "Flat ₹25 off on orders of ₹250 or more",
    },
];

/// Trims and upper-cases a code the way the registry stores it.
///
/// ```rust
/// use storefront_core::promo::normalize_code;
///
/// assert_eq!(normalize_code("  b2g1 "), "B2G1");
/// assert_eq!(normalize_code("   "), "");
/// ```
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Finds a normalized code in `registry`.
pub fn find<'r>(registry: &'r [PromoDefinition], code: &str) -> Option<&'r PromoDefinition> {
    registry.iter().find(|p| p.code == code)
}

/// Finds a normalized code in [`KNOWN_PROMOS`].
pub fn lookup(code: &str) -> Option<&'static PromoDefinition> {
    find(KNOWN_PROMOS, code)
}

/// Codes offered to shoppers, in registry order.
pub fn known_codes() -> impl Iterator<Item = &'static str> {
    KNOWN_PROMOS.iter().map(|p| p.code)
}

/// The pricing rule behind a registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoKind {
    /// `WELCOME10`: 10% of the subtotal.
    Welcome10,
    /// `B2G1`: every third unit free, cheapest first.
    BuyTwoGetOne,
    /// `FLAT25`: ₹25 off above a minimum subtotal.
    Flat25,
}

impl PromoKind {
    /// Maps a registry entry to its rule; `None` when no rule exists yet.
    pub fn for_definition(definition: &PromoDefinition) -> Option<Self> {
        match definition.code {
            "WELCOME10" => Some(PromoKind::Welcome10),
            "B2G1" => Some(PromoKind::BuyTwoGetOne),
            "FLAT25" => Some(PromoKind::Flat25),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contents() {
        let codes: Vec<&str> = known_codes().collect();
        assert_eq!(codes, vec!["WELCOME10", "B2G1", "FLAT25"]);
    }

    #[test]
    fn test_offers_list_json() {
        let json = serde_json::to_value(KNOWN_PROMOS).unwrap();

        assert_eq!(json.as_array().map(Vec::len), Some(3));
        assert_eq!(
            json[2],
            serde_json::json!({
                "code": "FLAT25",
                "description": "Flat ₹25 off on orders of ₹250 or more"
            })
        );
    }

    #[test]
    fn test_every_known_code_has_a_rule() {
        for definition in KNOWN_PROMOS {
            assert!(
                PromoKind::for_definition(definition).is_some(),
                "no rule for {}",
                definition.code
            );
        }
    }

    #[test]
    fn test_lookup_is_exact_on_normalized_codes() {
        assert!(lookup("FLAT25").is_some());
        assert!(lookup("flat25").is_none());
        assert!(lookup(&normalize_code(" flat25\t")).is_some());
        assert!(lookup("SUMMER50").is_none());
    }

    #[test]
    fn test_unmapped_definition_has_no_rule() {
        let definition = PromoDefinition {
            code: "SUMMER50",
            description: "Not wired up",
        };
        assert_eq!(PromoKind::for_definition(&definition), None);
    }
}
