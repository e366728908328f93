//! Hard-coded sample records used to seed an empty store.

use uuid::Uuid;

use super::{Farm, FarmStatus, Partner, PartnerKind};

/// Sample farms. Ids are fixed so seeded stores stay comparable across runs.
pub fn sample_farms() -> Vec<Farm> {
    vec![
        Farm {
            id: Uuid::from_u128(0x5a3b_a0a1_0000_4000_8000_0000_0000_0001),
            name: "Sambava Estate".to_string(),
            location: "Sambava, SAVA, Madagascar".to_string(),
            area_hectares: 12.5,
            plant_count: 25_000,
            tokens_issued: 20_000,
            token_price: 20.0,
            status: FarmStatus::Active,
            established_year: Some(2021),
            description: "Shade-grown Bourbon vanilla under gliricidia tutors".to_string(),
        },
        Farm {
            id: Uuid::from_u128(0x5a3b_a0a1_0000_4000_8000_0000_0000_0002),
            name: "Antalaha Ridge".to_string(),
            location: "Antalaha, SAVA, Madagascar".to_string(),
            area_hectares: 8.0,
            plant_count: 16_000,
            tokens_issued: 12_000,
            token_price: 25.0,
            status: FarmStatus::Harvesting,
            established_year: Some(2019),
            description: "Hillside plots with on-site curing sheds".to_string(),
        },
        Farm {
            id: Uuid::from_u128(0x5a3b_a0a1_0000_4000_8000_0000_0000_0003),
            name: "Mananara Valley".to_string(),
            location: "Mananara Nord, Madagascar".to_string(),
            area_hectares: 15.0,
            plant_count: 30_000,
            tokens_issued: 30_000,
            token_price: 30.0,
            status: FarmStatus::Planned,
            established_year: None,
            description: "Expansion site, nursery stage".to_string(),
        },
    ]
}

/// Sample partners.
pub fn sample_partners() -> Vec<Partner> {
    vec![
        Partner {
            id: Uuid::from_u128(0x5a3b_a0a1_0000_4000_8000_0000_0001_0001),
            name: "SAVA Growers Cooperative".to_string(),
            kind: PartnerKind::Cooperative,
            country: "Madagascar".to_string(),
            website: Some("https://sava-growers.example".to_string()),
            contact_email: Some("contact@sava-growers.example".to_string()),
            description: "Smallholder cooperative handling pollination and picking".to_string(),
        },
        Partner {
            id: Uuid::from_u128(0x5a3b_a0a1_0000_4000_8000_0000_0001_0002),
            name: "Spice Route Logistics".to_string(),
            kind: PartnerKind::Logistics,
            country: "Mauritius".to_string(),
            website: Some("https://spiceroute.example".to_string()),
            contact_email: None,
            description: "Export and cold-chain shipping of cured beans".to_string(),
        },
        Partner {
            id: Uuid::from_u128(0x5a3b_a0a1_0000_4000_8000_0000_0001_0003),
            name: "Bourbon Bean Traders".to_string(),
            kind: PartnerKind::Distributor,
            country: "France".to_string(),
            website: None,
            contact_email: Some("sales@bourbonbean.example".to_string()),
            description: "Wholesale buyer for gourmet-grade beans".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_farms_are_valid() {
        for farm in sample_farms() {
            assert!(farm.validate().is_ok(), "{} invalid", farm.name);
        }
    }

    #[test]
    fn test_sample_partners_are_valid() {
        for partner in sample_partners() {
            assert!(partner.validate().is_ok(), "{} invalid", partner.name);
        }
    }

    #[test]
    fn test_sample_ids_are_stable_and_unique() {
        let a = sample_farms();
        let b = sample_farms();
        assert_eq!(a[0].id, b[0].id);
        let mut ids: Vec<Uuid> = a.iter().map(|f| f.id).collect();
        ids.extend(sample_partners().iter().map(|p| p.id));
        let n = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), n);
    }
}
