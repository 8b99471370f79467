//! Tests for holdings domain models and boundary validation.

#[cfg(test)]
mod tests {
    use crate::errors::{Error, ValidationError};
    use crate::holdings::{
        Asset, AssetStatus, Debt, DebtKind, DisposalPlan, EntityKind, MinorityStake,
        OwnershipSplit, Tier,
    };
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn test_asset() -> Asset {
        Asset {
            id: "asset-1".to_string(),
            entity_id: "entity-1".to_string(),
            name: "Kensington House".to_string(),
            valuation: dec!(1000000),
            currency: "GBP".to_string(),
            ownership: OwnershipSplit::sole(),
            status: AssetStatus::Operational,
            tier: Tier::Crown,
            location: Some("London".to_string()),
            acquisition: None,
            monthly_payment: None,
            annual_turnover: None,
            disposal: None,
        }
    }

    fn test_debt() -> Debt {
        Debt {
            id: "debt-1".to_string(),
            asset_id: Some("asset-1".to_string()),
            entity_id: None,
            creditor: "Coutts".to_string(),
            principal: dec!(400000),
            balance: dec!(380000),
            annual_rate_pct: dec!(5.5),
            kind: DebtKind::Fixed,
            compounding: false,
            currency: "GBP".to_string(),
            maturity: None,
        }
    }

    // ==================== Enum serialization ====================

    #[test]
    fn test_entity_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&EntityKind::TrustFoundation).unwrap(),
            "\"TRUST_FOUNDATION\""
        );
        assert_eq!(
            serde_json::from_str::<EntityKind>("\"CORPORATE\"").unwrap(),
            EntityKind::Corporate
        );
    }

    #[test]
    fn test_asset_status_serialization() {
        assert_eq!(
            serde_json::to_string(&AssetStatus::ForSale).unwrap(),
            "\"FOR_SALE\""
        );
        assert_eq!(AssetStatus::StrategicHold.as_db_str(), "STRATEGIC_HOLD");
    }

    #[test]
    fn test_debt_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&DebtKind::EquityRelease).unwrap(),
            "\"EQUITY_RELEASE\""
        );
    }

    #[test]
    fn test_only_individuals_are_personal() {
        assert!(EntityKind::Individual.is_personal());
        assert!(!EntityKind::Corporate.is_personal());
        assert!(!EntityKind::TrustFoundation.is_personal());
    }

    // ==================== Ownership split validation ====================

    #[test]
    fn test_ownership_split_sums_to_100_is_valid() {
        let split = OwnershipSplit {
            principal_pct: dec!(70),
            minority: vec![MinorityStake {
                owner: "Sibling".to_string(),
                percentage: dec!(30),
            }],
        };
        assert!(split.validate().is_ok());
        assert_eq!(split.total(), dec!(100));
    }

    #[test]
    fn test_ownership_split_over_100_is_rejected() {
        let split = OwnershipSplit {
            principal_pct: dec!(80),
            minority: vec![MinorityStake {
                owner: "Sibling".to_string(),
                percentage: dec!(30),
            }],
        };
        let err = split.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_negative_stake_is_rejected() {
        let split = OwnershipSplit {
            principal_pct: dec!(110),
            minority: vec![MinorityStake {
                owner: "Sibling".to_string(),
                percentage: dec!(-10),
            }],
        };
        assert!(split.validate().is_err());
    }

    // ==================== Asset validation ====================

    #[test]
    fn test_valid_asset_passes() {
        assert!(test_asset().validate().is_ok());
    }

    #[test]
    fn test_negative_valuation_is_rejected() {
        let mut asset = test_asset();
        asset.valuation = dec!(-1);
        assert!(asset.validate().is_err());
    }

    #[test]
    fn test_missing_currency_is_rejected() {
        let mut asset = test_asset();
        asset.currency = String::new();
        let err = asset.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(field)) if field == "currency"
        ));
    }

    #[test]
    fn test_disposal_plan_round_trips() {
        let mut asset = test_asset();
        asset.status = AssetStatus::ForSale;
        asset.disposal = Some(DisposalPlan {
            deadline: NaiveDate::from_ymd_opt(2027, 3, 31).unwrap(),
            notes: Some("Sell before the renovation bill lands".to_string()),
        });
        let json = serde_json::to_string(&asset).unwrap();
        let back: Asset = serde_json::from_str(&json).unwrap();
        assert_eq!(back.disposal.unwrap().deadline, asset.disposal.unwrap().deadline);
    }

    // ==================== Debt validation ====================

    #[test]
    fn test_valid_debt_passes() {
        assert!(test_debt().validate().is_ok());
        assert_eq!(test_debt().annual_rate(), dec!(0.055));
    }

    #[test]
    fn test_debt_needs_an_obligor() {
        let mut debt = test_debt();
        debt.asset_id = None;
        debt.entity_id = None;
        assert!(matches!(
            debt.validate().unwrap_err(),
            Error::Validation(ValidationError::MissingField(_))
        ));
    }

    #[test]
    fn test_negative_balance_is_rejected() {
        let mut debt = test_debt();
        debt.balance = dec!(-100);
        assert!(debt.validate().is_err());
    }
}
