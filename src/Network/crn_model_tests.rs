#[cfg(test)]
mod tests {
    use crate::Network::crn_model::{CRN, CrnError, Reaction, validate_parameter, validate_symbol_name};
    use std::collections::BTreeMap;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_coefficient_lookup_defaults_to_zero() {
        let r = Reaction::from_pairs(&[("S1", 2), ("E1", 1)], &[("S2", 1)], "k1", "g1");
        assert_eq!(r.educt_coeff("S1"), 2);
        assert_eq!(r.educt_coeff("S2"), 0);
        assert_eq!(r.product_coeff("S2"), 1);
        assert_eq!(r.product_coeff("E1"), 0);
        assert_eq!(r.net_change("S1"), -2);
        assert_eq!(r.net_change("S2"), 1);
        assert_eq!(r.net_change("X"), 0);
    }

    #[test]
    fn test_zero_coefficients_are_not_keys() {
        let mut educts = BTreeMap::new();
        educts.insert("S1".to_string(), 0);
        educts.insert("E1".to_string(), 1);
        let mut products = BTreeMap::new();
        products.insert("S1".to_string(), 3);
        products.insert("E1".to_string(), 0);
        let r = Reaction::new(educts, products, "k1", "g1");
        assert!(!r.has_educt("S1"));
        assert!(r.has_educt("E1"));
        assert!(!r.has_product("E1"));
        assert_eq!(r.educt_set().len(), 1);
        let species: Vec<&String> = r.species().collect();
        assert_eq!(species, vec!["E1", "S1"]);
    }

    #[test]
    fn test_slow_educts_restricted_to_slow_species() {
        let r = Reaction::from_pairs(&[("S", 44), ("PP", 1), ("E1", 1)], &[], "k1", "g1");
        let crn = CRN::new(
            "crn",
            "N",
            names(&["S", "PP"]),
            names(&["E1"]),
            vec![r.clone()],
        )
        .unwrap();
        let slow = crn.slow_educts(&r);
        assert_eq!(slow.len(), 2);
        assert_eq!(slow["S"], 44);
        assert_eq!(slow["PP"], 1);
        assert!(!slow.contains_key("E1"));
    }

    #[test]
    fn test_species_in_both_partitions_rejected() {
        let result = CRN::new("crn", "N", names(&["A", "B"]), names(&["B"]), vec![]);
        assert!(matches!(result, Err(CrnError::SpeciesInBothPartitions(s)) if s == "B"));
    }

    #[test]
    fn test_duplicate_species_rejected() {
        let result = CRN::new("crn", "N", names(&["A", "A"]), names(&[]), vec![]);
        assert!(matches!(result, Err(CrnError::DuplicateSpecies(_))));
        let result = CRN::new("crn", "N", names(&[]), names(&["E", "E"]), vec![]);
        assert!(matches!(result, Err(CrnError::DuplicateSpecies(_))));
    }

    #[test]
    fn test_invalid_symbol_names_rejected() {
        assert!(validate_symbol_name("k1").is_ok());
        assert!(validate_symbol_name("gamma_2").is_ok());
        assert!(validate_symbol_name("1k").is_err());
        assert!(validate_symbol_name("").is_err());
        assert!(validate_symbol_name("a b").is_err());
        let r = Reaction::from_pairs(&[("A", 1)], &[("B", 1)], "k 1", "g1");
        let result = CRN::new("crn", "N", names(&["A", "B"]), vec![], vec![r]);
        assert!(matches!(result, Err(CrnError::InvalidSymbol(_))));
    }

    #[test]
    fn test_numeric_rate_and_scaling_accepted() {
        assert!(validate_parameter("2").is_ok());
        assert!(validate_parameter("0.5").is_ok());
        assert!(validate_parameter("k1").is_ok());
        assert!(validate_parameter("2k").is_err());
        let r = Reaction::from_pairs(&[("A", 1)], &[("B", 1)], "3", "0.5");
        assert!(CRN::new("crn", "N", names(&["A", "B"]), vec![], vec![r]).is_ok());
    }

    #[test]
    fn test_partition_membership() {
        let crn = CRN::new("crn", "N", names(&["S1", "S2"]), names(&["E1"]), vec![]).unwrap();
        assert!(crn.is_slow("S2"));
        assert!(!crn.is_slow("E1"));
        assert!(crn.is_fast("E1"));
        assert_eq!(crn.natnum(), "N");
        assert_eq!(crn.name(), "crn");
        assert!(crn.reactions().is_empty());
    }
}
