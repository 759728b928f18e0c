#[cfg(test)]
mod tests {
    use crate::Generator::algebra::{RustedAlgebra, SymbolicAlgebra};
    use crate::Generator::assembler::GeneratorAssembler;
    use crate::Generator::test_eval::eval;
    use crate::Network::crn_model::{CRN, Reaction};
    use crate::settings::GeneratorSettings;
    use approx::assert_relative_eq;
    use std::collections::HashMap;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    /// S -> F, F -> S
    fn cycle() -> CRN {
        let reactions = vec![
            Reaction::from_pairs(&[("S", 1)], &[("F", 1)], "k1", "g1"),
            Reaction::from_pairs(&[("F", 1)], &[("S", 1)], "k2", "g2"),
        ];
        CRN::new("cycle", "N", names(&["S"]), names(&["F"]), reactions).unwrap()
    }

    /// S -> F, F -> 0, F -> S
    fn leaky_cycle() -> CRN {
        let reactions = vec![
            Reaction::from_pairs(&[("S", 1)], &[("F", 1)], "k1", "g1"),
            Reaction::from_pairs(&[("F", 1)], &[], "k2", "g2"),
            Reaction::from_pairs(&[("F", 1)], &[("S", 1)], "k3", "g3"),
        ];
        CRN::new("leaky", "N", names(&["S"]), names(&["F"]), reactions).unwrap()
    }

    #[test]
    fn test_slow_only_sum_is_zero_without_slow_only_reactions() {
        let crn = cycle();
        let settings = GeneratorSettings::default();
        let alg = RustedAlgebra;
        let assembler = GeneratorAssembler::new(&alg, &crn, &settings);
        assert!(alg.is_zero(&assembler.slow_only_sum()));
    }

    #[test]
    fn test_slow_only_sum() {
        let crn = CRN::new(
            "slow",
            "N",
            names(&["S1", "S2"]),
            vec![],
            vec![Reaction::from_pairs(&[("S1", 2)], &[("S2", 1)], "k", "g")],
        )
        .unwrap();
        let settings = GeneratorSettings::default();
        let alg = RustedAlgebra;
        let assembler = GeneratorAssembler::new(&alg, &crn, &settings);
        let vals = HashMap::from([
            ("N", 2.0),
            ("k", 1.5),
            ("g", 0.5),
            ("v_S1", 3.0),
            ("df_S1", 0.1),
            ("df_S2", 0.7),
        ]);
        let rate = 1.5 * 2.0_f64.powf(1.5) * 9.0;
        let expected = -2.0 * rate * 0.1 + rate * 0.7;
        assert_relative_eq!(eval(&assembler.slow_only_sum(), &vals), expected, epsilon = 1e-9);
        let (coupling, degenerate) = assembler.slow_fast_coupling_sum().unwrap();
        assert!(alg.is_zero(&coupling));
        assert!(!degenerate);
    }

    #[test]
    fn test_cycle_end_to_end() {
        let crn = cycle();
        assert!(crn.is_connected());
        assert_eq!(crn.component_count(), 1);
        let report = crn.generator_report(&GeneratorSettings::default()).unwrap();
        assert!(!report.degenerate);
        assert_eq!(report.fast_order, names(&["F"]));
        let vals = HashMap::from([
            ("N", 10.0),
            ("k1", 2.0),
            ("k2", 3.0),
            ("g1", 0.5),
            ("g2", 1.5),
            ("v_S", 4.0),
            ("df_S", 0.25),
        ]);
        // everything converted to F returns as S: the averaged generator vanishes
        let value = eval(&report.expression, &vals);
        assert!(value.is_finite());
        assert_relative_eq!(value, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_leaky_cycle_uses_determinant_ratio() {
        let crn = leaky_cycle();
        let generator = crn.total_generator().unwrap();
        let vals = HashMap::from([
            ("N", 2.0),
            ("k1", 1.0),
            ("k2", 1.0),
            ("k3", 3.0),
            ("g1", 1.0),
            ("g2", 1.0),
            ("g3", 1.0),
            ("v_S", 4.0),
            ("df_S", 5.0),
        ]);
        // ratio = w3 / (w2 + w3) = 3/4, term = k1 N^g1 v_S (-1 + 3/4) df_S
        let expected = 1.0 * 2.0 * 4.0 * (-0.25) * 5.0;
        assert_relative_eq!(eval(&generator, &vals), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_matrix_sets_ratio_to_zero() {
        // nothing consumes E1, so M = [[0]]
        let crn = CRN::new(
            "sink",
            "N",
            names(&["S"]),
            names(&["E1"]),
            vec![Reaction::from_pairs(&[("S", 1)], &[("E1", 1)], "k1", "g1")],
        )
        .unwrap();
        let report = crn.generator_report(&GeneratorSettings::default()).unwrap();
        assert!(report.degenerate);
        let vals = HashMap::from([
            ("N", 3.0),
            ("k1", 2.0),
            ("g1", 1.0),
            ("v_S", 4.0),
            ("df_S", 5.0),
        ]);
        assert_relative_eq!(
            eval(&report.expression, &vals),
            2.0 * 3.0 * 4.0 * (-1.0) * 5.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_total_is_sum_of_parts() {
        let reactions = vec![
            Reaction::from_pairs(&[("S1", 1)], &[("E1", 1)], "k1", "g1"),
            Reaction::from_pairs(&[("E1", 1)], &[("S2", 1)], "k2", "g2"),
            Reaction::from_pairs(&[("E1", 1)], &[("S1", 1)], "k3", "g3"),
            Reaction::from_pairs(&[("S2", 1)], &[("S1", 1)], "k4", "g4"),
        ];
        let crn = CRN::new("mixed", "N", names(&["S1", "S2"]), names(&["E1"]), reactions)
            .unwrap();
        let settings = GeneratorSettings::default();
        let alg = RustedAlgebra;
        let assembler = GeneratorAssembler::new(&alg, &crn, &settings);
        let vals = HashMap::from([
            ("N", 5.0),
            ("k1", 1.0),
            ("k2", 2.0),
            ("k3", 3.0),
            ("k4", 4.0),
            ("g1", 1.0),
            ("g2", 1.0),
            ("g3", 1.0),
            ("g4", 1.0),
            ("v_S1", 2.0),
            ("v_S2", 3.0),
            ("df_S1", 0.5),
            ("df_S2", -0.5),
        ]);
        let slow_only = eval(&assembler.slow_only_sum(), &vals);
        let coupling = eval(&assembler.slow_fast_coupling_sum().unwrap().0, &vals);
        let total = eval(&assembler.total_generator().unwrap(), &vals);
        assert_relative_eq!(total, slow_only + coupling, epsilon = 1e-9);

        // S2 -> S1 with rate 4 * 5 * 3: df_S1 - df_S2 = 1
        assert_relative_eq!(slow_only, 60.0, epsilon = 1e-9);
        // S1 -> E1 at 1 * 5 * 2 = 10, E1 leaves to S2 with 2/5 and back to S1 with 3/5
        // S1: -1 + 3/5, S2: 0 + 2/5
        let expected = 10.0 * ((-0.4) * 0.5 + 0.4 * (-0.5));
        assert_relative_eq!(coupling, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_unsimplified_settings_and_custom_prefixes() {
        let crn = leaky_cycle();
        let settings = GeneratorSettings {
            variable_prefix: "x_".to_string(),
            derivative_prefix: "d_".to_string(),
            simplify_result: false,
        };
        let report = crn.generator_report(&settings).unwrap();
        let vals = HashMap::from([
            ("N", 2.0),
            ("k1", 1.0),
            ("k2", 1.0),
            ("k3", 3.0),
            ("g1", 1.0),
            ("g2", 1.0),
            ("g3", 1.0),
            ("x_S", 4.0),
            ("d_S", 5.0),
        ]);
        assert_relative_eq!(eval(&report.expression, &vals), -10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_component_generators() {
        let reactions = vec![
            Reaction::from_pairs(&[("S1", 1)], &[("E1", 1)], "k1", "g1"),
            Reaction::from_pairs(&[("E1", 1)], &[("S2", 1)], "k2", "g2"),
            Reaction::from_pairs(&[("S3", 1)], &[("E2", 1)], "k3", "g3"),
            Reaction::from_pairs(&[("E2", 1)], &[("S4", 1)], "k4", "g4"),
        ];
        let crn = CRN::new(
            "chains",
            "N",
            names(&["S1", "S2", "S3", "S4"]),
            names(&["E1", "E2"]),
            reactions,
        )
        .unwrap();
        let settings = GeneratorSettings::default();
        let reports = crn.component_generators(&settings).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].name, "chains_sub_1");
        assert_eq!(reports[0].fast_order, names(&["E1"]));
        assert_eq!(reports[1].fast_order, names(&["E2"]));

        let vals = HashMap::from([
            ("N", 2.0),
            ("k1", 1.0),
            ("k2", 2.0),
            ("k3", 3.0),
            ("k4", 4.0),
            ("g1", 1.0),
            ("g2", 1.0),
            ("g3", 1.0),
            ("g4", 1.0),
            ("v_S1", 1.5),
            ("v_S3", 2.5),
            ("df_S1", 1.0),
            ("df_S2", 2.0),
            ("df_S3", 3.0),
            ("df_S4", 4.0),
        ]);
        // S1 -> E1 at 1 * 2 * 1.5 and all of E1 ends up as S2: 3 * (-df_S1 + df_S2)
        assert_relative_eq!(eval(&reports[0].expression, &vals), 3.0, epsilon = 1e-9);
        // S3 -> E2 at 3 * 2 * 2.5 and all of E2 ends up as S4: 15 * (-df_S3 + df_S4)
        assert_relative_eq!(eval(&reports[1].expression, &vals), 15.0, epsilon = 1e-9);
    }

    #[test]
    fn test_singular_matrix_with_shared_rate_symbols() {
        // S -> A, A -> S, A -> B, B -> A with the same k, g: M = [[w, -w], [-w, w]]
        let reactions = vec![
            Reaction::from_pairs(&[("S", 1)], &[("A", 1)], "k0", "g0"),
            Reaction::from_pairs(&[("A", 1)], &[("S", 1)], "k", "g"),
            Reaction::from_pairs(&[("A", 1)], &[("B", 1)], "k", "g"),
            Reaction::from_pairs(&[("B", 1)], &[("A", 1)], "k", "g"),
        ];
        let crn = CRN::new("shared", "N", names(&["S"]), names(&["A", "B"]), reactions).unwrap();
        let report = crn.generator_report(&GeneratorSettings::default()).unwrap();
        assert!(report.degenerate);
        let vals = HashMap::from([
            ("N", 2.0),
            ("k0", 1.0),
            ("g0", 1.0),
            ("k", 1.0),
            ("g", 1.0),
            ("v_S", 3.0),
            ("df_S", 1.0),
        ]);
        // only S -> A with a zero ratio remains: k0 N^g0 v_S (-1) df_S
        let value = eval(&report.expression, &vals);
        assert!(value.is_finite());
        assert_relative_eq!(value, -6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_non_finite_names_stay_symbols() {
        let crn = CRN::new(
            "names",
            "N",
            names(&["S"]),
            names(&["F"]),
            vec![
                Reaction::from_pairs(&[("S", 1)], &[("F", 1)], "inf", "nan"),
                Reaction::from_pairs(&[("F", 1)], &[], "k2", "g2"),
                Reaction::from_pairs(&[("F", 1)], &[("S", 1)], "k3", "g3"),
            ],
        )
        .unwrap();
        let generator = crn.total_generator().unwrap();
        let vars = generator.all_arguments_are_variables();
        assert!(vars.iter().any(|v| v.trim() == "inf"));
        assert!(vars.iter().any(|v| v.trim() == "nan"));
    }
}
