//! # Coupling Matrix Builder
//!
//! ## Rate terms
//! For a reaction `r` with rate symbol `k`, scaling symbol `g` and slow educt order
//! `f = Σ_slow educt(r, s)`:
//! - scaled rate: `k · N^(g - 1 + f)`
//! - slow monomial: `Π_slow v_s^educt(r, s)`
//! - weight: scaled rate · slow monomial
//!
//! ## Matrices
//! - `M[S][S]`: sum of weights of reactions that consume a fast species and produce none
//! - `M[S][T]`, `S ≠ T`: minus the sum of weights of reactions consuming `S` and producing `T`
//! - `M′(s, S′)`: `M` with column `S′` replaced, in every row `T`, by
//!   `Σ_{r consumes T} weight(r) · (product(r, s) - educt(r, s))`
//!
//! Fast species are linearised in lexicographic order once per matrix; `M′` is always derived
//! from an existing `M` so both share the same row/column order.
use super::algebra::SymbolicAlgebra;
use crate::Network::classifier::{consumes, consumes_and_produces, consumes_without_producing};
use crate::Network::crn_model::{CRN, CrnError, Reaction};
use crate::settings::GeneratorSettings;
use std::fmt;

/// symbols and rate terms shared by every matrix and sum of one generator computation
pub struct SlowContext<'a, A: SymbolicAlgebra> {
    pub algebra: &'a A,
    pub slow_species: &'a [String],
    pub settings: &'a GeneratorSettings,
    natnum: A::Expr,
}

impl<'a, A: SymbolicAlgebra> SlowContext<'a, A> {
    pub fn new(algebra: &'a A, crn: &'a CRN, settings: &'a GeneratorSettings) -> Self {
        Self {
            algebra,
            slow_species: crn.slow_species(),
            settings,
            natnum: algebra.symbol(crn.natnum()),
        }
    }

    pub fn slow_symbol(&self, species: &str) -> A::Expr {
        self.algebra.symbol(&self.settings.variable_name(species))
    }

    pub fn derivative_symbol(&self, species: &str) -> A::Expr {
        self.algebra.symbol(&self.settings.derivative_name(species))
    }

    /// sum of the educt coefficients of slow species
    pub fn slow_educt_order(&self, reaction: &Reaction) -> u64 {
        self.slow_species
            .iter()
            .map(|s| u64::from(reaction.educt_coeff(s)))
            .sum()
    }

    /// `k · N^(g - 1 + f)`
    pub fn scaled_rate(&self, reaction: &Reaction) -> A::Expr {
        let alg = self.algebra;
        let shift = self.slow_educt_order(reaction) as i64 - 1;
        let scale = alg.parameter(reaction.scale());
        let exponent = if shift == 0 {
            scale
        } else {
            alg.add(scale, alg.integer(shift))
        };
        alg.mul(
            alg.parameter(reaction.rate()),
            alg.pow(self.natnum.clone(), exponent),
        )
    }

    /// `Π_slow v_s^educt(r, s)`, one when the reaction has no slow educt
    pub fn slow_monomial(&self, reaction: &Reaction) -> A::Expr {
        let alg = self.algebra;
        alg.product(
            self.slow_species
                .iter()
                .filter(|s| reaction.has_educt(s))
                .map(|s| alg.powi(self.slow_symbol(s), reaction.educt_coeff(s))),
        )
    }

    pub fn weight(&self, reaction: &Reaction) -> A::Expr {
        self.algebra
            .mul(self.scaled_rate(reaction), self.slow_monomial(reaction))
    }
}

/// square fast × fast matrix, rows and columns in the order of `species`
#[derive(Debug, Clone)]
pub struct CouplingMatrix<E> {
    species: Vec<String>,
    entries: Vec<Vec<E>>,
}

impl<E: Clone> CouplingMatrix<E> {
    pub fn species(&self) -> &[String] {
        &self.species
    }

    pub fn dimension(&self) -> usize {
        self.species.len()
    }

    pub fn rows(&self) -> &[Vec<E>] {
        &self.entries
    }

    pub fn position(&self, species: &str) -> Option<usize> {
        self.species.iter().position(|s| s == species)
    }

    /// entry by species labels
    pub fn get(&self, row: &str, col: &str) -> Option<&E> {
        let i = self.position(row)?;
        let j = self.position(col)?;
        Some(&self.entries[i][j])
    }

    /// new matrix with column `col` replaced by `column` (indexed like the rows)
    pub fn with_replaced_column(&self, col: &str, column: Vec<E>) -> Result<Self, CrnError> {
        let j = self
            .position(col)
            .ok_or_else(|| CrnError::UnknownFastSpecies(col.to_string()))?;
        let mut entries = self.entries.clone();
        for (row, value) in entries.iter_mut().zip(column) {
            row[j] = value;
        }
        Ok(Self {
            species: self.species.clone(),
            entries,
        })
    }
}

impl<E: fmt::Display> fmt::Display for CouplingMatrix<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (species, row) in self.species.iter().zip(self.entries.iter()) {
            let cells: Vec<String> = row.iter().map(|e| e.to_string()).collect();
            writeln!(f, "{}: [{}]", species, cells.join(", "))?;
        }
        Ok(())
    }
}

/// fast species labels in the fixed order used to linearise matrices
pub fn fast_order(fast_set: &[String]) -> Vec<String> {
    let mut order = fast_set.to_vec();
    order.sort();
    order.dedup();
    order
}

pub fn build_matrix<A: SymbolicAlgebra>(
    ctx: &SlowContext<'_, A>,
    reactions: &[Reaction],
    fast_set: &[String],
) -> CouplingMatrix<A::Expr> {
    let alg = ctx.algebra;
    let species = fast_order(fast_set);
    let entries = species
        .iter()
        .map(|row| {
            species
                .iter()
                .map(|col| {
                    if row == col {
                        alg.sum(
                            reactions
                                .iter()
                                .filter(|r| consumes_without_producing(r, row, fast_set))
                                .map(|r| ctx.weight(r)),
                        )
                    } else {
                        let coupled: Vec<&Reaction> = reactions
                            .iter()
                            .filter(|r| consumes_and_produces(r, row, col))
                            .collect();
                        if coupled.is_empty() {
                            alg.zero()
                        } else {
                            alg.neg(alg.sum(coupled.into_iter().map(|r| ctx.weight(r))))
                        }
                    }
                })
                .collect()
        })
        .collect();
    CouplingMatrix { species, entries }
}

/// right-hand side for slow species `slow`, one entry per matrix row
pub fn correction_column<A: SymbolicAlgebra>(
    ctx: &SlowContext<'_, A>,
    reactions: &[Reaction],
    species: &[String],
    slow: &str,
) -> Vec<A::Expr> {
    let alg = ctx.algebra;
    species
        .iter()
        .map(|row| {
            alg.sum(
                reactions
                    .iter()
                    .filter(|r| consumes(r, row) && r.net_change(slow) != 0)
                    .map(|r| alg.mul(ctx.weight(r), alg.integer(r.net_change(slow)))),
            )
        })
        .collect()
}

/// `M` with column `replaced` swapped for the correction column of slow species `slow`
pub fn modify_matrix<A: SymbolicAlgebra>(
    ctx: &SlowContext<'_, A>,
    matrix: &CouplingMatrix<A::Expr>,
    reactions: &[Reaction],
    slow: &str,
    replaced: &str,
) -> Result<CouplingMatrix<A::Expr>, CrnError> {
    let column = correction_column(ctx, reactions, matrix.species(), slow);
    matrix.with_replaced_column(replaced, column)
}

pub fn build_modified_matrix<A: SymbolicAlgebra>(
    ctx: &SlowContext<'_, A>,
    reactions: &[Reaction],
    fast_set: &[String],
    slow: &str,
    replaced: &str,
) -> Result<CouplingMatrix<A::Expr>, CrnError> {
    let matrix = build_matrix(ctx, reactions, fast_set);
    modify_matrix(ctx, &matrix, reactions, slow, replaced)
}

/// simplified determinant in the matrix's own species order
pub fn determinant<A: SymbolicAlgebra>(algebra: &A, matrix: &CouplingMatrix<A::Expr>) -> A::Expr {
    algebra.simplify(algebra.determinant(matrix.rows()))
}
