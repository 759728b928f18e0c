//! # Generator Assembler
//!
//! Symbolic approximation of the generator of the slow process:
//!
//! `L = Σ_{r slow-only} Σ_s ν_s(r) · κ(r) · m(r) · df_s
//!    + Σ_s Σ_F Σ_{r produces F} κ(r) · m(r) · (ν_s(r) + det M′(s, F) / det M) · df_s`
//!
//! where `ν_s = product - educt`, `κ` is the scaled rate and `m` the slow monomial (see
//! `coupling_matrix`). `M` and `det M` are computed once per assembly and reused for every
//! `(s, F)` pair. When `det M` is identically zero every ratio is taken as zero and the
//! report is flagged `degenerate`.
use super::algebra::{RustedAlgebra, SymbolicAlgebra};
use super::coupling_matrix::{
    CouplingMatrix, SlowContext, build_matrix, determinant, fast_order, modify_matrix,
};
use crate::Network::classifier::{is_slow_only, produces};
use crate::Network::crn_model::{CRN, CrnError};
use crate::settings::GeneratorSettings;
use RustedSciThe::symbolic::symbolic_engine::Expr;
use log::{debug, info, warn};

/// result of one generator assembly
#[derive(Debug, Clone)]
pub struct GeneratorReport<E> {
    /// network the generator belongs to
    pub name: String,
    pub expression: E,
    /// `det M` was exactly zero, all determinant ratios were replaced by zero
    pub degenerate: bool,
    /// row/column order of the coupling matrix
    pub fast_order: Vec<String>,
}

pub struct GeneratorAssembler<'a, A: SymbolicAlgebra> {
    crn: &'a CRN,
    ctx: SlowContext<'a, A>,
}

impl<'a, A: SymbolicAlgebra> GeneratorAssembler<'a, A> {
    pub fn new(algebra: &'a A, crn: &'a CRN, settings: &'a GeneratorSettings) -> Self {
        Self {
            crn,
            ctx: SlowContext::new(algebra, crn, settings),
        }
    }

    pub fn context(&self) -> &SlowContext<'a, A> {
        &self.ctx
    }

    pub fn coupling_matrix(&self) -> CouplingMatrix<A::Expr> {
        build_matrix(&self.ctx, self.crn.reactions(), self.crn.fast_species())
    }

    /// contribution of reactions that involve no fast species
    pub fn slow_only_sum(&self) -> A::Expr {
        let alg = self.ctx.algebra;
        let fast = self.crn.fast_species();
        let mut terms = Vec::new();
        for reaction in self
            .crn
            .reactions()
            .iter()
            .filter(|r| is_slow_only(r, fast))
        {
            let rate_term = alg.mul(
                self.ctx.scaled_rate(reaction),
                self.ctx.slow_monomial(reaction),
            );
            for s in self.crn.slow_species() {
                let change = reaction.net_change(s);
                if change == 0 {
                    continue;
                }
                terms.push(alg.product([
                    alg.integer(change),
                    rate_term.clone(),
                    self.ctx.derivative_symbol(s),
                ]));
            }
        }
        alg.sum(terms)
    }

    /// Contribution of reactions producing a fast species, corrected by the determinant
    /// ratios. Returns the sum and whether `det M` was exactly zero.
    pub fn slow_fast_coupling_sum(&self) -> Result<(A::Expr, bool), CrnError> {
        let alg = self.ctx.algebra;
        let reactions = self.crn.reactions();
        let fast = self.crn.fast_species();
        let matrix = self.coupling_matrix();
        let det_m = determinant(alg, &matrix);
        let degenerate = !matrix.species().is_empty() && alg.is_zero(&det_m);
        if degenerate {
            warn!(
                "coupling matrix of '{}' is singular, determinant ratios are set to zero",
                self.crn.name()
            );
        }
        debug!("det M = {}", det_m);

        let mut terms = Vec::new();
        for s in self.crn.slow_species() {
            for f in matrix.species() {
                let producing: Vec<_> = reactions.iter().filter(|r| produces(r, f, fast)).collect();
                if producing.is_empty() {
                    continue;
                }
                let ratio = if degenerate {
                    alg.zero()
                } else {
                    let modified = modify_matrix(&self.ctx, &matrix, reactions, s, f)?;
                    let det_modified = determinant(alg, &modified);
                    if alg.is_zero(&det_modified) {
                        alg.zero()
                    } else {
                        alg.div(det_modified, det_m.clone())
                    }
                };
                debug!("ratio for ({}, {}) = {}", s, f, ratio);
                for reaction in producing {
                    let change = reaction.net_change(s);
                    let factor = match (change, alg.is_zero(&ratio)) {
                        (0, true) => continue,
                        (0, false) => ratio.clone(),
                        (_, true) => alg.integer(change),
                        (_, false) => alg.add(alg.integer(change), ratio.clone()),
                    };
                    terms.push(alg.product([
                        self.ctx.scaled_rate(reaction),
                        self.ctx.slow_monomial(reaction),
                        factor,
                        self.ctx.derivative_symbol(s),
                    ]));
                }
            }
        }
        Ok((alg.sum(terms), degenerate))
    }

    pub fn report(&self) -> Result<GeneratorReport<A::Expr>, CrnError> {
        let alg = self.ctx.algebra;
        let slow_only = self.slow_only_sum();
        let (coupling, degenerate) = self.slow_fast_coupling_sum()?;
        let mut expression = alg.add(slow_only, coupling);
        if self.ctx.settings.simplify_result {
            expression = alg.simplify(expression);
        }
        info!("generator of '{}' assembled", self.crn.name());
        Ok(GeneratorReport {
            name: self.crn.name().to_string(),
            expression,
            degenerate,
            fast_order: fast_order(self.crn.fast_species()),
        })
    }

    /// `simplify(slow_only_sum + slow_fast_coupling_sum)`
    pub fn total_generator(&self) -> Result<A::Expr, CrnError> {
        Ok(self.report()?.expression)
    }
}

impl CRN {
    /// generator with default settings over RustedSciThe expressions
    pub fn total_generator(&self) -> Result<Expr, CrnError> {
        self.generator_report(&GeneratorSettings::default())
            .map(|report| report.expression)
    }

    pub fn generator_report(
        &self,
        settings: &GeneratorSettings,
    ) -> Result<GeneratorReport<Expr>, CrnError> {
        settings.validate()?;
        GeneratorAssembler::new(&RustedAlgebra, self, settings).report()
    }

    /// one report per connected sub-network
    pub fn component_generators(
        &self,
        settings: &GeneratorSettings,
    ) -> Result<Vec<GeneratorReport<Expr>>, CrnError> {
        self.sub_crns()
            .iter()
            .map(|sub| sub.generator_report(settings))
            .collect()
    }
}
