//! # Symbolic algebra capability
//!
//! The generator pipeline never looks inside an expression. It only creates symbols and
//! integers, combines them and asks for a determinant, a simplification or an exact-zero test.
//! `SymbolicAlgebra` is that narrow interface; `RustedAlgebra` binds it to the `Expr` engine of
//! RustedSciThe.
//!
//! RustedSciThe has no symbolic determinant, so the trait provides a Laplace (cofactor)
//! expansion written purely in terms of the other operations. Entries and minors that are
//! identically zero are skipped, so a zero row or column yields the exact zero expression.
use RustedSciThe::symbolic::symbolic_engine::Expr;
use std::fmt::{Debug, Display};

pub trait SymbolicAlgebra {
    type Expr: Clone + Debug + Display;

    fn symbol(&self, name: &str) -> Self::Expr;
    fn integer(&self, value: i64) -> Self::Expr;
    fn real(&self, value: f64) -> Self::Expr;
    fn add(&self, a: Self::Expr, b: Self::Expr) -> Self::Expr;
    fn mul(&self, a: Self::Expr, b: Self::Expr) -> Self::Expr;
    fn neg(&self, a: Self::Expr) -> Self::Expr;
    fn div(&self, a: Self::Expr, b: Self::Expr) -> Self::Expr;
    fn pow(&self, base: Self::Expr, exponent: Self::Expr) -> Self::Expr;
    fn simplify(&self, a: Self::Expr) -> Self::Expr;
    /// `a` is identically zero, whatever values its symbols take
    fn is_zero(&self, a: &Self::Expr) -> bool;

    /// rate and scaling parameters are either symbol names or numeric literals
    fn parameter(&self, text: &str) -> Self::Expr {
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => self.real(value),
            _ => self.symbol(text),
        }
    }

    fn zero(&self) -> Self::Expr {
        self.integer(0)
    }

    fn one(&self) -> Self::Expr {
        self.integer(1)
    }

    fn sub(&self, a: Self::Expr, b: Self::Expr) -> Self::Expr {
        self.add(a, self.neg(b))
    }

    /// integer power, `x^0 = 1` and `x^1 = x` are not wrapped
    fn powi(&self, base: Self::Expr, exponent: u32) -> Self::Expr {
        match exponent {
            0 => self.one(),
            1 => base,
            n => self.pow(base, self.integer(n as i64)),
        }
    }

    /// sum of the terms, the exact zero for no terms
    fn sum<I>(&self, terms: I) -> Self::Expr
    where
        I: IntoIterator<Item = Self::Expr>,
    {
        terms
            .into_iter()
            .reduce(|acc, term| self.add(acc, term))
            .unwrap_or_else(|| self.zero())
    }

    /// product of the factors, one for no factors
    fn product<I>(&self, factors: I) -> Self::Expr
    where
        I: IntoIterator<Item = Self::Expr>,
    {
        factors
            .into_iter()
            .reduce(|acc, factor| self.mul(acc, factor))
            .unwrap_or_else(|| self.one())
    }

    /// determinant of a square matrix given by rows; the empty matrix has determinant one
    fn determinant(&self, rows: &[Vec<Self::Expr>]) -> Self::Expr {
        match rows.len() {
            0 => self.one(),
            1 => rows[0][0].clone(),
            _ => {
                let mut terms = Vec::new();
                for (col, entry) in rows[0].iter().enumerate() {
                    if self.is_zero(entry) {
                        continue;
                    }
                    let minor: Vec<Vec<Self::Expr>> = rows[1..]
                        .iter()
                        .map(|row| {
                            row.iter()
                                .enumerate()
                                .filter(|(j, _)| *j != col)
                                .map(|(_, e)| e.clone())
                                .collect()
                        })
                        .collect();
                    let minor_det = self.determinant(&minor);
                    if self.is_zero(&minor_det) {
                        continue;
                    }
                    let cofactor = self.mul(entry.clone(), minor_det);
                    terms.push(if col % 2 == 0 {
                        cofactor
                    } else {
                        self.neg(cofactor)
                    });
                }
                self.sum(terms)
            }
        }
    }
}

const ZERO_TEST_POINTS: usize = 4;
const ZERO_TEST_TOLERANCE: f64 = 1e-9;

/// deterministic sample in [0.5, 2.5) for variable `variable` at point `point`
fn sample_value(variable: usize, point: usize) -> f64 {
    let x = (variable as f64 + 1.0) * 0.618_033_988_749_895
        + (point as f64 + 1.0) * 0.414_213_562_373_095;
    0.5 + 2.0 * x.fract()
}

/// `expr` evaluates to zero at every sample point. The simplifier does not cancel terms
/// such as `w·w − w·w`, so identities are recognised numerically.
fn vanishes_identically(expr: &Expr) -> bool {
    let mut names: Vec<String> = expr
        .all_arguments_are_variables()
        .iter()
        .map(|v| v.trim().to_string())
        .collect();
    names.sort();
    names.dedup();
    let vars: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
    let fun = expr.clone().lambdify_owned(vars);
    (0..ZERO_TEST_POINTS).all(|point| {
        let args: Vec<f64> = (0..names.len()).map(|i| sample_value(i, point)).collect();
        let value = fun(args);
        value.is_finite() && value.abs() <= ZERO_TEST_TOLERANCE
    })
}

/// `SymbolicAlgebra` over RustedSciThe's `Expr`
#[derive(Debug, Clone, Copy, Default)]
pub struct RustedAlgebra;

impl SymbolicAlgebra for RustedAlgebra {
    type Expr = Expr;

    fn symbol(&self, name: &str) -> Expr {
        Expr::Var(name.to_string())
    }

    fn integer(&self, value: i64) -> Expr {
        Expr::Const(value as f64)
    }

    fn real(&self, value: f64) -> Expr {
        Expr::Const(value)
    }

    fn add(&self, a: Expr, b: Expr) -> Expr {
        a + b
    }

    fn mul(&self, a: Expr, b: Expr) -> Expr {
        a * b
    }

    fn neg(&self, a: Expr) -> Expr {
        -a
    }

    fn div(&self, a: Expr, b: Expr) -> Expr {
        a / b
    }

    fn pow(&self, base: Expr, exponent: Expr) -> Expr {
        Expr::Pow(Box::new(base), Box::new(exponent))
    }

    fn simplify(&self, a: Expr) -> Expr {
        a.symplify()
    }

    fn is_zero(&self, a: &Expr) -> bool {
        match a {
            Expr::Const(c) => *c == 0.0,
            _ => vanishes_identically(a),
        }
    }
}
