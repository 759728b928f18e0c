use RustedSciThe::symbolic::symbolic_engine::Expr;
use std::collections::HashMap;

/// numeric value of `expr` with every variable taken from `values`
pub fn eval(expr: &Expr, values: &HashMap<&str, f64>) -> f64 {
    if let Expr::Const(c) = expr {
        return *c;
    }
    let mut names: Vec<String> = expr
        .all_arguments_are_variables()
        .iter()
        .map(|v| v.trim().to_string())
        .collect();
    names.sort();
    names.dedup();
    let args: Vec<f64> = names
        .iter()
        .map(|n| {
            *values
                .get(n.as_str())
                .unwrap_or_else(|| panic!("no value for variable {}", n))
        })
        .collect();
    let vars: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
    let owned = expr.clone();
    let fun = owned.lambdify_owned(vars);
    fun(args)
}
