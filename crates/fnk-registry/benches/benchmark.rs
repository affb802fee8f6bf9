use fnk_registry::{Bindings, Expr, ExprPool, FlatExpr, Registry, UnaryOp};

fn main() {
    divan::main();
}

#[divan::bench(args = [100, 10_000])]
fn store_and_get(n: u32) -> i64 {
    let mut registry = Registry::with_capacity(n as usize);
    for i in 0..n {
        registry.store(format!("key_{}", i), i as i64);
    }

    let mut sum = 0;
    for i in 0..n {
        sum += registry
            .get::<i64>(format!("key_{}", i))
            .copied()
            .unwrap_or_default();
    }
    sum
}

#[divan::bench(args = [1_000, 100_000])]
fn eval_flat_chain(depth: u32) -> bool {
    let mut pool = ExprPool::new(depth as usize + 1);
    let mut id = pool.alloc(FlatExpr::Var("x".into()));
    for _ in 0..depth {
        id = pool.alloc(FlatExpr::Unary(UnaryOp::Not, id));
    }

    let mut bindings = Bindings::default();
    bindings.insert("x".into(), true);
    pool.eval(id, &bindings).unwrap()
}

#[divan::bench(args = [1_000])]
fn eval_boxed_chain(depth: u32) -> bool {
    let mut expr = Expr::var("x");
    for _ in 0..depth {
        expr = Expr::not(expr);
    }

    let mut bindings = Bindings::default();
    bindings.insert("x".into(), true);
    expr.eval(&bindings).unwrap()
}
