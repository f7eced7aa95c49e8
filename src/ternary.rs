/// A ternary expression.  Rust's `if` already is one, but `cargo fmt`
/// spreads it over five lines, and the border cases of seam carving
/// (first column, last column, everything between) read far better
/// on one.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
