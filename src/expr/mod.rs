pub mod ast;
pub mod builders;
pub mod eval;

pub use ast::{Expr, Month, Weekday};
pub use builders::{dates, days, months, weekdays, weeks, years};
pub use eval::evaluate;
