pub mod suurballe;

mod residual;

pub use suurballe::Suurballe;
