use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A division by the count (or the count less the degrees of freedom)
    /// would divide by zero
    #[error("Insufficient input: need at least {required} values, got {n}")]
    InsufficientInput { required: usize, n: usize },
    #[error("The count {0} cannot be represented in the float type")]
    CountNotRepresentable(usize),
}
