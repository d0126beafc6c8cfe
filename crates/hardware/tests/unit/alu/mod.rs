//! ALU tests, grouped like the source submodules.

/// ADD and SUB.
pub mod arithmetic;

/// EQ.
pub mod compare;




/// SHL.
pub mod shifts;
