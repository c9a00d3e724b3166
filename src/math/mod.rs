//! Numeric approximations shared by the palette tooling

/// Error function, normal CDF, probit and averaging helpers
pub mod probability;
/// Fast `f64` sine, cosine, arctangent, arcsine and arccosine
pub mod trig;
/// Fast `f32` counterparts of [`trig`]
pub mod trig32;
