/// Environment representation.
///
/// Defines `Env`, the immutable, shared sequence of bindings that closures
/// capture. Lookup finds the most recent binding of a name.
pub mod env;
/// Value text decoding.
///
/// Takes apart the canonical text of environments and values, including the
/// balanced-delimiter scan that splits a closure into its captured
/// environment and function part.
pub mod codec;

pub mod core;
