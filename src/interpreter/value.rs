/// Runtime value representation.
///
/// Defines the `Value` enum produced by evaluation, its type names used in
/// error messages, and its printed form.
pub mod core;
