//! [`Handler`] abstractions.

/// Executable handler.
///
/// Execution is synchronous and runs to completion: a [`Handler`] either
/// applies its effect entirely or rejects with [`Handler::Err`] leaving its
/// state untouched.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    ///
    /// # Errors
    ///
    /// If the provided arguments are rejected by this [`Handler`].
    fn execute(&mut self, args: Args) -> Result<Self::Ok, Self::Err>;
}
