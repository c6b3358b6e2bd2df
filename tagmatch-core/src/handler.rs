//! # Handlers
//!
//! A handler is the function registered for one case of a tagged union. It
//! receives the input value exactly as it was passed to the matcher and
//! returns the match result.
//!
//! # Usage Patterns
//!
//! 1. **Closure**: `|v: Value| v["value"].clone()`
//! 2. **Function pointer**: `fn on_none(_: Value) -> String`
//! 3. **Struct implementation**: `impl Handler<MyEvent> for MyHandler`

/// The function invoked for a matched case.
///
/// Handlers must be `Send + Sync` so a built matcher can be shared between
/// threads.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle input of type `{In}`",
    label = "missing `Handler<{In}>` implementation",
    note = "Handlers are `Fn({In}) -> Output` closures or types implementing `Handler<{In}>`."
)]
pub trait Handler<In>: Send + Sync {
    /// The result of the handler.
    type Output;

    /// Executes the handler.
    fn call(&self, input: In) -> Self::Output;
}

// Blanket impl for closures
impl<F, In, Out> Handler<In> for F
where
    F: Fn(In) -> Out + Send + Sync,
{
    type Output = Out;

    fn call(&self, input: In) -> Self::Output {
        (self)(input)
    }
}

/// A type-erased handler, so that one mapping can hold different closures.
pub type BoxHandler<In, Out> = Box<dyn Fn(In) -> Out + Send + Sync>;
