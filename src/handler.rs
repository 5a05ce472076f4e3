/// Application side of the dispatch seam: anything invocable with the
/// positional string arguments extracted from the path.
///
/// The router itself stores handlers as an opaque `T`; this trait is the
/// conventional shape for that `T` when the application wants uniform
/// invocation, e.g. `Box<dyn Handler<Output = Response>>`.
pub trait Handler {
    type Output;

    fn call(&self, args: &[String]) -> Self::Output;
}

impl<F, R> Handler for F
where
    F: Fn(&[String]) -> R,
{
    type Output = R;

    fn call(&self, args: &[String]) -> R {
        self(args)
    }
}
