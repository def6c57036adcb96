use std::fmt;
use std::sync::Arc;

/// Cloneable event callback handed to components through props.
///
/// ```ignore
/// let email = State::new(String::new());
/// let on_change = Callback::new({
///     let email = email.clone();
///     move |ev: ChangeEvent| email.set(ev.value)
/// });
/// ```
pub struct Callback<A>(Arc<dyn Fn(A) + Send + Sync>);

impl<A> Callback<A> {
    pub fn new(f: impl Fn(A) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Invoke the callback.
    pub fn emit(&self, arg: A) {
        (self.0)(arg)
    }
}

impl<A> Clone for Callback<A> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<A> fmt::Debug for Callback<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

impl<A, F> From<F> for Callback<A>
where
    F: Fn(A) + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}
