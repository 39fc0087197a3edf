/// Lazily resolvable view module
///
/// The resolver threads module references through to the route table and
/// never calls `resolve`. Loading happens in the consuming router, once a
/// navigation actually lands on the route.
///
/// # Examples
///
/// ```
/// use viewroute::ViewModule;
///
/// struct Inline(&'static str);
///
/// impl ViewModule for Inline {
///     type Component = String;
///     type Error = std::convert::Infallible;
///
///     fn resolve(&self) -> Result<String, Self::Error> {
///         Ok(self.0.to_string())
///     }
/// }
///
/// assert_eq!(Inline("<template/>").resolve().unwrap(), "<template/>");
/// ```
pub trait ViewModule {
    /// What the module resolves into (a component, its source, a handle)
    type Component;
    type Error;

    /// Loads the module on demand
    fn resolve(&self) -> Result<Self::Component, Self::Error>;
}

impl<T: ViewModule + ?Sized> ViewModule for &T {
    type Component = T::Component;
    type Error = T::Error;

    fn resolve(&self) -> Result<Self::Component, Self::Error> {
        (**self).resolve()
    }
}

impl<T: ViewModule + ?Sized> ViewModule for std::sync::Arc<T> {
    type Component = T::Component;
    type Error = T::Error;

    fn resolve(&self) -> Result<Self::Component, Self::Error> {
        (**self).resolve()
    }
}
