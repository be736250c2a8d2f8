use std::panic::Location;

#[doc(hidden)]
pub const MARKER: &str = "__callmock_caller";

/// Where a call without an explicit method name came from.
///
/// Built by [`caller!`](crate::caller), which records the compiler's type path
/// of a marker function nested in the enclosing function.
#[derive(Debug, Clone, Copy)]
pub struct CallSite {
    path: &'static str,
    location: &'static Location<'static>,
}

impl CallSite {
    #[doc(hidden)]
    pub fn new(path: &'static str, location: &'static Location<'static>) -> Self {
        Self { path, location }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

/// Recovers the short name of the function enclosing a call site.
///
/// Returning `None` means the name could not be determined; dispatch cannot
/// proceed without it.
pub trait CallerResolver: Send + Sync {
    fn short_name(&self, site: &CallSite) -> Option<String>;
}

impl<F> CallerResolver for F
where
    F: Fn(&CallSite) -> Option<String> + Send + Sync,
{
    fn short_name(&self, site: &CallSite) -> Option<String> {
        self(site)
    }
}

/// Takes the trailing identifier of the type path, skipping the marker and
/// closure frames: `<a::MockCounter as a::Counter>::add_one::__callmock_caller`
/// resolves to `add_one`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TypeNameResolver;

impl CallerResolver for TypeNameResolver {
    fn short_name(&self, site: &CallSite) -> Option<String> {
        site.path()
            .rsplit("::")
            .skip_while(|segment| *segment == MARKER || *segment == "{{closure}}")
            .next()
            .filter(|segment| is_identifier(segment))
            .map(str::to_string)
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    chars
        .next()
        .is_some_and(|first| first == '_' || first.is_alphabetic())
        && chars.all(|c| c == '_' || c.is_alphanumeric())
}
