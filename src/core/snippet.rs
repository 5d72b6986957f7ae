//! The contract every runnable snippet implements, and the link-time
//! registration table used to discover them.

use anyhow::Result;

/// A small, independently implemented program that the runner can execute.
pub trait Snippet {
    /// Short name used for lookup. Must be non-empty; compared case-insensitively.
    fn name(&self) -> &str;

    /// One-line description shown in listings. Empty by default.
    fn description(&self) -> &str {
        ""
    }

    /// Run the snippet with the arguments that followed its name.
    ///
    /// # Errors
    /// Any error is reported by the dispatcher against this snippet's key.
    fn execute(&self, args: &[String]) -> Result<()>;
}

/// Builds a snippet instance. Construction is allowed to fail.
pub type SnippetFactory = fn() -> Result<Box<dyn Snippet>>;

/// Registration record submitted by [`register_snippet!`](crate::register_snippet).
#[derive(Debug, Clone, Copy)]
pub struct SnippetDescriptor {
    /// Raw namespace, e.g. a `module_path!()` or `"snippets.second_week"`.
    pub group: &'static str,
    /// Declared type name; names the snippet when it cannot be constructed.
    pub type_name: &'static str,
    /// Platform label the snippet needs, if any.
    pub required_platform: Option<&'static str>,
    pub factory: SnippetFactory,
}

impl SnippetDescriptor {
    #[must_use]
    pub const fn new(group: &'static str, type_name: &'static str, factory: SnippetFactory) -> Self {
        Self {
            group,
            type_name,
            required_platform: None,
            factory,
        }
    }

    #[must_use]
    pub const fn with_platform(mut self, platform: &'static str) -> Self {
        self.required_platform = Some(platform);
        self
    }
}

inventory::collect!(SnippetDescriptor);

/// All descriptors registered in this binary, in unspecified order.
pub fn registered() -> impl Iterator<Item = &'static SnippetDescriptor> {
    inventory::iter::<SnippetDescriptor>.into_iter()
}

/// Registers a snippet type for discovery.
///
/// ```ignore
/// register_snippet!(hello::HelloWorld);
/// register_snippet!(broken::BrokenSnippet => broken::BrokenSnippet::try_new);
/// register_snippet!(mac::MacTest, group = "snippets.mac_only", platform = "Mac");
/// ```
///
/// Without `=> ctor` the type is built with `Default`. The group defaults to
/// the registering module's path.
#[macro_export]
macro_rules! register_snippet {
    ($ty:ty => $ctor:path $(, group = $group:expr)? $(, platform = $platform:expr)? $(,)?) => {
        $crate::inventory::submit! {
            $crate::core::snippet::SnippetDescriptor {
                group: $crate::__snippet_opt!($({$group})?, module_path!()),
                type_name: stringify!($ty),
                required_platform: $crate::__snippet_opt_some!($({$platform})?),
                factory: || {
                    let snippet: $ty = $ctor()?;
                    ::std::result::Result::Ok(
                        ::std::boxed::Box::new(snippet) as ::std::boxed::Box<dyn $crate::core::snippet::Snippet>,
                    )
                },
            }
        }
    };
    ($ty:ty $(, group = $group:expr)? $(, platform = $platform:expr)? $(,)?) => {
        $crate::inventory::submit! {
            $crate::core::snippet::SnippetDescriptor {
                group: $crate::__snippet_opt!($({$group})?, module_path!()),
                type_name: stringify!($ty),
                required_platform: $crate::__snippet_opt_some!($({$platform})?),
                factory: || {
                    let snippet = <$ty as ::std::default::Default>::default();
                    ::std::result::Result::Ok(
                        ::std::boxed::Box::new(snippet) as ::std::boxed::Box<dyn $crate::core::snippet::Snippet>,
                    )
                },
            }
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __snippet_opt {
    (, $default:expr) => {
        $default
    };
    ({$val:expr}, $default:expr) => {
        $val
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __snippet_opt_some {
    () => {
        ::std::option::Option::None
    };
    ({$val:expr}) => {
        ::std::option::Option::Some($val)
    };
}
