/// Describes what the hosting framework is able to do on its own, so that
/// extensions can decide whether their wiring is needed at all.
///
/// Historically this decision was a version-string comparison against the
/// host ("2.3 or later"). A version number is the host's business; what an
/// extension actually needs to know is the capability behind it, so the host
/// adapter reports that directly.
///
/// ## Examples
///
/// ```
/// use ckanext_toolkit::HostCapabilities;
///
/// // A legacy host that relies on extensions to wire their own middleware.
/// let legacy = HostCapabilities::default();
/// assert!(!legacy.injects_middleware_directly());
///
/// // A modern host that wires middleware into its own stack.
/// let modern = HostCapabilities::new(true);
/// assert!(modern.injects_middleware_directly());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostCapabilities {
    injects_middleware_directly: bool,
}

impl HostCapabilities {
    /// Creates a capability record with the given middleware-injection
    /// capability.
    pub fn new(injects_middleware_directly: bool) -> Self {
        Self {
            injects_middleware_directly,
        }
    }

    /// Reports whether the host wires middleware into its own stack without
    /// extension help. When it does, middleware-decorating extensions are
    /// expected to stand down entirely.
    pub fn injects_middleware_directly(&self) -> bool {
        self.injects_middleware_directly
    }
}

impl AsRef<HostCapabilities> for HostCapabilities {
    fn as_ref(&self) -> &HostCapabilities {
        self
    }
}
