//! Configuration options for rendering.
//!
//! - [`RenderOptions`]: starting depth of the debug form and the fault policy
//! - [`FaultPolicy`]: what happens when canonical output is impossible
//!
//! ## Examples
//!
//! ```rust
//! use pdfobj::{to_debug_string_with_options, FaultPolicy, Object, RenderOptions};
//!
//! let options = RenderOptions::new()
//!     .with_indent_level(2)
//!     .with_fault_policy(FaultPolicy::Panic);
//!
//! let text = to_debug_string_with_options(&Object::Integer(1), &options);
//! assert_eq!(text, "1");
//! ```

/// What the canonical renderer does with a value that has no valid syntax.
///
/// Both policies log the fault through `tracing` first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FaultPolicy {
    /// Terminate the process.
    #[default]
    Abort,
    /// Panic, letting the host unwind and recover.
    Panic,
}

/// Configuration options for rendering.
///
/// # Examples
///
/// ```rust
/// use pdfobj::{FaultPolicy, RenderOptions};
///
/// let options = RenderOptions::new();
/// assert_eq!(options.indent_level, 1);
/// assert_eq!(options.fault_policy, FaultPolicy::Abort);
/// ```
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Depth the debug form starts at; nested blocks are indented from here.
    pub indent_level: usize,
    pub fault_policy: FaultPolicy,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            indent_level: 1,
            fault_policy: FaultPolicy::default(),
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the starting depth of the debug form.
    #[must_use]
    pub fn with_indent_level(mut self, level: usize) -> Self {
        self.indent_level = level;
        self
    }

    #[must_use]
    pub fn with_fault_policy(mut self, policy: FaultPolicy) -> Self {
        self.fault_policy = policy;
        self
    }
}
