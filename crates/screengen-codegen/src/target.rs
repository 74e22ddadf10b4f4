//! Target framework selection.

use std::fmt;
use std::str::FromStr;

use crate::error::CodegenError;
use crate::generators::CodeGenerator;

/// A UI framework the compiler can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Kotlin Jetpack Compose.
    #[cfg(feature = "compose")]
    Compose,
    /// SwiftUI.
    #[cfg(feature = "swiftui")]
    SwiftUI,
}

impl Target {
    /// Every target enabled in this build.
    pub const ALL: &'static [Target] = &[
        #[cfg(feature = "compose")]
        Target::Compose,
        #[cfg(feature = "swiftui")]
        Target::SwiftUI,
    ];

    /// Name accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match *self {
            #[cfg(feature = "compose")]
            Target::Compose => "compose",
            #[cfg(feature = "swiftui")]
            Target::SwiftUI => "swiftui",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Target {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::ALL
            .iter()
            .copied()
            .find(|target| target.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CodegenError::UnknownTarget(s.to_string()))
    }
}

/// Create the generator for a target.
pub fn generator(target: Target) -> Box<dyn CodeGenerator> {
    match target {
        #[cfg(feature = "compose")]
        Target::Compose => Box::new(crate::generators::ComposeGenerator::new()),
        #[cfg(feature = "swiftui")]
        Target::SwiftUI => Box::new(crate::generators::SwiftUIGenerator::new()),
    }
}
