//! Code generation from layout DSL documents to native UI frameworks.
//!
//! A document is parsed into a typed node tree, its layout concerns are
//! resolved into backend-neutral decisions, and a shared emitter walks the
//! tree while a per-framework [`CodeGenerator`] spells each decision.
//!
//! # Features
//!
//! - `compose` - Generate Kotlin Compose code for Android
//! - `swiftui` - Generate SwiftUI code for iOS/macOS
//!
//! # Example
//!
//! ```ignore
//! use screengen_codegen::{compile, Target};
//!
//! let code = compile(r#"{"type": "TEXT", "text": "Hello"}"#, Target::SwiftUI)?;
//! println!("{}", code);
//! ```

pub mod emitter;
pub mod error;
pub mod generators;
pub mod layout;
pub mod target;

use screengen_core::Document;

pub use emitter::{EmitContext, Emitter, FramePlan, OverlayBlock, RepeatScope};
pub use error::{CodegenError, Result};
pub use generators::{CodeGenerator, ScreenData, TemplateEngine, BODY_LEVEL};
pub use layout::{ContainerShape, OverlayAlignment, SizeFragment};
pub use target::{generator, Target};

// Re-export framework-specific generators
#[cfg(feature = "compose")]
pub use generators::ComposeGenerator;

#[cfg(feature = "swiftui")]
pub use generators::SwiftUIGenerator;

/// Compile JSON source text into a complete source file for `target`.
pub fn compile(source: &str, target: Target) -> Result<String> {
    let document = Document::from_json(source)?;
    compile_document(&document, target)
}

/// Compile an already parsed document.
pub fn compile_document(document: &Document, target: Target) -> Result<String> {
    log::debug!("compiling document for {target}");
    generator(target).generate_screen(document)
}
