//! Schema validator for Pod workload manifests.
//!
//! The manifest is parsed into a position-annotated tree and walked against a
//! fixed schema. Every violation is collected, each with the file and line it
//! was found at:
//!
//! ```text
//! parse(yaml) → Node → validate(file, &node) → ValidationResult
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! let yaml = r#"
//! apiVersion: v1
//! kind: Pod
//! metadata:
//!   name: web
//! spec:
//!   containers:
//!     - name: app
//!       image: registry.bigbrother.io/app:v1
//!       resources: {}
//! "#;
//!
//! let node = podlint::parse(yaml).expect("well-formed YAML");
//! let result = podlint::validate("pod.yaml", &node);
//! assert!(result.is_valid());
//! ```

pub mod enums;
pub mod error;
pub mod node;
pub mod parse;
pub mod primitives;
pub mod validate;

pub use error::*;
pub use node::{Node, NodeKind, ScalarType};

// Re-export entry-point functions at the crate root for convenience.
pub use parse::parse;
pub use validate::validate;

/// Convenience entry point composing parse → validate.
///
/// # Errors
///
/// Returns `Err(Vec<LintError>)` with a single parse error if the input is not
/// well-formed YAML, or with every validation error otherwise.
///
/// # Example
///
/// ```rust
/// let errors = podlint::load("pod.yaml", "kind: Pod\n").unwrap_err();
/// for e in &errors {
///     eprintln!("{}", e);
/// }
/// assert_eq!(errors[0].to_string(), "pod.yaml:1 apiVersion is required");
/// ```
pub fn load(file: &str, input: &str) -> Result<(), Vec<LintError>> {
    let node = parse::parse(input).map_err(|e| vec![LintError::Parse(e)])?;

    let result = validate::validate(file, &node);
    if !result.errors.is_empty() {
        return Err(result
            .errors
            .into_iter()
            .map(LintError::Validation)
            .collect());
    }

    Ok(())
}
