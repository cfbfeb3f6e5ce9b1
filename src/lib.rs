//! Kickstart is a project scaffolding system for full-stack monorepos.
//! It materializes a customized project from an embedded template bundle:
//! path-based skip rules, conditional content blocks, token substitution,
//! derived environment files and optional git initialization.

/// Command-line interface module for the Kickstart application
pub mod cli;

/// Conditional `{{IF_<FLAG>}}` block expansion in template content
pub mod conditions;

/// Scaffold configuration value consumed by the engine
pub mod config;

/// Common constants used throughout the Kickstart application
pub mod constants;

/// Derivation of `.env` files from rendered `.env.example` templates
pub mod envfile;

/// Error types and handling for the Kickstart application
pub mod error;

/// Git repository initialization for generated projects
pub mod git;

/// Logger configuration
pub mod logger;

/// Tree rendering: walks a source tree and writes the destination tree
pub mod renderer;

/// Destination pre-flight checks against destructive writes
pub mod safety;

/// Scaffolding orchestration
/// Combines all components to generate the final output
pub mod scaffold;

/// Path-based skip rules for excluding template entries
pub mod skip;

/// Read-only source tree abstraction (embedded, on-disk and in-memory)
pub mod source;

/// Literal token substitution in template content
pub mod tokens;

/// Input validation for project names, module paths and destinations
pub mod validate;
