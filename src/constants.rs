//! Common constants used throughout the Kickstart application.

/// Module path of the template repository itself. Occurrences inside
/// template content are rewritten to the configured module path so generated
/// projects keep no back-reference to the generator.
pub const TEMPLATE_MODULE_PATH: &str = "github.com/kickstart-dev/kickstart";

/// Project name of the template repository itself, rewritten to the
/// configured project name.
pub const TEMPLATE_PROJECT_NAME: &str = "kickstart";

/// Suffix marking files whose content is templated. The suffix is stripped
/// from the rendered file name.
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// Suffix of environment templates picked up by the env-file materializer.
pub const ENV_EXAMPLE_SUFFIX: &str = ".env.example";

/// Default glob patterns excluded from every render. Basenames beginning
/// with `.env.example` are exempt, the materializer depends on them.
pub const DEFAULT_IGNORE_GLOBS: [&str; 5] =
    ["**/.git", "**/node_modules", "**/.DS_Store", "**/bun.lockb", "**/.env*"];

/// Commit message used when initializing the generated repository.
pub const INITIAL_COMMIT_MESSAGE: &str = "chore: initial commit";
