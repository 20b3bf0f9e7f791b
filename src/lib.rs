pub mod color;
pub mod defaults;
pub mod error;
pub mod logging;
pub mod path;
pub mod table;
pub mod theme;
pub mod validation;
use std::path::Path;

pub use color::{ColorToken, HexColor, SemanticTriple, ShadeKey, ShadeScale};
pub use error::{TokenError, TokenResult};
pub use path::TokenPath;
pub use table::{LookupError, TokenTable};
pub use validation::{ValidationError, ValidationErrorKind};

/// Entrypoint for build steps: resolves the built-in tokens plus the
/// overrides document at `overrides` and hands the table back to the caller,
/// who passes it on to the CSS tooling.
pub fn init(overrides: &Path) -> TokenResult<TokenTable> {
    logging::init();
    tracing::info!(?overrides, "resolving theme tokens");

    let table = theme::resolve_token_table(overrides)?;

    tracing::info!(
        color_families = table.colors().count(),
        extension_tokens = table.extend().token_count(),
        "token table ready"
    );
    Ok(table)
}
