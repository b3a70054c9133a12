use clap::Parser;

/// Apply a base16 color scheme across application config files.
///
/// Both positionals are optional: with none, the configured scheme is
/// applied; extra positionals are rejected before anything is fetched.
#[derive(Parser)]
#[command(name = "basecoat", version)]
pub struct Cli {
    /// Scheme name to apply instead of the configured one
    pub scheme: Option<String>,

    /// Scheme repository location (skips the schemes-list lookup)
    pub scheme_source: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_arguments() {
        let cli = Cli::parse_from(["basecoat"]);
        assert!(cli.scheme.is_none());
        assert!(cli.scheme_source.is_none());
    }

    #[test]
    fn parse_scheme_only() {
        let cli = Cli::parse_from(["basecoat", "nord"]);
        assert_eq!(cli.scheme.as_deref(), Some("nord"));
        assert!(cli.scheme_source.is_none());
    }

    #[test]
    fn parse_scheme_and_source() {
        let cli = Cli::parse_from(["basecoat", "nord", "https://github.com/user/nord-scheme"]);
        assert_eq!(cli.scheme.as_deref(), Some("nord"));
        assert_eq!(
            cli.scheme_source.as_deref(),
            Some("https://github.com/user/nord-scheme")
        );
    }

    #[test]
    fn too_many_arguments_is_a_usage_error() {
        let result = Cli::try_parse_from(["basecoat", "a", "b", "c"]);
        assert!(result.is_err());
    }
}
