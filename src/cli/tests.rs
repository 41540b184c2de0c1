#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_parse_build_defaults() {
        let cli = Cli::try_parse_from(["kiln", "build"]).unwrap();
        assert!(!cli.verbose);
        assert!(!cli.quiet);

        match cli.command {
            Command::Build(args) => {
                assert!(!args.common.prod);
                assert!(args.common.config.is_none());
                assert!(args.common.out_dir.is_none());
            }
            _ => panic!("expected build command"),
        }
    }

    #[test]
    fn test_parse_serve_with_options() {
        let cli = Cli::try_parse_from([
            "kiln", "serve", "--prod", "--port", "8080", "--out-dir", "public",
        ])
        .unwrap();

        match cli.command {
            Command::Serve(args) => {
                assert!(args.common.prod);
                assert_eq!(args.port, Some(8080));
                assert_eq!(args.common.out_dir, Some(PathBuf::from("public")));
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["kiln", "--verbose", "serve"]).unwrap();
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["kiln", "build", "--quiet"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_verbose_quiet_conflict() {
        assert!(Cli::try_parse_from(["kiln", "--verbose", "--quiet", "build"]).is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["kiln"]).is_err());
    }

    #[test]
    fn test_parse_config_path() {
        let cli = Cli::try_parse_from(["kiln", "build", "--config", "custom.json"]).unwrap();
        match cli.command {
            Command::Build(args) => {
                assert_eq!(args.common.config, Some(PathBuf::from("custom.json")));
            }
            _ => panic!("expected build command"),
        }
    }
}
