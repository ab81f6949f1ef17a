use std::io;

use clap::Parser;

use code_tally::cli::{Cli, ColorChoice};
use code_tally::config::{Config, ConfigLoader, FileConfigLoader};
use code_tally::output::{ColorMode, ErrorOutput, JsonSink, OutputFormat, TextSink};
use code_tally::report::{ReportSink, Reporter};
use code_tally::scanner::{DirectoryScanner, SourceFilter};
use code_tally::{EXIT_ERROR, EXIT_SUCCESS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();
    let errors = ErrorOutput::new(color_choice_to_mode(cli.color));

    let exit_code = match run(&cli, errors) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            errors.print_error(
                e.error_type(),
                &e.to_string(),
                e.detail().as_deref(),
                e.suggestion(),
            );
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli, errors: ErrorOutput) -> code_tally::Result<()> {
    // 1. Load configuration
    let config = load_config(cli)?;

    // 2. Apply CLI argument overrides
    let config = apply_cli_overrides(config, cli)?;

    // 3. Build scanner
    let filter = SourceFilter::new(&config.content.extensions, &config.scanner.exclude)?;
    let scanner = DirectoryScanner::new(filter, config.scanner.exclude_dirs);

    // 4. Scan, count, and report
    let stdout = io::stdout().lock();
    let stderr = io::stderr().lock();
    let mut sink: Box<dyn ReportSink> = match cli.format {
        OutputFormat::Text => Box::new(
            TextSink::new(stdout, stderr, errors)
                .with_verbose(cli.verbose)
                .with_quiet(cli.quiet),
        ),
        OutputFormat::Json => Box::new(JsonSink::new(stdout, stderr, errors)),
    };

    Reporter::new(scanner).run(&cli.root, sink.as_mut())?;
    Ok(())
}

fn load_config(cli: &Cli) -> code_tally::Result<Config> {
    if cli.no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    let result = cli
        .config
        .as_deref()
        .map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;

    if cli.verbose > 0
        && let Some(ref source) = result.source
    {
        eprintln!("Using config: {}", source.display());
    }

    Ok(result.config)
}

fn apply_cli_overrides(mut config: Config, cli: &Cli) -> code_tally::Result<Config> {
    if let Some(ref ext) = cli.ext {
        config.content.extensions.clone_from(ext);
    }
    config
        .scanner
        .exclude_dirs
        .extend(cli.exclude_dirs.iter().cloned());
    config.scanner.exclude.extend(cli.exclude.iter().cloned());

    config.normalize()
}
