//! Extract command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rake_core::{Config, Input, KeywordExtractor};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{
    DocumentKeywords, JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter,
};
use crate::progress::ProgressReporter;

/// Source label for inline text
pub const INLINE_SOURCE: &str = "<text>";

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Input files or patterns (supports glob)
    #[arg(
        short,
        long,
        value_name = "FILE/PATTERN",
        required_unless_present = "text",
        conflicts_with = "text"
    )]
    pub input: Vec<String>,

    /// Extract keywords from this text instead of files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Stopword list file (default: embedded SMART list)
    #[arg(short, long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Words must be longer than this to be scored
    #[arg(long, value_name = "N")]
    pub min_word_length: Option<usize>,

    /// Print at most this many ranked groups per document
    #[arg(long, value_name = "N")]
    pub max_groups: Option<usize>,

    /// Separator between suggestions
    #[arg(long, value_name = "SEP")]
    pub separator: Option<String>,

    /// Process documents in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (implies --parallel)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Suggestions and ranked groups as plain text
    Text,
    /// JSON array with one object per document
    Json,
    /// Markdown sections with a ranking table
    Markdown,
}

impl OutputFormat {
    /// Parse a format name as written in the config file
    pub fn from_name(name: &str) -> Result<Self, CliError> {
        <Self as ValueEnum>::from_str(name, true)
            .map_err(|_| CliError::UnknownFormat(name.to_string()))
    }
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting keyword extraction");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        // Stopword problems abort before any document is touched
        let extractor = self.build_extractor(&file_config)?;
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&file_config.output.default_format)?,
        };
        let max_groups = self.max_groups.or(file_config.output.max_groups);

        let documents = match &self.text {
            Some(text) => vec![extract_document(
                &extractor,
                INLINE_SOURCE,
                Input::from_text(text.as_str()),
                max_groups,
            )?],
            None => {
                let files = resolve_patterns(&self.input)?;
                log::info!("Found {} files to process", files.len());
                self.extract_files(&extractor, &files, max_groups)?
            }
        };

        let separator = self
            .separator
            .clone()
            .unwrap_or_else(|| file_config.output.separator.clone());
        let mut formatter =
            self.create_formatter(format, separator, file_config.output.pretty_json)?;
        for doc in &documents {
            formatter.format_document(doc)?;
        }
        formatter.finish()?;

        log::info!("Processed {} documents", documents.len());
        Ok(())
    }

    /// Build the extractor from flags, falling back to the config file
    fn build_extractor(&self, file_config: &CliConfig) -> Result<KeywordExtractor> {
        let mut builder = Config::builder().min_word_length(
            self.min_word_length
                .unwrap_or(file_config.extraction.min_word_length),
        );

        if let Some(path) = self
            .stopwords
            .as_ref()
            .or(file_config.extraction.stopwords.as_ref())
        {
            log::info!("Using stopwords from {}", path.display());
            builder = builder.stopword_file(path);
        }

        let config = builder.build().map_err(core_error)?;
        KeywordExtractor::with_config(config).map_err(core_error)
    }

    fn extract_files(
        &self,
        extractor: &KeywordExtractor,
        files: &[PathBuf],
        max_groups: Option<usize>,
    ) -> Result<Vec<DocumentKeywords>> {
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let process = |path: &PathBuf| -> Result<DocumentKeywords> {
            let doc = extract_file(extractor, path, max_groups)?;
            progress.file_completed(&path.display().to_string());
            Ok(doc)
        };

        let documents = if (self.parallel || self.threads.is_some()) && files.len() > 1 {
            let threads = self.threads.unwrap_or_else(num_cpus::get);
            if threads == 0 {
                return Err(CliError::ConfigError("threads must be greater than 0".into()).into());
            }
            log::debug!("Processing {} files on {} threads", files.len(), threads);

            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build thread pool")?;
            pool.install(|| files.par_iter().map(process).collect::<Result<Vec<_>>>())?
        } else {
            files.iter().map(process).collect::<Result<Vec<_>>>()?
        };

        progress.finish();
        Ok(documents)
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        separator: String,
        pretty_json: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, separator)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, separator)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when run in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn extract_file(
    extractor: &KeywordExtractor,
    path: &Path,
    max_groups: Option<usize>,
) -> Result<DocumentKeywords> {
    let bytes = FileReader::read_bytes(path)?;
    extract_document(
        extractor,
        &path.display().to_string(),
        Input::from_bytes(bytes),
        max_groups,
    )
}

/// Run one document; text that is not UTF-8 yields no keywords
pub fn extract_document(
    extractor: &KeywordExtractor,
    source: &str,
    input: Input,
    max_groups: Option<usize>,
) -> Result<DocumentKeywords> {
    match extractor.process(input) {
        Ok(ranking) => {
            let suggestions = extractor.suggested_keywords(&ranking.groups);
            log::debug!("{}: {} groups", source, ranking.groups.len());
            Ok(DocumentKeywords::new(source, suggestions, ranking, max_groups))
        }
        Err(rake_core::Error::InvalidInput(msg)) => {
            log::warn!("Skipping {}: {}", source, msg);
            Ok(DocumentKeywords::empty(source))
        }
        Err(e) => Err(anyhow::Error::from(e).context(format!("Failed to process {source}"))),
    }
}

fn core_error(err: rake_core::Error) -> anyhow::Error {
    match err {
        rake_core::Error::Configuration(msg) => CliError::ConfigError(msg).into(),
        other => anyhow::Error::from(other).context("Failed to load stopwords"),
    }
}
