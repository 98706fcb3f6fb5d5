use anyhow::Context;
use inflection::{Transform, TransformOptions};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "inflect")]
/// English noun inflection and identifier casing
struct Opts {
    /// One of pluralize, singularize, camelize, underscore, humanize,
    /// capitalize, decapitalize, dasherize, titleize, demodulize, tableize,
    /// classify, foreign_key, ordinalize, collection_name
    transform: Transform,
    /// Words to transform. If none are given, every line of STDIN is
    /// transformed
    words: Vec<String>,
    /// Keep the first letter in lower case (camelize, humanize)
    #[structopt(long)]
    lower_first: bool,
    /// Do not lower-case the input first (camelize, capitalize)
    #[structopt(long)]
    preserve_case: bool,
    /// Join the name and `id` without an underscore (foreign_key)
    #[structopt(long)]
    drop_id_underscore: bool,
    /// Print this word instead of the computed one (pluralize, singularize)
    #[structopt(long = "override")]
    override_with: Option<String>,
    /// Print one JSON object per input instead of the bare result
    #[structopt(long)]
    json: bool,
}

impl Opts {
    fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            lower_first: self.lower_first,
            preserve_case: self.preserve_case,
            drop_id_underscore: self.drop_id_underscore,
            override_with: self.override_with.clone(),
        }
    }
}

#[derive(Serialize)]
struct Inflected<'a> {
    transform: Transform,
    input: &'a str,
    output: &'a str,
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let opts = Opts::from_args();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if opts.words.is_empty() {
        run(&opts, io::stdin().lock().lines(), &mut out)
    } else {
        run(&opts, opts.words.iter().cloned().map(Ok), &mut out)
    }
}

fn run(opts: &Opts, inputs: impl Iterator<Item = io::Result<String>>, out: &mut impl Write) -> anyhow::Result<()> {
    let inflector = inflection::default();
    let options = opts.transform_options();

    for input in inputs {
        let input = input.context("Failed to read from STDIN")?;
        let output = inflector.apply(opts.transform, &input, &options);

        tracing::debug!(transform = %opts.transform, input = input.as_str(), output = output.as_str());

        if opts.json {
            let inflected = Inflected {
                transform: opts.transform,
                input: &input,
                output: &output,
            };

            serde_json::to_writer(&mut *out, &inflected)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{output}")?;
        }
    }

    out.flush().context("Failed to write to STDOUT")?;

    Ok(())
}

fn init_logger() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| eprintln!("Error initializing the global logger: {err}"))
        .ok();
}
