use clap::Parser;
use corrdetect::annotate::{BoxStyle, DEFAULT_CANVAS};
use corrdetect::pipeline::{self, EmptyPolicy, PipelineConfig};
use corrdetect::{Backend, Detection, MatchConfig, Metric, DEFAULT_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Threshold template detector (JSON config driven)")]
struct Cli {
    /// Path to a JSON configuration file; built-in defaults are used if omitted.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
    /// Print the detections as JSON after the summary.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum MetricConfig {
    CcoeffNormed,
    CcorrNormed,
}

impl From<MetricConfig> for Metric {
    fn from(value: MetricConfig) -> Self {
        match value {
            MetricConfig::CcoeffNormed => Metric::CcoeffNormed,
            MetricConfig::CcorrNormed => Metric::CcorrNormed,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum BackendConfig {
    Direct,
    Fft,
}

impl From<BackendConfig> for Backend {
    fn from(value: BackendConfig) -> Self {
        match value {
            BackendConfig::Direct => Backend::Direct,
            BackendConfig::Fft => Backend::Fft,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum EmptyPolicyConfig {
    Proceed,
    Skip,
}

impl From<EmptyPolicyConfig> for EmptyPolicy {
    fn from(value: EmptyPolicyConfig) -> Self {
        match value {
            EmptyPolicyConfig::Proceed => EmptyPolicy::Proceed,
            EmptyPolicyConfig::Skip => EmptyPolicy::Skip,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct MatchConfigJson {
    metric: MetricConfig,
    threshold: f32,
    backend: BackendConfig,
    parallel: bool,
}

impl Default for MatchConfigJson {
    fn default() -> Self {
        Self {
            metric: MetricConfig::CcoeffNormed,
            threshold: DEFAULT_THRESHOLD,
            backend: BackendConfig::Direct,
            parallel: false,
        }
    }
}

impl From<MatchConfigJson> for MatchConfig {
    fn from(value: MatchConfigJson) -> Self {
        Self {
            metric: value.metric.into(),
            threshold: value.threshold,
            backend: value.backend.into(),
            parallel: value.parallel,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    image_path: PathBuf,
    template_path: PathBuf,
    output_path: PathBuf,
    #[serde(rename = "match")]
    match_cfg: MatchConfigJson,
    box_color: [u8; 3],
    box_thickness: u32,
    canvas: Option<(u32, u32)>,
    on_empty: EmptyPolicyConfig,
}

impl Default for Config {
    fn default() -> Self {
        let defaults = PipelineConfig::default();
        let style = BoxStyle::default();
        Self {
            image_path: defaults.image_path,
            template_path: defaults.template_path,
            output_path: defaults.output_path,
            match_cfg: MatchConfigJson::default(),
            box_color: style.color,
            box_thickness: style.thickness,
            canvas: Some(DEFAULT_CANVAS),
            on_empty: EmptyPolicyConfig::Proceed,
        }
    }
}

impl From<Config> for PipelineConfig {
    fn from(value: Config) -> Self {
        Self {
            image_path: value.image_path,
            template_path: value.template_path,
            output_path: value.output_path,
            matching: value.match_cfg.into(),
            style: BoxStyle {
                color: value.box_color,
                thickness: value.box_thickness,
            },
            canvas: value.canvas,
            on_empty: value.on_empty.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct DetectionRecord {
    x: usize,
    y: usize,
    score: f32,
}

impl From<&Detection> for DetectionRecord {
    fn from(value: &Detection) -> Self {
        Self {
            x: value.x,
            y: value.y,
            score: value.score,
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    template_width: usize,
    template_height: usize,
    output_path: Option<PathBuf>,
    detections: Vec<DetectionRecord>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let directive = if cli.trace {
        "corrdetect=info"
    } else {
        "corrdetect=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_target(false)
        .init();

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config: Config = match &cli.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => Config::default(),
    };
    let pipeline_cfg = PipelineConfig::from(config);
    tracing::info!(
        image = %pipeline_cfg.image_path.display(),
        template = %pipeline_cfg.template_path.display(),
        threshold = pipeline_cfg.matching.threshold,
        "starting detection run"
    );
    let report = pipeline::run(&pipeline_cfg, None)?;

    println!(
        "\nTemplate dimensions: Width = {}, Height = {}",
        report.template_width, report.template_height
    );
    println!("Detections found = {}", report.detections.len());

    if cli.json {
        let output = Output {
            template_width: report.template_width,
            template_height: report.template_height,
            output_path: report.output_path.clone(),
            detections: report.detections.iter().map(DetectionRecord::from).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}
