use crate::infra::load_model;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use wildfire_readiness::error::AppError;
use wildfire_readiness::scenario::{estimate, ScenarioRecord, ZipCode};
use wildfire_readiness::scoring::{
    DistanceProbe, FeatureVector, ForestModel, RiskAssessment, RiskModel, ScoringService,
};

/// One representative ZIP per region, in rule-table order.
const DEMO_ZIPS: [&str; 5] = ["95150", "95060", "94110", "93001", "10001"];

#[derive(Args, Debug)]
pub(crate) struct ScenarioArgs {
    /// 5-digit ZIP code (extra characters after the first five are ignored)
    #[arg(long)]
    pub(crate) zip: String,
    /// Also score the generated scenario
    #[arg(long)]
    pub(crate) predict: bool,
    /// Model file to try before the standard locations
    #[arg(long)]
    pub(crate) model: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// Maximum temperature (°C)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) tmax: f64,
    /// Average wind speed (km/h)
    #[arg(long)]
    pub(crate) awnd: f64,
    /// Precipitation (mm)
    #[arg(long)]
    pub(crate) prcp: f64,
    /// Evaporation (mm)
    #[arg(long)]
    pub(crate) evap: f64,
    /// Distance to the nearest historical fire perimeter (km)
    #[arg(long)]
    pub(crate) distance: f64,
    /// Model file to try before the standard locations
    #[arg(long)]
    pub(crate) model: Option<PathBuf>,
}

impl PredictArgs {
    pub(crate) fn features(&self) -> FeatureVector {
        FeatureVector {
            tmax: self.tmax,
            awnd: self.awnd,
            prcp: self.prcp,
            evap: self.evap,
            distance_to_fire_km: self.distance,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Model file to try before the standard locations
    #[arg(long)]
    pub(crate) model: Option<PathBuf>,
    /// Skip the per-region scenario walk-through
    #[arg(long)]
    pub(crate) skip_scenarios: bool,
}

pub(crate) fn run_scenario(args: ScenarioArgs) -> Result<(), AppError> {
    let ScenarioArgs {
        zip,
        predict,
        model,
    } = args;

    let zip = ZipCode::parse(&zip)?;
    let record = estimate(zip);
    render_scenario(zip, &record);

    if predict {
        let service = scoring_service(model)?;
        let assessment = service.assess(record.features)?;
        render_assessment(&assessment);
    }

    Ok(())
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let features = args.features().validate()?;
    let service = scoring_service(args.model)?;
    let assessment = service.assess(features)?;
    render_assessment(&assessment);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        model,
        skip_scenarios,
    } = args;

    let service = scoring_service(model)?;
    println!(
        "Wildfire readiness demo ({}) using {}",
        Local::now().format("%Y-%m-%d %H:%M"),
        service.model().model_type()
    );

    let probe = service.distance_probe()?;
    render_probe(&probe);

    if skip_scenarios {
        return Ok(());
    }

    println!("\nRegional scenarios");
    for raw in DEMO_ZIPS {
        let zip = ZipCode::parse(raw)?;
        let record = estimate(zip);
        let assessment = service.assess(record.features)?;
        println!(
            "- {} ({}): {:.1} km from fire history | p_elevated {:.2} | {} confidence | {}",
            zip,
            record.region.label(),
            record.features.distance_to_fire_km,
            assessment.p_elevated,
            assessment.confidence.label(),
            risk_summary(assessment.risk_level),
        );
    }

    Ok(())
}

fn scoring_service(model: Option<PathBuf>) -> Result<ScoringService<ForestModel>, AppError> {
    let loaded = load_model(model)?;
    tracing::debug!(path = %loaded.path.display(), "model loaded for cli");
    Ok(ScoringService::new(Arc::new(loaded.model)))
}

fn render_scenario(zip: ZipCode, record: &ScenarioRecord) {
    println!("Scenario for ZIP {} ({})", zip, record.region.label());
    println!("  {}", record.scenario);
    println!("  Location: {:.4}, {:.4}", record.lat, record.lon);
    render_features(&record.features);
    println!("  Source: {}", record.source);
}

fn render_features(features: &FeatureVector) {
    println!(
        "  TMAX {:.1} °C | AWND {:.1} km/h | PRCP {:.1} mm | EVAP {:.1} mm | {:.1} km to fire history",
        features.tmax, features.awnd, features.prcp, features.evap, features.distance_to_fire_km
    );
}

fn render_assessment(assessment: &RiskAssessment) {
    println!(
        "\nReadiness: {} (p_elevated {:.2}, {} confidence)",
        risk_summary(assessment.risk_level),
        assessment.p_elevated,
        assessment.confidence.label()
    );
    render_features(&assessment.features);
    println!("Why:");
    for reason in &assessment.why {
        println!("  - {}", reason);
    }
}

fn render_probe(probe: &DistanceProbe) {
    println!("\n{}", probe.test);
    println!(
        "  Fixed weather: TMAX {:.1} | AWND {:.1} | PRCP {:.1} | EVAP {:.1}",
        probe.fixed_weather.tmax,
        probe.fixed_weather.awnd,
        probe.fixed_weather.prcp,
        probe.fixed_weather.evap
    );
    for result in &probe.results {
        println!(
            "  - {:>5.0} km: p_elevated {:.2} (label {})",
            result.distance_km, result.p_elevated, result.risk_level
        );
    }
    let decreasing = probe
        .results
        .windows(2)
        .all(|pair| pair[0].p_elevated >= pair[1].p_elevated);
    println!(
        "  {} [{}]",
        probe.expected,
        if decreasing { "ok" } else { "check model" }
    );
}

fn risk_summary(risk_level: u8) -> &'static str {
    if risk_level == 1 {
        "Elevated"
    } else {
        "Low"
    }
}
