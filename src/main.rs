// main.rs
//
// Evaluate one wave drive and write its plan-view sketch.
//
//   wavedrive [inputs.json] [output-dir]
//
// Without an inputs file the dialog defaults are used. Set RUST_LOG=debug for details.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use wavedrive::io::read_inputs;
use wavedrive::sketch::PlanSketch;
use wavedrive::{WaveDriveInputs, evaluate};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run() {
        Ok(code) => code,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        },
    }
}

fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let inputs = match args.next() {
        Some(path) => read_inputs(&path)?,
        None => WaveDriveInputs::default(),
    };
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "out".to_string()));

    let evaluation = evaluate(&inputs)?;
    let report = evaluation.feasibility;
    let Some(drive) = evaluation.drive else {
        tracing::error!(
            internal_radius = report.internal_radius,
            min_cycloid_radius = report.min_cycloid_radius,
            "infeasible: increase cycloid_diameter or enable use_minimal_diameter"
        );
        return Ok(ExitCode::FAILURE);
    };

    let params = drive.params();
    tracing::info!(
        component = %drive.component_name(),
        lobes = params.lobe_count(),
        eccentricity = params.eccentricity(),
        cycloid_diameter = params.cycloid_diameter(),
        cam_radius = params.cam_radius(),
        extrusion_height = drive.extrusion_height(),
        "wave drive evaluated"
    );

    fs::create_dir_all(&out_dir)?;
    fs::write(out_dir.join("inputs.json"), params.to_inputs().to_json()?)?;

    let sketch = PlanSketch::from_drive(&drive);

    #[cfg(feature = "svg-io")]
    {
        let path = out_dir.join("wavedrive.svg");
        fs::write(&path, sketch.to_svg())?;
        tracing::info!(path = %path.display(), "wrote svg");
    }

    #[cfg(feature = "dxf-io")]
    {
        let path = out_dir.join("wavedrive.dxf");
        fs::write(&path, sketch.to_dxf()?)?;
        tracing::info!(path = %path.display(), "wrote dxf");
    }

    #[cfg(not(any(feature = "svg-io", feature = "dxf-io")))]
    let _ = sketch;

    Ok(ExitCode::SUCCESS)
}
