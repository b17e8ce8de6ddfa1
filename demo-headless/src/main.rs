use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use vector3d_core::{DomainError, Vector3D};

/// Prints the basic vector algebra results for two vectors
#[derive(Parser, Debug)]
#[command(name = "vector3d-demo")]
#[command(about = "3D vector algebra demo", long_about = None)]
struct Args {
    /// First vector components
    #[arg(
        long,
        num_args = 3,
        value_names = ["X", "Y", "Z"],
        allow_negative_numbers = true,
        default_values_t = [1.0, 2.0, 3.0]
    )]
    v1: Vec<f64>,

    /// Second vector components
    #[arg(
        long,
        num_args = 3,
        value_names = ["X", "Y", "Z"],
        allow_negative_numbers = true,
        default_values_t = [4.0, 5.0, 6.0]
    )]
    v2: Vec<f64>,

    /// Scalar to multiply v1 by
    #[arg(short, long, default_value_t = 2.0, allow_negative_numbers = true)]
    scalar: f64,
}

fn to_vector(components: &[f64]) -> Vector3D {
    Vector3D::new(components[0], components[1], components[2])
}

/// Render a fallible result, logging failures instead of aborting the run
fn describe<T: std::fmt::Display>(label: &str, result: Result<T, DomainError>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(e) => {
            warn!("{label} failed: {e}");
            format!("error: {e}")
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let v1 = to_vector(&args.v1);
    let v2 = to_vector(&args.v2);

    for line in report(v1, v2, args.scalar) {
        println!("{line}");
    }
}

/// Sample output lines; plain `f64` results use their round-trip form
fn report(v1: Vector3D, v2: Vector3D, scalar: f64) -> Vec<String> {
    vec![
        format!("v1: {v1}"),
        format!("v2: {v2}"),
        format!("Magnitude of v1: {:?}", v1.magnitude()),
        format!("Normalized v1: {}", describe("normalize", v1.normalize())),
        format!("v1 + v2: {}", v1 + v2),
        format!("v1 * {}: {}", scalar, v1 * scalar),
        format!("Dot product of v1 and v2: {:?}", v1.dot_product(v2)),
        format!(
            "Angle between v1 and v2: {}",
            describe(
                "angle_between",
                v1.angle_between(v2).map(|angle| format!("{:?}", *angle))
            )
        ),
        format!("Cross product of v1 and v2: {}", v1.cross_product(v2)),
    ]
}
