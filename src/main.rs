use std::error::Error;
use std::path::PathBuf;

use log::{info, warn, LevelFilter};
use structopt::StructOpt;

use sphere_intersect::bench::run_bench;
use sphere_intersect::binding::intersect_values;
use sphere_intersect::camera::Eye;
use sphere_intersect::geometry::Sphere;
use sphere_intersect::logger::init_logger;
use sphere_intersect::parsing::{load_json, CaseData, RenderData};
use sphere_intersect::render::{coverage, render_hits, save_film, Color};

#[derive(Debug, StructOpt)]
#[structopt(name = "sphere_intersect", about = "Ray/sphere intersection tools")]
struct Opt {
    /// error, warn, info, debug or trace
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Run one query from a JSON case file and print the result
    Intersect {
        #[structopt(parse(from_os_str))]
        case: PathBuf,
    },
    /// Render the hit mask of a single sphere
    Render {
        #[structopt(parse(from_os_str))]
        scene: PathBuf,
        /// .png or .exr
        #[structopt(short, long, default_value = "output.png", parse(from_os_str))]
        output: PathBuf,
    },
    /// Time a batch of random queries
    Bench {
        #[structopt(short = "n", long, default_value = "1000000")]
        count: usize,
        #[structopt(long, default_value = "0")]
        seed: u64,
        /// defaults to the number of logical cpus
        #[structopt(long)]
        threads: Option<usize>,
    },
}

fn intersect_case(path: PathBuf) -> Result<(), Box<dyn Error>> {
    let case: CaseData = load_json(&path)?;
    let result = intersect_values(&case.as_args()).map_err(|e| {
        warn!("rejected {}: {}", path.display(), e);
        e
    })?;
    if result.is_null() {
        info!("no hit");
    }
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn render(scene: PathBuf, output: PathBuf) -> Result<(), Box<dyn Error>> {
    let data: RenderData = load_json(&scene)?;
    let eye: Eye = data.eye.into();
    let sphere: Sphere<Color> = data.sphere.into();
    info!(
        "rendering {}x{} from {}",
        data.width,
        data.height,
        scene.display()
    );
    let film = render_hits(&eye, &sphere, data.background, data.width, data.height);
    info!("coverage {:.4}", coverage(&film, data.background));
    save_film(&film, &output)
}

fn bench(count: usize, seed: u64, threads: Option<usize>) -> Result<(), Box<dyn Error>> {
    let threads = threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()?;
    info!("running {} queries on {} threads", count, threads);
    let report = run_bench(count, seed);
    println!(
        "{} rays, {} hits, {:?}, {:.0} rays/s",
        report.count,
        report.hits,
        report.elapsed,
        report.rays_per_second()
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();
    init_logger(opt.log_level);

    match opt.cmd {
        Command::Intersect { case } => intersect_case(case),
        Command::Render { scene, output } => render(scene, output),
        Command::Bench {
            count,
            seed,
            threads,
        } => bench(count, seed, threads),
    }
}
