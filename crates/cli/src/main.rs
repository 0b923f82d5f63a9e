use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use facedetector_core::detection::infrastructure::haar_cascade_detector::{
    DetectionParams, HaarCascadeDetector,
};
use facedetector_core::display::infrastructure::highgui_viewer::HighguiViewer;
use facedetector_core::image_io::infrastructure::image_file_reader::ImageFileReader;
use facedetector_core::image_io::infrastructure::image_file_writer::ImageFileWriter;
use facedetector_core::pipeline::detect_faces_use_case::DetectFacesUseCase;
use facedetector_core::pipeline::pipeline_logger::StdoutPipelineLogger;
use facedetector_core::shared::constants::{CASCADE_FILE, CASCADE_SOURCE_HINT, DEFAULT_IMAGE_FILE};

/// Detects faces in an image, saves each face to its own file and shows
/// the marked-up result.
#[derive(Parser)]
#[command(name = "facedetector", version)]
struct Cli {
    /// Source image; face crops are written next to it.
    #[arg(default_value = DEFAULT_IMAGE_FILE)]
    image: PathBuf,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let detector = load_detector(Path::new(CASCADE_FILE))?;

    let mut use_case = DetectFacesUseCase::new(
        Box::new(ImageFileReader::new()),
        Box::new(ImageFileWriter::new()),
        Box::new(detector),
        Box::new(HighguiViewer::new()),
        Box::new(StdoutPipelineLogger::new()),
    );
    let report = use_case.execute(&cli.image)?;

    log::info!(
        "{} face(s) found, {} saved, {} failed",
        report.regions.len(),
        report.saved.len(),
        report.failed.len()
    );
    Ok(())
}

fn load_detector(path: &Path) -> Result<HaarCascadeDetector, Box<dyn std::error::Error>> {
    match HaarCascadeDetector::load(path, DetectionParams::default()) {
        Ok(detector) => {
            println!(
                "Loaded face detection cascade classifier: {}",
                path.display()
            );
            log::debug!("Detection parameters: {:?}", detector.params());
            Ok(detector)
        }
        Err(e) => {
            log::error!("{e}");
            Err(format!(
                "Cascade classifier load failed: {}\n{CASCADE_SOURCE_HINT}",
                path.display()
            )
            .into())
        }
    }
}
