use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;

use crate::annotation::rectangle_outline::draw_rectangle_outline;
use crate::detection::domain::face_detector::FaceDetector;
use crate::display::domain::image_viewer::ImageViewer;
use crate::image_io::domain::image_reader::ImageReader;
use crate::image_io::domain::image_writer::ImageWriter;
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::shared::constants::{MARK_COLOR, WINDOW_NAME};
use crate::shared::face_file_name::face_file_name;
use crate::shared::frame::{Frame, GrayscaleError};
use crate::shared::region::Region;

/// Fatal pipeline failures. Detection and per-face save failures are
/// recoverable and show up in [`DetectionReport`] instead.
#[derive(Error, Debug)]
pub enum DetectFacesError {
    #[error("Source image load failed. Please check file : {path}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error>,
    },
    #[error("Convert image to gray failed: {0}")]
    Grayscale(#[from] GrayscaleError),
    #[error("Displaying result failed: {0}")]
    Display(#[source] Box<dyn std::error::Error>),
}

/// What happened to each detected face.
#[derive(Debug, Default)]
pub struct DetectionReport {
    /// Regions in detector order.
    pub regions: Vec<Region>,
    /// Crops written successfully.
    pub saved: Vec<PathBuf>,
    /// Crops whose write failed.
    pub failed: Vec<PathBuf>,
    /// Set when the detector itself errored and no face was processed.
    pub detection_failed: bool,
}

/// Single-image pipeline: read → gray → detect → crop/save/mark → show.
pub struct DetectFacesUseCase {
    reader: Box<dyn ImageReader>,
    writer: Box<dyn ImageWriter>,
    detector: Box<dyn FaceDetector>,
    viewer: Box<dyn ImageViewer>,
    logger: Box<dyn PipelineLogger>,
}

impl DetectFacesUseCase {
    pub fn new(
        reader: Box<dyn ImageReader>,
        writer: Box<dyn ImageWriter>,
        detector: Box<dyn FaceDetector>,
        viewer: Box<dyn ImageViewer>,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            reader,
            writer,
            detector,
            viewer,
            logger,
        }
    }

    /// Runs the whole pipeline for `image_path`.
    ///
    /// Face crops are written next to the source as `<stem>_face_<n>.<ext>`.
    /// Returns once the viewer has been dismissed.
    pub fn execute(&mut self, image_path: &Path) -> Result<DetectionReport, DetectFacesError> {
        let started = Instant::now();
        let mut frame = self
            .reader
            .read(image_path)
            .map_err(|source| DetectFacesError::ImageLoad {
                path: image_path.to_path_buf(),
                source,
            })?;
        self.logger
            .info(&format!("Loaded source image file: {}", image_path.display()));
        self.logger.timing("load", elapsed_ms(started));

        let started = Instant::now();
        let gray = frame.to_grayscale()?;
        self.logger.timing("grayscale", elapsed_ms(started));

        let started = Instant::now();
        let mut report = DetectionReport::default();
        match self.detector.detect(&gray) {
            Ok(regions) => {
                self.logger.timing("detect", elapsed_ms(started));
                self.logger
                    .info(&format!("{} face is detected.", regions.len()));

                let started = Instant::now();
                for (i, region) in regions.iter().enumerate() {
                    self.handle_face(&mut frame, image_path, i + 1, region, &mut report);
                }
                self.logger.timing("faces", elapsed_ms(started));
                report.regions = regions;
            }
            Err(e) => {
                log::warn!("Detection on {} failed: {e}", image_path.display());
                self.logger.warn(&format!("Face detection failed: {e}"));
                report.detection_failed = true;
            }
        }
        drop(gray);

        self.logger.summary();
        self.logger.info("Press any key to quit.");
        self.viewer
            .show(WINDOW_NAME, &frame)
            .map_err(DetectFacesError::Display)?;

        Ok(report)
    }

    /// Crops from the still-unmarked pixels of this face, saves, then marks it.
    ///
    /// The confirmation line is emitted for every face, whether or not the
    /// write succeeded.
    fn handle_face(
        &mut self,
        frame: &mut Frame,
        image_path: &Path,
        n: usize,
        region: &Region,
        report: &mut DetectionReport,
    ) {
        let face_path = face_file_name(image_path, n);
        log::debug!("Face {n}: {region} -> {}", face_path.display());

        let crop = frame.crop(region);
        match self.writer.write(&face_path, &crop) {
            Ok(()) => report.saved.push(face_path.clone()),
            Err(e) => {
                log::warn!("Writing {} failed: {e}", face_path.display());
                self.logger.warn(&format!(
                    "Store detected face image failed: {}",
                    face_path.display()
                ));
                report.failed.push(face_path.clone());
            }
        }
        // printed even after a failed write, right behind its diagnostic
        self.logger.info(&format!(
            "Detected face has been stored into file: {}",
            face_path.display()
        ));
        drop(crop);

        draw_rectangle_outline(frame, region, MARK_COLOR);
    }
}

fn elapsed_ms(since: Instant) -> f64 {
    since.elapsed().as_secs_f64() * 1000.0
}
