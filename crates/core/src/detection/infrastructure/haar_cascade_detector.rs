//! Haar cascade face detector backed by OpenCV's `CascadeClassifier`.
//!
//! Cascade evaluation, the multi-scale window scan and neighbour grouping
//! all happen inside OpenCV. This module only marshals frames in and
//! rectangles out.
use std::path::{Path, PathBuf};

use opencv::core::{Rect, Size, Vector};
use opencv::objdetect::CascadeClassifier;
use opencv::prelude::*;
use thiserror::Error;

use crate::detection::domain::face_detector::FaceDetector;
use crate::shared::frame::Frame;
use crate::shared::mat_conversion::gray_to_mat;
use crate::shared::region::Region;

#[derive(Error, Debug)]
pub enum CascadeLoadError {
    #[error("cascade file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to load cascade {path}: {source}")]
    OpenCv {
        path: PathBuf,
        #[source]
        source: opencv::Error,
    },
    #[error("cascade {0} contains no classifier stages")]
    Empty(PathBuf),
}

/// Tuning for `detectMultiScale`.
///
/// Defaults mirror the classic C API (`cvHaarDetectObjects`): 10% scale
/// steps, 3 neighbours, no size limits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectionParams {
    pub scale_factor: f64,
    pub min_neighbors: i32,
    pub flags: i32,
    /// `(width, height)`; `(0, 0)` disables the limit.
    pub min_size: (i32, i32),
    /// `(width, height)`; `(0, 0)` disables the limit.
    pub max_size: (i32, i32),
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            scale_factor: 1.1,
            min_neighbors: 3,
            flags: 0,
            min_size: (0, 0),
            max_size: (0, 0),
        }
    }
}

pub struct HaarCascadeDetector {
    classifier: CascadeClassifier,
    params: DetectionParams,
}

impl HaarCascadeDetector {
    /// Loads a cascade definition from an OpenCV XML file.
    ///
    /// OpenCV accepts a missing or malformed file silently and returns an
    /// empty classifier, so both cases are checked here.
    pub fn load(path: &Path, params: DetectionParams) -> Result<Self, CascadeLoadError> {
        if !path.is_file() {
            return Err(CascadeLoadError::NotFound(path.to_path_buf()));
        }

        let classifier = CascadeClassifier::new(&path.to_string_lossy()).map_err(|source| {
            CascadeLoadError::OpenCv {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let empty = classifier.empty().map_err(|source| CascadeLoadError::OpenCv {
            path: path.to_path_buf(),
            source,
        })?;
        if empty {
            return Err(CascadeLoadError::Empty(path.to_path_buf()));
        }

        log::debug!("Loaded cascade {} with {params:?}", path.display());
        Ok(Self { classifier, params })
    }

    pub fn params(&self) -> &DetectionParams {
        &self.params
    }
}

impl FaceDetector for HaarCascadeDetector {
    fn detect(&mut self, gray: &Frame) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
        let gray_img = gray.image().as_luma8().ok_or_else(|| {
            format!(
                "cascade detection expects an 8-bit gray image, got {:?}",
                gray.color()
            )
        })?;

        let mat = gray_to_mat(gray_img)?;
        let mut faces: Vector<Rect> = Vector::new();
        let p = self.params;
        self.classifier.detect_multi_scale(
            &mat,
            &mut faces,
            p.scale_factor,
            p.min_neighbors,
            p.flags,
            Size::new(p.min_size.0, p.min_size.1),
            Size::new(p.max_size.0, p.max_size.1),
        )?;

        let regions: Vec<Region> = faces
            .iter()
            .map(|r| Region::new(r.x, r.y, r.width, r.height))
            .collect();
        for r in &regions {
            log::debug!("Cascade hit: {r}");
        }
        Ok(regions)
    }
}
